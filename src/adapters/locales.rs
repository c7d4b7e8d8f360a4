use crate::domain::model::Locale;
use crate::domain::ports::LocaleSource;

/// Fixed locale set for hosts where the default locale is known up front.
#[derive(Debug, Clone)]
pub struct StaticLocales {
    default: Locale,
}

impl StaticLocales {
    pub fn new(default: Locale) -> Self {
        Self { default }
    }
}

impl LocaleSource for StaticLocales {
    fn default_locale(&self) -> Locale {
        self.default.clone()
    }
}
