use crate::domain::model::{DialogText, Locale, NormalizeMode};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{EditorError, Result};
use crate::utils::validation::{
    validate_locale, validate_non_empty_string, validate_path, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub editor: EditorSection,
    pub store: StoreSection,
    pub locales: LocalesSection,
    pub normalization: Option<NormalizationSection>,
    pub dialogs: Option<DialogsSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSection {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalesSection {
    pub active: String,
    pub default: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizationSection {
    pub strict: Option<bool>,
}

/// Optional overrides for the dialog titles and labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogsSection {
    pub add_title: Option<String>,
    pub edit_title: Option<String>,
    pub bulk_edit_title: Option<String>,
    pub clear_title: Option<String>,
    pub clear_message: Option<String>,
    pub clear_confirm_label: Option<String>,
    pub clear_cancel_label: Option<String>,
}

impl ProfileConfig {
    /// Loads a profile from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EditorError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses a profile from a TOML string, after environment substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| EditorError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment variables; unknown
    /// variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("editor.name", &self.editor.name)?;
        validate_path("store.path", &self.store.path)?;
        validate_locale("locales.active", &self.locales.active)?;
        validate_locale("locales.default", &self.locales.default)?;

        if let Some(dialogs) = &self.dialogs {
            let overrides = [
                ("dialogs.add_title", &dialogs.add_title),
                ("dialogs.edit_title", &dialogs.edit_title),
                ("dialogs.bulk_edit_title", &dialogs.bulk_edit_title),
                ("dialogs.clear_title", &dialogs.clear_title),
                ("dialogs.clear_message", &dialogs.clear_message),
                ("dialogs.clear_confirm_label", &dialogs.clear_confirm_label),
                ("dialogs.clear_cancel_label", &dialogs.clear_cancel_label),
            ];
            for (field, value) in overrides {
                if let Some(value) = value {
                    validate_non_empty_string(field, value)?;
                }
            }
        }

        Ok(())
    }

    pub fn strict_enabled(&self) -> bool {
        self.normalization
            .as_ref()
            .and_then(|n| n.strict)
            .unwrap_or(false)
    }

    pub fn normalize_mode(&self) -> NormalizeMode {
        if self.strict_enabled() {
            NormalizeMode::Strict
        } else {
            NormalizeMode::Permissive
        }
    }

    /// Stock dialog text with the profile's overrides applied on top.
    pub fn dialog_text(&self) -> DialogText {
        let mut text = DialogText::default();
        if let Some(dialogs) = &self.dialogs {
            if let Some(v) = &dialogs.add_title {
                text.add_title = v.clone();
            }
            if let Some(v) = &dialogs.edit_title {
                text.edit_title = v.clone();
            }
            if let Some(v) = &dialogs.bulk_edit_title {
                text.bulk_edit_title = v.clone();
            }
            if let Some(v) = &dialogs.clear_title {
                text.clear_title = v.clone();
            }
            if let Some(v) = &dialogs.clear_message {
                text.clear_message = v.clone();
            }
            if let Some(v) = &dialogs.clear_confirm_label {
                text.clear_confirm_label = v.clone();
            }
            if let Some(v) = &dialogs.clear_cancel_label {
                text.clear_cancel_label = v.clone();
            }
        }
        text
    }
}

impl ConfigProvider for ProfileConfig {
    fn store_path(&self) -> &str {
        &self.store.path
    }

    fn active_locale(&self) -> Locale {
        Locale::new(self.locales.active.clone())
    }

    fn default_locale(&self) -> Locale {
        Locale::new(self.locales.default.clone())
    }

    fn strict_normalization(&self) -> bool {
        self.strict_enabled()
    }
}

impl Validate for ProfileConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
