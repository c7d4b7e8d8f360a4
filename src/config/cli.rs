use crate::domain::model::Locale;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_locale, validate_path, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "ingredients-field")]
#[command(about = "Edit the ingredient list of a content entry, one locale at a time")]
pub struct CliArgs {
    /// Entry file holding the locale-keyed field values
    #[arg(long)]
    pub store: Option<String>,

    /// Locale being edited
    #[arg(long)]
    pub locale: Option<String>,

    /// Locale used as the copy source
    #[arg(long)]
    pub default_locale: Option<String>,

    /// TOML profile; explicit flags override its values
    #[arg(long)]
    pub profile: Option<String>,

    /// Reject malformed field values instead of reading them as empty
    #[arg(long)]
    pub strict: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: EditorCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum EditorCommand {
    /// Print the current ingredient list
    Show,
    /// Append one ingredient; prompts unless --json is given
    Add {
        /// Ingredient record as a JSON value
        #[arg(long)]
        json: Option<String>,
    },
    /// Replace the ingredient at INDEX; prompts unless --json is given
    Edit {
        index: usize,
        /// Replacement record as a JSON value
        #[arg(long)]
        json: Option<String>,
    },
    /// Replace the whole list; prompts unless --json is given
    BulkEdit {
        /// JSON array of ingredient records
        #[arg(long)]
        json: Option<String>,
    },
    /// Drop the ingredient at INDEX
    Remove { index: usize },
    /// Delete every ingredient after confirmation
    Clear,
    /// Copy the default locale's list into an empty locale
    Copy,
}

impl ConfigProvider for CliArgs {
    fn store_path(&self) -> &str {
        self.store.as_deref().unwrap_or("entry.json")
    }

    fn active_locale(&self) -> Locale {
        Locale::new(self.locale.clone().unwrap_or_else(|| "en-US".to_string()))
    }

    fn default_locale(&self) -> Locale {
        Locale::new(
            self.default_locale
                .clone()
                .unwrap_or_else(|| "en-US".to_string()),
        )
    }

    fn strict_normalization(&self) -> bool {
        self.strict
    }
}

impl Validate for CliArgs {
    fn validate(&self) -> Result<()> {
        if let Some(store) = &self.store {
            validate_path("store", store)?;
        }
        if let Some(locale) = &self.locale {
            validate_locale("locale", locale)?;
        }
        if let Some(locale) = &self.default_locale {
            validate_locale("default-locale", locale)?;
        }
        Ok(())
    }
}
