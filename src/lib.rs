pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use adapters::prompt::PromptDialogGateway;
#[cfg(feature = "cli")]
pub use config::{CliArgs, EditorCommand};

pub use adapters::file::JsonFileStore;
pub use adapters::locales::StaticLocales;
pub use adapters::memory::InMemoryHost;
pub use config::ProfileConfig;
pub use crate::core::controller::{ControllerOptions, IngredientListController};
pub use domain::model::{
    ConfirmIntent, ConfirmRequest, DialogLayout, DialogRequest, DialogResponse, DialogSeed,
    DialogText, Ingredient, Locale, NormalizeMode,
};
pub use domain::ports::{ConfigProvider, DialogGateway, EntryAccessor, FieldStore, LocaleSource};
pub use utils::error::{EditorError, ErrorSeverity, Result};
