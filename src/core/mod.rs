pub mod controller;

pub use crate::domain::model::{DialogText, Ingredient, Locale, NormalizeMode};
pub use crate::domain::ports::{ConfigProvider, DialogGateway, EntryAccessor, FieldStore, LocaleSource};
pub use crate::utils::error::Result;
pub use controller::{ControllerOptions, IngredientListController};
