use crate::domain::model::{ConfirmRequest, DialogRequest, DialogResponse, Locale};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Read/write access to the persisted value of the bound field, scoped to one
/// locale. Writes must be durable before they resolve.
pub trait FieldStore: Send + Sync {
    fn get_value(&self) -> impl std::future::Future<Output = Result<Option<Value>>> + Send;
    fn set_value(&self, value: Value) -> impl std::future::Future<Output = Result<()>> + Send;
    fn locale(&self) -> Locale;
}

/// Resolves the distinguished default locale of the content space.
pub trait LocaleSource: Send + Sync {
    fn default_locale(&self) -> Locale;
}

/// Raw access to the same field under other locales of the entry. Only the
/// copy-from-default operation reads through this.
pub trait EntryAccessor: Send + Sync {
    fn field_value_for(
        &self,
        locale: &Locale,
    ) -> impl std::future::Future<Output = Result<Option<Value>>> + Send;
}

/// Host-provided modal interactions.
#[async_trait]
pub trait DialogGateway: Send + Sync {
    async fn open_dialog(&self, request: DialogRequest) -> Result<DialogResponse>;
    async fn open_confirm(&self, request: ConfirmRequest) -> Result<bool>;
}

/// Settings a binary needs to assemble a working editor, whether they come
/// from the command line or a TOML profile.
pub trait ConfigProvider: Send + Sync {
    fn store_path(&self) -> &str;
    fn active_locale(&self) -> Locale;
    fn default_locale(&self) -> Locale;
    fn strict_normalization(&self) -> bool;
}
