use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;

use crate::domain::model::Locale;
use crate::domain::ports::{EntryAccessor, FieldStore};
use crate::utils::error::Result;

#[derive(Debug, Default)]
struct HostState {
    fields: HashMap<Locale, Value>,
    writes: Vec<(Locale, Value)>,
}

/// In-memory stand-in for the host platform: one entry, one field, any number
/// of locales. Every view handed out shares the same state, and writes are
/// logged in order so tests can assert exactly what was persisted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHost {
    state: Arc<Mutex<HostState>>,
}

impl InMemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the field value for one locale.
    pub async fn seed(&self, locale: Locale, value: Value) {
        self.state.lock().await.fields.insert(locale, value);
    }

    pub fn field_store(&self, locale: Locale) -> InMemoryFieldStore {
        InMemoryFieldStore {
            host: self.clone(),
            locale,
        }
    }

    pub fn entry(&self) -> InMemoryEntry {
        InMemoryEntry { host: self.clone() }
    }

    pub async fn value_for(&self, locale: &Locale) -> Option<Value> {
        self.state.lock().await.fields.get(locale).cloned()
    }

    /// Every write any store view performed, oldest first.
    pub async fn write_log(&self) -> Vec<(Locale, Value)> {
        self.state.lock().await.writes.clone()
    }
}

/// One locale's view onto the shared host state.
#[derive(Debug, Clone)]
pub struct InMemoryFieldStore {
    host: InMemoryHost,
    locale: Locale,
}

impl FieldStore for InMemoryFieldStore {
    async fn get_value(&self) -> Result<Option<Value>> {
        Ok(self.host.value_for(&self.locale).await)
    }

    async fn set_value(&self, value: Value) -> Result<()> {
        let mut state = self.host.state.lock().await;
        state.fields.insert(self.locale.clone(), value.clone());
        state.writes.push((self.locale.clone(), value));
        Ok(())
    }

    fn locale(&self) -> Locale {
        self.locale.clone()
    }
}

#[derive(Debug, Clone)]
pub struct InMemoryEntry {
    host: InMemoryHost,
}

impl EntryAccessor for InMemoryEntry {
    async fn field_value_for(&self, locale: &Locale) -> Result<Option<Value>> {
        Ok(self.host.value_for(locale).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_views_share_state_and_log_writes() {
        let host = InMemoryHost::new();
        let en = host.field_store(Locale::new("en-US"));
        let de = host.field_store(Locale::new("de-DE"));

        en.set_value(json!(["a"])).await.unwrap();
        de.set_value(json!(["b"])).await.unwrap();

        assert_eq!(en.get_value().await.unwrap(), Some(json!(["a"])));
        assert_eq!(
            host.entry()
                .field_value_for(&Locale::new("de-DE"))
                .await
                .unwrap(),
            Some(json!(["b"]))
        );

        let log = host.write_log().await;
        assert_eq!(log.len(), 2);
        assert_eq!(log[0], (Locale::new("en-US"), json!(["a"])));
    }

    #[tokio::test]
    async fn test_unseeded_locale_reads_as_absent() {
        let host = InMemoryHost::new();
        let store = host.field_store(Locale::new("fr-FR"));
        assert_eq!(store.get_value().await.unwrap(), None);
    }
}
