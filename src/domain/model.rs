use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::error::{EditorError, Result};

/// A single ingredient row. The host schema owns the shape; the editor treats
/// the record as an atomic value and only ever replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ingredient(Value);

impl Ingredient {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(Self(serde_json::from_str(raw)?))
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    /// A JSON null is the record-shaped empty signal and is never applied.
    pub fn is_blank(&self) -> bool {
        self.0.is_null()
    }

    /// Short human-readable form for table printouts.
    pub fn summary(&self) -> String {
        match &self.0 {
            Value::Object(map) => {
                for key in ["name", "ingredient", "title", "label"] {
                    if let Some(Value::String(s)) = map.get(key) {
                        return s.clone();
                    }
                }
                self.0.to_string()
            }
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// Locale identifier, e.g. "en-US". Field values are stored per locale; the
/// distinguished default locale serves as the copy source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the boundary parser treats field values that are neither a plain array
/// nor the legacy `{ "ingredients": [...] }` wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizeMode {
    /// Unrecognized shapes normalize to an empty list.
    #[default]
    Permissive,
    /// Unrecognized shapes are rejected with `MalformedFieldValue`.
    Strict,
}

/// Normalizes a persisted field value into an ingredient list. Accepts the
/// plain array shape and the legacy wrapper object holding an `ingredients`
/// array; absent and null values read as an empty list.
pub fn normalize_field_value(raw: Option<&Value>, mode: NormalizeMode) -> Result<Vec<Ingredient>> {
    let value = match raw {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(value) => value,
    };

    let rows = match value {
        Value::Array(rows) => rows,
        Value::Object(map) => match map.get("ingredients") {
            Some(Value::Array(rows)) => rows,
            Some(other) => {
                return reject_or_empty(
                    mode,
                    format!("wrapper key 'ingredients' holds {}, expected an array", json_kind(other)),
                )
            }
            None => {
                return reject_or_empty(mode, "wrapper object has no 'ingredients' array".to_string())
            }
        },
        other => {
            return reject_or_empty(
                mode,
                format!("expected an array of records, got {}", json_kind(other)),
            )
        }
    };

    Ok(rows.iter().cloned().map(Ingredient::new).collect())
}

fn reject_or_empty(mode: NormalizeMode, reason: String) -> Result<Vec<Ingredient>> {
    match mode {
        NormalizeMode::Permissive => {
            tracing::warn!("{}; treating field as empty", reason);
            Ok(Vec::new())
        }
        NormalizeMode::Strict => Err(EditorError::MalformedFieldValue { reason }),
    }
}

/// The persisted shape is always the plain array, whatever shape was loaded.
pub fn to_field_value(list: &[Ingredient]) -> Value {
    Value::Array(list.iter().map(|row| row.value().clone()).collect())
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// What a dialog is seeded with when it opens.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogSeed {
    Empty,
    Ingredient(Ingredient),
    Rows(Vec<Ingredient>),
}

/// Layout hint the host may honor when sizing the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogLayout {
    #[default]
    Default,
    FullWidth,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DialogRequest {
    pub title: String,
    pub seed: DialogSeed,
    pub layout: DialogLayout,
}

/// What the gateway resolved with. Cancellation is an explicit variant, never
/// a sentinel value.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogResponse {
    Cancelled,
    Ingredient(Ingredient),
    Rows(Vec<Ingredient>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmIntent {
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmRequest {
    pub title: String,
    pub message: String,
    pub intent: ConfirmIntent,
    pub confirm_label: String,
    pub cancel_label: String,
}

/// Titles and labels the controller uses when it opens dialogs. Defaults match
/// the stock editor surface; hosts override them through the profile.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogText {
    pub add_title: String,
    pub edit_title: String,
    pub bulk_edit_title: String,
    pub clear_title: String,
    pub clear_message: String,
    pub clear_confirm_label: String,
    pub clear_cancel_label: String,
}

impl Default for DialogText {
    fn default() -> Self {
        Self {
            add_title: "Add Ingredient".to_string(),
            edit_title: "Edit Ingredient".to_string(),
            bulk_edit_title: "Bulk Edit Ingredients".to_string(),
            clear_title: "Delete Ingredients".to_string(),
            clear_message: "Are you sure you want to delete all ingredients? This cannot be undone."
                .to_string(),
            clear_confirm_label: "Yes, Delete".to_string(),
            clear_cancel_label: "No".to_string(),
        }
    }
}

impl DialogText {
    pub fn clear_confirm(&self) -> ConfirmRequest {
        ConfirmRequest {
            title: self.clear_title.clone(),
            message: self.clear_message.clone(),
            intent: ConfirmIntent::Negative,
            confirm_label: self.clear_confirm_label.clone(),
            cancel_label: self.clear_cancel_label.clone(),
        }
    }
}
