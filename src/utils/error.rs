use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Malformed field value: {reason}")]
    MalformedFieldValue { reason: String },

    #[error("Field store rejected the write: {message}")]
    FieldWriteRejected { message: String },

    #[error("Dialog gateway unavailable: {message}")]
    DialogUnavailable { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' - {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },
}

/// Severity buckets used by the binaries to pick exit codes and message tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EditorError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EditorError::IoError(_) => ErrorSeverity::Critical,
            EditorError::SerializationError(_) => ErrorSeverity::High,
            EditorError::MalformedFieldValue { .. } => ErrorSeverity::High,
            EditorError::FieldWriteRejected { .. } => ErrorSeverity::Medium,
            EditorError::DialogUnavailable { .. } => ErrorSeverity::Medium,
            EditorError::ConfigError { .. } => ErrorSeverity::High,
            EditorError::InvalidConfigValue { .. } => ErrorSeverity::High,
            EditorError::MissingConfig { .. } => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EditorError::IoError(e) => format!("Could not reach the entry store: {}", e),
            EditorError::SerializationError(e) => format!("Record is not valid JSON: {}", e),
            EditorError::MalformedFieldValue { reason } => {
                format!("The stored field value is not an ingredient list: {}", reason)
            }
            EditorError::FieldWriteRejected { message } => {
                format!("The change was not saved: {}", message)
            }
            EditorError::DialogUnavailable { message } => {
                format!("Could not open the dialog: {}", message)
            }
            EditorError::ConfigError { message } => format!("Configuration problem: {}", message),
            EditorError::InvalidConfigValue {
                field,
                value,
                reason,
            } => {
                format!("'{}' is not a valid {}: {}", value, field, reason)
            }
            EditorError::MissingConfig { field } => {
                format!("Required setting '{}' is missing", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EditorError::IoError(_) => "Check that the entry file path exists and is writable",
            EditorError::SerializationError(_) => "Check the JSON syntax of the record",
            EditorError::MalformedFieldValue { .. } => {
                "Fix the stored value or rerun without --strict to reset it to an empty list"
            }
            EditorError::FieldWriteRejected { .. } => "Retry once the field store accepts writes",
            EditorError::DialogUnavailable { .. } => "Retry when the host dialog layer is up",
            EditorError::ConfigError { .. } => "Review the profile file against the documentation",
            EditorError::InvalidConfigValue { .. } => "Correct the value and rerun",
            EditorError::MissingConfig { .. } => "Add the missing setting to the profile or flags",
        }
    }
}

pub type Result<T> = std::result::Result<T, EditorError>;
