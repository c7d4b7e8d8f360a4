use crate::utils::error::{EditorError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Locale identifiers are BCP 47-ish tags: non-empty alphanumeric segments
/// separated by single hyphens, e.g. "en-US" or "de".
pub fn validate_locale(field_name: &str, tag: &str) -> Result<()> {
    if tag.is_empty() {
        return Err(EditorError::InvalidConfigValue {
            field: field_name.to_string(),
            value: tag.to_string(),
            reason: "Locale cannot be empty".to_string(),
        });
    }

    let well_formed = tag
        .split('-')
        .all(|segment| !segment.is_empty() && segment.chars().all(|c| c.is_ascii_alphanumeric()));

    if !well_formed {
        return Err(EditorError::InvalidConfigValue {
            field: field_name.to_string(),
            value: tag.to_string(),
            reason: "Locale must be alphanumeric segments separated by '-'".to_string(),
        });
    }

    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EditorError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EditorError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EditorError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_locale() {
        assert!(validate_locale("locale", "en-US").is_ok());
        assert!(validate_locale("locale", "de").is_ok());
        assert!(validate_locale("locale", "zh-Hant-TW").is_ok());
        assert!(validate_locale("locale", "").is_err());
        assert!(validate_locale("locale", "en_US").is_err());
        assert!(validate_locale("locale", "en--US").is_err());
        assert!(validate_locale("locale", "-US").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("store", "entry.json").is_ok());
        assert!(validate_path("store", "data/entry.json").is_ok());
        assert!(validate_path("store", "").is_err());
        assert!(validate_path("store", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("editor.name", "recipe").is_ok());
        assert!(validate_non_empty_string("editor.name", "   ").is_err());
    }
}
