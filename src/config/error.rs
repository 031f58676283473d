//! Error types for the configuration system.
//!
//! Definition-load failures are fatal and reported through [`ConfigError`].
//! Key-binding problems are never errors; they surface as warning strings
//! from the validator instead.

use std::path::PathBuf;

use crate::config::value::ValueType;

/// Unified error type for definition loading and value access.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A definitions file is missing. Fatal at startup.
    #[error("definition file not found: {0}")]
    DefinitionNotFound(PathBuf),

    /// A definitions file is not valid JSON, or a definition block is
    /// structurally wrong (missing label, unknown type tag, etc.).
    #[error("failed to parse definitions from {origin}: {message}")]
    DefinitionParse { origin: String, message: String },

    /// A value (default or assigned) does not match the declared type.
    #[error("invalid value type for '{key}': expected {expected}, got {actual}")]
    InvalidValueType {
        key: String,
        expected: ValueType,
        actual: String,
    },

    /// The same key was registered twice across definition files.
    #[error("duplicate config entry: '{0}'")]
    DuplicateEntry(String),

    /// Access to a key that was never registered. This is a programming
    /// error: all keys come from static definition files.
    #[error("unknown config key: '{0}'")]
    UnknownKey(String),

    /// An options-typed value is not one of the permitted options.
    #[error("'{value}' is not a valid option for '{key}'")]
    UnknownOption { key: String, value: String },

    /// A saved-value cache could not be parsed or serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_not_found_displays_path() {
        let err = ConfigError::DefinitionNotFound(PathBuf::from("/missing/defs.json"));
        assert_eq!(
            err.to_string(),
            "definition file not found: /missing/defs.json"
        );
    }

    #[test]
    fn invalid_value_type_names_key_and_types() {
        let err = ConfigError::InvalidValueType {
            key: "edit.undo_limit".to_string(),
            expected: ValueType::Int,
            actual: "string".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value type for 'edit.undo_limit': expected int, got string"
        );
    }

    #[test]
    fn duplicate_entry_names_key() {
        let err = ConfigError::DuplicateEntry("style.theme".to_string());
        assert_eq!(err.to_string(), "duplicate config entry: 'style.theme'");
    }

    #[test]
    fn io_error_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ConfigError = io_err.into();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
