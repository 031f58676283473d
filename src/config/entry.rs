//! A single named, typed, defaultable setting.

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::key_binding::ModifierRole;
use crate::config::value::{ConfigValue, ValueType, is_color_string};

/// One setting produced from a definitions file.
///
/// The current value always matches the declared type: construction and every
/// mutation go through [`check_value`]. Presentation metadata (label,
/// category, description) is carried for the settings UI and warning text.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigEntry {
    key: String,
    label: String,
    category: String,
    subcategory: Option<String>,
    description: String,
    value_type: ValueType,
    options: Vec<String>,
    default: ConfigValue,
    value: ConfigValue,
    saved: bool,
    modifier_role: ModifierRole,
}

impl ConfigEntry {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        key: String,
        label: String,
        category: String,
        subcategory: Option<String>,
        description: String,
        value_type: ValueType,
        options: Vec<String>,
        default: ConfigValue,
        saved: bool,
        modifier_role: ModifierRole,
    ) -> ConfigResult<Self> {
        check_value(&key, value_type, &options, &default)?;
        Ok(Self {
            key,
            label,
            category,
            subcategory,
            description,
            value_type,
            options,
            value: default.clone(),
            default,
            saved,
            modifier_role,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn subcategory(&self) -> Option<&str> {
        self.subcategory.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Permitted values for options-typed entries; empty otherwise.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn default(&self) -> &ConfigValue {
        &self.default
    }

    pub fn value(&self) -> &ConfigValue {
        &self.value
    }

    /// Whether the value persists across sessions.
    pub fn saved(&self) -> bool {
        self.saved
    }

    pub fn modifier_role(&self) -> ModifierRole {
        self.modifier_role
    }

    /// Replace the current value, re-validating its type (and color format /
    /// options membership where applicable).
    pub fn set_value(&mut self, value: ConfigValue) -> ConfigResult<()> {
        check_value(&self.key, self.value_type, &self.options, &value)?;
        self.value = value;
        Ok(())
    }

    /// Restore the default value.
    pub fn reset(&mut self) {
        self.value = self.default.clone();
    }
}

/// Validate a candidate value against a declared type and options list.
fn check_value(
    key: &str,
    value_type: ValueType,
    options: &[String],
    value: &ConfigValue,
) -> ConfigResult<()> {
    if !value.matches(value_type) {
        return Err(ConfigError::InvalidValueType {
            key: key.to_string(),
            expected: value_type,
            actual: value.type_name().to_string(),
        });
    }
    match value_type {
        ValueType::Color => {
            let text = value.as_str().unwrap_or_default();
            if !is_color_string(text) {
                return Err(ConfigError::InvalidValueType {
                    key: key.to_string(),
                    expected: ValueType::Color,
                    actual: format!("string '{text}'"),
                });
            }
        }
        ValueType::Options => {
            let text = value.as_str().unwrap_or_default();
            if !options.iter().any(|o| o == text) {
                return Err(ConfigError::UnknownOption {
                    key: key.to_string(),
                    value: text.to_string(),
                });
            }
        }
        _ => {}
    }
    Ok(())
}
