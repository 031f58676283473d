//! The runtime registry of configuration entries.
//!
//! Built once at startup from one or more definition files, then queried and
//! mutated through typed accessors. Saved values overlay the defaults from a
//! per-user JSON cache and are written back with [`ConfigRegistry::save`].

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::definitions::{load_definitions, parse_definitions};
use crate::config::entry::ConfigEntry;
use crate::config::error::{ConfigError, ConfigResult};
use crate::config::value::{ConfigValue, Size, ValueType};
use crate::constants;

/// Mapping from key to [`ConfigEntry`], preserving definition order.
#[derive(Debug, Clone, Default)]
pub struct ConfigRegistry {
    entries: HashMap<String, ConfigEntry>,
    order: Vec<String>,
}

impl ConfigRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a registry from a single definitions file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let mut registry = Self::new();
        registry.register_file(path)?;
        Ok(registry)
    }

    /// Parse a registry from an in-memory definitions document (used for the
    /// definition sets embedded in the binary). `name` labels error messages.
    pub fn from_json(name: &str, json: &str) -> ConfigResult<Self> {
        let mut registry = Self::new();
        registry.register_json(name, json)?;
        Ok(registry)
    }

    /// Merge a further definitions file into this registry.
    pub fn register_file(&mut self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let entries = load_definitions(path)?;
        info!(path = %path.display(), count = entries.len(), "registered definitions");
        self.register_entries(entries)
    }

    /// Merge an in-memory definitions document into this registry.
    pub fn register_json(&mut self, name: &str, json: &str) -> ConfigResult<()> {
        let entries = parse_definitions(json, name)?;
        self.register_entries(entries)
    }

    fn register_entries(&mut self, entries: Vec<ConfigEntry>) -> ConfigResult<()> {
        for entry in entries {
            let key = entry.key().to_string();
            if self.entries.contains_key(&key) {
                return Err(ConfigError::DuplicateEntry(key));
            }
            self.order.push(key.clone());
            self.entries.insert(key, entry);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// All entries in definition order.
    pub fn entries(&self) -> impl Iterator<Item = &ConfigEntry> {
        self.order.iter().map(|key| &self.entries[key])
    }

    pub fn get(&self, key: &str) -> ConfigResult<&ConfigEntry> {
        self.entries
            .get(key)
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))
    }

    fn get_mut(&mut self, key: &str) -> ConfigResult<&mut ConfigEntry> {
        self.entries
            .get_mut(key)
            .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))
    }

    /// Replace an entry's value; the entry re-validates the type.
    pub fn set(&mut self, key: &str, value: ConfigValue) -> ConfigResult<()> {
        self.get_mut(key)?.set_value(value)
    }

    /// Restore an entry's default value.
    pub fn reset(&mut self, key: &str) -> ConfigResult<()> {
        self.get_mut(key)?.reset();
        Ok(())
    }

    pub fn str_value(&self, key: &str) -> ConfigResult<&str> {
        let entry = self.get(key)?;
        entry.value().as_str().ok_or_else(|| ConfigError::InvalidValueType {
            key: key.to_string(),
            expected: ValueType::String,
            actual: entry.value().type_name().to_string(),
        })
    }

    pub fn int_value(&self, key: &str) -> ConfigResult<i64> {
        let entry = self.get(key)?;
        entry.value().as_int().ok_or_else(|| ConfigError::InvalidValueType {
            key: key.to_string(),
            expected: ValueType::Int,
            actual: entry.value().type_name().to_string(),
        })
    }

    pub fn float_value(&self, key: &str) -> ConfigResult<f64> {
        let entry = self.get(key)?;
        entry.value().as_float().ok_or_else(|| ConfigError::InvalidValueType {
            key: key.to_string(),
            expected: ValueType::Float,
            actual: entry.value().type_name().to_string(),
        })
    }

    pub fn bool_value(&self, key: &str) -> ConfigResult<bool> {
        let entry = self.get(key)?;
        entry.value().as_bool().ok_or_else(|| ConfigError::InvalidValueType {
            key: key.to_string(),
            expected: ValueType::Bool,
            actual: entry.value().type_name().to_string(),
        })
    }

    pub fn size_value(&self, key: &str) -> ConfigResult<Size> {
        let entry = self.get(key)?;
        entry.value().as_size().ok_or_else(|| ConfigError::InvalidValueType {
            key: key.to_string(),
            expected: ValueType::Size,
            actual: entry.value().type_name().to_string(),
        })
    }

    /// Distinct categories in definition order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for entry in self.entries() {
            if !seen.contains(&entry.category()) {
                seen.push(entry.category());
            }
        }
        seen
    }

    /// Distinct subcategories of a category, in definition order.
    pub fn subcategories(&self, category: &str) -> Vec<&str> {
        let mut seen = Vec::new();
        for entry in self.entries() {
            if entry.category() == category {
                if let Some(sub) = entry.subcategory() {
                    if !seen.contains(&sub) {
                        seen.push(sub);
                    }
                }
            }
        }
        seen
    }

    /// Keys under a category, optionally narrowed to one subcategory.
    pub fn category_keys(&self, category: &str, subcategory: Option<&str>) -> Vec<&str> {
        self.entries()
            .filter(|e| e.category() == category)
            .filter(|e| subcategory.is_none() || e.subcategory() == subcategory)
            .map(|e| e.key())
            .collect()
    }

    /// Overlay saved values from a `{key: value}` JSON cache.
    ///
    /// A missing file is normal (first run). Unknown keys and values that no
    /// longer match their declared type are skipped with a warning; the cache
    /// is user data and must never abort startup.
    pub fn apply_saved(&mut self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "no saved values, using defaults");
            return Ok(());
        }

        let contents = fs::read_to_string(path)?;
        let saved: HashMap<String, ConfigValue> = serde_json::from_str(&contents)?;

        let mut applied = 0usize;
        for (key, value) in saved {
            match self.get_mut(&key) {
                Ok(entry) => match entry.set_value(value) {
                    Ok(()) => applied += 1,
                    Err(e) => warn!(key = %key, "ignoring saved value: {e}"),
                },
                Err(_) => warn!(key = %key, "ignoring saved value for unknown key"),
            }
        }
        info!(path = %path.display(), applied, "applied saved values");
        Ok(())
    }

    /// Write the values of all `saved` entries as a `{key: value}` JSON map,
    /// creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut saved = serde_json::Map::new();
        for entry in self.entries() {
            if entry.saved() {
                saved.insert(entry.key().to_string(), serde_json::to_value(entry.value())?);
            }
        }

        let json = serde_json::to_string_pretty(&serde_json::Value::Object(saved))?;
        fs::write(path, json)?;
        info!(path = %path.display(), "saved config values");
        Ok(())
    }
}

/// Per-user location of the saved application settings.
pub fn application_config_path() -> PathBuf {
    user_config_file(constants::config::FILENAME)
}

/// Per-user location of the saved key bindings.
pub fn key_config_path() -> PathBuf {
    user_config_file(constants::config::KEY_FILENAME)
}

fn user_config_file(filename: &str) -> PathBuf {
    #[cfg(not(test))]
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    #[cfg(test)]
    let mut path = std::env::temp_dir().join("easel-config-test");

    path.push(constants::config::APP_DIR);
    path.push(filename);
    path
}
