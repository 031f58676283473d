//! Declarative JSON definition files.
//!
//! A definitions file is a single JSON object mapping setting keys to
//! definition blocks:
//!
//! ```json
//! {
//!     "edit.undo_limit": {
//!         "label": "Undo limit",
//!         "category": "Editing",
//!         "description": "Maximum number of undo steps kept in memory.",
//!         "type": "int",
//!         "default": 30,
//!         "saved": true
//!     }
//! }
//! ```
//!
//! `subcategory`, `description`, `options`, and `modifier_role` are optional;
//! `saved` defaults to true. Key order in the file is the presentation order.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::config::entry::ConfigEntry;
use crate::config::error::{ConfigError, ConfigResult};
use crate::config::key_binding::ModifierRole;
use crate::config::value::{ConfigValue, ValueType};

/// One definition block as written in a definitions file.
#[derive(Debug, Deserialize)]
struct RawDefinition {
    label: String,
    category: String,
    #[serde(default)]
    subcategory: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(rename = "type")]
    value_type: ValueType,
    default: ConfigValue,
    #[serde(default = "default_saved")]
    saved: bool,
    #[serde(default)]
    options: Vec<String>,
    #[serde(default)]
    modifier_role: ModifierRole,
}

fn default_saved() -> bool {
    true
}

/// Parse a definitions document into entries, preserving file order.
///
/// `origin` names the source (a path or embedded-resource name) for error
/// messages.
pub(crate) fn parse_definitions(source: &str, origin: &str) -> ConfigResult<Vec<ConfigEntry>> {
    let raw: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(source).map_err(|e| ConfigError::DefinitionParse {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;

    let mut entries = Vec::with_capacity(raw.len());
    for (key, block) in raw {
        let def: RawDefinition =
            serde_json::from_value(block).map_err(|e| ConfigError::DefinitionParse {
                origin: format!("{origin}, key '{key}'"),
                message: e.to_string(),
            })?;
        entries.push(ConfigEntry::new(
            key,
            def.label,
            def.category,
            def.subcategory,
            def.description,
            def.value_type,
            def.options,
            def.default,
            def.saved,
            def.modifier_role,
        )?);
    }
    debug!(origin, count = entries.len(), "parsed definitions");
    Ok(entries)
}

/// Load and parse a definitions file from disk.
pub(crate) fn load_definitions(path: &Path) -> ConfigResult<Vec<ConfigEntry>> {
    if !path.exists() {
        return Err(ConfigError::DefinitionNotFound(path.to_path_buf()));
    }
    let contents = fs::read_to_string(path)?;
    parse_definitions(&contents, &path.display().to_string())
}
