//! Configuration subsystem for the Easel image editor.
//!
//! Provides the definition loader, the typed setting registry with saved-value
//! persistence, and the key-binding validator run once at startup.

#![deny(unsafe_code)]

pub mod config;
pub mod constants;

pub use config::{
    ConfigEntry, ConfigError, ConfigRegistry, ConfigResult, ConfigValue, KeyChord, ModifierRole,
    Size, ValueType, application_config_path, key_config_path, validate_key_bindings,
};
