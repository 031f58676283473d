//! Configuration management
//!
//! Settings are declared in JSON definition files (label, category, type,
//! default, saved flag per key), loaded once at startup into a
//! [`ConfigRegistry`], and overlaid with per-user saved values. Key bindings
//! are ordinary string entries plus a modifier role; the validator checks
//! them after loading and reports problems as non-fatal warnings.

pub mod definitions;
pub mod entry;
pub mod error;
pub mod key_binding;
pub mod registry;
pub mod validator;
pub mod value;

pub use entry::ConfigEntry;
pub use error::{ConfigError, ConfigResult};
pub use key_binding::{KeyChord, ModifierRole};
pub use registry::{ConfigRegistry, application_config_path, key_config_path};
pub use validator::validate_key_bindings;
pub use value::{ConfigValue, Size, ValueType};
