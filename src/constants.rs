//! Application-wide constants
//!
//! Single source of truth for file locations, key-binding rules, and the
//! embedded definition documents.

/// Configuration paths and filenames
pub mod config {
    /// Application directory name under XDG config
    pub const APP_DIR: &str = "easel";

    /// Saved application settings filename
    pub const FILENAME: &str = "config.json";

    /// Saved key bindings filename
    pub const KEY_FILENAME: &str = "key_config.json";
}

/// Key-binding rules
pub mod input {
    /// Keys a modifier-role binding may be assigned to
    pub const MODIFIER_KEYS: &[&str] = &["Ctrl", "Alt", "Shift"];

    /// Navigation speed multiplier applied while the speed modifier is held
    pub const SPEED_MULTIPLIER: u32 = 10;
}

/// Definition documents compiled into the binary
pub mod resources {
    /// Application settings (interface, editing, file handling)
    pub const APPLICATION_DEFINITIONS: &str =
        include_str!("../resources/application_config_definitions.json");

    /// Image-generator settings (merged into the application registry)
    pub const GENERATOR_DEFINITIONS: &str =
        include_str!("../resources/generator_config_definitions.json");

    /// Key bindings and modifier-role keys
    pub const KEY_DEFINITIONS: &str = include_str!("../resources/key_config_definitions.json");
}
