//! Typed setting values and the closed set of declarable types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Type tag a definition file declares for a setting.
///
/// `color` and `options` values are stored as strings but carry extra
/// constraints: colors must be `#RRGGBB`/`#AARRGGBB`, options values must be
/// members of the entry's options list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    String,
    Int,
    Float,
    Bool,
    Size,
    Color,
    Options,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::String => "string",
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::Bool => "bool",
            ValueType::Size => "size",
            ValueType::Color => "color",
            ValueType::Options => "options",
        };
        write!(f, "{name}")
    }
}

/// Width/height pair used by size-typed settings (canvas dimensions,
/// generation resolution, and similar).
/// Serializes to the object form `{"width": w, "height": h}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A setting value as it appears in definition files and the saved-value
/// cache. Untagged: the JSON shape alone determines the variant, so variant
/// order matters (ints must be tried before floats).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Size(Size),
}

impl ConfigValue {
    /// The JSON-level type name, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigValue::Bool(_) => "bool",
            ConfigValue::Int(_) => "int",
            ConfigValue::Float(_) => "float",
            ConfigValue::Str(_) => "string",
            ConfigValue::Size(_) => "size",
        }
    }

    /// Whether this value's shape is acceptable for the declared type.
    ///
    /// Shape only: color format and options membership are checked separately
    /// by the entry, since they need per-entry context.
    pub fn matches(&self, value_type: ValueType) -> bool {
        matches!(
            (self, value_type),
            (ConfigValue::Bool(_), ValueType::Bool)
                | (ConfigValue::Int(_), ValueType::Int)
                | (ConfigValue::Float(_), ValueType::Float)
                | (ConfigValue::Str(_), ValueType::String)
                | (ConfigValue::Str(_), ValueType::Color)
                | (ConfigValue::Str(_), ValueType::Options)
                | (ConfigValue::Size(_), ValueType::Size)
        )
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ConfigValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            ConfigValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_size(&self) -> Option<Size> {
        match self {
            ConfigValue::Size(s) => Some(*s),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(b) => write!(f, "{b}"),
            ConfigValue::Int(n) => write!(f, "{n}"),
            ConfigValue::Float(n) => write!(f, "{n}"),
            ConfigValue::Str(s) => write!(f, "{s}"),
            ConfigValue::Size(s) => write!(f, "{s}"),
        }
    }
}

/// Checks the `#RRGGBB` / `#AARRGGBB` color string format.
pub fn is_color_string(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    (digits.len() == 6 || digits.len() == 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_deserialization_picks_shape() {
        let v: ConfigValue = serde_json::from_str("true").unwrap();
        assert_eq!(v, ConfigValue::Bool(true));

        let v: ConfigValue = serde_json::from_str("30").unwrap();
        assert_eq!(v, ConfigValue::Int(30));

        let v: ConfigValue = serde_json::from_str("7.5").unwrap();
        assert_eq!(v, ConfigValue::Float(7.5));

        let v: ConfigValue = serde_json::from_str("\"#FF2040\"").unwrap();
        assert_eq!(v, ConfigValue::Str("#FF2040".to_string()));

        let v: ConfigValue = serde_json::from_str(r#"{"width": 512, "height": 512}"#).unwrap();
        assert_eq!(v, ConfigValue::Size(Size::new(512, 512)));
    }

    #[test]
    fn matches_is_strict_between_int_and_float() {
        assert!(ConfigValue::Int(5).matches(ValueType::Int));
        assert!(!ConfigValue::Int(5).matches(ValueType::Float));
        assert!(!ConfigValue::Float(5.0).matches(ValueType::Int));
    }

    #[test]
    fn strings_match_string_color_and_options() {
        let v = ConfigValue::Str("x".to_string());
        assert!(v.matches(ValueType::String));
        assert!(v.matches(ValueType::Color));
        assert!(v.matches(ValueType::Options));
        assert!(!v.matches(ValueType::Int));
    }

    #[test]
    fn color_string_format() {
        assert!(is_color_string("#40FF00"));
        assert!(is_color_string("#8040FF00"));
        assert!(!is_color_string("40FF00"));
        assert!(!is_color_string("#40FF0"));
        assert!(!is_color_string("#40FF0G"));
        assert!(!is_color_string(""));
    }

    #[test]
    fn size_displays_as_dimensions() {
        assert_eq!(Size::new(1920, 1080).to_string(), "1920x1080");
    }

    #[test]
    fn value_serialization_roundtrip() {
        let v = ConfigValue::Size(Size::new(4096, 4096));
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"width":4096,"height":4096}"#);
        let back: ConfigValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);
    }
}
