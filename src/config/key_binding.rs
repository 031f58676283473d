//! Key chord parsing and modifier roles for key-binding entries.
//!
//! Key bindings are stored as strings like `"Ctrl+Shift+N"`. A binding value
//! may hold several alternate chords separated by commas (`"Z, Ctrl+Z"`), and
//! the bare `+`/`-` keys used for zooming are representable (`"Ctrl++"`).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Special-purpose role a key-binding definition may declare.
///
/// Role bindings are held-down modifiers rather than triggered shortcuts:
/// holding the speed modifier multiplies navigation key distance, the line
/// modifier constrains brush strokes to straight lines, and so on. They must
/// be plain modifier keys, which the validator enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierRole {
    /// Ordinary shortcut, no special role.
    #[default]
    None,
    /// Multiplies key-navigation speed while held.
    Speed,
    /// Constrains brush strokes to straight lines.
    Line,
    /// Snaps transformations to fixed angles.
    FixedAngle,
    /// Pans the image view while dragging.
    Pan,
    /// Locks the aspect ratio while scaling.
    FixedAspect,
    /// Temporarily switches the active brush to the color picker.
    Eyedropper,
}

impl ModifierRole {
    pub fn is_modifier(self) -> bool {
        self != ModifierRole::None
    }
}

impl fmt::Display for ModifierRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModifierRole::None => "none",
            ModifierRole::Speed => "speed",
            ModifierRole::Line => "line",
            ModifierRole::FixedAngle => "fixed angle",
            ModifierRole::Pan => "pan",
            ModifierRole::FixedAspect => "fixed aspect",
            ModifierRole::Eyedropper => "eyedropper",
        };
        write!(f, "{name}")
    }
}

/// A parsed key chord: modifier flags plus a main key name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
    /// Normalized main key name (e.g. `"N"`, `"F5"`, `"PgUp"`, `"+"`).
    pub key: String,
}

impl KeyChord {
    /// Parse a single chord like `"Ctrl+Shift+N"`.
    ///
    /// Modifier names are case-insensitive and may appear in any order; the
    /// main key must come last. A trailing `+` separator denotes the literal
    /// plus key (`"Ctrl++"`).
    pub fn parse(text: &str) -> Result<Self, String> {
        let text = text.trim();
        if text.is_empty() {
            return Err("empty key chord".to_string());
        }

        let mut tokens: Vec<&str> = text.split('+').map(str::trim).collect();
        // "Ctrl++" and bare "+" split into trailing empty segments
        if tokens.last() == Some(&"") {
            while tokens.last() == Some(&"") {
                tokens.pop();
            }
            tokens.push("+");
        }
        if tokens.iter().any(|t| t.is_empty()) {
            return Err(format!("malformed key chord: '{text}'"));
        }

        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut meta = false;
        let last = tokens.len() - 1;
        let mut main_key: Option<String> = None;

        for (i, token) in tokens.iter().enumerate() {
            match modifier_name(token) {
                // A bare modifier may stand as the main key (role bindings)
                Some(name) if i == last && last == 0 => {
                    main_key = Some(name.to_string());
                }
                Some("Ctrl") => ctrl = true,
                Some("Shift") => shift = true,
                Some("Alt") => alt = true,
                Some("Meta") => meta = true,
                Some(_) => unreachable!(),
                None if i == last => {
                    main_key = Some(normalize_key_name(token));
                }
                None => {
                    return Err(format!("non-modifier key '{token}' must be last in '{text}'"));
                }
            }
        }

        match main_key {
            Some(key) => Ok(Self {
                ctrl,
                shift,
                alt,
                meta,
                key,
            }),
            None => Err(format!("no main key in chord '{text}'")),
        }
    }

    /// Parse a binding value, which may hold comma-separated alternates.
    pub fn parse_list(text: &str) -> Result<Vec<Self>, String> {
        text.split(',')
            .filter(|part| !part.trim().is_empty())
            .map(Self::parse)
            .collect()
    }

    /// Canonical display form, also used for conflict detection.
    /// Modifiers render in fixed order: Ctrl, Shift, Alt, Meta.
    pub fn display_name(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        if self.alt {
            parts.push("Alt");
        }
        if self.meta {
            parts.push("Meta");
        }
        parts.push(&self.key);
        parts.join("+")
    }

    /// If this chord is a single unmodified modifier key, its name.
    pub fn as_bare_modifier(&self) -> Option<&str> {
        if self.ctrl || self.shift || self.alt || self.meta {
            return None;
        }
        matches!(self.key.as_str(), "Ctrl" | "Shift" | "Alt" | "Meta").then_some(self.key.as_str())
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Recognize a modifier token, returning its canonical name.
fn modifier_name(token: &str) -> Option<&'static str> {
    match token.to_ascii_lowercase().as_str() {
        "ctrl" | "control" => Some("Ctrl"),
        "shift" => Some("Shift"),
        "alt" => Some("Alt"),
        "meta" | "super" | "cmd" => Some("Meta"),
        _ => None,
    }
}

/// Normalize a main key token to its canonical display name.
fn normalize_key_name(token: &str) -> String {
    let lower = token.to_ascii_lowercase();
    let canonical = match lower.as_str() {
        "esc" | "escape" => "Esc",
        "tab" => "Tab",
        "space" => "Space",
        "enter" | "return" => "Enter",
        "backspace" => "Backspace",
        "del" | "delete" => "Del",
        "ins" | "insert" => "Ins",
        "home" => "Home",
        "end" => "End",
        "pgup" | "pageup" => "PgUp",
        "pgdown" | "pagedown" => "PgDown",
        "left" => "Left",
        "right" => "Right",
        "up" => "Up",
        "down" => "Down",
        _ => {
            // Single characters uppercase; function keys F1..F24 uppercase;
            // anything else keeps its spelling as written.
            if token.chars().count() == 1 {
                return token.to_uppercase();
            }
            if let Some(rest) = lower.strip_prefix('f') {
                if rest.chars().all(|c| c.is_ascii_digit()) && !rest.is_empty() {
                    return format!("F{rest}");
                }
            }
            return token.to_string();
        }
    };
    canonical.to_string()
}
