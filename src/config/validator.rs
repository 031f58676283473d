//! Startup validation of key-binding entries.
//!
//! Problems found here are never fatal: the editor collects the warnings and
//! shows them once in a dialog, leaving the bindings as configured.

use crate::config::entry::ConfigEntry;
use crate::config::key_binding::KeyChord;
use crate::config::registry::ConfigRegistry;
use crate::constants::input::{MODIFIER_KEYS, SPEED_MULTIPLIER};

/// Check every key binding in `registry` and return ordered warning strings.
///
/// Per-binding problems (unset value, unparseable chord, bad modifier-role
/// assignment, collision with the speed modifier) are reported in definition
/// order; chord conflicts follow, one combined warning per chord naming all
/// entries sharing it. Modifier-role bindings are held keys, not shortcuts,
/// so they are excluded from conflict detection.
pub fn validate_key_bindings(registry: &ConfigRegistry) -> Vec<String> {
    let mut warnings = Vec::new();
    // chord display name -> labels of bindings resolving to it, first-seen order
    let mut chord_users: Vec<(String, Vec<String>)> = Vec::new();

    let speed_key = speed_modifier_key(registry);

    for entry in registry.entries() {
        let Some(value) = entry.value().as_str() else {
            continue;
        };

        if value.trim().is_empty() {
            warnings.push(format!("Key binding \"{}\" is not set.", entry.label()));
            continue;
        }

        if entry.modifier_role().is_modifier() {
            if !MODIFIER_KEYS
                .iter()
                .any(|m| m.eq_ignore_ascii_case(value.trim()))
            {
                warnings.push(format!(
                    "The {} modifier \"{}\" must be one of Ctrl, Alt, or Shift, but is set to \"{}\".",
                    entry.modifier_role(),
                    entry.label(),
                    value
                ));
            }
            continue;
        }

        let chords = match KeyChord::parse_list(value) {
            Ok(chords) => chords,
            Err(message) => {
                warnings.push(format!(
                    "Key binding \"{}\" has an invalid value \"{}\": {}.",
                    entry.label(),
                    value,
                    message
                ));
                continue;
            }
        };

        for chord in &chords {
            if let (Some(bare), Some(speed)) = (chord.as_bare_modifier(), speed_key.as_deref()) {
                if bare.eq_ignore_ascii_case(speed) {
                    warnings.push(format!(
                        "Key binding \"{}\" is set to the speed modifier key ({}); \
                         pressing it would always trigger {}x speed.",
                        entry.label(),
                        speed,
                        SPEED_MULTIPLIER
                    ));
                }
            }
            record_chord_user(&mut chord_users, chord, entry);
        }
    }

    for (chord, labels) in chord_users {
        if labels.len() > 1 {
            warnings.push(format!(
                "Key bindings {} are all set to \"{}\".",
                quote_list(&labels),
                chord
            ));
        }
    }

    warnings
}

/// The configured speed-modifier key name, if any binding declares that role.
fn speed_modifier_key(registry: &ConfigRegistry) -> Option<String> {
    registry
        .entries()
        .find(|e| e.modifier_role() == crate::config::key_binding::ModifierRole::Speed)
        .and_then(|e| e.value().as_str())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn record_chord_user(
    chord_users: &mut Vec<(String, Vec<String>)>,
    chord: &KeyChord,
    entry: &ConfigEntry,
) {
    let name = chord.display_name();
    if let Some((_, labels)) = chord_users.iter_mut().find(|(c, _)| *c == name) {
        labels.push(entry.label().to_string());
    } else {
        chord_users.push((name, vec![entry.label().to_string()]));
    }
}

fn quote_list(labels: &[String]) -> String {
    labels
        .iter()
        .map(|l| format!("\"{l}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::registry::ConfigRegistry;
    use crate::config::value::ConfigValue;

    const KEY_DEFS: &str = r#"{
        "speed_modifier": {
            "label": "Speed modifier",
            "category": "Key bindings",
            "type": "string",
            "default": "Ctrl",
            "modifier_role": "speed"
        },
        "line_modifier": {
            "label": "Line modifier",
            "category": "Key bindings",
            "type": "string",
            "default": "Shift",
            "modifier_role": "line"
        },
        "key_new_image": {
            "label": "New image",
            "category": "Key bindings",
            "type": "string",
            "default": "Ctrl+N"
        },
        "key_save": {
            "label": "Save",
            "category": "Key bindings",
            "type": "string",
            "default": "Ctrl+S"
        },
        "key_generate": {
            "label": "Generate",
            "category": "Key bindings",
            "type": "string",
            "default": "F5"
        }
    }"#;

    fn registry() -> ConfigRegistry {
        ConfigRegistry::from_json("test", KEY_DEFS).unwrap()
    }

    #[test]
    fn clean_bindings_produce_no_warnings() {
        let warnings = validate_key_bindings(&registry());
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    }

    #[test]
    fn unset_binding_warns_with_its_name() {
        let mut registry = registry();
        registry
            .set("key_generate", ConfigValue::Str(String::new()))
            .unwrap();

        let warnings = validate_key_bindings(&registry);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0], "Key binding \"Generate\" is not set.");
    }

    #[test]
    fn identical_chords_produce_one_combined_warning() {
        let mut registry = registry();
        registry
            .set("key_save", ConfigValue::Str("Ctrl+N".to_string()))
            .unwrap();

        let warnings = validate_key_bindings(&registry);
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0],
            "Key bindings \"New image\", \"Save\" are all set to \"Ctrl+N\"."
        );
    }

    #[test]
    fn conflict_detection_normalizes_chord_spelling() {
        let mut registry = registry();
        // Same chord, different spelling
        registry
            .set("key_save", ConfigValue::Str("ctrl + n".to_string()))
            .unwrap();

        let warnings = validate_key_bindings(&registry);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("\"Ctrl+N\""));
    }

    #[test]
    fn binding_on_speed_modifier_key_warns_about_speed() {
        let mut registry = registry();
        registry
            .set("key_generate", ConfigValue::Str("Ctrl".to_string()))
            .unwrap();

        let warnings = validate_key_bindings(&registry);
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0],
            "Key binding \"Generate\" is set to the speed modifier key (Ctrl); \
             pressing it would always trigger 10x speed."
        );
    }

    #[test]
    fn modifier_role_outside_allowed_set_warns() {
        let mut registry = registry();
        registry
            .set("line_modifier", ConfigValue::Str("F3".to_string()))
            .unwrap();

        let warnings = validate_key_bindings(&registry);
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0],
            "The line modifier \"Line modifier\" must be one of Ctrl, Alt, or Shift, \
             but is set to \"F3\"."
        );
    }

    #[test]
    fn modifier_roles_are_excluded_from_conflicts() {
        let mut registry = registry();
        // Both role bindings on Shift: legitimate, no conflict warning
        registry
            .set("speed_modifier", ConfigValue::Str("Shift".to_string()))
            .unwrap();

        let warnings = validate_key_bindings(&registry);
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    }

    #[test]
    fn invalid_chord_value_warns() {
        let mut registry = registry();
        registry
            .set("key_save", ConfigValue::Str("N+Ctrl".to_string()))
            .unwrap();

        let warnings = validate_key_bindings(&registry);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Key binding \"Save\" has an invalid value"));
    }

    #[test]
    fn alternate_chords_each_participate_in_conflicts() {
        let mut registry = registry();
        registry
            .set("key_generate", ConfigValue::Str("F5, Ctrl+S".to_string()))
            .unwrap();

        let warnings = validate_key_bindings(&registry);
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0],
            "Key bindings \"Save\", \"Generate\" are all set to \"Ctrl+S\"."
        );
    }

    #[test]
    fn per_entry_warnings_precede_conflicts_in_definition_order() {
        let mut registry = registry();
        registry
            .set("key_new_image", ConfigValue::Str(String::new()))
            .unwrap();
        registry
            .set("key_generate", ConfigValue::Str("Ctrl+S".to_string()))
            .unwrap();

        let warnings = validate_key_bindings(&registry);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("\"New image\" is not set"));
        assert!(warnings[1].contains("are all set to \"Ctrl+S\""));
    }
}
