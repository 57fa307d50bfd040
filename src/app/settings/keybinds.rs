// Menu key bindings.
//
// Handlers refer to menu roles (`is_up`, `is_confirm`, ...) rather than raw
// `KeyCode` patterns so the bindings can come from the settings file.

use serde::{Deserialize, Serialize};

use crate::input::keyboard::{key_name, parse_key};
use crate::input::KeyCode;

mod key_serde {
    use super::*;
    use serde::{de, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(code: &KeyCode, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&key_name(code))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<KeyCode, D::Error> {
        let name = String::deserialize(d)?;
        parse_key(&name).ok_or_else(|| de::Error::custom(format!("unknown key name `{}`", name)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    #[serde(with = "key_serde")]
    pub up: KeyCode,
    #[serde(with = "key_serde")]
    pub down: KeyCode,
    #[serde(with = "key_serde")]
    pub left: KeyCode,
    #[serde(with = "key_serde")]
    pub right: KeyCode,
    #[serde(with = "key_serde")]
    pub back: KeyCode,
    #[serde(with = "key_serde")]
    pub forward: KeyCode,
    #[serde(with = "key_serde")]
    pub activate: KeyCode,
    #[serde(with = "key_serde")]
    pub confirm: KeyCode,
    #[serde(with = "key_serde")]
    pub abort: KeyCode,
    #[serde(with = "key_serde")]
    pub help: KeyCode,
    #[serde(with = "key_serde")]
    pub save: KeyCode,
    #[serde(with = "key_serde")]
    pub load: KeyCode,
    #[serde(with = "key_serde")]
    pub volume: KeyCode,
    #[serde(with = "key_serde")]
    pub quick_save: KeyCode,
    #[serde(with = "key_serde")]
    pub end_game: KeyCode,
    #[serde(with = "key_serde")]
    pub messages: KeyCode,
    #[serde(with = "key_serde")]
    pub quick_load: KeyCode,
    #[serde(with = "key_serde")]
    pub quit: KeyCode,
    #[serde(with = "key_serde")]
    pub gamma: KeyCode,
    /// `None` (KeyCode::Null) leaves screenshots unbound.
    #[serde(with = "key_serde")]
    pub screenshot: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        KeyBindings {
            up: KeyCode::Up,
            down: KeyCode::Down,
            left: KeyCode::Left,
            right: KeyCode::Right,
            back: KeyCode::Backspace,
            forward: KeyCode::Enter,
            activate: KeyCode::Esc,
            confirm: KeyCode::Char('y'),
            abort: KeyCode::Char('n'),
            help: KeyCode::F(1),
            save: KeyCode::F(2),
            load: KeyCode::F(3),
            volume: KeyCode::F(4),
            quick_save: KeyCode::F(6),
            end_game: KeyCode::F(7),
            messages: KeyCode::F(8),
            quick_load: KeyCode::F(9),
            quit: KeyCode::F(10),
            gamma: KeyCode::F(11),
            screenshot: KeyCode::Null,
        }
    }
}

impl KeyBindings {
    pub fn is_up(&self, code: &KeyCode) -> bool {
        *code == self.up
    }

    pub fn is_down(&self, code: &KeyCode) -> bool {
        *code == self.down
    }

    pub fn is_left(&self, code: &KeyCode) -> bool {
        *code == self.left
    }

    pub fn is_right(&self, code: &KeyCode) -> bool {
        *code == self.right
    }

    pub fn is_back(&self, code: &KeyCode) -> bool {
        *code == self.back
    }

    pub fn is_forward(&self, code: &KeyCode) -> bool {
        *code == self.forward
    }

    pub fn is_activate(&self, code: &KeyCode) -> bool {
        *code == self.activate
    }

    pub fn is_confirm(&self, code: &KeyCode) -> bool {
        *code == self.confirm
    }

    pub fn is_abort(&self, code: &KeyCode) -> bool {
        *code == self.abort
    }

    /// Screenshot key, never matching when unbound.
    pub fn is_screenshot(&self, code: &KeyCode) -> bool {
        *code != KeyCode::Null && *code == self.screenshot
    }
}

/// Joystick button indices. Index 0 never reports pressed (legacy).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoystickBindings {
    pub fire: Option<u8>,
    #[serde(rename = "use")]
    pub use_: Option<u8>,
    pub menu: Option<u8>,
}

impl Default for JoystickBindings {
    fn default() -> Self {
        JoystickBindings {
            fire: Some(1),
            use_: Some(3),
            menu: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbound_screenshot_never_matches() {
        let keys = KeyBindings::default();
        assert!(!keys.is_screenshot(&KeyCode::Null));
        let keys = KeyBindings {
            screenshot: KeyCode::PrintScreen,
            ..KeyBindings::default()
        };
        assert!(keys.is_screenshot(&KeyCode::PrintScreen));
    }

    #[test]
    fn bindings_read_from_toml_names() {
        let keys: KeyBindings = toml::from_str("confirm = \"j\"\nquit = \"F12\"\n").unwrap();
        assert!(keys.is_confirm(&KeyCode::Char('j')));
        assert_eq!(keys.quit, KeyCode::F(12));
        // unspecified roles keep their defaults
        assert_eq!(keys.up, KeyCode::Up);
    }
}
