pub mod keyboard;
pub mod normalize;

pub use keyboard::KeyCode;
pub use normalize::{InputNormalizer, NormalizeContext};

/// Pre-decoded device event delivered by the host once per input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown {
        /// Logical key code.
        key: KeyCode,
        /// Character used for menu shortcuts (unshifted), if any.
        typed: Option<char>,
        /// Fully shift/layout-resolved character, used for save-name entry.
        text: Option<char>,
    },
    /// Relative mouse motion plus button bitmask (bit 0 left, bit 1 right).
    Mouse { buttons: u32, dx: i32, dy: i32 },
    /// Joystick axes (-1/0/1 style deflection) plus button bitmask.
    Joystick { buttons: u32, dx: i32, dy: i32 },
    /// Window close button.
    Quit,
}

impl InputEvent {
    /// Key-down for a printable key, with the same character in both slots.
    pub fn char(c: char) -> Self {
        InputEvent::KeyDown {
            key: KeyCode::Char(c),
            typed: Some(c),
            text: Some(c),
        }
    }

    /// Key-down for a non-printable key.
    pub fn key(key: KeyCode) -> Self {
        InputEvent::KeyDown {
            key,
            typed: None,
            text: None,
        }
    }
}

/// Output of the normalization stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalInput {
    pub key: KeyCode,
    pub typed: Option<char>,
    /// Save-slot selection came from the joystick fire button.
    pub joypad_save: bool,
}

impl LogicalInput {
    pub fn key(key: KeyCode) -> Self {
        LogicalInput {
            key,
            typed: None,
            joypad_save: false,
        }
    }
}
