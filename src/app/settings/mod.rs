pub mod config_dirs;
pub mod keybinds;
pub mod read_settings;
pub mod write_settings;

use serde::{Deserialize, Serialize};

use crate::app::types::GameVariant;

// Re-export commonly used types/functions for convenience
pub use config_dirs::{project_config_dir, settings_path};
pub use keybinds::{JoystickBindings, KeyBindings};
pub use read_settings::{load_settings, load_settings_from};
pub use write_settings::{save_settings, save_settings_to};

/// Ticks an informational message stays up (three seconds at 35 Hz).
pub const DEFAULT_MESSAGE_TICKS: u32 = 105;

/// User-adjustable values changed from the options and sound menus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub show_messages: bool,
    /// 0..=9
    pub mouse_sensitivity: u8,
    /// 0..=15
    pub sfx_volume: u8,
    /// 0..=15
    pub music_volume: u8,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            show_messages: true,
            mouse_sensitivity: 5,
            sfx_volume: 8,
            music_volume: 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub variant: GameVariant,
    /// Save-name entry ignores shift and uses the raw key code.
    pub vanilla_keyboard_mapping: bool,
    /// Developer mode: the help key also takes screenshots.
    pub devparm: bool,
    pub message_timeout_ticks: u32,
    pub keys: KeyBindings,
    pub joystick: JoystickBindings,
    pub preferences: Preferences,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            variant: GameVariant::default(),
            vanilla_keyboard_mapping: true,
            devparm: false,
            message_timeout_ticks: DEFAULT_MESSAGE_TICKS,
            keys: KeyBindings::default(),
            joystick: JoystickBindings::default(),
            preferences: Preferences::default(),
        }
    }
}
