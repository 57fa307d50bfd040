pub mod core;
pub mod font;
pub mod menu;
pub mod settings;
pub mod strings;
pub mod types;

pub use core::{EntryLimits, MenuContext, Message, TextEntry};
pub use menu::{MenuItem, MenuModel, MenuNode};
pub use settings::Settings;
pub use types::{
    DrawRoutine, GameMode, GameVariant, GameVersion, ItemAction, ItemStatus, NodeId,
    QuickSaveSlot, Response, Skill, SoundCue, VolumeChannel,
};
