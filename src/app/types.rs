use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle of a node inside the menu model.
///
/// Parent links and the focused node are stored as `NodeId`s; the nodes
/// themselves are owned by `MenuModel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeId {
    Main,
    Episode,
    NewGame,
    Options,
    ReadThis1,
    ReadThis2,
    Sound,
    Load,
    Save,
}

impl NodeId {
    pub const ALL: [NodeId; 9] = [
        NodeId::Main,
        NodeId::Episode,
        NodeId::NewGame,
        NodeId::Options,
        NodeId::ReadThis1,
        NodeId::ReadThis2,
        NodeId::Sound,
        NodeId::Load,
        NodeId::Save,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Activation status of a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    /// Never focused, skipped by up/down traversal.
    Disabled,
    /// Can hold the cursor but does not activate (empty load slot).
    Unavailable,
    Selectable,
    /// Adjusted with left/right; forward nudges it right.
    Slider,
}

impl ItemStatus {
    pub fn is_disabled(self) -> bool {
        self == ItemStatus::Disabled
    }

    /// Whether forward/confirm may run the item's action.
    pub fn can_activate(self) -> bool {
        matches!(self, ItemStatus::Selectable | ItemStatus::Slider)
    }
}

/// Behaviour bound to a menu item. The `choice` argument passed on activation
/// is the focused index for plain items and 0/1 (left/right) for sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemAction {
    NewGame,
    Options,
    LoadGame,
    SaveGame,
    ReadThis,
    ReadThis2,
    FinishReadThis,
    QuitGame,
    Episode,
    ChooseSkill,
    EndGame,
    ToggleMessages,
    ChangeSensitivity,
    Sound,
    SfxVolume,
    MusicVolume,
    LoadSelect,
    SaveSelect,
}

/// Per-node drawing behaviour consumed by the frame builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawRoutine {
    MainMenu,
    Episode,
    NewGame,
    Options,
    ReadThis1,
    ReadThis2,
    ReadThisCommercial,
    Sound,
    Load,
    Save,
}

/// Routine run when a yes/no message is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Quit,
    EndGame,
    QuickSave,
    QuickLoad,
    VerifyNightmare,
}

/// Audio cues requested from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// Cursor moved.
    Pstop,
    /// Slider nudged.
    Stnmov,
    /// Item activated.
    Pistol,
    /// Menu opened.
    Swtchn,
    /// Menu or message closed.
    Swtchx,
    /// Refused action.
    Oof,
    Pldeth,
    Dmpain,
    Popain,
    Slop,
    Telept,
    Posit1,
    Posit3,
    Sgtatk,
    Vilact,
    Getpow,
    Boscub,
    Skeswg,
    Kntdth,
    Bspact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeChannel {
    Sfx,
    Music,
}

/// Quick-save slot selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuickSaveSlot {
    #[default]
    Unset,
    /// The next save made from the save menu becomes the quick-save slot.
    Picking,
    Slot(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skill {
    Baby,
    Easy,
    Medium,
    Hard,
    Nightmare,
}

impl Skill {
    pub fn from_choice(choice: usize) -> Option<Skill> {
        match choice {
            0 => Some(Skill::Baby),
            1 => Some(Skill::Easy),
            2 => Some(Skill::Medium),
            3 => Some(Skill::Hard),
            4 => Some(Skill::Nightmare),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    Shareware,
    #[default]
    Registered,
    Commercial,
    Retail,
}

/// Executable version being emulated. Ordering matters: menu adjustments test
/// for "at least ultimate" and similar ranges.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum GameVersion {
    Doom1_2,
    Doom1_666,
    Doom1_7,
    Doom1_8,
    #[default]
    Doom1_9,
    Hacx,
    Ultimate,
    Final,
    Final2,
    Chex,
}

/// Game mode and version pair that shapes the menu tree at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GameVariant {
    pub mode: GameMode,
    pub version: GameVersion,
}

impl fmt::Display for GameVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}/{:?}", self.mode, self.version)
    }
}
