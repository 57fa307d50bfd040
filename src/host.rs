//! Boundary to the rest of the game.
//!
//! The menu never owns game state, audio or storage. Everything it needs from
//! those subsystems goes through `GameHost`, which the host frame loop
//! implements and passes to every `handle_event`/`tick` call.

use std::io;

use crate::app::types::{Skill, SoundCue, VolumeChannel};

/// Identity of the currently loaded map, used to name joypad saves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapInfo {
    /// Map lump name, e.g. `MAP01` or `E1M1`.
    pub lump: String,
    /// File the map was loaded from, e.g. `mywad.wad`.
    pub wad_file: String,
    /// The map comes from the base game data rather than an add-on file.
    pub from_iwad: bool,
    /// A save directory is configured.
    pub has_save_dir: bool,
}

pub trait GameHost {
    fn start_game(&mut self, skill: Skill, episode: usize, map: usize);
    fn load_game(&mut self, slot: usize);
    fn save_game(&mut self, slot: usize, description: &str);
    /// Raw bytes at the start of the save file for `slot`.
    fn read_save_header(&mut self, slot: usize) -> io::Result<Vec<u8>>;

    fn play_sound(&mut self, cue: SoundCue);
    /// `level` is in 0..=15.
    fn set_volume(&mut self, channel: VolumeChannel, level: u8);
    /// Advance to the next gamma level and return it (0..=4).
    fn cycle_gamma(&mut self) -> usize;

    fn is_networked(&self) -> bool;
    /// A game started by the user is running (false while dead in demos etc).
    fn is_game_in_progress(&self) -> bool;
    fn is_in_level(&self) -> bool;
    fn is_demo_playback(&self) -> bool;

    /// Monotonic tick counter used for input debounce.
    fn time(&self) -> u64;
    /// Game tick counter used to vary quit messages and sounds.
    fn game_tic(&self) -> u64;

    fn set_player_message(&mut self, text: &str);
    fn screenshot(&mut self);
    /// Return to the title/demo loop.
    fn start_title(&mut self);
    /// Block for `ticks` so a final sound can play.
    fn wait_ticks(&mut self, ticks: u32);
    fn quit(&mut self);
    fn current_map(&self) -> Option<MapInfo>;
}

mod recording;

pub use recording::{HostCall, RecordingHost};
