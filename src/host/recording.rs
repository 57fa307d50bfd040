use std::collections::BTreeMap;
use std::io;

use tracing::debug;

use super::{GameHost, MapInfo};
use crate::app::types::{Skill, SoundCue, VolumeChannel};
use crate::saves::{DirSaveStore, SAVE_STRING_SIZE};

/// One outbound request made by the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    StartGame {
        skill: Skill,
        episode: usize,
        map: usize,
    },
    LoadGame(usize),
    SaveGame {
        slot: usize,
        description: String,
    },
    Sound(SoundCue),
    Volume(VolumeChannel, u8),
    Gamma(usize),
    PlayerMessage(String),
    Screenshot,
    StartTitle,
    Wait(u32),
    Quit,
}

/// A stand-in game that records every request and answers state queries
/// from plain fields. Saves are kept in memory as bare headers; an optional
/// directory store is consulted for slots never saved this session.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub networked: bool,
    pub game_in_progress: bool,
    pub in_level: bool,
    pub demo_playback: bool,
    pub now: u64,
    pub tic: u64,
    pub map: Option<MapInfo>,
    pub gamma: usize,
    pub calls: Vec<HostCall>,
    headers: BTreeMap<usize, Vec<u8>>,
    store: Option<DirSaveStore>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host with a game running in a level.
    pub fn in_game() -> Self {
        RecordingHost {
            game_in_progress: true,
            in_level: true,
            ..Self::default()
        }
    }

    pub fn with_store(mut self, store: DirSaveStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Seed a slot header as if a save with `description` existed.
    pub fn put_save(&mut self, slot: usize, description: &str) {
        let mut header = description.as_bytes().to_vec();
        header.resize(SAVE_STRING_SIZE, 0);
        self.headers.insert(slot, header);
    }

    /// Advance both clocks by one tick.
    pub fn advance(&mut self) {
        self.now += 1;
        self.tic += 1;
    }

    pub fn sounds(&self) -> Vec<SoundCue> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Sound(cue) => Some(*cue),
                _ => None,
            })
            .collect()
    }

    pub fn saves(&self) -> Vec<(usize, String)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::SaveGame { slot, description } => Some((*slot, description.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn has_quit(&self) -> bool {
        self.calls.contains(&HostCall::Quit)
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    fn record(&mut self, call: HostCall) {
        debug!(?call, "host call");
        self.calls.push(call);
    }
}

impl GameHost for RecordingHost {
    fn start_game(&mut self, skill: Skill, episode: usize, map: usize) {
        self.game_in_progress = true;
        self.in_level = true;
        self.record(HostCall::StartGame {
            skill,
            episode,
            map,
        });
    }

    fn load_game(&mut self, slot: usize) {
        self.record(HostCall::LoadGame(slot));
    }

    fn save_game(&mut self, slot: usize, description: &str) {
        self.put_save(slot, description);
        self.record(HostCall::SaveGame {
            slot,
            description: description.to_string(),
        });
    }

    fn read_save_header(&mut self, slot: usize) -> io::Result<Vec<u8>> {
        if let Some(header) = self.headers.get(&slot) {
            return Ok(header.clone());
        }
        match &self.store {
            Some(store) => store.read_header(slot),
            None => Err(io::Error::new(io::ErrorKind::NotFound, "no save in slot")),
        }
    }

    fn play_sound(&mut self, cue: SoundCue) {
        self.record(HostCall::Sound(cue));
    }

    fn set_volume(&mut self, channel: VolumeChannel, level: u8) {
        self.record(HostCall::Volume(channel, level));
    }

    fn cycle_gamma(&mut self) -> usize {
        self.gamma = (self.gamma + 1) % 5;
        self.record(HostCall::Gamma(self.gamma));
        self.gamma
    }

    fn is_networked(&self) -> bool {
        self.networked
    }

    fn is_game_in_progress(&self) -> bool {
        self.game_in_progress
    }

    fn is_in_level(&self) -> bool {
        self.in_level
    }

    fn is_demo_playback(&self) -> bool {
        self.demo_playback
    }

    fn time(&self) -> u64 {
        self.now
    }

    fn game_tic(&self) -> u64 {
        self.tic
    }

    fn set_player_message(&mut self, text: &str) {
        self.record(HostCall::PlayerMessage(text.to_string()));
    }

    fn screenshot(&mut self) {
        self.record(HostCall::Screenshot);
    }

    fn start_title(&mut self) {
        self.game_in_progress = false;
        self.in_level = false;
        self.record(HostCall::StartTitle);
    }

    fn wait_ticks(&mut self, ticks: u32) {
        self.record(HostCall::Wait(ticks));
    }

    fn quit(&mut self) {
        self.record(HostCall::Quit);
    }

    fn current_map(&self) -> Option<MapInfo> {
        self.map.clone()
    }
}
