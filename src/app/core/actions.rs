use tracing::{debug, warn};

use super::MenuContext;
use crate::app::strings::{self, GAMMA_LEVELS};
use crate::app::types::{
    GameMode, GameVersion, ItemAction, NodeId, QuickSaveSlot, Response, Skill, SoundCue,
    VolumeChannel,
};
use crate::errors::Result;
use crate::host::GameHost;
use crate::input::KeyCode;

const MAX_SENSITIVITY: u8 = 9;
const MAX_VOLUME: u8 = 15;
/// Ticks to let the farewell sound play before quitting.
const QUIT_SOUND_TICKS: u32 = 105;

const QUIT_SOUNDS_DOOM1: [SoundCue; 8] = [
    SoundCue::Pldeth,
    SoundCue::Dmpain,
    SoundCue::Popain,
    SoundCue::Slop,
    SoundCue::Telept,
    SoundCue::Posit1,
    SoundCue::Posit3,
    SoundCue::Sgtatk,
];

const QUIT_SOUNDS_DOOM2: [SoundCue; 8] = [
    SoundCue::Vilact,
    SoundCue::Getpow,
    SoundCue::Boscub,
    SoundCue::Slop,
    SoundCue::Skeswg,
    SoundCue::Kntdth,
    SoundCue::Bspact,
    SoundCue::Sgtatk,
];

/// Step a 0..=max value down (choice 0) or up (choice 1).
fn step(value: u8, choice: usize, max: u8) -> u8 {
    match choice {
        0 => value.saturating_sub(1),
        1 if value < max => value + 1,
        _ => value,
    }
}

impl MenuContext {
    fn is_commercial(&self) -> bool {
        self.settings.variant.mode == GameMode::Commercial
    }

    /// Run the action bound to an item.
    pub(crate) fn activate(
        &mut self,
        action: ItemAction,
        choice: usize,
        host: &mut dyn GameHost,
    ) -> Result<()> {
        debug!(?action, choice, "item action");
        match action {
            ItemAction::NewGame => {
                if host.is_networked() && !host.is_demo_playback() {
                    return self.start_message(strings::NEWGAME, None, false);
                }
                let skip_episodes = self.is_commercial()
                    || self.settings.variant.version == GameVersion::Chex;
                if skip_episodes {
                    self.setup_next_menu(NodeId::NewGame);
                } else {
                    self.setup_next_menu(NodeId::Episode);
                }
            }
            ItemAction::Episode => {
                if self.settings.variant.mode == GameMode::Shareware && choice != 0 {
                    self.start_message(strings::SWSTRING, None, false)?;
                    self.setup_next_menu(NodeId::ReadThis1);
                    return Ok(());
                }
                self.episode = choice;
                self.setup_next_menu(NodeId::NewGame);
            }
            ItemAction::ChooseSkill => {
                let Some(skill) = Skill::from_choice(choice) else {
                    warn!(choice, "no skill level for choice");
                    return Ok(());
                };
                if skill == Skill::Nightmare {
                    return self.start_message(
                        strings::NIGHTMARE,
                        Some(Response::VerifyNightmare),
                        true,
                    );
                }
                host.start_game(skill, self.episode + 1, 1);
                self.clear_menus();
            }
            ItemAction::Options => self.setup_next_menu(NodeId::Options),
            ItemAction::LoadGame => self.open_load_menu(host)?,
            ItemAction::SaveGame => self.open_save_menu(host)?,
            ItemAction::ReadThis => self.setup_next_menu(NodeId::ReadThis1),
            ItemAction::ReadThis2 => self.setup_next_menu(NodeId::ReadThis2),
            ItemAction::FinishReadThis => self.setup_next_menu(NodeId::Main),
            ItemAction::QuitGame => self.start_quit_prompt(host)?,
            ItemAction::EndGame => self.end_game(host)?,
            ItemAction::ToggleMessages => self.toggle_messages(host),
            ItemAction::ChangeSensitivity => {
                let prefs = &mut self.settings.preferences;
                prefs.mouse_sensitivity = step(prefs.mouse_sensitivity, choice, MAX_SENSITIVITY);
            }
            ItemAction::Sound => self.setup_next_menu(NodeId::Sound),
            ItemAction::SfxVolume => {
                let prefs = &mut self.settings.preferences;
                prefs.sfx_volume = step(prefs.sfx_volume, choice, MAX_VOLUME);
                host.set_volume(VolumeChannel::Sfx, prefs.sfx_volume);
            }
            ItemAction::MusicVolume => {
                let prefs = &mut self.settings.preferences;
                prefs.music_volume = step(prefs.music_volume, choice, MAX_VOLUME);
                host.set_volume(VolumeChannel::Music, prefs.music_volume);
            }
            ItemAction::LoadSelect => {
                host.load_game(choice);
                self.clear_menus();
            }
            ItemAction::SaveSelect => self.open_text_entry(choice, host)?,
        }
        Ok(())
    }

    /// Run the response of an answered yes/no message. Only the confirm key
    /// has any effect.
    pub(crate) fn respond(
        &mut self,
        response: Response,
        key: KeyCode,
        host: &mut dyn GameHost,
    ) -> Result<()> {
        if !self.settings.keys.is_confirm(&key) {
            return Ok(());
        }
        match response {
            Response::Quit => {
                if !host.is_networked() {
                    let table = if self.is_commercial() {
                        &QUIT_SOUNDS_DOOM2
                    } else {
                        &QUIT_SOUNDS_DOOM1
                    };
                    let cue = table[((host.game_tic() >> 2) & 7) as usize];
                    host.play_sound(cue);
                    host.wait_ticks(QUIT_SOUND_TICKS);
                }
                host.quit();
            }
            Response::EndGame => {
                self.persist_focus();
                self.clear_menus();
                host.start_title();
            }
            Response::QuickSave => {
                if let QuickSaveSlot::Slot(slot) = self.quick_save {
                    self.do_save(slot, host);
                    host.play_sound(SoundCue::Swtchx);
                }
            }
            Response::QuickLoad => {
                if let QuickSaveSlot::Slot(slot) = self.quick_save {
                    self.activate(ItemAction::LoadSelect, slot, host)?;
                    host.play_sound(SoundCue::Swtchx);
                }
            }
            Response::VerifyNightmare => {
                host.start_game(Skill::Nightmare, self.episode + 1, 1);
                self.clear_menus();
            }
        }
        Ok(())
    }

    pub(crate) fn open_load_menu(&mut self, host: &mut dyn GameHost) -> Result<()> {
        if host.is_networked() {
            return self.start_message(strings::LOADNET, None, false);
        }
        self.setup_next_menu(NodeId::Load);
        self.read_save_strings(host);
        Ok(())
    }

    pub(crate) fn open_save_menu(&mut self, host: &mut dyn GameHost) -> Result<()> {
        if !host.is_game_in_progress() {
            return self.start_message(strings::SAVEDEAD, None, false);
        }
        if !host.is_in_level() {
            return Ok(());
        }
        self.setup_next_menu(NodeId::Save);
        self.read_save_strings(host);
        Ok(())
    }

    /// Save to `slot` under its current description and hide the menus. A
    /// pending quick-save pick adopts the slot.
    pub(crate) fn do_save(&mut self, slot: usize, host: &mut dyn GameHost) {
        host.save_game(slot, &self.save_strings[slot]);
        self.clear_menus();
        if self.quick_save == QuickSaveSlot::Picking {
            debug!(slot, "quick-save slot picked");
            self.quick_save = QuickSaveSlot::Slot(slot);
        }
    }

    pub(crate) fn quick_save(&mut self, host: &mut dyn GameHost) -> Result<()> {
        if !host.is_game_in_progress() {
            host.play_sound(SoundCue::Oof);
            return Ok(());
        }
        if !host.is_in_level() {
            return Ok(());
        }
        match self.quick_save {
            QuickSaveSlot::Slot(slot) => {
                let prompt = strings::quicksave_prompt(&self.save_strings[slot]);
                self.start_message(prompt, Some(Response::QuickSave), true)
            }
            QuickSaveSlot::Unset | QuickSaveSlot::Picking => {
                self.start_control_panel();
                self.read_save_strings(host);
                self.setup_next_menu(NodeId::Save);
                self.quick_save = QuickSaveSlot::Picking;
                Ok(())
            }
        }
    }

    pub(crate) fn quick_load(&mut self, host: &mut dyn GameHost) -> Result<()> {
        if host.is_networked() {
            return self.start_message(strings::QLOADNET, None, false);
        }
        match self.quick_save {
            QuickSaveSlot::Slot(slot) => {
                let prompt = strings::quickload_prompt(&self.save_strings[slot]);
                self.start_message(prompt, Some(Response::QuickLoad), true)
            }
            QuickSaveSlot::Unset | QuickSaveSlot::Picking => {
                self.start_message(strings::QSAVESPOT, None, false)
            }
        }
    }

    pub(crate) fn end_game(&mut self, host: &mut dyn GameHost) -> Result<()> {
        if !host.is_game_in_progress() {
            host.play_sound(SoundCue::Oof);
            return Ok(());
        }
        if host.is_networked() {
            return self.start_message(strings::NETEND, None, false);
        }
        self.start_message(strings::ENDGAME, Some(Response::EndGame), true)
    }

    /// Open the quit confirmation with a farewell line picked by game tic.
    pub(crate) fn start_quit_prompt(&mut self, host: &mut dyn GameHost) -> Result<()> {
        let lines = if self.is_commercial() {
            &strings::QUIT_MESSAGES_DOOM2
        } else {
            &strings::QUIT_MESSAGES_DOOM1
        };
        let line = lines[(host.game_tic() % lines.len() as u64) as usize];
        let text = format!("{}\n\n{}", line, strings::DOSY);
        self.start_message(text, Some(Response::Quit), true)
    }

    /// Whether the pending message is the quit confirmation.
    pub fn is_quit_prompt_pending(&self) -> bool {
        self.message
            .as_ref()
            .is_some_and(|m| m.response == Some(Response::Quit))
    }

    pub(crate) fn toggle_messages(&mut self, host: &mut dyn GameHost) {
        let prefs = &mut self.settings.preferences;
        prefs.show_messages = !prefs.show_messages;
        let text = if prefs.show_messages {
            strings::MSGON
        } else {
            strings::MSGOFF
        };
        host.set_player_message(text);
    }

    pub(crate) fn cycle_gamma(&mut self, host: &mut dyn GameHost) {
        let level = host.cycle_gamma().min(GAMMA_LEVELS.len() - 1);
        host.set_player_message(GAMMA_LEVELS[level]);
    }

    /// Show the first help page for this version.
    pub(crate) fn open_help(&mut self) {
        self.start_control_panel();
        self.current = if self.settings.variant.version >= GameVersion::Ultimate {
            NodeId::ReadThis2
        } else {
            NodeId::ReadThis1
        };
        self.item_on = 0;
    }

    /// Jump straight to the sound volume sliders.
    pub(crate) fn open_volume(&mut self) {
        self.start_control_panel();
        self.current = NodeId::Sound;
        self.item_on = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_clamps_both_ends() {
        assert_eq!(step(0, 0, 9), 0);
        assert_eq!(step(9, 1, 9), 9);
        assert_eq!(step(4, 1, 9), 5);
        assert_eq!(step(4, 0, 9), 3);
        assert_eq!(step(4, 7, 9), 4);
    }
}
