use tracing::{debug, warn};

use super::MenuContext;
use crate::app::types::{Response, SoundCue};
use crate::errors::{MenuError, Result};
use crate::host::GameHost;
use crate::input::KeyCode;

/// A modal prompt shown over the menus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    /// Routine run with the answering key.
    pub response: Option<Response>,
    /// Yes/no prompt; informational messages take no input.
    pub needs_input: bool,
    /// Value of the menu-active flag when the message was opened.
    pub last_menu_active: bool,
    /// Ticks until an informational message is dismissed.
    pub ticks_left: u32,
}

impl MenuContext {
    /// Open a modal message. The menu-active flag is recorded so it can be
    /// restored when the message closes, then forced on.
    ///
    /// Opening a second message while one is pending is refused.
    pub fn start_message(
        &mut self,
        text: impl Into<String>,
        response: Option<Response>,
        needs_input: bool,
    ) -> Result<()> {
        if let Some(pending) = &self.message {
            warn!(pending = %pending.text, "refusing to open a second message");
            return Err(MenuError::MessageAlreadyOpen {
                pending: pending.text.clone(),
            });
        }
        let text = text.into();
        debug!(?response, needs_input, "message opened");
        self.message = Some(Message {
            text,
            response,
            needs_input,
            last_menu_active: self.active,
            ticks_left: self.settings.message_timeout_ticks,
        });
        self.active = true;
        Ok(())
    }

    /// Close the pending message without running its response, restoring the
    /// menu-active flag it recorded.
    pub fn dismiss_message(&mut self) {
        if let Some(msg) = self.message.take() {
            debug!("message dismissed");
            self.active = msg.last_menu_active;
        }
    }

    /// Answer a yes/no message with `key`: restore the active flag, clear
    /// the message, run its response, then hide the menus.
    pub(crate) fn answer_message(&mut self, key: KeyCode, host: &mut dyn GameHost) -> Result<()> {
        let Some(msg) = self.message.take() else {
            return Ok(());
        };
        self.active = msg.last_menu_active;
        if let Some(response) = msg.response {
            debug!(?response, ?key, "message answered");
            self.respond(response, key, host)?;
        }
        self.active = false;
        host.play_sound(SoundCue::Swtchx);
        Ok(())
    }

    /// Count down an informational message and dismiss it when its time is up.
    pub(super) fn tick_message(&mut self) {
        let expired = match &mut self.message {
            Some(msg) if !msg.needs_input => {
                msg.ticks_left = msg.ticks_left.saturating_sub(1);
                msg.ticks_left == 0
            }
            _ => false,
        };
        if expired {
            self.dismiss_message();
        }
    }
}
