//! Input responder: every event goes through `handle_event` exactly once.
//!
//! After window-close handling and normalization, the event is offered to
//! each mode in priority order and the first one that claims it wins.

pub mod hotkeys;
pub mod message;
pub mod navigation;
pub mod text_entry;

pub use hotkeys::handle_hotkeys;
pub use message::handle_message;
pub use navigation::handle_navigation;
pub use text_entry::handle_text_entry;

use tracing::{debug, trace};

use crate::app::types::SoundCue;
use crate::app::MenuContext;
use crate::errors::Result;
use crate::host::GameHost;
use crate::input::InputEvent;

/// Route one input event. Returns whether the menu consumed it; an event
/// that is not consumed belongs to the game.
pub fn handle_event(
    ctx: &mut MenuContext,
    host: &mut dyn GameHost,
    event: &InputEvent,
) -> Result<bool> {
    if let InputEvent::Quit = event {
        handle_window_close(ctx, host)?;
        return Ok(true);
    }

    let Some(input) = ctx.normalize(event, host.time()) else {
        return Ok(false);
    };
    trace!(?input, "normalized");
    if input.joypad_save {
        ctx.joypad_save = true;
    }

    if ctx.is_text_entry_active() {
        return handle_text_entry(ctx, host, event, &input);
    }
    if ctx.is_message_pending() {
        return handle_message(ctx, host, &input);
    }
    if let Some(consumed) = handle_hotkeys(ctx, host, &input)? {
        return Ok(consumed);
    }
    handle_navigation(ctx, host, &input)
}

/// First close request opens the quit prompt, a second one confirms it.
/// Whatever else was on screen is abandoned first.
fn handle_window_close(ctx: &mut MenuContext, host: &mut dyn GameHost) -> Result<()> {
    if ctx.active && ctx.is_quit_prompt_pending() {
        let confirm = ctx.settings.keys.confirm;
        return ctx.answer_message(confirm, host);
    }
    if ctx.is_text_entry_active() {
        ctx.cancel_text_entry();
    }
    if ctx.is_message_pending() {
        ctx.dismiss_message();
    }
    debug!("window close requested");
    host.play_sound(SoundCue::Swtchn);
    ctx.start_quit_prompt(host)
}
