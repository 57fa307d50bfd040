use crate::app::MenuContext;
use crate::errors::Result;
use crate::host::GameHost;
use crate::input::keyboard::raw_char;
use crate::input::{InputEvent, KeyCode, LogicalInput};

/// Save-name editing. Every event is consumed while the entry is open.
pub fn handle_text_entry(
    ctx: &mut MenuContext,
    host: &mut dyn GameHost,
    event: &InputEvent,
    input: &LogicalInput,
) -> Result<bool> {
    match input.key {
        KeyCode::Backspace => {
            if let Some(entry) = ctx.text_entry.as_mut() {
                entry.backspace();
            }
        }
        KeyCode::Esc => ctx.cancel_text_entry(),
        KeyCode::Enter => ctx.commit_text_entry(host),
        key => {
            // Joystick and mouse derived keys carry no character.
            let InputEvent::KeyDown { text, .. } = event else {
                return Ok(true);
            };
            let ch = if ctx.settings.vanilla_keyboard_mapping {
                raw_char(&key)
            } else {
                *text
            };
            if let (Some(ch), Some(entry)) = (ch, ctx.text_entry.as_mut()) {
                entry.push(ch, ctx.font.as_ref());
            }
        }
    }
    Ok(true)
}
