use crate::app::MenuContext;
use crate::errors::Result;
use crate::host::GameHost;
use crate::input::{KeyCode, LogicalInput};

/// A pending message takes priority over the menus. Yes/no prompts answer
/// to space, escape, confirm and abort only; informational messages let
/// everything through and go away on their own.
pub fn handle_message(
    ctx: &mut MenuContext,
    host: &mut dyn GameHost,
    input: &LogicalInput,
) -> Result<bool> {
    let needs_input = ctx.message.as_ref().is_some_and(|m| m.needs_input);
    if !needs_input {
        return Ok(false);
    }
    let key = input.key;
    let keys = &ctx.settings.keys;
    let accepted = key == KeyCode::Char(' ')
        || key == KeyCode::Esc
        || keys.is_confirm(&key)
        || keys.is_abort(&key);
    if !accepted {
        return Ok(false);
    }
    ctx.answer_message(key, host)?;
    Ok(true)
}
