use crate::app::types::{ItemStatus, SoundCue};
use crate::app::MenuContext;
use crate::errors::Result;
use crate::host::GameHost;
use crate::input::keyboard::is_null_key;
use crate::input::LogicalInput;

/// Keys usable while a menu is shown.
pub fn handle_navigation(
    ctx: &mut MenuContext,
    host: &mut dyn GameHost,
    input: &LogicalInput,
) -> Result<bool> {
    let key = input.key;
    let keys = ctx.settings.keys.clone();

    if keys.is_down(&key) {
        ctx.move_down(host)?;
        return Ok(true);
    }
    if keys.is_up(&key) {
        ctx.move_up(host)?;
        return Ok(true);
    }
    if keys.is_left(&key) || keys.is_right(&key) {
        let item = ctx.focused_item()?;
        if let (Some(action), ItemStatus::Slider) = (item.action, ctx.focused_status()?) {
            let choice = usize::from(keys.is_right(&key));
            host.play_sound(SoundCue::Stnmov);
            ctx.activate(action, choice, host)?;
        }
        return Ok(true);
    }
    if keys.is_forward(&key) {
        let action = ctx.focused_item()?.action;
        let status = ctx.focused_status()?;
        if let Some(action) = action.filter(|_| status.can_activate()) {
            ctx.persist_focus();
            if status == ItemStatus::Slider {
                ctx.activate(action, 1, host)?;
                host.play_sound(SoundCue::Stnmov);
            } else {
                ctx.activate(action, ctx.item_on, host)?;
                host.play_sound(SoundCue::Pistol);
            }
        }
        return Ok(true);
    }
    if keys.is_activate(&key) {
        ctx.persist_focus();
        ctx.clear_menus();
        host.play_sound(SoundCue::Swtchx);
        return Ok(true);
    }
    if keys.is_back(&key) {
        ctx.go_back(host);
        return Ok(true);
    }

    let typed = if is_null_key(&key) { Some('\0') } else { input.typed };
    if let Some(ch) = typed {
        if ctx.search_shortcut(ch).is_some() {
            host.play_sound(SoundCue::Pstop);
            return Ok(true);
        }
    }
    Ok(false)
}
