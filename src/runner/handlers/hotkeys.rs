use tracing::debug;

use crate::app::types::SoundCue;
use crate::app::MenuContext;
use crate::errors::Result;
use crate::host::GameHost;
use crate::input::LogicalInput;

/// Global function keys and the menu-open key.
///
/// Returns `Some(consumed)` when the event was settled here and `None` when
/// a menu is shown and the event should go on to navigation.
pub fn handle_hotkeys(
    ctx: &mut MenuContext,
    host: &mut dyn GameHost,
    input: &LogicalInput,
) -> Result<Option<bool>> {
    let key = input.key;
    let keys = ctx.settings.keys.clone();

    // Checked ahead of the menu gate so it also works with a menu shown.
    if (ctx.settings.devparm && key == keys.help) || keys.is_screenshot(&key) {
        host.screenshot();
        return Ok(Some(true));
    }

    if ctx.active {
        return Ok(None);
    }

    if key == keys.help {
        ctx.open_help();
        host.play_sound(SoundCue::Swtchn);
    } else if key == keys.save {
        ctx.start_control_panel();
        host.play_sound(SoundCue::Swtchn);
        ctx.open_save_menu(host)?;
    } else if key == keys.load {
        ctx.start_control_panel();
        host.play_sound(SoundCue::Swtchn);
        ctx.open_load_menu(host)?;
    } else if key == keys.volume {
        ctx.open_volume();
        host.play_sound(SoundCue::Swtchn);
    } else if key == keys.quick_save {
        host.play_sound(SoundCue::Swtchn);
        ctx.quick_save(host)?;
    } else if key == keys.end_game {
        host.play_sound(SoundCue::Swtchn);
        ctx.end_game(host)?;
    } else if key == keys.messages {
        ctx.toggle_messages(host);
        host.play_sound(SoundCue::Swtchn);
    } else if key == keys.quick_load {
        host.play_sound(SoundCue::Swtchn);
        ctx.quick_load(host)?;
    } else if key == keys.quit {
        host.play_sound(SoundCue::Swtchn);
        ctx.start_quit_prompt(host)?;
    } else if key == keys.gamma {
        ctx.cycle_gamma(host);
    } else if keys.is_activate(&key) {
        ctx.start_control_panel();
        host.play_sound(SoundCue::Swtchn);
    } else {
        return Ok(Some(false));
    }
    debug!(?key, "hotkey handled");
    Ok(Some(true))
}
