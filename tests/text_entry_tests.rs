mod common;

use common::*;
use gamemenu::app::types::{NodeId, QuickSaveSlot, Response};
use gamemenu::app::EntryLimits;
use gamemenu::host::{HostCall, MapInfo, RecordingHost};
use gamemenu::input::{InputEvent, KeyCode};
use gamemenu::MenuContext;

const FIRE: u32 = 1 << 1;

fn open_save_menu(ctx: &mut MenuContext, host: &mut RecordingHost) {
    press(ctx, host, KeyCode::F(2));
    assert_eq!(ctx.current_node(), Some(NodeId::Save));
}

#[test]
fn entry_caps_length_and_commit_saves_once() {
    let mut ctx = context();
    ctx.entry_limits = EntryLimits {
        max_chars: 8,
        max_width: 176,
    };
    let mut host = game_host();
    open_save_menu(&mut ctx, &mut host);
    press(&mut ctx, &mut host, KeyCode::Enter);
    assert!(ctx.is_text_entry_active());
    assert_eq!(ctx.text_entry.as_ref().map(|e| e.buffer()), Some(""));

    type_str(&mut ctx, &mut host, "abcdefghi");
    assert_eq!(ctx.text_entry.as_ref().map(|e| e.buffer()), Some("ABCDEFGH"));

    assert!(press(&mut ctx, &mut host, KeyCode::Enter));
    assert!(!ctx.is_text_entry_active());
    assert_eq!(host.saves(), vec![(0, "ABCDEFGH".to_string())]);
    assert_eq!(ctx.save_strings[0], "ABCDEFGH");
    assert!(!ctx.active);
}

#[test]
fn escape_restores_previous_description() {
    let mut ctx = context();
    let mut host = game_host();
    host.put_save(1, "HANGAR");
    open_save_menu(&mut ctx, &mut host);
    type_char(&mut ctx, &mut host, '2');
    assert_eq!(ctx.item_on, 1);
    press(&mut ctx, &mut host, KeyCode::Enter);
    assert_eq!(ctx.text_entry.as_ref().map(|e| e.buffer()), Some("HANGAR"));

    press(&mut ctx, &mut host, KeyCode::Backspace);
    press(&mut ctx, &mut host, KeyCode::Backspace);
    type_char(&mut ctx, &mut host, 'x');
    assert_eq!(ctx.text_entry.as_ref().map(|e| e.buffer()), Some("HANGX"));

    assert!(press(&mut ctx, &mut host, KeyCode::Esc));
    assert!(!ctx.is_text_entry_active());
    assert_eq!(ctx.save_strings[1], "HANGAR");
    assert!(ctx.active);
    assert_eq!(ctx.current, NodeId::Save);
    assert!(host.saves().is_empty());
}

#[test]
fn empty_name_is_not_saved() {
    let mut ctx = context();
    let mut host = game_host();
    open_save_menu(&mut ctx, &mut host);
    press(&mut ctx, &mut host, KeyCode::Enter);
    press(&mut ctx, &mut host, KeyCode::Enter);
    assert!(!ctx.is_text_entry_active());
    assert!(host.saves().is_empty());
    assert!(ctx.active);
}

#[test]
fn entry_swallows_hotkeys_and_navigation() {
    let mut ctx = context();
    let mut host = game_host();
    open_save_menu(&mut ctx, &mut host);
    press(&mut ctx, &mut host, KeyCode::Enter);
    host.clear_calls();

    assert!(press(&mut ctx, &mut host, KeyCode::F(10)));
    assert!(press(&mut ctx, &mut host, KeyCode::Down));
    assert!(type_char(&mut ctx, &mut host, '{'));
    assert!(!ctx.is_message_pending());
    assert_eq!(ctx.item_on, 0);
    assert_eq!(ctx.text_entry.as_ref().map(|e| e.buffer()), Some(""));
    assert!(host.calls.is_empty());
}

#[test]
fn resolved_text_is_used_without_vanilla_mapping() {
    let mut ctx = context();
    ctx.settings.vanilla_keyboard_mapping = false;
    let mut host = game_host();
    open_save_menu(&mut ctx, &mut host);
    press(&mut ctx, &mut host, KeyCode::Enter);

    send(
        &mut ctx,
        &mut host,
        InputEvent::KeyDown {
            key: KeyCode::Char('1'),
            typed: Some('1'),
            text: Some('!'),
        },
    );
    assert_eq!(ctx.text_entry.as_ref().map(|e| e.buffer()), Some("!"));
}

#[test]
fn joypad_save_fills_in_map_name() {
    let mut ctx = context();
    let mut host = game_host();
    host.map = Some(MapInfo {
        lump: "MAP07".into(),
        wad_file: "dead.wad".into(),
        from_iwad: false,
        has_save_dir: true,
    });
    open_save_menu(&mut ctx, &mut host);

    let fire = InputEvent::Joystick {
        buttons: FIRE,
        dx: 0,
        dy: 0,
    };
    assert!(send(&mut ctx, &mut host, fire));
    assert_eq!(
        ctx.text_entry.as_ref().map(|e| e.buffer()),
        Some("MAP07 (DEAD)")
    );
    assert!(!ctx.joypad_save);

    // Fire is debounced, then commits the entry.
    assert!(!send(&mut ctx, &mut host, fire));
    for _ in 0..6 {
        host.advance();
    }
    assert!(send(&mut ctx, &mut host, fire));
    assert_eq!(host.saves(), vec![(0, "MAP07 (DEAD)".to_string())]);
}

#[test]
fn quick_save_picks_a_slot_then_prompts() {
    let mut ctx = context();
    let mut host = game_host();

    press(&mut ctx, &mut host, KeyCode::F(6));
    assert_eq!(ctx.current_node(), Some(NodeId::Save));
    assert_eq!(ctx.quick_save, QuickSaveSlot::Picking);

    press(&mut ctx, &mut host, KeyCode::Enter);
    type_str(&mut ctx, &mut host, "base");
    press(&mut ctx, &mut host, KeyCode::Enter);
    assert_eq!(ctx.quick_save, QuickSaveSlot::Slot(0));
    assert!(!ctx.active);

    press(&mut ctx, &mut host, KeyCode::F(6));
    let msg = ctx.message.as_ref().expect("quick-save prompt");
    assert_eq!(msg.response, Some(Response::QuickSave));
    assert!(msg.text.contains("'BASE'"));

    type_char(&mut ctx, &mut host, 'y');
    assert_eq!(
        host.saves(),
        vec![(0, "BASE".to_string()), (0, "BASE".to_string())]
    );
    assert!(!ctx.active);
}

#[test]
fn quick_load_without_slot_explains() {
    let mut ctx = context();
    let mut host = game_host();
    press(&mut ctx, &mut host, KeyCode::F(9));
    let msg = ctx.message.as_ref().expect("quick-load notice");
    assert!(!msg.needs_input);
    assert_eq!(msg.text, gamemenu::app::strings::QSAVESPOT);
}

#[test]
fn quick_load_confirmed_loads_the_slot() {
    let mut ctx = context();
    let mut host = game_host();
    ctx.quick_save = QuickSaveSlot::Slot(3);
    ctx.save_strings[3] = "CANYON".into();
    press(&mut ctx, &mut host, KeyCode::F(9));
    assert!(ctx.message.as_ref().is_some_and(|m| m.text.contains("'CANYON'")));
    type_char(&mut ctx, &mut host, 'y');
    assert!(host.calls.contains(&HostCall::LoadGame(3)));
    assert!(!ctx.active);
}

#[test]
fn save_outside_a_game_is_refused() {
    let mut ctx = context();
    let mut host = idle_host();
    press(&mut ctx, &mut host, KeyCode::F(2));
    assert_eq!(
        ctx.message.as_ref().map(|m| m.text.as_str()),
        Some(gamemenu::app::strings::SAVEDEAD)
    );
    assert_eq!(ctx.current, NodeId::Main);
}
