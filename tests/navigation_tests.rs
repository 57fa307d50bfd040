mod common;

use common::*;
use gamemenu::app::menu::MenuItem;
use gamemenu::app::types::{ItemAction, ItemStatus, NodeId, SoundCue, VolumeChannel};
use gamemenu::host::HostCall;
use gamemenu::input::KeyCode;

fn sel(shortcut: char) -> MenuItem {
    MenuItem::selectable("M_OPTION", ItemAction::Options, shortcut)
}

fn disabled() -> MenuItem {
    MenuItem::new(ItemStatus::Disabled, "", None, '\0')
}

#[test]
fn down_skips_disabled_and_wraps() {
    let mut ctx = context_with_main(vec![disabled(), sel('a'), disabled(), sel('b')]);
    let mut host = idle_host();
    ctx.item_on = 1;

    let mut seen = Vec::new();
    for _ in 0..3 {
        assert!(press(&mut ctx, &mut host, KeyCode::Down));
        seen.push(ctx.item_on);
    }
    assert_eq!(seen, vec![3, 1, 3]);
    // One cue per step, including the steps over disabled items.
    assert_eq!(host.sounds(), vec![SoundCue::Pstop; 6]);
}

#[test]
fn equal_downs_and_ups_return_to_start() {
    let mut ctx = context();
    let mut host = idle_host();
    ctx.start_control_panel();
    ctx.setup_next_menu(NodeId::Options);
    let start = ctx.item_on;
    for _ in 0..4 {
        press(&mut ctx, &mut host, KeyCode::Down);
        assert!(!ctx.model.status(NodeId::Options, ctx.item_on).is_disabled());
    }
    for _ in 0..4 {
        press(&mut ctx, &mut host, KeyCode::Up);
        assert!(!ctx.model.status(NodeId::Options, ctx.item_on).is_disabled());
    }
    assert_eq!(ctx.item_on, start);
}

#[test]
fn repeated_shortcut_cycles_through_matches() {
    let mut ctx = context_with_main(vec![sel('a'), sel('b'), sel('c'), sel('b')]);
    let mut host = idle_host();

    assert!(type_char(&mut ctx, &mut host, 'b'));
    assert_eq!(ctx.item_on, 1);
    assert!(type_char(&mut ctx, &mut host, 'b'));
    assert_eq!(ctx.item_on, 3);
    assert!(type_char(&mut ctx, &mut host, 'b'));
    assert_eq!(ctx.item_on, 1);
}

#[test]
fn unmatched_char_is_not_consumed() {
    let mut ctx = context_with_main(vec![sel('a'), sel('b')]);
    let mut host = idle_host();
    assert!(!type_char(&mut ctx, &mut host, 'z'));
    assert_eq!(ctx.item_on, 0);
    assert!(host.calls.is_empty());
}

#[test]
fn null_key_searches_for_items_without_shortcut() {
    let mut ctx = context_with_main(vec![sel('a'), sel('\0'), sel('b')]);
    let mut host = idle_host();
    assert!(press(&mut ctx, &mut host, KeyCode::Pause));
    assert_eq!(ctx.item_on, 1);

    let mut plain = context();
    plain.start_control_panel();
    assert!(!press(&mut plain, &mut host, KeyCode::CapsLock));
}

#[test]
fn back_walks_up_and_restores_recorded_focus() {
    let mut ctx = context();
    let mut host = idle_host();

    press(&mut ctx, &mut host, KeyCode::Esc);
    press(&mut ctx, &mut host, KeyCode::Down);
    assert_eq!(ctx.item_on, 1);
    press(&mut ctx, &mut host, KeyCode::Enter);
    assert_eq!(ctx.current_node(), Some(NodeId::Options));
    type_char(&mut ctx, &mut host, 's');
    assert_eq!(ctx.item_on, 5);
    press(&mut ctx, &mut host, KeyCode::Enter);
    assert_eq!(ctx.current_node(), Some(NodeId::Sound));

    press(&mut ctx, &mut host, KeyCode::Backspace);
    assert_eq!((ctx.current, ctx.item_on), (NodeId::Options, 5));
    press(&mut ctx, &mut host, KeyCode::Backspace);
    assert_eq!((ctx.current, ctx.item_on), (NodeId::Main, 1));
    assert!(press(&mut ctx, &mut host, KeyCode::Backspace));
    assert_eq!((ctx.current, ctx.item_on), (NodeId::Main, 1));
    assert!(ctx.active);
}

#[test]
fn escape_persists_focus_and_hides_menu() {
    let mut ctx = context();
    let mut host = idle_host();
    press(&mut ctx, &mut host, KeyCode::Esc);
    press(&mut ctx, &mut host, KeyCode::Down);
    press(&mut ctx, &mut host, KeyCode::Down);
    host.clear_calls();

    assert!(press(&mut ctx, &mut host, KeyCode::Esc));
    assert!(!ctx.active);
    assert_eq!(host.sounds(), vec![SoundCue::Swtchx]);

    press(&mut ctx, &mut host, KeyCode::Esc);
    assert_eq!(ctx.item_on, 2);
}

#[test]
fn sliders_step_with_left_right_and_forward() {
    let mut ctx = context();
    let mut host = idle_host();
    press(&mut ctx, &mut host, KeyCode::F(4));
    assert_eq!(ctx.current_node(), Some(NodeId::Sound));
    host.clear_calls();

    press(&mut ctx, &mut host, KeyCode::Left);
    assert_eq!(ctx.settings.preferences.sfx_volume, 7);
    press(&mut ctx, &mut host, KeyCode::Right);
    press(&mut ctx, &mut host, KeyCode::Right);
    press(&mut ctx, &mut host, KeyCode::Enter);
    assert_eq!(ctx.settings.preferences.sfx_volume, 10);
    assert_eq!(
        host.calls.last(),
        Some(&HostCall::Sound(SoundCue::Stnmov))
    );
    assert!(host
        .calls
        .contains(&HostCall::Volume(VolumeChannel::Sfx, 10)));
}

#[test]
fn left_right_ignore_plain_items() {
    let mut ctx = context();
    let mut host = idle_host();
    ctx.start_control_panel();
    assert!(press(&mut ctx, &mut host, KeyCode::Right));
    assert_eq!(ctx.current_node(), Some(NodeId::Main));
    assert!(host.calls.is_empty());
}

#[test]
fn sensitivity_stays_within_range() {
    let mut ctx = context();
    let mut host = idle_host();
    ctx.start_control_panel();
    ctx.setup_next_menu(NodeId::Options);
    ctx.item_on = 3;
    for _ in 0..20 {
        press(&mut ctx, &mut host, KeyCode::Right);
    }
    assert_eq!(ctx.settings.preferences.mouse_sensitivity, 9);
    for _ in 0..20 {
        press(&mut ctx, &mut host, KeyCode::Left);
    }
    assert_eq!(ctx.settings.preferences.mouse_sensitivity, 0);
}

#[test]
fn empty_load_slots_hold_focus_but_do_not_load() {
    let mut ctx = context();
    let mut host = game_host();
    host.put_save(1, "ENTRYWAY");

    press(&mut ctx, &mut host, KeyCode::F(3));
    assert_eq!(ctx.current_node(), Some(NodeId::Load));
    assert_eq!(ctx.model.status(NodeId::Load, 0), ItemStatus::Unavailable);
    assert_eq!(ctx.save_strings[0], "empty slot");
    assert_eq!(ctx.save_strings[1], "ENTRYWAY");

    press(&mut ctx, &mut host, KeyCode::Enter);
    assert!(ctx.active);
    assert!(!host.calls.iter().any(|c| matches!(c, HostCall::LoadGame(_))));

    press(&mut ctx, &mut host, KeyCode::Down);
    assert_eq!(ctx.item_on, 1);
    press(&mut ctx, &mut host, KeyCode::Enter);
    assert!(host.calls.contains(&HostCall::LoadGame(1)));
    assert!(!ctx.active);
}
