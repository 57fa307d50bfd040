#![allow(dead_code)]

use gamemenu::app::menu::{MenuItem, MenuModel, MenuNode};
use gamemenu::app::types::{DrawRoutine, NodeId};
use gamemenu::host::RecordingHost;
use gamemenu::input::{InputEvent, KeyCode};
use gamemenu::{handle_event, MenuContext, Settings};

pub fn context() -> MenuContext {
    MenuContext::new(Settings::default())
}

/// Context whose main node is replaced by `items`, with the menu open.
pub fn context_with_main(items: Vec<MenuItem>) -> MenuContext {
    let node = MenuNode::new(NodeId::Main, items, None, DrawRoutine::MainMenu, 97, 68);
    let model = MenuModel::new(Default::default()).with_node(node);
    let mut ctx = MenuContext::with_model(Settings::default(), model);
    ctx.start_control_panel();
    ctx
}

/// A host with a running game and a clock already past zero, so device
/// debounce windows do not block the first event.
pub fn game_host() -> RecordingHost {
    let mut host = RecordingHost::in_game();
    host.advance();
    host
}

pub fn idle_host() -> RecordingHost {
    let mut host = RecordingHost::new();
    host.advance();
    host
}

pub fn send(ctx: &mut MenuContext, host: &mut RecordingHost, event: InputEvent) -> bool {
    handle_event(ctx, host, &event).expect("menu invariant violated")
}

pub fn press(ctx: &mut MenuContext, host: &mut RecordingHost, key: KeyCode) -> bool {
    send(ctx, host, InputEvent::key(key))
}

pub fn type_char(ctx: &mut MenuContext, host: &mut RecordingHost, c: char) -> bool {
    send(ctx, host, InputEvent::char(c))
}

pub fn type_str(ctx: &mut MenuContext, host: &mut RecordingHost, s: &str) {
    for c in s.chars() {
        type_char(ctx, host, c);
    }
}
