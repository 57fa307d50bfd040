//! First stage of the input pipeline: device event to logical key.
//!
//! The only state kept here is the debounce bookkeeping for joystick and
//! mouse derived keys. Everything else the translation depends on is passed
//! in through `NormalizeContext`, so the stage can be exercised without a
//! menu behind it.

use super::{InputEvent, KeyCode, LogicalInput};
use crate::app::settings::keybinds::{JoystickBindings, KeyBindings};

/// Ticks a vertical joystick deflection blocks further joystick input.
pub const JOY_WAIT_VERTICAL: u64 = 5;
/// Ticks a horizontal deflection blocks further joystick input.
pub const JOY_WAIT_HORIZONTAL: u64 = 2;
pub const JOY_WAIT_BUTTON: u64 = 5;
/// Accumulated mouse motion needed to produce a direction key.
pub const MOUSE_THRESHOLD: i32 = 30;
pub const MOUSE_WAIT_MOTION: u64 = 5;
pub const MOUSE_WAIT_BUTTON: u64 = 15;

/// Snapshot of the menu state that affects how device events translate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeContext {
    pub menu_active: bool,
    /// A yes/no message is waiting for an answer.
    pub message_needs_input: bool,
    pub text_entry_active: bool,
    /// The save node is the current node.
    pub on_save_menu: bool,
}

#[derive(Debug, Clone, Default)]
pub struct InputNormalizer {
    joy_wait: u64,
    mouse_wait: u64,
    mouse_x: i32,
    mouse_y: i32,
    last_x: i32,
    last_y: i32,
}

/// Legacy button test: index 0 is treated as unbound.
pub fn is_joystick_button_pressed(button: Option<u8>, mask: u32) -> bool {
    match button {
        Some(b) if b > 0 && b < 32 => mask & (1 << b) != 0,
        _ => false,
    }
}

impl InputNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate `event` into a logical key. `None` means nothing resolved
    /// and the event must be reported as not consumed.
    ///
    /// Window-close events are handled before this stage and never resolve.
    pub fn normalize(
        &mut self,
        event: &InputEvent,
        ctx: &NormalizeContext,
        keys: &KeyBindings,
        joy: &JoystickBindings,
        now: u64,
    ) -> Option<LogicalInput> {
        match *event {
            InputEvent::KeyDown { key, typed, .. } => Some(LogicalInput {
                key,
                typed,
                joypad_save: false,
            }),
            InputEvent::Joystick { buttons, dx, dy } => {
                if self.joy_wait >= now {
                    return None;
                }
                self.joystick(buttons, dx, dy, ctx, keys, joy, now)
            }
            InputEvent::Mouse { buttons, dx, dy } => {
                if self.mouse_wait >= now {
                    return None;
                }
                self.mouse(buttons, dx, dy, keys, now)
                    .map(LogicalInput::key)
            }
            InputEvent::Quit => None,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn joystick(
        &mut self,
        buttons: u32,
        dx: i32,
        dy: i32,
        ctx: &NormalizeContext,
        keys: &KeyBindings,
        joy: &JoystickBindings,
        now: u64,
    ) -> Option<LogicalInput> {
        let mut key = None;
        let mut joypad_save = false;

        if ctx.menu_active {
            if dy < 0 {
                key = Some(keys.up);
                self.joy_wait = now + JOY_WAIT_VERTICAL;
            } else if dy > 0 {
                key = Some(keys.down);
                self.joy_wait = now + JOY_WAIT_VERTICAL;
            }

            if dx < 0 {
                key = Some(keys.left);
                self.joy_wait = now + JOY_WAIT_HORIZONTAL;
            } else if dx > 0 {
                key = Some(keys.right);
                self.joy_wait = now + JOY_WAIT_HORIZONTAL;
            }

            if is_joystick_button_pressed(joy.fire, buttons) {
                key = Some(if ctx.message_needs_input {
                    keys.confirm
                } else if ctx.text_entry_active {
                    KeyCode::Enter
                } else {
                    if ctx.on_save_menu {
                        joypad_save = true;
                    }
                    keys.forward
                });
                self.joy_wait = now + JOY_WAIT_BUTTON;
            }
            if is_joystick_button_pressed(joy.use_, buttons) {
                key = Some(if ctx.message_needs_input {
                    keys.abort
                } else if ctx.text_entry_active {
                    KeyCode::Esc
                } else {
                    keys.back
                });
                self.joy_wait = now + JOY_WAIT_BUTTON;
            }
        }

        if is_joystick_button_pressed(joy.menu, buttons) {
            key = Some(keys.activate);
            self.joy_wait = now + JOY_WAIT_BUTTON;
        }

        key.map(|key| LogicalInput {
            key,
            typed: None,
            joypad_save,
        })
    }

    fn mouse(
        &mut self,
        buttons: u32,
        dx: i32,
        dy: i32,
        keys: &KeyBindings,
        now: u64,
    ) -> Option<KeyCode> {
        let mut key = None;

        // Positive y is forward motion, which moves the cursor up.
        self.mouse_y += dy;
        if self.mouse_y < self.last_y - MOUSE_THRESHOLD {
            key = Some(keys.down);
            self.mouse_wait = now + MOUSE_WAIT_MOTION;
            self.last_y -= MOUSE_THRESHOLD;
            self.mouse_y = self.last_y;
        } else if self.mouse_y > self.last_y + MOUSE_THRESHOLD {
            key = Some(keys.up);
            self.mouse_wait = now + MOUSE_WAIT_MOTION;
            self.last_y += MOUSE_THRESHOLD;
            self.mouse_y = self.last_y;
        }

        self.mouse_x += dx;
        if self.mouse_x < self.last_x - MOUSE_THRESHOLD {
            key = Some(keys.left);
            self.mouse_wait = now + MOUSE_WAIT_MOTION;
            self.last_x -= MOUSE_THRESHOLD;
            self.mouse_x = self.last_x;
        } else if self.mouse_x > self.last_x + MOUSE_THRESHOLD {
            key = Some(keys.right);
            self.mouse_wait = now + MOUSE_WAIT_MOTION;
            self.last_x += MOUSE_THRESHOLD;
            self.mouse_x = self.last_x;
        }

        if buttons & 1 != 0 {
            key = Some(keys.forward);
            self.mouse_wait = now + MOUSE_WAIT_BUTTON;
        }
        if buttons & 2 != 0 {
            key = Some(keys.back);
            self.mouse_wait = now + MOUSE_WAIT_BUTTON;
        }

        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu_ctx() -> NormalizeContext {
        NormalizeContext {
            menu_active: true,
            ..Default::default()
        }
    }

    fn joy() -> JoystickBindings {
        JoystickBindings {
            fire: Some(1),
            use_: Some(3),
            menu: Some(5),
        }
    }

    #[test]
    fn key_down_passes_through() {
        let mut n = InputNormalizer::new();
        let out = n
            .normalize(
                &InputEvent::char('q'),
                &NormalizeContext::default(),
                &KeyBindings::default(),
                &joy(),
                1,
            )
            .unwrap();
        assert_eq!(out.key, KeyCode::Char('q'));
        assert_eq!(out.typed, Some('q'));
    }

    #[test]
    fn joystick_vertical_blocks_for_five_ticks() {
        let keys = KeyBindings::default();
        let mut n = InputNormalizer::new();
        let down = InputEvent::Joystick { buttons: 0, dx: 0, dy: 1 };
        let first = n.normalize(&down, &menu_ctx(), &keys, &joy(), 10).unwrap();
        assert_eq!(first.key, keys.down);
        assert!(n.normalize(&down, &menu_ctx(), &keys, &joy(), 15).is_none());
        assert!(n.normalize(&down, &menu_ctx(), &keys, &joy(), 16).is_some());
    }

    #[test]
    fn joystick_horizontal_overrides_vertical_and_waits_less() {
        let keys = KeyBindings::default();
        let mut n = InputNormalizer::new();
        let diag = InputEvent::Joystick { buttons: 0, dx: -1, dy: -1 };
        let out = n.normalize(&diag, &menu_ctx(), &keys, &joy(), 10).unwrap();
        assert_eq!(out.key, keys.left);
        assert!(n.normalize(&diag, &menu_ctx(), &keys, &joy(), 13).is_some());
    }

    #[test]
    fn joystick_axes_ignored_without_menu() {
        let keys = KeyBindings::default();
        let mut n = InputNormalizer::new();
        let up = InputEvent::Joystick { buttons: 0, dx: 0, dy: -1 };
        assert!(n
            .normalize(&up, &NormalizeContext::default(), &keys, &joy(), 10)
            .is_none());
        let menu = InputEvent::Joystick { buttons: 1 << 5, dx: 0, dy: 0 };
        let out = n
            .normalize(&menu, &NormalizeContext::default(), &keys, &joy(), 11)
            .unwrap();
        assert_eq!(out.key, keys.activate);
    }

    #[test]
    fn fire_button_depends_on_mode() {
        let keys = KeyBindings::default();
        let fire = InputEvent::Joystick { buttons: 1 << 1, dx: 0, dy: 0 };

        let mut n = InputNormalizer::new();
        let ctx = NormalizeContext { message_needs_input: true, ..menu_ctx() };
        assert_eq!(n.normalize(&fire, &ctx, &keys, &joy(), 10).unwrap().key, keys.confirm);

        let mut n = InputNormalizer::new();
        let ctx = NormalizeContext { text_entry_active: true, ..menu_ctx() };
        assert_eq!(n.normalize(&fire, &ctx, &keys, &joy(), 10).unwrap().key, KeyCode::Enter);

        let mut n = InputNormalizer::new();
        let ctx = NormalizeContext { on_save_menu: true, ..menu_ctx() };
        let out = n.normalize(&fire, &ctx, &keys, &joy(), 10).unwrap();
        assert_eq!(out.key, keys.forward);
        assert!(out.joypad_save);
    }

    #[test]
    fn button_zero_never_reports_pressed() {
        assert!(!is_joystick_button_pressed(Some(0), u32::MAX));
        assert!(!is_joystick_button_pressed(None, u32::MAX));
        assert!(is_joystick_button_pressed(Some(2), 0b100));
    }

    #[test]
    fn mouse_motion_crosses_threshold_then_rebases() {
        let keys = KeyBindings::default();
        let ctx = menu_ctx();
        let mut n = InputNormalizer::new();
        let small = InputEvent::Mouse { buttons: 0, dx: 0, dy: 20 };
        assert!(n.normalize(&small, &ctx, &keys, &joy(), 1).is_none());
        let out = n.normalize(&small, &ctx, &keys, &joy(), 2).unwrap();
        assert_eq!(out.key, keys.up);
        // Baseline moved to 30: another 20 units is not enough.
        assert!(n.normalize(&small, &ctx, &keys, &joy(), 10).is_none());
    }

    #[test]
    fn mouse_buttons_map_to_forward_and_back() {
        let keys = KeyBindings::default();
        let ctx = menu_ctx();
        let mut n = InputNormalizer::new();
        let left = InputEvent::Mouse { buttons: 1, dx: 0, dy: 0 };
        assert_eq!(n.normalize(&left, &ctx, &keys, &joy(), 1).unwrap().key, keys.forward);
        let right = InputEvent::Mouse { buttons: 2, dx: 0, dy: 0 };
        assert!(n.normalize(&right, &ctx, &keys, &joy(), 16).is_none());
        assert_eq!(n.normalize(&right, &ctx, &keys, &joy(), 17).unwrap().key, keys.back);
    }
}
