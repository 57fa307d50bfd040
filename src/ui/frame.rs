//! Device independent description of what the menu draws this frame.
//!
//! Coordinates are in the 320x200 virtual screen. The host turns the
//! commands into pixels; nothing here knows about artwork beyond patch names.

use crate::app::font::{string_height, string_width};
use crate::app::menu::{LINE_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::app::types::DrawRoutine;
use crate::app::MenuContext;

const SKULL_NAMES: [&str; 2] = ["M_SKULL1", "M_SKULL2"];
const MESSAGES_ITEM: i32 = 1;
const SENSITIVITY_ITEM: i32 = 3;
const SFX_ITEM: i32 = 0;
const MUSIC_ITEM: i32 = 2;
const SLOT_BORDER_TILES: usize = 24;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCmd {
    Patch { name: &'static str, x: i32, y: i32 },
    Text { text: String, x: i32, y: i32 },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuFrame {
    pub commands: Vec<DrawCmd>,
    /// A full-screen help page is up; the host should skip its own overlays.
    pub in_help_screens: bool,
}

impl MenuFrame {
    fn patch(&mut self, name: &'static str, x: i32, y: i32) {
        self.commands.push(DrawCmd::Patch { name, x, y });
    }

    fn text(&mut self, text: impl Into<String>, x: i32, y: i32) {
        self.commands.push(DrawCmd::Text {
            text: text.into(),
            x,
            y,
        });
    }

    fn thermo(&mut self, x: i32, y: i32, width: i32, dot: u8) {
        self.patch("M_THERML", x, y);
        let mut xx = x + 8;
        for _ in 0..width {
            self.patch("M_THERMM", xx, y);
            xx += 8;
        }
        self.patch("M_THERMR", xx, y);
        self.patch("M_THERMO", x + 8 + i32::from(dot) * 8, y);
    }

    fn slot_border(&mut self, x: i32, y: i32) {
        self.patch("M_LSLEFT", x - 8, y + 7);
        let mut xx = x;
        for _ in 0..SLOT_BORDER_TILES {
            self.patch("M_LSCNTR", xx, y + 7);
            xx += 8;
        }
        self.patch("M_LSRGHT", xx, y + 7);
    }

    /// Patch names in draw order, handy for assertions.
    pub fn patch_names(&self) -> Vec<&'static str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Patch { name, .. } => Some(*name),
                DrawCmd::Text { .. } => None,
            })
            .collect()
    }
}

/// Build this frame's draw list and update the help-screen flag on `ctx`.
pub fn build_frame(ctx: &mut MenuContext) -> MenuFrame {
    let mut frame = MenuFrame::default();

    if let Some(msg) = &ctx.message {
        let font = ctx.font.as_ref();
        let mut y = SCREEN_HEIGHT / 2 - string_height(font, &msg.text) / 2;
        for line in msg.text.split('\n') {
            let x = SCREEN_WIDTH / 2 - string_width(font, line) / 2;
            frame.text(line, x, y);
            y += font.line_height();
        }
        ctx.in_help_screens = false;
        return frame;
    }

    if !ctx.active {
        ctx.in_help_screens = false;
        return frame;
    }

    let node = ctx.model.node(ctx.current);
    let (x, y) = (node.x, node.y);
    draw_routine(ctx, node.draw, x, y, &mut frame);

    for (i, item) in node.items.iter().enumerate() {
        if !item.name.is_empty() {
            frame.patch(item.name, x, y + i as i32 * LINE_HEIGHT);
        }
    }
    frame.patch(
        SKULL_NAMES[ctx.which_skull & 1],
        x - 32,
        y - 5 + ctx.item_on as i32 * LINE_HEIGHT,
    );

    ctx.in_help_screens = frame.in_help_screens;
    frame
}

fn draw_routine(ctx: &MenuContext, routine: DrawRoutine, x: i32, y: i32, frame: &mut MenuFrame) {
    let prefs = &ctx.settings.preferences;
    match routine {
        DrawRoutine::MainMenu => frame.patch("M_DOOM", SCREEN_WIDTH / 2 - 66, 2),
        DrawRoutine::Episode => frame.patch("M_EPISOD", SCREEN_WIDTH / 2 - 106, 38),
        DrawRoutine::NewGame => {
            frame.patch("M_NEWG", SCREEN_WIDTH / 2 - 64, 14);
            frame.patch("M_SKILL", SCREEN_WIDTH / 2 - 106, 38);
        }
        DrawRoutine::Options => {
            frame.patch("M_OPTTTL", 108, 15);
            let toggle = if prefs.show_messages { "M_MSGON" } else { "M_MSGOFF" };
            frame.patch(toggle, x + 120, y + LINE_HEIGHT * MESSAGES_ITEM);
            frame.thermo(
                x,
                y + LINE_HEIGHT * (SENSITIVITY_ITEM + 1),
                10,
                prefs.mouse_sensitivity,
            );
        }
        DrawRoutine::Sound => {
            frame.patch("M_SVOL", SCREEN_WIDTH / 2 - 100, 38);
            frame.thermo(x, y + LINE_HEIGHT * (SFX_ITEM + 1), 16, prefs.sfx_volume);
            frame.thermo(x, y + LINE_HEIGHT * (MUSIC_ITEM + 1), 16, prefs.music_volume);
        }
        DrawRoutine::ReadThis1 => help_page(frame, "HELP2"),
        DrawRoutine::ReadThis2 => help_page(frame, "HELP1"),
        DrawRoutine::ReadThisCommercial => help_page(frame, "HELP"),
        DrawRoutine::Load => {
            frame.patch("M_LOADG", SCREEN_WIDTH / 2 - 90, 28);
            slot_rows(ctx, x, y, frame);
        }
        DrawRoutine::Save => {
            frame.patch("M_SAVEG", SCREEN_WIDTH / 2 - 90, 28);
            slot_rows(ctx, x, y, frame);
            if let Some(entry) = &ctx.text_entry {
                let cx = x + string_width(ctx.font.as_ref(), entry.buffer());
                frame.text("_", cx, y + LINE_HEIGHT * entry.slot as i32);
            }
        }
    }
}

fn help_page(frame: &mut MenuFrame, name: &'static str) {
    frame.in_help_screens = true;
    frame.patch(name, 0, 0);
}

/// Border and description of every slot. The slot being edited shows the
/// live entry buffer.
fn slot_rows(ctx: &MenuContext, x: i32, y: i32, frame: &mut MenuFrame) {
    for (slot, saved) in ctx.save_strings.iter().enumerate() {
        let row = y + LINE_HEIGHT * slot as i32;
        frame.slot_border(x, row);
        let text = match &ctx.text_entry {
            Some(entry) if entry.slot == slot => entry.buffer(),
            _ => saved.as_str(),
        };
        frame.text(text, x, row);
    }
}
