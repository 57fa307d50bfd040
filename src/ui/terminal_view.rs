//! Text rendering of the menu state for terminal hosts.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::types::{ItemStatus, NodeId};
use crate::app::MenuContext;

/// Readable label for an item patch.
pub fn item_label(name: &str) -> &str {
    match name {
        "M_NGAME" => "New Game",
        "M_OPTION" => "Options",
        "M_LOADG" => "Load Game",
        "M_SAVEG" => "Save Game",
        "M_RDTHIS" => "Read This!",
        "M_QUITG" => "Quit Game",
        "M_EPI1" => "Knee-Deep in the Dead",
        "M_EPI2" => "The Shores of Hell",
        "M_EPI3" => "Inferno",
        "M_EPI4" => "Thy Flesh Consumed",
        "M_JKILL" => "I'm too young to die",
        "M_ROUGH" => "Hey, not too rough",
        "M_HURT" => "Hurt me plenty",
        "M_ULTRA" => "Ultra-Violence",
        "M_NMARE" => "Nightmare!",
        "M_ENDGAM" => "End Game",
        "M_MESSG" => "Messages",
        "M_MSENS" => "Mouse Sensitivity",
        "M_SVOL" => "Sound Volume",
        "M_SFXVOL" => "Sfx Volume",
        "M_MUSVOL" => "Music Volume",
        other => other,
    }
}

fn node_title(node: NodeId) -> &'static str {
    match node {
        NodeId::Main => "DOOM",
        NodeId::Episode => "Which Episode?",
        NodeId::NewGame => "New Game",
        NodeId::Options => "Options",
        NodeId::ReadThis1 | NodeId::ReadThis2 => "Help",
        NodeId::Sound => "Sound Volume",
        NodeId::Load => "Load Game",
        NodeId::Save => "Save Game",
    }
}

/// Label shown for item `index` of the current node: slot rows show the
/// save description, help pages a continue prompt.
fn row_label(ctx: &MenuContext, index: usize) -> String {
    let node = ctx.current;
    let item = ctx.model.item_at(node, index);
    match node {
        NodeId::Load | NodeId::Save => match &ctx.text_entry {
            Some(entry) if entry.slot == index => format!("{}_", entry.buffer()),
            _ => ctx.save_strings.get(index).cloned().unwrap_or_default(),
        },
        NodeId::ReadThis1 | NodeId::ReadThis2 => "(press enter)".to_string(),
        _ => item_label(item.name).to_string(),
    }
}

fn slider_value(ctx: &MenuContext, index: usize) -> Option<u8> {
    let prefs = &ctx.settings.preferences;
    match (ctx.current, index) {
        (NodeId::Options, 3) => Some(prefs.mouse_sensitivity),
        (NodeId::Sound, 0) => Some(prefs.sfx_volume),
        (NodeId::Sound, 2) => Some(prefs.music_volume),
        _ => None,
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

/// Draw the current menu, or the pending message on top of it.
pub fn draw(f: &mut Frame, area: Rect, ctx: &MenuContext) {
    if ctx.active && ctx.message.as_ref().map_or(true, |m| m.last_menu_active) {
        draw_menu(f, area, ctx);
    }
    if let Some(msg) = &ctx.message {
        let lines: Vec<Line> = msg.text.lines().map(Line::from).collect();
        let height = lines.len() as u16 + 2;
        let width = msg.text.lines().map(str::len).max().unwrap_or(0) as u16 + 4;
        let rect = centered(area, width, height);
        f.render_widget(Clear, rect);
        let p = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(p, rect);
    }
}

fn draw_menu(f: &mut Frame, area: Rect, ctx: &MenuContext) {
    let node = ctx.current;
    let count = ctx.model.item_count(node);
    let items: Vec<ListItem> = (0..count)
        .map(|i| {
            let status = ctx.model.status(node, i);
            if status.is_disabled() {
                return ListItem::new("");
            }
            let marker = if i == ctx.item_on { "> " } else { "  " };
            let mut spans = vec![Span::raw(marker), Span::raw(row_label(ctx, i))];
            if let Some(v) = slider_value(ctx, i) {
                spans.push(Span::raw(format!("  [{}]", v)));
            }
            if node == NodeId::Options && i == 1 {
                let state = if ctx.settings.preferences.show_messages { "ON" } else { "OFF" };
                spans.push(Span::raw(format!("  {}", state)));
            }
            let mut style = Style::default();
            if status == ItemStatus::Unavailable {
                style = style.fg(Color::DarkGray);
            }
            if i == ctx.item_on {
                style = style.add_modifier(Modifier::BOLD);
            }
            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(count as u16 + 2), Constraint::Min(0)].as_ref())
        .split(area);
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(node_title(node)),
    );
    f.render_widget(list, chunks[0]);
}
