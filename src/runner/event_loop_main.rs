use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::event::{
    self, Event, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::widgets::{Block, Borders, Paragraph};
use tracing::{debug, info, warn};

use crate::app::MenuContext;
use crate::host::RecordingHost;
use crate::input::normalize::MOUSE_THRESHOLD;
use crate::input::{InputEvent, KeyCode};
use crate::runner::handlers;
use crate::runner::terminal::{init_terminal, restore_terminal};
use crate::ui;

/// Game ticks per second.
pub const TICRATE: u32 = 35;
const HOST_LOG_LINES: usize = 6;

/// Translate a terminal event into a menu input event.
pub fn translate_event(ev: &Event) -> Option<InputEvent> {
    match ev {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => {
            if modifiers.contains(KeyModifiers::CONTROL) && *code == KeyCode::Char('c') {
                return Some(InputEvent::Quit);
            }
            let (typed, text) = match code {
                KeyCode::Char(c) => (Some(c.to_ascii_lowercase()), Some(*c)),
                _ => (None, None),
            };
            Some(InputEvent::KeyDown {
                key: *code,
                typed,
                text,
            })
        }
        Event::Mouse(MouseEvent { kind, .. }) => {
            let step = MOUSE_THRESHOLD + 1;
            let (buttons, dy) = match kind {
                MouseEventKind::ScrollUp => (0, step),
                MouseEventKind::ScrollDown => (0, -step),
                MouseEventKind::Down(MouseButton::Left) => (1, 0),
                MouseEventKind::Down(MouseButton::Right) => (2, 0),
                _ => return None,
            };
            Some(InputEvent::Mouse { buttons, dx: 0, dy })
        }
        _ => None,
    }
}

fn host_log(host: &RecordingHost) -> String {
    let skip = host.calls.len().saturating_sub(HOST_LOG_LINES);
    host.calls[skip..]
        .iter()
        .map(|c| format!("{:?}", c))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drive the menus from the terminal until the quit prompt is confirmed.
pub fn run_demo(ctx: &mut MenuContext, mut host: RecordingHost) -> anyhow::Result<()> {
    let mut terminal = init_terminal().context("initializing terminal")?;
    info!(variant = %ctx.settings.variant, "demo started");

    let tick = Duration::from_secs(1) / TICRATE;
    let mut next_tick = Instant::now() + tick;
    let result = loop {
        let drawn = terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(HOST_LOG_LINES as u16 + 2)])
                .split(f.area());
            ui::draw(f, chunks[0], ctx);
            let log = Paragraph::new(host_log(&host))
                .block(Block::default().borders(Borders::ALL).title("Game"));
            f.render_widget(log, chunks[1]);
        });
        if let Err(e) = drawn {
            break Err(anyhow::Error::new(e).context("drawing frame"));
        }

        let timeout = next_tick.saturating_duration_since(Instant::now());
        match event::poll(timeout) {
            Ok(true) => {
                let ev = match event::read() {
                    Ok(ev) => ev,
                    Err(e) => break Err(anyhow::Error::new(e).context("reading terminal event")),
                };
                if let Some(input) = translate_event(&ev) {
                    match handlers::handle_event(ctx, &mut host, &input) {
                        Ok(false) => debug!(?input, "event passed to game"),
                        Ok(true) => {}
                        Err(e) => {
                            warn!(error = %e, "menu invariant violated");
                            break Err(e.into());
                        }
                    }
                }
            }
            Ok(false) => {}
            Err(e) => break Err(anyhow::Error::new(e).context("polling terminal events")),
        }

        if Instant::now() >= next_tick {
            host.advance();
            ctx.tick();
            next_tick += tick;
        }
        if host.has_quit() {
            info!("quit confirmed");
            break Ok(());
        }
    };

    restore_terminal(terminal).context("restoring terminal")?;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn shifted_char_keeps_text_and_lowercases_shortcut() {
        let ev = translate_event(&press(KeyCode::Char('N'), KeyModifiers::SHIFT));
        assert_eq!(
            ev,
            Some(InputEvent::KeyDown {
                key: KeyCode::Char('N'),
                typed: Some('n'),
                text: Some('N'),
            })
        );
    }

    #[test]
    fn ctrl_c_is_window_close() {
        let ev = translate_event(&press(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(ev, Some(InputEvent::Quit));
    }

    #[test]
    fn key_release_is_ignored() {
        let ev = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(translate_event(&ev), None);
    }
}
