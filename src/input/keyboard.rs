// Keyboard input helpers and type aliases.
pub use crossterm::event::KeyCode;

/// Keys that vanilla treated as a typed character of value 0. They still run
/// the shortcut search, which can make the cursor jump to items without a
/// shortcut.
pub fn is_null_key(code: &KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Pause | KeyCode::CapsLock | KeyCode::ScrollLock | KeyCode::NumLock
    )
}

/// Character carried by the raw key code, ignoring modifiers.
pub fn raw_char(code: &KeyCode) -> Option<char> {
    match code {
        KeyCode::Char(c) => Some(*c),
        KeyCode::Enter => Some('\r'),
        KeyCode::Tab => Some('\t'),
        KeyCode::Esc => Some('\u{1b}'),
        KeyCode::Backspace => Some('\u{7f}'),
        _ => None,
    }
}

/// Parse a key name as used in the settings file.
pub fn parse_key(name: &str) -> Option<KeyCode> {
    let code = match name {
        "None" | "none" => KeyCode::Null,
        "Up" => KeyCode::Up,
        "Down" => KeyCode::Down,
        "Left" => KeyCode::Left,
        "Right" => KeyCode::Right,
        "Enter" => KeyCode::Enter,
        "Esc" | "Escape" => KeyCode::Esc,
        "Backspace" => KeyCode::Backspace,
        "Tab" => KeyCode::Tab,
        "Space" => KeyCode::Char(' '),
        "Home" => KeyCode::Home,
        "End" => KeyCode::End,
        "PageUp" => KeyCode::PageUp,
        "PageDown" => KeyCode::PageDown,
        "Insert" => KeyCode::Insert,
        "Delete" => KeyCode::Delete,
        "PrintScreen" => KeyCode::PrintScreen,
        "Pause" => KeyCode::Pause,
        "CapsLock" => KeyCode::CapsLock,
        "ScrollLock" => KeyCode::ScrollLock,
        "NumLock" => KeyCode::NumLock,
        _ => {
            if let Some(n) = name.strip_prefix('F').and_then(|n| n.parse::<u8>().ok()) {
                KeyCode::F(n)
            } else {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        }
    };
    Some(code)
}

/// Inverse of `parse_key` for the keys it understands.
pub fn key_name(code: &KeyCode) -> String {
    match code {
        KeyCode::Null => "None".to_string(),
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Esc => "Esc".to_string(),
        other => format!("{:?}", other),
    }
}
