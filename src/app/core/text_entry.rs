use tracing::debug;

use super::MenuContext;
use crate::app::font::{self, FontMetrics};
use crate::app::strings::EMPTY_SLOT;
use crate::errors::{MenuError, Result};
use crate::host::GameHost;
use crate::saves::{default_save_name, SAVE_STRING_SIZE};

/// Bounds enforced on every keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryLimits {
    /// Maximum number of characters.
    pub max_chars: usize,
    /// Appends stop once the rendered text reaches this width in pixels.
    pub max_width: i32,
}

impl Default for EntryLimits {
    fn default() -> Self {
        EntryLimits {
            max_chars: SAVE_STRING_SIZE - 1,
            max_width: (SAVE_STRING_SIZE as i32 - 2) * 8,
        }
    }
}

/// Save-name editing session for one slot. The cursor is always at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEntry {
    pub slot: usize,
    buffer: String,
    snapshot: String,
    limits: EntryLimits,
}

impl TextEntry {
    /// Start editing `current`. The empty-slot placeholder starts as an
    /// empty buffer; the snapshot keeps the original text for cancel.
    pub fn open(slot: usize, current: &str, limits: EntryLimits) -> Self {
        let buffer = if current == EMPTY_SLOT {
            String::new()
        } else {
            current.to_string()
        };
        TextEntry {
            slot,
            buffer,
            snapshot: current.to_string(),
            limits,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn snapshot(&self) -> &str {
        &self.snapshot
    }

    pub fn limits(&self) -> EntryLimits {
        self.limits
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.buffer.chars().count()
    }

    /// Replace the buffer, truncated to the character capacity.
    pub fn set_buffer(&mut self, text: &str) {
        self.buffer = text.chars().take(self.limits.max_chars).collect();
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Append `c` upper cased. Rejected unless it is printable ASCII with a
    /// glyph (or space) and both the character and width limits still have
    /// room. Returns whether the character was taken.
    pub fn push(&mut self, c: char, font: &dyn FontMetrics) -> bool {
        let c = c.to_ascii_uppercase();
        if !font::is_renderable(c) {
            return false;
        }
        if !(' '..='\u{7f}').contains(&c) {
            return false;
        }
        if self.cursor() >= self.limits.max_chars {
            return false;
        }
        if font::string_width(font, &self.buffer) >= self.limits.max_width {
            return false;
        }
        self.buffer.push(c);
        true
    }
}

impl MenuContext {
    /// Begin editing the description of `slot`. When the slot is empty and
    /// the selection came from the joystick, the buffer is seeded with a
    /// name derived from the current map.
    pub(crate) fn open_text_entry(&mut self, slot: usize, host: &mut dyn GameHost) -> Result<()> {
        let current = self
            .save_strings
            .get(slot)
            .ok_or(MenuError::NoSuchSlot(slot))?
            .clone();
        let mut entry = TextEntry::open(slot, &current, self.entry_limits);
        if current == EMPTY_SLOT && self.joypad_save {
            if let Some(map) = host.current_map() {
                entry.set_buffer(&default_save_name(&map));
            }
        }
        self.joypad_save = false;
        debug!(slot, "save name entry started");
        self.text_entry = Some(entry);
        Ok(())
    }

    /// Leave text entry, restoring the slot's previous description.
    pub(crate) fn cancel_text_entry(&mut self) {
        if let Some(entry) = self.text_entry.take() {
            debug!(slot = entry.slot, "save name entry cancelled");
            self.save_strings[entry.slot] = entry.snapshot;
        }
    }

    /// Leave text entry keeping the edited text; a non-empty name is saved.
    pub(crate) fn commit_text_entry(&mut self, host: &mut dyn GameHost) {
        let Some(entry) = self.text_entry.take() else {
            return;
        };
        let slot = entry.slot;
        self.save_strings[slot] = entry.buffer;
        if !self.save_strings[slot].is_empty() {
            self.do_save(slot, host);
        }
    }
}
