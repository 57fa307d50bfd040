//! Glyph metrics of the heads-up font.
//!
//! The font covers the upper-case ASCII range from `!` to `_`. Text is upper
//! cased before lookup; characters without a glyph (including space) advance
//! by a fixed 4 pixels.

/// First character with a glyph.
pub const FONT_START: char = '!';
/// Number of glyphs (`!` through `_`).
pub const FONT_SIZE: usize = 63;
/// Advance used for characters that have no glyph.
pub const MISSING_GLYPH_ADVANCE: i32 = 4;

/// Width and height lookup for the font glyphs.
pub trait FontMetrics {
    /// Width in pixels of glyph `index` (0-based from `FONT_START`).
    fn glyph_width(&self, index: usize) -> i32;
    /// Height of one text line.
    fn line_height(&self) -> i32;
}

/// Font with the same width for every glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformFont {
    pub width: i32,
    pub height: i32,
}

impl Default for UniformFont {
    fn default() -> Self {
        UniformFont { width: 8, height: 7 }
    }
}

impl FontMetrics for UniformFont {
    fn glyph_width(&self, _index: usize) -> i32 {
        self.width
    }

    fn line_height(&self) -> i32 {
        self.height
    }
}

/// Glyph index of `c` after upper casing, if the font has one.
pub fn glyph_index(c: char) -> Option<usize> {
    let upper = c.to_ascii_uppercase() as u32;
    let start = FONT_START as u32;
    if upper < start {
        return None;
    }
    let idx = (upper - start) as usize;
    (idx < FONT_SIZE).then_some(idx)
}

/// Whether `c` can be shown by the font. Space is always accepted.
pub fn is_renderable(c: char) -> bool {
    c == ' ' || glyph_index(c).is_some()
}

/// Rendered width of `s` in pixels.
pub fn string_width(font: &dyn FontMetrics, s: &str) -> i32 {
    s.chars()
        .map(|c| match glyph_index(c) {
            Some(i) => font.glyph_width(i),
            None => MISSING_GLYPH_ADVANCE,
        })
        .sum()
}

/// Rendered height of `s`: one line plus one per newline.
pub fn string_height(font: &dyn FontMetrics, s: &str) -> i32 {
    let lines = 1 + s.chars().filter(|&c| c == '\n').count() as i32;
    lines * font.line_height()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_case_maps_to_upper_glyphs() {
        assert_eq!(glyph_index('a'), glyph_index('A'));
        assert_eq!(glyph_index('!'), Some(0));
        assert_eq!(glyph_index('_'), Some(62));
        assert_eq!(glyph_index(' '), None);
        assert_eq!(glyph_index('~'), None);
    }

    #[test]
    fn width_counts_missing_glyphs_as_four() {
        let f = UniformFont::default();
        assert_eq!(string_width(&f, "AB C"), 8 + 8 + 4 + 8);
        assert_eq!(string_height(&f, "a\nb\nc"), 21);
    }

    #[test]
    fn renderable_accepts_space_but_not_braces() {
        assert!(is_renderable(' '));
        assert!(is_renderable('z'));
        assert!(!is_renderable('{'));
    }
}
