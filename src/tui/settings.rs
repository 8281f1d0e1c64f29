//! Centralized, hardcoded UI settings for the terminal formatter.
//!
//! This is the single place to tweak banner geometry, glyphs, and colors.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Interior width of header/footer/section banners, in columns.
pub const BANNER_WIDTH: usize = 50;

pub const INDENT_1: &str = "  ";

// ---------------------------------------------------------------------------
// Box drawing / glyphs
// ---------------------------------------------------------------------------

pub const RULE_CHAR: char = '═';
pub const CORNER_TOP_LEFT: char = '╔';
pub const CORNER_TOP_RIGHT: char = '╗';
pub const CORNER_BOTTOM_LEFT: char = '╚';
pub const CORNER_BOTTOM_RIGHT: char = '╝';
pub const BOX_SIDE: char = '║';

pub const GLYPH_RESULT: &str = "✓";
pub const GLYPH_ERROR: &str = "✗";
pub const ERROR_ARROW: &str = " → Error: ";

/// Default header glyph and the terminal columns it occupies. Emoji render
/// two columns wide in most terminals; the width is declared, never measured.
pub const HEADER_GLYPH: &str = "🧮";
pub const HEADER_GLYPH_WIDTH: usize = 2;

/// Default footer glyph and its declared display width.
pub const FOOTER_GLYPH: &str = "✨";
pub const FOOTER_GLYPH_WIDTH: usize = 2;

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_BANNER: Color = Color::Cyan;
pub const COLOR_SECTION_TITLE: Color = Color::Blue;
pub const COLOR_RESULT_GLYPH: Color = Color::Green;
pub const COLOR_RESULT_VALUE: Color = Color::Yellow;
pub const COLOR_ERROR: Color = Color::Red;
pub const COLOR_SUCCESS: Color = Color::Green;
pub const COLOR_WARNING: Color = Color::Yellow;
pub const COLOR_INFO: Color = Color::Cyan;

/// Process-wide palette: semantic name to raw ANSI escape sequence.
///
/// Read-only for the lifetime of the process. The renderer styles through
/// crossterm; this table is the exported name-to-escape mapping for callers
/// that work with raw escapes (and for tests that strip them).
pub const PALETTE: [(&str, &str); 7] = [
    ("reset", "\x1b[0m"),
    ("bright", "\x1b[1m"),
    ("green", "\x1b[32m"),
    ("blue", "\x1b[34m"),
    ("yellow", "\x1b[33m"),
    ("red", "\x1b[31m"),
    ("cyan", "\x1b[36m"),
];

/// Look up an escape sequence by semantic color name.
pub fn escape(name: &str) -> Option<&'static str> {
    PALETTE
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, seq)| *seq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_covers_all_semantic_names() {
        for name in ["reset", "bright", "green", "blue", "yellow", "red", "cyan"] {
            assert!(escape(name).is_some(), "missing palette entry: {name}");
        }
    }

    #[test]
    fn palette_lookup_misses_unknown_names() {
        assert_eq!(escape("magenta"), None);
    }

    #[test]
    fn reset_is_the_ansi_reset_sequence() {
        assert_eq!(escape("reset"), Some("\x1b[0m"));
    }
}
