//! Pure banner-layout math shared by the terminal renderer.
//!
//! The centering formulas are deliberately literal: header content counts the
//! text plus two glyphs plus four spaces, footer content counts two spaces.
//! The constant offsets were tuned against double-width emoji glyphs, so they
//! are preserved as-is rather than generalized.

use crate::tui::settings::{
    BANNER_WIDTH, BOX_SIDE, CORNER_BOTTOM_LEFT, CORNER_BOTTOM_RIGHT, CORNER_TOP_LEFT,
    CORNER_TOP_RIGHT, RULE_CHAR,
};

/// Count visible character width (single-cell approximation).
pub fn visible_width(s: &str) -> usize {
    s.chars().count()
}

/// Estimated rendered width of header content: `glyph  text  glyph`.
pub fn header_content_len(text: &str, glyph_width: usize) -> usize {
    visible_width(text) + 2 * glyph_width + 4
}

/// Estimated rendered width of footer content: `glyph text glyph`.
pub fn footer_content_len(text: &str, glyph_width: usize) -> usize {
    visible_width(text) + 2 * glyph_width + 2
}

/// Split the leftover banner columns into left/right padding.
///
/// Left gets the floor, right the ceil. Content wider than the banner clamps
/// to zero padding on both sides; the math never goes negative.
pub fn padding(content_len: usize) -> (usize, usize) {
    let total = BANNER_WIDTH.saturating_sub(content_len);
    let left = total / 2;
    (left, total - left)
}

/// A full-width `═` rule line.
pub fn rule() -> String {
    RULE_CHAR.to_string().repeat(BANNER_WIDTH)
}

/// The three lines of a bordered header box.
pub fn header_lines(text: &str, glyph: &str, glyph_width: usize) -> [String; 3] {
    let (left, right) = padding(header_content_len(text, glyph_width));
    let top = format!("{CORNER_TOP_LEFT}{}{CORNER_TOP_RIGHT}", rule());
    let middle = format!(
        "{BOX_SIDE}{}{glyph}  {text}  {glyph}{}{BOX_SIDE}",
        " ".repeat(left),
        " ".repeat(right),
    );
    let bottom = format!("{CORNER_BOTTOM_LEFT}{}{CORNER_BOTTOM_RIGHT}", rule());
    [top, middle, bottom]
}

/// The centered content line of a footer banner.
pub fn footer_content(text: &str, glyph: &str, glyph_width: usize) -> String {
    let (left, right) = padding(footer_content_len(text, glyph_width));
    format!(
        "{}{glyph} {text} {glyph}{}",
        " ".repeat(left),
        " ".repeat(right),
    )
}
