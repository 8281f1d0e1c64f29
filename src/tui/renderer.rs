//! Terminal output renderer for decorated demo/calculator output.

use crossterm::style::Stylize;

use crate::tui::layout;
use crate::tui::settings;

/// Handles all terminal output formatting.
///
/// Every operation writes one or more whole lines to stdout. With color
/// disabled the same text is printed without styling, so content is identical
/// either way.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Whether ANSI color/style output is enabled.
    color: bool,
}

impl Renderer {
    /// Create a renderer with optional color output.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Print a bordered header box with the default banner glyph.
    pub fn header(&self, text: &str) {
        self.header_with_glyph(text, settings::HEADER_GLYPH, settings::HEADER_GLYPH_WIDTH);
    }

    /// Print a bordered header box with a caller-chosen glyph.
    ///
    /// `glyph_width` declares how many terminal columns the glyph occupies;
    /// emoji typically need 2 and plain characters 1.
    pub fn header_with_glyph(&self, text: &str, glyph: &str, glyph_width: usize) {
        let [top, middle, bottom] = layout::header_lines(text, glyph, glyph_width);
        println!();
        if self.color {
            println!("{}", top.with(settings::COLOR_BANNER).bold());
            println!("{}", middle.with(settings::COLOR_BANNER).bold());
            println!("{}", bottom.with(settings::COLOR_BANNER).bold());
        } else {
            println!("{top}");
            println!("{middle}");
            println!("{bottom}");
        }
    }

    /// Print a closing banner with the default close glyph.
    pub fn footer(&self, text: &str) {
        self.footer_with_glyph(text, settings::FOOTER_GLYPH, settings::FOOTER_GLYPH_WIDTH);
    }

    /// Print a closing banner: rule, centered content line, rule.
    pub fn footer_with_glyph(&self, text: &str, glyph: &str, glyph_width: usize) {
        let content = layout::footer_content(text, glyph, glyph_width);
        println!();
        if self.color {
            println!("{}", layout::rule().with(settings::COLOR_BANNER));
            println!("{}", content.with(settings::COLOR_SUCCESS));
            println!("{}", layout::rule().with(settings::COLOR_BANNER));
        } else {
            println!("{}", layout::rule());
            println!("{content}");
            println!("{}", layout::rule());
        }
        println!();
    }

    /// Print a section divider with a left-indented title.
    pub fn section(&self, title: &str) {
        println!();
        if self.color {
            println!("{}", layout::rule().with(settings::COLOR_BANNER));
            println!(
                "{}",
                format!("{}{title}", settings::INDENT_1)
                    .with(settings::COLOR_SECTION_TITLE)
                    .bold()
            );
            println!("{}", layout::rule().with(settings::COLOR_BANNER));
        } else {
            println!("{}", layout::rule());
            println!("{}{title}", settings::INDENT_1);
            println!("{}", layout::rule());
        }
        println!();
    }

    /// Print a successful operation result: `✓ operation = value`.
    pub fn result(&self, operation: &str, value: f64) {
        if self.color {
            println!(
                "{} {operation}{}",
                settings::GLYPH_RESULT.with(settings::COLOR_RESULT_GLYPH),
                format!(" = {value}").with(settings::COLOR_RESULT_VALUE),
            );
        } else {
            println!("{} {operation} = {value}", settings::GLYPH_RESULT);
        }
    }

    /// Print a failed operation: `✗ operation → Error: message`.
    pub fn error(&self, operation: &str, message: &str) {
        if self.color {
            println!(
                "{} {operation}{}",
                settings::GLYPH_ERROR.with(settings::COLOR_ERROR),
                format!("{}{message}", settings::ERROR_ARROW).with(settings::COLOR_ERROR),
            );
        } else {
            println!(
                "{} {operation}{}{message}",
                settings::GLYPH_ERROR,
                settings::ERROR_ARROW
            );
        }
    }

    /// Print a success message on one green line.
    pub fn success(&self, message: &str) {
        if self.color {
            println!("{}", message.with(settings::COLOR_SUCCESS));
        } else {
            println!("{message}");
        }
    }

    /// Print a warning message on one yellow line.
    pub fn warning(&self, message: &str) {
        if self.color {
            println!("{}", message.with(settings::COLOR_WARNING));
        } else {
            println!("{message}");
        }
    }

    /// Print an info message on one cyan line.
    pub fn info(&self, message: &str) {
        if self.color {
            println!("{}", message.with(settings::COLOR_INFO));
        } else {
            println!("{message}");
        }
    }
}
