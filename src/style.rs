//! Terminal styling for menu output.

use crossterm::style::{Color, Stylize};
use crossterm::tty::IsTty;

/// Menu header colour.
pub const HEADER: Color = Color::Cyan;
/// Confirmation messages.
pub const SUCCESS: Color = Color::Green;
/// Rejected operations.
pub const ERROR: Color = Color::Red;
/// Completed task suffix on the board.
pub const DONE: Color = Color::DarkGrey;

/// Applies colours when enabled, otherwise passes text through untouched.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Colour only when stdout is a terminal and colour was not disabled.
    pub fn detect(no_color: bool) -> Self {
        Self::new(!no_color && std::io::stdout().is_tty())
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn header(&self, text: &str) -> String {
        self.paint(text, HEADER, true)
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(text, SUCCESS, false)
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, ERROR, true)
    }

    pub fn done(&self, text: &str) -> String {
        self.paint(text, DONE, false)
    }

    fn paint(&self, text: &str, color: Color, bold: bool) -> String {
        if !self.enabled {
            return text.to_string();
        }
        let styled = text.with(color);
        if bold {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }
}
