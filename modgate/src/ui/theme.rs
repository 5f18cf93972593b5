// modgate/src/ui/theme.rs
//! Colour theme for human-readable output.
//!
//! Colour is applied only when the target stream is a terminal and `NO_COLOR`
//! is unset; otherwise every entry renders as plain text.

use is_terminal::IsTerminal;
use comfy_table::Color;
use owo_colors::{AnsiColors, OwoColorize};

/// The logical parts of the output that can be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeEntry {
    Approved,
    Rejected,
    Label,
    Flag,
    Cleaned,
    Muted,
}

impl ThemeEntry {
    pub fn to_ansi_color(self) -> AnsiColors {
        match self {
            ThemeEntry::Approved => AnsiColors::Green,
            ThemeEntry::Rejected => AnsiColors::Red,
            ThemeEntry::Label => AnsiColors::Cyan,
            ThemeEntry::Flag => AnsiColors::Yellow,
            ThemeEntry::Cleaned => AnsiColors::BrightBlue,
            ThemeEntry::Muted => AnsiColors::BrightBlack,
        }
    }

    /// The same colour for `comfy-table` cells.
    pub fn to_table_color(self) -> Color {
        match self {
            ThemeEntry::Approved => Color::Green,
            ThemeEntry::Rejected => Color::Red,
            ThemeEntry::Label => Color::Cyan,
            ThemeEntry::Flag => Color::Yellow,
            ThemeEntry::Cleaned => Color::Blue,
            ThemeEntry::Muted => Color::DarkGrey,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    use_color: bool,
}

impl Theme {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Colour when stdout is a terminal and `NO_COLOR` is not set.
    pub fn for_stdout() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self::new(!no_color && std::io::stdout().is_terminal())
    }

    pub fn uses_color(&self) -> bool {
        self.use_color
    }

    pub fn paint(&self, entry: ThemeEntry, text: &str) -> String {
        if self.use_color {
            text.color(entry.to_ansi_color()).to_string()
        } else {
            text.to_string()
        }
    }

    /// Same as [`Theme::paint`] but bold.
    pub fn strong(&self, entry: ThemeEntry, text: &str) -> String {
        if self.use_color {
            text.color(entry.to_ansi_color()).bold().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_theme_adds_no_escapes() {
        let theme = Theme::plain();
        assert_eq!(theme.paint(ThemeEntry::Rejected, "REJECTED"), "REJECTED");
        assert_eq!(theme.strong(ThemeEntry::Approved, "APPROVED"), "APPROVED");
    }

    #[test]
    fn test_colored_theme_wraps_text() {
        let theme = Theme::new(true);
        let painted = theme.paint(ThemeEntry::Rejected, "REJECTED");
        assert!(painted.contains("\u{1b}["));
        assert!(painted.contains("REJECTED"));
    }
}
