use std::fmt;

use crossterm::style::{Color, Stylize};

pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

/// Severity and status markers, with ASCII fallbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Info,
    Arrow,
}

impl Icon {
    pub fn render(self, supports_unicode: bool) -> &'static str {
        match (self, supports_unicode) {
            (Icon::Success, true) => "✓",
            (Icon::Error, true) => "✗",
            (Icon::Warning, true) => "⚠",
            (Icon::Info, true) => "ℹ",
            (Icon::Arrow, true) => "↳",
            (Icon::Success, false) => "[OK]",
            (Icon::Error, false) => "[ERROR]",
            (Icon::Warning, false) => "[WARN]",
            (Icon::Info, false) => "[INFO]",
            (Icon::Arrow, false) => "->",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Option<Color>,
    bold: bool,
}

impl ColoredText {
    fn with_color(text: impl Into<String>, color: Option<Color>) -> Self {
        Self {
            text: text.into(),
            color,
            bold: false,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::with_color(text, None)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::with_color(text, Some(colors::SUCCESS))
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::with_color(text, Some(colors::ERROR))
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::with_color(text, Some(colors::WARNING))
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::with_color(text, Some(colors::INFO))
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Self::with_color(text, Some(colors::DIM))
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }

        let mut styled = self.text.as_str().stylize();
        if let Some(color) = self.color {
            styled = styled.with(color);
        }
        if self.bold {
            styled = styled.bold();
        }
        styled.to_string()
    }
}

impl fmt::Display for ColoredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
