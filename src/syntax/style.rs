//! Concrete styles for role names
//!
//! This is the host side of the role indirection: a Theme resolves
//! each role name to colors and attributes. Nothing in classification
//! depends on it.

use std::collections::HashMap;

use super::binding::RoleName;
use crate::error::{Result, SyntaxError};

/// Terminal colors (ANSI 16-color palette for compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// Parse a kebab-case color name ("red", "bright-blue")
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Color::Default),
            "black" => Some(Color::Black),
            "red" => Some(Color::Red),
            "green" => Some(Color::Green),
            "yellow" => Some(Color::Yellow),
            "blue" => Some(Color::Blue),
            "magenta" => Some(Color::Magenta),
            "cyan" => Some(Color::Cyan),
            "white" => Some(Color::White),
            "bright-black" | "gray" | "grey" => Some(Color::BrightBlack),
            "bright-red" => Some(Color::BrightRed),
            "bright-green" => Some(Color::BrightGreen),
            "bright-yellow" => Some(Color::BrightYellow),
            "bright-blue" => Some(Color::BrightBlue),
            "bright-magenta" => Some(Color::BrightMagenta),
            "bright-cyan" => Some(Color::BrightCyan),
            "bright-white" => Some(Color::BrightWhite),
            _ => None,
        }
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Builder: set background color
    pub fn with_bg(mut self, color: Color) -> Self {
        self.bg = color;
        self
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set underline
    pub fn with_underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Parse a style description such as "bold magenta"
    ///
    /// Words are attributes (bold, italic, underline) or a single
    /// foreground color name. `on <color>` sets the background.
    pub fn parse(description: &str) -> Result<Self> {
        let mut style = Style::default();
        let mut words = description.split_whitespace();

        while let Some(word) = words.next() {
            match word {
                "bold" => style.bold = true,
                "italic" => style.italic = true,
                "underline" => style.underline = true,
                "on" => {
                    let name = words.next().unwrap_or_default();
                    style.bg = Color::from_name(name)
                        .ok_or_else(|| SyntaxError::UnknownColor(name.to_string()))?;
                }
                name => {
                    style.fg = Color::from_name(name)
                        .ok_or_else(|| SyntaxError::UnknownColor(name.to_string()))?;
                }
            }
        }

        Ok(style)
    }
}

/// Role name to concrete style mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    styles: HashMap<RoleName, Style>,
}

impl Theme {
    /// Style for a role; unknown roles get the default presentation
    pub fn style_of(&self, role: RoleName) -> Style {
        self.styles.get(&role).copied().unwrap_or_default()
    }

    /// Replace the style of one role
    pub fn set(&mut self, role: RoleName, style: Style) {
        self.styles.insert(role, style);
    }

    /// Apply `role name -> style description` overrides (for TOML loading)
    pub fn apply_overrides<'a, I>(&mut self, overrides: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        for (name, description) in overrides {
            let role = RoleName::from_name(name)
                .ok_or_else(|| SyntaxError::UnknownRole(name.clone()))?;
            self.set(role, Style::parse(description)?);
        }
        Ok(())
    }
}

impl Default for Theme {
    fn default() -> Self {
        let mut styles = HashMap::new();
        styles.insert(RoleName::KEYWORD, Style::fg(Color::Magenta).with_bold());
        styles.insert(RoleName::BOOLEAN, Style::fg(Color::BrightRed));
        styles.insert(RoleName::NUMBER, Style::fg(Color::Cyan));
        Self { styles }
    }
}
