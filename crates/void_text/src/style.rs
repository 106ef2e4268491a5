//! Text styles

use serde::{Deserialize, Serialize};

/// The sixteen named text colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Formatting applied to a text segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<TextColor>,
    #[serde(skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub underlined: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub strikethrough: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub obfuscated: bool,
}

impl TextStyle {
    /// No formatting
    pub const fn new() -> Self {
        Self {
            color: None,
            bold: false,
            italic: false,
            underlined: false,
            strikethrough: false,
            obfuscated: false,
        }
    }

    /// Set color
    pub fn with_color(mut self, color: TextColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Make bold
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Make italic
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Make underlined
    pub fn underlined(mut self) -> Self {
        self.underlined = true;
        self
    }

    /// Make strikethrough
    pub fn strikethrough(mut self) -> Self {
        self.strikethrough = true;
        self
    }

    /// Make obfuscated
    pub fn obfuscated(mut self) -> Self {
        self.obfuscated = true;
        self
    }

    /// Whether no formatting is applied
    pub fn is_plain(&self) -> bool {
        *self == Self::new()
    }
}
