//! Console display colors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The sixteen classic console foreground colors.
///
/// `Dark*` variants map to the normal ANSI colors, the unprefixed variants to
/// their bright counterparts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
#[derive(Default)]
pub enum ConsoleColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    #[default]
    White,
}

impl ConsoleColor {
    /// Every color, in declaration order
    pub const ALL: [ConsoleColor; 16] = [
        ConsoleColor::Black,
        ConsoleColor::DarkBlue,
        ConsoleColor::DarkGreen,
        ConsoleColor::DarkCyan,
        ConsoleColor::DarkRed,
        ConsoleColor::DarkMagenta,
        ConsoleColor::DarkYellow,
        ConsoleColor::Gray,
        ConsoleColor::DarkGray,
        ConsoleColor::Blue,
        ConsoleColor::Green,
        ConsoleColor::Cyan,
        ConsoleColor::Red,
        ConsoleColor::Magenta,
        ConsoleColor::Yellow,
        ConsoleColor::White,
    ];

    /// Canonical name, as used in configuration
    pub fn to_str(&self) -> &'static str {
        match self {
            ConsoleColor::Black => "Black",
            ConsoleColor::DarkBlue => "DarkBlue",
            ConsoleColor::DarkGreen => "DarkGreen",
            ConsoleColor::DarkCyan => "DarkCyan",
            ConsoleColor::DarkRed => "DarkRed",
            ConsoleColor::DarkMagenta => "DarkMagenta",
            ConsoleColor::DarkYellow => "DarkYellow",
            ConsoleColor::Gray => "Gray",
            ConsoleColor::DarkGray => "DarkGray",
            ConsoleColor::Blue => "Blue",
            ConsoleColor::Green => "Green",
            ConsoleColor::Cyan => "Cyan",
            ConsoleColor::Red => "Red",
            ConsoleColor::Magenta => "Magenta",
            ConsoleColor::Yellow => "Yellow",
            ConsoleColor::White => "White",
        }
    }

    /// Equivalent `colored` color
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            ConsoleColor::Black => Black,
            ConsoleColor::DarkBlue => Blue,
            ConsoleColor::DarkGreen => Green,
            ConsoleColor::DarkCyan => Cyan,
            ConsoleColor::DarkRed => Red,
            ConsoleColor::DarkMagenta => Magenta,
            ConsoleColor::DarkYellow => Yellow,
            ConsoleColor::Gray => White,
            ConsoleColor::DarkGray => BrightBlack,
            ConsoleColor::Blue => BrightBlue,
            ConsoleColor::Green => BrightGreen,
            ConsoleColor::Cyan => BrightCyan,
            ConsoleColor::Red => BrightRed,
            ConsoleColor::Magenta => BrightMagenta,
            ConsoleColor::Yellow => BrightYellow,
            ConsoleColor::White => BrightWhite,
        }
    }

    /// SGR sequence that switches the foreground to this color
    pub fn ansi_foreground(&self) -> String {
        format!("\x1b[{}m", self.color_code().to_fg_str())
    }
}

impl fmt::Display for ConsoleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for ConsoleColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConsoleColor::ALL
            .iter()
            .copied()
            .find(|color| color.to_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Invalid console color: '{}'", s))
    }
}

impl TryFrom<String> for ConsoleColor {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ConsoleColor> for &'static str {
    fn from(color: ConsoleColor) -> Self {
        color.to_str()
    }
}
