//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Number of pegs in a code sequence
pub const PEG_COUNT: usize = 4;

/// Number of colors in the palette
pub const PALETTE_SIZE: usize = 6;

/// Total guesses allowed per game
pub const TOTAL_GUESSES: u32 = 10;

/// Peg colors
///
/// The palette is fixed. Each color's single-letter alias is its first
/// letter, so no two palette members may share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    White,
    Orange,
}

impl Color {
    /// The full palette in declaration order
    pub const ALL: [Color; PALETTE_SIZE] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::White,
        Color::Orange,
    ];

    /// Parse a color token (case-insensitive)
    /// Accepts the full color name or its first-letter alias
    pub fn from_token(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" | "r" => Some(Color::Red),
            "green" | "g" => Some(Color::Green),
            "blue" | "b" => Some(Color::Blue),
            "yellow" | "y" => Some(Color::Yellow),
            "white" | "w" => Some(Color::White),
            "orange" | "o" => Some(Color::Orange),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::White => "white",
            Color::Orange => "orange",
        }
    }

    /// Index into per-color tables (0..PALETTE_SIZE)
    pub fn index(self) -> usize {
        self as usize
    }
}
