//! # Rotation Model
//!
//! A rotation is one line of puzzle input: a direction character followed by
//! the number of clicks, e.g. `R2` or `L12`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Which way the dial is turned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Counter-clockwise, towards lower numbers.
    Left,
    /// Clockwise, towards higher numbers.
    Right,
}

impl Direction {
    /// Only `'L'` means left. Any other character is treated as right.
    pub fn from_char(c: char) -> Self {
        match c {
            'L' => Direction::Left,
            _ => Direction::Right,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rotation {
    pub direction: Direction,
    pub clicks: u32,
}

impl Rotation {
    pub fn new(direction: Direction, clicks: u32) -> Self {
        Self { direction, clicks }
    }

    pub fn left(clicks: u32) -> Self {
        Self::new(Direction::Left, clicks)
    }

    pub fn right(clicks: u32) -> Self {
        Self::new(Direction::Right, clicks)
    }

    /// Clicks with the sign of the direction applied; left is negative.
    pub fn signed_clicks(&self) -> i64 {
        match self.direction {
            Direction::Left => -i64::from(self.clicks),
            Direction::Right => i64::from(self.clicks),
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.direction.as_char(), self.clicks)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotationParseError {
    #[error("rotation is empty")]
    Empty,
    #[error("invalid click count '{text}'")]
    InvalidMagnitude { text: String },
}

impl FromStr for Rotation {
    type Err = RotationParseError;

    /// Parses `<direction><clicks>`.
    ///
    /// The direction character is not validated: anything but `L` turns right.
    /// The click count must be plain ASCII digits; a sign is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let Some(first) = chars.next() else {
            return Err(RotationParseError::Empty);
        };

        let rest = chars.as_str();
        let digits_only = !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit());
        let clicks = rest
            .parse::<u32>()
            .ok()
            .filter(|_| digits_only)
            .ok_or_else(|| RotationParseError::InvalidMagnitude {
                text: rest.to_string(),
            })?;

        Ok(Rotation::new(Direction::from_char(first), clicks))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
