//! # Safe Dial
//!
//! A circular counter over `0..=99`. Turning past 99 wraps to 0 and turning
//! below 0 wraps to 99.

use dialr_common::rotation::{Direction, Rotation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dial {
    number: u8,
}

impl Dial {
    /// Number of positions on the dial.
    pub const SIZE: u8 = 100;
    /// Position the dial points at before the first rotation.
    pub const START: u8 = 50;

    pub fn new() -> Self {
        Self {
            number: Self::START,
        }
    }

    /// Starts the dial at an arbitrary position, wrapped into range.
    pub fn starting_at(number: u8) -> Self {
        Self {
            number: number % Self::SIZE,
        }
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    /// Applies a rotation and returns the new position.
    ///
    /// `rem_euclid` keeps the result in `0..SIZE` even when the signed sum is
    /// negative (10 turned left by 20 is 90, not -10).
    pub fn turn(&mut self, rotation: Rotation) -> u8 {
        let size = i64::from(Self::SIZE);
        let sum = i64::from(self.number) + rotation.signed_clicks() % size;
        self.number = sum.rem_euclid(size) as u8;
        self.number
    }

    /// Applies a rotation and returns how many of its clicks left the dial
    /// pointing at zero, the final position included.
    pub fn turn_counting_zeros(&mut self, rotation: Rotation) -> u64 {
        let size = u64::from(Self::SIZE);
        let start = u64::from(self.number);
        let clicks = u64::from(rotation.clicks);

        let hits = match rotation.direction {
            Direction::Right => (start + clicks) / size,
            // Moving left from zero, the first hit is a full lap away.
            Direction::Left if start == 0 => clicks / size,
            Direction::Left if clicks >= start => (clicks - start) / size + 1,
            Direction::Left => 0,
        };

        self.turn(rotation);
        hits
    }
}

impl Default for Dial {
    fn default() -> Self {
        Self::new()
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
