//! Turtle state and the opcodes that drive it.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// The state of the drawing turtle.
///
/// This is a plain value: `[` pushes a copy onto the interpreter's stack and
/// `]` replaces the live state with the popped copy.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current world-space position of the pen.
    pub position: DVec2,

    /// Heading in degrees, counter-clockwise from +X, kept in `[-180, 180)`.
    pub heading: f64,
}

impl Default for TurtleState {
    fn default() -> Self {
        Self {
            position: DVec2::ZERO,
            heading: 0.0,
        }
    }
}

impl TurtleState {
    /// A turtle at the origin facing `heading` degrees.
    pub fn facing(heading: f64) -> Self {
        Self {
            position: DVec2::ZERO,
            heading: normalize_degrees(heading),
        }
    }

    /// Unit vector along the current heading.
    pub fn forward(&self) -> DVec2 {
        DVec2::from_angle(self.heading.to_radians())
    }

    /// Moves `distance` along the current heading and returns the new position.
    pub fn advance(&mut self, distance: f64) -> DVec2 {
        self.position += self.forward() * distance;
        self.position
    }

    /// Turns counter-clockwise by `degrees` (negative turns clockwise).
    pub fn turn(&mut self, degrees: f64) {
        self.heading = normalize_degrees(self.heading + degrees);
    }
}

/// Wraps an angle in degrees into `[-180, 180)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    (degrees + 180.0).rem_euclid(360.0) - 180.0
}

/// Operations understood by the turtle interpreter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurtleOp {
    /// Move forward one step with the pen down (`F`, `G`).
    Draw,
    /// Move forward one step with the pen up (`M`, `N`).
    Move,
    /// Turn left by the configured angle (`+`).
    TurnLeft,
    /// Turn right by the configured angle (`-`).
    TurnRight,
    /// Save position and heading (`[`).
    Push,
    /// Restore the most recently saved position and heading (`]`).
    Pop,
    /// No-op: the symbol is a constant with no geometric meaning.
    Ignore,
}

impl TurtleOp {
    /// Maps a symbol to its operation. Unrecognized symbols map to [`TurtleOp::Ignore`].
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            'F' | 'G' => Self::Draw,
            'M' | 'N' => Self::Move,
            '+' => Self::TurnLeft,
            '-' => Self::TurnRight,
            '[' => Self::Push,
            ']' => Self::Pop,
            _ => Self::Ignore,
        }
    }
}
