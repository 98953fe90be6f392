//! Move representation: a cell index plus a push direction.
//!
//! A move names the cell that starts moving (one of the mover's pieces or
//! the hole) and the direction it moves in. Everything else about the move,
//! such as how long the pushed chain is or whether something falls off, is
//! derived from the board by the rules layer.

use serde::{Deserialize, Serialize};

use super::board::Direction;
use super::side::Side;

/// A single move.
///
/// ```
/// use ostle::core::{Direction, Move};
///
/// let mv = Move::new(10, Direction::Down);
/// assert_eq!(mv.to_string(), "10 down");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Index of the piece or hole that starts moving.
    pub index: usize,

    /// Direction of the push.
    pub direction: Direction,
}

impl Move {
    #[must_use]
    pub const fn new(index: usize, direction: Direction) -> Self {
        Self { index, direction }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.index, self.direction)
    }
}

/// A recorded move with its outcome, for move logs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The side that made the move.
    pub side: Side,

    /// The move made.
    pub mv: Move,

    /// Ply number, starting at 1 for the first move of a game.
    pub ply: u32,

    /// Side of the piece captured by this move, if any.
    pub captured: Option<Side>,
}

impl MoveRecord {
    #[must_use]
    pub fn new(side: Side, mv: Move, ply: u32, captured: Option<Side>) -> Self {
        Self {
            side,
            mv,
            ply,
            captured,
        }
    }

    /// True if the mover dropped one of its own pieces.
    #[must_use]
    pub fn is_self_drop(&self) -> bool {
        self.captured == Some(self.side)
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {} {}", self.ply, self.side, self.mv)?;
        if let Some(side) = self.captured {
            write!(f, " (captures {side})")?;
        }
        Ok(())
    }
}
