//! Rule violation and setup errors.

use thiserror::Error;

/// Why a move was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The index is not on the board.
    #[error("index {0} is off the board")]
    OutOfBounds(usize),

    /// The cell holds neither a piece nor the hole.
    #[error("no piece or hole at index {0}")]
    NoPiece(usize),

    /// The hole may only step into an adjacent empty cell.
    #[error("the hole cannot push pieces")]
    HoleCannotPush,

    /// The hole may not leave the interior or meet anything that would fall.
    #[error("the hole cannot capture")]
    HoleCannotCapture,

    /// A push toward the ring or the hole must end on a piece.
    #[error("nothing to capture at the end of the chain")]
    NothingToCapture,

    /// The move would recreate the board from before the last move.
    #[error("move repeats the previous position")]
    Repetition,
}

/// Why a position could not be built.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    /// A diagram must have five rows of five cells.
    #[error("diagram must be 5 rows of 5 cells")]
    BadDimensions,

    #[error("unknown diagram symbol {0:?}")]
    UnknownSymbol(char),

    /// A position must contain exactly one hole.
    #[error("expected exactly one hole, found {0}")]
    HoleCount(usize),
}
