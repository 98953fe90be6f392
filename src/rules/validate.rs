//! Move validation.
//!
//! Structural checks run against the chain scan alone. The repetition check
//! needs the board the move would produce, so it lives with the applier;
//! `is_legal` combines both.

use crate::core::board::CELL_COUNT;
use crate::core::{Cell, GameState, Move};

use super::apply::try_apply;
use super::error::MoveError;
use super::scan::{scan_chain, ChainScan, Terminator};

/// Check everything except repetition and return the scan.
pub fn check_shape(state: &GameState, mv: Move) -> Result<ChainScan, MoveError> {
    if mv.index >= CELL_COUNT {
        return Err(MoveError::OutOfBounds(mv.index));
    }
    let mover = state.cell(mv.index);
    if !mover.is_movable() {
        return Err(MoveError::NoPiece(mv.index));
    }

    let scan = scan_chain(state, mv.index, mv.direction);

    if mover == Cell::Hole {
        return match scan.terminator {
            Terminator::Empty { .. } if scan.chain.len() == 1 => Ok(scan),
            Terminator::Empty { .. } => Err(MoveError::HoleCannotPush),
            _ => Err(MoveError::HoleCannotCapture),
        };
    }

    if scan.terminator.captures() && state.cell(scan.tail()).side().is_none() {
        return Err(MoveError::NothingToCapture);
    }

    Ok(scan)
}

/// Full legality check, repetition included.
#[must_use]
pub fn is_legal(state: &GameState, mv: Move) -> bool {
    try_apply(state, mv).is_ok()
}

/// True if the move would push one of the mover's own pieces off the
/// interior or into the hole.
///
/// Such moves are legal; the opponent is credited. Callers use this to ask
/// for confirmation before committing one.
#[must_use]
pub fn would_self_drop(state: &GameState, mv: Move) -> bool {
    if mv.index >= CELL_COUNT {
        return false;
    }
    let Cell::Piece(mover) = state.cell(mv.index) else {
        return false;
    };

    let scan = scan_chain(state, mv.index, mv.direction);
    scan.terminator.captures() && state.cell(scan.tail()) == Cell::Piece(mover)
}
