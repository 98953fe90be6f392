//! Step planning: a move broken into primitive board operations.
//!
//! Every move resolves to a short, ordered list of steps. The applier
//! replays these steps to produce the next state, and presentation code can
//! replay them one at a time to animate the same move, so both always agree.
//!
//! Resolution order by terminator:
//!
//! - **Empty**: slide tail-first, each cell moving into the one vacated ahead
//!   of it; the start cell ends empty.
//! - **Ring / OffBoard / HoleFall**: capture the chain's last piece, shift the
//!   rest of the chain forward tail-first, then clear the start cell.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::board::step;
use crate::core::{GameState, Move, Side};

use super::error::MoveError;
use super::scan::Terminator;
use super::validate::check_shape;

/// A primitive board operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    /// Move the piece or hole at `from` into the empty cell `to`.
    Slide { from: usize, to: usize },
    /// Make sure `at` is empty.
    Clear { at: usize },
    /// Remove the piece at `at` and credit `credit`.
    ///
    /// `credit` is always the opponent of the removed piece, whoever moved.
    /// A chain started from an opponent's piece still credits the side that
    /// did not lose it; enumeration never offers such moves.
    Capture { at: usize, credit: Side },
}

/// Planned steps for one move.
pub type Steps = SmallVec<[Step; 8]>;

/// Plan the steps of a move.
///
/// Performs every check except repetition, which depends on the final board.
pub fn plan_steps(state: &GameState, mv: Move) -> Result<Steps, MoveError> {
    let scan = check_shape(state, mv)?;
    let chain = &scan.chain;
    let mut steps = Steps::new();

    match scan.terminator {
        Terminator::Empty { at } => {
            let mut to = at;
            for &from in chain.iter().rev() {
                steps.push(Step::Slide { from, to });
                to = from;
            }
        }
        Terminator::Ring { .. } | Terminator::OffBoard | Terminator::HoleFall { .. } => {
            let tail = scan.tail();
            let captured = state.cell(tail).side().ok_or(MoveError::NothingToCapture)?;
            steps.push(Step::Capture {
                at: tail,
                credit: captured.opponent(),
            });

            // The hole is never part of the chain, so each remaining member
            // steps into the cell directly ahead of it.
            for &from in chain[..chain.len() - 1].iter().rev() {
                let to = step(from, mv.direction).ok_or(MoveError::OutOfBounds(from))?;
                steps.push(Step::Slide { from, to });
            }
            steps.push(Step::Clear { at: mv.index });
        }
    }

    Ok(steps)
}

/// Apply one step in place.
///
/// Only called on states owned by the caller, never on shared ones.
pub(crate) fn apply_step(state: &mut GameState, step: Step) {
    match step {
        Step::Slide { from, to } => state.slide(from, to),
        Step::Clear { at } => {
            debug_assert_ne!(at, state.hole(), "clear never removes the hole");
            state.remove_piece(at);
        }
        Step::Capture { at, credit } => {
            if let Some(side) = state.remove_piece(at) {
                if side != credit {
                    state.credit(credit);
                }
            }
        }
    }
    state.debug_check();
}
