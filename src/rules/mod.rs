//! Rules engine.
//!
//! Everything here is a pure function of a `GameState`:
//!
//! - `scan`: walk a chain from a cell to whatever stops it
//! - `validate`: structural legality and the self-drop predicate
//! - `steps`: a move as an ordered list of primitive board operations
//! - `apply`: replay those steps, enforce the repetition rule, commit
//! - `moves`: legal move enumeration per side
//!
//! Interactive play and search share these functions, so a move the search
//! considers is resolved exactly as it would be on the board.

pub mod apply;
pub mod error;
pub mod moves;
pub mod scan;
pub mod steps;
pub mod validate;

pub use apply::{apply, try_apply, Replay};
pub use error::{MoveError, SetupError};
pub use moves::{
    count_legal_moves, legal_directions, legal_move_list, legal_moves, successors, LegalMoves,
};
pub use scan::{scan_chain, Chain, ChainScan, Terminator};
pub use steps::{plan_steps, Step, Steps};
pub use validate::{check_shape, is_legal, would_self_drop};

use crate::core::{GameState, Side};

/// The side that has won, if any. See `GameState::winner`.
#[must_use]
pub fn winner(state: &GameState) -> Option<Side> {
    state.winner()
}
