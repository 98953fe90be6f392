//! Move application.
//!
//! Applying a move means planning its steps, replaying them on a copy of
//! the state, rejecting the result if it recreates the previous board, and
//! finally recording the pre-move board and passing the turn.
//!
//! `apply` keeps the permissive contract: an illegal move returns the input
//! state unchanged. `try_apply` reports why a move was rejected.

use tracing::trace;

use crate::core::{Board, GameState, Move};

use super::error::MoveError;
use super::steps::{apply_step, plan_steps, Step, Steps};

/// Apply a move, or report why it is illegal.
pub fn try_apply(state: &GameState, mv: Move) -> Result<GameState, MoveError> {
    Replay::new(state, mv).map(Replay::finish)
}

/// Apply a move; an illegal move yields the input state unchanged.
#[must_use]
pub fn apply(state: &GameState, mv: Move) -> GameState {
    try_apply(state, mv).unwrap_or_else(|err| {
        trace!(%mv, %err, "ignoring illegal move");
        state.clone()
    })
}

fn replay_all(state: &GameState, steps: &[Step]) -> GameState {
    let mut next = state.clone();
    for &step in steps {
        apply_step(&mut next, step);
    }
    next
}

/// Step-by-step playback of a single legal move.
///
/// Presentation code advances the replay one primitive at a time and renders
/// `current()` in between. `finish()` always produces exactly what `apply`
/// would, wherever the playback stopped.
///
/// ```
/// use ostle::core::{Direction, GameState, Move};
/// use ostle::rules::{apply, Replay};
///
/// let state = GameState::new_game();
/// let mv = Move::new(10, Direction::Down);
///
/// let mut replay = Replay::new(&state, mv).unwrap();
/// while replay.advance().is_some() {
///     // render replay.current()
/// }
/// assert_eq!(replay.finish(), apply(&state, mv));
/// ```
#[derive(Clone, Debug)]
pub struct Replay {
    before: Board,
    current: GameState,
    steps: Steps,
    cursor: usize,
}

impl Replay {
    /// Validate a move and prepare its playback.
    pub fn new(state: &GameState, mv: Move) -> Result<Self, MoveError> {
        let steps = plan_steps(state, mv)?;

        if let Some(prev) = state.prev_board() {
            if replay_all(state, &steps).board() == prev {
                return Err(MoveError::Repetition);
            }
        }

        Ok(Self {
            before: *state.board(),
            current: state.clone(),
            steps,
            cursor: 0,
        })
    }

    /// All steps of the move, in order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// State after the steps applied so far. The side to move has not
    /// changed yet.
    #[must_use]
    pub fn current(&self) -> &GameState {
        &self.current
    }

    /// Apply the next step and return it, or `None` when all are applied.
    pub fn advance(&mut self) -> Option<Step> {
        let step = *self.steps.get(self.cursor)?;
        apply_step(&mut self.current, step);
        self.cursor += 1;
        Some(step)
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.cursor == self.steps.len()
    }

    /// Apply any remaining steps and commit the move.
    #[must_use]
    pub fn finish(mut self) -> GameState {
        while self.advance().is_some() {}
        self.current.commit(self.before);
        self.current
    }
}
