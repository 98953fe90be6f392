//! Interactive game session.
//!
//! Wraps a `GameState` with the bookkeeping an interactive front end needs:
//! ownership checks, confirmation of self-drops, an optional AI opponent and
//! a bounded move log. Nothing here renders or waits; callers drive it.

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::core::{Cell, GameRngState, GameState, Move, MoveRecord, Side};
use crate::rules::{legal_moves, try_apply, would_self_drop, LegalMoves, MoveError, Replay};
use crate::search::{SearchConfig, Searcher};

/// Why a session refused a request.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// A side has already won.
    #[error("the game is over")]
    GameOver,

    /// The cell holds the opponent's piece.
    #[error("the piece at index {index} belongs to the opponent")]
    NotYourPiece { index: usize },

    #[error(transparent)]
    Illegal(#[from] MoveError),
}

/// Result of a successful `GameSession::play` request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The move was committed.
    Played(MoveRecord),

    /// The move would drop one of the mover's own pieces. Repeat the same
    /// request to commit it.
    ConfirmSelfDrop(Move),
}

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Side played by the AI, if any.
    pub ai_side: Option<Side>,

    /// Search settings for the AI.
    pub search: SearchConfig,

    /// Number of most recent moves kept in the log.
    pub log_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ai_side: Some(Side::Second),
            search: SearchConfig::default(),
            log_capacity: 30,
        }
    }
}

impl SessionConfig {
    pub fn with_ai_side(mut self, side: Option<Side>) -> Self {
        self.ai_side = side;
        self
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    pub fn with_log_capacity(mut self, capacity: usize) -> Self {
        self.log_capacity = capacity;
        self
    }
}

/// A game in progress.
///
/// ```
/// use ostle::core::{Direction, Move};
/// use ostle::session::{GameSession, PlayOutcome, SessionConfig};
///
/// let mut session = GameSession::new(SessionConfig::default());
/// let outcome = session.play(Move::new(10, Direction::Down)).unwrap();
/// assert!(matches!(outcome, PlayOutcome::Played(_)));
///
/// let reply = session.ai_reply().unwrap();
/// assert!(reply.is_some());
/// ```
pub struct GameSession {
    config: SessionConfig,
    state: GameState,
    searcher: Searcher,
    log: Vector<MoveRecord>,
    ply: u32,
    pending_self_drop: Option<Move>,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        Self::from_state(config, GameState::new_game())
    }

    /// Start a session from an arbitrary position.
    pub fn from_state(config: SessionConfig, state: GameState) -> Self {
        Self {
            searcher: Searcher::new(config.search.clone()),
            config,
            state,
            log: Vector::new(),
            ply: 0,
            pending_self_drop: None,
        }
    }

    /// Back to the starting position with an empty log.
    ///
    /// The AI's random stream restarts from its seed.
    pub fn reset(&mut self) {
        *self = Self::new(self.config.clone());
        debug!("session reset");
    }

    // === Queries ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Recent moves, oldest first.
    #[must_use]
    pub fn log(&self) -> &Vector<MoveRecord> {
        &self.log
    }

    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.state.winner()
    }

    /// Legal moves for the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> LegalMoves {
        legal_moves(&self.state, self.state.to_move())
    }

    /// The self-drop awaiting confirmation, if any.
    #[must_use]
    pub fn pending_self_drop(&self) -> Option<Move> {
        self.pending_self_drop
    }

    /// True when the side to move is played by the AI.
    #[must_use]
    pub fn is_ai_turn(&self) -> bool {
        self.config.ai_side == Some(self.state.to_move())
    }

    /// Position of the AI's tie-break stream.
    ///
    /// Saved together with the state, it lets `resume_ai` continue a game
    /// with the same AI choices.
    #[must_use]
    pub fn ai_rng_state(&self) -> GameRngState {
        self.searcher.rng_state()
    }

    pub fn resume_ai(&mut self, rng: &GameRngState) {
        self.searcher.restore_rng(rng);
    }

    /// Step-by-step playback of a move from the current position.
    ///
    /// The session is not changed; commit with `play`.
    pub fn replay(&self, mv: Move) -> Result<Replay, SessionError> {
        self.check_mover(mv)?;
        Ok(Replay::new(&self.state, mv)?)
    }

    // === Actions ===

    /// Play a move for the side to move.
    ///
    /// A move that drops one of the mover's own pieces needs to be sent
    /// twice in a row. Any other request in between cancels it.
    pub fn play(&mut self, mv: Move) -> Result<PlayOutcome, SessionError> {
        let armed = self.pending_self_drop.take();
        self.check_mover(mv)?;
        let next = try_apply(&self.state, mv)?;

        if would_self_drop(&self.state, mv) && armed != Some(mv) {
            debug!(%mv, "self-drop needs confirmation");
            self.pending_self_drop = Some(mv);
            return Ok(PlayOutcome::ConfirmSelfDrop(mv));
        }

        Ok(PlayOutcome::Played(self.commit(mv, next)))
    }

    /// Let the AI move if it is on move.
    ///
    /// Returns `None` when it is not the AI's turn or the AI has no legal
    /// move. The AI never asks for self-drop confirmation.
    pub fn ai_reply(&mut self) -> Result<Option<MoveRecord>, SessionError> {
        if self.state.is_terminal() {
            return Err(SessionError::GameOver);
        }
        if !self.is_ai_turn() {
            return Ok(None);
        }
        self.pending_self_drop = None;

        let Some(mv) = self.searcher.best_move(&self.state) else {
            debug!(side = %self.state.to_move(), "AI has no legal move");
            return Ok(None);
        };
        let next = try_apply(&self.state, mv)?;
        let record = self.commit(mv, next);
        debug!(%record, nodes = self.searcher.stats().nodes, "AI reply");
        Ok(Some(record))
    }

    fn check_mover(&self, mv: Move) -> Result<(), SessionError> {
        if self.state.is_terminal() {
            return Err(SessionError::GameOver);
        }
        match self.state.board().cells().get(mv.index) {
            None => Err(MoveError::OutOfBounds(mv.index).into()),
            Some(Cell::Piece(side)) if *side != self.state.to_move() => {
                Err(SessionError::NotYourPiece { index: mv.index })
            }
            Some(_) => Ok(()),
        }
    }

    fn commit(&mut self, mv: Move, next: GameState) -> MoveRecord {
        // whoever gained a capture took a piece of the other side
        let captured = Side::ALL
            .into_iter()
            .find(|&side| next.captured(side) > self.state.captured(side))
            .map(Side::opponent);

        self.ply += 1;
        let record = MoveRecord::new(self.state.to_move(), mv, self.ply, captured);
        self.state = next;

        self.log.push_back(record.clone());
        while self.log.len() > self.config.log_capacity {
            self.log.pop_front();
        }
        debug!(%record, "move played");

        if let Some(winner) = self.state.winner() {
            info!(%winner, plies = self.ply, "game over");
        }
        record
    }
}
