//! # ostle
//!
//! Rules engine and alpha-beta AI for Ostle, a two-player pushing game.
//!
//! ## The game
//!
//! The board is a 7x7 grid. Play happens on the 5x5 interior; the outer
//! ring of cells is where pushed pieces fall. Each side starts with five
//! pieces on its home row and a single shared hole sits in the center.
//!
//! On a turn the mover picks one of its pieces, or the hole, and a
//! direction. A piece pushes the contiguous line of pieces in front of it;
//! whatever is pushed onto the ring or into the hole is captured. The hole
//! only steps into an adjacent empty cell. A move may not recreate the
//! board from before the previous move. The first side credited with two
//! captures wins.
//!
//! ## Modules
//!
//! - `core`: sides, board geometry, moves, game state, RNG
//! - `rules`: chain scanning, validation, application, move enumeration
//! - `search`: evaluator and fixed-depth alpha-beta search
//! - `session`: interactive play with self-drop confirmation and an AI side
//!
//! ## Example
//!
//! ```rust
//! use ostle::{apply, Direction, GameState, Move, Side};
//!
//! let state = GameState::new_game();
//! let next = apply(&state, Move::new(24, Direction::Up));
//!
//! assert_eq!(next.hole(), 17);
//! assert_eq!(next.to_move(), Side::Second);
//! ```

pub mod core;
pub mod rules;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Direction, DirectionSet, GameRng, GameRngState, GameState, Move, MoveRecord,
    Side, SideMap, WINNING_CAPTURES,
};

pub use crate::rules::{
    apply, is_legal, legal_move_list, legal_moves, try_apply, would_self_drop, LegalMoves,
    MoveError, Replay, SetupError, Step,
};

pub use crate::search::{best_move, EvalWeights, Evaluator, HeuristicEvaluator, SearchConfig, Searcher, SearchStats};

pub use crate::session::{GameSession, PlayOutcome, SessionConfig, SessionError};
