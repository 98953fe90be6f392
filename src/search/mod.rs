//! Game-tree search.
//!
//! A fixed-depth minimax with alpha-beta pruning over the rules in
//! `crate::rules`, scored by a pluggable `Evaluator`.
//!
//! ## Usage
//!
//! ```rust
//! use ostle::core::GameState;
//! use ostle::search::{SearchConfig, Searcher};
//!
//! let mut searcher = Searcher::new(SearchConfig::default().with_depth(2).with_seed(7));
//! let state = GameState::new_game();
//!
//! if let Some(mv) = searcher.best_move(&state) {
//!     println!("First plays {mv}");
//! }
//! println!("{} nodes", searcher.stats().nodes);
//! ```

pub mod alphabeta;
pub mod config;
pub mod eval;
pub mod stats;

pub use alphabeta::{best_move, Searcher};
pub use config::{EvalWeights, SearchConfig};
pub use eval::{Evaluator, HeuristicEvaluator};
pub use stats::SearchStats;
