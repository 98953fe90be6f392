//! Minimax search with alpha-beta pruning.
//!
//! Second is the maximizing side and First the minimizing side, both scored
//! by the same Second-positive evaluator. The searcher plays whichever side
//! is on move in the root position.
//!
//! ## Leaves
//!
//! A node is a leaf at depth zero, when either side has won, or when the
//! side on move has no legal move. All three return the static evaluation;
//! being stuck is not scored as a loss.
//!
//! ## Tie-breaking
//!
//! Root moves are shuffled with a stream forked from the configured seed,
//! and the first move to reach the best score wins. Interior nodes keep
//! enumeration order. The same seed and the same sequence of calls
//! therefore give the same moves.

use std::time::Instant;

use tracing::{debug, trace};

use crate::core::{GameRng, GameRngState, GameState, Move, Side};
use crate::rules::{apply, successors};

use super::config::SearchConfig;
use super::eval::{Evaluator, HeuristicEvaluator};
use super::stats::SearchStats;

/// Alpha-beta searcher.
///
/// ```
/// use ostle::core::GameState;
/// use ostle::search::{SearchConfig, Searcher};
///
/// let mut searcher = Searcher::new(SearchConfig::default().with_depth(2));
/// let state = GameState::new_game();
///
/// let mv = searcher.best_move(&state).unwrap();
/// assert!(ostle::rules::is_legal(&state, mv));
/// ```
pub struct Searcher<V = HeuristicEvaluator> {
    config: SearchConfig,
    evaluator: V,
    rng: GameRng,
    stats: SearchStats,
}

impl Searcher<HeuristicEvaluator> {
    /// Create a searcher using the heuristic evaluator with the configured
    /// weights.
    pub fn new(config: SearchConfig) -> Self {
        let evaluator = HeuristicEvaluator::new(config.weights);
        Self::with_evaluator(config, evaluator)
    }
}

impl<V: Evaluator> Searcher<V> {
    /// Create a searcher with a custom evaluator.
    pub fn with_evaluator(config: SearchConfig, evaluator: V) -> Self {
        Self {
            rng: GameRng::new(config.seed),
            config,
            evaluator,
            stats: SearchStats::default(),
        }
    }

    /// Best move for the side to move at the configured depth.
    pub fn best_move(&mut self, state: &GameState) -> Option<Move> {
        self.search(state, self.config.depth)
    }

    /// Best move for the side to move at an explicit depth.
    ///
    /// Returns `None` if the side to move has no legal move.
    pub fn search(&mut self, state: &GameState, depth: u32) -> Option<Move> {
        let start = Instant::now();
        self.stats.reset();

        let side = state.to_move();
        let maximizing = side == Side::Second;

        let mut children: Vec<(Move, GameState)> = successors(state).collect();
        self.stats.root_moves = children.len() as u32;
        if children.is_empty() {
            debug!(%side, "no legal moves");
            return None;
        }
        if self.config.shuffle_moves {
            let mut rng = self.rng.fork();
            rng.shuffle(&mut children);
        }

        let mut alpha = f64::NEG_INFINITY;
        let mut beta = f64::INFINITY;
        let mut best: Option<(Move, f64)> = None;

        for (mv, child) in &children {
            self.stats.nodes += 1;
            let value = self.minimax(child, depth.saturating_sub(1), alpha, beta, !maximizing);
            trace!(%mv, value, "root move");

            let improves = match best {
                None => true,
                Some((_, score)) if maximizing => value > score,
                Some((_, score)) => value < score,
            };
            if improves {
                best = Some((*mv, value));
                if maximizing {
                    alpha = alpha.max(value);
                } else {
                    beta = beta.min(value);
                }
            }
        }

        self.stats.best_score = best.map(|(_, score)| score);
        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            %side,
            depth,
            best = ?best,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            time_us = self.stats.time_us,
            nps = self.stats.nodes_per_second(),
            "search finished"
        );

        best.map(|(mv, _)| mv)
    }

    fn minimax(
        &mut self,
        state: &GameState,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> f64 {
        if depth == 0 || state.is_terminal() {
            return self.evaluate(state);
        }

        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut any = false;

        for (_, child) in successors(state) {
            any = true;
            self.stats.nodes += 1;
            let value = self.minimax(&child, depth - 1, alpha, beta, !maximizing);

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(best);
            } else {
                best = best.min(value);
                beta = beta.min(best);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        if any {
            best
        } else {
            self.evaluate(state)
        }
    }

    fn evaluate(&mut self, state: &GameState) -> f64 {
        self.stats.evaluations += 1;
        self.evaluator.evaluate(state)
    }

    /// Play the best move, or return the state unchanged when there is none.
    #[must_use]
    pub fn play(&mut self, state: &GameState) -> GameState {
        match self.best_move(state) {
            Some(mv) => apply(state, mv),
            None => state.clone(),
        }
    }

    /// Statistics of the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Position of the tie-break stream, for resuming a searcher later.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Continue the tie-break stream from a saved position.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[must_use]
    pub fn evaluator(&self) -> &V {
        &self.evaluator
    }
}

/// One-shot search with the default evaluator.
#[must_use]
pub fn best_move(state: &GameState, depth: u32, seed: u64) -> Option<Move> {
    let config = SearchConfig::default().with_depth(depth).with_seed(seed);
    Searcher::new(config).best_move(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Direction};
    use crate::rules::is_legal;

    /// Scores only captures, so search results are easy to predict.
    struct CaptureCount;

    impl Evaluator for CaptureCount {
        fn evaluate(&self, state: &GameState) -> f64 {
            f64::from(state.captured(Side::Second)) - f64::from(state.captured(Side::First))
        }
    }

    fn state(diagram: &str, to_move: Side) -> GameState {
        GameState::from_board(Board::from_interior(diagram).unwrap(), to_move).unwrap()
    }

    #[test]
    fn test_search_returns_legal_move() {
        let state = GameState::new_game();
        let mut searcher = Searcher::new(SearchConfig::default().with_depth(2));

        let mv = searcher.best_move(&state).unwrap();
        assert!(is_legal(&state, mv));
        assert_eq!(searcher.stats().root_moves, 24);
        assert!(searcher.stats().nodes > 24);
        assert!(searcher.stats().best_score.is_some());
    }

    #[test]
    fn test_second_takes_capture() {
        // o can push x onto the ring
        let state = state(
            ".....
             .....
             .....
             ...o.
             H..x.",
            Side::Second,
        );
        let config = SearchConfig::default().with_depth(1).with_shuffle(false);
        let mut searcher = Searcher::with_evaluator(config, CaptureCount);

        let mv = searcher.best_move(&state).unwrap();
        let next = apply(&state, mv);
        assert_eq!(next.captured(Side::Second), 1);
        assert_eq!(searcher.stats().best_score, Some(1.0));
    }

    #[test]
    fn test_first_minimizes() {
        let state = state(
            ".....
             .....
             .....
             ...x.
             H..o.",
            Side::First,
        );
        let config = SearchConfig::default().with_depth(1).with_shuffle(false);
        let mut searcher = Searcher::with_evaluator(config, CaptureCount);

        let mv = searcher.best_move(&state).unwrap();
        assert_eq!(apply(&state, mv).captured(Side::First), 1);
        assert_eq!(searcher.stats().best_score, Some(-1.0));
    }

    #[test]
    fn test_no_moves_returns_none() {
        // Second has no pieces and the hole is boxed in
        let state = state(
            "Hx...
             x....
             .....
             .....
             .....",
            Side::Second,
        );
        let mut searcher = Searcher::new(SearchConfig::default());

        assert_eq!(searcher.best_move(&state), None);
        assert_eq!(searcher.play(&state), state);
        assert_eq!(searcher.stats().root_moves, 0);
    }

    #[test]
    fn test_unshuffled_tie_goes_to_first_enumerated() {
        let state = GameState::new_game();
        let config = SearchConfig::default().with_depth(1).with_shuffle(false);
        let mut searcher = Searcher::with_evaluator(config, CaptureCount);

        // 8 up is a self-drop scoring +1; 8 down is the first move at 0
        assert_eq!(searcher.best_move(&state), Some(Move::new(8, Direction::Down)));
    }

    #[test]
    fn test_restored_stream_repeats_choices() {
        let config = SearchConfig::default().with_depth(1).with_seed(11);
        let mut searcher = Searcher::new(config.clone());
        let state = GameState::new_game();

        searcher.best_move(&state);
        let saved = searcher.rng_state();
        assert_eq!(saved.fork_counter, 1);

        let next: Vec<_> = (0..4).map(|_| searcher.best_move(&state)).collect();

        let mut resumed = Searcher::new(config);
        resumed.restore_rng(&saved);
        let again: Vec<_> = (0..4).map(|_| resumed.best_move(&state)).collect();
        assert_eq!(next, again);
    }

    #[test]
    fn test_one_shot_matches_searcher() {
        let state = GameState::new_game();
        let config = SearchConfig::default().with_depth(2).with_seed(9);

        assert_eq!(best_move(&state, 2, 9), Searcher::new(config).best_move(&state));
    }
}
