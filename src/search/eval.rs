//! Static position evaluation.
//!
//! Scores are from Second's point of view: positive favors Second, negative
//! favors First. The searcher maximizes for Second and minimizes for First.

use crate::core::board::{manhattan, CENTER};
use crate::core::{GameState, Side};
use crate::rules::count_legal_moves;

use super::config::EvalWeights;

/// Largest Manhattan distance from the center that the hole term rewards.
const HOLE_REACH: f64 = 8.0;

/// Position evaluator used at search leaves.
pub trait Evaluator {
    /// Score a position, positive favoring Second.
    fn evaluate(&self, state: &GameState) -> f64;
}

/// Linear heuristic over captures, material, mobility and hole placement.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeuristicEvaluator {
    pub weights: EvalWeights,
}

impl HeuristicEvaluator {
    #[must_use]
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }
}

fn diff(second: usize, first: usize) -> f64 {
    second as f64 - first as f64
}

impl Evaluator for HeuristicEvaluator {
    fn evaluate(&self, state: &GameState) -> f64 {
        let w = &self.weights;

        let captures = diff(
            state.captured(Side::Second).into(),
            state.captured(Side::First).into(),
        );
        let material = diff(
            state.pieces(Side::Second).len(),
            state.pieces(Side::First).len(),
        );
        let mobility = diff(
            count_legal_moves(state, Side::Second),
            count_legal_moves(state, Side::First),
        );
        let hole = HOLE_REACH - manhattan(state.hole(), CENTER) as f64;

        w.captures * captures + w.material * material + w.mobility * mobility + w.hole_center * hole
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Direction, Move};
    use crate::rules::apply;

    #[test]
    fn test_new_game_is_balanced() {
        let eval = HeuristicEvaluator::default();
        let state = GameState::new_game();

        // symmetric position, hole centered: only the hole term remains
        assert_eq!(eval.evaluate(&state), 0.5 * 8.0);
    }

    #[test]
    fn test_capture_dominates() {
        let eval = HeuristicEvaluator::default();
        let state = GameState::new_game();

        // First pushes its own row off the right edge
        let next = apply(&state, Move::new(8, Direction::Right));
        assert_eq!(next.captured(Side::Second), 1);
        assert!(eval.evaluate(&next) > 300.0);
    }

    #[test]
    fn test_hole_term() {
        let eval = HeuristicEvaluator::new(EvalWeights {
            captures: 0.0,
            material: 0.0,
            mobility: 0.0,
            hole_center: 1.0,
        });
        let corner = Board::from_interior(
            "H....
             .....
             .....
             .....
             .....",
        )
        .unwrap();
        let state = GameState::from_board(corner, Side::First).unwrap();

        assert_eq!(eval.evaluate(&state), 4.0);
    }
}
