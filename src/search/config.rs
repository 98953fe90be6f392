//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Weights of the heuristic evaluation terms.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvalWeights {
    /// Per capture of difference. Dominates near the end of a game.
    pub captures: f64,

    /// Per piece of material difference.
    pub material: f64,

    /// Per legal move of mobility difference.
    pub mobility: f64,

    /// Per step the hole is closer to the center than the far corner.
    pub hole_center: f64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            captures: 200.0,
            material: 120.0,
            mobility: 3.5,
            hole_center: 0.5,
        }
    }
}

/// Alpha-beta search configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies to search. Depth 0 picks by static evaluation of the root
    /// children only.
    pub depth: u32,

    /// Seed for root move shuffling.
    /// Same seed produces the same choice among equally scored moves.
    pub seed: u64,

    /// Shuffle root moves before searching. When false, ties go to the
    /// first move in enumeration order.
    pub shuffle_moves: bool,

    /// Evaluation weights.
    pub weights: EvalWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            seed: 42,
            shuffle_moves: true,
            weights: EvalWeights::default(),
        }
    }
}

impl SearchConfig {
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle_moves = shuffle;
        self
    }

    pub fn with_weights(mut self, weights: EvalWeights) -> Self {
        self.weights = weights;
        self
    }
}
