//! Chain scanning.
//!
//! Walks from a starting cell in one direction, collecting every occupied
//! cell met along the way until something stops the walk. The result says
//! what is being pushed and what the push runs into; validation, step
//! planning and animation all read the same scan.

use smallvec::SmallVec;

use crate::core::board::{is_ring, step};
use crate::core::{Cell, Direction, GameState};

/// Indices of a pushed chain, starting with the moving cell.
pub type Chain = SmallVec<[usize; 8]>;

/// What stopped a chain scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Terminator {
    /// The next step leaves the grid.
    OffBoard,
    /// The next cell is on the capture ring.
    Ring { at: usize },
    /// The next cell is empty.
    Empty { at: usize },
    /// The next cell is the hole.
    HoleFall { at: usize },
}

impl Terminator {
    /// True for terminators that capture the chain's last piece.
    #[must_use]
    pub const fn captures(self) -> bool {
        !matches!(self, Terminator::Empty { .. })
    }
}

/// Result of a chain scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainScan {
    /// Ordered chain, `chain[0]` is the start index. Never empty.
    pub chain: Chain,
    pub terminator: Terminator,
}

impl ChainScan {
    /// The last cell of the chain.
    #[must_use]
    pub fn tail(&self) -> usize {
        self.chain[self.chain.len() - 1]
    }
}

/// Scan from `start` in `direction`.
///
/// Never touches the state. `start` is always included even if it is empty;
/// callers decide whether that makes sense.
#[must_use]
pub fn scan_chain(state: &GameState, start: usize, direction: Direction) -> ChainScan {
    let mut chain = Chain::new();
    chain.push(start);

    let mut current = start;
    let terminator = loop {
        let Some(next) = step(current, direction) else {
            break Terminator::OffBoard;
        };
        if is_ring(next) {
            break Terminator::Ring { at: next };
        }
        match state.cell(next) {
            Cell::Empty => break Terminator::Empty { at: next },
            Cell::Hole => break Terminator::HoleFall { at: next },
            Cell::Piece(_) => {
                chain.push(next);
                current = next;
            }
        }
    };

    ChainScan { chain, terminator }
}
