//! Legal move enumeration.
//!
//! A side may move any of its own pieces or the shared hole. Candidates are
//! the side's piece indices followed by the hole, deduplicated, each tried
//! in all four directions.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{Direction, DirectionSet, GameState, Move, Side};

use super::apply::try_apply;
use super::validate::is_legal;

/// Legal directions per movable index.
///
/// Only indices with at least one legal direction are present.
pub type LegalMoves = FxHashMap<usize, DirectionSet>;

fn candidates(state: &GameState, side: Side) -> SmallVec<[usize; 6]> {
    let mut out: SmallVec<[usize; 6]> = SmallVec::new();
    for &index in state.pieces(side).iter().chain(std::iter::once(&state.hole())) {
        if !out.contains(&index) {
            out.push(index);
        }
    }
    out
}

fn legal_for(state: &GameState, side: Side) -> impl Iterator<Item = Move> + '_ {
    candidates(state, side).into_iter().flat_map(move |index| {
        Direction::ALL
            .into_iter()
            .map(move |direction| Move::new(index, direction))
            .filter(move |&mv| is_legal(state, mv))
    })
}

/// Legal directions for every index `side` may move.
#[must_use]
pub fn legal_moves(state: &GameState, side: Side) -> LegalMoves {
    let mut out = LegalMoves::default();
    for mv in legal_for(state, side) {
        out.entry(mv.index).or_default().insert(mv.direction);
    }
    out
}

/// Legal moves for `side` as a flat list.
///
/// Order is deterministic: pieces in cache order, then the hole, each in
/// `Direction::ALL` order.
#[must_use]
pub fn legal_move_list(state: &GameState, side: Side) -> Vec<Move> {
    legal_for(state, side).collect()
}

/// Number of legal moves for `side`, without collecting them.
#[must_use]
pub fn count_legal_moves(state: &GameState, side: Side) -> usize {
    legal_for(state, side).count()
}

/// Every legal move for the side to move, paired with the state it leads to.
///
/// Same order as `legal_move_list`. Each move is resolved once, which is
/// what the searcher needs when expanding a node.
pub fn successors(state: &GameState) -> impl Iterator<Item = (Move, GameState)> + '_ {
    candidates(state, state.to_move())
        .into_iter()
        .flat_map(move |index| {
            Direction::ALL
                .into_iter()
                .map(move |direction| Move::new(index, direction))
        })
        .filter_map(move |mv| try_apply(state, mv).ok().map(|next| (mv, next)))
}

/// Legal directions for a single index.
#[must_use]
pub fn legal_directions(state: &GameState, index: usize) -> DirectionSet {
    Direction::ALL
        .into_iter()
        .filter(|&direction| is_legal(state, Move::new(index, direction)))
        .collect()
}
