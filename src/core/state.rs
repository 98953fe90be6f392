//! Game state: board plus the derived caches the rules need.
//!
//! `GameState` is a value. The rules layer never mutates a state that a
//! caller can still see: every move produces a fresh state and the input is
//! left untouched.
//!
//! ## Cached data
//!
//! Alongside the board the state keeps, per side, the list of indices that
//! hold that side's pieces, and the index of the hole. Both are pure caches
//! of the board and are re-checked against it in debug builds after every
//! change.
//!
//! ## Repetition
//!
//! Only the board immediately before the current one is kept. A move may
//! not recreate it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::{Board, Cell, CENTER};
use super::side::{Side, SideMap};
use crate::rules::SetupError;

/// Captures needed to win.
pub const WINNING_CAPTURES: u8 = 2;

/// Starting indices of First's pieces (interior row 0).
pub const FIRST_START: [usize; 5] = [8, 9, 10, 11, 12];

/// Starting indices of Second's pieces (interior row 4).
pub const SECOND_START: [usize; 5] = [36, 37, 38, 39, 40];

/// Piece index cache for one side. Never more than five entries.
pub type PieceList = SmallVec<[usize; 5]>;

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    pieces: SideMap<PieceList>,
    hole: usize,
    captured: SideMap<u8>,
    to_move: Side,
    prev_board: Option<Board>,
}

impl GameState {
    /// The fixed starting position. First moves first.
    #[must_use]
    pub fn new_game() -> Self {
        let mut board = Board::empty();
        for i in FIRST_START {
            board.set(i, Cell::Piece(Side::First));
        }
        for i in SECOND_START {
            board.set(i, Cell::Piece(Side::Second));
        }
        board.set(CENTER, Cell::Hole);

        let state = Self {
            board,
            pieces: SideMap::new(
                PieceList::from_slice(&FIRST_START),
                PieceList::from_slice(&SECOND_START),
            ),
            hole: CENTER,
            captured: SideMap::default(),
            to_move: Side::First,
            prev_board: None,
        };
        state.debug_check();
        state
    }

    /// Build a state from an arbitrary interior position.
    ///
    /// Captures start at zero and there is no previous board.
    pub fn from_board(board: Board, to_move: Side) -> Result<Self, SetupError> {
        let holes: SmallVec<[usize; 2]> = board.holes().collect();
        let hole = match holes.as_slice() {
            [hole] => *hole,
            _ => return Err(SetupError::HoleCount(holes.len())),
        };

        let state = Self {
            pieces: SideMap::from_fn(|side| board.pieces_of(side).collect()),
            board,
            hole,
            captured: SideMap::default(),
            to_move,
            prev_board: None,
        };
        state.debug_check();
        Ok(state)
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell at `index`.
    #[must_use]
    pub fn cell(&self, index: usize) -> Cell {
        self.board[index]
    }

    /// Indices of a side's pieces.
    #[must_use]
    pub fn pieces(&self, side: Side) -> &[usize] {
        &self.pieces[side]
    }

    #[must_use]
    pub fn hole(&self) -> usize {
        self.hole
    }

    /// Number of opposing pieces a side has been credited with.
    #[must_use]
    pub fn captured(&self, side: Side) -> u8 {
        self.captured[side]
    }

    #[must_use]
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// The board before the last move, if any move has been made.
    #[must_use]
    pub fn prev_board(&self) -> Option<&Board> {
        self.prev_board.as_ref()
    }

    /// The first side to reach the winning capture count.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        Side::ALL
            .into_iter()
            .find(|&side| self.captured[side] >= WINNING_CAPTURES)
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some()
    }

    // === Mutation (rules layer only) ===

    /// Move whatever is at `from` into the empty cell `to`.
    pub(crate) fn slide(&mut self, from: usize, to: usize) {
        let cell = self.board[from];
        debug_assert!(cell.is_movable(), "slide from empty cell {from}");
        debug_assert_eq!(self.board[to], Cell::Empty, "slide into occupied cell {to}");

        self.board.set(to, cell);
        self.board.set(from, Cell::Empty);
        match cell {
            Cell::Piece(side) => {
                if let Some(slot) = self.pieces[side].iter_mut().find(|i| **i == from) {
                    *slot = to;
                }
            }
            Cell::Hole => self.hole = to,
            Cell::Empty => {}
        }
    }

    /// Remove the piece at `index` without crediting anyone.
    pub(crate) fn remove_piece(&mut self, index: usize) -> Option<Side> {
        let side = self.board[index].side()?;
        self.pieces[side].retain(|i| *i != index);
        self.board.set(index, Cell::Empty);
        Some(side)
    }

    pub(crate) fn credit(&mut self, side: Side) {
        self.captured[side] += 1;
    }

    /// Finish a move: remember the pre-move board and pass the turn.
    pub(crate) fn commit(&mut self, before: Board) {
        self.prev_board = Some(before);
        self.to_move = self.to_move.opponent();
        self.debug_check();
    }

    // === Invariants ===

    /// Check cache consistency against the board.
    ///
    /// Returns a description of the first violation found.
    pub fn check_invariants(&self) -> Result<(), String> {
        for side in Side::ALL {
            let mut cached: SmallVec<[usize; 5]> = self.pieces[side].clone();
            cached.sort_unstable();
            let actual: SmallVec<[usize; 5]> = self.board.pieces_of(side).collect();
            if cached != actual {
                return Err(format!(
                    "{side} cache {:?} does not match board {:?}",
                    self.pieces[side], actual
                ));
            }
            if cached.iter().any(|&i| crate::core::board::is_ring(i)) {
                return Err(format!("{side} piece on the ring"));
            }
        }

        let holes: SmallVec<[usize; 2]> = self.board.holes().collect();
        if holes.as_slice() != [self.hole] {
            return Err(format!("hole cache {} does not match board {:?}", self.hole, holes));
        }
        Ok(())
    }

    pub(crate) fn debug_check(&self) {
        if cfg!(debug_assertions) {
            if let Err(violation) = self.check_invariants() {
                panic!("corrupt game state: {violation}");
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}
