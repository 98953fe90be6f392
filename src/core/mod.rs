//! Core types: sides, board layout, moves, game state, RNG.

pub mod action;
pub mod board;
pub mod rng;
pub mod side;
pub mod state;

pub use action::{Move, MoveRecord};
pub use board::{Board, Cell, Direction, DirectionSet, CELL_COUNT, CENTER, SIZE, VISIBLE};
pub use rng::{GameRng, GameRngState};
pub use side::{Side, SideMap};
pub use state::{GameState, PieceList, WINNING_CAPTURES};
