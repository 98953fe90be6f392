//! Board layout: cells, directions, and the ring-bounded grid.
//!
//! ## Layout
//!
//! The board is a `SIZE` x `SIZE` grid addressed by a single linear index
//! (`row * SIZE + col`). The centered `VISIBLE` x `VISIBLE` sub-grid is the
//! playable interior; every other cell belongs to the capture ring. Pieces
//! never rest on the ring.
//!
//! ```text
//!   . . . . . . .      ring
//!   . x x x x x .      First starts on interior row 0
//!   . . . . . . .
//!   . . . H . . .      hole at the exact center
//!   . . . . . . .
//!   . o o o o o .      Second starts on interior row 4
//!   . . . . . . .
//! ```
//!
//! ## Diagrams
//!
//! `Board::from_interior` reads a 5x5 interior diagram using `x` for First,
//! `o` for Second, `H` for the hole and `.` for empty cells. `Display`
//! renders the interior in the same notation.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::side::Side;
use crate::rules::SetupError;

/// Side length of the full grid, ring included.
pub const SIZE: usize = 7;

/// Side length of the playable interior.
pub const VISIBLE: usize = 5;

/// Number of cells in the full grid.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// Index of the exact center cell.
pub const CENTER: usize = CELL_COUNT / 2;

const OFFSET: usize = (SIZE - VISIBLE) / 2;

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Piece(Side),
    Hole,
}

impl Cell {
    /// The owning side, if this cell holds a piece.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Cell::Piece(side) => Some(side),
            _ => None,
        }
    }

    /// True for pieces and the hole, the two things that can move.
    #[must_use]
    pub const fn is_movable(self) -> bool {
        !matches!(self, Cell::Empty)
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Piece(Side::First) => 'x',
            Cell::Piece(Side::Second) => 'o',
            Cell::Hole => 'H',
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Cell::Empty),
            'x' => Some(Cell::Piece(Side::First)),
            'o' => Some(Cell::Piece(Side::Second)),
            'H' => Some(Cell::Hole),
            _ => None,
        }
    }
}

/// One of the four orthogonal directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in enumeration order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The reverse direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Direction::Up => 1,
            Direction::Down => 1 << 1,
            Direction::Left => 1 << 2,
            Direction::Right => 1 << 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// A set of directions packed into one byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectionSet(u8);

impl DirectionSet {
    /// The empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Add a direction.
    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    #[must_use]
    pub const fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate in `Direction::ALL` order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = Self::empty();
        for direction in iter {
            set.insert(direction);
        }
        set
    }
}

/// Row of a linear index.
#[must_use]
pub const fn row(index: usize) -> usize {
    index / SIZE
}

/// Column of a linear index.
#[must_use]
pub const fn col(index: usize) -> usize {
    index % SIZE
}

/// Linear index of a (row, col) pair.
#[must_use]
pub const fn index_of(row: usize, col: usize) -> usize {
    row * SIZE + col
}

/// One step from `index` in `direction`, or `None` when it leaves the grid.
///
/// Horizontal steps never wrap onto the neighbouring row.
#[must_use]
pub const fn step(index: usize, direction: Direction) -> Option<usize> {
    match direction {
        Direction::Left if col(index) == 0 => None,
        Direction::Left => Some(index - 1),
        Direction::Right if col(index) == SIZE - 1 => None,
        Direction::Right => Some(index + 1),
        Direction::Up if index < SIZE => None,
        Direction::Up => Some(index - SIZE),
        Direction::Down if index + SIZE >= CELL_COUNT => None,
        Direction::Down => Some(index + SIZE),
    }
}

/// True if `index` lies outside the playable interior.
#[must_use]
pub const fn is_ring(index: usize) -> bool {
    let (r, c) = (row(index), col(index));
    r < OFFSET || r >= OFFSET + VISIBLE || c < OFFSET || c >= OFFSET + VISIBLE
}

/// Manhattan distance between two cells.
#[must_use]
pub const fn manhattan(a: usize, b: usize) -> usize {
    row(a).abs_diff(row(b)) + col(a).abs_diff(col(b))
}

/// Iterate over the interior indices in row-major order.
pub fn interior() -> impl Iterator<Item = usize> {
    (OFFSET..OFFSET + VISIBLE)
        .flat_map(|r| (OFFSET..OFFSET + VISIBLE).map(move |c| index_of(r, c)))
}

/// The full grid of cells.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// A board with every cell empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Parse a 5x5 interior diagram.
    ///
    /// ```
    /// use ostle::core::{Board, Cell, Side, CENTER};
    ///
    /// let board = Board::from_interior(
    ///     "xxxxx
    ///      .....
    ///      ..H..
    ///      .....
    ///      ooooo",
    /// ).unwrap();
    ///
    /// assert_eq!(board[CENTER], Cell::Hole);
    /// assert_eq!(board[8], Cell::Piece(Side::First));
    /// ```
    pub fn from_interior(diagram: &str) -> Result<Self, SetupError> {
        let rows: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != VISIBLE || rows.iter().any(|r| r.chars().count() != VISIBLE) {
            return Err(SetupError::BadDimensions);
        }

        let mut board = Self::empty();
        for (r, line) in rows.iter().enumerate() {
            for (c, symbol) in line.chars().enumerate() {
                let cell = Cell::from_symbol(symbol).ok_or(SetupError::UnknownSymbol(symbol))?;
                board.cells[index_of(r + OFFSET, c + OFFSET)] = cell;
            }
        }
        Ok(board)
    }

    /// All cells in index order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    /// Indices holding pieces of `side`, in index order.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = usize> + '_ {
        self.indices_where(move |cell| cell == Cell::Piece(side))
    }

    /// Indices holding the hole.
    pub fn holes(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices_where(|cell| cell == Cell::Hole)
    }

    fn indices_where(&self, pred: impl Fn(Cell) -> bool + 'static) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| pred(**cell))
            .map(|(i, _)| i)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::ops::Index<usize> for Board {
    type Output = Cell;

    fn index(&self, index: usize) -> &Cell {
        &self.cells[index]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..VISIBLE {
            for c in 0..VISIBLE {
                write!(f, "{}", self.cells[index_of(r + OFFSET, c + OFFSET)].symbol())?;
            }
            if r + 1 < VISIBLE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board(")?;
        writeln!(f, "{self}")?;
        write!(f, ")")
    }
}

// serde only derives for arrays up to 32 elements, so go through a sequence.
impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.cells.iter())
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let cells: Vec<Cell> = Vec::deserialize(deserializer)?;
        let len = cells.len();
        let cells: [Cell; CELL_COUNT] = cells
            .try_into()
            .map_err(|_| D::Error::invalid_length(len, &"49 cells"))?;
        Ok(Self { cells })
    }
}
