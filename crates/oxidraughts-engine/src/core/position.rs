use std::{fmt, iter};

use serde::{Deserialize, Serialize};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i8 = 8;

/// Diagonal directions in enumeration order.
///
/// Move generation walks directions in this order, so it defines the order of
/// the generated candidates.
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// A square on the board, addressed by row and column.
///
/// Only dark squares take part in the game: a position is valid when both
/// coordinates are inside the board and `row` and `col` have the same parity.
///
/// Positions order row-major, which is also the board scan order.
///
/// # Example
///
/// ```
/// use oxidraughts_engine::Position;
///
/// assert!(Position::new(0, 0).is_valid());
/// assert!(Position::new(3, 5).is_valid());
/// assert!(!Position::new(0, 1).is_valid());
/// assert!(!Position::new(8, 0).is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    row: i8,
    col: i8,
}

impl Position {
    #[must_use]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[must_use]
    pub const fn row(self) -> i8 {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// Returns `true` when the position lies inside the board.
    #[must_use]
    pub const fn is_in_board(self) -> bool {
        0 <= self.row && self.row < BOARD_SIZE && 0 <= self.col && self.col < BOARD_SIZE
    }

    /// Returns `true` when the position is an in-board dark square.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.is_in_board() && self.row.rem_euclid(2) == self.col.rem_euclid(2)
    }

    /// Returns the position shifted by `(d_row, d_col)`, or `None` when it
    /// leaves the board.
    #[must_use]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let moved = Self::new(self.row + d_row, self.col + d_col);
        if moved.is_in_board() {
            Some(moved)
        } else {
            None
        }
    }

    /// Walks from this position (exclusive) along a direction until the edge.
    pub fn ray(self, (d_row, d_col): (i8, i8)) -> impl Iterator<Item = Self> {
        iter::successors(self.offset(d_row, d_col), move |p| p.offset(d_row, d_col))
    }

    /// Returns `true` when the square lies on the outer frame of the board.
    #[must_use]
    pub const fn is_on_edge(self) -> bool {
        self.row == 0 || self.row == BOARD_SIZE - 1 || self.col == 0 || self.col == BOARD_SIZE - 1
    }

    /// Iterates over all dark squares in board scan order.
    pub fn all_valid() -> impl Iterator<Item = Self> {
        (0..BOARD_SIZE)
            .flat_map(|row| (row % 2..BOARD_SIZE).step_by(2).map(move |col| Self::new(row, col)))
    }

    #[expect(clippy::cast_sign_loss)]
    pub(crate) const fn index(self) -> (usize, usize) {
        debug_assert!(self.is_in_board());
        (self.row as usize, self.col as usize)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
