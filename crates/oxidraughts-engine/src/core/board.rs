use std::{fmt, str::FromStr};

use arrayvec::ArrayVec;

use super::{
    piece::{Piece, PieceKind, Side},
    position::{BOARD_SIZE, Position},
};

/// Number of dark squares, which bounds the number of pieces on the board.
pub const PLAYABLE_SQUARES: usize = 32;

/// Number of pieces each side starts with.
pub const PIECES_PER_SIDE: usize = 12;

const SIZE: usize = BOARD_SIZE as usize;

/// Pieces of one side together with their squares, in board scan order.
pub type PlacedPieces = ArrayVec<(Position, Piece), PLAYABLE_SQUARES>;

/// The 8x8 game board.
///
/// `Board` is a plain value: move generation never mutates a board that is
/// still in use but clones it and edits the copy. Two boards compare equal when
/// every cell holds the same piece.
///
/// # Diagram Format
///
/// [`Board`] implements [`Display`](fmt::Display) and [`FromStr`] using an
/// 8-line diagram, row 7 first. Each line has 8 cells: `l`/`L` for a light
/// pawn/king, `d`/`D` for a dark pawn/king and `.` for an empty square.
///
/// # Example
///
/// ```
/// use oxidraughts_engine::{Board, Position, Side};
///
/// let board = Board::INITIAL;
/// assert_eq!(board.count(Side::Light), 12);
/// assert_eq!(board.count(Side::Dark), 12);
/// assert!(board.is_free(Position::new(3, 3)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; SIZE]; SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl Board {
    pub const EMPTY: Self = Self {
        cells: [[None; SIZE]; SIZE],
    };

    /// Standard starting position: 12 light pawns on rows 0-2 and 12 dark
    /// pawns on rows 5-7, all on dark squares.
    pub const INITIAL: Self = {
        let mut cells = [[None; SIZE]; SIZE];
        let mut row = 0;
        while row < 3 {
            let mut col = row % 2;
            while col < SIZE {
                cells[row][col] = Some(Piece::pawn(Side::Light));
                cells[SIZE - 1 - row][SIZE - 1 - col] = Some(Piece::pawn(Side::Dark));
                col += 2;
            }
            row += 1;
        }
        Self { cells }
    };

    /// Builds a board holding exactly the given pieces.
    ///
    /// Intended for tests and analysis tools; games always start from
    /// [`Board::INITIAL`].
    ///
    /// # Panics
    ///
    /// Panics if a position is not a valid dark square.
    #[must_use]
    pub fn from_pieces<I>(pieces: I) -> Self
    where
        I: IntoIterator<Item = (Position, Piece)>,
    {
        let mut board = Self::EMPTY;
        for (pos, piece) in pieces {
            assert!(pos.is_valid(), "piece placed on invalid square {pos}");
            board.set(pos, Some(piece));
        }
        board
    }

    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        let (row, col) = pos.index();
        self.cells[row][col]
    }

    #[must_use]
    pub fn is_free(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        let (row, col) = pos.index();
        self.cells[row][col] = piece;
    }

    pub fn remove(&mut self, pos: Position) -> Option<Piece> {
        let (row, col) = pos.index();
        self.cells[row][col].take()
    }

    /// Moves whatever stands on `from` to `to`, leaving `from` empty.
    pub fn move_piece(&mut self, from: Position, to: Position) {
        let piece = self.remove(from);
        self.set(to, piece);
    }

    /// Turns the pawn on `pos` into a king of the same side.
    pub fn crown(&mut self, pos: Position) {
        if let Some(piece) = self.get(pos) {
            self.set(pos, Some(Piece::king(piece.side())));
        }
    }

    /// Returns the pieces of `side` in board scan order.
    #[must_use]
    pub fn pieces(&self, side: Side) -> PlacedPieces {
        Position::all_valid()
            .filter_map(|pos| self.get(pos).map(|piece| (pos, piece)))
            .filter(|(_, piece)| piece.side() == side)
            .collect()
    }

    #[must_use]
    pub fn count(&self, side: Side) -> usize {
        self.occupied().filter(|(_, p)| p.side() == side).count()
    }

    #[must_use]
    pub fn count_kind(&self, side: Side, kind: PieceKind) -> usize {
        self.occupied()
            .filter(|(_, p)| p.side() == side && p.kind() == kind)
            .count()
    }

    /// Number of pieces of both sides.
    #[must_use]
    pub fn total_pieces(&self) -> usize {
        self.occupied().count()
    }

    /// Iterates over occupied squares in board scan order.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all_valid().filter_map(|pos| self.get(pos).map(|piece| (pos, piece)))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter().rev() {
            for cell in row {
                let c = cell.map_or('.', Piece::as_char);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    #[display("expected {SIZE} rows, got {_0}")]
    RowCount(#[error(not(source))] usize),
    #[display("row {row}: expected {SIZE} cells, got {len}")]
    RowLength { row: usize, len: usize },
    #[display("row {row}, column {col}: unknown cell '{cell}'")]
    UnknownCell { row: usize, col: usize, cell: char },
    #[display("row {row}, column {col}: piece on a light square")]
    LightSquare { row: usize, col: usize },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>();
        if lines.len() != SIZE {
            return Err(ParseBoardError::RowCount(lines.len()));
        }

        let mut board = Self::EMPTY;
        for (i, line) in lines.into_iter().enumerate() {
            let row = SIZE - 1 - i;
            let cells = line.chars().collect::<Vec<_>>();
            if cells.len() != SIZE {
                return Err(ParseBoardError::RowLength {
                    row,
                    len: cells.len(),
                });
            }
            for (col, cell) in cells.into_iter().enumerate() {
                if cell == '.' {
                    continue;
                }
                let piece =
                    Piece::from_char(cell).ok_or(ParseBoardError::UnknownCell { row, col, cell })?;
                if row % 2 != col % 2 {
                    return Err(ParseBoardError::LightSquare { row, col });
                }
                board.cells[row][col] = Some(piece);
            }
        }
        Ok(board)
    }
}
