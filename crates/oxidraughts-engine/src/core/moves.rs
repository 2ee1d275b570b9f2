use std::fmt;

use arrayvec::ArrayVec;

use super::{board::Board, position::Position};

/// Longest possible path: a start square plus one landing per captured piece.
pub const MAX_PATH_LEN: usize = super::board::PIECES_PER_SIDE + 1;

/// Path of a single move, starting with the origin square.
///
/// A path of two squares is a simple step; anything longer is a capture chain
/// where every square after the first is a landing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    path: ArrayVec<Position, MAX_PATH_LEN>,
}

impl Move {
    #[must_use]
    pub fn new(from: Position) -> Self {
        let mut path = ArrayVec::new();
        path.push(from);
        Self { path }
    }

    /// Builds a move from a full path.
    ///
    /// # Panics
    ///
    /// Panics if `path` is empty or longer than [`MAX_PATH_LEN`].
    #[must_use]
    pub fn from_path<I>(path: I) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let path = path.into_iter().collect::<ArrayVec<_, MAX_PATH_LEN>>();
        assert!(!path.is_empty(), "move path must not be empty");
        Self { path }
    }

    /// Returns a copy of this move extended by one more square.
    #[must_use]
    pub fn extended(&self, to: Position) -> Self {
        let mut path = self.path.clone();
        path.push(to);
        Self { path }
    }

    #[must_use]
    pub fn from(&self) -> Position {
        self.path[0]
    }

    #[must_use]
    pub fn to(&self) -> Position {
        self.path[self.path.len() - 1]
    }

    #[must_use]
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.path.len() > 2
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pos) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{pos}")?;
        }
        Ok(())
    }
}

/// A legal move together with the board it produces.
///
/// The board already reflects removed pieces and promotion. Match rules
/// compare candidates by both the board and the move.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    board: Board,
    mv: Move,
}

impl Candidate {
    #[must_use]
    pub fn new(board: Board, mv: Move) -> Self {
        Self { board, mv }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn mv(&self) -> &Move {
        &self.mv
    }

    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }
}
