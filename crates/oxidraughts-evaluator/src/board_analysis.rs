use std::cell::OnceCell;

use oxidraughts_engine::{Board, Candidate, PlacedPieces, Side, legal_moves};

/// Lazily computed facts about one board, shared by all metrics evaluated on
/// it.
///
/// Legal moves are the expensive part; they are generated at most once per
/// side no matter how many metrics ask for them.
#[derive(Debug)]
pub struct BoardAnalysis<'a> {
    board: &'a Board,
    pieces: [OnceCell<PlacedPieces>; 2],
    legal_moves: [OnceCell<Vec<Candidate>>; 2],
}

const fn slot(side: Side) -> usize {
    match side {
        Side::Light => 0,
        Side::Dark => 1,
    }
}

impl<'a> BoardAnalysis<'a> {
    #[must_use]
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            pieces: [OnceCell::new(), OnceCell::new()],
            legal_moves: [OnceCell::new(), OnceCell::new()],
        }
    }

    #[must_use]
    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// Pieces of `side` in board scan order.
    #[must_use]
    pub fn pieces(&self, side: Side) -> &PlacedPieces {
        self.pieces[slot(side)].get_or_init(|| self.board.pieces(side))
    }

    #[must_use]
    pub fn legal_moves(&self, side: Side) -> &[Candidate] {
        self.legal_moves[slot(side)].get_or_init(|| legal_moves(self.board, side))
    }
}
