//! Back-row formation metrics.
//!
//! A [`Shape`] names a set of squares for each side and a pattern that should
//! hold on them. While only one side has its squares filled, that side gets
//! the point. Once both are filled, the point goes to the side whose exact
//! pattern holds. The result is `ratio(1, own, other)`, so 0, 50 or 100.

use oxidraughts_engine::{Board, Piece, PieceKind, Position, Side};

use super::ratio;

/// One square of a pattern: the side that must stand there and, optionally,
/// the piece kind.
#[derive(Debug, Clone, Copy)]
pub struct PatternCell {
    pos: Position,
    side: Side,
    kind: Option<PieceKind>,
}

impl PatternCell {
    const fn any(row: i8, col: i8, side: Side) -> Self {
        Self {
            pos: Position::new(row, col),
            side,
            kind: None,
        }
    }

    const fn exact(row: i8, col: i8, piece: Piece) -> Self {
        Self {
            pos: Position::new(row, col),
            side: piece.side(),
            kind: Some(piece.kind()),
        }
    }

    fn holds(self, board: &Board) -> bool {
        board.get(self.pos).is_some_and(|p| {
            p.side() == self.side && self.kind.is_none_or(|kind| p.kind() == kind)
        })
    }
}

/// Squares and pattern of one side of a [`Shape`].
#[derive(Debug, Clone, Copy)]
pub struct ShapeSide {
    area: &'static [Position],
    pattern: &'static [PatternCell],
}

impl ShapeSide {
    fn is_filled(&self, board: &Board) -> bool {
        self.area.iter().all(|&pos| !board.is_free(pos))
    }

    fn holds(&self, board: &Board) -> bool {
        self.pattern.iter().all(|cell| cell.holds(board))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Shape {
    light: ShapeSide,
    dark: ShapeSide,
}

impl Shape {
    #[must_use]
    pub fn evaluate(&self, board: &Board, side: Side) -> i32 {
        let light_filled = self.light.is_filled(board);
        let dark_filled = self.dark.is_filled(board);
        let (light, dark) = if light_filled && dark_filled {
            (self.light.holds(board), self.dark.holds(board))
        } else {
            (light_filled, dark_filled)
        };
        let (own, other) = match side {
            Side::Light => (light, dark),
            Side::Dark => (dark, light),
        };
        ratio(1, i32::from(own), i32::from(other))
    }
}

const fn pos(row: i8, col: i8) -> Position {
    Position::new(row, col)
}

const LIGHT_PAWN: Piece = Piece::pawn(Side::Light);
const DARK_PAWN: Piece = Piece::pawn(Side::Dark);

pub const TRIANGLE: Shape = Shape {
    light: ShapeSide {
        area: &[pos(0, 4), pos(0, 6), pos(1, 5)],
        pattern: &[
            PatternCell::any(0, 4, Side::Light),
            PatternCell::any(0, 6, Side::Light),
            PatternCell::any(1, 5, Side::Light),
        ],
    },
    dark: ShapeSide {
        area: &[pos(7, 1), pos(7, 3), pos(6, 2)],
        pattern: &[
            PatternCell::any(7, 1, Side::Dark),
            PatternCell::any(7, 3, Side::Dark),
            PatternCell::any(6, 2, Side::Dark),
        ],
    },
};

pub const OREO: Shape = Shape {
    light: ShapeSide {
        area: &[pos(0, 2), pos(0, 4), pos(1, 3)],
        pattern: &[
            PatternCell::any(0, 2, Side::Light),
            PatternCell::any(0, 4, Side::Light),
            PatternCell::any(1, 3, Side::Light),
        ],
    },
    dark: ShapeSide {
        area: &[pos(7, 3), pos(7, 5), pos(6, 4)],
        pattern: &[
            PatternCell::any(7, 3, Side::Dark),
            PatternCell::any(7, 5, Side::Dark),
            PatternCell::any(6, 4, Side::Dark),
        ],
    },
};

pub const BRIDGE: Shape = Shape {
    light: ShapeSide {
        area: &[pos(0, 2), pos(0, 6)],
        pattern: &[
            PatternCell::any(0, 2, Side::Light),
            PatternCell::any(0, 6, Side::Light),
        ],
    },
    dark: ShapeSide {
        area: &[pos(7, 1), pos(7, 5)],
        pattern: &[
            PatternCell::any(7, 1, Side::Dark),
            PatternCell::any(7, 5, Side::Dark),
        ],
    },
};

pub const CORNER: Shape = Shape {
    light: ShapeSide {
        area: &[pos(0, 0)],
        pattern: &[PatternCell::exact(0, 0, LIGHT_PAWN)],
    },
    dark: ShapeSide {
        area: &[pos(7, 7)],
        pattern: &[PatternCell::exact(7, 7, DARK_PAWN)],
    },
};

/// A king sitting in the opponent's double corner. The occupancy squares
/// are the home corners, not the squares the pattern checks.
pub const KING_CORNER: Shape = Shape {
    light: ShapeSide {
        area: &[pos(0, 0)],
        pattern: &[PatternCell::exact(7, 7, Piece::king(Side::Light))],
    },
    dark: ShapeSide {
        area: &[pos(7, 7)],
        pattern: &[PatternCell::exact(0, 0, Piece::king(Side::Dark))],
    },
};

/// An own back-row pawn pinning an enemy pawn against the side edge.
pub const DOG: Shape = Shape {
    light: ShapeSide {
        area: &[pos(1, 7), pos(0, 6)],
        pattern: &[
            PatternCell::exact(0, 6, LIGHT_PAWN),
            PatternCell::exact(1, 7, DARK_PAWN),
        ],
    },
    dark: ShapeSide {
        area: &[pos(7, 1), pos(6, 0)],
        pattern: &[
            PatternCell::exact(6, 0, LIGHT_PAWN),
            PatternCell::exact(7, 1, DARK_PAWN),
        ],
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    fn place(board: &mut Board, row: i8, col: i8, c: char) {
        board.set(Position::new(row, col), Piece::from_char(c));
    }

    fn values(shape: &Shape, board: &Board) -> (i32, i32) {
        (
            shape.evaluate(board, Side::Light),
            shape.evaluate(board, Side::Dark),
        )
    }

    fn background() -> Board {
        let mut board = Board::EMPTY;
        place(&mut board, 5, 5, 'L');
        place(&mut board, 4, 4, 'D');
        board
    }

    #[test]
    fn test_triangle() {
        let mut board = background();
        assert_eq!(values(&TRIANGLE, &board), (50, 50));

        place(&mut board, 0, 4, 'L');
        place(&mut board, 0, 6, 'l');
        place(&mut board, 1, 5, 'L');
        place(&mut board, 7, 1, 'D');
        place(&mut board, 7, 3, 'D');
        place(&mut board, 6, 2, 'd');
        assert_eq!(values(&TRIANGLE, &board), (50, 50));

        place(&mut board, 6, 2, 'L');
        assert_eq!(values(&TRIANGLE, &board), (100, 0));

        place(&mut board, 0, 4, 'D');
        assert_eq!(values(&TRIANGLE, &board), (50, 50));
    }

    #[test]
    fn test_only_one_side_filled() {
        let mut board = background();
        place(&mut board, 0, 2, 'd');
        place(&mut board, 0, 4, 'd');
        place(&mut board, 1, 3, 'd');
        assert_eq!(values(&OREO, &board), (100, 0));
    }

    #[test]
    fn test_oreo() {
        let mut board = background();
        place(&mut board, 0, 2, 'L');
        place(&mut board, 0, 4, 'l');
        place(&mut board, 1, 3, 'L');
        place(&mut board, 7, 3, 'D');
        place(&mut board, 7, 5, 'D');
        place(&mut board, 6, 4, 'd');
        assert_eq!(values(&OREO, &board), (50, 50));

        place(&mut board, 7, 5, 'L');
        assert_eq!(values(&OREO, &board), (100, 0));

        place(&mut board, 0, 4, 'D');
        assert_eq!(values(&OREO, &board), (50, 50));
    }

    #[test]
    fn test_bridge() {
        let mut board = background();
        assert_eq!(values(&BRIDGE, &board), (50, 50));

        place(&mut board, 0, 2, 'L');
        place(&mut board, 0, 6, 'l');
        place(&mut board, 7, 1, 'D');
        place(&mut board, 7, 5, 'D');
        assert_eq!(values(&BRIDGE, &board), (50, 50));

        place(&mut board, 7, 5, 'L');
        assert_eq!(values(&BRIDGE, &board), (100, 0));

        place(&mut board, 0, 6, 'D');
        assert_eq!(values(&BRIDGE, &board), (50, 50));
    }

    #[test]
    fn test_corner() {
        let mut board = background();
        assert_eq!(values(&CORNER, &board), (50, 50));

        place(&mut board, 0, 0, 'l');
        place(&mut board, 7, 7, 'd');
        assert_eq!(values(&CORNER, &board), (50, 50));

        place(&mut board, 7, 7, 'D');
        assert_eq!(values(&CORNER, &board), (100, 0));

        place(&mut board, 0, 0, 'L');
        assert_eq!(values(&CORNER, &board), (50, 50));
    }

    #[test]
    fn test_king_corner() {
        let mut board = background();
        assert_eq!(values(&KING_CORNER, &board), (50, 50));

        place(&mut board, 0, 0, 'D');
        place(&mut board, 7, 7, 'L');
        assert_eq!(values(&KING_CORNER, &board), (50, 50));

        place(&mut board, 7, 7, 'l');
        assert_eq!(values(&KING_CORNER, &board), (0, 100));

        place(&mut board, 0, 0, 'd');
        assert_eq!(values(&KING_CORNER, &board), (50, 50));
    }

    #[test]
    fn test_dog() {
        let mut board = background();
        assert_eq!(values(&DOG, &board), (50, 50));

        place(&mut board, 0, 6, 'l');
        place(&mut board, 1, 7, 'd');
        place(&mut board, 7, 1, 'd');
        place(&mut board, 6, 0, 'l');
        assert_eq!(values(&DOG, &board), (50, 50));

        place(&mut board, 0, 6, 'd');
        assert_eq!(values(&DOG, &board), (0, 100));

        place(&mut board, 7, 1, 'D');
        assert_eq!(values(&DOG, &board), (50, 50));
    }
}
