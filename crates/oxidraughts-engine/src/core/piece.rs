use serde::{Deserialize, Serialize};

use super::position::BOARD_SIZE;

/// One of the two players.
///
/// `Light` starts on rows 0-2 and advances toward row 7; `Dark` starts on
/// rows 5-7 and advances toward row 0. `Light` moves first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[display("light")]
    Light,
    #[display("dark")]
    Dark,
}

impl Side {
    pub const ALL: [Self; 2] = [Side::Light, Side::Dark];

    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Light => Side::Dark,
            Side::Dark => Side::Light,
        }
    }

    /// Row step of a pawn move for this side.
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Side::Light => 1,
            Side::Dark => -1,
        }
    }

    /// Row on which a pawn of this side becomes a king.
    #[must_use]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Side::Light => BOARD_SIZE - 1,
            Side::Dark => 0,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum PieceKind {
    Pawn,
    King,
}

/// A piece standing on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    kind: PieceKind,
    side: Side,
}

impl Piece {
    #[must_use]
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side }
    }

    #[must_use]
    pub const fn pawn(side: Side) -> Self {
        Self::new(PieceKind::Pawn, side)
    }

    #[must_use]
    pub const fn king(side: Side) -> Self {
        Self::new(PieceKind::King, side)
    }

    #[must_use]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub const fn side(self) -> Side {
        self.side
    }

    #[must_use]
    pub const fn is_pawn(self) -> bool {
        matches!(self.kind, PieceKind::Pawn)
    }

    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    /// Returns `true` if a pawn of this piece's side standing on `row` must be
    /// crowned. Kings never promote.
    #[must_use]
    pub const fn promotes_on(self, row: i8) -> bool {
        self.is_pawn() && row == self.side.promotion_row()
    }

    /// Character used by the board diagram: `l`/`L` for light pawn/king,
    /// `d`/`D` for dark pawn/king.
    #[must_use]
    pub const fn as_char(self) -> char {
        match (self.side, self.kind) {
            (Side::Light, PieceKind::Pawn) => 'l',
            (Side::Light, PieceKind::King) => 'L',
            (Side::Dark, PieceKind::Pawn) => 'd',
            (Side::Dark, PieceKind::King) => 'D',
        }
    }

    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'l' => Some(Self::pawn(Side::Light)),
            'L' => Some(Self::king(Side::Light)),
            'd' => Some(Self::pawn(Side::Dark)),
            'D' => Some(Self::king(Side::Dark)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promotion_rows() {
        assert!(Piece::pawn(Side::Light).promotes_on(7));
        assert!(!Piece::pawn(Side::Light).promotes_on(0));
        assert!(Piece::pawn(Side::Dark).promotes_on(0));
        assert!(!Piece::king(Side::Dark).promotes_on(0));
    }

    #[test]
    fn test_char_round_trip() {
        for side in Side::ALL {
            for piece in [Piece::pawn(side), Piece::king(side)] {
                assert_eq!(Piece::from_char(piece.as_char()), Some(piece));
            }
        }
        assert_eq!(Piece::from_char('.'), None);
    }

    #[test]
    fn test_side_serde() {
        assert_eq!(serde_json::to_string(&Side::Dark).unwrap(), "\"dark\"");
        let side: Side = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(side, Side::Light);
    }
}
