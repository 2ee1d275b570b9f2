//! Positional metrics for draughts boards.
//!
//! Every metric looks at one board from one side's point of view and returns a
//! value in \[0, 100\], where 50 means both sides are even and higher is better
//! for the evaluating side. Metrics fall into three groups:
//!
//! **Count metrics** ([`count`]) count pieces matching a condition for each side
//! and compare the counts with [`ratio`]:
//!
//! - material: [`Metric::PawnsNumber`], [`Metric::KingsNumber`]
//! - safety: [`Metric::SafePawns`], [`Metric::SafeKings`]
//! - mobility: [`Metric::MoveablePawns`], [`Metric::MoveableKings`]
//! - territory: [`Metric::DefenderFigures`], [`Metric::AttackingFigures`],
//!   [`Metric::CenterPawns`], [`Metric::CenterKings`]
//! - diagonals: [`Metric::PawnsOnDiagonal`], [`Metric::KingsOnDiagonal`],
//!   [`Metric::PawnsOnDoubleDiagonal`], [`Metric::KingsOnDoubleDiagonal`]
//! - promotion: [`Metric::AggregatedDistanceToPromotionLine`],
//!   [`Metric::NumberOfUnoccupiedFieldOnPromotionLine`]
//!
//! **Shape metrics** ([`shape`]) check fixed patterns near the back rows and
//! score 0, 50 or 100.
//!
//! The ordinal of a metric ([`Metric::index`]) is its identifier in weight
//! files, so the variant order is part of the file format.

use crate::board_analysis::BoardAnalysis;
use oxidraughts_engine::Side;

pub use self::ratio::*;

pub mod count;
mod ratio;
pub mod shape;

/// Number of distinct metrics.
pub const METRIC_COUNT: usize = Metric::ALL.len();

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display,
)]
pub enum Metric {
    PawnsNumber,
    KingsNumber,
    SafePawns,
    SafeKings,
    MoveablePawns,
    MoveableKings,
    AggregatedDistanceToPromotionLine,
    NumberOfUnoccupiedFieldOnPromotionLine,
    DefenderFigures,
    AttackingFigures,
    CenterPawns,
    CenterKings,
    PawnsOnDiagonal,
    KingsOnDiagonal,
    PawnsOnDoubleDiagonal,
    KingsOnDoubleDiagonal,
    Triangle,
    Oreo,
    Bridge,
    Corner,
    KingCorner,
    Dog,
}

impl Metric {
    /// All metrics in index order.
    pub const ALL: [Self; 22] = [
        Self::PawnsNumber,
        Self::KingsNumber,
        Self::SafePawns,
        Self::SafeKings,
        Self::MoveablePawns,
        Self::MoveableKings,
        Self::AggregatedDistanceToPromotionLine,
        Self::NumberOfUnoccupiedFieldOnPromotionLine,
        Self::DefenderFigures,
        Self::AttackingFigures,
        Self::CenterPawns,
        Self::CenterKings,
        Self::PawnsOnDiagonal,
        Self::KingsOnDiagonal,
        Self::PawnsOnDoubleDiagonal,
        Self::KingsOnDoubleDiagonal,
        Self::Triangle,
        Self::Oreo,
        Self::Bridge,
        Self::Corner,
        Self::KingCorner,
        Self::Dog,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Value of this metric for `side`, in \[0, 100\].
    #[must_use]
    pub fn evaluate(self, analysis: &BoardAnalysis<'_>, side: Side) -> i32 {
        match self {
            Self::PawnsNumber => count::pawns(analysis, side),
            Self::KingsNumber => count::kings(analysis, side),
            Self::SafePawns => count::safe_pawns(analysis, side),
            Self::SafeKings => count::safe_kings(analysis, side),
            Self::MoveablePawns => count::moveable_pawns(analysis, side),
            Self::MoveableKings => count::moveable_kings(analysis, side),
            Self::AggregatedDistanceToPromotionLine => count::promotion_progress(analysis, side),
            Self::NumberOfUnoccupiedFieldOnPromotionLine => {
                count::unoccupied_promotion_squares(analysis, side)
            }
            Self::DefenderFigures => count::defenders(analysis, side),
            Self::AttackingFigures => count::attackers(analysis, side),
            Self::CenterPawns => count::center_pawns(analysis, side),
            Self::CenterKings => count::center_kings(analysis, side),
            Self::PawnsOnDiagonal => count::pawns_on_diagonal(analysis, side),
            Self::KingsOnDiagonal => count::kings_on_diagonal(analysis, side),
            Self::PawnsOnDoubleDiagonal => count::pawns_on_double_diagonal(analysis, side),
            Self::KingsOnDoubleDiagonal => count::kings_on_double_diagonal(analysis, side),
            Self::Triangle => shape::TRIANGLE.evaluate(analysis.board(), side),
            Self::Oreo => shape::OREO.evaluate(analysis.board(), side),
            Self::Bridge => shape::BRIDGE.evaluate(analysis.board(), side),
            Self::Corner => shape::CORNER.evaluate(analysis.board(), side),
            Self::KingCorner => shape::KING_CORNER.evaluate(analysis.board(), side),
            Self::Dog => shape::DOG.evaluate(analysis.board(), side),
        }
    }
}
