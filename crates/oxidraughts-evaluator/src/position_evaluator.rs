//! Weighted scoring of whole positions.
//!
//! [`MetricSet`] maps each chosen [`Metric`] to an integer weight and scores a
//! board as the weighted metric values divided by the number of metrics:
//!
//! ```text
//! score = Σ(weightᵢ × metricᵢ) / n
//! ```
//!
//! The divisor is the metric count, not the weight sum, so a set with large
//! weights produces scores above 100. Terminal positions short-circuit the sum:
//! a side without pieces scores [`MIN_VALUE`] and a side whose opponent has no
//! pieces scores [`MAX_VALUE`].

use std::{collections::BTreeMap, fmt};

use oxidraughts_engine::{Board, Side};

use crate::{
    board_analysis::BoardAnalysis,
    metric::{MAX_VALUE, MIN_VALUE, Metric},
};

/// Scores a board from one side's point of view (higher is better).
pub trait PositionEvaluator: fmt::Debug + Send + Sync {
    fn evaluate(&self, board: &Board, side: Side) -> i32;
}

/// Metric weights, at most one per metric.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricSet {
    weights: BTreeMap<Metric, i32>,
}

impl MetricSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the weight of `metric`, replacing any previous weight.
    pub fn insert(&mut self, metric: Metric, weight: i32) {
        self.weights.insert(metric, weight);
    }

    #[must_use]
    pub fn weight(&self, metric: Metric) -> Option<i32> {
        self.weights.get(&metric).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, i32)> + '_ {
        self.weights.iter().map(|(&m, &w)| (m, w))
    }

    /// Scores `board` for `side`.
    ///
    /// # Example
    ///
    /// ```
    /// use oxidraughts_engine::{Board, Side};
    /// use oxidraughts_evaluator::{metric::Metric, position_evaluator::MetricSet};
    ///
    /// let set = MetricSet::from_iter([(Metric::PawnsNumber, 2), (Metric::Oreo, 1)]);
    /// // Both sides start even: (50 * 2 + 50 * 1) / 2
    /// assert_eq!(set.score(&Board::INITIAL, Side::Light), 75);
    /// assert_eq!(MetricSet::new().score(&Board::INITIAL, Side::Light), 0);
    /// ```
    #[must_use]
    pub fn score(&self, board: &Board, side: Side) -> i32 {
        if self.weights.is_empty() || board.count(side) == 0 {
            return MIN_VALUE;
        }
        if board.count(side.opponent()) == 0 {
            return MAX_VALUE;
        }

        let analysis = BoardAnalysis::new(board);
        let total = self
            .iter()
            .map(|(metric, weight)| {
                i64::from(metric.evaluate(&analysis, side)) * i64::from(weight)
            })
            .sum::<i64>();
        let mean = total / i64::try_from(self.weights.len()).unwrap_or(i64::MAX);
        i32::try_from(mean).unwrap_or(if mean < 0 { i32::MIN } else { i32::MAX })
    }
}

impl FromIterator<(Metric, i32)> for MetricSet {
    fn from_iter<T: IntoIterator<Item = (Metric, i32)>>(iter: T) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}

impl PositionEvaluator for MetricSet {
    fn evaluate(&self, board: &Board, side: Side) -> i32 {
        self.score(board, side)
    }
}

#[cfg(test)]
mod tests {
    use oxidraughts_engine::{Piece, Position};

    use super::*;

    fn board(pieces: &[((i8, i8), char)]) -> Board {
        Board::from_pieces(pieces.iter().map(|&((row, col), c)| {
            (Position::new(row, col), Piece::from_char(c).unwrap())
        }))
    }

    #[test]
    fn test_empty_set_scores_zero() {
        assert_eq!(MetricSet::new().score(&Board::INITIAL, Side::Light), 0);
        assert_eq!(MetricSet::new().score(&Board::INITIAL, Side::Dark), 0);
    }

    #[test]
    fn test_terminal_positions() {
        let set = MetricSet::from_iter([(Metric::PawnsNumber, 0)]);

        let light_only = board(&[((0, 0), 'l')]);
        assert_eq!(set.score(&light_only, Side::Light), MAX_VALUE);
        assert_eq!(set.score(&light_only, Side::Dark), MIN_VALUE);

        let dark_only = board(&[((0, 0), 'd')]);
        assert_eq!(set.score(&dark_only, Side::Light), MIN_VALUE);
        assert_eq!(set.score(&dark_only, Side::Dark), MAX_VALUE);
    }

    #[test]
    fn test_single_weighted_metric() {
        let set = MetricSet::from_iter([(Metric::PawnsNumber, 2)]);
        let b = board(&[((0, 0), 'l'), ((2, 2), 'd')]);
        assert_eq!(set.score(&b, Side::Light), 100);
        assert_eq!(set.score(&b, Side::Dark), 100);
    }

    #[test]
    fn test_divides_by_metric_count() {
        let b = board(&[
            ((4, 0), 'd'),
            ((1, 3), 'D'),
            ((2, 4), 'D'),
            ((0, 2), 'l'),
            ((2, 6), 'l'),
            ((6, 0), 'd'),
            ((6, 2), 'l'),
            ((5, 5), 'd'),
            ((7, 5), 'd'),
        ]);
        let set = MetricSet::from_iter([
            (Metric::PawnsNumber, 20),
            (Metric::KingsNumber, 50),
            (Metric::SafePawns, 5),
            (Metric::SafeKings, 11),
        ]);
        assert_eq!(set.score(&b, Side::Light), 925);
        assert_eq!(set.score(&b, Side::Dark), 1207);
    }

    #[test]
    fn test_large_weights_saturate() {
        let set = MetricSet::from_iter([(Metric::PawnsNumber, 30_000_000)]);
        assert_eq!(set.score(&Board::INITIAL, Side::Light), 1_500_000_000);

        let set = MetricSet::from_iter([(Metric::PawnsNumber, 100_000_000)]);
        assert_eq!(set.score(&Board::INITIAL, Side::Light), i32::MAX);

        let set = MetricSet::from_iter([(Metric::PawnsNumber, i32::MIN)]);
        assert_eq!(set.score(&Board::INITIAL, Side::Light), i32::MIN);
    }

    #[test]
    fn test_insert_replaces_weight() {
        let mut set = MetricSet::new();
        set.insert(Metric::Dog, 3);
        set.insert(Metric::Dog, 7);
        assert_eq!(set.len(), 1);
        assert_eq!(set.weight(Metric::Dog), Some(7));
        assert_eq!(set.weight(Metric::Oreo), None);
    }
}
