//! Phase-aware search player.
//!
//! An [`EvaluatedHeuristic`] keeps one [`MetricSet`] per [`GamePhase`]. Before
//! every decision it picks the phase from the number of pieces left on the
//! board and runs [`best_move`] with the matching set as leaf evaluator.
//!
//! # Example
//!
//! ```
//! use oxidraughts_engine::{Board, Side};
//! use oxidraughts_evaluator::{
//!     heuristic::{EvaluatedHeuristic, GamePhase},
//!     metric::Metric,
//! };
//!
//! let mut heuristic = EvaluatedHeuristic::new(2);
//! heuristic.insert(GamePhase::Early, Metric::PawnsNumber, 10);
//! heuristic.insert(GamePhase::Early, Metric::SafePawns, 3);
//!
//! let chosen = heuristic.decide(&Board::INITIAL, Side::Light).unwrap();
//! assert_eq!(chosen.mv().len(), 2);
//! ```

use oxidraughts_engine::{Board, Candidate, MoveDecider, PIECES_PER_SIDE, Side};

use crate::{metric::Metric, position_evaluator::MetricSet, search::best_move};

/// Stage of a match, judged by the pieces left on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
    derive_more::IsVariant,
)]
pub enum GamePhase {
    #[display("early")]
    Early,
    #[display("mid")]
    Mid,
    #[display("late")]
    Late,
}

impl GamePhase {
    pub const ALL: [Self; 3] = [Self::Early, Self::Mid, Self::Late];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Piece totals at which the early and mid phases start.
///
/// A board with at least `early` pieces in total is in the early phase, one
/// with at least `mid` is in the mid phase, anything smaller is late.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseThresholds {
    pub early: usize,
    pub mid: usize,
}

impl Default for PhaseThresholds {
    fn default() -> Self {
        Self {
            early: PIECES_PER_SIDE * 2 / 3,
            mid: PIECES_PER_SIDE / 3,
        }
    }
}

impl PhaseThresholds {
    #[must_use]
    pub fn phase_of(&self, board: &Board) -> GamePhase {
        let total = board.total_pieces();
        if total >= self.early {
            GamePhase::Early
        } else if total >= self.mid {
            GamePhase::Mid
        } else {
            GamePhase::Late
        }
    }
}

/// Alpha-beta player scoring leaves with per-phase metric weights.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluatedHeuristic {
    sets: [MetricSet; 3],
    thresholds: PhaseThresholds,
    depth: u32,
}

impl EvaluatedHeuristic {
    /// Creates a heuristic with empty metric sets and default thresholds.
    #[must_use]
    pub fn new(depth: u32) -> Self {
        Self {
            sets: Default::default(),
            thresholds: PhaseThresholds::default(),
            depth,
        }
    }

    #[must_use]
    pub fn with_thresholds(mut self, thresholds: PhaseThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn thresholds(&self) -> PhaseThresholds {
        self.thresholds
    }

    #[must_use]
    pub fn metric_set(&self, phase: GamePhase) -> &MetricSet {
        &self.sets[phase.index()]
    }

    /// Sets the weight of `metric` in the set used during `phase`.
    pub fn insert(&mut self, phase: GamePhase, metric: Metric, weight: i32) {
        self.sets[phase.index()].insert(metric, weight);
    }

    #[must_use]
    pub fn phase_of(&self, board: &Board) -> GamePhase {
        self.thresholds.phase_of(board)
    }

    /// Searches for the best move of `side`.
    ///
    /// Returns `None` when the depth is zero or `side` cannot move.
    #[must_use]
    pub fn decide(&self, board: &Board, side: Side) -> Option<Candidate> {
        let set = self.metric_set(self.phase_of(board));
        best_move(board, side, self.depth, |leaf, eval_side| set.score(leaf, eval_side))
    }
}

impl MoveDecider for EvaluatedHeuristic {
    fn decide(&mut self, board: &Board, side: Side, candidates: &[Candidate]) -> Candidate {
        EvaluatedHeuristic::decide(self, board, side).unwrap_or_else(|| candidates[0].clone())
    }
}

#[cfg(test)]
mod tests {
    use oxidraughts_engine::{MatchRunner, Piece, Position, legal_moves};

    use super::*;

    fn filled_board(total: usize) -> Board {
        let mut board = Board::EMPTY;
        for pos in Position::all_valid().take(total) {
            board.set(pos, Some(Piece::pawn(Side::Light)));
        }
        board
    }

    #[test]
    fn test_default_thresholds() {
        let thresholds = PhaseThresholds::default();
        assert_eq!((thresholds.early, thresholds.mid), (8, 4));
    }

    #[test]
    fn test_phase_boundaries() {
        let thresholds = PhaseThresholds::default();
        assert_eq!(thresholds.phase_of(&Board::INITIAL), GamePhase::Early);
        assert_eq!(thresholds.phase_of(&filled_board(8)), GamePhase::Early);
        assert_eq!(thresholds.phase_of(&filled_board(7)), GamePhase::Mid);
        assert_eq!(thresholds.phase_of(&filled_board(4)), GamePhase::Mid);
        assert_eq!(thresholds.phase_of(&filled_board(3)), GamePhase::Late);
        assert_eq!(thresholds.phase_of(&Board::EMPTY), GamePhase::Late);

        let custom = PhaseThresholds { early: 20, mid: 10 };
        assert_eq!(custom.phase_of(&filled_board(19)), GamePhase::Mid);
    }

    #[test]
    fn test_uses_set_of_current_phase() {
        // (2,4)-(3,3) hangs the light pawn. Only a heuristic whose late set
        // counts material steps aside.
        let board = Board::from_pieces([
            (Position::new(2, 4), Piece::pawn(Side::Light)),
            (Position::new(4, 2), Piece::pawn(Side::Dark)),
        ]);
        let safe_step = [Position::new(2, 4), Position::new(3, 5)];
        let hanging_step = [Position::new(2, 4), Position::new(3, 3)];

        let mut late_aware = EvaluatedHeuristic::new(2);
        late_aware.insert(GamePhase::Late, Metric::PawnsNumber, 1);
        assert_eq!(late_aware.phase_of(&board), GamePhase::Late);
        let chosen = late_aware.decide(&board, Side::Light).unwrap();
        assert_eq!(chosen.mv().path(), safe_step);

        let mut early_only = EvaluatedHeuristic::new(2);
        early_only.insert(GamePhase::Early, Metric::PawnsNumber, 1);
        let chosen = early_only.decide(&board, Side::Light).unwrap();
        assert_eq!(chosen.mv().path(), hanging_step);
    }

    #[test]
    fn test_zero_depth_falls_back_to_first_candidate() {
        let mut heuristic = EvaluatedHeuristic::new(0);
        assert!(heuristic.decide(&Board::INITIAL, Side::Light).is_none());

        let candidates = legal_moves(&Board::INITIAL, Side::Light);
        let chosen = MoveDecider::decide(&mut heuristic, &Board::INITIAL, Side::Light, &candidates);
        assert_eq!(chosen, candidates[0]);
    }

    #[test]
    fn test_plays_full_match() {
        let mut light = EvaluatedHeuristic::new(1);
        light.insert(GamePhase::Early, Metric::PawnsNumber, 5);
        light.insert(GamePhase::Mid, Metric::KingsNumber, 5);
        light.insert(GamePhase::Late, Metric::SafeKings, 5);
        let mut dark = EvaluatedHeuristic::new(1);
        dark.insert(GamePhase::Early, Metric::Triangle, 1);

        let outcome = MatchRunner::new()
            .run(Board::INITIAL, &mut light, &mut dark)
            .unwrap();
        let again = MatchRunner::new()
            .run(Board::INITIAL, &mut light, &mut dark)
            .unwrap();
        assert_eq!(outcome, again);
    }
}
