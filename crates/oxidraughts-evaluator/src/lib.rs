//! Position evaluation and move selection for draughts.
//!
//! The crate turns boards into scores and scores into moves:
//!
//! ```text
//! EvaluatedHeuristic (picks a metric set by game phase)
//!     ↓ runs
//! Search (alpha-beta over legal moves)
//!     ↓ scores leaves with
//! MetricSet (weighted metrics)
//!     ↓ averages
//! Metric (one property of the board, in [0, 100])
//! ```
//!
//! # Modules
//!
//! - [`metric`] - The 22 positional metrics and the [`ratio`](metric::ratio)
//!   scale they share
//! - [`position_evaluator`] - [`MetricSet`](position_evaluator::MetricSet),
//!   the weighted blend of metrics used as leaf score
//! - [`search`] - Depth-limited alpha-beta search
//! - [`heuristic`] - [`EvaluatedHeuristic`](heuristic::EvaluatedHeuristic),
//!   a [`MoveDecider`](oxidraughts_engine::MoveDecider) backed by search
//! - [`baseline`] - Players that ignore the position, useful as opponents
//!
//! [`BoardAnalysis`] caches per-board facts such as legal moves so that
//! metrics evaluated on the same board share the work.
//!
//! # Scoring model
//!
//! Every metric compares the two sides and maps the comparison to
//! \[0, 100\], 50 meaning even. A metric set multiplies each metric by its
//! weight and divides the sum by the number of metrics. The search is
//! one-sided: leaves are always scored for the side that asked for a move,
//! never negated.

pub use self::board_analysis::*;

pub mod baseline;
mod board_analysis;
pub mod heuristic;
pub mod metric;
pub mod position_evaluator;
pub mod search;
