//! Game rules on top of the [`core`](crate::core) data types.
//!
//! - [`legal_moves`] - Enumerates the moves of one side, honoring mandatory
//!   maximal captures and promotion
//! - [`MatchRunner`] - Plays a full match between two [`MoveDecider`]s
//!
//! # Example
//!
//! ```
//! use oxidraughts_engine::{Board, Candidate, MatchRunner, Side};
//!
//! let mut first = |_: &Board, _: Side, moves: &[Candidate]| moves[0].clone();
//! let mut last = |_: &Board, _: Side, moves: &[Candidate]| moves[moves.len() - 1].clone();
//!
//! let outcome = MatchRunner::new()
//!     .run(Board::INITIAL, &mut first, &mut last)
//!     .unwrap();
//! println!("{outcome}");
//! ```

pub use self::{match_runner::*, move_gen::*};

mod match_runner;
mod move_gen;
