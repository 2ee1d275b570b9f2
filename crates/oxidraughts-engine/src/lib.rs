//! Board model, move generation and match driver for 8x8 draughts.
//!
//! - [`core`] holds the plain data types: [`Position`], [`Piece`], [`Board`],
//!   [`Move`] and [`Candidate`].
//! - [`engine`] holds the rules: [`legal_moves`] enumerates the moves of one
//!   side and [`MatchRunner`] plays a full game between two [`MoveDecider`]s.

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// A move decider broke the match protocol or the match was cancelled.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum MatchError {
    #[display("{side} player chose a move that was not offered: {mv}")]
    IllegalMove {
        side: Side,
        #[error(not(source))]
        mv: Move,
    },
    #[display("match stopped")]
    Stopped,
}
