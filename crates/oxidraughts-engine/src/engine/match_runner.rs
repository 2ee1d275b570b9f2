use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use crate::{
    MatchError,
    core::{Board, Candidate, Side},
    engine::move_gen::legal_moves,
};

/// Number of consecutive plies without a capture that ends the match in a
/// draw.
pub const NO_CAPTURE_DRAW_LIMIT: u32 = 20;

/// Final result of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum MatchOutcome {
    #[display("light wins")]
    LightWins,
    #[display("dark wins")]
    DarkWins,
    #[display("draw")]
    Draw,
}

impl MatchOutcome {
    #[must_use]
    pub const fn win_for(side: Side) -> Self {
        match side {
            Side::Light => Self::LightWins,
            Side::Dark => Self::DarkWins,
        }
    }

    /// Returns the winning side, or `None` for a draw.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Self::LightWins => Some(Side::Light),
            Self::DarkWins => Some(Side::Dark),
            Self::Draw => None,
        }
    }
}

/// Chooses one move out of the legal moves offered by the [`MatchRunner`].
///
/// The returned candidate must be equal to one of `candidates`; anything else
/// aborts the match with [`MatchError::IllegalMove`]. `candidates` is never
/// empty.
///
/// Any `FnMut(&Board, Side, &[Candidate]) -> Candidate` closure is a decider.
pub trait MoveDecider {
    fn decide(&mut self, board: &Board, side: Side, candidates: &[Candidate]) -> Candidate;
}

impl<F> MoveDecider for F
where
    F: FnMut(&Board, Side, &[Candidate]) -> Candidate,
{
    fn decide(&mut self, board: &Board, side: Side, candidates: &[Candidate]) -> Candidate {
        self(board, side, candidates)
    }
}

/// Cooperative cancellation flag shared with a [`MatchRunner`].
///
/// The runner checks the flag once per ply, before asking a decider for a
/// move. Once stopped, the flag stays set.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    stopped: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }
}

/// Plays one match between two deciders.
///
/// # Rules
///
/// - Light moves first, then the sides alternate.
/// - A side with no legal move loses.
/// - When [`NO_CAPTURE_DRAW_LIMIT`] consecutive plies leave the opponent's
///   piece count unchanged, the match is a draw.
#[derive(Debug, Clone, Default)]
pub struct MatchRunner {
    stop: StopHandle,
}

impl MatchRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle that stops this runner's current and future matches.
    #[must_use]
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn run<L, D>(
        &self,
        initial: Board,
        light: &mut L,
        dark: &mut D,
    ) -> Result<MatchOutcome, MatchError>
    where
        L: MoveDecider + ?Sized,
        D: MoveDecider + ?Sized,
    {
        let mut board = initial;
        let mut side = Side::Light;
        let mut plies = 0_u32;
        let mut no_capture_plies = 0_u32;

        let outcome = loop {
            if self.stop.is_stopped() {
                tracing::debug!(plies, "match stopped");
                return Err(MatchError::Stopped);
            }

            let candidates = legal_moves(&board, side);
            if candidates.is_empty() {
                break MatchOutcome::win_for(side.opponent());
            }

            let choice = match side {
                Side::Light => light.decide(&board, side, &candidates),
                Side::Dark => dark.decide(&board, side, &candidates),
            };
            if !candidates.contains(&choice) {
                return Err(MatchError::IllegalMove {
                    side,
                    mv: choice.mv().clone(),
                });
            }
            tracing::trace!(%side, mv = %choice.mv(), "ply");

            let opponent = side.opponent();
            if board.count(opponent) == choice.board().count(opponent) {
                no_capture_plies += 1;
            } else {
                no_capture_plies = 0;
            }
            plies += 1;
            board = choice.into_board();

            if no_capture_plies >= NO_CAPTURE_DRAW_LIMIT {
                break MatchOutcome::Draw;
            }
            side = opponent;
        };

        tracing::debug!(%outcome, plies, "match finished");
        Ok(outcome)
    }
}
