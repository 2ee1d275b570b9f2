//! Depth-limited alpha-beta search.
//!
//! The requesting side maximizes and its opponent minimizes. Every leaf is
//! scored with the evaluation function from the requesting side's point of
//! view, so a single one-sided evaluator drives both levels.
//!
//! A node is a leaf when the search reached `max_depth` plies or the side to
//! move has no legal move. Among equal values the earliest move wins: a move
//! replaces the current best only on strict improvement. When a node's window
//! closes (`alpha >= beta`) it returns immediately with the move being
//! examined.

use oxidraughts_engine::{Board, Candidate, Side, legal_moves};

/// Picks the move for `side` that maximizes `eval` after `max_depth` plies.
///
/// Returns `None` when `max_depth` is zero, when `side` has no legal move, or
/// when no move beats the initial window.
///
/// # Example
///
/// ```
/// use oxidraughts_engine::{Board, Side};
/// use oxidraughts_evaluator::search::best_move;
///
/// let mv = best_move(&Board::INITIAL, Side::Light, 2, |board, side| {
///     i32::try_from(board.count(side)).unwrap()
/// });
/// assert!(mv.is_some());
/// ```
pub fn best_move<F>(board: &Board, side: Side, max_depth: u32, mut eval: F) -> Option<Candidate>
where
    F: FnMut(&Board, Side) -> i32,
{
    if max_depth == 0 {
        return None;
    }
    let mut search = AlphaBeta {
        eval: &mut eval,
        side,
        max_depth,
    };
    search.node(board, side, 0, i32::MIN, i32::MAX).1
}

struct AlphaBeta<'a, F> {
    eval: &'a mut F,
    side: Side,
    max_depth: u32,
}

impl<F> AlphaBeta<'_, F>
where
    F: FnMut(&Board, Side) -> i32,
{
    fn node(
        &mut self,
        board: &Board,
        to_move: Side,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> (i32, Option<Candidate>) {
        let moves = legal_moves(board, to_move);
        if depth == self.max_depth || moves.is_empty() {
            return ((self.eval)(board, self.side), None);
        }

        let maximizing = to_move == self.side;
        let mut best = None;
        for candidate in moves {
            let (value, _) =
                self.node(candidate.board(), to_move.opponent(), depth + 1, alpha, beta);
            let improved = if maximizing {
                value > alpha
            } else {
                value < beta
            };
            if improved {
                if maximizing {
                    alpha = value;
                } else {
                    beta = value;
                }
            }
            if alpha >= beta {
                let bound = if maximizing { alpha } else { beta };
                return (bound, Some(candidate));
            }
            if improved {
                best = Some(candidate);
            }
        }

        let bound = if maximizing { alpha } else { beta };
        (bound, best)
    }
}
