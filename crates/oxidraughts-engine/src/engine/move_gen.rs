use crate::core::{Board, Candidate, DIAGONALS, Move, Piece, Position, Side};

/// Whether the side to move can still play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MatchStatus {
    Ongoing,
    SideToMoveLoses,
}

/// Enumerates every legal move of `side` on `board`.
///
/// Captures are mandatory: when any piece of `side` can capture, only capture
/// chains are returned, and only those whose length equals the longest chain
/// found anywhere on the board. Otherwise every simple step is returned.
///
/// Pieces are visited in board scan order and directions in [`DIAGONALS`]
/// order, so the output order is deterministic. An empty result means `side`
/// has no legal move.
///
/// # Example
///
/// ```
/// use oxidraughts_engine::{Board, Side, legal_moves};
///
/// let moves = legal_moves(&Board::INITIAL, Side::Light);
/// assert_eq!(moves.len(), 7);
/// assert!(moves.iter().all(|c| c.mv().len() == 2));
/// ```
#[must_use]
pub fn legal_moves(board: &Board, side: Side) -> Vec<Candidate> {
    let pieces = board.pieces(side);

    let mut captures = vec![];
    for &(pos, piece) in &pieces {
        find_captures(board, pos, piece, Move::new(pos), &mut captures);
    }
    if let Some(longest) = captures.iter().map(|c| c.mv().len()).max() {
        captures.retain(|c| c.mv().len() == longest);
        return captures;
    }

    let mut steps = vec![];
    for &(pos, piece) in &pieces {
        if piece.is_king() {
            king_steps(board, pos, &mut steps);
        } else {
            pawn_steps(board, pos, piece, &mut steps);
        }
    }
    steps
}

#[must_use]
pub fn match_status(board: &Board, side: Side) -> MatchStatus {
    if legal_moves(board, side).is_empty() {
        MatchStatus::SideToMoveLoses
    } else {
        MatchStatus::Ongoing
    }
}

fn is_opponent(board: &Board, pos: Position, side: Side) -> bool {
    board.get(pos).is_some_and(|p| p.side() != side)
}

/// Extends `path` (which ends on `from`, where `piece` now stands) with every
/// possible further capture. Chains that cannot continue are pushed to `out`.
fn find_captures(board: &Board, from: Position, piece: Piece, path: Move, out: &mut Vec<Candidate>) {
    let mut continued = false;

    for (d_row, d_col) in DIAGONALS {
        if piece.is_king() {
            let mut ray = from.ray((d_row, d_col)).skip_while(|&p| board.is_free(p));
            let Some(captured) = ray.next() else {
                continue;
            };
            if !is_opponent(board, captured, piece.side()) {
                continue;
            }
            for landing in ray.take_while(|&p| board.is_free(p)) {
                continued = true;
                let next = jump(board, from, captured, landing);
                find_captures(&next, landing, piece, path.extended(landing), out);
            }
        } else {
            let Some(captured) = from.offset(d_row, d_col) else {
                continue;
            };
            let Some(landing) = captured.offset(d_row, d_col) else {
                continue;
            };
            if is_opponent(board, captured, piece.side()) && board.is_free(landing) {
                continued = true;
                let next = jump(board, from, captured, landing);
                find_captures(&next, landing, piece, path.extended(landing), out);
            }
        }
    }

    if !continued && path.len() > 1 {
        let mut board = board.clone();
        if piece.promotes_on(from.row()) {
            board.crown(from);
        }
        out.push(Candidate::new(board, path));
    }
}

fn jump(board: &Board, from: Position, captured: Position, landing: Position) -> Board {
    let mut next = board.clone();
    next.remove(captured);
    next.move_piece(from, landing);
    next
}

fn pawn_steps(board: &Board, from: Position, piece: Piece, out: &mut Vec<Candidate>) {
    let d_row = piece.side().forward();
    for d_col in [-1, 1] {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        if !board.is_free(to) {
            continue;
        }
        let mut next = board.clone();
        next.move_piece(from, to);
        if piece.promotes_on(to.row()) {
            next.crown(to);
        }
        out.push(Candidate::new(next, Move::new(from).extended(to)));
    }
}

fn king_steps(board: &Board, from: Position, out: &mut Vec<Candidate>) {
    for dir in DIAGONALS {
        for to in from.ray(dir).take_while(|&p| board.is_free(p)) {
            let mut next = board.clone();
            next.move_piece(from, to);
            out.push(Candidate::new(next, Move::new(from).extended(to)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: i8, col: i8) -> Position {
        Position::new(row, col)
    }

    fn path(squares: &[(i8, i8)]) -> Move {
        Move::from_path(squares.iter().map(|&(r, c)| pos(r, c)))
    }

    fn light_pawn(row: i8, col: i8) -> (Position, Piece) {
        (pos(row, col), Piece::pawn(Side::Light))
    }

    fn dark_pawn(row: i8, col: i8) -> (Position, Piece) {
        (pos(row, col), Piece::pawn(Side::Dark))
    }

    fn light_king(row: i8, col: i8) -> (Position, Piece) {
        (pos(row, col), Piece::king(Side::Light))
    }

    fn dark_king(row: i8, col: i8) -> (Position, Piece) {
        (pos(row, col), Piece::king(Side::Dark))
    }

    #[test]
    fn test_opening_moves() {
        let board = Board::INITIAL;
        for side in Side::ALL {
            let moves = legal_moves(&board, side);
            assert_eq!(moves.len(), 7, "{side}");
            for c in &moves {
                assert_eq!(c.mv().len(), 2);
                assert_eq!(c.board().count(Side::Light), 12);
                assert_eq!(c.board().count(Side::Dark), 12);
            }
            assert_eq!(match_status(&board, side), MatchStatus::Ongoing);
        }

        let first = &legal_moves(&board, Side::Light)[0];
        assert_eq!(first.mv(), &path(&[(2, 0), (3, 1)]));
        assert!(first.board().is_free(pos(2, 0)));
        assert!(!first.board().is_free(pos(3, 1)));
    }

    #[test]
    fn test_no_pieces_loses() {
        for side in Side::ALL {
            assert_eq!(
                match_status(&Board::EMPTY, side),
                MatchStatus::SideToMoveLoses
            );
        }
    }

    #[test]
    fn test_blocked_pawn_loses() {
        let board = Board::from_pieces([light_pawn(0, 0), dark_pawn(1, 1), dark_pawn(2, 2)]);
        assert!(match_status(&board, Side::Light).is_side_to_move_loses());
        assert!(match_status(&board, Side::Dark).is_ongoing());
    }

    #[test]
    fn test_pawns_on_last_row_cannot_move() {
        let board = Board::from_pieces([dark_pawn(0, 0), light_pawn(7, 7)]);
        assert!(legal_moves(&board, Side::Light).is_empty());
        assert!(legal_moves(&board, Side::Dark).is_empty());
    }

    #[test]
    fn test_pawn_steps_left_first() {
        let board = Board::from_pieces([dark_pawn(2, 0), light_pawn(2, 2)]);
        let dark = legal_moves(&board, Side::Dark);
        let light = legal_moves(&board, Side::Light);
        assert_eq!(dark.len(), 1);
        assert_eq!(dark[0].mv(), &path(&[(2, 0), (1, 1)]));
        assert_eq!(light.len(), 2);
        assert_eq!(light[0].mv(), &path(&[(2, 2), (3, 1)]));
        assert_eq!(light[1].mv(), &path(&[(2, 2), (3, 3)]));
    }

    #[test]
    fn test_pawn_promotes_on_step() {
        let board = Board::from_pieces([dark_pawn(1, 1)]);
        let moves = legal_moves(&board, Side::Dark);
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0].board().get(pos(0, 0)), Some(Piece::king(Side::Dark)));
    }

    #[test]
    fn test_pawn_captures_are_mandatory() {
        let board = Board::from_pieces([light_pawn(1, 3), dark_pawn(2, 2), dark_pawn(2, 4)]);

        let dark = legal_moves(&board, Side::Dark);
        assert_eq!(dark.len(), 2);
        assert_eq!(dark[0].mv(), &path(&[(2, 2), (0, 4)]));
        assert_eq!(dark[1].mv(), &path(&[(2, 4), (0, 2)]));
        assert!(dark.iter().all(|c| c.board().is_free(pos(1, 3))));

        let light = legal_moves(&board, Side::Light);
        assert_eq!(light.len(), 2);
        assert_eq!(light[0].mv(), &path(&[(1, 3), (3, 1)]));
        assert!(light[0].board().is_free(pos(2, 2)));
        assert_eq!(light[1].mv(), &path(&[(1, 3), (3, 5)]));
        assert!(light[1].board().is_free(pos(2, 4)));
    }

    #[test]
    fn test_pawn_capture_blocked_by_edge() {
        let board = Board::from_pieces([light_pawn(0, 0), dark_pawn(1, 1)]);
        let dark = legal_moves(&board, Side::Dark);
        assert_eq!(dark.len(), 1);
        assert_eq!(dark[0].mv(), &path(&[(1, 1), (0, 2)]));
        assert_eq!(dark[0].board().get(pos(0, 2)), Some(Piece::king(Side::Dark)));
    }

    #[test]
    fn test_pawn_captures_backward() {
        let board = Board::from_pieces([light_pawn(3, 3), dark_pawn(2, 2)]);
        let light = legal_moves(&board, Side::Light);
        assert_eq!(light.len(), 1);
        assert_eq!(light[0].mv(), &path(&[(3, 3), (1, 1)]));
        assert_eq!(light[0].board().count(Side::Dark), 0);
    }

    #[test]
    fn test_pawn_multi_capture() {
        let board = Board::from_pieces([
            light_pawn(0, 0),
            dark_pawn(1, 1),
            dark_pawn(1, 3),
            dark_pawn(1, 5),
        ]);
        let light = legal_moves(&board, Side::Light);
        assert_eq!(light.len(), 1);
        assert_eq!(light[0].mv(), &path(&[(0, 0), (2, 2), (0, 4), (2, 6)]));
        assert_eq!(light[0].board().count(Side::Dark), 0);
    }

    #[test]
    fn test_shorter_chains_are_dropped() {
        let board = Board::from_pieces([
            light_pawn(0, 0),
            dark_pawn(1, 1),
            dark_pawn(1, 3),
            dark_pawn(1, 5),
            dark_pawn(3, 3),
        ]);
        let light = legal_moves(&board, Side::Light);
        assert_eq!(light.len(), 1);
        assert_eq!(light[0].mv(), &path(&[(0, 0), (2, 2), (0, 4), (2, 6)]));
    }

    #[test]
    fn test_equal_chains_share_prefix() {
        let board = Board::from_pieces([
            light_pawn(0, 0),
            dark_pawn(1, 1),
            dark_pawn(1, 3),
            dark_pawn(1, 5),
            dark_pawn(3, 3),
            dark_pawn(5, 5),
        ]);
        let light = legal_moves(&board, Side::Light);
        assert_eq!(light.len(), 2);
        assert_eq!(light[0].mv(), &path(&[(0, 0), (2, 2), (0, 4), (2, 6)]));
        assert_eq!(light[1].mv(), &path(&[(0, 0), (2, 2), (4, 4), (6, 6)]));
        for sq in [(1, 1), (3, 3), (5, 5)] {
            assert!(light[1].board().is_free(pos(sq.0, sq.1)));
        }
    }

    #[test]
    fn test_global_longest_chain_wins() {
        // Piece at (0,2) has a single capture, piece at (4,0) a double one.
        let board = Board::from_pieces([
            light_pawn(0, 2),
            dark_pawn(1, 3),
            light_pawn(4, 0),
            dark_pawn(5, 1),
            dark_pawn(5, 3),
        ]);
        let light = legal_moves(&board, Side::Light);
        assert_eq!(light.len(), 1);
        assert_eq!(light[0].mv(), &path(&[(4, 0), (6, 2), (4, 4)]));
    }

    #[test]
    fn test_king_moves() {
        let board = Board::from_pieces([light_king(0, 0), dark_king(3, 1)]);
        assert_eq!(legal_moves(&board, Side::Light).len(), 7);
        assert_eq!(legal_moves(&board, Side::Dark).len(), 9);
    }

    #[test]
    fn test_king_blocked_by_two_pieces() {
        let board = Board::from_pieces([light_king(0, 0), dark_king(3, 3), dark_king(4, 4)]);
        assert_eq!(legal_moves(&board, Side::Light).len(), 2);
    }

    #[test]
    fn test_king_long_capture_landings() {
        let board = Board::from_pieces([light_king(0, 0), dark_pawn(2, 2)]);
        let light = legal_moves(&board, Side::Light);
        let ends = light.iter().map(|c| c.mv().to()).collect::<Vec<_>>();
        assert_eq!(ends, vec![pos(3, 3), pos(4, 4), pos(5, 5), pos(6, 6), pos(7, 7)]);
        assert!(light.iter().all(|c| c.mv().len() == 2 && c.board().count(Side::Dark) == 0));
    }

    #[test]
    fn test_king_multi_capture() {
        let board = Board::from_pieces([
            light_king(0, 0),
            dark_king(1, 1),
            dark_king(3, 3),
            dark_king(3, 5),
            dark_king(1, 5),
            dark_king(5, 3),
            dark_king(7, 1),
        ]);
        let light = legal_moves(&board, Side::Light);
        assert_eq!(light.len(), 1);
        assert_eq!(
            light[0].mv(),
            &path(&[(0, 0), (2, 2), (4, 4), (6, 2), (2, 6), (0, 4)])
        );
        assert_eq!(light[0].board().count(Side::Dark), 1);
    }

    #[test]
    fn test_king_chain_with_single_landings() {
        // Own pawns on (3,3) and (7,3) leave one landing after each capture.
        let board = Board::from_pieces([
            light_king(0, 0),
            dark_pawn(1, 1),
            light_pawn(3, 3),
            dark_pawn(3, 1),
            dark_pawn(5, 1),
            light_pawn(7, 3),
        ]);
        let light = legal_moves(&board, Side::Light);
        assert_eq!(light.len(), 1);
        assert_eq!(light[0].mv(), &path(&[(0, 0), (2, 2), (4, 0), (6, 2)]));
        assert_eq!(light[0].board().count(Side::Dark), 0);
        assert_eq!(light[0].board().get(pos(6, 2)), Some(Piece::king(Side::Light)));
    }

    #[test]
    fn test_king_landings_share_prefix() {
        let board = Board::from_pieces([
            light_king(0, 2),
            dark_pawn(1, 3),
            light_pawn(3, 5),
            dark_pawn(3, 3),
            light_pawn(6, 0),
        ]);
        let light = legal_moves(&board, Side::Light);
        assert_eq!(light.len(), 2);
        assert_eq!(light[0].mv(), &path(&[(0, 2), (2, 4), (4, 2)]));
        assert_eq!(light[1].mv(), &path(&[(0, 2), (2, 4), (5, 1)]));
        for candidate in &light {
            assert_eq!(candidate.board().count(Side::Dark), 0);
        }
    }

    #[test]
    fn test_promotion_only_at_chain_end() {
        // The pawn passes row 7 mid-chain and ends on row 5 as a pawn.
        let board = Board::from_pieces([light_pawn(5, 1), dark_pawn(6, 2), dark_pawn(6, 4)]);
        let light = legal_moves(&board, Side::Light);
        assert_eq!(light.len(), 1);
        assert_eq!(light[0].mv(), &path(&[(5, 1), (7, 3), (5, 5)]));
        assert_eq!(light[0].board().get(pos(5, 5)), Some(Piece::pawn(Side::Light)));
    }

    #[test]
    fn test_capture_ending_on_promotion_row_crowns() {
        let board = Board::from_pieces([light_pawn(5, 1), dark_pawn(6, 2)]);
        let light = legal_moves(&board, Side::Light);
        assert_eq!(light.len(), 1);
        assert_eq!(light[0].board().get(pos(7, 3)), Some(Piece::king(Side::Light)));
    }
}
