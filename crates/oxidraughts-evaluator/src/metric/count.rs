//! Metrics that compare per-side piece counts.

use std::collections::BTreeSet;

use oxidraughts_engine::{BOARD_SIZE, Piece, PieceKind, Position, Side};

use super::ratio;
use crate::board_analysis::BoardAnalysis;

const MAX_PIECES: i32 = 12;
const MAX_SAFE_PAWNS: i32 = 10;
const MAX_PAWNS_ON_DIAGONAL: i32 = 7;
const MAX_KINGS_ON_DIAGONAL: i32 = 8;
const MAX_PAWNS_ON_DOUBLE_DIAGONAL: i32 = 11;
const MAX_UNOCCUPIED_PROMOTION_SQUARES: i32 = 4;

fn to_count(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

/// Counts the pieces of `side` that satisfy `pred`.
fn count_where<F>(analysis: &BoardAnalysis<'_>, side: Side, pred: F) -> i32
where
    F: Fn(Position, Piece) -> bool,
{
    to_count(
        analysis
            .pieces(side)
            .iter()
            .filter(|&&(pos, piece)| pred(pos, piece))
            .count(),
    )
}

/// Compares the number of pieces matching `pred` on both sides.
fn compare<F>(analysis: &BoardAnalysis<'_>, side: Side, max: i32, pred: F) -> i32
where
    F: Fn(Side, Position, Piece) -> bool,
{
    let own = count_where(analysis, side, |pos, piece| pred(side, pos, piece));
    let opponent = side.opponent();
    let other = count_where(analysis, opponent, |pos, piece| pred(opponent, pos, piece));
    ratio(max, own, other)
}

fn is_center(pos: Position) -> bool {
    pos.row() == BOARD_SIZE / 2 || pos.row() == BOARD_SIZE / 2 - 1
}

fn is_on_diagonal(pos: Position) -> bool {
    pos.row() == pos.col()
}

fn is_on_double_diagonal(pos: Position) -> bool {
    (pos.row() - pos.col()).abs() == 2
}

/// Returns `true` if `row` lies in the three home rows of `side`.
fn is_home_half(side: Side, row: i8) -> bool {
    match side {
        Side::Light => row <= BOARD_SIZE / 2 - 2,
        Side::Dark => row >= BOARD_SIZE / 2 + 1,
    }
}

pub fn pawns(analysis: &BoardAnalysis<'_>, side: Side) -> i32 {
    compare(analysis, side, MAX_PIECES, |_, _, p| p.is_pawn())
}

pub fn kings(analysis: &BoardAnalysis<'_>, side: Side) -> i32 {
    compare(analysis, side, MAX_PIECES, |_, _, p| p.is_king())
}

pub fn safe_pawns(analysis: &BoardAnalysis<'_>, side: Side) -> i32 {
    compare(analysis, side, MAX_SAFE_PAWNS, |_, pos, p| {
        p.is_pawn() && pos.is_on_edge()
    })
}

pub fn safe_kings(analysis: &BoardAnalysis<'_>, side: Side) -> i32 {
    compare(analysis, side, MAX_PIECES, |_, pos, p| {
        p.is_king() && pos.is_on_edge()
    })
}

pub fn center_pawns(analysis: &BoardAnalysis<'_>, side: Side) -> i32 {
    compare(analysis, side, MAX_PIECES, |_, pos, p| {
        p.is_pawn() && is_center(pos)
    })
}

pub fn center_kings(analysis: &BoardAnalysis<'_>, side: Side) -> i32 {
    compare(analysis, side, MAX_PIECES, |_, pos, p| {
        p.is_king() && is_center(pos)
    })
}

pub fn pawns_on_diagonal(analysis: &BoardAnalysis<'_>, side: Side) -> i32 {
    compare(analysis, side, MAX_PAWNS_ON_DIAGONAL, |_, pos, p| {
        p.is_pawn() && is_on_diagonal(pos)
    })
}

pub fn kings_on_diagonal(analysis: &BoardAnalysis<'_>, side: Side) -> i32 {
    compare(analysis, side, MAX_KINGS_ON_DIAGONAL, |_, pos, p| {
        p.is_king() && is_on_diagonal(pos)
    })
}

pub fn pawns_on_double_diagonal(analysis: &BoardAnalysis<'_>, side: Side) -> i32 {
    compare(analysis, side, MAX_PAWNS_ON_DOUBLE_DIAGONAL, |_, pos, p| {
        p.is_pawn() && is_on_double_diagonal(pos)
    })
}

pub fn kings_on_double_diagonal(analysis: &BoardAnalysis<'_>, side: Side) -> i32 {
    compare(analysis, side, MAX_PIECES, |_, pos, p| {
        p.is_king() && is_on_double_diagonal(pos)
    })
}

/// Pieces of any kind standing in their own three home rows.
pub fn defenders(analysis: &BoardAnalysis<'_>, side: Side) -> i32 {
    compare(analysis, side, MAX_PIECES, |s, pos, _| {
        is_home_half(s, pos.row())
    })
}

/// Pieces of any kind standing in the opponent's three home rows.
pub fn attackers(analysis: &BoardAnalysis<'_>, side: Side) -> i32 {
    compare(analysis, side, MAX_PIECES, |s, pos, _| {
        is_home_half(s.opponent(), pos.row())
    })
}

/// Number of distinct squares from which `side` has a legal move starting
/// with a piece of `kind`.
fn moveable(analysis: &BoardAnalysis<'_>, side: Side, kind: PieceKind) -> i32 {
    let board = analysis.board();
    let origins = analysis
        .legal_moves(side)
        .iter()
        .map(|c| c.mv().from())
        .filter(|&from| board.get(from).is_some_and(|p| p.kind() == kind))
        .collect::<BTreeSet<_>>();
    to_count(origins.len())
}

pub fn moveable_pawns(analysis: &BoardAnalysis<'_>, side: Side) -> i32 {
    let own = moveable(analysis, side, PieceKind::Pawn);
    let other = moveable(analysis, side.opponent(), PieceKind::Pawn);
    ratio(MAX_PIECES, own, other)
}

pub fn moveable_kings(analysis: &BoardAnalysis<'_>, side: Side) -> i32 {
    let own = moveable(analysis, side, PieceKind::King);
    let other = moveable(analysis, side.opponent(), PieceKind::King);
    ratio(MAX_PIECES, own, other)
}

/// How far the pawns of `side` have advanced, scaled to \[0, 12\].
///
/// The sum of pawn rows is placed between the smallest and largest sums the
/// same number of pawns could have, packing four pawns per row. A side with
/// no pawns has made no progress.
#[expect(clippy::cast_possible_truncation)]
fn pawn_progress(analysis: &BoardAnalysis<'_>, side: Side) -> i32 {
    let per_row = i32::from(BOARD_SIZE) / 2;
    let rows = analysis
        .pieces(side)
        .iter()
        .filter(|(_, p)| p.is_pawn())
        .map(|(pos, _)| i32::from(pos.row()));

    let (mut sum, mut min, mut max) = (0, 0, 0);
    for (i, row) in (0..).zip(rows) {
        let k = i / per_row;
        sum += row;
        match side {
            Side::Light => {
                min += k;
                max += i32::from(BOARD_SIZE) - 2 - k;
            }
            Side::Dark => {
                min += k + 1;
                max += i32::from(BOARD_SIZE) - 1 - k;
            }
        }
    }
    if max <= min {
        return 0;
    }

    let advanced = match side {
        Side::Light => sum - min,
        Side::Dark => max - sum,
    };
    let factor = f64::from(advanced) / f64::from(max - min);
    (factor * f64::from(MAX_PIECES)).round() as i32
}

pub fn promotion_progress(analysis: &BoardAnalysis<'_>, side: Side) -> i32 {
    let own = pawn_progress(analysis, side);
    let other = pawn_progress(analysis, side.opponent());
    ratio(MAX_PIECES, own, other)
}

/// Empty dark squares on the row where `side` promotes.
pub fn unoccupied_promotion_squares(analysis: &BoardAnalysis<'_>, side: Side) -> i32 {
    let board = analysis.board();
    let free = |s: Side| {
        let row = s.promotion_row();
        to_count(
            (row % 2..BOARD_SIZE)
                .step_by(2)
                .filter(|&col| board.is_free(Position::new(row, col)))
                .count(),
        )
    };
    ratio(
        MAX_UNOCCUPIED_PROMOTION_SQUARES,
        free(side),
        free(side.opponent()),
    )
}
