//! Five-axis static scoring of a position

use shakmaty::{attacks, Bitboard, Board, Color, Position, Role, Square};

use super::types::ThemeScore;
use crate::error::Result;
use crate::parser::position_from_fen;

/// Scores a position along every [`Theme`](super::Theme) for one side.
pub trait ThemeScorer {
    fn score(&self, board: &Board, side: Color) -> ThemeScore;
}

/// Hand-written heuristics; see the axis functions for what each counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardThemeScorer;

impl ThemeScorer for StandardThemeScorer {
    fn score(&self, board: &Board, side: Color) -> ThemeScore {
        ThemeScore {
            material: material(board, side),
            mobility: mobility(board, side),
            space: space(board, side),
            positional: pawn_weakness(board, side),
            king_safety: king_exposure(board, side),
        }
    }
}

/// Scores a full FEN with [`StandardThemeScorer`].
pub fn score_fen(fen: &str, side: Color) -> Result<ThemeScore> {
    let position = position_from_fen(fen)?;
    Ok(StandardThemeScorer.score(position.board(), side))
}

pub fn piece_value(role: Role) -> i32 {
    match role {
        Role::Pawn => 100,
        Role::Knight => 320,
        Role::Bishop => 330,
        Role::Rook => 500,
        Role::Queen => 900,
        Role::King => 0,
    }
}

fn side_material(board: &Board, color: Color) -> i32 {
    board
        .by_color(color)
        .into_iter()
        .filter_map(|sq| board.piece_at(sq))
        .map(|piece| piece_value(piece.role))
        .sum()
}

/// Own material minus the opponent's, in centipawns.
fn material(board: &Board, side: Color) -> f64 {
    f64::from(side_material(board, side) - side_material(board, !side))
}

/// Squares attacked by knights, bishops, rooks and queens, own pieces excluded.
fn mobility(board: &Board, side: Color) -> f64 {
    let own = board.by_color(side);
    let movers = own & !board.pawns() & !board.kings();

    movers
        .into_iter()
        .map(|sq| (board.attacks_from(sq) & !own).count())
        .sum::<usize>() as f64
}

/// Distinct squares in the opponent's half attacked by any piece.
fn space(board: &Board, side: Color) -> f64 {
    let controlled = board
        .by_color(side)
        .into_iter()
        .fold(Bitboard::EMPTY, |acc, sq| acc | board.attacks_from(sq));

    controlled
        .into_iter()
        .filter(|&sq| in_opponent_half(sq, side))
        .count() as f64
}

fn in_opponent_half(sq: Square, side: Color) -> bool {
    let rank = rank_index(sq);
    match side {
        Color::White => rank >= 4,
        Color::Black => rank < 4,
    }
}

/// Percentage of own pawns that are doubled or isolated.
fn pawn_weakness(board: &Board, side: Color) -> f64 {
    let pawns = board.pawns() & board.by_color(side);
    let total = pawns.count();
    if total == 0 {
        return 0.0;
    }

    let mut per_file = [0usize; 8];
    for sq in pawns {
        per_file[file_index(sq)] += 1;
    }

    let weak = pawns
        .into_iter()
        .filter(|&sq| {
            let file = file_index(sq);
            let doubled = per_file[file] > 1;
            let left = file > 0 && per_file[file - 1] > 0;
            let right = file < 7 && per_file[file + 1] > 0;
            doubled || !(left || right)
        })
        .count();

    weak as f64 / total as f64 * 100.0
}

/// Enemy attacks on the king and its neighbours, plus one per missing pawn
/// on the three squares straight in front of the king. Lower is safer.
fn king_exposure(board: &Board, side: Color) -> f64 {
    let Some(king) = board.king_of(side) else {
        return 0.0;
    };

    let zone = attacks::king_attacks(king) | Bitboard::from_square(king);
    let pressure: usize = zone
        .into_iter()
        .map(|sq| board.attacks_to(sq, !side, board.occupied()).count())
        .sum();

    let own_pawns = board.pawns() & board.by_color(side);
    let missing_shield = shield_squares(king, side)
        .into_iter()
        .filter(|&sq| !own_pawns.contains(sq))
        .count();

    (pressure + missing_shield) as f64
}

fn shield_squares(king: Square, side: Color) -> Vec<Square> {
    let file = file_index(king) as i32;
    let rank = rank_index(king) as i32 + side.fold_wb(1, -1);
    if !(0..8).contains(&rank) {
        return Vec::new();
    }

    (file - 1..=file + 1)
        .filter(|f| (0..8).contains(f))
        .map(|f| Square::new((rank * 8 + f) as u32))
        .collect()
}

fn file_index(sq: Square) -> usize {
    u32::from(sq) as usize % 8
}

fn rank_index(sq: Square) -> usize {
    u32::from(sq) as usize / 8
}
