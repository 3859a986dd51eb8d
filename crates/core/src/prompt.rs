//! Plain-text position summary for language-model prompts

use shakmaty::{Color, Position};
use std::fmt::Write;

use crate::board::Board;
use crate::error::Result;
use crate::parser::position_from_fen;
use crate::themes::{StandardThemeScorer, ThemeScore, ThemeScorer};

/// Side to move, both sides' theme scores and the vulnerability report.
pub fn describe_position(fen: &str) -> Result<String> {
    let position = position_from_fen(fen)?;
    let scorer = StandardThemeScorer;

    let mut out = String::new();
    let _ = writeln!(out, "Position: {}", fen.trim());
    let _ = writeln!(out, "Side to move: {}", side_name(position.turn()));
    out.push('\n');

    for side in [Color::White, Color::Black] {
        let score = scorer.score(position.board(), side);
        write_scores(&mut out, side, &score);
        out.push('\n');
    }

    out.push_str(&Board::new(fen).report());
    Ok(out)
}

fn side_name(color: Color) -> &'static str {
    color.fold_wb("White", "Black")
}

fn write_scores(out: &mut String, side: Color, score: &ThemeScore) {
    let _ = writeln!(out, "{} themes:", side_name(side));
    let _ = writeln!(out, "- Material balance: {:+} centipawns", score.material);
    let _ = writeln!(out, "- Mobility: {} squares reachable by pieces", score.mobility);
    let _ = writeln!(out, "- Space: {} squares controlled in the opponent's half", score.space);
    let _ = writeln!(out, "- King safety: {} (lower is safer)", score.king_safety);
    let _ = writeln!(out, "- Pawn structure weakness: {:.0}%", score.positional);
}
