//! Full-FEN loading for move replay

use shakmaty::{fen::Fen, CastlingMode, Chess};

use crate::error::{Error, Result};

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Parses a full FEN into a playable position.
pub fn position_from_fen(fen: &str) -> Result<Chess> {
    let parsed: Fen = fen
        .trim()
        .parse()
        .map_err(|e| Error::InvalidFen(format!("{}: {}", fen, e)))?;

    parsed
        .into_position(CastlingMode::Standard)
        .map_err(|e| Error::InvalidFen(format!("{}: {}", fen, e)))
}
