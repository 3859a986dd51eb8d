//! Parsers for chess game formats
//!
//! Currently supports:
//! - FEN (full positions for move replay)
//! - PGN (Portable Game Notation)

pub mod fen;
pub mod pgn;

pub use fen::{position_from_fen, STARTING_FEN};
pub use pgn::{parse_pgn_file, parse_pgn_string, PgnGame};
