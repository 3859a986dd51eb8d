//! PGN parsing
//!
//! Games are read with tags and mainline SAN tokens only. Moves are not
//! replayed here: legality is checked when a game is analysed, so a game
//! with a broken move still parses and the analysis reports where it broke.

use pgn_reader::{RawTag, SanPlus, Skip, Visitor};
use std::fs;
use std::io::Cursor;
use std::ops::ControlFlow;
use std::path::Path;

use super::fen::STARTING_FEN;
use crate::error::{Error, Result};

/// Header fields the review uses plus the mainline moves
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PgnGame {
    pub white: Option<String>,
    pub black: Option<String>,
    pub result: Option<String>,
    /// Value of the `[FEN]` tag, if the game does not start from the initial position
    pub setup_fen: Option<String>,
    pub moves: Vec<String>,
}

impl PgnGame {
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    pub fn white_name(&self) -> &str {
        self.white.as_deref().unwrap_or("Unknown")
    }

    pub fn black_name(&self) -> &str {
        self.black.as_deref().unwrap_or("Unknown")
    }

    pub fn result_or_unknown(&self) -> &str {
        self.result.as_deref().unwrap_or("*")
    }

    pub fn starting_fen(&self) -> &str {
        self.setup_fen.as_deref().unwrap_or(STARTING_FEN)
    }

    pub fn summary(&self) -> String {
        format!(
            "{} vs {} - {}",
            self.white_name(),
            self.black_name(),
            self.result_or_unknown()
        )
    }
}

/// Fills one `PgnGame` from tags through movetext. Other tags are ignored.
struct GameCollector;

impl Visitor for GameCollector {
    type Tags = PgnGame;
    type Movetext = PgnGame;
    type Output = PgnGame;

    fn begin_tags(&mut self) -> ControlFlow<Self::Output, Self::Tags> {
        ControlFlow::Continue(PgnGame::default())
    }

    fn tag(&mut self, game: &mut Self::Tags, name: &[u8], value: RawTag<'_>) -> ControlFlow<Self::Output> {
        let slot = match name {
            b"White" => &mut game.white,
            b"Black" => &mut game.black,
            b"Result" => &mut game.result,
            b"FEN" => &mut game.setup_fen,
            _ => return ControlFlow::Continue(()),
        };
        *slot = Some(value.decode_utf8_lossy().into_owned());
        ControlFlow::Continue(())
    }

    fn begin_movetext(&mut self, game: Self::Tags) -> ControlFlow<Self::Output, Self::Movetext> {
        ControlFlow::Continue(game)
    }

    fn san(&mut self, game: &mut Self::Movetext, san: SanPlus) -> ControlFlow<Self::Output> {
        game.moves.push(san.san.to_string());
        ControlFlow::Continue(())
    }

    // Mainline only.
    fn begin_variation(&mut self, _game: &mut Self::Movetext) -> ControlFlow<Self::Output, Skip> {
        ControlFlow::Continue(Skip(true))
    }

    fn end_game(&mut self, game: Self::Movetext) -> Self::Output {
        game
    }
}

pub fn parse_pgn_file<P: AsRef<Path>>(path: P) -> Result<Vec<PgnGame>> {
    let contents = fs::read_to_string(path)?;
    parse_pgn_string(&contents)
}

pub fn parse_pgn_string(pgn: &str) -> Result<Vec<PgnGame>> {
    let mut reader = pgn_reader::Reader::new(Cursor::new(pgn.as_bytes()));
    let mut games = Vec::new();

    loop {
        match reader.read_game(&mut GameCollector) {
            Ok(Some(game)) => games.push(game),
            Ok(None) => break,
            Err(e) => return Err(Error::Pgn(e.to_string())),
        }
    }

    if games.is_empty() {
        Err(Error::Pgn("no games found".to_string()))
    } else {
        Ok(games)
    }
}
