use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use shakmaty::Color;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use chess_review_core::{
    analyze_variation_themes, describe_position, find_critical_moments, parse_pgn_file, Board, GameReviewGenerator,
    ReviewConfig,
};

#[derive(Parser)]
#[command(name = "chess-review", version, about = "Static threat analysis and theme-based game review")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print hanging and semi-protected pieces for a position
    Board {
        /// FEN, or just its piece-placement field
        fen: String,
    },
    /// Print theme scores and vulnerabilities for a position
    Describe { fen: String },
    /// Score a move sequence from first to last position (JSON)
    Variation {
        fen: String,
        /// Side to score, "w" or "b"
        #[arg(long, value_parser = parse_side)]
        side: Color,
        /// Moves in SAN
        moves: Vec<String>,
    },
    /// List moves that shift a theme past the threshold (JSON)
    Moments {
        fen: String,
        #[arg(long, value_parser = parse_side)]
        side: Color,
        #[arg(long, default_value_t = 0.5)]
        threshold: f64,
        moves: Vec<String>,
    },
    /// Review a game from a PGN file (JSON)
    Review {
        pgn: PathBuf,
        /// Overrides the configured critical-moment threshold
        #[arg(long)]
        threshold: Option<f64>,
        /// JSON config file; otherwise REVIEW_* environment variables are used
        #[arg(long)]
        config: Option<PathBuf>,
        /// Which game of the file to review, starting at 1
        #[arg(long, default_value_t = 1)]
        game: usize,
    },
}

fn parse_side(value: &str) -> Result<Color, String> {
    let mut chars = value.chars();
    match (chars.next().and_then(Color::from_char), chars.next()) {
        (Some(color), None) => Ok(color),
        _ => Err(format!("expected 'w' or 'b', got '{}'", value)),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Board { fen } => {
            print!("{}", Board::new(&fen).report());
        }
        Command::Describe { fen } => {
            print!("{}", describe_position(&fen)?);
        }
        Command::Variation { fen, side, moves } => {
            let analysis = analyze_variation_themes(&fen, &moves, side)?;
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
        Command::Moments {
            fen,
            side,
            threshold,
            moves,
        } => {
            let moments = find_critical_moments(&fen, &moves, side, threshold)?;
            println!("{}", serde_json::to_string_pretty(&moments)?);
        }
        Command::Review {
            pgn,
            threshold,
            config,
            game,
        } => {
            let mut review_config = match config {
                Some(path) => ReviewConfig::from_file(&path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => ReviewConfig::from_env(),
            };
            if let Some(threshold) = threshold {
                review_config.critical_threshold = threshold;
            }

            let games = parse_pgn_file(&pgn).with_context(|| format!("reading {}", pgn.display()))?;
            if game == 0 || game > games.len() {
                bail!("game {} requested but {} has {} game(s)", game, pgn.display(), games.len());
            }
            let selected = &games[game - 1];
            info!(game = %selected.summary(), moves = selected.move_count(), "reviewing");

            let review = GameReviewGenerator::new(review_config).review_game(selected)?;
            println!("{}", serde_json::to_string_pretty(&review)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_side() {
        assert_eq!(parse_side("w"), Ok(Color::White));
        assert_eq!(parse_side("b"), Ok(Color::Black));
        assert!(parse_side("white").is_err());
        assert!(parse_side("").is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_variation_args() {
        let cli = Cli::try_parse_from([
            "chess-review",
            "variation",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "--side",
            "b",
            "e4",
            "e5",
        ])
        .unwrap();

        match cli.command {
            Command::Variation { side, moves, .. } => {
                assert_eq!(side, Color::Black);
                assert_eq!(moves, vec!["e4", "e5"]);
            }
            _ => panic!("wrong subcommand"),
        }
    }
}
