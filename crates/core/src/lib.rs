//! Chess Review Core Library
//!
//! Static threat analysis of single positions and theme-by-theme review of
//! whole games.

pub mod board;
pub mod config;
pub mod error;
pub mod parser;
pub mod prompt;
pub mod review;
pub mod themes;

pub use board::{Board, VulnerabilityRecord};
pub use config::ReviewConfig;
pub use error::{Error, Result};
pub use parser::{parse_pgn_file, parse_pgn_string, PgnGame};
pub use prompt::describe_position;
pub use review::{generate_game_review, GameReview, GameReviewGenerator};
pub use themes::{
    analyze_variation_themes, find_critical_moments, score_fen, CriticalMoment, StandardThemeScorer, Theme,
    ThemeChange, ThemeScore, ThemeScorer, VariationAnalysis, VariationAnalyzer,
};
