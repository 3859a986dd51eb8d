//! Positional themes and how they shift over a sequence of moves

mod scorer;
mod types;
mod variation;

pub use scorer::{piece_value, score_fen, StandardThemeScorer, ThemeScorer};
pub use types::{raw_overall_change, CriticalMoment, Theme, ThemeChange, ThemeScore, VariationAnalysis};
pub use variation::{analyze_variation_themes, find_critical_moments, VariationAnalyzer};

pub(crate) use variation::{critical_moments, summarize};
