//! Game review report types

use serde::{Deserialize, Serialize};

use crate::themes::{CriticalMoment, ThemeScore, VariationAnalysis};

/// Placeholder label when a side has no improving or declining theme.
pub const NO_THEME: &str = "none";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameInfo {
    pub white: String,
    pub black: String,
    pub result: String,
}

/// Everything computed for one side over the whole game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SideReview {
    pub analysis: VariationAnalysis,
    pub critical_moments: Vec<CriticalMoment>,
    pub average_scores: ThemeScore,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurningPoint {
    /// Full-move number, starting at 1
    pub move_number: usize,
    /// Side whose themes the move shifted, "White" or "Black"
    pub player: String,
    #[serde(rename = "move")]
    pub san: String,
    /// E.g. "material: -100.00"
    pub impact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub white_best_theme: String,
    pub white_worst_theme: String,
    pub black_best_theme: String,
    pub black_worst_theme: String,
    pub turning_points: Vec<TurningPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameReview {
    pub game_info: GameInfo,
    pub white: SideReview,
    pub black: SideReview,
    pub insights: Insights,
}
