//! Theme score and delta types

use serde::{Deserialize, Serialize};
use std::fmt;

/// A positional axis a position is scored on.
///
/// The declaration order is the tie-break order used when ranking changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Theme {
    /// Material balance, centipawns
    Material,
    /// Squares reachable by pieces
    Mobility,
    /// Squares controlled in the opponent's half
    Space,
    /// Pawn weakness percentage, 0 to 100
    Positional,
    /// King exposure, lower is safer
    KingSafety,
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::Material,
        Theme::Mobility,
        Theme::Space,
        Theme::Positional,
        Theme::KingSafety,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Material => "material",
            Theme::Mobility => "mobility",
            Theme::Space => "space",
            Theme::Positional => "positional",
            Theme::KingSafety => "kingSafety",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scores of one position for one side. Axes use different units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeScore {
    pub material: f64,
    pub mobility: f64,
    pub space: f64,
    pub positional: f64,
    pub king_safety: f64,
}

impl ThemeScore {
    pub fn get(&self, theme: Theme) -> f64 {
        match theme {
            Theme::Material => self.material,
            Theme::Mobility => self.mobility,
            Theme::Space => self.space,
            Theme::Positional => self.positional,
            Theme::KingSafety => self.king_safety,
        }
    }

    pub fn from_fn(mut f: impl FnMut(Theme) -> f64) -> Self {
        ThemeScore {
            material: f(Theme::Material),
            mobility: f(Theme::Mobility),
            space: f(Theme::Space),
            positional: f(Theme::Positional),
            king_safety: f(Theme::KingSafety),
        }
    }

    /// Arithmetic mean per axis; all zeros for an empty slice.
    pub fn mean(scores: &[ThemeScore]) -> ThemeScore {
        if scores.is_empty() {
            return ThemeScore::default();
        }
        let n = scores.len() as f64;
        ThemeScore::from_fn(|theme| scores.iter().map(|s| s.get(theme)).sum::<f64>() / n)
    }
}

/// How one theme moved between two positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeChange {
    pub theme: Theme,
    pub initial_score: f64,
    pub final_score: f64,
    pub change: f64,
    /// `change / initial_score` as a fraction, 0 when the initial score is 0
    pub percent_change: f64,
}

impl ThemeChange {
    pub fn between(theme: Theme, initial: &ThemeScore, last: &ThemeScore) -> Self {
        let initial_score = initial.get(theme);
        let final_score = last.get(theme);
        let change = final_score - initial_score;
        let percent_change = if initial_score == 0.0 {
            0.0
        } else {
            change / initial_score
        };

        ThemeChange {
            theme,
            initial_score,
            final_score,
            change,
            percent_change,
        }
    }

    /// One change per theme, in [`Theme::ALL`] order.
    pub fn all_between(initial: &ThemeScore, last: &ThemeScore) -> Vec<ThemeChange> {
        Theme::ALL
            .iter()
            .map(|&theme| ThemeChange::between(theme, initial, last))
            .collect()
    }
}

/// Sum of the raw per-theme changes.
///
/// Units are mixed (centipawns, square counts, percentages); nothing is
/// normalised. Callers that want a comparable figure should not use this.
pub fn raw_overall_change(changes: &[ThemeChange]) -> f64 {
    changes.iter().map(|c| c.change).sum()
}

/// Themes scored from the first to the last position of a move sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariationAnalysis {
    pub theme_changes: Vec<ThemeChange>,
    pub overall_change: f64,
    /// Largest positive change, if any theme went up
    pub strongest_improvement: Option<ThemeChange>,
    /// Most negative change, if any theme went down
    pub biggest_decline: Option<ThemeChange>,
    /// Initial position followed by the position after every move
    pub move_by_move_scores: Vec<ThemeScore>,
}

/// A single move that shifted at least one theme past the threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalMoment {
    /// Zero-based index into the move list
    pub move_index: usize,
    #[serde(rename = "move")]
    pub san: String,
    /// Only the themes that crossed the threshold
    pub theme_changes: Vec<ThemeChange>,
}

impl CriticalMoment {
    /// The change with the largest magnitude.
    pub fn largest_change(&self) -> Option<&ThemeChange> {
        self.theme_changes
            .iter()
            .fold(None, |best: Option<&ThemeChange>, c| match best {
                Some(b) if b.change.abs() >= c.change.abs() => Some(b),
                _ => Some(c),
            })
    }
}
