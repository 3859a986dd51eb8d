//! Move-sequence theme analysis

use shakmaty::{san::SanPlus, Chess, Color, Position};
use tracing::debug;

use super::scorer::{StandardThemeScorer, ThemeScorer};
use super::types::{raw_overall_change, CriticalMoment, Theme, ThemeChange, ThemeScore, VariationAnalysis};
use crate::error::{Error, Result};
use crate::parser::position_from_fen;

/// Replays SAN sequences and tracks how the themes move for one side.
///
/// Holds nothing but the scorer, so one analyzer can serve any number of
/// independent calls.
#[derive(Debug, Clone, Default)]
pub struct VariationAnalyzer<S = StandardThemeScorer> {
    scorer: S,
}

impl VariationAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: ThemeScorer> VariationAnalyzer<S> {
    pub fn with_scorer(scorer: S) -> Self {
        Self { scorer }
    }

    /// Score of the starting position followed by the score after each move.
    pub fn scores(&self, fen: &str, moves: &[impl AsRef<str>], side: Color) -> Result<Vec<ThemeScore>> {
        let positions = replay(fen, moves)?;
        Ok(positions
            .iter()
            .map(|position| self.scorer.score(position.board(), side))
            .collect())
    }

    pub fn analyze_variation(&self, fen: &str, moves: &[impl AsRef<str>], side: Color) -> Result<VariationAnalysis> {
        let scores = self.scores(fen, moves, side)?;
        Ok(summarize(scores))
    }

    pub fn find_critical_moments(
        &self,
        fen: &str,
        moves: &[impl AsRef<str>],
        side: Color,
        threshold: f64,
    ) -> Result<Vec<CriticalMoment>> {
        let scores = self.scores(fen, moves, side)?;
        let moments = critical_moments(&scores, moves, threshold);
        debug!(?side, threshold, moments = moments.len(), "critical moments found");
        Ok(moments)
    }
}

/// [`VariationAnalyzer::analyze_variation`] with the standard scorer.
pub fn analyze_variation_themes(fen: &str, moves: &[impl AsRef<str>], side: Color) -> Result<VariationAnalysis> {
    VariationAnalyzer::new().analyze_variation(fen, moves, side)
}

/// [`VariationAnalyzer::find_critical_moments`] with the standard scorer.
pub fn find_critical_moments(
    fen: &str,
    moves: &[impl AsRef<str>],
    side: Color,
    threshold: f64,
) -> Result<Vec<CriticalMoment>> {
    VariationAnalyzer::new().find_critical_moments(fen, moves, side, threshold)
}

/// Builds the analysis from first to last snapshot.
pub(crate) fn summarize(scores: Vec<ThemeScore>) -> VariationAnalysis {
    let first = scores.first().copied().unwrap_or_default();
    let last = scores.last().copied().unwrap_or_default();
    let theme_changes = ThemeChange::all_between(&first, &last);

    // Strict comparisons keep the earliest theme on ties.
    let mut strongest_improvement: Option<&ThemeChange> = None;
    let mut biggest_decline: Option<&ThemeChange> = None;
    for change in &theme_changes {
        if change.change > strongest_improvement.map_or(0.0, |c| c.change) {
            strongest_improvement = Some(change);
        }
        if change.change < biggest_decline.map_or(0.0, |c| c.change) {
            biggest_decline = Some(change);
        }
    }

    VariationAnalysis {
        overall_change: raw_overall_change(&theme_changes),
        strongest_improvement: strongest_improvement.cloned(),
        biggest_decline: biggest_decline.cloned(),
        theme_changes,
        move_by_move_scores: scores,
    }
}

/// `scores` holds one more entry than `moves`: the position before each move.
pub(crate) fn critical_moments(scores: &[ThemeScore], moves: &[impl AsRef<str>], threshold: f64) -> Vec<CriticalMoment> {
    scores
        .windows(2)
        .zip(moves)
        .enumerate()
        .filter_map(|(move_index, (pair, san))| {
            let theme_changes: Vec<ThemeChange> = Theme::ALL
                .iter()
                .map(|&theme| ThemeChange::between(theme, &pair[0], &pair[1]))
                .filter(|c| c.change.abs() > threshold)
                .collect();

            if theme_changes.is_empty() {
                return None;
            }
            Some(CriticalMoment {
                move_index,
                san: san.as_ref().to_string(),
                theme_changes,
            })
        })
        .collect()
}

/// Positions from `fen` through every move; the first entry is the start.
///
/// Any SAN that does not parse or is not legal aborts the whole replay.
fn replay(fen: &str, moves: &[impl AsRef<str>]) -> Result<Vec<Chess>> {
    let mut position = position_from_fen(fen)?;
    let mut positions = Vec::with_capacity(moves.len() + 1);
    positions.push(position.clone());

    for (index, token) in moves.iter().enumerate() {
        let token = token.as_ref();
        let illegal = |reason: String| Error::IllegalMove {
            index,
            san: token.to_string(),
            reason,
        };

        let san: SanPlus = token.parse().map_err(|e| illegal(format!("{}", e)))?;
        let mv = san.san.to_move(&position).map_err(|e| illegal(format!("{}", e)))?;
        position = position
            .play(mv)
            .map_err(|_| illegal("rejected by position".to_string()))?;

        debug!(index, san = token, "replayed move");
        positions.push(position.clone());
    }

    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::STARTING_FEN;

    const ITALIAN: [&str; 6] = ["e4", "e5", "Nf3", "Nc6", "Bc4", "Bc5"];

    #[test]
    fn test_empty_move_list() {
        let empty: [&str; 0] = [];
        let analysis = analyze_variation_themes(STARTING_FEN, &empty, Color::White).unwrap();

        assert_eq!(analysis.move_by_move_scores.len(), 1);
        assert!(analysis.theme_changes.iter().all(|c| c.change == 0.0));
        assert_eq!(analysis.overall_change, 0.0);
        assert!(analysis.strongest_improvement.is_none());
        assert!(analysis.biggest_decline.is_none());
    }

    #[test]
    fn test_one_snapshot_per_move() {
        let analysis = analyze_variation_themes(STARTING_FEN, &ITALIAN, Color::White).unwrap();

        assert_eq!(analysis.move_by_move_scores.len(), ITALIAN.len() + 1);
        assert_eq!(analysis.theme_changes.len(), 5);
        let themes: Vec<Theme> = analysis.theme_changes.iter().map(|c| c.theme).collect();
        assert_eq!(themes, Theme::ALL.to_vec());
    }

    #[test]
    fn test_changes_compare_first_and_last() {
        let analysis = analyze_variation_themes(STARTING_FEN, &ITALIAN, Color::White).unwrap();
        let first = analysis.move_by_move_scores.first().unwrap();
        let last = analysis.move_by_move_scores.last().unwrap();

        for change in &analysis.theme_changes {
            assert_eq!(change.initial_score, first.get(change.theme));
            assert_eq!(change.final_score, last.get(change.theme));
            assert_eq!(change.change, last.get(change.theme) - first.get(change.theme));
        }
    }

    #[test]
    fn test_overall_change_is_sum_of_changes() {
        for side in [Color::White, Color::Black] {
            let analysis = analyze_variation_themes(STARTING_FEN, &ITALIAN, side).unwrap();
            let sum: f64 = analysis.theme_changes.iter().map(|c| c.change).sum();
            assert_eq!(analysis.overall_change, sum);
        }
    }

    #[test]
    fn test_opening_moves_improve_mobility() {
        let analysis = analyze_variation_themes(STARTING_FEN, &ITALIAN, Color::White).unwrap();
        let mobility = &analysis.theme_changes[1];

        assert_eq!(mobility.theme, Theme::Mobility);
        assert!(mobility.change > 0.0);
        let best = analysis.strongest_improvement.unwrap();
        assert!(best.change >= mobility.change);
    }

    #[test]
    fn test_capture_is_a_material_decline_for_the_victim() {
        // 1. e4 d5 2. exd5: black loses a pawn.
        let analysis = analyze_variation_themes(STARTING_FEN, &["e4", "d5", "exd5"], Color::Black).unwrap();
        let material = &analysis.theme_changes[0];

        assert_eq!(material.change, -100.0);
        assert_eq!(analysis.biggest_decline.unwrap().theme, Theme::Material);
    }

    #[test]
    fn test_analysis_is_repeatable() {
        let a = analyze_variation_themes(STARTING_FEN, &ITALIAN, Color::Black).unwrap();
        let b = analyze_variation_themes(STARTING_FEN, &ITALIAN, Color::Black).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_illegal_move_aborts() {
        let err = analyze_variation_themes(STARTING_FEN, &["e4", "e4"], Color::White).unwrap_err();

        match err {
            Error::IllegalMove { index, san, .. } => {
                assert_eq!(index, 1);
                assert_eq!(san, "e4");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_unparsable_san_aborts() {
        let err = find_critical_moments(STARTING_FEN, &["??"], Color::White, 0.5).unwrap_err();
        assert!(matches!(err, Error::IllegalMove { index: 0, .. }));
    }

    #[test]
    fn test_check_suffix_is_accepted() {
        let moves = ["e4", "e5", "Qh5", "Nc6", "Bc4", "Nf6", "Qxf7#"];
        let scores = VariationAnalyzer::new().scores(STARTING_FEN, &moves, Color::White).unwrap();
        assert_eq!(scores.len(), 8);
    }

    #[test]
    fn test_critical_moments_follow_move_order() {
        let moments = find_critical_moments(STARTING_FEN, &ITALIAN, Color::White, 0.5).unwrap();

        assert!(!moments.is_empty());
        assert!(moments.windows(2).all(|w| w[0].move_index < w[1].move_index));
        for moment in &moments {
            assert_eq!(moment.san, ITALIAN[moment.move_index]);
            assert!(moment.theme_changes.iter().all(|c| c.change.abs() > 0.5));
        }
    }

    #[test]
    fn test_higher_threshold_gives_subset() {
        let low = find_critical_moments(STARTING_FEN, &ITALIAN, Color::White, 0.5).unwrap();
        let high = find_critical_moments(STARTING_FEN, &ITALIAN, Color::White, 3.0).unwrap();

        assert!(high.len() <= low.len());
        let low_indices: Vec<usize> = low.iter().map(|m| m.move_index).collect();
        assert!(high.iter().all(|m| low_indices.contains(&m.move_index)));
    }

    #[test]
    fn test_huge_threshold_finds_nothing() {
        let moments = find_critical_moments(STARTING_FEN, &ITALIAN, Color::White, 10_000.0).unwrap();
        assert!(moments.is_empty());
    }
}
