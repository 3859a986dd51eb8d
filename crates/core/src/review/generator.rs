//! Whole-game review built from both sides' theme analyses

use shakmaty::Color;
use tracing::info;

use super::types::*;
use crate::config::ReviewConfig;
use crate::error::{Error, Result};
use crate::parser::{parse_pgn_string, PgnGame};
use crate::themes::{
    critical_moments, summarize, CriticalMoment, StandardThemeScorer, ThemeChange, ThemeScore, ThemeScorer,
    VariationAnalyzer,
};

pub struct GameReviewGenerator<S = StandardThemeScorer> {
    analyzer: VariationAnalyzer<S>,
    config: ReviewConfig,
}

impl GameReviewGenerator {
    pub fn new(config: ReviewConfig) -> Self {
        Self {
            analyzer: VariationAnalyzer::new(),
            config,
        }
    }
}

impl<S: ThemeScorer> GameReviewGenerator<S> {
    pub fn with_scorer(scorer: S, config: ReviewConfig) -> Self {
        Self {
            analyzer: VariationAnalyzer::with_scorer(scorer),
            config,
        }
    }

    pub fn config(&self) -> &ReviewConfig {
        &self.config
    }

    /// Reviews the first game of a PGN text.
    pub fn review_pgn(&self, pgn: &str) -> Result<GameReview> {
        let game = parse_pgn_string(pgn)?
            .into_iter()
            .next()
            .ok_or_else(|| Error::Pgn("no games found".to_string()))?;
        self.review_game(&game)
    }

    /// Both sides are scored over the same move list; the side only decides
    /// whose point of view each position is scored from.
    pub fn review_game(&self, game: &PgnGame) -> Result<GameReview> {
        self.config.validate()?;

        let white = self.review_side(game, Color::White)?;
        let black = self.review_side(game, Color::Black)?;
        let turning_points = self.turning_points(&white.critical_moments, &black.critical_moments);

        info!(
            game = %game.summary(),
            moves = game.move_count(),
            turning_points = turning_points.len(),
            "game reviewed"
        );

        let insights = Insights {
            white_best_theme: theme_label(white.analysis.strongest_improvement.as_ref()),
            white_worst_theme: theme_label(white.analysis.biggest_decline.as_ref()),
            black_best_theme: theme_label(black.analysis.strongest_improvement.as_ref()),
            black_worst_theme: theme_label(black.analysis.biggest_decline.as_ref()),
            turning_points,
        };

        Ok(GameReview {
            game_info: GameInfo {
                white: game.white_name().to_string(),
                black: game.black_name().to_string(),
                result: game.result_or_unknown().to_string(),
            },
            white,
            black,
            insights,
        })
    }

    fn review_side(&self, game: &PgnGame, side: Color) -> Result<SideReview> {
        let scores = self.analyzer.scores(game.starting_fen(), &game.moves, side)?;
        let critical_moments = critical_moments(&scores, &game.moves, self.config.critical_threshold);
        let average_scores = ThemeScore::mean(&scores);

        Ok(SideReview {
            analysis: summarize(scores),
            critical_moments,
            average_scores,
        })
    }

    /// Moments from both sides, largest single theme shift first.
    fn turning_points(&self, white: &[CriticalMoment], black: &[CriticalMoment]) -> Vec<TurningPoint> {
        let mut ranked: Vec<(f64, TurningPoint)> = white
            .iter()
            .map(|m| (Color::White, m))
            .chain(black.iter().map(|m| (Color::Black, m)))
            .filter_map(|(side, moment)| {
                let largest = moment.largest_change()?;
                Some((largest.change.abs(), turning_point(side, moment, largest)))
            })
            .collect();

        // Stable sort: equal impacts keep White first, then move order.
        ranked.sort_by(|a, b| b.0.total_cmp(&a.0));
        ranked
            .into_iter()
            .take(self.config.max_turning_points)
            .map(|(_, point)| point)
            .collect()
    }
}

/// [`GameReviewGenerator`] with the standard scorer and the given threshold.
pub fn generate_game_review(pgn: &str, critical_threshold: f64) -> Result<GameReview> {
    GameReviewGenerator::new(ReviewConfig::with_threshold(critical_threshold)).review_pgn(pgn)
}

fn turning_point(side: Color, moment: &CriticalMoment, largest: &ThemeChange) -> TurningPoint {
    TurningPoint {
        move_number: moment.move_index / 2 + 1,
        player: side.fold_wb("White", "Black").to_string(),
        san: moment.san.clone(),
        impact: format!("{}: {:+.2}", largest.theme, largest.change),
    }
}

fn theme_label(change: Option<&ThemeChange>) -> String {
    change
        .map(|c| c.theme.to_string())
        .unwrap_or_else(|| NO_THEME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHOLARS_MATE: &str = r#"[White "Alice"]
[Black "Bob"]
[Result "1-0"]

1. e4 e5 2. Qh5 Nc6 3. Bc4 Nf6 4. Qxf7# 1-0
"#;

    #[test]
    fn test_game_info_from_headers() {
        let review = generate_game_review(SCHOLARS_MATE, 0.5).unwrap();

        assert_eq!(review.game_info.white, "Alice");
        assert_eq!(review.game_info.black, "Bob");
        assert_eq!(review.game_info.result, "1-0");
    }

    #[test]
    fn test_missing_headers_fall_back() {
        let review = generate_game_review("1. e4 e5 *\n", 0.5).unwrap();

        assert_eq!(review.game_info.white, "Unknown");
        assert_eq!(review.game_info.black, "Unknown");
        assert_eq!(review.game_info.result, "*");
    }

    #[test]
    fn test_both_sides_replay_every_move() {
        let review = generate_game_review(SCHOLARS_MATE, 0.5).unwrap();

        assert_eq!(review.white.analysis.move_by_move_scores.len(), 8);
        assert_eq!(review.black.analysis.move_by_move_scores.len(), 8);
        assert_eq!(
            review.white.average_scores,
            ThemeScore::mean(&review.white.analysis.move_by_move_scores)
        );
    }

    #[test]
    fn test_losing_side_worst_theme_is_material() {
        let review = generate_game_review(SCHOLARS_MATE, 0.5).unwrap();

        assert_eq!(review.insights.black_worst_theme, "material");
        assert_eq!(review.black.analysis.theme_changes[0].change, -100.0);
    }

    #[test]
    fn test_turning_points_are_ranked_and_capped() {
        let review = generate_game_review(SCHOLARS_MATE, 0.5).unwrap();
        let points = &review.insights.turning_points;

        assert!(!points.is_empty());
        assert!(points.len() <= 10);

        let magnitude = |p: &TurningPoint| -> f64 {
            let value = p.impact.rsplit(": ").next().unwrap();
            value.parse::<f64>().unwrap().abs()
        };
        assert!(points.windows(2).all(|w| magnitude(&w[0]) >= magnitude(&w[1])));

        // Qxf7 wins a pawn: the biggest swing for either side. Check suffixes are not kept.
        assert_eq!(points[0].san, "Qxf7");
        assert_eq!(points[0].player, "White");
        assert_eq!(points[0].move_number, 4);
        assert!(points[0].impact.starts_with("material: "));
    }

    #[test]
    fn test_turning_point_limit_from_config() {
        let config = ReviewConfig {
            critical_threshold: 0.0,
            max_turning_points: 3,
        };
        let review = GameReviewGenerator::new(config).review_pgn(SCHOLARS_MATE).unwrap();
        assert_eq!(review.insights.turning_points.len(), 3);
    }

    #[test]
    fn test_empty_game_has_no_themes() {
        let review = generate_game_review("[White \"A\"]\n\n*\n", 0.5).unwrap();

        assert_eq!(review.insights.white_best_theme, NO_THEME);
        assert_eq!(review.insights.black_worst_theme, NO_THEME);
        assert!(review.insights.turning_points.is_empty());
        assert_eq!(review.white.analysis.move_by_move_scores.len(), 1);
    }

    #[test]
    fn test_illegal_move_fails_review() {
        let err = generate_game_review("1. e4 e4 *\n", 0.5).unwrap_err();
        assert!(matches!(err, Error::IllegalMove { index: 1, .. }));
    }

    #[test]
    fn test_negative_threshold_is_a_config_error() {
        let err = generate_game_review(SCHOLARS_MATE, -1.0).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_review_serializes_to_camel_case_json() {
        let review = generate_game_review(SCHOLARS_MATE, 0.5).unwrap();
        let json = serde_json::to_value(&review).unwrap();

        assert!(json["gameInfo"]["white"].is_string());
        assert!(json["white"]["analysis"]["moveByMoveScores"].is_array());
        assert!(json["insights"]["turningPoints"][0]["move"].is_string());
    }
}
