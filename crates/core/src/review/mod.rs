//! Whole-game theme review

mod generator;
mod types;

pub use generator::{generate_game_review, GameReviewGenerator};
pub use types::*;
