//! Hanging and semi-protected piece classification

use serde::{Deserialize, Serialize};
use shakmaty::{ByColor, Color, Piece, Role};

use super::{coordinate, AttackMap, Cells};

/// A piece flagged by the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VulnerabilityRecord {
    /// E.g. "Black Rook on e2"
    #[serde(rename = "pieceDescription")]
    pub description: String,
    /// Algebraic square, e.g. "e2"
    pub coordinate: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vulnerabilities {
    /// Attacked and not defended at all.
    pub hanging: Vec<VulnerabilityRecord>,
    /// Attacked exactly as often as defended.
    pub semi_protected: Vec<VulnerabilityRecord>,
}

impl Vulnerabilities {
    pub fn is_empty(&self) -> bool {
        self.hanging.is_empty() && self.semi_protected.is_empty()
    }
}

/// Kings are never classified. A piece attacked more often than it is
/// defended, but defended at least once, lands in neither list.
pub(super) fn classify(cells: &Cells, attacks: &ByColor<AttackMap>) -> Vulnerabilities {
    let mut result = Vulnerabilities::default();

    for (y, row) in cells.iter().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            let Some(piece) = *cell else {
                continue;
            };
            if piece.role == Role::King {
                continue;
            }

            let defended = attacks.get(piece.color)[y][x];
            let attacked = attacks.get(!piece.color)[y][x];

            let bucket = if attacked > defended && defended == 0 {
                &mut result.hanging
            } else if attacked == defended && attacked > 0 {
                &mut result.semi_protected
            } else {
                continue;
            };
            let Some(square) = coordinate(x, y) else {
                continue;
            };
            bucket.push(VulnerabilityRecord {
                description: describe(piece, &square),
                coordinate: square,
            });
        }
    }

    result
}

fn describe(piece: Piece, square: &str) -> String {
    format!("{} {} on {}", color_name(piece.color), role_name(piece.role), square)
}

pub(crate) fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

pub(crate) fn role_name(role: Role) -> &'static str {
    match role {
        Role::Pawn => "Pawn",
        Role::Knight => "Knight",
        Role::Bishop => "Bishop",
        Role::Rook => "Rook",
        Role::Queen => "Queen",
        Role::King => "King",
    }
}
