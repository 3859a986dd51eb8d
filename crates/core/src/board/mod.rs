//! Static attack/defence model of a position
//!
//! A [`Board`] is built once from the piece-placement field of a FEN and is
//! immutable afterwards. Construction parses the placement, counts how many
//! pieces of each color attack every square and classifies the pieces that
//! are hanging or only just held.
//!
//! Squares are addressed as `(x, y)` where `x` is the file (0 = a) and `y`
//! is the row in FEN order, so `y = 0` is rank 8 and `y = 7` is rank 1.

mod attacks;
mod report;
mod vulnerability;

use shakmaty::{ByColor, Color, Piece, Square};

pub use attacks::AttackMap;
pub use vulnerability::{Vulnerabilities, VulnerabilityRecord};

/// Piece placement indexed as `cells[y][x]`.
pub(crate) type Cells = [[Option<Piece>; 8]; 8];

#[derive(Debug, Clone)]
pub struct Board {
    cells: Cells,
    attacks: ByColor<AttackMap>,
    vulnerabilities: Vulnerabilities,
}

impl Board {
    /// Builds the board from a FEN. Only the placement field is read; a full
    /// FEN is accepted and everything after the first space is ignored.
    ///
    /// Malformed placements are not rejected: unknown characters occupy a
    /// file without placing a piece, and anything past the eighth file or
    /// rank is dropped.
    pub fn new(fen: &str) -> Self {
        let cells = parse_placement(fen);
        let attacks = attacks::attack_maps(&cells);
        let vulnerabilities = vulnerability::classify(&cells, &attacks);

        Board {
            cells,
            attacks,
            vulnerabilities,
        }
    }

    pub fn piece_at(&self, x: usize, y: usize) -> Option<Piece> {
        self.cells.get(y).and_then(|row| row.get(x)).copied().flatten()
    }

    /// Number of `color` pieces attacking `(x, y)`, 0 off the board.
    pub fn attackers(&self, color: Color, x: usize, y: usize) -> u8 {
        self.attacks
            .get(color)
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(0)
    }

    pub fn attack_map(&self, color: Color) -> &AttackMap {
        self.attacks.get(color)
    }

    pub fn vulnerabilities(&self) -> &Vulnerabilities {
        &self.vulnerabilities
    }

    pub fn hanging_pieces(&self) -> Vec<&str> {
        descriptions(&self.vulnerabilities.hanging)
    }

    pub fn hanging_coordinates(&self) -> Vec<&str> {
        coordinates(&self.vulnerabilities.hanging)
    }

    pub fn semi_protected_pieces(&self) -> Vec<&str> {
        descriptions(&self.vulnerabilities.semi_protected)
    }

    pub fn semi_protected_coordinates(&self) -> Vec<&str> {
        coordinates(&self.vulnerabilities.semi_protected)
    }

    /// Human-readable report for the position: definitions, findings and
    /// general tactical advice.
    pub fn report(&self) -> String {
        report::render(&self.vulnerabilities)
    }
}

fn descriptions(records: &[VulnerabilityRecord]) -> Vec<&str> {
    records.iter().map(|r| r.description.as_str()).collect()
}

fn coordinates(records: &[VulnerabilityRecord]) -> Vec<&str> {
    records.iter().map(|r| r.coordinate.as_str()).collect()
}

fn parse_placement(fen: &str) -> Cells {
    let mut cells: Cells = [[None; 8]; 8];
    let (mut x, mut y) = (0usize, 0usize);

    for ch in fen.chars() {
        match ch {
            ' ' => break,
            '/' => {
                x = 0;
                y += 1;
            }
            '1'..='8' => x += ch as usize - '0' as usize,
            _ => {
                if x < 8 && y < 8 {
                    cells[y][x] = Piece::from_char(ch);
                }
                x += 1;
            }
        }
    }

    cells
}

/// Algebraic name of `(x, y)`, e.g. `(4, 6)` is `"e2"`. `None` off the board.
pub fn coordinate(x: usize, y: usize) -> Option<String> {
    if x >= 8 || y >= 8 {
        return None;
    }
    let file = (b'a' + x as u8) as char;
    let rank = (b'1' + (7 - y) as u8) as char;
    Some(format!("{}{}", file, rank))
}

/// Inverse of [`coordinate`], going through shakmaty's square parser.
pub fn parse_coordinate(name: &str) -> Option<(usize, usize)> {
    let square: Square = name.parse().ok()?;
    let index = u32::from(square) as usize;
    Some((index % 8, 7 - index / 8))
}
