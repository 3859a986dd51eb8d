//! Attack map construction

use shakmaty::{ByColor, Color, Piece, Role};

use super::Cells;

/// Attacker count per square, indexed as `map[y][x]`.
pub type AttackMap = [[u8; 8]; 8];

const KNIGHT_JUMPS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_STEPS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const DIAGONALS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHOGONALS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(super) fn attack_maps(cells: &Cells) -> ByColor<AttackMap> {
    let mut maps = ByColor {
        white: [[0; 8]; 8],
        black: [[0; 8]; 8],
    };

    for (y, row) in cells.iter().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            let Some(piece) = *cell else {
                continue;
            };
            let map = maps.get_mut(piece.color);
            let (x, y) = (x as i32, y as i32);

            match piece.role {
                Role::Pawn => {
                    // White pawns move towards row 0.
                    let dy = piece.color.fold_wb(-1, 1);
                    mark(map, x - 1, y + dy);
                    mark(map, x + 1, y + dy);
                }
                Role::Knight => {
                    for (dx, dy) in KNIGHT_JUMPS {
                        mark(map, x + dx, y + dy);
                    }
                }
                Role::King => {
                    for (dx, dy) in KING_STEPS {
                        mark(map, x + dx, y + dy);
                    }
                }
                Role::Bishop => {
                    for dir in DIAGONALS {
                        cast_ray(cells, map, piece.color, (x, y), dir);
                    }
                }
                Role::Rook => {
                    for dir in ORTHOGONALS {
                        cast_ray(cells, map, piece.color, (x, y), dir);
                    }
                }
                Role::Queen => {
                    for dir in DIAGONALS.into_iter().chain(ORTHOGONALS) {
                        cast_ray(cells, map, piece.color, (x, y), dir);
                    }
                }
            }
        }
    }

    maps
}

fn on_board(x: i32, y: i32) -> bool {
    (0..8).contains(&x) && (0..8).contains(&y)
}

fn mark(map: &mut AttackMap, x: i32, y: i32) {
    if on_board(x, y) {
        map[y as usize][x as usize] += 1;
    }
}

/// Walks a sliding ray from `origin`, counting every square it reaches.
///
/// The ray stops on the first occupied square unless that square holds a
/// friendly piece sliding along the same kind of line (queen or bishop on a
/// diagonal, queen or rook on a file or rank), in which case it keeps going
/// behind it.
fn cast_ray(cells: &Cells, map: &mut AttackMap, color: Color, origin: (i32, i32), dir: (i32, i32)) {
    let diagonal = dir.0 != 0 && dir.1 != 0;
    let (mut x, mut y) = (origin.0 + dir.0, origin.1 + dir.1);

    while on_board(x, y) {
        map[y as usize][x as usize] += 1;

        if let Some(piece) = cells[y as usize][x as usize] {
            if !supports_ray(piece, color, diagonal) {
                break;
            }
        }

        x += dir.0;
        y += dir.1;
    }
}

fn supports_ray(piece: Piece, color: Color, diagonal: bool) -> bool {
    piece.color == color
        && match piece.role {
            Role::Queen => true,
            Role::Bishop => diagonal,
            Role::Rook => !diagonal,
            _ => false,
        }
}
