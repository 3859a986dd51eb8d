//! End-to-end checks of the static board model against known positions.

use chess_review_core::board::{coordinate, parse_coordinate};
use chess_review_core::Board;
use shakmaty::Color;

#[test]
fn test_starting_position_has_no_vulnerable_pieces() {
    let board = Board::new("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");

    assert!(board.hanging_pieces().is_empty());
    assert!(board.hanging_coordinates().is_empty());
    assert!(board.semi_protected_pieces().is_empty());
    assert!(board.semi_protected_coordinates().is_empty());
}

#[test]
fn test_lone_black_rook_next_to_white_king() {
    let board = Board::new("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1");

    assert_eq!(board.hanging_coordinates(), vec!["e2"]);
    assert_eq!(board.vulnerabilities().hanging.len(), 1);
    assert!(board.vulnerabilities().semi_protected.is_empty());
}

#[test]
fn test_empty_board() {
    let board = Board::new("8/8/8/8/8/8/8/8 w - - 0 1");

    for color in [Color::White, Color::Black] {
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(board.attackers(color, x, y), 0);
            }
        }
    }
    assert!(board.vulnerabilities().is_empty());
}

#[test]
fn test_queen_and_rook_battery() {
    // Queen d1 behind rook d4, black rook on d7 defended by its king on e8.
    let board = Board::new("4k3/3r4/8/8/3R4/8/8/3QK3 w - - 0 1");
    let (x, y) = parse_coordinate("d7").unwrap();

    assert_eq!(board.attackers(Color::White, x, y), 2);
    assert_eq!(board.attackers(Color::Black, x, y), 1);
    // Two attackers against one defender: not hanging, not semi-protected.
    assert!(board.vulnerabilities().hanging.iter().all(|r| r.coordinate != "d7"));
    assert!(board.vulnerabilities().semi_protected.iter().all(|r| r.coordinate != "d7"));
}

#[test]
fn test_every_coordinate_parses_back() {
    for y in 0..8 {
        for x in 0..8 {
            assert_eq!(coordinate(x, y).and_then(|name| parse_coordinate(&name)), Some((x, y)));
        }
    }
}

#[test]
fn test_board_is_shareable_across_threads() {
    let board = std::sync::Arc::new(Board::new("4k3/8/8/4n3/3P4/8/8/4K3 w - - 0 1"));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let board = std::sync::Arc::clone(&board);
            std::thread::spawn(move || board.hanging_coordinates().join(","))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "e5");
    }
}
