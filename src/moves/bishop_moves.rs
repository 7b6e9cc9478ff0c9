//! Bishop movement rule.
//!
//! Diagonal slides of any length with nothing standing strictly between the
//! origin and the destination, ending on an empty or enemy square.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::{is_diagonal, is_free_or_enemy, path_is_clear};

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub fn is_valid_bishop_move(position: &Position, from: Square, to: Square, color: Color) -> bool {
    let board = position.board();
    is_diagonal(from, to) && path_is_clear(board, from, to) && is_free_or_enemy(board, to, color)
}

#[cfg(test)]
mod tests {
    use super::is_valid_bishop_move;
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::position::Position;

    fn sq(text: &str) -> Square {
        text.parse().expect("test square should parse")
    }

    #[test]
    fn bishop_stops_at_first_blocker() {
        let position = Position::from_fen("8/8/5p2/8/3B4/8/1P6/8 w - - 0 1").expect("FEN");
        assert!(is_valid_bishop_move(&position, sq("d4"), sq("f6"), Color::White));
        assert!(!is_valid_bishop_move(&position, sq("d4"), sq("g7"), Color::White));
        assert!(!is_valid_bishop_move(&position, sq("d4"), sq("b2"), Color::White));
        assert!(is_valid_bishop_move(&position, sq("d4"), sq("c3"), Color::White));
        assert!(!is_valid_bishop_move(&position, sq("d4"), sq("d5"), Color::White));
    }
}
