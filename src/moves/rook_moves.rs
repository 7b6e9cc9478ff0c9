//! Rook movement rule.
//!
//! Orthogonal slides with a clear path, ending on an empty or enemy square.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::{is_free_or_enemy, is_orthogonal, path_is_clear};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub fn is_valid_rook_move(position: &Position, from: Square, to: Square, color: Color) -> bool {
    let board = position.board();
    is_orthogonal(from, to) && path_is_clear(board, from, to) && is_free_or_enemy(board, to, color)
}

#[cfg(test)]
mod tests {
    use super::is_valid_rook_move;
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::position::Position;

    fn sq(text: &str) -> Square {
        text.parse().expect("test square should parse")
    }

    #[test]
    fn rook_moves_along_open_lines_only() {
        let position = Position::from_fen("3p4/8/8/8/3R1P2/8/8/8 w - - 0 1").expect("FEN");
        assert!(is_valid_rook_move(&position, sq("d4"), sq("d8"), Color::White));
        assert!(is_valid_rook_move(&position, sq("d4"), sq("a4"), Color::White));
        assert!(is_valid_rook_move(&position, sq("d4"), sq("e4"), Color::White));
        assert!(!is_valid_rook_move(&position, sq("d4"), sq("f4"), Color::White));
        assert!(!is_valid_rook_move(&position, sq("d4"), sq("h4"), Color::White));
        assert!(!is_valid_rook_move(&position, sq("d4"), sq("e5"), Color::White));
    }
}
