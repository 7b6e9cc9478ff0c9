//! Queen movement rule, the union of the rook and bishop rules.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;
use crate::moves::bishop_moves::{is_valid_bishop_move, BISHOP_DIRECTIONS};
use crate::moves::rook_moves::{is_valid_rook_move, ROOK_DIRECTIONS};

pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    ROOK_DIRECTIONS[0],
    ROOK_DIRECTIONS[1],
    ROOK_DIRECTIONS[2],
    ROOK_DIRECTIONS[3],
    BISHOP_DIRECTIONS[0],
    BISHOP_DIRECTIONS[1],
    BISHOP_DIRECTIONS[2],
    BISHOP_DIRECTIONS[3],
];

#[inline]
pub fn is_valid_queen_move(position: &Position, from: Square, to: Square, color: Color) -> bool {
    is_valid_rook_move(position, from, to, color) || is_valid_bishop_move(position, from, to, color)
}

#[cfg(test)]
mod tests {
    use super::is_valid_queen_move;
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::position::Position;

    #[test]
    fn queen_combines_rook_and_bishop_lines() {
        let position = Position::from_fen("8/8/8/8/3q4/8/8/8 b - - 0 1").expect("FEN");
        let d4: Square = "d4".parse().expect("d4");
        let reachable = Square::all()
            .filter(|to| is_valid_queen_move(&position, d4, *to, Color::Black))
            .count();
        assert_eq!(reachable, 27);
    }
}
