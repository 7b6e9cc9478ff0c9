//! Knight jump table and movement rule. Knights ignore blockers.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::is_free_or_enemy;

pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub fn is_valid_knight_move(position: &Position, from: Square, to: Square, color: Color) -> bool {
    let rank_distance = from.rank().abs_diff(to.rank());
    let file_distance = from.file().abs_diff(to.file());

    matches!((rank_distance, file_distance), (1, 2) | (2, 1))
        && is_free_or_enemy(position.board(), to, color)
}

#[cfg(test)]
mod tests {
    use super::{is_valid_knight_move, KNIGHT_JUMPS};
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::position::Position;

    #[test]
    fn knight_from_d4_reaches_eight_squares() {
        let position = Position::from_fen("8/8/8/8/3N4/8/8/8 w - - 0 1").expect("FEN");
        let d4: Square = "d4".parse().expect("d4");
        let reachable = Square::all()
            .filter(|to| is_valid_knight_move(&position, d4, *to, Color::White))
            .count();
        assert_eq!(reachable, KNIGHT_JUMPS.len());
    }

    #[test]
    fn knight_cannot_land_on_own_piece() {
        let position = Position::from_fen("8/8/8/8/8/8/2P5/N7 w - - 0 1").expect("FEN");
        let a1: Square = "a1".parse().expect("a1");
        assert!(!is_valid_knight_move(&position, a1, "c2".parse().expect("c2"), Color::White));
        assert!(is_valid_knight_move(&position, a1, "b3".parse().expect("b3"), Color::White));
    }
}
