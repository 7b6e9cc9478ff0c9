use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};

/// Unit step from `from` toward `to` when both lie on one rank, file or
/// diagonal; `None` otherwise (including `from == to`).
pub fn line_step(from: Square, to: Square) -> Option<(i8, i8)> {
    let rank_delta = to.rank() as i8 - from.rank() as i8;
    let file_delta = to.file() as i8 - from.file() as i8;

    if rank_delta == 0 && file_delta == 0 {
        return None;
    }
    if rank_delta != 0 && file_delta != 0 && rank_delta.abs() != file_delta.abs() {
        return None;
    }

    Some((rank_delta.signum(), file_delta.signum()))
}

#[inline]
pub fn is_orthogonal(from: Square, to: Square) -> bool {
    from != to && (from.rank() == to.rank() || from.file() == to.file())
}

#[inline]
pub fn is_diagonal(from: Square, to: Square) -> bool {
    from != to && from.rank().abs_diff(to.rank()) == from.file().abs_diff(to.file())
}

/// No piece on any square strictly between `from` and `to`.
///
/// Only meaningful when the two squares share a line.
pub fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let Some((rank_step, file_step)) = line_step(from, to) else {
        return false;
    };

    let mut current = from.offset(rank_step, file_step);
    while let Some(square) = current {
        if square == to {
            return true;
        }
        if !board.is_empty_at(square) {
            return false;
        }
        current = square.offset(rank_step, file_step);
    }

    false
}

/// Destination is empty or holds an enemy of `color`.
#[inline]
pub fn is_free_or_enemy(board: &Board, to: Square, color: Color) -> bool {
    board.piece_at(to).map_or(true, |piece| piece.color != color)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(text: &str) -> Square {
        text.parse().expect("test square should parse")
    }

    #[test]
    fn line_step_handles_all_eight_directions() {
        assert_eq!(line_step(sq("d4"), sq("d8")), Some((1, 0)));
        assert_eq!(line_step(sq("d4"), sq("a4")), Some((0, -1)));
        assert_eq!(line_step(sq("d4"), sq("g7")), Some((1, 1)));
        assert_eq!(line_step(sq("d4"), sq("a1")), Some((-1, -1)));
        assert_eq!(line_step(sq("d4"), sq("e6")), None);
        assert_eq!(line_step(sq("d4"), sq("d4")), None);
    }

    #[test]
    fn blockade_is_detected_strictly_between() {
        let board = Board::from_fen_field("8/8/8/3p4/8/8/8/3R4");
        assert!(!path_is_clear(&board, sq("d1"), sq("d8")));
        assert!(path_is_clear(&board, sq("d1"), sq("d5")));
        assert!(path_is_clear(&board, sq("d1"), sq("d2")));
        assert!(is_free_or_enemy(&board, sq("d5"), Color::White));
        assert!(!is_free_or_enemy(&board, sq("d5"), Color::Black));
    }
}
