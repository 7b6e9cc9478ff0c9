//! Pawn movement rule.
//!
//! Single pushes onto empty squares, double pushes from the starting rank
//! through two empty squares, diagonal captures of enemy pieces and en
//! passant. Direction depends on color.

use crate::game_state::chess_rules::{RANK_2, RANK_7};
use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::is_en_passant_move;

/// Rank a pawn of `color` may double-push from.
#[inline]
pub const fn pawn_start_rank(color: Color) -> u8 {
    match color {
        Color::White => RANK_2,
        Color::Black => RANK_7,
    }
}

/// Single push, double push from the start rank, diagonal capture, or an
/// en-passant capture onto the recorded file.
pub fn is_valid_pawn_move(position: &Position, from: Square, to: Square, color: Color) -> bool {
    let board = position.board();
    let direction = color.pawn_direction();
    let rank_delta = to.rank() as i8 - from.rank() as i8;
    let file_delta = to.file() as i8 - from.file() as i8;

    if file_delta == 0 {
        if rank_delta == direction {
            return board.is_empty_at(to);
        }
        if rank_delta == 2 * direction && from.rank() == pawn_start_rank(color) {
            return from
                .offset(direction, 0)
                .is_some_and(|middle| board.is_empty_at(middle))
                && board.is_empty_at(to);
        }
        return false;
    }

    if file_delta.abs() != 1 || rank_delta != direction {
        return false;
    }

    match board.piece_at(to) {
        Some(target) => target.color != color,
        None => is_en_passant_move(position, from, to),
    }
}
