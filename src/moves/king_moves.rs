//! King movement rule: one step in any direction, or a two-file castle step
//! accepted by the castling predicates.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_shared::is_free_or_enemy;
use crate::moves::castling_moves::matching_castle;

/// One step in any direction, or a castling move whose preconditions hold.
/// Whether the king would stand in check is not examined.
pub fn is_valid_king_move(position: &Position, from: Square, to: Square, color: Color) -> bool {
    let rank_distance = from.rank().abs_diff(to.rank());
    let file_distance = from.file().abs_diff(to.file());

    if rank_distance.max(file_distance) == 1 {
        return is_free_or_enemy(position.board(), to, color);
    }

    matching_castle(position, from, to).is_some()
}
