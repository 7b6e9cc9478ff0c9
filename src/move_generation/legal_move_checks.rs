//! Pseudo-legal move predicate and move classification.
//!
//! "Pseudo-legal" means the move obeys the piece's movement rules; nothing
//! here asks whether the mover's own king is left in check.

use crate::game_state::chess_rules::{RANK_1, RANK_3, RANK_4, RANK_5, RANK_6, RANK_8};
use crate::game_state::chess_types::{CastlingRight, Color, PieceKind, Square};
use crate::game_state::position::Position;
use crate::moves::bishop_moves::is_valid_bishop_move;
use crate::moves::castling_moves::{is_castle_move, matching_castle};
use crate::moves::king_moves::is_valid_king_move;
use crate::moves::knight_moves::is_valid_knight_move;
use crate::moves::move_descriptions::MoveKind;
use crate::moves::pawn_moves::is_valid_pawn_move;
use crate::moves::queen_moves::is_valid_queen_move;
use crate::moves::rook_moves::is_valid_rook_move;

/// `false` unless the side to move owns the piece on `from` and that piece's
/// movement rule accepts `to`.
pub fn is_valid_pseudo_legal(position: &Position, from: Square, to: Square) -> bool {
    let Some(piece) = position.board().piece_at(from) else {
        return false;
    };
    if piece.color != position.info().side_to_move {
        return false;
    }

    let color = piece.color;
    match piece.kind {
        PieceKind::Pawn => is_valid_pawn_move(position, from, to, color),
        PieceKind::Knight => is_valid_knight_move(position, from, to, color),
        PieceKind::Bishop => is_valid_bishop_move(position, from, to, color),
        PieceKind::Rook => is_valid_rook_move(position, from, to, color),
        PieceKind::Queen => is_valid_queen_move(position, from, to, color),
        PieceKind::King => is_valid_king_move(position, from, to, color),
    }
}

/// A diagonal pawn step onto the empty square behind an enemy pawn that just
/// double-pushed on the recorded file.
pub fn is_en_passant_move(position: &Position, from: Square, to: Square) -> bool {
    let info = position.info();
    let board = position.board();
    let side = info.side_to_move;

    let Some(piece) = board.piece_at(from) else {
        return false;
    };
    if piece.kind != PieceKind::Pawn || piece.color != side {
        return false;
    }

    let (from_rank, to_rank) = match side {
        Color::White => (RANK_5, RANK_6),
        Color::Black => (RANK_4, RANK_3),
    };

    board.is_empty_at(to)
        && info.en_passant_file == Some(to.file())
        && from.file().abs_diff(to.file()) == 1
        && from.rank() == from_rank
        && to.rank() == to_rank
}

/// A pawn of the side to move reaching the far rank.
pub fn is_promotion_move(position: &Position, from: Square, to: Square) -> bool {
    let side = position.info().side_to_move;
    let Some(piece) = position.board().piece_at(from) else {
        return false;
    };

    let last_rank = match side {
        Color::White => RANK_8,
        Color::Black => RANK_1,
    };

    piece.kind == PieceKind::Pawn && piece.color == side && to.rank() == last_rank
}

pub fn is_white_king_side_castle(position: &Position, from: Square, to: Square) -> bool {
    is_castle_move(position, CastlingRight::WhiteKingSide, from, to)
}

pub fn is_white_queen_side_castle(position: &Position, from: Square, to: Square) -> bool {
    is_castle_move(position, CastlingRight::WhiteQueenSide, from, to)
}

pub fn is_black_king_side_castle(position: &Position, from: Square, to: Square) -> bool {
    is_castle_move(position, CastlingRight::BlackKingSide, from, to)
}

pub fn is_black_queen_side_castle(position: &Position, from: Square, to: Square) -> bool {
    is_castle_move(position, CastlingRight::BlackQueenSide, from, to)
}

/// Classify a move already known to be pseudo-legal. Priority: en passant,
/// promotion, the four castles, then everything else.
pub fn classify_move(position: &Position, from: Square, to: Square) -> MoveKind {
    if is_en_passant_move(position, from, to) {
        MoveKind::EnPassant
    } else if is_promotion_move(position, from, to) {
        MoveKind::Promotion
    } else if let Some(right) = matching_castle(position, from, to) {
        MoveKind::Castle(right)
    } else {
        MoveKind::Regular
    }
}
