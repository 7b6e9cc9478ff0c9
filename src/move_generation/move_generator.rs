//! Enumeration of every pseudo-legal move in a position.
//!
//! Candidates come from each piece's step/ray tables and are filtered through
//! the same predicate `Position::apply` uses, so the two never disagree.

use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::{is_promotion_move, is_valid_pseudo_legal};
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::knight_moves::KNIGHT_JUMPS;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::queen_moves::QUEEN_DIRECTIONS;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

/// All pseudo-legal moves of the side to move. A promoting pawn move appears
/// once per promotion kind.
pub fn generate_pseudo_legal_moves(position: &Position) -> Vec<ChessMove> {
    let mut out = Vec::with_capacity(48);
    let side = position.info().side_to_move;

    for (from, piece) in position.board().pieces() {
        if piece.color == side {
            generate_piece_moves(position, from, piece, &mut out);
        }
    }

    out
}

/// Pseudo-legal moves of the piece standing on `from`.
pub fn generate_moves_from(position: &Position, from: Square) -> Vec<ChessMove> {
    let mut out = Vec::new();
    if let Some(piece) = position.board().piece_at(from) {
        if piece.color == position.info().side_to_move {
            generate_piece_moves(position, from, piece, &mut out);
        }
    }
    out
}

fn generate_piece_moves(position: &Position, from: Square, piece: Piece, out: &mut Vec<ChessMove>) {
    let mut targets = Vec::with_capacity(28);

    match piece.kind {
        PieceKind::Pawn => {
            let direction = piece.color.pawn_direction();
            for (rank_delta, file_delta) in [(direction, 0), (2 * direction, 0), (direction, -1), (direction, 1)] {
                targets.extend(from.offset(rank_delta, file_delta));
            }
        }
        PieceKind::Knight => {
            for (rank_delta, file_delta) in KNIGHT_JUMPS {
                targets.extend(from.offset(rank_delta, file_delta));
            }
        }
        PieceKind::King => {
            for (rank_delta, file_delta) in QUEEN_DIRECTIONS {
                targets.extend(from.offset(rank_delta, file_delta));
            }
            targets.extend(from.offset(0, 2));
            targets.extend(from.offset(0, -2));
        }
        PieceKind::Bishop => push_rays(from, &BISHOP_DIRECTIONS, &mut targets),
        PieceKind::Rook => push_rays(from, &ROOK_DIRECTIONS, &mut targets),
        PieceKind::Queen => push_rays(from, &QUEEN_DIRECTIONS, &mut targets),
    }

    for to in targets {
        if !is_valid_pseudo_legal(position, from, to) {
            continue;
        }

        if is_promotion_move(position, from, to) {
            for kind in PieceKind::PROMOTABLE {
                out.push(ChessMove::with_promotion(from, to, Piece::new(kind, piece.color)));
            }
        } else {
            out.push(ChessMove::new(from, to));
        }
    }
}

fn push_rays(from: Square, directions: &[(i8, i8)], targets: &mut Vec<Square>) {
    for (rank_step, file_step) in directions {
        let mut current = from.offset(*rank_step, *file_step);
        while let Some(square) = current {
            targets.push(square);
            current = square.offset(*rank_step, *file_step);
        }
    }
}
