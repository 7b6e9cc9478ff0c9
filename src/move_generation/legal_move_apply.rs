//! Move application: old position in, brand-new position out.
//!
//! The source position is never modified. A rejected move returns an error
//! before anything is built, so callers keep exactly what they had.

use tracing::debug;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{CastlingRight, CastlingRights, Color, Piece, PieceKind};
use crate::game_state::game_info::GameInfo;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::{classify_move, is_valid_pseudo_legal};
use crate::moves::castling_moves::castle_geometry;
use crate::moves::move_descriptions::{ChessMove, MoveKind};

pub fn apply_move(position: &Position, mv: &ChessMove) -> ChessResult<Position> {
    let ChessMove { from, to, .. } = *mv;
    let board = position.board();
    let info = position.info();

    let moved_piece = board
        .piece_at(from)
        .ok_or(ChessErrors::NoPieceAtStart(from))?;
    if !is_valid_pseudo_legal(position, from, to) {
        return Err(ChessErrors::IllegalMove { from, to });
    }

    let mover = info.side_to_move;
    let is_capture = board.piece_at(to).is_some();
    let kind = classify_move(position, from, to);

    let mut next_info = GameInfo {
        side_to_move: mover.opposite(),
        fullmove_number: match mover {
            Color::Black => info.fullmove_number.saturating_add(1),
            Color::White => info.fullmove_number,
        },
        en_passant_file: None,
        ..*info
    };

    let next_board = match kind {
        MoveKind::EnPassant => {
            next_info.halfmove_clock = 0;
            let captured = to.offset(-mover.pawn_direction(), 0).unwrap_or(to);
            board.with_changes(&[(from, None), (captured, None), (to, Some(moved_piece))])
        }
        MoveKind::Promotion => {
            let promotion = promotion_piece(mv, mover)?;
            next_info.halfmove_clock = 0;
            board.with_changes(&[(from, None), (to, Some(promotion))])
        }
        MoveKind::Castle(right) => {
            let geometry = castle_geometry(right);
            next_info.halfmove_clock = info.halfmove_clock.saturating_add(1);
            next_info.castling_rights = info.castling_rights.without_color(mover);
            board.with_changes(&[
                (geometry.king_from, None),
                (geometry.rook_from, None),
                (geometry.king_to, Some(moved_piece)),
                (geometry.rook_to, Some(Piece::new(PieceKind::Rook, mover))),
            ])
        }
        MoveKind::Regular => {
            let is_pawn = moved_piece.kind == PieceKind::Pawn;
            next_info.halfmove_clock = if is_pawn || is_capture {
                0
            } else {
                info.halfmove_clock.saturating_add(1)
            };
            if is_pawn && mv.rank_delta().abs() == 2 {
                next_info.en_passant_file = Some(from.file());
            }
            next_info.castling_rights = rights_after_regular_move(info, moved_piece, mv);
            board.with_changes(&[(from, None), (to, Some(moved_piece))])
        }
    };

    debug!(%from, %to, ?kind, capture = is_capture, "applied move");

    Ok(Position::new(next_board, next_info))
}

/// Requested promotion piece, defaulting to a queen of the mover's color.
fn promotion_piece(mv: &ChessMove, mover: Color) -> ChessResult<Piece> {
    let piece = mv
        .promotion
        .unwrap_or_else(|| Piece::new(PieceKind::Queen, mover));

    if !piece.is_promotable() {
        return Err(ChessErrors::InvalidPromotionPiece(piece));
    }
    if piece.color != mover {
        return Err(ChessErrors::WrongPromotionPieceColor {
            expected: mover,
            found: piece.color,
        });
    }

    Ok(piece)
}

/// A king move drops both of its color's rights; a rook leaving its home
/// corner drops that side's right only.
fn rights_after_regular_move(
    info: &GameInfo,
    moved_piece: Piece,
    mv: &ChessMove,
) -> CastlingRights {
    let rights = info.castling_rights;
    match moved_piece.kind {
        PieceKind::King => rights.without_color(moved_piece.color),
        PieceKind::Rook => CastlingRight::ALL
            .into_iter()
            .filter(|right| right.color() == moved_piece.color)
            .find(|right| castle_geometry(*right).rook_from == mv.from)
            .map_or(rights, |right| rights.without(right)),
        _ => rights,
    }
}
