//! Fixed geometry of the four castling moves and their legality predicate.

use crate::game_state::chess_rules::{
    FILE_A, FILE_B, FILE_C, FILE_D, FILE_E, FILE_F, FILE_G, FILE_H, RANK_1, RANK_8,
};
use crate::game_state::chess_types::{CastlingRight, Color, Piece, PieceKind, Square};
use crate::game_state::position::Position;

/// Where king and rook start and finish for one castling right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleGeometry {
    pub color: Color,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares strictly between king and rook.
    pub between: &'static [u8],
}

const KING_SIDE_BETWEEN: [u8; 2] = [FILE_F, FILE_G];
const QUEEN_SIDE_BETWEEN: [u8; 3] = [FILE_B, FILE_C, FILE_D];

pub const fn castle_geometry(right: CastlingRight) -> CastleGeometry {
    let (color, rank) = match right {
        CastlingRight::WhiteKingSide | CastlingRight::WhiteQueenSide => (Color::White, RANK_1),
        CastlingRight::BlackKingSide | CastlingRight::BlackQueenSide => (Color::Black, RANK_8),
    };

    match right {
        CastlingRight::WhiteKingSide | CastlingRight::BlackKingSide => CastleGeometry {
            color,
            king_from: Square::at(rank, FILE_E),
            king_to: Square::at(rank, FILE_G),
            rook_from: Square::at(rank, FILE_H),
            rook_to: Square::at(rank, FILE_F),
            between: &KING_SIDE_BETWEEN,
        },
        CastlingRight::WhiteQueenSide | CastlingRight::BlackQueenSide => CastleGeometry {
            color,
            king_from: Square::at(rank, FILE_E),
            king_to: Square::at(rank, FILE_C),
            rook_from: Square::at(rank, FILE_A),
            rook_to: Square::at(rank, FILE_D),
            between: &QUEEN_SIDE_BETWEEN,
        },
    }
}

/// `true` when `from -> to` is the castling move for `right` and every
/// precondition holds: the owner is to move, the right is held, king and rook
/// stand on their home squares and nothing stands between them.
///
/// Attacked squares are not looked at.
pub fn is_castle_move(position: &Position, right: CastlingRight, from: Square, to: Square) -> bool {
    let geometry = castle_geometry(right);
    let board = position.board();
    let info = position.info();

    info.side_to_move == geometry.color
        && info.castling_rights.contains(right)
        && from == geometry.king_from
        && to == geometry.king_to
        && board.piece_at(from) == Some(Piece::new(PieceKind::King, geometry.color))
        && board.piece_at(geometry.rook_from) == Some(Piece::new(PieceKind::Rook, geometry.color))
        && geometry
            .between
            .iter()
            .all(|file| board.is_empty_at(Square::at(geometry.king_from.rank(), *file)))
}

/// The castling right whose move is `from -> to`, if any currently applies.
pub fn matching_castle(position: &Position, from: Square, to: Square) -> Option<CastlingRight> {
    CastlingRight::ALL
        .into_iter()
        .find(|right| is_castle_move(position, *right, from, to))
}
