//! Move values exchanged with callers and the classification applied to them.

use std::fmt;

use crate::game_state::chess_types::{CastlingRight, Piece, Square};
use crate::utils::long_algebraic::move_to_long_algebraic;

/// A requested move: origin, destination and an optional promotion piece.
///
/// `promotion` is only consulted when the move turns out to be a promotion;
/// `None` there means "same-colour queen".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
}

impl ChessMove {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Square, to: Square, promotion: Piece) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }

    #[inline]
    pub fn rank_delta(&self) -> i8 {
        self.to.rank() as i8 - self.from.rank() as i8
    }

    #[inline]
    pub fn file_delta(&self) -> i8 {
        self.to.file() as i8 - self.from.file() as i8
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&move_to_long_algebraic(self))
    }
}

/// How a pseudo-legal move changes the position. Checked in declaration order:
/// an en-passant capture is never also a promotion, and castling only applies
/// when neither matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    EnPassant,
    Promotion,
    Castle(CastlingRight),
    Regular,
}

impl MoveKind {
    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self, MoveKind::Castle(_))
    }
}
