//! Short move notation: figurine (FAN) or letter (SAN) style.
//!
//! The text is what history nodes store as the move leading to them, and it
//! is the key the history tree uses to suppress duplicate variations. Check
//! and mate suffixes are never emitted since nothing here detects check.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{CastlingRight, Color, PieceKind};
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::classify_move;
use crate::move_generation::move_generator::generate_pseudo_legal_moves;
use crate::moves::move_descriptions::{ChessMove, MoveKind};
use crate::utils::algebraic::{file_to_char, rank_to_char, square_to_algebraic};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NotationStyle {
    /// Piece glyphs such as `♘f3`.
    #[default]
    Figurine,
    /// Piece letters such as `Nf3`.
    Letters,
}

impl NotationStyle {
    /// Symbol for a non-pawn piece; pawns have none.
    pub fn piece_symbol(self, kind: PieceKind, color: Color) -> Option<char> {
        let symbol = match self {
            NotationStyle::Letters => match kind {
                PieceKind::Pawn => return None,
                PieceKind::Knight => 'N',
                PieceKind::Bishop => 'B',
                PieceKind::Rook => 'R',
                PieceKind::Queen => 'Q',
                PieceKind::King => 'K',
            },
            NotationStyle::Figurine => match (color, kind) {
                (_, PieceKind::Pawn) => return None,
                (Color::White, PieceKind::Knight) => '♘',
                (Color::White, PieceKind::Bishop) => '♗',
                (Color::White, PieceKind::Rook) => '♖',
                (Color::White, PieceKind::Queen) => '♕',
                (Color::White, PieceKind::King) => '♔',
                (Color::Black, PieceKind::Knight) => '♞',
                (Color::Black, PieceKind::Bishop) => '♝',
                (Color::Black, PieceKind::Rook) => '♜',
                (Color::Black, PieceKind::Queen) => '♛',
                (Color::Black, PieceKind::King) => '♚',
            },
        };
        Some(symbol)
    }
}

impl std::str::FromStr for NotationStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "figurine" | "fan" => Ok(NotationStyle::Figurine),
            "letters" | "san" => Ok(NotationStyle::Letters),
            other => Err(format!("unknown notation style: {other}")),
        }
    }
}

/// Render `mv`, played from `position`, in the requested style.
///
/// Moves from an empty square or that fail the pseudo-legal check get the
/// same errors `Position::apply` returns. The promotion piece is not checked.
pub fn move_to_notation(position: &Position, mv: &ChessMove, style: NotationStyle) -> ChessResult<String> {
    let ChessMove { from, to, .. } = *mv;
    let piece = position
        .board()
        .piece_at(from)
        .ok_or(ChessErrors::NoPieceAtStart(from))?;
    if !position.is_valid_pseudo_legal(from, to) {
        return Err(ChessErrors::IllegalMove { from, to });
    }

    let kind = classify_move(position, from, to);
    if let MoveKind::Castle(right) = kind {
        return Ok(match right {
            CastlingRight::WhiteKingSide | CastlingRight::BlackKingSide => "O-O".to_owned(),
            CastlingRight::WhiteQueenSide | CastlingRight::BlackQueenSide => "O-O-O".to_owned(),
        });
    }

    let is_capture = kind == MoveKind::EnPassant || position.board().piece_at(to).is_some();
    let mut out = String::new();

    match style.piece_symbol(piece.kind, piece.color) {
        None => {
            if is_capture {
                out.push(file_to_char(from.file()));
            }
        }
        Some(symbol) => {
            out.push(symbol);
            out.push_str(&disambiguation(position, mv, piece.kind));
        }
    }

    if is_capture {
        out.push('x');
    }
    out.push_str(&square_to_algebraic(to));

    if kind == MoveKind::Promotion {
        let promotion = mv
            .promotion
            .map_or(PieceKind::Queen, |promotion| promotion.kind);
        if let Some(symbol) = style.piece_symbol(promotion, piece.color) {
            out.push('=');
            out.push(symbol);
        }
    }

    Ok(out)
}

/// Origin file, rank, or both, whichever is the shortest that singles out the
/// moving piece among same-kind pieces able to reach the same square.
fn disambiguation(position: &Position, mv: &ChessMove, kind: PieceKind) -> String {
    let rivals: Vec<_> = generate_pseudo_legal_moves(position)
        .into_iter()
        .filter(|other| other.to == mv.to && other.from != mv.from)
        .filter(|other| {
            position
                .board()
                .piece_at(other.from)
                .is_some_and(|piece| piece.kind == kind)
        })
        .map(|other| other.from)
        .collect();

    if rivals.is_empty() {
        return String::new();
    }

    let shares_file = rivals.iter().any(|square| square.file() == mv.from.file());
    let shares_rank = rivals.iter().any(|square| square.rank() == mv.from.rank());

    if !shares_file {
        file_to_char(mv.from.file()).to_string()
    } else if !shares_rank {
        rank_to_char(mv.from.rank()).to_string()
    } else {
        square_to_algebraic(mv.from)
    }
}
