//! Long algebraic move text (`e2e4`, `e7e8n`), the form the command-line
//! session accepts.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::moves::move_descriptions::ChessMove;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_to_long_algebraic(mv: &ChessMove) -> String {
    let mut out = String::with_capacity(5);
    out.push_str(&square_to_algebraic(mv.from));
    out.push_str(&square_to_algebraic(mv.to));

    if let Some(promotion) = mv.promotion {
        out.push(promotion.kind.fen_letter());
    }

    out
}

/// Parse `from`, `to` and an optional promotion letter. The promotion piece
/// takes the color of `side`, the player making the move.
pub fn long_algebraic_to_move(text: &str, side: Color) -> ChessResult<ChessMove> {
    let text = text.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessErrors::InvalidAlgebraic(text.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;

    let promotion = match text[4..].chars().next() {
        None => None,
        Some(ch) => Some(Piece::new(char_to_promotion(ch, text)?, side)),
    };

    Ok(ChessMove { from, to, promotion })
}

fn char_to_promotion(ch: char, text: &str) -> ChessResult<PieceKind> {
    match ch.to_ascii_lowercase() {
        'q' => Ok(PieceKind::Queen),
        'r' => Ok(PieceKind::Rook),
        'b' => Ok(PieceKind::Bishop),
        'n' => Ok(PieceKind::Knight),
        _ => Err(ChessErrors::InvalidAlgebraic(text.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::{long_algebraic_to_move, move_to_long_algebraic};
    use crate::game_state::chess_types::{Color, Piece, PieceKind};

    #[test]
    fn parses_plain_and_promotion_moves() {
        let mv = long_algebraic_to_move("e2e4", Color::White).expect("e2e4");
        assert_eq!(mv.from.to_string(), "e2");
        assert_eq!(mv.to.to_string(), "e4");
        assert_eq!(mv.promotion, None);

        let promo = long_algebraic_to_move("a2a1N", Color::Black).expect("a2a1n");
        assert_eq!(promo.promotion, Some(Piece::new(PieceKind::Knight, Color::Black)));
        assert_eq!(move_to_long_algebraic(&promo), "a2a1n");
    }

    #[test]
    fn rejects_malformed_text() {
        for text in ["", "e2", "e2e9", "e7e8k", "e2-e4", "é2e4"] {
            assert!(long_algebraic_to_move(text, Color::White).is_err(), "{text}");
        }
    }
}
