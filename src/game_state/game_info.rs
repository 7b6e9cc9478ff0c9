//! Non-placement part of a position: turn, rights, en-passant file, clocks.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::{CastlingRights, Color};
use crate::utils::fen_generator::generate_game_info_fields;
use crate::utils::fen_parser::parse_game_info_fields;

/// Metadata carried alongside a `Board`.
///
/// `en_passant_file` is only set right after a two-square pawn advance.
/// `halfmove_clock` counts moves since the last pawn move or capture and
/// `fullmove_number` grows after each Black move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameInfo {
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_file: Option<u8>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl Default for GameInfo {
    fn default() -> Self {
        Self {
            side_to_move: Color::White,
            castling_rights: CastlingRights::ALL,
            en_passant_file: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }
}

impl GameInfo {
    /// Decode the five trailing FEN fields.
    pub fn from_fen_fields(
        side: &str,
        castling: &str,
        en_passant: &str,
        halfmove: &str,
        fullmove: &str,
    ) -> ChessResult<Self> {
        parse_game_info_fields(side, castling, en_passant, halfmove, fullmove)
    }

    /// Encode as `"<side> <castling> <en-passant> <halfmove> <fullmove>"`.
    pub fn to_fen(&self) -> String {
        generate_game_info_fields(self)
    }
}
