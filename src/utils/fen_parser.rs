//! FEN-to-Position parser.
//!
//! The board field is read leniently: digits skip empty files, every other
//! character is handed to the piece decoder and occupies one file whether or
//! not it decodes, and anything past the eighth rank or file is ignored. The
//! metadata fields are strict about structure (six fields, `w`/`b`, numeric
//! counters) but castling letters outside `KQkq` are simply not rights.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastlingRight, CastlingRights, Color, Piece, Square};
use crate::game_state::game_info::GameInfo;
use crate::game_state::position::Position;
use crate::utils::algebraic::char_to_file;

pub fn parse_fen(fen: &str) -> ChessResult<Position> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| missing("board layout"))?;
    let side_part = parts.next().ok_or_else(|| missing("side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| missing("castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| missing("en-passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| missing("halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| missing("fullmove number"))?;

    if parts.next().is_some() {
        return Err(ChessErrors::InvalidFen("FEN has extra trailing fields".to_owned()));
    }

    let board = parse_board_field(board_part);
    let info = parse_game_info_fields(
        side_part,
        castling_part,
        en_passant_part,
        halfmove_part,
        fullmove_part,
    )?;

    Ok(Position::new(board, info))
}

fn missing(field: &str) -> ChessErrors {
    ChessErrors::InvalidFen(format!("missing {field} in FEN"))
}

/// Ranks appear rank 8 first in the text; rank "1" is stored at index 0.
pub fn parse_board_field(board_part: &str) -> Board {
    let mut ranks = [[None; 8]; 8];

    for (fen_rank_idx, rank_str) in board_part.split('/').take(8).enumerate() {
        let rank = 7 - fen_rank_idx;
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                file += empty_count as usize;
                continue;
            }

            if file < 8 {
                ranks[rank][file] = Piece::from_fen_char(ch);
            }
            file += 1;
        }
    }

    Board::from_ranks(ranks)
}

pub fn parse_game_info_fields(
    side_part: &str,
    castling_part: &str,
    en_passant_part: &str,
    halfmove_part: &str,
    fullmove_part: &str,
) -> ChessResult<GameInfo> {
    let side_to_move = parse_side_to_move(side_part)?;
    let castling_rights = parse_castling_rights(castling_part);
    let en_passant_file = parse_en_passant_file(en_passant_part);
    let halfmove_clock = halfmove_part
        .parse::<u32>()
        .map_err(|_| ChessErrors::InvalidFen(format!("invalid halfmove clock: {halfmove_part}")))?;
    let fullmove_number = fullmove_part
        .parse::<u32>()
        .map_err(|_| ChessErrors::InvalidFen(format!("invalid fullmove number: {fullmove_part}")))?;

    Ok(GameInfo {
        side_to_move,
        castling_rights,
        en_passant_file,
        halfmove_clock,
        fullmove_number,
    })
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessErrors::InvalidFen(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

fn parse_castling_rights(castling_part: &str) -> CastlingRights {
    CastlingRight::ALL
        .into_iter()
        .filter(|right| castling_part.contains(right.fen_char()))
        .collect()
}

/// Only the file of the target square is kept.
fn parse_en_passant_file(en_passant_part: &str) -> Option<u8> {
    if en_passant_part == "-" {
        return None;
    }

    if let Ok(square) = en_passant_part.parse::<Square>() {
        return Some(square.file());
    }

    en_passant_part.chars().next().and_then(char_to_file)
}
