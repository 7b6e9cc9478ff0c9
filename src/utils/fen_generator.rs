//! Position-to-FEN generator.
//!
//! Empty runs are always grouped into a single digit, so output is canonical
//! even when the parsed input split runs differently.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{RANK_3, RANK_6};
use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_info::GameInfo;
use crate::game_state::position::Position;
use crate::utils::algebraic::{file_to_char, rank_to_char};

pub fn generate_fen(position: &Position) -> String {
    format!(
        "{} {}",
        generate_board_field(position.board()),
        generate_game_info_fields(position.info())
    )
}

pub fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match board.piece_at(Square::at(rank, file)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.to_fen_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

pub fn generate_game_info_fields(info: &GameInfo) -> String {
    let side_to_move = match info.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };

    format!(
        "{} {} {} {} {}",
        side_to_move,
        generate_castling_field(info),
        generate_en_passant_field(info),
        info.halfmove_clock,
        info.fullmove_number
    )
}

fn generate_castling_field(info: &GameInfo) -> String {
    let out: String = info
        .castling_rights
        .iter()
        .map(|right| right.fen_char())
        .collect();

    if out.is_empty() {
        "-".to_owned()
    } else {
        out
    }
}

/// The target square sits behind the pawn that just double-pushed: on rank 3
/// when Black is to move (White pushed), on rank 6 when White is to move.
fn generate_en_passant_field(info: &GameInfo) -> String {
    let Some(file) = info.en_passant_file.filter(|file| *file < 8) else {
        return "-".to_owned();
    };

    let rank = match info.side_to_move {
        Color::Black => RANK_3,
        Color::White => RANK_6,
    };

    format!("{}{}", file_to_char(file), rank_to_char(rank))
}
