//! Immutable 8x8 piece placement.
//!
//! A `Board` is 64 optional piece slots. It never checks whether the
//! arrangement is reachable in a real game; any layout a FEN board field can
//! describe is accepted. Moves never edit a board: `with_changes` copies the
//! slots and patches the changed ones into a fresh value.

use std::ops::Index;

use crate::game_state::chess_types::{Piece, Square};
use crate::utils::fen_generator::generate_board_field;
use crate::utils::fen_parser::parse_board_field;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    /// Build from rank rows, `ranks[0]` being rank "1" and `ranks[r][0]` file "a".
    pub fn from_ranks(ranks: [[Option<Piece>; 8]; 8]) -> Self {
        let mut squares = [None; 64];
        for (rank, row) in ranks.iter().enumerate() {
            for (file, slot) in row.iter().enumerate() {
                squares[rank * 8 + file] = *slot;
            }
        }
        Self { squares }
    }

    /// Decode the first FEN field. Lenient, see [`parse_board_field`].
    pub fn from_fen_field(field: &str) -> Self {
        parse_board_field(field)
    }

    pub fn to_fen_field(&self) -> String {
        generate_board_field(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.squares[square.index()].is_none()
    }

    /// Occupied squares with their pieces, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.piece_at(square).map(|piece| (square, piece)))
    }

    /// Copy this board and overwrite the listed slots, in order.
    #[must_use]
    pub fn with_changes(&self, changes: &[(Square, Option<Piece>)]) -> Board {
        let mut squares = self.squares;
        for (square, slot) in changes {
            squares[square.index()] = *slot;
        }
        Board { squares }
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, square: Square) -> &Self::Output {
        &self.squares[square.index()]
    }
}
