//! Immutable chess position: a `Board` plus its `GameInfo`.
//!
//! `Position` is the boundary the rest of the crate talks to. FEN text comes
//! in and goes out here, the pseudo-legal predicate and the move-kind queries
//! are asked here, and `apply` hands back a new position while leaving `self`
//! exactly as it was. Positions are small `Copy` values, so history nodes can
//! hold their own copy without sharing anything mutable.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::{Color, Piece, Square};
use crate::game_state::game_info::GameInfo;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks;
use crate::move_generation::move_generator::generate_pseudo_legal_moves;
use crate::moves::move_descriptions::{ChessMove, MoveKind};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::move_notation::{move_to_notation, NotationStyle};
use crate::utils::render_game_state::render_position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    board: Board,
    info: GameInfo,
}

impl Default for Position {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl Position {
    #[inline]
    pub const fn new(board: Board, info: GameInfo) -> Self {
        Self { board, info }
    }

    pub fn starting_position() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn info(&self) -> &GameInfo {
        &self.info
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.info.side_to_move
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    pub fn is_valid_pseudo_legal(&self, from: Square, to: Square) -> bool {
        legal_move_checks::is_valid_pseudo_legal(self, from, to)
    }

    /// Same as [`Position::is_valid_pseudo_legal`]; the promotion piece is
    /// only checked when the move is applied.
    pub fn is_valid_move(&self, mv: &ChessMove) -> bool {
        self.is_valid_pseudo_legal(mv.from, mv.to)
    }

    pub fn is_en_passant_move(&self, from: Square, to: Square) -> bool {
        legal_move_checks::is_en_passant_move(self, from, to)
    }

    pub fn is_promotion_move(&self, from: Square, to: Square) -> bool {
        legal_move_checks::is_promotion_move(self, from, to)
    }

    pub fn is_white_king_side_castle(&self, from: Square, to: Square) -> bool {
        legal_move_checks::is_white_king_side_castle(self, from, to)
    }

    pub fn is_white_queen_side_castle(&self, from: Square, to: Square) -> bool {
        legal_move_checks::is_white_queen_side_castle(self, from, to)
    }

    pub fn is_black_king_side_castle(&self, from: Square, to: Square) -> bool {
        legal_move_checks::is_black_king_side_castle(self, from, to)
    }

    pub fn is_black_queen_side_castle(&self, from: Square, to: Square) -> bool {
        legal_move_checks::is_black_queen_side_castle(self, from, to)
    }

    /// Kind of a pseudo-legal move, `None` when the move is not pseudo-legal.
    pub fn classify(&self, mv: &ChessMove) -> Option<MoveKind> {
        self.is_valid_move(mv)
            .then(|| legal_move_checks::classify_move(self, mv.from, mv.to))
    }

    /// Play `from -> to`. `promotion` defaults to a queen of the mover's color.
    pub fn apply(&self, from: Square, to: Square, promotion: Option<Piece>) -> ChessResult<Position> {
        apply_move(self, &ChessMove { from, to, promotion })
    }

    #[inline]
    pub fn apply_default(&self, from: Square, to: Square) -> ChessResult<Position> {
        self.apply(from, to, None)
    }

    pub fn apply_move(&self, mv: &ChessMove) -> ChessResult<Position> {
        apply_move(self, mv)
    }

    pub fn pseudo_legal_moves(&self) -> Vec<ChessMove> {
        generate_pseudo_legal_moves(self)
    }

    /// Short notation of `mv` played from this position.
    pub fn notation_for(&self, mv: &ChessMove, style: NotationStyle) -> ChessResult<String> {
        move_to_notation(self, mv, style)
    }
}

impl FromStr for Position {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_fen(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_position(self))
    }
}
