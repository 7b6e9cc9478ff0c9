//! Crate root module declarations for the branch_chess position engine.
//!
//! Exposes the position model (board, game info, FEN codec), pseudo-legal
//! move validation and application, the branching game history, and the
//! command-line session so binaries, tests and benches share stable paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_info;
    pub mod position;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod castling_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_shared;
    pub mod move_generator;
    pub mod perft;
}

pub mod history {
    pub mod history_node;
}

pub mod session {
    pub mod session_top;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod move_notation;
    pub mod render_game_state;
}

pub use chess_errors::{ChessErrors, ChessResult};
pub use game_state::board::Board;
pub use game_state::chess_types::{CastlingRight, CastlingRights, Color, Piece, PieceKind, Square};
pub use game_state::game_info::GameInfo;
pub use game_state::position::Position;
pub use history::history_node::{GameHistory, HistoryNode, LineRoot, NodeId};
pub use moves::move_descriptions::{ChessMove, MoveKind};
pub use utils::move_notation::NotationStyle;
