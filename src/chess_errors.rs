//! Errors used throughout the engine.
//!
//! `ChessErrors` is the single error type returned by position setup, move
//! validation/application and history-tree editing. Every failure is surfaced
//! synchronously by the call that caused it; a rejected call leaves the
//! position and the history tree untouched.
//!
//! FEN piece decoding is deliberately lenient: unknown piece letters are
//! skipped instead of reported, so there is no variant for them.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Piece, Square};
use crate::history::history_node::NodeId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A move was requested from an empty square.
    #[error("no piece on start square {0}")]
    NoPieceAtStart(Square),

    /// The pseudo-legal predicate rejected the move.
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    /// The promotion piece does not belong to the side promoting.
    #[error("promotion piece must be {expected:?}, got {found:?}")]
    WrongPromotionPieceColor { expected: Color, found: Color },

    /// Pawns and kings cannot be promoted to.
    #[error("{0} is not a promotion piece")]
    InvalidPromotionPiece(Piece),

    /// Line promotion attempted at a node that has no main line.
    #[error("history node {0} has no main variation")]
    NoMainVariation(NodeId),

    #[error("variation index {index} out of range (node has {len} variations)")]
    VariationIndexOutOfRange { index: usize, len: usize },

    /// The handle points at a node that was deleted or never existed.
    #[error("unknown history node {0}")]
    UnknownHistoryNode(NodeId),

    /// Structural FEN problem: missing fields, bad side letter, bad counters.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid algebraic notation: {0}")]
    InvalidAlgebraic(String),
}

pub type ChessResult<T> = Result<T, ChessErrors>;
