//! Pseudo-legal perft: leaf counting over the move tree.
//!
//! Counts differ from legal-move perft once positions with checks or pins
//! appear, because moves that leave the king attacked are still counted.
//! Up to depth 3 from the standard start they coincide (20 / 400 / 8902).

use crate::chess_errors::ChessResult;
use crate::game_state::position::Position;
use crate::move_generation::legal_move_checks::classify_move;
use crate::move_generation::move_generator::generate_pseudo_legal_moves;
use crate::moves::move_descriptions::MoveKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
    }
}

pub fn perft_pseudo_legal(position: &Position, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();

    for mv in generate_pseudo_legal_moves(position) {
        let next = position.apply_move(&mv)?;

        if depth == 1 {
            total.nodes += 1;
            match classify_move(position, mv.from, mv.to) {
                MoveKind::EnPassant => {
                    total.en_passant += 1;
                    total.captures += 1;
                }
                MoveKind::Castle(_) => total.castles += 1,
                MoveKind::Promotion => {
                    total.promotions += 1;
                    if position.board().piece_at(mv.to).is_some() {
                        total.captures += 1;
                    }
                }
                MoveKind::Regular => {
                    if position.board().piece_at(mv.to).is_some() {
                        total.captures += 1;
                    }
                }
            }
        } else {
            total.merge(perft_pseudo_legal(&next, depth - 1)?);
        }
    }

    Ok(total)
}

/// Per-root-move node counts, handy when comparing against another engine.
pub fn perft_divide(position: &Position, depth: u8) -> ChessResult<Vec<(String, usize)>> {
    let mut out = Vec::new();
    if depth == 0 {
        return Ok(out);
    }

    for mv in generate_pseudo_legal_moves(position) {
        let next = position.apply_move(&mv)?;
        let counts = perft_pseudo_legal(&next, depth - 1)?;
        out.push((mv.to_string(), counts.nodes));
    }

    Ok(out)
}
