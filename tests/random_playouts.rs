//! Seeded random pseudo-legal games checked move by move.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};

use branch_chess::game_state::chess_types::{Color, PieceKind};
use branch_chess::game_state::position::Position;
use branch_chess::history::history_node::GameHistory;
use branch_chess::moves::move_descriptions::MoveKind;

const GAMES: u64 = 24;
const PLIES: usize = 120;

fn check_transition(before: &Position, after: &Position, kind: MoveKind, is_pawn: bool, is_capture: bool) {
    let old = before.info();
    let new = after.info();

    assert_eq!(new.side_to_move, old.side_to_move.opposite());

    let expected_fullmove = match old.side_to_move {
        Color::Black => old.fullmove_number + 1,
        Color::White => old.fullmove_number,
    };
    assert_eq!(new.fullmove_number, expected_fullmove);

    if is_pawn || is_capture {
        assert_eq!(new.halfmove_clock, 0);
    } else {
        assert_eq!(new.halfmove_clock, old.halfmove_clock + 1);
    }

    assert!(new.castling_rights.is_subset_of(old.castling_rights));
    if kind.is_castle() {
        assert!(new.castling_rights.iter().all(|right| right.color() != old.side_to_move));
    }
}

#[test]
fn random_games_keep_the_bookkeeping_invariants() {
    for seed in 0..GAMES {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut position = Position::starting_position();

        for _ in 0..PLIES {
            let moves = position.pseudo_legal_moves();
            let Some(mv) = moves.choose(&mut rng) else {
                break;
            };

            let kind = position.classify(mv).expect("generated moves are pseudo-legal");
            let mover = position.piece_at(mv.from).expect("generated from an occupied square");
            let is_pawn = mover.kind == PieceKind::Pawn;
            let is_capture = kind == MoveKind::EnPassant || position.piece_at(mv.to).is_some();
            let is_double_push = is_pawn && mv.rank_delta().abs() == 2;

            let next = position.apply_move(mv).expect("generated moves apply");
            check_transition(&position, &next, kind, is_pawn, is_capture);

            if is_double_push {
                assert_eq!(next.info().en_passant_file, Some(mv.from.file()));
            } else {
                assert_eq!(next.info().en_passant_file, None);
            }

            let fen = next.to_fen();
            let reparsed = Position::from_fen(&fen).expect("generated FEN parses");
            assert_eq!(reparsed, next, "seed {seed}: {fen}");
            assert_eq!(reparsed.to_fen(), fen);

            position = next;
        }
    }
}

#[test]
fn replaying_a_game_into_history_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut history = GameHistory::starting_position();
    let root = history.root();
    let mut cursor = root;
    let mut played = Vec::new();

    for _ in 0..40 {
        let position = *history.position(cursor).expect("cursor stays live");
        let moves = position.pseudo_legal_moves();
        let Some(mv) = moves.choose(&mut rng) else {
            break;
        };
        cursor = history.play_move(cursor, mv).expect("generated moves apply");
        played.push(*mv);
    }

    let live = history.len();
    let mut replay = root;
    for mv in &played {
        replay = history.play_move(replay, mv).expect("replayed moves apply");
    }

    assert_eq!(replay, cursor);
    assert_eq!(history.len(), live);
    assert_eq!(history.main_line_end(root).expect("end"), cursor);
}
