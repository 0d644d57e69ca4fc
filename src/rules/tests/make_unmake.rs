//! Probe rollback and all-or-nothing move application.

use super::{placed, play, sq};
use crate::board::{Color, PieceKind};
use crate::error::RulesError;
use crate::rules::legal::MoveKind;
use crate::rules::make_unmake::Probe;
use crate::rules::GameState;

#[test]
fn test_probe_restores_en_passant_capture() {
    let mut state = GameState::new();
    play(&mut state, "e2e4 a7a6 e4e5 d7d5");
    let mut scratch = state.board().clone();
    {
        let probe = Probe::new(&mut scratch, sq("e5"), sq("d6"), MoveKind::EnPassant).unwrap();
        assert!(probe.board().is_empty(sq("d5")));
        assert!(probe.board().is_empty(sq("e5")));
        assert!(probe.board().piece_at(sq("d6")).unwrap().has_moved);
    }
    assert_eq!(&scratch, state.board());
}

#[test]
fn test_probe_restores_castling() {
    let state = placed("Ke1 Rh1 ke8")
        .castle(Color::White, crate::board::CastleSide::Kingside)
        .build()
        .unwrap();
    let mut scratch = state.board().clone();
    {
        let probe = Probe::new(
            &mut scratch,
            sq("e1"),
            sq("g1"),
            MoveKind::Castle(crate::board::CastleSide::Kingside),
        )
        .unwrap();
        assert!(probe.board().piece_at(sq("f1")).is_some());
        assert!(probe.board().is_empty(sq("h1")));
    }
    assert_eq!(&scratch, state.board());
    assert!(!scratch.piece_at(sq("h1")).unwrap().has_moved);
}

#[test]
fn test_probe_restores_capture() {
    let state = placed("Ke1 Qd1 ke8 qd8").build().unwrap();
    let mut scratch = state.board().clone();
    {
        let probe = Probe::new(&mut scratch, sq("d1"), sq("d8"), MoveKind::Quiet).unwrap();
        assert_eq!(probe.board().count(Color::Black, PieceKind::Queen), 0);
    }
    assert_eq!(&scratch, state.board());
}

#[test]
fn test_probe_on_empty_square_fails_cleanly() {
    let mut scratch = GameState::new().board().clone();
    let before = scratch.clone();
    assert!(Probe::new(&mut scratch, sq("e4"), sq("e5"), MoveKind::Quiet).is_err());
    assert_eq!(scratch, before);
}

#[test]
fn test_legal_move_queries_are_idempotent() {
    let mut state = GameState::new();
    play(&mut state, "e2e4 d7d5");
    let key = state.position_key();
    let board = state.board().clone();

    let first = state.legal_moves(sq("e4")).unwrap();
    let second = state.legal_moves(sq("e4")).unwrap();
    assert_eq!(first, second);
    let all_first = state.all_legal_moves().unwrap();
    let all_second = state.all_legal_moves().unwrap();
    assert_eq!(all_first, all_second);

    assert_eq!(state.position_key(), key);
    assert_eq!(state.board(), &board);
    assert_eq!(state.history().len(), 2);
}

#[test]
fn test_failed_move_changes_nothing() {
    let mut state = placed("Pa7 Ke1 kh8").build().unwrap();
    let board = state.board().clone();
    let key = state.position_key();

    assert!(matches!(
        state.apply_move(sq("a7"), sq("a8"), None),
        Err(RulesError::MissingPromotionChoice { .. })
    ));
    assert!(matches!(
        state.apply_move(sq("e1"), sq("e3"), None),
        Err(RulesError::IllegalMove { .. })
    ));

    assert_eq!(state.board(), &board);
    assert_eq!(state.position_key(), key);
    assert_eq!(state.side_to_move(), Color::White);
    assert_eq!(state.halfmove_clock(), 0);
    assert!(state.history().is_empty());
}

#[test]
fn test_history_records_each_move() {
    let mut state = GameState::new();
    play(&mut state, "e2e4 d7d5 e4d5");
    let history: Vec<String> = state.history().iter().map(ToString::to_string).collect();
    assert_eq!(history, ["e2e4", "d7d5", "e4d5"]);

    let capture = state.last_move().unwrap();
    assert_eq!(capture.kind, PieceKind::Pawn);
    assert_eq!(capture.color, Color::White);
    assert_eq!(
        capture.captured.map(|p| (p.kind, p.color)),
        Some((PieceKind::Pawn, Color::Black))
    );
    assert_eq!(state.side_to_move(), Color::Black);
}

#[test]
fn test_moved_flags_follow_pieces() {
    let mut state = GameState::new();
    play(&mut state, "g1f3 g8f6");
    assert!(state.board().piece_at(sq("f3")).unwrap().has_moved);
    assert!(!state.board().piece_at(sq("b1")).unwrap().has_moved);
}
