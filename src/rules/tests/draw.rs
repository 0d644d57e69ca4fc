//! Draw detection tests.

use super::{placed, play, sq};
use crate::board::Color;
use crate::error::RulesError;
use crate::rules::{DrawReason, DrawRules, GameState, Outcome};

#[test]
fn test_stalemate_position() {
    let state = placed("Qf7 Kg6 kh8")
        .side_to_move(Color::Black)
        .build()
        .unwrap();
    assert_eq!(state.outcome(), Outcome::Stalemate);
    assert!(!state.is_in_check(Color::Black).unwrap());
    assert!(state.all_legal_moves().unwrap().is_empty());
}

#[test]
fn test_move_into_stalemate_ends_game() {
    let mut state = placed("Qe7 Kg6 kh8").build().unwrap();
    play(&mut state, "e7f7");
    assert_eq!(state.outcome(), Outcome::Stalemate);

    let err = state.apply_move(sq("h8"), sq("g8"), None).unwrap_err();
    assert_eq!(err, RulesError::GameOver(Outcome::Stalemate));
}

#[test]
fn test_threefold_repetition_by_knight_shuffle() {
    let mut state = GameState::new();
    play(&mut state, "g1f3 g8f6 f3g1 f6g8");
    assert_eq!(state.repetition_count(), 2);
    play(&mut state, "g1f3 g8f6 f3g1");
    assert_eq!(state.outcome(), Outcome::InProgress);

    play(&mut state, "f6g8");
    assert_eq!(state.repetition_count(), 3);
    assert_eq!(
        state.outcome(),
        Outcome::Draw(DrawReason::ThreefoldRepetition)
    );
}

#[test]
fn test_repetition_disabled() {
    let mut state = GameState::with_rules(DrawRules {
        repetition_limit: 0,
        ..DrawRules::default()
    });
    play(
        &mut state,
        "g1f3 g8f6 f3g1 f6g8 g1f3 g8f6 f3g1 f6g8 g1f3 g8f6 f3g1 f6g8",
    );
    assert_eq!(state.repetition_count(), 4);
    assert_eq!(state.outcome(), Outcome::InProgress);
}

#[test]
fn test_fifty_move_rule() {
    let mut state = placed("Ke1 Ra1 ke8").halfmove_clock(98).build().unwrap();
    play(&mut state, "a1a2");
    assert_eq!(state.halfmove_clock(), 99);
    assert_eq!(state.outcome(), Outcome::InProgress);

    play(&mut state, "e8d7");
    assert_eq!(state.outcome(), Outcome::Draw(DrawReason::FiftyMoveRule));
}

#[test]
fn test_fifty_move_clock_resets() {
    let mut state = placed("Ke1 Ra1 Pb2 ke8 qa8").halfmove_clock(40).build().unwrap();
    play(&mut state, "b2b3");
    assert_eq!(state.halfmove_clock(), 0);
    play(&mut state, "e8d8 a1a4");
    assert_eq!(state.halfmove_clock(), 2);
    play(&mut state, "a8a4");
    assert_eq!(state.halfmove_clock(), 0);
}

#[test]
fn test_fifty_move_rule_disabled() {
    let mut state = placed("Ke1 Ra1 ke8")
        .halfmove_clock(120)
        .draw_rules(DrawRules {
            fifty_move_limit: None,
            ..DrawRules::default()
        })
        .build()
        .unwrap();
    assert_eq!(state.outcome(), Outcome::InProgress);
    play(&mut state, "a1a2");
    assert_eq!(state.outcome(), Outcome::InProgress);
}

#[test]
fn test_king_and_bishop_versus_king() {
    let state = placed("Ke1 Bc1 ke8").build().unwrap();
    assert_eq!(
        state.outcome(),
        Outcome::Draw(DrawReason::InsufficientMaterial)
    );
}

#[test]
fn test_capture_leaves_insufficient_material() {
    let mut state = placed("Ke1 Bc1 ke8 rd1").build().unwrap();
    assert_eq!(state.outcome(), Outcome::InProgress);
    play(&mut state, "e1d1");
    assert_eq!(
        state.outcome(),
        Outcome::Draw(DrawReason::InsufficientMaterial)
    );
}

#[test]
fn test_material_classification() {
    let drawn = |placement: &str| placed(placement).build().unwrap().is_insufficient_material();

    assert!(drawn("Ke1 ke8"));
    assert!(drawn("Ke1 Nb1 ke8"));
    assert!(drawn("Ke1 Bc1 ke8 bf8"), "bishops on the same color");
    assert!(drawn("Ke1 Bc1 Ba3 ke8"));
    assert!(!drawn("Ke1 Bc1 ke8 bc8"), "bishops on opposite colors");
    assert!(!drawn("Ke1 Nb1 Ng1 ke8"));
    assert!(!drawn("Ke1 Nb1 ke8 bc8"));
    assert!(!drawn("Ke1 Pa2 ke8"));
    assert!(!drawn("Ke1 Ra1 ke8"));
}

#[test]
fn test_insufficient_material_rule_disabled() {
    let state = placed("Ke1 Bc1 ke8")
        .draw_rules(DrawRules::none())
        .build()
        .unwrap();
    assert_eq!(state.outcome(), Outcome::InProgress);
}
