//! Rules tests.
//!
//! - `perft.rs` - Move-tree node counts against published totals
//! - `draw.rs` - Stalemate, repetition, fifty-move rule, insufficient material
//! - `make_unmake.rs` - Probe rollback and all-or-nothing move application
//! - `edge_cases.rs` - Castling conditions, en passant, promotion, pins
//! - `proptest.rs` - Property-based tests over random games

mod draw;
mod make_unmake;

use crate::board::{Color, PieceKind, Square};
use crate::rules::{GameState, PositionBuilder};

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

/// Builder seeded from a placement list such as `"Ke1 Ra1 pe7 ke8"`:
/// uppercase letters are White, lowercase Black. Pieces start unmoved.
pub(super) fn placed(placement: &str) -> PositionBuilder {
    placement
        .split_whitespace()
        .fold(PositionBuilder::new(), |builder, token| {
            let letter = token.chars().next().unwrap();
            let kind = PieceKind::from_char(letter).unwrap();
            let color = if letter.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            builder.piece(sq(&token[1..]), color, kind)
        })
}

/// Play a list of moves written as `"e2e4 e7e5 g1f3"`, promotions as `e7e8q`.
pub(super) fn play(state: &mut GameState, moves: &str) {
    for mv in moves.split_whitespace() {
        let from = sq(&mv[0..2]);
        let to = sq(&mv[2..4]);
        let promotion = mv[4..].chars().next().and_then(PieceKind::from_char);
        state
            .apply_move(from, to, promotion)
            .unwrap_or_else(|err| panic!("{mv} rejected: {err}"));
    }
}
