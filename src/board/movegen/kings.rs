use super::super::attack_tables::KING_TARGETS;
use super::super::{Board, Piece, Square};

/// One-step neighbours. Castling is a rule-engine concern, not a raw target.
#[inline]
pub(super) fn attacks(king: &Piece) -> &'static [Square] {
    &KING_TARGETS[king.square.index()]
}

pub(super) fn targets(king: &Piece, board: &Board) -> Vec<Square> {
    attacks(king)
        .iter()
        .copied()
        .filter(|&to| board.color_at(to) != Some(king.color))
        .collect()
}
