use super::super::attack_tables::pawn_attacks;
use super::super::{Board, Piece, Square};

#[inline]
pub(super) fn attacks(pawn: &Piece) -> &'static [Square] {
    pawn_attacks(pawn.color, pawn.square)
}

pub(super) fn capture_targets(pawn: &Piece, board: &Board) -> Vec<Square> {
    attacks(pawn)
        .iter()
        .copied()
        .filter(|&to| board.color_at(to) == Some(pawn.color.opponent()))
        .collect()
}
