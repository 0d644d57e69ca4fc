use super::super::attack_tables::KNIGHT_TARGETS;
use super::super::{Board, Piece, Square};

#[inline]
pub(super) fn attacks(knight: &Piece) -> &'static [Square] {
    &KNIGHT_TARGETS[knight.square.index()]
}

pub(super) fn targets(knight: &Piece, board: &Board) -> Vec<Square> {
    attacks(knight)
        .iter()
        .copied()
        .filter(|&to| board.color_at(to) != Some(knight.color))
        .collect()
}
