use super::super::attack_tables::ray;
use super::super::{Board, Piece, Square};

/// Walk each ray up to and including the first occupied square.
pub(super) fn attacks(piece: &Piece, board: &Board, directions: &[usize]) -> Vec<Square> {
    let mut squares = Vec::new();
    for &dir in directions {
        for &to in ray(dir, piece.square) {
            squares.push(to);
            if !board.is_empty(to) {
                break;
            }
        }
    }
    squares
}

pub(super) fn targets(piece: &Piece, board: &Board, directions: &[usize]) -> Vec<Square> {
    let mut squares = attacks(piece, board, directions);
    squares.retain(|&to| board.color_at(to) != Some(piece.color));
    squares
}

pub(super) fn attacks_square(
    piece: &Piece,
    board: &Board,
    directions: &[usize],
    target: Square,
) -> bool {
    directions.iter().any(|&dir| {
        for &to in ray(dir, piece.square) {
            if to == target {
                return true;
            }
            if !board.is_empty(to) {
                return false;
            }
        }
        false
    })
}
