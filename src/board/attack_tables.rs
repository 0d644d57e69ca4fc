//! Precomputed geometry: leaper targets, pawn attack squares and sliding rays.
//!
//! Tables are indexed by `Square::index()` and built once on first use.

use once_cell::sync::Lazy;

use super::{Color, Square};

const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const DIR_N: usize = 0;
pub(crate) const DIR_S: usize = 1;
pub(crate) const DIR_E: usize = 2;
pub(crate) const DIR_W: usize = 3;
pub(crate) const DIR_NE: usize = 4;
pub(crate) const DIR_NW: usize = 5;
pub(crate) const DIR_SE: usize = 6;
pub(crate) const DIR_SW: usize = 7;

pub(crate) const ROOK_DIRECTIONS: [usize; 4] = [DIR_N, DIR_S, DIR_E, DIR_W];
pub(crate) const BISHOP_DIRECTIONS: [usize; 4] = [DIR_NE, DIR_NW, DIR_SE, DIR_SW];
pub(crate) const QUEEN_DIRECTIONS: [usize; 8] =
    [DIR_N, DIR_S, DIR_E, DIR_W, DIR_NE, DIR_NW, DIR_SE, DIR_SW];

const RAY_DELTAS: [(isize, isize); 8] = [
    (1, 0),   // N
    (-1, 0),  // S
    (0, 1),   // E
    (0, -1),  // W
    (1, 1),   // NE
    (1, -1),  // NW
    (-1, 1),  // SE
    (-1, -1), // SW
];

fn leaper_table(deltas: &[(isize, isize)]) -> [Vec<Square>; 64] {
    std::array::from_fn(|idx| {
        let from = Square::at(idx / 8, idx % 8);
        deltas
            .iter()
            .filter_map(|&(dr, df)| from.offset(dr, df))
            .collect()
    })
}

pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| leaper_table(&KNIGHT_DELTAS));

pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| leaper_table(&KING_DELTAS));

/// `PAWN_ATTACKS[color][sq]`: the two (or one, on the edge) forward diagonals.
pub(crate) static PAWN_ATTACKS: Lazy<[[Vec<Square>; 64]; 2]> = Lazy::new(|| {
    Color::BOTH.map(|color| {
        let dir = color.pawn_direction();
        leaper_table(&[(dir, -1), (dir, 1)])
    })
});

/// `RAYS[direction][sq]`: squares walked outward from `sq`, nearest first.
static RAYS: Lazy<[[Vec<Square>; 64]; 8]> = Lazy::new(|| {
    RAY_DELTAS.map(|(dr, df)| {
        std::array::from_fn(|idx| {
            let mut ray = Vec::with_capacity(7);
            let mut current = Square::at(idx / 8, idx % 8);
            while let Some(next) = current.offset(dr, df) {
                ray.push(next);
                current = next;
            }
            ray
        })
    })
});

#[inline]
pub(crate) fn ray(direction: usize, from: Square) -> &'static [Square] {
    &RAYS[direction][from.index()]
}

#[inline]
pub(crate) fn pawn_attacks(color: Color, from: Square) -> &'static [Square] {
    &PAWN_ATTACKS[color.index()][from.index()]
}
