//! Zobrist hashing for chess positions.
//!
//! A position key covers piece placement, castling rights, the en passant
//! target and the side to move: exactly what threefold repetition compares.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Board, CastlingRights, Color, Square};

pub(crate) struct ZobristKeys {
    // piece_keys[piece_type][color][square_index]
    piece_keys: [[[u64; 64]; 2]; 6],
    black_to_move_key: u64,
    // castling_keys[bit] for each of the four rights
    castling_keys: [u64; 4],
    // en_passant_keys[file_index] (only file matters for EP target)
    en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64); // Use a fixed seed for reproducibility
        let mut piece_keys = [[[0; 64]; 2]; 6];
        let mut castling_keys = [0; 4];
        let mut en_passant_keys = [0; 8];

        for piece in &mut piece_keys {
            for color in piece.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        for key in &mut castling_keys {
            *key = rng.gen();
        }

        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }
}

static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

pub(crate) fn position_key(
    board: &Board,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    side_to_move: Color,
) -> u64 {
    let keys = &*ZOBRIST;
    let mut hash = board.pieces().fold(0u64, |hash, piece| {
        hash ^ keys.piece_keys[piece.kind.index()][piece.color.index()][piece.square.index()]
    });

    if side_to_move == Color::Black {
        hash ^= keys.black_to_move_key;
    }

    let rights = castling_rights.as_u8();
    for (bit, key) in keys.castling_keys.iter().enumerate() {
        if rights & (1 << bit) != 0 {
            hash ^= key;
        }
    }

    if let Some(ep_square) = en_passant_target {
        hash ^= keys.en_passant_keys[ep_square.file()];
    }

    hash
}
