//! Chess board representation.
//!
//! A mailbox board: an 8x8 grid where each square is empty or holds one
//! `Piece`. Raw movement patterns and attack detection live in `movegen`.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color, Square};
//!
//! let board = Board::standard();
//! let e2: Square = "e2".parse().unwrap();
//! let pawn = board.piece_at(e2).unwrap();
//! assert_eq!(pawn.color, Color::White);
//! assert!(!board.is_square_attacked("e4".parse().unwrap(), Color::Black));
//! ```

pub(crate) mod attack_tables;
mod display;
mod movegen;
mod state;
mod types;

pub use state::Board;
pub use types::{CastleSide, CastlingRights, Color, MoveRecord, Piece, PieceKind, Special, Square};
