//! Core chess types.
//!
//! This module contains the fundamental value types used throughout the crate:
//! - `PieceKind`, `Color` and `Piece` - what stands on a square
//! - `Square` - a bounds-checked board coordinate
//! - `CastlingRights` and `CastleSide` - castling state
//! - `MoveRecord` and `Special` - history entries

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastleSide, CastlingRights};
pub use moves::{MoveRecord, Special};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;
