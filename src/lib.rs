//! Chess rules engine: board model, legal move generation, move application
//! with castling, en passant and promotion, outcome detection, and a session
//! layer for interactive play.

pub mod board;
pub mod error;
pub mod rules;
pub mod session;
pub mod sync;
mod zobrist;

pub use board::{Board, Color, MoveRecord, Piece, PieceKind, Square};
pub use error::RulesError;
pub use rules::{GameState, Outcome};
pub use session::GameSession;
pub use sync::SharedSession;
