//! Chess rules on top of the board.
//!
//! [`GameState`] owns a board plus everything the rules track beyond piece
//! placement: castling rights, the en passant target, side to move, move
//! history and repetition counts. It answers legal-move queries through
//! `&self` and changes only through [`GameState::apply_move`], which either
//! commits a validated move completely or leaves the state untouched.
//!
//! # Example
//! ```
//! use chess_rules::rules::{GameState, Outcome};
//!
//! let mut game = GameState::new();
//! let e2 = "e2".parse().unwrap();
//! let e4 = "e4".parse().unwrap();
//! assert!(game.legal_moves(e2).unwrap().contains(&e4));
//!
//! let record = game.apply_move(e2, e4, None).unwrap();
//! assert_eq!(record.to_string(), "e2e4");
//! assert_eq!(game.en_passant_target(), Some("e3".parse().unwrap()));
//! assert_eq!(game.outcome(), Outcome::InProgress);
//! ```

mod builder;
mod config;
mod history;
mod legal;
mod make_unmake;
mod outcome;
mod state;

pub use builder::PositionBuilder;
pub use config::DrawRules;
pub use state::{DrawReason, GameState, Outcome};

#[cfg(test)]
mod tests;
