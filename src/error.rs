//! Error types for board and rules operations.

use std::fmt;

use crate::board::{Color, PieceKind, Square};
use crate::rules::Outcome;

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// A broken board invariant. Seeing one means a bug, not a bad user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invariant {
    /// No king of this color is on the board
    KingMissing(Color),
    /// More than one king of this color is on the board
    DuplicateKing(Color),
    /// A piece was expected on this square
    EmptySquare(Square),
    /// The piece stored on this square records a different square
    MisplacedPiece(Square),
    /// The en passant target does not follow a double step by the side
    /// that just moved
    EnPassantMismatch(Square),
    /// The side not to move is in check, so its king could be captured
    OpponentInCheck(Color),
}

impl fmt::Display for Invariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Invariant::KingMissing(color) => write!(f, "no {color} king on the board"),
            Invariant::DuplicateKing(color) => write!(f, "more than one {color} king"),
            Invariant::EmptySquare(sq) => write!(f, "expected a piece on {sq}"),
            Invariant::MisplacedPiece(sq) => write!(f, "piece on {sq} is filed elsewhere"),
            Invariant::EnPassantMismatch(sq) => {
                write!(f, "en passant target {sq} has no double-stepped pawn")
            }
            Invariant::OpponentInCheck(color) => {
                write!(f, "{color} is in check but it is not their move")
            }
        }
    }
}

/// Error type for rule engine and session operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// Destination is not among the legal moves of the piece on `from`
    IllegalMove { from: Square, to: Square },
    /// A pawn reached the last rank and no promotion piece was supplied
    MissingPromotionChoice { from: Square, to: Square },
    /// Promotion to a king or pawn was requested
    InvalidPromotionChoice(PieceKind),
    /// No promotion is waiting to be completed
    NoPendingPromotion,
    /// The game already ended
    GameOver(Outcome),
    /// Internal corruption; not recoverable
    InvariantViolation(Invariant),
}

impl RulesError {
    /// True for failures the UI can answer by asking the player again.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, RulesError::InvariantViolation(_))
    }
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesError::IllegalMove { from, to } => write!(f, "Illegal move {from}{to}"),
            RulesError::MissingPromotionChoice { from, to } => {
                write!(f, "Move {from}{to} needs a promotion piece")
            }
            RulesError::InvalidPromotionChoice(kind) => {
                write!(f, "Cannot promote to a {kind}")
            }
            RulesError::NoPendingPromotion => write!(f, "No promotion is pending"),
            RulesError::GameOver(outcome) => write!(f, "Game is over: {outcome}"),
            RulesError::InvariantViolation(invariant) => {
                write!(f, "Board invariant violated: {invariant}")
            }
        }
    }
}

impl std::error::Error for RulesError {}

impl From<Invariant> for RulesError {
    fn from(invariant: Invariant) -> Self {
        RulesError::InvariantViolation(invariant)
    }
}
