use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, CastlingRights, Color, MoveRecord, Square};
use crate::zobrist::position_key;

use super::config::DrawRules;
use super::history::RepetitionTable;

/// Why a game was drawn without stalemate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DrawReason {
    InsufficientMaterial,
    ThreefoldRepetition,
    FiftyMoveRule,
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawReason::InsufficientMaterial => write!(f, "insufficient material"),
            DrawReason::ThreefoldRepetition => write!(f, "threefold repetition"),
            DrawReason::FiftyMoveRule => write!(f, "the fifty-move rule"),
        }
    }
}

/// Classification of the game after the latest move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    #[default]
    InProgress,
    Checkmate {
        winner: Color,
    },
    Stalemate,
    Draw(DrawReason),
}

impl Outcome {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning color, for checkmates
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Checkmate { winner } => write!(f, "{winner} wins by checkmate"),
            Outcome::Stalemate => write!(f, "draw by stalemate"),
            Outcome::Draw(reason) => write!(f, "draw by {reason}"),
        }
    }
}

/// Everything the rules need to know about a game in progress.
///
/// Mutated only through [`GameState::apply_move`]; every query takes `&self`.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) side_to_move: Color,
    pub(crate) history: Vec<MoveRecord>,
    pub(crate) outcome: Outcome,
    pub(crate) halfmove_clock: u32,
    pub(crate) key: u64,
    pub(crate) repetitions: RepetitionTable,
    pub(crate) rules: DrawRules,
}

impl GameState {
    /// The standard initial position with default draw rules.
    #[must_use]
    pub fn new() -> Self {
        GameState::with_rules(DrawRules::default())
    }

    /// The standard initial position.
    #[must_use]
    pub fn with_rules(rules: DrawRules) -> Self {
        GameState::from_parts(
            Board::standard(),
            CastlingRights::all(),
            None,
            Color::White,
            0,
            rules,
        )
    }

    /// Assemble a state and count its position once. The outcome starts as
    /// `InProgress`; callers evaluate it when the position is not the
    /// standard one.
    pub(crate) fn from_parts(
        board: Board,
        castling_rights: CastlingRights,
        en_passant_target: Option<Square>,
        side_to_move: Color,
        halfmove_clock: u32,
        rules: DrawRules,
    ) -> Self {
        let key = position_key(&board, castling_rights, en_passant_target, side_to_move);
        let mut repetitions = RepetitionTable::new();
        repetitions.increment(key);
        GameState {
            board,
            castling_rights,
            en_passant_target,
            side_to_move,
            history: Vec::new(),
            outcome: Outcome::InProgress,
            halfmove_clock,
            key,
            repetitions,
            rules,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// Outcome as of the latest move.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Half-moves since the last capture or pawn move.
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn position_key(&self) -> u64 {
        self.key
    }

    /// How often the current position has occurred, including now.
    #[must_use]
    pub fn repetition_count(&self) -> u32 {
        self.repetitions.get(self.key)
    }

    #[must_use]
    pub fn rules(&self) -> DrawRules {
        self.rules
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.side_to_move(), Color::White);
        assert_eq!(state.castling_rights(), CastlingRights::all());
        assert_eq!(state.en_passant_target(), None);
        assert!(state.history().is_empty());
        assert_eq!(state.outcome(), Outcome::InProgress);
        assert_eq!(state.repetition_count(), 1);
        assert_eq!(state.rules(), DrawRules::default());
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(
            Outcome::Checkmate {
                winner: Color::Black
            }
            .to_string(),
            "Black wins by checkmate"
        );
        assert_eq!(
            Outcome::Draw(DrawReason::InsufficientMaterial).to_string(),
            "draw by insufficient material"
        );
        assert!(Outcome::Stalemate.is_over());
        assert!(!Outcome::InProgress.is_over());
        assert_eq!(Outcome::Stalemate.winner(), None);
    }
}
