//! Interactive game flow: turn order, piece selection and pending promotions.
//!
//! A [`GameSession`] sits between a UI and [`GameState`]. The UI selects a
//! piece to learn its destinations, then chooses one. A pawn move onto the
//! last rank without a promotion piece is remembered so the UI can ask the
//! player and finish it with [`GameSession::complete_promotion`].

use std::collections::BTreeSet;

use crate::board::{Board, Color, MoveRecord, PieceKind, Square};
use crate::error::RulesError;
use crate::rules::{DrawRules, GameState, Outcome};

/// A committed move and the game classification right after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub record: MoveRecord,
    pub outcome: Outcome,
}

/// A promoting move waiting for the player to pick a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingPromotion {
    pub from: Square,
    pub to: Square,
}

#[derive(Clone, Debug)]
pub struct GameSession {
    state: GameState,
    rules: DrawRules,
    pending: Option<PendingPromotion>,
}

impl GameSession {
    #[must_use]
    pub fn new() -> Self {
        GameSession::with_rules(DrawRules::default())
    }

    #[must_use]
    pub fn with_rules(rules: DrawRules) -> Self {
        GameSession {
            state: GameState::with_rules(rules),
            rules,
            pending: None,
        }
    }

    /// Continue from an arbitrary position, keeping its draw rules for
    /// later new games.
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        GameSession {
            rules: state.rules(),
            state,
            pending: None,
        }
    }

    /// Reset to the standard initial position.
    pub fn start_new_game(&mut self) {
        self.state = GameState::with_rules(self.rules);
        self.pending = None;
        log::debug!("new game started");
    }

    /// Legal destinations for the piece on `square`.
    ///
    /// Empty for an empty square, a piece of the side not to move, or a
    /// finished game. Abandons any pending promotion.
    pub fn select_piece(&mut self, square: Square) -> Result<BTreeSet<Square>, RulesError> {
        self.pending = None;
        if self.state.outcome().is_over() {
            return Ok(BTreeSet::new());
        }
        self.state.legal_moves(square)
    }

    /// Play `from`->`to` for the current player.
    ///
    /// When the move promotes and `promotion` is `None`, the move is kept as
    /// pending and `MissingPromotionChoice` is returned.
    pub fn choose_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<MoveOutcome, RulesError> {
        self.pending = None;
        match self.state.apply_move(from, to, promotion) {
            Ok(record) => Ok(MoveOutcome {
                record,
                outcome: self.state.outcome(),
            }),
            Err(err) => {
                if let RulesError::MissingPromotionChoice { from, to } = err {
                    self.pending = Some(PendingPromotion { from, to });
                    log::debug!("{from}{to} waits for a promotion choice");
                } else {
                    log::warn!("rejected {from}{to}: {err}");
                }
                Err(err)
            }
        }
    }

    /// Finish the pending promotion with `kind`.
    ///
    /// An invalid `kind` keeps the promotion pending so the player can pick
    /// again.
    pub fn complete_promotion(&mut self, kind: PieceKind) -> Result<MoveOutcome, RulesError> {
        let Some(PendingPromotion { from, to }) = self.pending else {
            log::warn!("promotion to {kind} requested with nothing pending");
            return Err(RulesError::NoPendingPromotion);
        };
        let result = self.choose_move(from, to, Some(kind));
        if let Err(RulesError::InvalidPromotionChoice(_)) = result {
            self.pending = Some(PendingPromotion { from, to });
        }
        result
    }

    #[must_use]
    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        self.pending
    }

    #[must_use]
    pub fn needs_promotion_choice(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    #[must_use]
    pub fn current_player(&self) -> Color {
        self.state.side_to_move()
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        self.state.history()
    }

    /// Whether the current player's king is attacked.
    pub fn in_check(&self) -> Result<bool, RulesError> {
        self.state.is_in_check(self.current_player())
    }
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new()
    }
}
