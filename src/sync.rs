//! Thread-safe access to a game session.
//!
//! Lets a UI thread and a worker (clock, network peer) drive the same game.

use std::collections::BTreeSet;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::{Color, PieceKind, Square};
use crate::error::RulesError;
use crate::rules::{GameState, Outcome};
use crate::session::{GameSession, MoveOutcome};

/// A [`GameSession`] behind `Arc<Mutex<_>>`.
///
/// Every operation holds the lock for its whole duration, so no clone ever
/// observes a half-applied move.
#[derive(Clone, Debug, Default)]
pub struct SharedSession(Arc<Mutex<GameSession>>);

impl SharedSession {
    #[must_use]
    pub fn new(session: GameSession) -> Self {
        SharedSession(Arc::new(Mutex::new(session)))
    }

    /// Run `f` with shared access to the session.
    pub fn with<R>(&self, f: impl FnOnce(&GameSession) -> R) -> R {
        f(&self.0.lock())
    }

    /// Run `f` with exclusive access to the session.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut GameSession) -> R) -> R {
        f(&mut self.0.lock())
    }

    /// Copy of the current game state.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.with(|session| session.state().clone())
    }

    pub fn select_piece(&self, square: Square) -> Result<BTreeSet<Square>, RulesError> {
        self.with_mut(|session| session.select_piece(square))
    }

    pub fn choose_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<MoveOutcome, RulesError> {
        self.with_mut(|session| session.choose_move(from, to, promotion))
    }

    pub fn complete_promotion(&self, kind: PieceKind) -> Result<MoveOutcome, RulesError> {
        self.with_mut(|session| session.complete_promotion(kind))
    }

    pub fn start_new_game(&self) {
        self.with_mut(GameSession::start_new_game);
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.with(GameSession::outcome)
    }

    #[must_use]
    pub fn current_player(&self) -> Color {
        self.with(GameSession::current_player)
    }
}

impl From<GameSession> for SharedSession {
    fn from(session: GameSession) -> Self {
        SharedSession::new(session)
    }
}
