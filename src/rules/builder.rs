//! Fluent builder for arbitrary game positions.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, PieceKind};
//! use chess_rules::rules::{Outcome, PositionBuilder};
//!
//! let state = PositionBuilder::new()
//!     .piece("e1".parse().unwrap(), Color::White, PieceKind::King)
//!     .piece("c1".parse().unwrap(), Color::White, PieceKind::Bishop)
//!     .piece("e8".parse().unwrap(), Color::Black, PieceKind::King)
//!     .build()
//!     .unwrap();
//! assert!(state.outcome().is_over());
//! ```

use crate::board::{Board, CastleSide, CastlingRights, Color, Piece, PieceKind, Square};
use crate::error::{Invariant, RulesError};

use super::config::DrawRules;
use super::state::GameState;

#[derive(Clone, Debug)]
pub struct PositionBuilder {
    board: Board,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    halfmove_clock: u32,
    rules: DrawRules,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// An empty board, White to move, no castling rights.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            rules: DrawRules::default(),
        }
    }

    /// The standard initial position with all castling rights.
    #[must_use]
    pub fn starting_position() -> Self {
        PositionBuilder {
            board: Board::standard(),
            castling_rights: CastlingRights::all(),
            ..Self::new()
        }
    }

    /// Place an unmoved piece, replacing anything on `square`.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.board.place_piece(Piece::new(kind, color, square));
        self
    }

    /// Place a piece that counts as having moved already.
    #[must_use]
    pub fn moved_piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.board.place_piece(Piece {
            has_moved: true,
            ..Piece::new(kind, color, square)
        });
        self
    }

    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.remove_piece(square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Grant one castling right on top of the current ones.
    #[must_use]
    pub fn castle(mut self, color: Color, side: CastleSide) -> Self {
        self.castling_rights.set(color, side);
        self
    }

    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub const fn draw_rules(mut self, rules: DrawRules) -> Self {
        self.rules = rules;
        self
    }

    /// Validate the position and evaluate its outcome.
    ///
    /// Fails with `InvariantViolation` unless each side has exactly one king,
    /// any en passant target sits behind a pawn that just double-stepped,
    /// and the side not to move is out of check.
    pub fn build(self) -> Result<GameState, RulesError> {
        self.board.validate()?;
        self.check_en_passant()?;

        let mut state = GameState::from_parts(
            self.board,
            self.castling_rights,
            self.en_passant_target,
            self.side_to_move,
            self.halfmove_clock,
            self.rules,
        );

        let waiting = self.side_to_move.opponent();
        if state.is_in_check(waiting)? {
            log::error!("rejecting position: {waiting} is in check out of turn");
            return Err(Invariant::OpponentInCheck(waiting).into());
        }

        state.outcome = state.evaluate_outcome()?;
        Ok(state)
    }

    /// The target must be the skipped square of a double step just made by
    /// the side not to move: start and target empty, pawn one square beyond.
    fn check_en_passant(&self) -> Result<(), RulesError> {
        let Some(target) = self.en_passant_target else {
            return Ok(());
        };
        let pusher = self.side_to_move.opponent();
        let dir = pusher.pawn_direction();
        let start = Square::at(pusher.pawn_start_rank(), target.file());

        let consistent = start.offset(dir, 0) == Some(target)
            && self.board.is_empty(start)
            && self.board.is_empty(target)
            && target
                .offset(dir, 0)
                .and_then(|sq| self.board.piece_at(sq))
                .is_some_and(|pawn| pawn.is(pusher, PieceKind::Pawn));
        if consistent {
            Ok(())
        } else {
            log::error!("rejecting position: bad en passant target {target}");
            Err(Invariant::EnPassantMismatch(target).into())
        }
    }
}
