use crate::board::{Board, CastleSide, Color, MoveRecord, Piece, PieceKind, Special, Square};
use crate::error::{Invariant, RulesError};
use crate::zobrist::position_key;

use super::legal::MoveKind;
use super::state::GameState;

/// What a probe changed, enough to put the board back exactly.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ProbeUndo {
    moved: Piece,
    captured: Option<Piece>,
    rook: Option<(Piece, Square)>,
}

impl Board {
    /// Play a move for a legality probe.
    ///
    /// A promoting pawn stays a pawn: what it becomes cannot change whether
    /// its own king is attacked. Every lookup happens before the first write.
    pub(crate) fn make_probe(
        &mut self,
        from: Square,
        to: Square,
        kind: MoveKind,
    ) -> Result<ProbeUndo, RulesError> {
        let moved = self.piece_at(from).ok_or(Invariant::EmptySquare(from))?;
        let rook = match kind {
            MoveKind::Castle(side) => {
                let rook_from = Square::at(from.rank(), side.rook_file());
                let rook = self
                    .piece_at(rook_from)
                    .ok_or(Invariant::EmptySquare(rook_from))?;
                Some((rook, Square::at(from.rank(), side.rook_target_file())))
            }
            _ => None,
        };

        let mut captured = match kind {
            MoveKind::EnPassant => self.set(Square::at(from.rank(), to.file()), None),
            _ => None,
        };
        self.set(from, None);
        let displaced = self.set(
            to,
            Some(Piece {
                square: to,
                has_moved: true,
                ..moved
            }),
        );
        captured = captured.or(displaced);

        if let Some((rook, rook_to)) = rook {
            self.set(rook.square, None);
            self.set(
                rook_to,
                Some(Piece {
                    square: rook_to,
                    has_moved: true,
                    ..rook
                }),
            );
        }

        Ok(ProbeUndo {
            moved,
            captured,
            rook,
        })
    }

    pub(crate) fn unmake_probe(&mut self, from: Square, to: Square, undo: ProbeUndo) {
        if let Some((rook, rook_to)) = undo.rook {
            self.set(rook_to, None);
            self.set(rook.square, Some(rook));
        }
        self.set(to, None);
        self.set(from, Some(undo.moved));
        if let Some(captured) = undo.captured {
            self.set(captured.square, Some(captured));
        }
    }
}

/// A probed move that is taken back when the guard drops.
pub(crate) struct Probe<'a> {
    board: &'a mut Board,
    from: Square,
    to: Square,
    undo: Option<ProbeUndo>,
}

impl<'a> Probe<'a> {
    pub(crate) fn new(
        board: &'a mut Board,
        from: Square,
        to: Square,
        kind: MoveKind,
    ) -> Result<Self, RulesError> {
        let undo = board.make_probe(from, to, kind)?;
        Ok(Probe {
            board,
            from,
            to,
            undo: Some(undo),
        })
    }

    pub(crate) fn board(&self) -> &Board {
        &*self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        if let Some(undo) = self.undo.take() {
            self.board.unmake_probe(self.from, self.to, undo);
        }
    }
}

impl GameState {
    /// Validate and commit a move for the side to move.
    ///
    /// `promotion` is required when a pawn reaches the last rank and ignored
    /// otherwise. On any error the state is left exactly as it was.
    pub fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<MoveRecord, RulesError> {
        if self.outcome.is_over() {
            return Err(RulesError::GameOver(self.outcome));
        }

        let illegal = RulesError::IllegalMove { from, to };
        let piece = match self.board.piece_at(from) {
            Some(piece) if piece.color == self.side_to_move => piece,
            _ => return Err(illegal),
        };
        if !self.legal_moves(from)?.contains(&to) {
            return Err(illegal);
        }

        let kind = self.classify(piece, to);
        let promotion = match (kind, promotion) {
            (MoveKind::Promotion, None) => {
                return Err(RulesError::MissingPromotionChoice { from, to })
            }
            (MoveKind::Promotion, Some(choice)) if !choice.is_promotion_choice() => {
                return Err(RulesError::InvalidPromotionChoice(choice))
            }
            (MoveKind::Promotion, choice) => choice,
            (_, Some(choice)) => {
                log::trace!("ignoring promotion choice {choice} on non-promoting {from}{to}");
                None
            }
            (_, None) => None,
        };

        let mut next = self.clone();
        let record = next.commit(piece, to, kind, promotion)?;
        next.outcome = next.evaluate_outcome()?;
        *self = next;

        log::debug!("{} played {}; game {}", record.color, record, self.outcome);
        Ok(record)
    }

    /// Carry out an already validated move and advance the turn.
    pub(crate) fn commit(
        &mut self,
        piece: Piece,
        to: Square,
        kind: MoveKind,
        promotion: Option<PieceKind>,
    ) -> Result<MoveRecord, RulesError> {
        let from = piece.square;
        let color = piece.color;

        let (captured, special) = match kind {
            MoveKind::Castle(side) => {
                let rank = from.rank();
                self.board.move_piece(from, to)?;
                self.board.move_piece(
                    Square::at(rank, side.rook_file()),
                    Square::at(rank, side.rook_target_file()),
                )?;
                (None, Special::castle(side))
            }
            MoveKind::EnPassant => {
                self.board.move_piece(from, to)?;
                let victim = self.board.remove_piece(Square::at(from.rank(), to.file()));
                (victim, Special::EnPassant)
            }
            MoveKind::Promotion => {
                let choice = promotion.ok_or(RulesError::MissingPromotionChoice { from, to })?;
                let captured = self.board.move_piece(from, to)?;
                self.board.place_piece(Piece {
                    kind: choice,
                    color,
                    square: to,
                    has_moved: true,
                });
                (captured, Special::Promotion(choice))
            }
            MoveKind::Quiet | MoveKind::DoubleStep => {
                (self.board.move_piece(from, to)?, Special::None)
            }
        };

        self.update_castling_rights(piece, captured);
        self.en_passant_target = match kind {
            MoveKind::DoubleStep => Square::new((from.rank() + to.rank()) / 2, from.file()),
            _ => None,
        };
        self.halfmove_clock = if piece.kind == PieceKind::Pawn || captured.is_some() {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };
        self.side_to_move = color.opponent();

        self.key = position_key(
            &self.board,
            self.castling_rights,
            self.en_passant_target,
            self.side_to_move,
        );
        self.repetitions.increment(self.key);

        let record = MoveRecord {
            kind: piece.kind,
            color,
            from,
            to,
            captured,
            special,
            gives_check: self.is_in_check(self.side_to_move)?,
        };
        self.history.push(record);
        Ok(record)
    }

    fn update_castling_rights(&mut self, moved: Piece, captured: Option<Piece>) {
        let before = self.castling_rights;
        match moved.kind {
            PieceKind::King => self.castling_rights.remove_color(moved.color),
            PieceKind::Rook => self.revoke_corner(moved.color, moved.square),
            _ => {}
        }
        if let Some(rook) = captured.filter(|p| p.kind == PieceKind::Rook) {
            self.revoke_corner(rook.color, rook.square);
        }

        debug_assert!(self.castling_rights.is_subset_of(before));
        if self.castling_rights != before {
            log::trace!(
                "castling rights {:04b} -> {:04b}",
                before.as_u8(),
                self.castling_rights.as_u8()
            );
        }
    }

    fn revoke_corner(&mut self, color: Color, square: Square) {
        if square.rank() != color.back_rank() {
            return;
        }
        if let Some(side) = CastleSide::from_rook_file(square.file()) {
            self.castling_rights.remove(color, side);
        }
    }
}
