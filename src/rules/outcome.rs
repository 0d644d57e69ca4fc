use crate::board::PieceKind;
use crate::error::RulesError;

use super::state::{DrawReason, GameState, Outcome};

impl GameState {
    /// Classify the current position for the side to move.
    ///
    /// Mate and stalemate take precedence; among draws the order is
    /// insufficient material, fifty-move rule, then repetition.
    pub fn evaluate_outcome(&self) -> Result<Outcome, RulesError> {
        let mover = self.side_to_move;
        if !self.has_legal_move()? {
            return Ok(if self.is_in_check(mover)? {
                Outcome::Checkmate {
                    winner: mover.opponent(),
                }
            } else {
                Outcome::Stalemate
            });
        }

        if self.rules.insufficient_material && self.is_insufficient_material() {
            return Ok(Outcome::Draw(DrawReason::InsufficientMaterial));
        }
        if let Some(limit) = self.rules.fifty_move_limit {
            if self.halfmove_clock >= limit {
                return Ok(Outcome::Draw(DrawReason::FiftyMoveRule));
            }
        }
        let limit = self.rules.repetition_limit;
        if limit > 0 && self.repetition_count() >= limit {
            return Ok(Outcome::Draw(DrawReason::ThreefoldRepetition));
        }
        Ok(Outcome::InProgress)
    }

    /// Neither side has mating material: kings plus at most one minor piece,
    /// or kings plus bishops that all stand on one square color.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let mut minors = 0;
        let mut knights = 0;
        let mut light_bishop = false;
        let mut dark_bishop = false;

        for piece in self.board.pieces().filter(|p| p.kind != PieceKind::King) {
            if !piece.kind.is_minor() {
                return false;
            }
            minors += 1;
            if piece.kind == PieceKind::Knight {
                knights += 1;
            } else if piece.square.is_light() {
                light_bishop = true;
            } else {
                dark_bishop = true;
            }
        }

        minors <= 1 || (knights == 0 && !(light_bishop && dark_bishop))
    }
}
