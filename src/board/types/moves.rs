//! Records of applied moves.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::piece::{Color, Piece, PieceKind};
use super::square::Square;

/// The side effect a move carried beyond relocating one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Special {
    None,
    CastleKingside,
    CastleQueenside,
    EnPassant,
    Promotion(PieceKind),
}

impl Special {
    #[must_use]
    pub const fn castle(side: CastleSide) -> Self {
        match side {
            CastleSide::Kingside => Special::CastleKingside,
            CastleSide::Queenside => Special::CastleQueenside,
        }
    }

    #[must_use]
    pub const fn is_castle(self) -> bool {
        matches!(self, Special::CastleKingside | Special::CastleQueenside)
    }
}

/// One applied move, as appended to the game history.
///
/// For castling `from`/`to` are the king's squares; the rook's relocation is
/// implied by the side. For en passant `captured` holds the pawn taken from
/// the square behind `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub kind: PieceKind,
    pub color: Color,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
    pub special: Special,
    /// Whether the move left the opponent's king attacked
    pub gives_check: bool,
}

impl MoveRecord {
    #[inline]
    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Square the captured piece stood on (differs from `to` for en passant)
    #[must_use]
    pub fn capture_square(&self) -> Option<Square> {
        self.captured.map(|piece| piece.square)
    }

    /// Rook relocation for castling moves as `(from, to)`
    #[must_use]
    pub fn castling_rook(&self) -> Option<(Square, Square)> {
        let side = match self.special {
            Special::CastleKingside => CastleSide::Kingside,
            Special::CastleQueenside => CastleSide::Queenside,
            _ => return None,
        };
        let rank = self.from.rank();
        Some((
            Square::at(rank, side.rook_file()),
            Square::at(rank, side.rook_target_file()),
        ))
    }
}

/// Long algebraic form (`e2e4`, `e7e8q`), castling as `O-O` / `O-O-O`.
impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.special {
            Special::CastleKingside => f.write_str("O-O")?,
            Special::CastleQueenside => f.write_str("O-O-O")?,
            Special::Promotion(kind) => write!(f, "{}{}{}", self.from, self.to, kind.to_char())?,
            Special::None | Special::EnPassant => write!(f, "{}{}", self.from, self.to)?,
        }
        if self.gives_check {
            f.write_str("+")?;
        }
        Ok(())
    }
}
