use crate::error::{Invariant, RulesError};

use super::{Color, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 8x8 grid. Each square is empty or holds exactly one piece, and every
/// stored `Piece` knows the square it stands on.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8], // [rank][file]
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard initial layout.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for (file, kind) in BACK_RANK.iter().enumerate() {
            for color in Color::BOTH {
                board.place_piece(Piece::new(*kind, color, Square::at(color.back_rank(), file)));
                board.place_piece(Piece::new(
                    PieceKind::Pawn,
                    color,
                    Square::at(color.pawn_start_rank(), file),
                ));
            }
        }
        board
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.rank()][sq.file()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Get just the color of the piece on a square
    #[inline]
    #[must_use]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|piece| piece.color)
    }

    /// Put `piece` on its own square, returning whatever stood there.
    pub fn place_piece(&mut self, piece: Piece) -> Option<Piece> {
        self.set(piece.square, Some(piece))
    }

    /// Take the piece off `sq`.
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.set(sq, None)
    }

    /// Relocate the piece on `from` to `to`, marking it moved.
    ///
    /// Returns the piece that was captured on `to`, if any. No legality
    /// checking happens here.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<Option<Piece>, RulesError> {
        let mut piece = self
            .remove_piece(from)
            .ok_or(Invariant::EmptySquare(from))?;
        piece.square = to;
        piece.has_moved = true;
        Ok(self.place_piece(piece))
    }

    /// Raw square write used by setup and probe rollback.
    pub(crate) fn set(&mut self, sq: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.squares[sq.rank()][sq.file()], piece)
    }

    /// Where the king of `color` stands.
    pub fn king_square(&self, color: Color) -> Result<Square, RulesError> {
        self.pieces_of(color)
            .find(|piece| piece.kind == PieceKind::King)
            .map(|king| king.square)
            .ok_or_else(|| {
                log::error!("king lookup failed: no {color} king");
                Invariant::KingMissing(color).into()
            })
    }

    /// All pieces, in square index order.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.squares.iter().flatten().flatten().copied()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |piece| piece.color == color)
    }

    #[must_use]
    pub fn count(&self, color: Color, kind: PieceKind) -> usize {
        self.pieces_of(color).filter(|p| p.kind == kind).count()
    }

    /// Checks that no square is out of sync with its piece and that each
    /// side has exactly one king.
    pub(crate) fn validate(&self) -> Result<(), RulesError> {
        for sq in Square::all() {
            if let Some(piece) = self.piece_at(sq) {
                if piece.square != sq {
                    return Err(Invariant::MisplacedPiece(sq).into());
                }
            }
        }
        for color in Color::BOTH {
            match self.count(color, PieceKind::King) {
                0 => return Err(Invariant::KingMissing(color).into()),
                1 => {}
                _ => return Err(Invariant::DuplicateKing(color).into()),
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_standard_layout() {
        let board = Board::standard();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.count(Color::White, PieceKind::Pawn), 8);
        assert_eq!(board.count(Color::Black, PieceKind::Knight), 2);
        assert_eq!(
            board.piece_at(sq("d1")),
            Some(Piece::new(PieceKind::Queen, Color::White, sq("d1")))
        );
        assert_eq!(board.king_square(Color::Black).unwrap(), sq("e8"));
        assert!(board.is_empty(sq("e4")));
        assert!(board.validate().is_ok());
    }

    #[test]
    fn test_move_piece_reports_capture() {
        let mut board = Board::standard();
        let captured = board.move_piece(sq("d1"), sq("d7")).unwrap();
        assert_eq!(
            captured,
            Some(Piece::new(PieceKind::Pawn, Color::Black, sq("d7")))
        );
        let queen = board.piece_at(sq("d7")).unwrap();
        assert_eq!(queen.kind, PieceKind::Queen);
        assert_eq!(queen.square, sq("d7"));
        assert!(queen.has_moved);
        assert!(board.is_empty(sq("d1")));
    }

    #[test]
    fn test_move_from_empty_square_fails() {
        let mut board = Board::standard();
        let before = board.clone();
        assert_eq!(
            board.move_piece(sq("e4"), sq("e5")),
            Err(RulesError::InvariantViolation(Invariant::EmptySquare(sq("e4"))))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_king_square_missing() {
        let mut board = Board::standard();
        board.remove_piece(sq("e1"));
        assert_eq!(
            board.king_square(Color::White),
            Err(RulesError::InvariantViolation(Invariant::KingMissing(Color::White)))
        );
        assert!(board.validate().is_err());
    }

    #[test]
    fn test_misplaced_piece_rejected() {
        let mut board = Board::standard();
        board.set(
            sq("e4"),
            Some(Piece::new(PieceKind::Knight, Color::White, sq("d4"))),
        );
        assert_eq!(
            board.validate(),
            Err(RulesError::InvariantViolation(Invariant::MisplacedPiece(sq("e4"))))
        );
    }

    #[test]
    fn test_duplicate_king_rejected() {
        let mut board = Board::standard();
        board.place_piece(Piece::new(PieceKind::King, Color::White, sq("e4")));
        assert_eq!(
            board.validate(),
            Err(RulesError::InvariantViolation(Invariant::DuplicateKing(Color::White)))
        );
    }
}
