//! Raw movement patterns and attack detection.
//!
//! Everything here is a pure function of board contents. Pawn pushes, double
//! steps and en passant depend on game state and live in `rules::legal`.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack_tables::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use super::{Board, Color, Piece, PieceKind, Square};

impl Piece {
    /// Squares this piece could reach by its movement pattern, with blocking.
    ///
    /// Sliders stop at the first occupied square and include it only when it
    /// holds an enemy piece. Knights and kings skip friendly squares. Pawns
    /// report only their diagonal captures onto enemy pieces.
    #[must_use]
    pub fn raw_targets(&self, board: &Board) -> Vec<Square> {
        match self.kind {
            PieceKind::Pawn => pawns::capture_targets(self, board),
            PieceKind::Knight => knights::targets(self, board),
            PieceKind::Bishop => sliders::targets(self, board, &BISHOP_DIRECTIONS),
            PieceKind::Rook => sliders::targets(self, board, &ROOK_DIRECTIONS),
            PieceKind::Queen => sliders::targets(self, board, &QUEEN_DIRECTIONS),
            PieceKind::King => kings::targets(self, board),
        }
    }

    /// Squares this piece attacks, whoever stands on them.
    #[must_use]
    pub fn attacks(&self, board: &Board) -> Vec<Square> {
        match self.kind {
            PieceKind::Pawn => pawns::attacks(self).to_vec(),
            PieceKind::Knight => knights::attacks(self).to_vec(),
            PieceKind::Bishop => sliders::attacks(self, board, &BISHOP_DIRECTIONS),
            PieceKind::Rook => sliders::attacks(self, board, &ROOK_DIRECTIONS),
            PieceKind::Queen => sliders::attacks(self, board, &QUEEN_DIRECTIONS),
            PieceKind::King => kings::attacks(self).to_vec(),
        }
    }

    /// Same answer as `self.attacks(board).contains(&target)` without
    /// building the list.
    #[must_use]
    pub fn attacks_square(&self, board: &Board, target: Square) -> bool {
        match self.kind {
            PieceKind::Pawn => pawns::attacks(self).contains(&target),
            PieceKind::Knight => knights::attacks(self).contains(&target),
            PieceKind::Bishop => sliders::attacks_square(self, board, &BISHOP_DIRECTIONS, target),
            PieceKind::Rook => sliders::attacks_square(self, board, &ROOK_DIRECTIONS, target),
            PieceKind::Queen => sliders::attacks_square(self, board, &QUEEN_DIRECTIONS, target),
            PieceKind::King => kings::attacks(self).contains(&target),
        }
    }
}

impl Board {
    /// True when any piece of `by` could capture on `square` this turn.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        self.pieces_of(by)
            .any(|piece| piece.square != square && piece.attacks_square(self, square))
    }

    /// Pieces of `by` attacking `square`.
    #[must_use]
    pub fn attackers_of(&self, square: Square, by: Color) -> Vec<Piece> {
        self.pieces_of(by)
            .filter(|piece| piece.square != square && piece.attacks_square(self, square))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn put(board: &mut Board, s: &str, color: Color, kind: PieceKind) -> Piece {
        let piece = Piece::new(kind, color, sq(s));
        board.place_piece(piece);
        piece
    }

    #[test]
    fn test_start_position_raw_targets() {
        let board = Board::standard();
        let knight = board.piece_at(sq("g1")).unwrap();
        let mut targets = knight.raw_targets(&board);
        targets.sort();
        assert_eq!(targets, vec![sq("f3"), sq("h3")]);

        let rook = board.piece_at(sq("a1")).unwrap();
        assert!(rook.raw_targets(&board).is_empty());
        let queen = board.piece_at(sq("d8")).unwrap();
        assert!(queen.raw_targets(&board).is_empty());
    }

    #[test]
    fn test_slider_stops_at_blockers() {
        let mut board = Board::empty();
        let rook = put(&mut board, "d4", Color::White, PieceKind::Rook);
        put(&mut board, "d6", Color::Black, PieceKind::Pawn);
        put(&mut board, "f4", Color::White, PieceKind::Knight);

        let targets = rook.raw_targets(&board);
        assert!(targets.contains(&sq("d5")));
        assert!(targets.contains(&sq("d6")), "enemy blocker is a capture");
        assert!(!targets.contains(&sq("d7")));
        assert!(targets.contains(&sq("e4")));
        assert!(!targets.contains(&sq("f4")), "friendly blocker is excluded");
        assert!(!targets.contains(&sq("g4")));
        assert_eq!(targets.len(), 3 + 2 + 1 + 3);

        let attacks = rook.attacks(&board);
        assert!(attacks.contains(&sq("f4")), "friendly blocker is still attacked");
    }

    #[test]
    fn test_pawn_raw_targets_are_captures_only() {
        let mut board = Board::empty();
        let pawn = put(&mut board, "e4", Color::White, PieceKind::Pawn);
        assert!(pawn.raw_targets(&board).is_empty());
        put(&mut board, "d5", Color::Black, PieceKind::Knight);
        put(&mut board, "f5", Color::White, PieceKind::Knight);
        assert_eq!(pawn.raw_targets(&board), vec![sq("d5")]);
        assert_eq!(pawn.attacks(&board), vec![sq("d5"), sq("f5")]);
    }

    #[test]
    fn test_square_attacked_by_each_kind() {
        let mut board = Board::empty();
        put(&mut board, "a1", Color::Black, PieceKind::Bishop);
        assert!(board.is_square_attacked(sq("h8"), Color::Black));
        put(&mut board, "d4", Color::White, PieceKind::Pawn);
        assert!(!board.is_square_attacked(sq("h8"), Color::Black));
        assert!(board.is_square_attacked(sq("d4"), Color::Black));

        put(&mut board, "g6", Color::Black, PieceKind::Knight);
        assert!(board.is_square_attacked(sq("h4"), Color::Black));
        assert!(board.is_square_attacked(sq("e5"), Color::White));
        assert!(board.is_square_attacked(sq("c5"), Color::White));
        assert!(!board.is_square_attacked(sq("d5"), Color::White));
    }

    #[test]
    fn test_attackers_of() {
        let mut board = Board::empty();
        put(&mut board, "e1", Color::White, PieceKind::King);
        put(&mut board, "e8", Color::Black, PieceKind::Rook);
        put(&mut board, "b4", Color::Black, PieceKind::Bishop);
        let attackers = board.attackers_of(sq("e1"), Color::Black);
        assert_eq!(attackers.len(), 2);
    }
}
