use std::collections::BTreeSet;

use crate::board::{Board, CastleSide, Color, Piece, PieceKind, Square};
use crate::error::{Invariant, RulesError};

use super::make_unmake::Probe;
use super::state::GameState;

const PROMOTION_OPTIONS: [Option<PieceKind>; 4] = [
    Some(PieceKind::Queen),
    Some(PieceKind::Rook),
    Some(PieceKind::Bishop),
    Some(PieceKind::Knight),
];

/// How a legal move has to be carried out on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MoveKind {
    Quiet,
    DoubleStep,
    EnPassant,
    Castle(CastleSide),
    Promotion,
}

impl GameState {
    /// Legal destinations for the piece on `from`.
    ///
    /// Empty when the square is empty or holds a piece of the side not to
    /// move. Never mutates `self`: candidates are probed on a scratch copy
    /// of the board that is rolled back after every probe.
    pub fn legal_moves(&self, from: Square) -> Result<BTreeSet<Square>, RulesError> {
        match self.board.piece_at(from) {
            Some(piece) if piece.color == self.side_to_move => {
                let mut scratch = self.board.clone();
                self.legal_targets(piece, &mut scratch)
            }
            _ => Ok(BTreeSet::new()),
        }
    }

    /// Every legal `(from, to)` pair for the side to move.
    pub fn all_legal_moves(&self) -> Result<Vec<(Square, Square)>, RulesError> {
        let mut scratch = self.board.clone();
        let mut moves = Vec::new();
        for piece in self.board.pieces_of(self.side_to_move) {
            for to in self.legal_targets(piece, &mut scratch)? {
                moves.push((piece.square, to));
            }
        }
        Ok(moves)
    }

    pub(crate) fn has_legal_move(&self) -> Result<bool, RulesError> {
        let mut scratch = self.board.clone();
        for piece in self.board.pieces_of(self.side_to_move) {
            if !self.legal_targets(piece, &mut scratch)?.is_empty() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Whether the king of `color` is attacked right now.
    pub fn is_in_check(&self, color: Color) -> Result<bool, RulesError> {
        let king = self.board.king_square(color)?;
        Ok(self.board.is_square_attacked(king, color.opponent()))
    }

    /// True when moving the piece on `from` to `to` would promote a pawn.
    /// Says nothing about legality.
    #[must_use]
    pub fn is_promotion(&self, from: Square, to: Square) -> bool {
        self.board
            .piece_at(from)
            .is_some_and(|piece| self.classify(piece, to) == MoveKind::Promotion)
    }

    /// Count leaf nodes of the legal move tree, each promotion choice
    /// counted separately.
    pub fn perft(&self, depth: u32) -> Result<u64, RulesError> {
        if depth == 0 {
            return Ok(1);
        }
        let mut nodes = 0;
        for (from, to) in self.all_legal_moves()? {
            let piece = self
                .board
                .piece_at(from)
                .ok_or(Invariant::EmptySquare(from))?;
            let kind = self.classify(piece, to);
            let choices: &[Option<PieceKind>] = if kind == MoveKind::Promotion {
                &PROMOTION_OPTIONS
            } else {
                &[None]
            };
            for &choice in choices {
                if depth == 1 {
                    nodes += 1;
                    continue;
                }
                let mut child = self.clone();
                child.commit(piece, to, kind, choice)?;
                nodes += child.perft(depth - 1)?;
            }
        }
        Ok(nodes)
    }

    pub(crate) fn classify(&self, piece: Piece, to: Square) -> MoveKind {
        let from = piece.square;
        match piece.kind {
            PieceKind::King if from.file().abs_diff(to.file()) == 2 => {
                if to.file() > from.file() {
                    MoveKind::Castle(CastleSide::Kingside)
                } else {
                    MoveKind::Castle(CastleSide::Queenside)
                }
            }
            PieceKind::Pawn if to.rank() == piece.color.pawn_promotion_rank() => MoveKind::Promotion,
            PieceKind::Pawn if from.rank().abs_diff(to.rank()) == 2 => MoveKind::DoubleStep,
            PieceKind::Pawn if from.file() != to.file() && self.board.is_empty(to) => {
                MoveKind::EnPassant
            }
            _ => MoveKind::Quiet,
        }
    }

    fn legal_targets(
        &self,
        piece: Piece,
        scratch: &mut Board,
    ) -> Result<BTreeSet<Square>, RulesError> {
        let mut legal = BTreeSet::new();
        for to in self.candidates(piece) {
            debug_assert_eq!(*scratch, self.board, "probe left the scratch board dirty");
            let kind = self.classify(piece, to);
            if keeps_king_safe(scratch, piece, to, kind)? {
                legal.insert(to);
            } else {
                log::trace!(
                    "{}{} rejected: leaves the {} king attacked",
                    piece.square,
                    to,
                    piece.color
                );
            }
        }
        Ok(legal)
    }

    /// Raw targets plus the pawn and castling moves only game state can
    /// justify.
    fn candidates(&self, piece: Piece) -> Vec<Square> {
        let mut squares = piece.raw_targets(&self.board);
        match piece.kind {
            PieceKind::Pawn => self.pawn_candidates(piece, &mut squares),
            PieceKind::King => squares.extend(self.castling_candidates(piece)),
            _ => {}
        }
        squares
    }

    fn pawn_candidates(&self, pawn: Piece, squares: &mut Vec<Square>) {
        let dir = pawn.color.pawn_direction();
        let empty = |sq: &Square| self.board.is_empty(*sq);

        if let Some(one) = pawn.square.offset(dir, 0).filter(empty) {
            squares.push(one);
            if pawn.square.rank() == pawn.color.pawn_start_rank() {
                if let Some(two) = one.offset(dir, 0).filter(empty) {
                    squares.push(two);
                }
            }
        }

        if let Some(target) = self.en_passant_target {
            if self.is_en_passant_capture(pawn, target) {
                squares.push(target);
            }
        }
    }

    fn is_en_passant_capture(&self, pawn: Piece, target: Square) -> bool {
        let dir = pawn.color.pawn_direction();
        let diagonal = [-1, 1]
            .iter()
            .any(|&df| pawn.square.offset(dir, df) == Some(target));
        let victim = Square::at(pawn.square.rank(), target.file());
        diagonal
            && self.board.is_empty(target)
            && self
                .board
                .piece_at(victim)
                .is_some_and(|p| p.is(pawn.color.opponent(), PieceKind::Pawn))
    }

    fn castling_candidates(&self, king: Piece) -> Vec<Square> {
        let rank = king.color.back_rank();
        if king.has_moved || king.square != Square::at(rank, 4) {
            return Vec::new();
        }
        CastleSide::BOTH
            .into_iter()
            .filter(|&side| self.may_castle(king, side))
            .map(|side| Square::at(rank, side.king_target_file()))
            .collect()
    }

    /// Right held, rook unmoved at home, gap empty, and the king's start,
    /// transit and landing squares unattacked.
    fn may_castle(&self, king: Piece, side: CastleSide) -> bool {
        let color = king.color;
        let rank = color.back_rank();
        if !self.castling_rights.has(color, side) {
            return false;
        }

        let rook_home = Square::at(rank, side.rook_file());
        let rook_ready = self
            .board
            .piece_at(rook_home)
            .is_some_and(|rook| rook.is(color, PieceKind::Rook) && !rook.has_moved);
        if !rook_ready {
            return false;
        }

        let king_file = king.square.file();
        let (low, high) = (
            king_file.min(side.rook_file()),
            king_file.max(side.rook_file()),
        );
        if !(low + 1..high).all(|file| self.board.is_empty(Square::at(rank, file))) {
            return false;
        }

        let target = side.king_target_file();
        let enemy = color.opponent();
        (king_file.min(target)..=king_file.max(target))
            .all(|file| !self.board.is_square_attacked(Square::at(rank, file), enemy))
    }
}

fn keeps_king_safe(
    scratch: &mut Board,
    piece: Piece,
    to: Square,
    kind: MoveKind,
) -> Result<bool, RulesError> {
    let probe = Probe::new(scratch, piece.square, to, kind)?;
    let king = probe.board().king_square(piece.color)?;
    Ok(!probe.board().is_square_attacked(king, piece.color.opponent()))
}
