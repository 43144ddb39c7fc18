/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use anyhow::{bail, Result};

use super::{Color, File, Move, MoveKind, Piece, PieceKind, Rank, Square};

/// The caller-owned, mailbox-style board representation: one slot per square.
///
/// This is the representation the engine's entry point mutates in place. The
/// search itself never touches it; a bitboard [`Position`](super::Position)
/// is rebuilt from it at the start of every query.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board([Option<Piece>; Square::COUNT]);

impl Board {
    /// An empty board.
    #[inline(always)]
    pub const fn new() -> Self {
        Self([None; Square::COUNT])
    }

    /// The standard chess starting position.
    pub fn standard() -> Self {
        use PieceKind::*;
        let mut board = Self::new();

        let back_rank = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        for (file, &kind) in back_rank.iter().enumerate() {
            let file = File::new(file as u8);
            board.set(
                Square::new(file, Rank::ONE),
                Piece::new(Color::White, kind),
            );
            board.set(
                Square::new(file, Rank::TWO),
                Piece::new(Color::White, Pawn),
            );
            board.set(
                Square::new(file, Rank::EIGHT),
                Piece::new(Color::Black, kind),
            );
            board.set(
                Square::new(file, Rank::SEVEN),
                Piece::new(Color::Black, Pawn),
            );
        }

        board
    }

    /// The piece on `square`, if any.
    #[inline(always)]
    pub const fn piece_at(&self, square: Square) -> Option<Piece> {
        self.0[square.index()]
    }

    /// Place `piece` on `square`, replacing whatever was there.
    #[inline(always)]
    pub fn set(&mut self, square: Square, piece: Piece) {
        self.0[square] = Some(piece);
    }

    /// Remove the piece on `square`, if any.
    #[inline(always)]
    pub fn clear(&mut self, square: Square) {
        self.0[square] = None;
    }

    /// Iterate over all occupied squares and their pieces.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(|square| self.piece_at(square).map(|piece| (square, piece)))
    }

    /// Apply `mv` to this board in place.
    ///
    /// Special effects are derived structurally from the board state via
    /// [`MoveKind::classify`]: castling relocates the rook, en passant
    /// removes the bypassed pawn, and a promotion produces a queen.
    ///
    /// The move must already be certified by the Validator; applying a move
    /// whose origin square is empty is a precondition violation and reports
    /// an error without modifying the board.
    pub fn apply(&mut self, mv: Move) -> Result<()> {
        let (from, to) = (mv.from(), mv.to());
        let Some(piece) = self.piece_at(from) else {
            bail!("no piece on {from} to apply {mv}");
        };

        let kind = MoveKind::classify(piece, mv, self.piece_at(to).is_some());

        self.clear(from);
        self.set(to, piece);

        match kind {
            MoveKind::Castle => {
                let rank = from.rank();
                let (rook_from, rook_to) = if to.file() > from.file() {
                    (Square::new(File::H, rank), Square::new(File::F, rank))
                } else {
                    (Square::new(File::A, rank), Square::new(File::D, rank))
                };
                if let Some(rook) = self.piece_at(rook_from) {
                    self.set(rook_to, rook);
                    self.clear(rook_from);
                }
            }
            MoveKind::EnPassant => {
                self.clear(Square::new(to.file(), from.rank()));
            }
            MoveKind::Promotion => {
                self.set(to, Piece::new(piece.color(), PieceKind::Queen));
            }
            MoveKind::Quiet | MoveKind::DoublePush => {}
        }

        Ok(())
    }
}

impl Default for Board {
    #[inline(always)]
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    /// Renders the board as an 8x8 grid of piece characters, rank 8 at the top.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                let square = Square::new(File::new(file), Rank::new(rank));
                let c = self.piece_at(square).map_or('.', |piece| piece.char());
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn standard_position_has_32_pieces() {
        let board = Board::standard();
        assert_eq!(board.iter().count(), 32);
        assert_eq!(
            board.piece_at(Square::E1),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            board.piece_at(Square::D8),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert_eq!(board.piece_at(Square::E4), None);
    }

    #[test]
    fn quiet_moves_relocate() {
        let mut board = Board::standard();
        board.apply(Move::new(Square::G1, Square::F3)).unwrap();
        assert_eq!(board.piece_at(Square::G1), None);
        assert_eq!(
            board.piece_at(Square::F3),
            Some(Piece::new(Color::White, PieceKind::Knight))
        );
    }

    #[test]
    fn castling_moves_the_rook() {
        let mut board = Board::new();
        board.set(Square::E1, Piece::new(Color::White, PieceKind::King));
        board.set(Square::H1, Piece::new(Color::White, PieceKind::Rook));
        board.set(Square::A1, Piece::new(Color::White, PieceKind::Rook));

        board.apply(Move::new(Square::E1, Square::G1)).unwrap();
        assert_eq!(
            board.piece_at(Square::G1),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            board.piece_at(Square::F1),
            Some(Piece::new(Color::White, PieceKind::Rook))
        );
        assert_eq!(board.piece_at(Square::H1), None);
        // The queenside rook did not move
        assert_eq!(
            board.piece_at(Square::A1),
            Some(Piece::new(Color::White, PieceKind::Rook))
        );
    }

    #[test]
    fn en_passant_removes_the_bypassed_pawn() {
        let mut board = Board::new();
        board.set(Square::E5, Piece::new(Color::White, PieceKind::Pawn));
        board.set(Square::D5, Piece::new(Color::Black, PieceKind::Pawn));

        board.apply(Move::new(Square::E5, Square::D6)).unwrap();
        assert_eq!(
            board.piece_at(Square::D6),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(board.piece_at(Square::D5), None);
    }

    #[test]
    fn promotion_yields_a_queen() {
        let mut board = Board::new();
        board.set(Square::B7, Piece::new(Color::White, PieceKind::Pawn));
        board.set(Square::A8, Piece::new(Color::Black, PieceKind::Rook));

        board.apply(Move::new(Square::B7, Square::A8)).unwrap();
        assert_eq!(
            board.piece_at(Square::A8),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
    }

    #[test]
    fn applying_from_an_empty_square_fails() {
        let mut board = Board::new();
        assert!(board.apply(Move::new(Square::E2, Square::E4)).is_err());
    }
}
