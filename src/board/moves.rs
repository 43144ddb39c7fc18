/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Result};
use arrayvec::ArrayVec;

use super::{Piece, Rank, Square};

/// Maximum number of moves the generator can emit for one position.
///
/// Generous: the most legal moves known in any reachable position is 218.
/// Pseudo-legal over-production can exceed that in many-queen promotion
/// endgames, so the bound leaves ample room.
pub const MAX_NUM_MOVES: usize = 512;

/// A fixed-capacity list of moves.
pub type MoveList = ArrayVec<Move, MAX_NUM_MOVES>;

/// A move: an origin square and a destination square, packed into 12 bits of
/// a `u16`.
///
/// No capture, promotion, or castling tag is carried on the value. What a
/// move *does* is derived from the position it is applied to — see
/// [`MoveKind`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Move(u16);

impl Move {
    /// Mask for the 6 bits of a square index.
    const SQUARE_MASK: u16 = 0b11_1111;

    /// Creates a new [`Move`] from an origin and destination.
    ///
    /// ```
    /// # use heron::{Move, Square};
    /// let mv = Move::new(Square::E2, Square::E4);
    /// assert_eq!(mv.from(), Square::E2);
    /// assert_eq!(mv.to(), Square::E4);
    /// ```
    #[inline(always)]
    pub const fn new(from: Square, to: Square) -> Self {
        Self((from.inner() as u16) << 6 | to.inner() as u16)
    }

    /// The origin square.
    #[inline(always)]
    pub const fn from(&self) -> Square {
        Square((self.0 >> 6 & Self::SQUARE_MASK) as u8)
    }

    /// The destination square.
    #[inline(always)]
    pub const fn to(&self) -> Square {
        Square((self.0 & Self::SQUARE_MASK) as u8)
    }

    /// Parse a [`Move`] from long algebraic notation, like `e2e4`.
    ///
    /// A trailing promotion character is accepted and ignored, since
    /// promotions are detected structurally and always produce a queen.
    pub fn from_uci(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (Some(from), Some(to)) = (s.get(0..2), s.get(2..4)) else {
            bail!("move string {s:?} is too short");
        };
        Ok(Self::new(from.parse()?, to.parse()?))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

/// What applying a move does, beyond relocating the moved piece.
///
/// Special moves are detected structurally rather than flagged on the move
/// value: a king travelling two files is a castle, a pawn reaching the far
/// rank promotes, a pawn stepping diagonally onto an empty square captures en
/// passant. The kind is computed once when a move is applied and drives the
/// side effects of application.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MoveKind {
    /// A plain relocation or ordinary capture.
    Quiet,
    /// A pawn advancing two ranks from its starting rank.
    DoublePush,
    /// A king travelling two files; the matching rook jumps over it.
    Castle,
    /// A pawn capturing diagonally onto an empty square; the bypassed pawn
    /// is removed.
    EnPassant,
    /// A pawn reaching the far rank; it becomes a queen.
    Promotion,
}

impl MoveKind {
    /// Classify `mv`, given the piece being moved and whether the destination
    /// square is occupied.
    pub fn classify(piece: Piece, mv: Move, destination_occupied: bool) -> Self {
        let (from, to) = (mv.from(), mv.to());

        if piece.is_king() && from.file().inner().abs_diff(to.file().inner()) == 2 {
            return Self::Castle;
        }

        if piece.is_pawn() {
            if to.rank() == Rank::promotion_rank(piece.color()) {
                return Self::Promotion;
            }
            if from.file() != to.file() && !destination_occupied {
                return Self::EnPassant;
            }
            if from.rank().inner().abs_diff(to.rank().inner()) == 2 {
                return Self::DoublePush;
            }
        }

        Self::Quiet
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Color, PieceKind};

    #[test]
    fn move_packing_round_trips() {
        for from in [Square::A1, Square::E4, Square::H8] {
            for to in [Square::A8, Square::B1, Square::G6] {
                let mv = Move::new(from, to);
                assert_eq!(mv.from(), from);
                assert_eq!(mv.to(), to);
            }
        }
    }

    #[test]
    fn uci_round_trips() {
        let mv = Move::from_uci("e2e4").unwrap();
        assert_eq!(mv, Move::new(Square::E2, Square::E4));
        assert_eq!(mv.to_string(), "e2e4");

        // Promotion suffix is tolerated
        let mv = Move::from_uci("e7e8q").unwrap();
        assert_eq!(mv, Move::new(Square::E7, Square::E8));

        assert!(Move::from_uci("e2").is_err());
    }

    #[test]
    fn structural_classification() {
        let white_king = Piece::new(Color::White, PieceKind::King);
        let white_pawn = Piece::new(Color::White, PieceKind::Pawn);
        let black_pawn = Piece::new(Color::Black, PieceKind::Pawn);

        assert_eq!(
            MoveKind::classify(white_king, Move::new(Square::E1, Square::G1), false),
            MoveKind::Castle
        );
        assert_eq!(
            MoveKind::classify(white_king, Move::new(Square::E1, Square::F1), false),
            MoveKind::Quiet
        );
        assert_eq!(
            MoveKind::classify(white_pawn, Move::new(Square::E7, Square::E8), false),
            MoveKind::Promotion
        );
        assert_eq!(
            MoveKind::classify(white_pawn, Move::new(Square::E7, Square::D8), true),
            MoveKind::Promotion
        );
        assert_eq!(
            MoveKind::classify(white_pawn, Move::new(Square::E5, Square::D6), false),
            MoveKind::EnPassant
        );
        assert_eq!(
            MoveKind::classify(white_pawn, Move::new(Square::E5, Square::D6), true),
            MoveKind::Quiet
        );
        assert_eq!(
            MoveKind::classify(white_pawn, Move::new(Square::E2, Square::E4), false),
            MoveKind::DoublePush
        );
        assert_eq!(
            MoveKind::classify(black_pawn, Move::new(Square::D2, Square::D1), false),
            MoveKind::Promotion
        );
    }
}
