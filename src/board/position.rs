/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use super::{
    Bitboard, Board, CastlingRights, Color, File, Move, MoveKind, Piece, PieceKind, Rank, Square,
    ZobristKey,
};

/// The bitboard representation of a position: twelve 64-bit masks, one per
/// (color, piece-kind) pair, plus side to move, castling rights, and the
/// en-passant file.
///
/// No square is ever set in more than one mask. Occupancy unions are derived
/// on demand and never stored, so they cannot desynchronize.
///
/// A [`Position`] is rebuilt from the caller's mailbox [`Board`] at the start
/// of each query and is immutable afterwards: applying a move produces a new
/// value via [`Position::with_move_made`] (copy-make), never an in-place
/// mutation. This trades a little memory churn for the absence of an entire
/// class of incomplete-unmake bugs.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pieces: [[Bitboard; PieceKind::COUNT]; Color::COUNT],
    side_to_move: Color,
    castling_rights: CastlingRights,
    ep_file: Option<File>,
}

impl Position {
    /// Rebuild a [`Position`] from a mailbox board.
    ///
    /// `last_move` provides the double-push context: if the piece standing on
    /// its destination is a pawn that just advanced two ranks, its file
    /// becomes the en-passant file.
    pub fn from_board(
        board: &Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        last_move: Option<Move>,
    ) -> Self {
        let mut pieces = [[Bitboard::EMPTY; PieceKind::COUNT]; Color::COUNT];

        for (square, piece) in board.iter() {
            pieces[piece.color().index()][piece.kind().index()] |= Bitboard::from_square(square);
        }

        let ep_file = last_move.and_then(|mv| {
            let piece = board.piece_at(mv.to())?;
            let double_push = piece.is_pawn()
                && mv.from().rank().inner().abs_diff(mv.to().rank().inner()) == 2;
            double_push.then(|| mv.to().file())
        });

        Self {
            pieces,
            side_to_move,
            castling_rights,
            ep_file,
        }
    }

    /// The side to move.
    #[inline(always)]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// The castling rights still available.
    #[inline(always)]
    pub const fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// The file on which an en-passant capture is available, if any.
    #[inline(always)]
    pub const fn ep_file(&self) -> Option<File> {
        self.ep_file
    }

    /// The squares holding a `color` piece of `kind`.
    #[inline(always)]
    pub const fn pieces_of(&self, color: Color, kind: PieceKind) -> Bitboard {
        self.pieces[color.index()][kind.index()]
    }

    /// The squares occupied by `color`, derived on demand.
    #[inline(always)]
    pub fn color(&self, color: Color) -> Bitboard {
        let boards = &self.pieces[color.index()];
        boards[0] | boards[1] | boards[2] | boards[3] | boards[4] | boards[5]
    }

    /// All occupied squares, derived on demand.
    #[inline(always)]
    pub fn occupied(&self) -> Bitboard {
        self.color(Color::White) | self.color(Color::Black)
    }

    /// The piece on `square`, if any.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        for color in Color::all() {
            for kind in PieceKind::all() {
                if self.pieces_of(color, kind).contains(square) {
                    return Some(Piece::new(color, kind));
                }
            }
        }
        None
    }

    /// The square of `color`'s king, if one is on the board.
    #[inline(always)]
    pub fn king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color, PieceKind::King).lsb()
    }

    /// Whether `color` has any piece besides pawns and its king.
    ///
    /// Null-move pruning is unsound without this material on the board
    /// (zugzwang), so the search checks it before passing the turn.
    #[inline(always)]
    pub fn has_non_pawn_material(&self, color: Color) -> bool {
        (self.pieces_of(color, PieceKind::Knight)
            | self.pieces_of(color, PieceKind::Bishop)
            | self.pieces_of(color, PieceKind::Rook)
            | self.pieces_of(color, PieceKind::Queen))
        .is_nonempty()
    }

    /// Whether `mv` captures something: its destination holds an enemy piece,
    /// or it is an en-passant capture.
    pub fn is_capture(&self, mv: Move) -> bool {
        let mover = self.side_to_move;
        if self.color(mover.opponent()).contains(mv.to()) {
            return true;
        }

        // A pawn stepping diagonally onto an empty square is en passant
        self.pieces_of(mover, PieceKind::Pawn).contains(mv.from())
            && mv.from().file() != mv.to().file()
    }

    /// Iterate over all occupied squares and their pieces.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Color::all().into_iter().flat_map(move |color| {
            PieceKind::all().into_iter().flat_map(move |kind| {
                self.pieces_of(color, kind)
                    .into_iter()
                    .map(move |square| (square, Piece::new(color, kind)))
            })
        })
    }

    /// The Zobrist fingerprint of this position.
    #[inline(always)]
    pub fn key(&self) -> ZobristKey {
        ZobristKey::new(self)
    }

    /// Apply `mv`, producing the resulting position with the side to move
    /// flipped. `self` is untouched.
    ///
    /// Special effects are detected structurally (see
    /// [`MoveKind`](super::MoveKind)); castling rights and the en-passant
    /// file update structurally as well. The move must be one this position
    /// can make — the search only applies Validator-certified moves.
    pub fn with_move_made(&self, mv: Move) -> Self {
        let mut next = *self;
        let (from, to) = (mv.from(), mv.to());
        let us = self.side_to_move;
        let them = us.opponent();

        // There must be a piece on the origin; the search filters before
        // applying.
        let piece = self
            .piece_at(from)
            .expect("no piece on the origin square of a searched move");
        let kind = MoveKind::classify(piece, mv, self.occupied().contains(to));

        // Lift any captured piece off the destination
        if let Some(captured) = self.piece_at(to) {
            next.pieces[them.index()][captured.kind().index()] &= !Bitboard::from_square(to);
        }

        // Relocate the mover
        let from_to = Bitboard::from_square(from) | Bitboard::from_square(to);
        next.pieces[us.index()][piece.kind().index()] ^= from_to;

        next.ep_file = None;
        match kind {
            MoveKind::DoublePush => next.ep_file = Some(to.file()),
            MoveKind::Castle => {
                let rank = from.rank();
                let (rook_from, rook_to) = if to.file() > from.file() {
                    (Square::new(File::H, rank), Square::new(File::F, rank))
                } else {
                    (Square::new(File::A, rank), Square::new(File::D, rank))
                };
                let rook_mask =
                    Bitboard::from_square(rook_from) | Bitboard::from_square(rook_to);
                next.pieces[us.index()][PieceKind::Rook.index()] ^= rook_mask;
            }
            MoveKind::EnPassant => {
                let captured = Square::new(to.file(), from.rank());
                next.pieces[them.index()][PieceKind::Pawn.index()] &=
                    !Bitboard::from_square(captured);
            }
            MoveKind::Promotion => {
                next.pieces[us.index()][PieceKind::Pawn.index()] &= !Bitboard::from_square(to);
                next.pieces[us.index()][PieceKind::Queen.index()] |= Bitboard::from_square(to);
            }
            MoveKind::Quiet => {}
        }

        next.update_castling_rights(piece, from, to);
        next.side_to_move = them;
        next
    }

    /// Pass the turn without moving: side flips, en-passant context clears.
    ///
    /// Used by null-move pruning only; not a legal chess move.
    pub fn with_null_move(&self) -> Self {
        let mut next = *self;
        next.side_to_move = self.side_to_move.opponent();
        next.ep_file = None;
        next
    }

    /// Clear castling rights invalidated by moving `piece` from `from` to
    /// `to`: a king move clears both of its side's rights, a rook leaving a
    /// home corner clears that right, and a capture landing on a home corner
    /// clears the opponent's.
    fn update_castling_rights(&mut self, piece: Piece, from: Square, to: Square) {
        let us = piece.color();

        if piece.is_king() {
            self.castling_rights.clear(us);
        }

        for color in Color::all() {
            let rank = Rank::home_rank(color);
            let kingside_corner = Square::new(File::H, rank);
            let queenside_corner = Square::new(File::A, rank);

            if from == kingside_corner || to == kingside_corner {
                self.castling_rights.clear_kingside(color);
            }
            if from == queenside_corner || to == queenside_corner {
                self.castling_rights.clear_queenside(color);
            }
        }
    }

    /// Checks that no square is claimed by two masks. Test support.
    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        let mut total = 0;
        let mut union = Bitboard::EMPTY;
        for color in Color::all() {
            for kind in PieceKind::all() {
                let board = self.pieces_of(color, kind);
                total += board.population();
                union |= board;
            }
        }
        total == union.population()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                let square = Square::new(File::new(file), Rank::new(rank));
                let c = self.piece_at(square).map_or('.', |piece| piece.char());
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        write!(
            f,
            "{} to move, castling {:04b}",
            self.side_to_move,
            self.castling_rights.index()
        )
    }
}
