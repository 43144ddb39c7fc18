/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use super::{CastlingRights, Color, File, Piece, Position, Square, XoShiRo};

/// Stores Zobrist hash keys, for fingerprinting positions.
///
/// Built once at compile time from the library PRNG, so keys are identical
/// across runs and compilations.
const ZOBRIST_TABLE: ZobristHashTable = ZobristHashTable::new();

/// A 64-bit fingerprint of a position: piece placement, side to move,
/// castling rights, and en-passant file.
///
/// Built by XOR-ing independent random keys per feature, so it is pure,
/// deterministic, and cheap enough to compute at every search node. Two
/// positions with identical game-relevant state always produce the same key;
/// distinct positions may collide, and consumers of this key tolerate that.
#[derive(Default, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct ZobristKey(u64);

impl ZobristKey {
    /// Generates the [`ZobristKey`] for the supplied position.
    #[inline(always)]
    pub fn new(position: &Position) -> Self {
        Self::from_parts(
            position.pieces(),
            position.side_to_move(),
            position.castling_rights(),
            position.ep_file(),
        )
    }

    /// Generates a [`ZobristKey`] from the individual components of a position.
    pub fn from_parts(
        pieces: impl Iterator<Item = (Square, Piece)>,
        side_to_move: Color,
        castling_rights: CastlingRights,
        ep_file: Option<File>,
    ) -> Self {
        let mut key = Self::default();

        for (square, piece) in pieces {
            key.hash_piece(square, piece);
        }
        key.hash_side_to_move(side_to_move);
        key.hash_castling_rights(castling_rights);
        key.hash_ep_file(ep_file);

        key
    }

    /// The inner `u64` of this key.
    #[inline(always)]
    pub const fn inner(&self) -> u64 {
        self.0
    }

    /// Adds/removes `hash_key` to this [`ZobristKey`] via XOR.
    ///
    /// Calling twice with the same value un-hashes it.
    #[inline(always)]
    pub fn hash(&mut self, hash_key: u64) {
        self.0 ^= hash_key;
    }

    /// Adds/removes the key for `piece` on `square`.
    #[inline(always)]
    pub fn hash_piece(&mut self, square: Square, piece: Piece) {
        self.hash(ZOBRIST_TABLE.piece_keys[square.index()][piece.index()]);
    }

    /// Adds/removes the side-to-move key. White's key is zero, intentionally.
    #[inline(always)]
    pub fn hash_side_to_move(&mut self, color: Color) {
        self.hash(ZOBRIST_TABLE.color_keys[color.index()]);
    }

    /// Adds/removes the key for a full castling-rights combination.
    #[inline(always)]
    pub fn hash_castling_rights(&mut self, castling_rights: CastlingRights) {
        self.hash(ZOBRIST_TABLE.castling_keys[castling_rights.index()]);
    }

    /// Adds/removes the key for the en-passant file, if one is set.
    #[inline(always)]
    pub fn hash_ep_file(&mut self, ep_file: Option<File>) {
        if let Some(file) = ep_file {
            self.hash(ZOBRIST_TABLE.ep_keys[file.index()]);
        }
    }
}

impl fmt::Display for ZobristKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

impl fmt::Debug for ZobristKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ZobristKey({:#018x})", self.0)
    }
}

/// The random key material for Zobrist hashing.
struct ZobristHashTable {
    /// One key for every (square, piece) pair.
    piece_keys: [[u64; Piece::COUNT]; Square::COUNT],

    /// One key per file on which an en-passant capture may be available.
    ep_keys: [u64; File::COUNT],

    /// One key for every combination of castling rights.
    castling_keys: [u64; CastlingRights::COUNT],

    /// A key for the side to move. Only Black hashes; White's key is zero so
    /// that hashing the side in and out reduces to a single XOR.
    color_keys: [u64; Color::COUNT],
}

impl ZobristHashTable {
    /// Initialize the table, drawing keys from [`XoShiRo`].
    ///
    /// Runs at compile time; the result is stored in `ZOBRIST_TABLE`.
    const fn new() -> Self {
        let mut piece_keys = [[0; Piece::COUNT]; Square::COUNT];
        let mut ep_keys = [0; File::COUNT];
        let mut castling_keys = [0; CastlingRights::COUNT];
        let mut color_keys = [0; Color::COUNT];

        let mut prng = XoShiRo::new();

        let mut square = 0;
        while square < Square::COUNT {
            let mut piece = 0;
            while piece < Piece::COUNT {
                let key;
                (key, prng) = prng.get_next_const();
                piece_keys[square][piece] = key;
                piece += 1;
            }
            square += 1;
        }

        let mut file = 0;
        while file < File::COUNT {
            let key;
            (key, prng) = prng.get_next_const();
            ep_keys[file] = key;
            file += 1;
        }

        let mut rights = 0;
        while rights < CastlingRights::COUNT {
            let key;
            (key, prng) = prng.get_next_const();
            castling_keys[rights] = key;
            rights += 1;
        }

        let (key, _) = prng.get_next_const();
        color_keys[Color::Black.index()] = key;

        Self {
            piece_keys,
            ep_keys,
            castling_keys,
            color_keys,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Board, PieceKind};

    fn startpos() -> Position {
        Position::from_board(&Board::standard(), Color::White, CastlingRights::ALL, None)
    }

    #[test]
    fn hashing_is_deterministic() {
        let a = ZobristKey::new(&startpos());
        let b = ZobristKey::new(&startpos());
        assert_eq!(a, b);
        assert_ne!(a.inner(), 0);
    }

    #[test]
    fn every_component_affects_the_key() {
        let base = ZobristKey::new(&startpos());

        // Piece placement
        let mut board = Board::standard();
        board.clear(Square::E2);
        board.set(Square::E4, Piece::new(Color::White, PieceKind::Pawn));
        let moved = Position::from_board(&board, Color::White, CastlingRights::ALL, None);
        assert_ne!(ZobristKey::new(&moved), base);

        // Side to move
        let black_to_move =
            Position::from_board(&Board::standard(), Color::Black, CastlingRights::ALL, None);
        assert_ne!(ZobristKey::new(&black_to_move), base);

        // Castling rights
        let no_rights =
            Position::from_board(&Board::standard(), Color::White, CastlingRights::NONE, None);
        assert_ne!(ZobristKey::new(&no_rights), base);

        // En-passant file
        let mut key = base;
        key.hash_ep_file(Some(File::D));
        assert_ne!(key, base);
        key.hash_ep_file(Some(File::D));
        assert_eq!(key, base);
    }

    #[test]
    fn xor_is_self_inverse() {
        let mut key = ZobristKey::default();
        let piece = Piece::new(Color::Black, PieceKind::Rook);
        key.hash_piece(Square::A8, piece);
        assert_ne!(key, ZobristKey::default());
        key.hash_piece(Square::A8, piece);
        assert_eq!(key, ZobristKey::default());
    }
}
