/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// All things related to Bitboards.
mod bitboard;

/// The caller-owned mailbox board representation.
mod mailbox;

/// Magic bitboards for slider attack lookups.
mod magics;

/// Pieces, piece kinds, colors, and castling rights.
mod piece;

/// Move representation and structural move classification.
mod moves;

/// Attack tables and pseudo-legal move generation.
mod movegen;

/// The bitboard position representation.
mod position;

/// Pseudo-random number generation for keys and magics.
mod prng;

/// Squares, files, and ranks.
mod square;

/// Zobrist position fingerprinting.
mod zobrist;

pub use bitboard::*;
pub use mailbox::*;
pub use magics::{bishop_attacks, queen_attacks, rook_attacks};
pub use movegen::*;
pub use moves::*;
pub use piece::*;
pub use position::*;
pub use prng::*;
pub use square::*;
pub use zobrist::*;
