/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::sync::LazyLock;

use super::{Bitboard, Square, XoShiRo};

/// Shared slider attack tables, built once at first use and read-only
/// thereafter. Passing this around by `&'static` reference keeps it safe to
/// share even under future concurrent search.
static SLIDER_TABLES: LazyLock<SliderTables> = LazyLock::new(SliderTables::new);

/// Movement deltas for the Rook.
const ROOK_DELTAS: [(i8, i8); 4] = [(1, 0), (0, -1), (-1, 0), (0, 1)];

/// Movement deltas for the Bishop.
const BISHOP_DELTAS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// Computes the possible moves for a Rook on `square` with the provided
/// blockers.
///
/// The result allows the Rook to capture the first blocker on each ray.
#[inline(always)]
pub fn rook_attacks(square: Square, blockers: Bitboard) -> Bitboard {
    SLIDER_TABLES.rook[square.index()].attacks(blockers)
}

/// Computes the possible moves for a Bishop on `square` with the provided
/// blockers.
///
/// The result allows the Bishop to capture the first blocker on each ray.
#[inline(always)]
pub fn bishop_attacks(square: Square, blockers: Bitboard) -> Bitboard {
    SLIDER_TABLES.bishop[square.index()].attacks(blockers)
}

/// Computes the possible moves for a Queen on `square` with the provided
/// blockers.
#[inline(always)]
pub fn queen_attacks(square: Square, blockers: Bitboard) -> Bitboard {
    rook_attacks(square, blockers) | bishop_attacks(square, blockers)
}

/// A magic lookup entry for one square: hash the relevant blockers with a
/// multiply-and-shift, then index a per-square attack table.
struct MagicEntry {
    /// The blocker squares that can affect attacks from this square.
    mask: Bitboard,

    /// The magic multiplier mapping every relevant blocker subset to a
    /// distinct table index.
    magic: u64,

    /// Right-shift applied after multiplication: `64 - mask.population()`.
    shift: u8,

    /// Attack sets for every blocker subset, indexed by the magic hash.
    table: Vec<Bitboard>,
}

impl MagicEntry {
    #[inline(always)]
    fn index(&self, blockers: Bitboard) -> usize {
        let relevant = blockers.inner() & self.mask.inner();
        (relevant.wrapping_mul(self.magic) >> self.shift) as usize
    }

    #[inline(always)]
    fn attacks(&self, blockers: Bitboard) -> Bitboard {
        self.table[self.index(blockers)]
    }
}

/// Magic entries for both slider kinds, one per square.
struct SliderTables {
    rook: Vec<MagicEntry>,
    bishop: Vec<MagicEntry>,
}

impl SliderTables {
    fn new() -> Self {
        let mut prng = XoShiRo::new();

        let rook = Square::iter()
            .map(|square| find_magic(square, &ROOK_DELTAS, &mut prng))
            .collect();
        let bishop = Square::iter()
            .map(|square| find_magic(square, &BISHOP_DELTAS, &mut prng))
            .collect();

        Self { rook, bishop }
    }
}

/// Walks outward from `square` along each of `deltas`, stopping at (and
/// including) the first blocker on each ray.
///
/// This is the reference attack computation. The magic tables are filled from
/// it and must agree with it on every blocker subset.
pub(crate) fn sliding_attacks(square: Square, blockers: Bitboard, deltas: &[(i8, i8)]) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;

    for &(df, dr) in deltas {
        let mut current = square;
        while let Some(next) = current.offset(df, dr) {
            attacks |= Bitboard::from_square(next);
            if blockers.contains(next) {
                break;
            }
            current = next;
        }
    }

    attacks
}

/// Reference rook attacks by ray walk; exercised by tests against the magic
/// lookup.
#[inline(always)]
pub(crate) fn rook_attacks_reference(square: Square, blockers: Bitboard) -> Bitboard {
    sliding_attacks(square, blockers, &ROOK_DELTAS)
}

/// Reference bishop attacks by ray walk.
#[inline(always)]
pub(crate) fn bishop_attacks_reference(square: Square, blockers: Bitboard) -> Bitboard {
    sliding_attacks(square, blockers, &BISHOP_DELTAS)
}

/// The blocker squares relevant to slider attacks from `square`: every square
/// on its rays except the last one before the board edge.
///
/// Edge squares never matter as blockers — the ray stops there regardless —
/// so excluding them shrinks each table to `2^population` entries.
fn relevant_mask(square: Square, deltas: &[(i8, i8)]) -> Bitboard {
    let mut mask = Bitboard::EMPTY;

    for &(df, dr) in deltas {
        let mut current = square;
        while let Some(next) = current.offset(df, dr) {
            // `next` is on the edge of this ray iff it has no successor
            if next.offset(df, dr).is_some() {
                mask |= Bitboard::from_square(next);
            }
            current = next;
        }
    }

    mask
}

/// Searches for a magic multiplier for `square` by random trial, and fills
/// the attack table for every blocker subset of the relevant mask.
///
/// Candidates are sparse random numbers; a candidate is accepted once no two
/// blocker subsets with different attack sets hash to the same index. The
/// search converges within a few thousand candidates per square in practice.
fn find_magic(square: Square, deltas: &[(i8, i8)], prng: &mut XoShiRo) -> MagicEntry {
    let mask = relevant_mask(square, deltas);
    let bits = mask.population();
    let shift = (64 - bits) as u8;
    let table_len = 1usize << bits;

    // Enumerate every subset of the mask (carry-rippler), pairing each with
    // its ray-walk attack set.
    let mut subsets = Vec::with_capacity(table_len);
    let mut subset = 0u64;
    loop {
        subsets.push((
            Bitboard::new(subset),
            sliding_attacks(square, Bitboard::new(subset), deltas),
        ));
        subset = subset.wrapping_sub(mask.inner()) & mask.inner();
        if subset == 0 {
            break;
        }
    }

    loop {
        let magic = prng.get_next_sparse();

        // Weed out candidates that concentrate too few bits in the index
        if (mask.inner().wrapping_mul(magic) >> 56).count_ones() < 6 {
            continue;
        }

        let mut table = vec![Bitboard::EMPTY; table_len];
        let mut used = vec![false; table_len];
        let mut collided = false;

        for &(blockers, attacks) in &subsets {
            let index = (blockers.inner().wrapping_mul(magic) >> shift) as usize;
            if used[index] && table[index] != attacks {
                collided = true;
                break;
            }
            used[index] = true;
            table[index] = attacks;
        }

        if !collided {
            return MagicEntry {
                mask,
                magic,
                shift,
                table,
            };
        }
    }
}
