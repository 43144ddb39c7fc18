/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::{Move, Score, ZobristKey};

/// Number of bytes in a megabyte.
const BYTES_IN_MB: usize = 1024 * 1024;

/// How a stored score relates to the search window it was found in.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Bound {
    /// The score is exact.
    Exact,

    /// The score is at least this value (the node failed high).
    Lower,

    /// The score is at most this value (the node failed low).
    Upper,
}

impl Bound {
    /// Classifies `score` against the window it was searched in:
    ///
    /// ```text
    /// if score <= alpha:  Upper
    /// else if score >= beta:  Lower
    /// else:  Exact
    /// ```
    ///
    /// `alpha` must be the window's *original* lower bound, from before the
    /// node's move loop raised it.
    #[inline(always)]
    pub fn classify(score: Score, alpha: Score, beta: Score) -> Self {
        if score <= alpha {
            Self::Upper
        } else if score >= beta {
            Self::Lower
        } else {
            Self::Exact
        }
    }
}

/// An entry in the transposition table.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct TTableEntry {
    /// Fingerprint of the position this entry describes.
    pub key: ZobristKey,

    /// Depth of the search that produced this entry.
    pub depth: u8,

    /// The score found, stored root-relative (see [`Score::absolute`]).
    pub score: Score,

    /// How `score` relates to the window it was searched in.
    pub bound: Bound,

    /// Best move found at this position, if the search settled on one.
    pub best_move: Option<Move>,
}

impl TTableEntry {
    /// Determine whether this entry can resolve a probe at `depth` with the
    /// window `(alpha, beta)` and, if so, return its score.
    ///
    /// A score is usable if and only if the entry is at least as deep as the
    /// probe and:
    ///   1. the entry is exact, or
    ///   2. it is a lower bound that already reaches `beta`, or
    ///   3. it is an upper bound that already falls below `alpha`.
    ///
    /// The score is returned ply-relative. When this returns `None`, the
    /// caller may still narrow its window with the stored bound.
    #[inline(always)]
    pub fn try_score(&self, depth: u8, ply: u8, alpha: Score, beta: Score) -> Option<Score> {
        if self.depth < depth {
            return None;
        }

        let score = self.score.relative(ply);
        let usable = match self.bound {
            Bound::Exact => true,
            Bound::Lower => score >= beta,
            Bound::Upper => score <= alpha,
        };

        usable.then_some(score)
    }
}

/// The transposition table: a bounded cache from position fingerprint to the
/// best known search result for that position.
///
/// Capacity is fixed at construction (a power-of-two entry count derived from
/// a size in megabytes) and the table never grows — an unbounded table is a
/// resource leak over a long search. Entries at the same slot are replaced
/// only by equal-or-deeper results, so shallow, stale data cannot evict
/// deeper, more trustworthy data.
#[derive(Debug)]
pub struct TTable {
    entries: Vec<Option<TTableEntry>>,
}

impl TTable {
    /// Default size of the table, in megabytes.
    pub const DEFAULT_SIZE_MB: usize = 16;

    /// Create a new [`TTable`] of roughly `size_mb` megabytes.
    #[inline(always)]
    pub fn new(size_mb: usize) -> Self {
        let capacity = (size_mb.max(1) * BYTES_IN_MB) / size_of::<Option<TTableEntry>>();
        Self::from_capacity(capacity)
    }

    /// Create a new [`TTable`] holding `capacity` entries, rounded down to a
    /// power of two so that indexing is a mask.
    pub fn from_capacity(capacity: usize) -> Self {
        let capacity = if capacity.is_power_of_two() {
            capacity
        } else {
            (capacity.max(2).next_power_of_two()) / 2
        };

        Self {
            entries: vec![None; capacity],
        }
    }

    /// Number of entries this table can hold.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Erase all entries, keeping the capacity.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.entries.iter_mut().for_each(|entry| *entry = None);
    }

    /// Map `key` to a slot index.
    #[inline(always)]
    fn index(&self, key: &ZobristKey) -> usize {
        key.inner() as usize & (self.entries.len() - 1)
    }

    /// Fetch the entry for `key`, if one is stored.
    #[inline(always)]
    pub fn get(&self, key: &ZobristKey) -> Option<&TTableEntry> {
        self.entries[self.index(key)]
            .as_ref()
            .filter(|entry| &entry.key == key)
    }

    /// Insert or replace the entry for `entry.key`.
    ///
    /// Replacement is depth-preferred: an incumbent survives unless the new
    /// entry's depth is at least as great.
    pub fn store(&mut self, entry: TTableEntry) {
        let index = self.index(&entry.key);
        match &self.entries[index] {
            Some(existing) if existing.depth > entry.depth => {}
            _ => self.entries[index] = Some(entry),
        }
    }
}

impl Default for TTable {
    #[inline(always)]
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE_MB)
    }
}
