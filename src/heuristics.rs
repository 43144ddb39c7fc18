/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::search::MAX_DEPTH;
use crate::{Move, Square};

/// Number of killer slots per depth.
const KILLERS_PER_DEPTH: usize = 2;

/// Cap on the exponent used when weighting history bumps by depth.
const MAX_HISTORY_SHIFT: u8 = 12;

/// Ceiling on a single history counter.
const MAX_HISTORY_SCORE: i32 = 1 << 24;

/// Stores, per search depth, the last two quiet moves that caused a beta
/// cutoff at that depth.
///
/// Purely a move-ordering hint: a killer is tried early at the same depth on
/// the assumption that a refutation of one sibling often refutes the others.
/// Never a legality source.
#[derive(Debug, Clone)]
pub struct KillerTable([[Option<Move>; KILLERS_PER_DEPTH]; MAX_DEPTH as usize + 1]);

impl KillerTable {
    /// Record `mv` as a killer at `depth`, displacing the older of the two
    /// stored moves. Re-inserting the current first killer is a no-op.
    pub fn insert(&mut self, depth: u8, mv: Move) {
        let slots = &mut self.0[depth as usize];
        if slots[0] != Some(mv) {
            slots[1] = slots[0];
            slots[0] = Some(mv);
        }
    }

    /// Whether `mv` is one of the killers recorded at `depth`.
    #[inline(always)]
    pub fn contains(&self, depth: u8, mv: Move) -> bool {
        self.0[depth as usize].contains(&Some(mv))
    }

    /// Forget all killers.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl Default for KillerTable {
    #[inline(always)]
    fn default() -> Self {
        Self([[None; KILLERS_PER_DEPTH]; MAX_DEPTH as usize + 1])
    }
}

/// Accumulates, per (origin, destination) pair, a score for how often the
/// move caused a beta cutoff.
///
/// Bumps are weighted exponentially in the remaining depth so that cutoffs
/// near the root dominate ordering over cutoffs at the leaves. Purely a
/// move-ordering hint.
#[derive(Debug, Clone)]
pub struct HistoryTable([[i32; Square::COUNT]; Square::COUNT]);

impl HistoryTable {
    /// Credit `mv` with a cutoff found with `depth` plies remaining.
    pub fn update(&mut self, mv: Move, depth: u8) {
        let bonus = 1 << depth.min(MAX_HISTORY_SHIFT);
        let slot = &mut self.0[mv.from().index()][mv.to().index()];
        *slot = (*slot + bonus).min(MAX_HISTORY_SCORE);
    }

    /// The accumulated score for `mv`.
    #[inline(always)]
    pub fn get(&self, mv: Move) -> i32 {
        self.0[mv.from().index()][mv.to().index()]
    }

    /// Forget all history.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl Default for HistoryTable {
    #[inline(always)]
    fn default() -> Self {
        Self([[0; Square::COUNT]; Square::COUNT])
    }
}
