/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! A chess engine core.
//!
//! Position representation and search machinery only: bitboards with
//! magic-indexed slider attacks, Zobrist hashing, a bounded transposition
//! table, and iterative-deepening alpha-beta search with quiescence,
//! null-move pruning, late-move reductions, and killer/history ordering.
//!
//! Legality ([`Validator`]), static evaluation ([`Evaluator`]), and the
//! opening book ([`OpeningBook`]) are external collaborators, supplied
//! through traits. [`Engine::make_move`] is the sole entry point.

/// Board representation: squares, bitboards, pieces, moves, attack tables,
/// pseudo-legal generation, and position hashing.
mod board;

/// The engine entry point.
mod engine;

/// Killer-move and history tables.
mod heuristics;

/// Contracts for the external collaborators.
mod interface;

/// Centipawn scores and mate bands.
mod score;

/// Iterative-deepening alpha-beta search.
mod search;

/// The transposition table.
mod ttable;

pub use board::*;
pub use engine::*;
pub use heuristics::*;
pub use interface::*;
pub use score::*;
pub use search::*;
pub use ttable::*;
