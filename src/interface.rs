/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use anyhow::Result;

use crate::{Board, CastlingRights, Color, Move, Position, Score, Square};

/// The external legality oracle.
///
/// The core generates pseudo-legal moves and treats this trait as the single
/// authority on whether a move may actually be played and on terminal states.
/// Implementations must be side-effect-free: the search calls these methods
/// at every node.
pub trait Validator {
    /// Every legal destination for the piece on `from`, or empty if there is
    /// no piece of the side to move there.
    fn legal_moves(&self, position: &Position, from: Square) -> Vec<Square>;

    /// Whether `color`'s king is attacked in `position`.
    fn is_in_check(&self, position: &Position, color: Color) -> bool;

    /// Whether `mv` is fully legal in `position` for the side to move:
    /// geometry, castling path safety, and not leaving the mover's own king
    /// in check.
    fn is_valid_move(&self, position: &Position, mv: Move) -> bool;

    /// Whether `color` is checkmated in `position`.
    fn is_checkmate(&self, position: &Position, color: Color) -> bool;

    /// Whether `color` is stalemated in `position`.
    fn is_stalemate(&self, position: &Position, color: Color) -> bool;
}

/// The external static position scorer.
///
/// Scores are from the perspective of `side_to_move`: positive favors it.
/// The search uses this both for leaf scores and as the quiescence stand-pat
/// baseline; the weights behind it are no concern of the core.
pub trait Evaluator {
    /// The static score of `position` for `side_to_move`.
    fn score(&self, position: &Position, side_to_move: Color) -> Score;
}

/// The external opening-book lookup.
///
/// Probed once per engine move, before any search. A book must never return
/// an illegal move; the engine re-validates whatever it gets and treats
/// errors as "no book move".
pub trait OpeningBook {
    /// The book's move for this position, if it has one.
    ///
    /// `weighting` shapes the random selection among weighted book lines
    /// (an exponent applied to each line's weight).
    fn try_get_move(
        &self,
        board: &Board,
        side_to_move: Color,
        move_number: u32,
        castling_rights: CastlingRights,
        last_move: Option<Move>,
        weighting: f64,
    ) -> Result<Option<Move>>;
}
