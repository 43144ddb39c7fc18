/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! A reference implementation of the external collaborators, used to drive
//! the engine core in integration tests: a bitboard-backed legality oracle
//! and a bare material evaluator.

#![allow(dead_code)]

use heron::{
    attacks_for, generate_pseudo_legal, Color, Evaluator, Move, MoveKind, Piece, PieceKind,
    Position, Score, Square, Validator,
};

/// The reference legality oracle: pseudo-legal geometry refined by castling
/// path safety and a post-move king-safety scan.
pub struct Arbiter;

impl Arbiter {
    /// Whether any piece of `by` attacks `square`.
    pub fn attacked(position: &Position, square: Square, by: Color) -> bool {
        let occupancy = position.occupied();
        PieceKind::all().into_iter().any(|kind| {
            position
                .pieces_of(by, kind)
                .into_iter()
                .any(|from| attacks_for(kind, from, by, occupancy).contains(square))
        })
    }

    /// Every fully legal move for `color` in `position`.
    pub fn legal_for(&self, position: &Position, color: Color) -> Vec<Move> {
        generate_pseudo_legal(position, color)
            .into_iter()
            .filter(|mv| self.move_is_legal(position, *mv, color))
            .collect()
    }

    fn move_is_legal(&self, position: &Position, mv: Move, color: Color) -> bool {
        let Some(piece) = position.piece_at(mv.from()) else {
            return false;
        };
        if piece.color() != color {
            return false;
        }

        // The move must be geometrically possible in the first place; a move
        // handed in from outside (a book, say) gets no benefit of the doubt
        if !generate_pseudo_legal(position, color).contains(&mv) {
            return false;
        }

        // A castling king may not start in, pass through, or land in check
        let occupied = position.occupied().contains(mv.to());
        if MoveKind::classify(piece, mv, occupied) == MoveKind::Castle {
            if self.is_in_check(position, color) {
                return false;
            }
            let passed_file = if mv.to().file() > mv.from().file() {
                heron::File::F
            } else {
                heron::File::D
            };
            let passed = Square::new(passed_file, mv.from().rank());
            if Self::attacked(position, passed, color.opponent()) {
                return false;
            }
        }

        let next = position.with_move_made(mv);
        !self.is_in_check(&next, color)
    }
}

impl Validator for Arbiter {
    fn legal_moves(&self, position: &Position, from: Square) -> Vec<Square> {
        match position.piece_at(from) {
            Some(piece) => self
                .legal_for(position, piece.color())
                .into_iter()
                .filter(|mv| mv.from() == from)
                .map(|mv| mv.to())
                .collect(),
            None => Vec::new(),
        }
    }

    fn is_in_check(&self, position: &Position, color: Color) -> bool {
        position
            .king(color)
            .is_some_and(|king| Self::attacked(position, king, color.opponent()))
    }

    fn is_valid_move(&self, position: &Position, mv: Move) -> bool {
        match position.piece_at(mv.from()) {
            Some(piece) => self.move_is_legal(position, mv, piece.color()),
            None => false,
        }
    }

    fn is_checkmate(&self, position: &Position, color: Color) -> bool {
        self.is_in_check(position, color) && self.legal_for(position, color).is_empty()
    }

    fn is_stalemate(&self, position: &Position, color: Color) -> bool {
        !self.is_in_check(position, color) && self.legal_for(position, color).is_empty()
    }
}

/// Bare material count from the side to move's perspective. Enough for the
/// search properties under test; real evaluation weights are out of scope.
pub struct MaterialEvaluator;

impl Evaluator for MaterialEvaluator {
    fn score(&self, position: &Position, side_to_move: Color) -> Score {
        let mut total = 0;
        for kind in PieceKind::all() {
            let value = kind.value();
            total += value * position.pieces_of(side_to_move, kind).population() as i32;
            total -= value
                * position
                    .pieces_of(side_to_move.opponent(), kind)
                    .population() as i32;
        }
        Score::new(total)
    }
}

/// Convenience: place `pieces` on an empty board.
pub fn board_with(pieces: &[(Square, Color, PieceKind)]) -> heron::Board {
    let mut board = heron::Board::new();
    for &(square, color, kind) in pieces {
        board.set(square, Piece::new(color, kind));
    }
    board
}
