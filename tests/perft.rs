/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod common;

use common::Arbiter;
use heron::{generate_pseudo_legal, Board, CastlingRights, Color, Position, Square, Validator};

fn startpos() -> Position {
    Position::from_board(&Board::standard(), Color::White, CastlingRights::ALL, None)
}

/// Count of legal move sequences of length `depth`.
fn perft(position: &Position, depth: u8) -> u64 {
    let arbiter = Arbiter;
    let moves = arbiter.legal_for(position, position.side_to_move());

    match depth {
        0 => 1,
        1 => moves.len() as u64,
        _ => moves
            .iter()
            .map(|mv| perft(&position.with_move_made(*mv), depth - 1))
            .sum(),
    }
}

#[test]
fn pseudo_legal_count_at_the_start_matches_the_reference() {
    // 16 pawn moves + 4 knight moves, for either side
    assert_eq!(generate_pseudo_legal(&startpos(), Color::White).len(), 20);
    assert_eq!(generate_pseudo_legal(&startpos(), Color::Black).len(), 20);
}

#[test]
fn all_twenty_opening_moves_are_legal() {
    // Nothing at the start position can leave the king in check, so the
    // pseudo-legal and legal counts coincide
    assert_eq!(perft(&startpos(), 1), 20);
}

#[test]
fn per_square_legal_destinations() {
    let position = startpos();
    assert_eq!(
        Arbiter.legal_moves(&position, Square::E2),
        vec![Square::E3, Square::E4]
    );
    assert_eq!(
        Arbiter.legal_moves(&position, Square::B1),
        vec![Square::A3, Square::C3]
    );
    // No piece, no destinations
    assert!(Arbiter.legal_moves(&position, Square::E4).is_empty());
}

#[test]
fn perft_two_from_the_start_position() {
    assert_eq!(perft(&startpos(), 2), 400);
}

#[test]
fn perft_three_from_the_start_position() {
    assert_eq!(perft(&startpos(), 3), 8_902);
}
