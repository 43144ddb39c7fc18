/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::magics::{bishop_attacks, queen_attacks, rook_attacks};
use super::{Bitboard, Color, File, Move, MoveList, PieceKind, Position, Rank, Square};

const KNIGHT_ATTACKS: [Bitboard; Square::COUNT] = generate_leaper_mobility(&KNIGHT_DELTAS);
const KING_ATTACKS: [Bitboard; Square::COUNT] = generate_leaper_mobility(&KING_DELTAS);

/// Deltas for the movement of the King.
const KING_DELTAS: [(i8, i8); 8] = [
    (1, 0),
    (0, -1),
    (-1, 0),
    (0, 1),
    (1, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
];

/// Deltas for the movement of the Knight.
const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (1, -2),
    (2, 1),
    (2, -1),
    (-1, 2),
    (-1, -2),
    (-2, 1),
    (-2, -1),
];

/// Generates the moves from every square for a "leaper" piece, bounds-checked
/// to the 8x8 grid. In standard chess the leapers are the King and Knight.
const fn generate_leaper_mobility(deltas: &[(i8, i8)]) -> [Bitboard; Square::COUNT] {
    let mut mobility = [Bitboard::EMPTY; Square::COUNT];

    let mut i = 0;
    while i < Square::COUNT {
        let square = Square::from_index_unchecked(i);
        let mut movement = Bitboard::EMPTY;

        let mut j = 0;
        while j < deltas.len() {
            let (df, dr) = deltas[j];
            if let Some(shifted) = square.offset(df, dr) {
                movement = movement.or(Bitboard::from_square(shifted));
            }
            j += 1;
        }

        mobility[i] = movement;
        i += 1;
    }

    mobility
}

/// Fetch the attacks for a knight on the provided square.
#[inline(always)]
pub fn knight_attacks(square: Square) -> Bitboard {
    KNIGHT_ATTACKS[square.index()]
}

/// Fetch the attacks for a king on the provided square.
#[inline(always)]
pub fn king_attacks(square: Square) -> Bitboard {
    KING_ATTACKS[square.index()]
}

/// Fetch the capture squares for a pawn of `color` on the provided square.
///
/// Forward pushes are not attacks; see [`generate_pseudo_legal`] for pushes.
#[inline(always)]
pub fn pawn_attacks(square: Square, color: Color) -> Bitboard {
    let pawn = Bitboard::from_square(square).forward(color);
    pawn.east() | pawn.west()
}

/// The exact set of squares a piece of `kind` and `color` on `square`
/// attacks, given full-board occupancy.
///
/// Sliding rays stop at the first blocker and include its square (it may be a
/// capture); rays never wrap across the board edges. For pawns this is the
/// two capture squares only.
#[inline(always)]
pub fn attacks_for(kind: PieceKind, square: Square, color: Color, occupancy: Bitboard) -> Bitboard {
    match kind {
        PieceKind::Pawn => pawn_attacks(square, color),
        PieceKind::Knight => knight_attacks(square),
        PieceKind::Bishop => bishop_attacks(square, occupancy),
        PieceKind::Rook => rook_attacks(square, occupancy),
        PieceKind::Queen => queen_attacks(square, occupancy),
        PieceKind::King => king_attacks(square),
    }
}

/// Produces every move a piece of `color` could make in `position`, ignoring
/// whether the mover's own king is left in check.
///
/// Castling and en-passant candidates are emitted on geometry alone (rights
/// held and interposing squares empty; ep file set and a capturing pawn
/// adjacent) — king safety and full legality are the Validator's concern.
/// The list over-produces by design and callers must filter. Ordering of the
/// yielded moves is unspecified; move ordering belongs to the search.
pub fn generate_pseudo_legal(position: &Position, color: Color) -> MoveList {
    let mut moves = MoveList::new();

    let occupied = position.occupied();
    let own = position.color(color);

    // Sliders and leapers: attack set minus own occupancy
    for kind in [
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ] {
        for from in position.pieces_of(color, kind) {
            let targets = attacks_for(kind, from, color, occupied) & !own;
            for to in targets {
                moves.push(Move::new(from, to));
            }
        }
    }

    generate_pawn_moves(position, color, &mut moves);
    generate_castling_moves(position, color, &mut moves);
    generate_en_passant_moves(position, color, &mut moves);

    moves
}

/// Pawn pushes and captures, computed set-wise by directional shifts.
fn generate_pawn_moves(position: &Position, color: Color, moves: &mut MoveList) {
    let pawns = position.pieces_of(color, PieceKind::Pawn);
    let empty = !position.occupied();
    let enemy = position.color(color.opponent());

    // The rank-delta from destination back to origin, in square indices
    let backward: i8 = match color {
        Color::White => -8,
        Color::Black => 8,
    };

    let single_pushes = pawns.forward(color) & empty;
    for to in single_pushes {
        let from = Square::from_index_unchecked((to.inner() as i8 + backward) as usize);
        moves.push(Move::new(from, to));
    }

    // Only pawns that could single-push onto their third rank may push again;
    // this gates double pushes on both squares being empty and the origin
    // being the starting rank.
    let double_pushes = (single_pushes & Bitboard::third_rank(color)).forward(color) & empty;
    for to in double_pushes {
        let from = Square::from_index_unchecked((to.inner() as i8 + 2 * backward) as usize);
        moves.push(Move::new(from, to));
    }

    // Captures only onto enemy-occupied squares
    let west_captures = pawns.forward(color).west() & enemy;
    for to in west_captures {
        let from = Square::from_index_unchecked((to.inner() as i8 + backward + 1) as usize);
        moves.push(Move::new(from, to));
    }

    let east_captures = pawns.forward(color).east() & enemy;
    for to in east_captures {
        let from = Square::from_index_unchecked((to.inner() as i8 + backward - 1) as usize);
        moves.push(Move::new(from, to));
    }
}

/// Castling candidates: rights held, king and rook on their home squares, and
/// the squares between them empty. Whether the king is in or passes through
/// check is for the Validator to decide.
fn generate_castling_moves(position: &Position, color: Color, moves: &mut MoveList) {
    let rank = Rank::home_rank(color);
    let king_home = Square::new(File::E, rank);
    let rights = position.castling_rights();

    if !position.pieces_of(color, PieceKind::King).contains(king_home) {
        return;
    }

    let occupied = position.occupied();

    if rights.kingside(color)
        && position
            .pieces_of(color, PieceKind::Rook)
            .contains(Square::new(File::H, rank))
    {
        let between =
            Bitboard::from_square(Square::new(File::F, rank)) | Square::new(File::G, rank).into();
        if (occupied & between).is_empty() {
            moves.push(Move::new(king_home, Square::new(File::G, rank)));
        }
    }

    if rights.queenside(color)
        && position
            .pieces_of(color, PieceKind::Rook)
            .contains(Square::new(File::A, rank))
    {
        let between = Bitboard::from_square(Square::new(File::B, rank))
            | Square::new(File::C, rank).into()
            | Square::new(File::D, rank).into();
        if (occupied & between).is_empty() {
            moves.push(Move::new(king_home, Square::new(File::C, rank)));
        }
    }
}

/// En-passant candidates: the position records a double-push file, and a pawn
/// of `color` stands where it could capture onto the bypassed square.
fn generate_en_passant_moves(position: &Position, color: Color, moves: &mut MoveList) {
    let Some(file) = position.ep_file() else {
        return;
    };

    let target = Square::new(file, Rank::ep_rank(color));

    // A pawn of ours attacks `target` iff it sits on a square the *enemy*
    // pawn-attack pattern reaches from `target`
    let candidates =
        pawn_attacks(target, color.opponent()) & position.pieces_of(color, PieceKind::Pawn);
    for from in candidates {
        moves.push(Move::new(from, target));
    }
}
