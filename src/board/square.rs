/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use anyhow::{anyhow, bail, Result};

use super::Color;

/// A file (column) on the board, from a (0) to h (7).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(transparent)]
pub struct File(pub(crate) u8);

impl File {
    pub const COUNT: usize = 8;

    pub const A: Self = Self(0);
    pub const B: Self = Self(1);
    pub const C: Self = Self(2);
    pub const D: Self = Self(3);
    pub const E: Self = Self(4);
    pub const F: Self = Self(5);
    pub const G: Self = Self(6);
    pub const H: Self = Self(7);

    /// Construct a new [`File`] from an index in `0..8`.
    ///
    /// Values outside that range are truncated into it.
    #[inline(always)]
    pub const fn new(index: u8) -> Self {
        Self(index & 7)
    }

    /// The internal `0..8` value of this [`File`].
    #[inline(always)]
    pub const fn inner(&self) -> u8 {
        self.0
    }

    /// This [`File`] as a `usize`, for indexing.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// The lowercase letter of this [`File`], `a` through `h`.
    #[inline(always)]
    pub const fn char(&self) -> char {
        (b'a' + self.0) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

/// A rank (row) on the board, from 1 (0) to 8 (7).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(transparent)]
pub struct Rank(pub(crate) u8);

impl Rank {
    pub const COUNT: usize = 8;

    pub const ONE: Self = Self(0);
    pub const TWO: Self = Self(1);
    pub const THREE: Self = Self(2);
    pub const FOUR: Self = Self(3);
    pub const FIVE: Self = Self(4);
    pub const SIX: Self = Self(5);
    pub const SEVEN: Self = Self(6);
    pub const EIGHT: Self = Self(7);

    /// Construct a new [`Rank`] from an index in `0..8`.
    ///
    /// Values outside that range are truncated into it.
    #[inline(always)]
    pub const fn new(index: u8) -> Self {
        Self(index & 7)
    }

    /// The internal `0..8` value of this [`Rank`].
    #[inline(always)]
    pub const fn inner(&self) -> u8 {
        self.0
    }

    /// This [`Rank`] as a `usize`, for indexing.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// The rank that `color`'s pawns promote on.
    #[inline(always)]
    pub const fn promotion_rank(color: Color) -> Self {
        match color {
            Color::White => Self::EIGHT,
            Color::Black => Self::ONE,
        }
    }

    /// The rank that `color`'s pieces start on.
    #[inline(always)]
    pub const fn home_rank(color: Color) -> Self {
        match color {
            Color::White => Self::ONE,
            Color::Black => Self::EIGHT,
        }
    }

    /// The rank an en-passant capture lands on when `color` is capturing.
    #[inline(always)]
    pub const fn ep_rank(color: Color) -> Self {
        match color {
            Color::White => Self::SIX,
            Color::Black => Self::THREE,
        }
    }

    /// The digit of this [`Rank`], `1` through `8`.
    #[inline(always)]
    pub const fn char(&self) -> char {
        (b'1' + self.0) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

/// A square on the board, encoded `0..64` using little-endian rank-file
/// mapping: `a1` is 0, `h1` is 7, `a8` is 56 and `h8` is 63.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Square(pub(crate) u8);

impl Square {
    pub const COUNT: usize = 64;

    #[rustfmt::skip]
    const NAMES: [&'static str; Self::COUNT] = [
        "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1",
        "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2",
        "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3",
        "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4",
        "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5",
        "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6",
        "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7",
        "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8",
    ];

    pub const A1: Self = Self(0);
    pub const B1: Self = Self(1);
    pub const C1: Self = Self(2);
    pub const D1: Self = Self(3);
    pub const E1: Self = Self(4);
    pub const F1: Self = Self(5);
    pub const G1: Self = Self(6);
    pub const H1: Self = Self(7);
    pub const A2: Self = Self(8);
    pub const B2: Self = Self(9);
    pub const C2: Self = Self(10);
    pub const D2: Self = Self(11);
    pub const E2: Self = Self(12);
    pub const F2: Self = Self(13);
    pub const G2: Self = Self(14);
    pub const H2: Self = Self(15);
    pub const A3: Self = Self(16);
    pub const B3: Self = Self(17);
    pub const C3: Self = Self(18);
    pub const D3: Self = Self(19);
    pub const E3: Self = Self(20);
    pub const F3: Self = Self(21);
    pub const G3: Self = Self(22);
    pub const H3: Self = Self(23);
    pub const A4: Self = Self(24);
    pub const B4: Self = Self(25);
    pub const C4: Self = Self(26);
    pub const D4: Self = Self(27);
    pub const E4: Self = Self(28);
    pub const F4: Self = Self(29);
    pub const G4: Self = Self(30);
    pub const H4: Self = Self(31);
    pub const A5: Self = Self(32);
    pub const B5: Self = Self(33);
    pub const C5: Self = Self(34);
    pub const D5: Self = Self(35);
    pub const E5: Self = Self(36);
    pub const F5: Self = Self(37);
    pub const G5: Self = Self(38);
    pub const H5: Self = Self(39);
    pub const A6: Self = Self(40);
    pub const B6: Self = Self(41);
    pub const C6: Self = Self(42);
    pub const D6: Self = Self(43);
    pub const E6: Self = Self(44);
    pub const F6: Self = Self(45);
    pub const G6: Self = Self(46);
    pub const H6: Self = Self(47);
    pub const A7: Self = Self(48);
    pub const B7: Self = Self(49);
    pub const C7: Self = Self(50);
    pub const D7: Self = Self(51);
    pub const E7: Self = Self(52);
    pub const F7: Self = Self(53);
    pub const G7: Self = Self(54);
    pub const H7: Self = Self(55);
    pub const A8: Self = Self(56);
    pub const B8: Self = Self(57);
    pub const C8: Self = Self(58);
    pub const D8: Self = Self(59);
    pub const E8: Self = Self(60);
    pub const F8: Self = Self(61);
    pub const G8: Self = Self(62);
    pub const H8: Self = Self(63);

    /// Construct a new [`Square`] from the provided [`File`] and [`Rank`].
    #[inline(always)]
    pub const fn new(file: File, rank: Rank) -> Self {
        Self(rank.0 << 3 | file.0)
    }

    /// Construct a new [`Square`] from an index in `0..64`.
    ///
    /// Passing an index of 64 or greater yields garbage; callers are expected
    /// to hold the invariant.
    #[inline(always)]
    pub const fn from_index_unchecked(index: usize) -> Self {
        Self(index as u8)
    }

    /// Construct a new [`Square`] from an index, failing if it is not in `0..64`.
    #[inline(always)]
    pub fn from_index(index: usize) -> Result<Self> {
        if index < Self::COUNT {
            Ok(Self(index as u8))
        } else {
            bail!("square index must be in 0..64, got {index}")
        }
    }

    /// The [`File`] of this [`Square`].
    #[inline(always)]
    pub const fn file(&self) -> File {
        File(self.0 & 7)
    }

    /// The [`Rank`] of this [`Square`].
    #[inline(always)]
    pub const fn rank(&self) -> Rank {
        Rank(self.0 >> 3)
    }

    /// This [`Square`] as a `usize`, for indexing.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// The internal `0..64` value of this [`Square`].
    #[inline(always)]
    pub const fn inner(&self) -> u8 {
        self.0
    }

    /// Offset this [`Square`] by the provided file and rank deltas, returning
    /// `None` if the result would leave the board.
    ///
    /// No wraparound: stepping east off the h-file does not land on the a-file
    /// of the next rank.
    #[inline(always)]
    pub const fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        let file = self.file().0 as i8 + file_delta;
        let rank = self.rank().0 as i8 + rank_delta;

        if file < 0 || file > 7 || rank < 0 || rank > 7 {
            None
        } else {
            Some(Self::new(File(file as u8), Rank(rank as u8)))
        }
    }

    /// An iterator over all 64 squares, `a1` through `h8`.
    #[inline(always)]
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).map(Self::from_index_unchecked)
    }

    /// Parse a [`Square`] from two characters of algebraic notation, like `e4`.
    pub fn from_uci(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl FromStr for Square {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        let file = chars
            .next()
            .ok_or_else(|| anyhow!("empty square string"))?;
        let rank = chars
            .next()
            .ok_or_else(|| anyhow!("square string {s:?} is missing a rank"))?;

        if !('a'..='h').contains(&file) {
            bail!("invalid file character {file:?} in square {s:?}");
        }
        if !('1'..='8').contains(&rank) {
            bail!("invalid rank character {rank:?} in square {s:?}");
        }

        Ok(Self::new(
            File(file as u8 - b'a'),
            Rank(rank as u8 - b'1'),
        ))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::NAMES[self.index()])
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::NAMES[self.index()])
    }
}

impl<T> Index<Square> for [T; Square::COUNT] {
    type Output = T;
    #[inline(always)]
    fn index(&self, square: Square) -> &Self::Output {
        &self[square.index()]
    }
}

impl<T> IndexMut<Square> for [T; Square::COUNT] {
    #[inline(always)]
    fn index_mut(&mut self, square: Square) -> &mut Self::Output {
        &mut self[square.index()]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn square_encoding_round_trips() {
        assert_eq!(Square::A1.index(), 0);
        assert_eq!(Square::H8.index(), 63);
        assert_eq!(Square::new(File::E, Rank::FOUR), Square::E4);
        assert_eq!(Square::E4.file(), File::E);
        assert_eq!(Square::E4.rank(), Rank::FOUR);
    }

    #[test]
    fn offsets_respect_board_edges() {
        assert_eq!(Square::H1.offset(1, 0), None);
        assert_eq!(Square::A8.offset(0, 1), None);
        assert_eq!(Square::E4.offset(1, 1), Some(Square::F5));
        assert_eq!(Square::E4.offset(-2, -1), Some(Square::C3));
    }

    #[test]
    fn uci_parsing() {
        assert_eq!("e4".parse::<Square>().unwrap(), Square::E4);
        assert_eq!("a1".parse::<Square>().unwrap(), Square::A1);
        assert!("i9".parse::<Square>().is_err());
        assert!("".parse::<Square>().is_err());
        assert_eq!(Square::G6.to_string(), "g6");
    }
}
