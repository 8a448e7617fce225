use crate::types::square::Square;
use crate::types::{File, Rank};
use std::ops::{BitAnd, BitOr, Not};

#[derive(Copy, Clone, Eq, PartialEq, Default, Debug)]
#[repr(transparent)]
pub struct Bitboard(pub u64);

impl Bitboard {

    pub const NONE: Self = Self(0);

    /// The outer ring of squares: a- and h-files plus first and eighth ranks.
    pub const BORDER: Self = Self(
        File::A.to_bb().0 | File::H.to_bb().0 | Rank::One.to_bb().0 | Rank::Eight.to_bb().0
    );

    pub const fn empty() -> Self {
        Self::NONE
    }

    pub const fn of_sq(sq: Square) -> Self {
        Self(1 << sq.0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub const fn contains(self, sq: Square) -> bool {
        self.0 & (1 << sq.0) != 0
    }

    pub const fn lsb(self) -> Square {
        Square(self.0.trailing_zeros() as u8)
    }

    /// Every subset of this mask, each exactly once, beginning with the empty set.
    pub fn subsets(self) -> Subsets {
        Subsets { mask: self.0, next: Some(0) }
    }

}

impl Iterator for Bitboard {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_empty() {
            None
        } else {
            let lsb = self.lsb();
            self.0 &= self.0 - 1;
            Some(lsb)
        }
    }
}

/// Carry-rippler walk over the subsets of a mask.
#[derive(Clone, Debug)]
pub struct Subsets {
    mask: u64,
    next: Option<u64>,
}

impl Iterator for Subsets {
    type Item = Bitboard;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let following = current.wrapping_sub(self.mask) & self.mask;
        self.next = if following == 0 { None } else { Some(following) };
        Some(Bitboard(current))
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        iter.into_iter().fold(Bitboard::empty(), |bb, sq| bb | Bitboard::of_sq(sq))
    }
}

impl BitAnd for Bitboard {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}
