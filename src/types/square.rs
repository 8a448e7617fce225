use std::fmt;
use std::ops::{Index, IndexMut};

use crate::board;
use crate::types::{File, Rank};

/// One of the 64 board squares, packed as `rank << 3 | file`.
#[derive(Copy, Clone, Eq, PartialEq, Default, Hash, Debug)]
#[repr(transparent)]
pub struct Square(pub u8);

impl Square {

    pub const COUNT: u8 = 64;

    pub const fn from(file: File, rank: Rank) -> Square {
        Square((rank as u8) << 3 | (file as u8))
    }

    /// The square at board coordinates `(x, y)`, or `None` if they are off the board.
    pub fn from_coords(x: i8, y: i8) -> Option<Square> {
        if !board::on_board(x, y) {
            return None;
        }
        Some(Square((y as u8) << 3 | x as u8))
    }

    pub const fn file(self) -> File {
        File::of(self)
    }

    pub const fn rank(self) -> Rank {
        Rank::of(self)
    }

    pub const fn x(self) -> i8 {
        self.file().index()
    }

    pub const fn y(self) -> i8 {
        self.rank().index()
    }

    /// Squares in row-major order: a1, b1, .., h1, a2, .., h8.
    pub fn iter() -> impl Iterator<Item = Square> + Clone {
        (0..Self::COUNT).map(Square)
    }

}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file().to_char(), self.rank().to_char())
    }
}

impl<T, const N: usize> Index<Square> for [T; N] {
    type Output = T;

    fn index(&self, sq: Square) -> &Self::Output {
        &self[sq.0 as usize]
    }
}

impl<T, const N: usize> IndexMut<Square> for [T; N] {
    fn index_mut(&mut self, sq: Square) -> &mut Self::Output {
        &mut self[sq.0 as usize]
    }
}
