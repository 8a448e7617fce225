use std::iter::FusedIterator;

use arrayvec::ArrayVec;

use crate::board::{is_border, on_board};
use crate::types::{Bitboard, Direction, DirectionSet, Square};

/// Relevant squares a single ray can hold: the six interior squares of a line.
pub const MAX_RAY_LEN: usize = 6;

pub const MAX_RELEVANT: usize = MAX_RAY_LEN * 8;

pub type RelevantSquares = ArrayVec<Square, MAX_RELEVANT>;

/// The relevant squares along one direction from an origin, nearest first.
///
/// Stops at the first candidate that is off the board or on the border; that square is
/// never yielded. The origin itself is never yielded either, even when it is interior.
#[derive(Clone, Debug)]
pub struct Ray {
    x: i8,
    y: i8,
    dir: Direction,
    done: bool,
}

impl Ray {

    pub fn new(origin: Square, dir: Direction) -> Ray {
        Ray { x: origin.x(), y: origin.y(), dir, done: false }
    }

}

impl Iterator for Ray {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let (nx, ny) = (self.x + self.dir.dx(), self.y + self.dir.dy());
        if !on_board(nx, ny) || is_border(nx, ny) {
            self.done = true;
            return None;
        }
        self.x = nx;
        self.y = ny;
        Square::from_coords(nx, ny)
    }
}

impl FusedIterator for Ray {}

/// Relevant squares for `origin`, ray by ray in the order of `dirs`.
pub fn relevant_squares(origin: Square, dirs: &DirectionSet) -> RelevantSquares {
    dirs.iter().flat_map(|dir| Ray::new(origin, dir)).collect()
}

pub fn relevant_count(origin: Square, dirs: &DirectionSet) -> u32 {
    dirs.iter().map(|dir| Ray::new(origin, dir).count() as u32).sum()
}

pub fn relevant_mask(origin: Square, dirs: &DirectionSet) -> Bitboard {
    dirs.iter().flat_map(|dir| Ray::new(origin, dir)).collect()
}
