use crate::types::bitboard::Bitboard;
use crate::types::square::Square;

#[derive(PartialEq, Eq, Clone, Copy, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum Rank {
    One, Two, Three, Four, Five, Six, Seven, Eight
}

impl Rank {

    pub const COUNT: usize = 8;

    pub const ALL: [Rank; Rank::COUNT] = [
        Rank::One, Rank::Two, Rank::Three, Rank::Four,
        Rank::Five, Rank::Six, Rank::Seven, Rank::Eight
    ];

    pub const CHARS: [char; Rank::COUNT] = ['1', '2', '3', '4', '5', '6', '7', '8'];

    pub const BB: [Bitboard; Rank::COUNT] = [
        Bitboard(0x00000000000000FF),
        Bitboard(0x000000000000FF00),
        Bitboard(0x0000000000FF0000),
        Bitboard(0x00000000FF000000),
        Bitboard(0x000000FF00000000),
        Bitboard(0x0000FF0000000000),
        Bitboard(0x00FF000000000000),
        Bitboard(0xFF00000000000000),
    ];

    pub const fn of(sq: Square) -> Rank {
        Rank::ALL[(sq.0 >> 3) as usize]
    }

    pub const fn index(self) -> i8 {
        self as i8
    }

    pub const fn to_bb(self) -> Bitboard {
        Rank::BB[self as usize]
    }

    pub const fn to_char(self) -> char {
        Rank::CHARS[self as usize]
    }

}
