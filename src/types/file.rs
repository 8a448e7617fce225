use crate::types::bitboard::Bitboard;
use crate::types::square::Square;

#[derive(PartialEq, Eq, Clone, Copy, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum File {
    A, B, C, D, E, F, G, H
}

impl File {

    pub const COUNT: usize = 8;

    pub const ALL: [File; File::COUNT] = [
        File::A, File::B, File::C, File::D, File::E, File::F, File::G, File::H
    ];

    pub const CHARS: [char; File::COUNT] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

    pub const BB: [Bitboard; File::COUNT] = [
        Bitboard(0x0101010101010101),
        Bitboard(0x0202020202020202),
        Bitboard(0x0404040404040404),
        Bitboard(0x0808080808080808),
        Bitboard(0x1010101010101010),
        Bitboard(0x2020202020202020),
        Bitboard(0x4040404040404040),
        Bitboard(0x8080808080808080),
    ];

    pub const fn of(sq: Square) -> File {
        File::ALL[(sq.0 & 7) as usize]
    }

    pub const fn index(self) -> i8 {
        self as i8
    }

    pub const fn to_bb(self) -> Bitboard {
        File::BB[self as usize]
    }

    pub const fn to_char(self) -> char {
        File::CHARS[self as usize]
    }

}
