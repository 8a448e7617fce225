pub mod bitboard;
pub mod direction;
pub mod square;
pub mod file;
pub mod rank;

pub use bitboard::{Bitboard, Subsets};
pub use direction::{Direction, DirectionSet, Slider};
pub use file::File;
pub use rank::Rank;
pub use square::Square;
