use crate::ray::{relevant_count, relevant_mask};
use crate::types::{Bitboard, DirectionSet, Square, Subsets};

/// The origin square with the most relevant squares for a direction set, and the number of
/// blocker configurations a lookup table needs to index there.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct MaxBlockerResult {
    pub square: Square,
    pub count: u32,
    pub permutations: u64,
}

impl MaxBlockerResult {

    pub const fn new(square: Square, count: u32) -> MaxBlockerResult {
        MaxBlockerResult { square, count, permutations: 1 << count }
    }

}

/// Scans all 64 origins in row-major order (y outer, x inner) and keeps the first square
/// with the largest count. Only a strictly greater count replaces the current best, so ties
/// go to the earliest square in that order.
pub fn find_max(dirs: &DirectionSet) -> MaxBlockerResult {
    let mut origins = Square::iter().map(|sq| (sq, relevant_count(sq, dirs)));
    // The scan is never empty; a1 seeds the fold.
    let (first, first_count) = origins.next().unwrap_or_default();
    let (square, count) = origins.fold((first, first_count), |best, candidate| {
        if candidate.1 > best.1 {
            candidate
        } else {
            best
        }
    });
    MaxBlockerResult::new(square, count)
}

/// Relevant-square count for every origin, indexed by `Square`.
pub fn relevant_counts(dirs: &DirectionSet) -> [u8; 64] {
    let mut counts = [0; 64];
    for sq in Square::iter() {
        counts[sq] = relevant_count(sq, dirs) as u8;
    }
    counts
}

/// Right-shift that turns a 64-bit magic product into a table index of `count` bits.
pub fn index_shifts(dirs: &DirectionSet) -> [u8; 64] {
    relevant_counts(dirs).map(|count| 64 - count)
}

/// Entries needed by an attack table that gives every origin its own 2^count slots.
pub fn table_size(dirs: &DirectionSet) -> u64 {
    relevant_counts(dirs).iter().map(|&count| 1u64 << count).sum()
}

/// Every occupancy of the relevant squares in `mask`: 2^popcount boards, the empty one first.
pub fn blocker_configurations(mask: Bitboard) -> Subsets {
    mask.subsets()
}

/// Blocker configurations for one origin.
pub fn origin_configurations(origin: Square, dirs: &DirectionSet) -> Subsets {
    blocker_configurations(relevant_mask(origin, dirs))
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    use crate::blockers::{
        blocker_configurations, find_max, index_shifts, origin_configurations, relevant_counts,
        table_size, MaxBlockerResult,
    };
    use crate::ray::{relevant_count, relevant_mask, MAX_RAY_LEN};
    use crate::types::{Bitboard, Direction, DirectionSet, File, Rank, Square};

    #[test]
    fn test_rook_max() {
        let result = find_max(&DirectionSet::rook());
        assert_eq!(result.count, 10);
        assert_eq!(result.square, Square::from(File::B, Rank::Two));
        assert_eq!(result.permutations, 1024);
    }

    #[test]
    fn test_rook_tie_break_is_earliest() {
        let dirs = DirectionSet::rook();
        let tied: Vec<Square> = Square::iter().filter(|&sq| relevant_count(sq, &dirs) == 10).collect();
        // Every interior square ties at ten.
        assert_eq!(tied.len(), 36);
        assert_eq!(find_max(&dirs).square, tied[0]);
    }

    #[test]
    fn test_bishop_max() {
        let result = find_max(&DirectionSet::bishop());
        assert_eq!(result.count, 9);
        assert_eq!(result.square, Square::from(File::D, Rank::Four));
        assert_eq!(result.permutations, 512);
    }

    #[test]
    fn test_queen_max() {
        let result = find_max(&DirectionSet::queen());
        assert_eq!(result.count, 19);
        assert_eq!(result.square, Square::from(File::D, Rank::Four));
        assert_eq!(result.permutations, 524288);
    }

    #[test]
    fn test_direction_order_does_not_change_result() {
        let shuffled = DirectionSet::new(&[
            Direction::SOUTH_EAST, Direction::NORTH, Direction::WEST, Direction::NORTH_WEST,
            Direction::SOUTH, Direction::EAST, Direction::SOUTH_WEST, Direction::NORTH_EAST,
        ]).unwrap();
        assert_eq!(find_max(&shuffled), find_max(&DirectionSet::queen()));
    }

    #[test]
    fn test_empty_set() {
        let result = find_max(&DirectionSet::new(&[]).unwrap());
        assert_eq!(result, MaxBlockerResult::new(Square(0), 0));
        assert_eq!(result.permutations, 1);
    }

    #[test]
    fn test_permutations_are_powers_of_two() {
        assert_eq!(MaxBlockerResult::new(Square(0), 12).permutations, 4096);
        assert_eq!(MaxBlockerResult::new(Square(0), 48).permutations, 1 << 48);
    }

    #[test]
    fn test_random_sets() {
        let mut rng = StdRng::seed_from_u64(0xB10C);
        for _ in 0..200 {
            let mut dirs = Direction::ALL;
            dirs.shuffle(&mut rng);
            let len = rng.random_range(0..=dirs.len());
            let set = DirectionSet::new(&dirs[..len]).unwrap();

            for sq in Square::iter() {
                assert!(relevant_count(sq, &set) as usize <= MAX_RAY_LEN * set.len());
            }

            let result = find_max(&set);
            assert_eq!(result, find_max(&set));
            assert_eq!(result.permutations, 2u64.pow(result.count));
            assert!(Square::iter().all(|sq| relevant_count(sq, &set) <= result.count));
            assert!(Square::iter()
                .take_while(|&sq| sq != result.square)
                .all(|sq| relevant_count(sq, &set) < result.count));
        }
    }

    #[test]
    fn test_relevant_counts() {
        let counts = relevant_counts(&DirectionSet::rook());
        assert_eq!(counts[Square::from(File::A, Rank::One)], 0);
        assert_eq!(counts[Square::from(File::A, Rank::Two)], 6);
        assert_eq!(counts[Square::from(File::D, Rank::Four)], 10);
        let max = *counts.iter().max().unwrap() as u32;
        assert_eq!(max, find_max(&DirectionSet::rook()).count);
    }

    #[test]
    fn test_index_shifts() {
        let shifts = index_shifts(&DirectionSet::bishop());
        assert_eq!(shifts[Square::from(File::D, Rank::Four)], 55);
        assert_eq!(shifts[Square::from(File::H, Rank::Eight)], 58);
    }

    #[test]
    fn test_table_size() {
        let counts = relevant_counts(&DirectionSet::rook());
        let expected: u64 = Square::iter().map(|sq| 2u64.pow(counts[sq] as u32)).sum();
        assert_eq!(table_size(&DirectionSet::rook()), expected);
        // 36 interior squares at 2^10, 24 edge squares at 2^6, 4 corners at 2^0.
        assert_eq!(expected, 36 * 1024 + 24 * 64 + 4);
    }

    #[test]
    fn test_configurations_match_count() {
        let dirs = DirectionSet::queen();
        for sq in [Square(0), Square(9), Square(27), Square(62)] {
            let mask = relevant_mask(sq, &dirs);
            let configs: Vec<Bitboard> = origin_configurations(sq, &dirs).collect();
            assert_eq!(configs.len() as u64, 1u64 << relevant_count(sq, &dirs));
            assert!(configs.iter().all(|&c| (c & !mask).is_empty()));
        }
    }

    #[test]
    fn test_configurations_of_empty_mask() {
        assert_eq!(blocker_configurations(Bitboard::empty()).count(), 1);
    }

}
