use std::str::FromStr;

use arrayvec::ArrayVec;

use crate::error::ConfigError;

/// A single king-step (dx, dy) that a slider repeats along its ray.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Direction {
    dx: i8,
    dy: i8,
}

impl Direction {

    pub const EAST: Direction = Direction { dx: 1, dy: 0 };
    pub const WEST: Direction = Direction { dx: -1, dy: 0 };
    pub const NORTH: Direction = Direction { dx: 0, dy: 1 };
    pub const SOUTH: Direction = Direction { dx: 0, dy: -1 };
    pub const NORTH_EAST: Direction = Direction { dx: 1, dy: 1 };
    pub const NORTH_WEST: Direction = Direction { dx: -1, dy: 1 };
    pub const SOUTH_WEST: Direction = Direction { dx: -1, dy: -1 };
    pub const SOUTH_EAST: Direction = Direction { dx: 1, dy: -1 };

    pub const ALL: [Direction; 8] = [
        Direction::EAST, Direction::WEST, Direction::NORTH, Direction::SOUTH,
        Direction::NORTH_EAST, Direction::NORTH_WEST, Direction::SOUTH_WEST, Direction::SOUTH_EAST,
    ];

    pub fn new(dx: i8, dy: i8) -> Result<Direction, ConfigError> {
        let in_range = (-1..=1).contains(&dx) && (-1..=1).contains(&dy);
        if !in_range || (dx == 0 && dy == 0) {
            return Err(ConfigError::InvalidDirection { dx, dy });
        }
        Ok(Direction { dx, dy })
    }

    pub const fn dx(self) -> i8 {
        self.dx
    }

    pub const fn dy(self) -> i8 {
        self.dy
    }

}

impl FromStr for Direction {
    type Err = ConfigError;

    /// Reads `dx,dy`, e.g. `1,0` or `-1,1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ConfigError::MalformedDirection(s.to_string());
        let (dx, dy) = s.split_once(',').ok_or_else(malformed)?;
        let dx = dx.trim().parse::<i8>().map_err(|_| malformed())?;
        let dy = dy.trim().parse::<i8>().map_err(|_| malformed())?;
        Direction::new(dx, dy)
    }
}

/// Horizontal pair first, then vertical. The order only changes the order of reported
/// squares, never their count.
pub const ROOK: [Direction; 4] = [Direction::EAST, Direction::WEST, Direction::NORTH, Direction::SOUTH];

pub const BISHOP: [Direction; 4] =
    [Direction::NORTH_EAST, Direction::NORTH_WEST, Direction::SOUTH_WEST, Direction::SOUTH_EAST];

pub const QUEEN: [Direction; 8] = Direction::ALL;

/// The named presets.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Slider {
    Rook,
    Bishop,
    Queen,
}

impl Slider {

    pub const fn directions(self) -> &'static [Direction] {
        match self {
            Slider::Rook => &ROOK,
            Slider::Bishop => &BISHOP,
            Slider::Queen => &QUEEN,
        }
    }

}

impl FromStr for Slider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rook" => Ok(Slider::Rook),
            "bishop" => Ok(Slider::Bishop),
            "queen" => Ok(Slider::Queen),
            _ => Err(ConfigError::UnknownSlider(s.to_string())),
        }
    }
}

/// An ordered collection of distinct directions. The order fixes the order in which
/// relevant squares are reported, never their number.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct DirectionSet {
    dirs: ArrayVec<Direction, 8>,
}

impl DirectionSet {

    pub fn new(dirs: &[Direction]) -> Result<DirectionSet, ConfigError> {
        let mut set = ArrayVec::<Direction, 8>::new();
        for &dir in dirs {
            // Eight distinct steps exist, so a ninth is always a duplicate.
            if set.contains(&dir) {
                return Err(ConfigError::DuplicateDirection { dx: dir.dx, dy: dir.dy });
            }
            set.push(dir);
        }
        Ok(DirectionSet { dirs: set })
    }

    /// Validates raw `(dx, dy)` steps, rejecting the whole set on the first bad one.
    pub fn from_steps(steps: &[(i8, i8)]) -> Result<DirectionSet, ConfigError> {
        let dirs = steps
            .iter()
            .map(|&(dx, dy)| Direction::new(dx, dy))
            .collect::<Result<Vec<_>, _>>()?;
        DirectionSet::new(&dirs)
    }

    pub fn rook() -> DirectionSet {
        DirectionSet::from(Slider::Rook)
    }

    pub fn bishop() -> DirectionSet {
        DirectionSet::from(Slider::Bishop)
    }

    pub fn queen() -> DirectionSet {
        DirectionSet::from(Slider::Queen)
    }

    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        self.dirs.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

}

impl From<Slider> for DirectionSet {
    fn from(slider: Slider) -> Self {
        DirectionSet { dirs: slider.directions().iter().copied().collect() }
    }
}
