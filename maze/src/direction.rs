use rand::seq::SliceRandom;
use rand::Rng;

use crate::Point;

/// The four ways out of a cell. Each variant doubles as the bit flag marking an open corridor.
#[repr(u8)]
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Direction {
    North = 0b0001,
    East = 0b0010,
    South = 0b0100,
    West = 0b1000,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::North, Direction::East, Direction::South, Direction::West];

    pub fn bit(self) -> u32 {
        self as u32
    }

    /// The step that moves a point one cell towards `self`. North is towards `y = 0`.
    pub fn delta(self) -> Point {
        match self {
            Direction::North => Point::of(0, -1),
            Direction::East => Point::of(1, 0),
            Direction::South => Point::of(0, 1),
            Direction::West => Point::of(-1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// A fresh random ordering of all four directions.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> [Direction; 4] {
        let mut directions = Direction::ALL;
        directions.shuffle(rng);
        directions
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use super::*;

    #[test]
    fn opposites_cancel_out() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_eq!(direction.delta() + direction.opposite().delta(), Point::of(0, 0));
        }
    }

    #[test]
    fn flags_are_distinct_bits() {
        let combined = Direction::ALL.iter().fold(0, |acc, d| {
            assert_eq!(acc & d.bit(), 0);
            acc | d.bit()
        });
        assert_eq!(combined, 0xf);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let mut directions = Direction::shuffled(&mut rng);
            directions.sort_by_key(|d| d.bit());
            assert_eq!(directions, Direction::ALL);
        }
    }
}
