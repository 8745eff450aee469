use std::fmt::{Display, Formatter};
use std::ops::Add;

use rand::Rng;

/// An x--y coordinate. Doubles as a unit step when paired with a [`crate::Direction`].
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn of(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    /// A random point in `[0, bound.x) × [0, bound.y)`. Both components of `bound` must be positive.
    pub fn random<R: Rng + ?Sized>(bound: Point, rng: &mut R) -> Point {
        Point::of(rng.gen_range(0..bound.x), rng.gen_range(0..bound.y))
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::of(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}
