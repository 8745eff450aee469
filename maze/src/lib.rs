pub mod point;
pub mod direction;
pub mod uint28;
pub mod grid;
pub mod gen;
pub mod distance;

pub use direction::Direction;
pub use grid::{Cell, CellMut, Grid, Snapshot};
pub use point::Point;
pub use uint28::UInt28;

#[derive(thiserror::Error, PartialEq, Eq, Clone, Debug)]
pub enum MazeError {
    #[error("{point} out of bounds for maze of size {width}x{height}")]
    OutOfBounds { point: Point, width: i32, height: i32 },

    #[error("{0} does not fit in a 28-bit integer")]
    ValueRange(u32),

    #[error("maze dimensions must be positive, got {width}x{height}")]
    InvalidShape { width: i32, height: i32 },
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use crate::gen::{MazeAlgorithm, RecursiveBacktracker};
    use super::*;

    fn build_and_label(rng: &mut dyn rand::RngCore) -> Grid {
        let mut grid = Grid::new(3, 3).unwrap();
        RecursiveBacktracker.build(&mut grid, Point::of(1, 1), rng).unwrap();
        distance::label(&mut grid, Point::of(1, 1)).unwrap();
        grid
    }

    /// A constant zero source makes every shuffle come out East, South, West, North,
    /// so the backtracker spirals out from the centre.
    #[test]
    fn canonical_spiral() {
        let grid = build_and_label(&mut StepRng::new(0, 0));

        let expected = "\
+---+---+---+
|           |
+   +---+---+
|   |       |
+   +---+   +
|           |
+---+---+---+
";
        assert_eq!(grid.to_string(), expected);
        assert_eq!(
            grid.payload_snapshot().to_rows(),
            vec![vec![7, 8, 9], vec![6, 1, 2], vec![5, 4, 3]]
        );
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let first = build_and_label(&mut StdRng::seed_from_u64(2024));
        let second = build_and_label(&mut StdRng::seed_from_u64(2024));
        assert_eq!(first, second);

        let mut values = first.payload_snapshot().values().to_vec();
        values.sort();
        // Only the start is labelled 1 and nothing is left unvisited.
        assert_eq!(values[0], 1);
        assert_eq!(values.iter().filter(|&&v| v == 1).count(), 1);
        assert!(values.iter().all(|&v| v >= 1 && v <= 9));
        assert_eq!(first.corridor_count(), 8);
    }
}
