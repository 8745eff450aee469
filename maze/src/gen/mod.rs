//! Maze building algorithms.
//!
//! More ideas at https://weblog.jamisbuck.org/2011/2/7/maze-generation-algorithm-recap.html.

use rand::RngCore;

use crate::{Grid, MazeError, Point};

pub mod recursive_backtracker;

pub use recursive_backtracker::RecursiveBacktracker;

pub trait MazeAlgorithm {
    /// Unique name used to pick the algorithm from the command line.
    fn id(&self) -> &'static str;

    /// Carves corridors into `grid`. Algorithms that grow from a single cell start at `start`,
    /// others may ignore it, but an out of bounds `start` is always an error.
    fn build(&self, grid: &mut Grid, start: Point, rng: &mut dyn RngCore) -> Result<(), MazeError>;
}

/// Every algorithm the crate ships with.
pub const ALGORITHMS: &[&dyn MazeAlgorithm] = &[&RecursiveBacktracker];
