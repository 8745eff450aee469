use log::debug;
use rand::RngCore;

use crate::gen::MazeAlgorithm;
use crate::{Direction, Grid, MazeError, Point};

/// Depth-first maze carving: walk to a random unvisited neighbour until stuck, then back up.
///
/// A 1920x1080 maze would recurse about 2 million deep, so the walk keeps its own stack.
pub struct RecursiveBacktracker;

impl MazeAlgorithm for RecursiveBacktracker {
    fn id(&self) -> &'static str {
        "RecursiveBacktracker"
    }

    fn build(&self, grid: &mut Grid, start: Point, rng: &mut dyn RngCore) -> Result<(), MazeError> {
        if !grid.has(start) {
            return Err(grid.out_of_bounds(start));
        }

        let mut expanded = 0usize;
        let mut stack: Vec<(Point, [Direction; 4])> = vec![(start, Direction::shuffled(rng))];
        while let Some((point, directions)) = stack.pop() {
            // A cell without corridors hasn't been visited yet.
            let next = directions.into_iter().find(|&direction| {
                grid.cell(point + direction.delta())
                    .map_or(false, |neighbor| !neighbor.has_any_corridor())
            });

            match next {
                Some(direction) => {
                    if let Some(mut cell) = grid.cell_mut(point) {
                        cell.open_corridor(direction);
                    }
                    // Directions already tried fail the unvisited check next time round.
                    stack.push((point, directions));
                    stack.push((point + direction.delta(), Direction::shuffled(rng)));
                }
                None => expanded += 1,
            }
        }

        debug!(
            "Built {}x{} maze from {}: {} cells expanded, {} corridors",
            grid.width(),
            grid.height(),
            start,
            expanded,
            grid.corridor_count()
        );
        Ok(())
    }
}
