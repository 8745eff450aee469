use log::debug;

use crate::{Grid, MazeError, Point, UInt28};

/// Stamps every cell reachable from `start` with its distance from `start`, plus one.
///
/// Payload 0 means "not visited yet", so `start` itself gets 1. Cells that can't be reached
/// keep 0. This is a plain depth-first walk: the distances are only shortest paths because
/// a maze built by [`crate::gen`] is a tree. Returns the largest value written.
pub fn label(grid: &mut Grid, start: Point) -> Result<u32, MazeError> {
    if !grid.has(start) {
        return Err(grid.out_of_bounds(start));
    }

    let mut farthest = 0;
    let mut stack = vec![(start, 1u32)];
    while let Some((point, distance)) = stack.pop() {
        let value = UInt28::clamped(distance);
        if let Some(mut cell) = grid.cell_mut(point) {
            cell.set_payload(value);
        }
        farthest = farthest.max(value.get());

        if let Some(cell) = grid.cell(point) {
            stack.extend(
                cell.reachable_neighbors()
                    .filter(|neighbor| neighbor.payload() == 0)
                    .map(|neighbor| (neighbor.point(), distance.saturating_add(1))),
            );
        }
    }

    debug!("Labelled distances from {}, farthest is {}", start, farthest - 1);
    Ok(farthest)
}
