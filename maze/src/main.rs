extern crate maze;

use maze::gen::{MazeAlgorithm, RecursiveBacktracker};
use maze::{Grid, Point};

fn main() -> Result<(), maze::MazeError> {
    let mut grid = Grid::new(8, 5)?;
    let start = Point::random(grid.shape(), &mut rand::thread_rng());
    RecursiveBacktracker.build(&mut grid, start, &mut rand::thread_rng())?;
    println!("{}", grid);
    Ok(())
}
