use std::fmt::{Debug, Display, Formatter};

use crate::{Direction, MazeError, Point, UInt28};

/// Corridors live in the lowest 4 bits of a cell.
const CORRIDORS_MASK: u32 = 0xf;
const CORRIDORS_WIDTH: u32 = 4;

/// A rectangular maze, stored as one packed `u32` per cell in row-major order.
///
/// ```text
/// 0b0000 0000 0000 0000 0000 0000 0000 0000
///   ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^ ^^^^
///   |                                  +--- corridor flags, indexed by `Direction::bit`
///   +-------------------------------------- 28-bit payload
/// ```
///
/// Cells don't own anything. [`Cell`] and [`CellMut`] are coordinates plus a borrow of
/// the grid, and every corridor change goes through the grid so both ends of a corridor
/// are updated together.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<u32>,
}

/// `None` for non-positive sizes and for sizes that can't be indexed on this target.
fn cell_count(width: i32, height: i32) -> Option<usize> {
    if width <= 0 || height <= 0 {
        return None;
    }
    usize::try_from(width).ok()?.checked_mul(usize::try_from(height).ok()?)
}

impl Grid {
    /// A grid of `width` × `height` cells, all with payload 0 and no corridors.
    pub fn new(width: i32, height: i32) -> Result<Grid, MazeError> {
        let len = cell_count(width, height).ok_or(MazeError::InvalidShape { width, height })?;
        Ok(Grid {
            width,
            height,
            cells: vec![0; len],
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn shape(&self) -> Point {
        Point::of(self.width, self.height)
    }

    pub fn has(&self, point: Point) -> bool {
        point.x >= 0 && point.x < self.width && point.y >= 0 && point.y < self.height
    }

    pub fn cell(&self, point: Point) -> Option<Cell<'_>> {
        if self.has(point) {
            Some(Cell { grid: self, point })
        } else {
            None
        }
    }

    pub fn cell_mut(&mut self, point: Point) -> Option<CellMut<'_>> {
        if self.has(point) {
            Some(CellMut { grid: self, point })
        } else {
            None
        }
    }

    pub(crate) fn out_of_bounds(&self, point: Point) -> MazeError {
        MazeError::OutOfBounds {
            point,
            width: self.width,
            height: self.height,
        }
    }

    /// Every coordinate of the grid, row by row. The iterator doesn't borrow the grid.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Point::of(x, y)))
    }

    /// Every cell of the grid, row by row.
    pub fn all_cells(&self) -> impl Iterator<Item = Cell<'_>> + '_ {
        self.points().map(move |point| Cell { grid: self, point })
    }

    /// Number of open corridors. A spanning tree over `n` cells has `n - 1`.
    pub fn corridor_count(&self) -> usize {
        let pair_bits = Direction::East.bit() | Direction::South.bit();
        self.cells.iter().map(|data| (data & pair_bits).count_ones() as usize).sum()
    }

    /// Copies out every payload with the corridor bits shifted away.
    pub fn payload_snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.width as usize,
            height: self.height as usize,
            values: self.cells.iter().map(|data| data >> CORRIDORS_WIDTH).collect(),
        }
    }

    fn index(&self, point: Point) -> usize {
        point.y as usize * self.width as usize + point.x as usize
    }

    fn data(&self, point: Point) -> u32 {
        self.cells[self.index(point)]
    }

    fn write_payload(&mut self, point: Point, value: UInt28) {
        let i = self.index(point);
        self.cells[i] = (self.cells[i] & CORRIDORS_MASK) | (value.get() << CORRIDORS_WIDTH);
    }

    /// Sets or clears the corridor between `point` and its neighbour, on both sides.
    /// Does nothing if either end lies outside the grid.
    fn mutate_corridor(&mut self, point: Point, direction: Direction, open: bool) {
        let neighbor = point + direction.delta();
        if !self.has(point) || !self.has(neighbor) {
            return;
        }

        let here = self.index(point);
        let there = self.index(neighbor);
        if open {
            self.cells[here] |= direction.bit();
            self.cells[there] |= direction.opposite().bit();
        } else {
            self.cells[here] &= !direction.bit();
            self.cells[there] &= !direction.opposite().bit();
        }
    }
}

/// A read-only handle on one cell of a [`Grid`].
#[derive(Clone, Copy)]
pub struct Cell<'a> {
    grid: &'a Grid,
    point: Point,
}

impl<'a> Cell<'a> {
    pub fn point(&self) -> Point {
        self.point
    }

    pub fn payload(&self) -> u32 {
        self.grid.data(self.point) >> CORRIDORS_WIDTH
    }

    pub fn has_corridor(&self, direction: Direction) -> bool {
        self.grid.data(self.point) & direction.bit() != 0
    }

    pub fn has_any_corridor(&self) -> bool {
        self.grid.data(self.point) & CORRIDORS_MASK != 0
    }

    /// The adjacent cell towards `direction`, corridor or not.
    pub fn neighbor(&self, direction: Direction) -> Option<Cell<'a>> {
        self.grid.cell(self.point + direction.delta())
    }

    /// Adjacent cells joined to this one by an open corridor.
    pub fn reachable_neighbors(&self) -> impl Iterator<Item = Cell<'a>> + 'a {
        let cell = *self;
        Direction::ALL
            .into_iter()
            .filter(move |&direction| cell.has_corridor(direction))
            .filter_map(move |direction| cell.neighbor(direction))
    }
}

impl PartialEq for Cell<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.grid, other.grid) && self.point == other.point
    }
}

impl Debug for Cell<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("point", &self.point)
            .field("payload", &self.payload())
            .field("corridors", &(self.grid.data(self.point) & CORRIDORS_MASK))
            .finish()
    }
}

/// A handle on one cell that can change its payload and corridors.
pub struct CellMut<'a> {
    grid: &'a mut Grid,
    point: Point,
}

impl<'a> CellMut<'a> {
    pub fn as_cell(&self) -> Cell<'_> {
        Cell {
            grid: &*self.grid,
            point: self.point,
        }
    }

    pub fn point(&self) -> Point {
        self.point
    }

    pub fn payload(&self) -> u32 {
        self.as_cell().payload()
    }

    pub fn has_corridor(&self, direction: Direction) -> bool {
        self.as_cell().has_corridor(direction)
    }

    pub fn has_any_corridor(&self) -> bool {
        self.as_cell().has_any_corridor()
    }

    /// Replaces the payload. Corridors are untouched.
    pub fn set_payload(&mut self, value: UInt28) {
        self.grid.write_payload(self.point, value);
    }

    pub fn open_corridor(&mut self, direction: Direction) {
        self.grid.mutate_corridor(self.point, direction, true);
    }

    pub fn close_corridor(&mut self, direction: Direction) {
        self.grid.mutate_corridor(self.point, direction, false);
    }
}

/// Row-major copy of a grid's payloads.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Snapshot {
    width: usize,
    height: usize,
    values: Vec<u32>,
}

impl Snapshot {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.values[y * self.width + x]
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.values.chunks(self.width)
    }

    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let line_length = (2 + (4 * self.width)) as usize;
        let mut result = String::with_capacity(line_length * (1 + 2 * self.height as usize));

        // The top row
        result.push('+');
        for _ in 0..self.width {
            result.push_str("---+");
        }
        result.push('\n');

        for y in 0..self.height {
            let mut middle = String::with_capacity(line_length);
            middle.push('|');
            let mut bottom = String::with_capacity(line_length);
            bottom.push('+');
            for x in 0..self.width {
                let data = self.data(Point::of(x, y));
                if data & Direction::East.bit() != 0 {
                    middle.push_str("    ");
                } else {
                    middle.push_str("   |");
                }
                if data & Direction::South.bit() != 0 {
                    bottom.push_str("   +");
                } else {
                    bottom.push_str("---+");
                }
            }
            result.push_str(&middle);
            result.push('\n');
            result.push_str(&bottom);
            result.push('\n');
        }

        write!(f, "{}", result)
    }
}
