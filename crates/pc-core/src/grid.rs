//! Grid store
//!
//! A `width × height` array of [`Cell`]s addressed by [`Point`]. Every read
//! and write is bounds checked; bulk writes are all-or-nothing.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::direction::Direction;
use crate::error::{CarveError, Result};

/// Cell state
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Empty = 0,
    /// Straight path segment
    Corridor = 1,
    /// Direction change
    Joint = 2,
}

impl Cell {
    /// ASCII symbol used by the grid's `Display`
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Corridor => '#',
            Cell::Joint => '+',
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Grid coordinate. May lie outside the grid while a step is being planned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point `n` unit steps away along `direction`
    pub const fn step(self, direction: Direction, n: i32) -> Self {
        let (dx, dy) = direction.vector();
        Self {
            x: self.x.saturating_add(dx * n),
            y: self.y.saturating_add(dy * n),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Fixed-size cell grid, stored row-major with `y = 0` as the bottom row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-empty grid. Both dimensions must be non-zero and fit
    /// the `i32` coordinate space.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let max = i32::MAX as usize;
        if width == 0 || height == 0 || width > max || height > max {
            return Err(CarveError::InvalidDimensions { width, height });
        }
        let area = width
            .checked_mul(height)
            .ok_or(CarveError::InvalidDimensions { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Empty; area],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    fn index(&self, p: Point) -> Option<usize> {
        if self.in_bounds(p) {
            Some(p.y as usize * self.width + p.x as usize)
        } else {
            None
        }
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    /// Cell at `p`, or `None` outside the grid
    pub fn get(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// True only for an in-bounds empty cell
    pub fn is_empty(&self, p: Point) -> bool {
        self.get(p) == Some(Cell::Empty)
    }

    /// Check if a point lies on the outer edge
    pub fn is_border(&self, p: Point) -> bool {
        self.in_bounds(p)
            && (p.x == 0
                || p.y == 0
                || p.x as usize == self.width - 1
                || p.y as usize == self.height - 1)
    }

    /// Set every cell to `Empty`
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Write several cells at once.
    ///
    /// Returns false and leaves the grid untouched if any point is outside.
    pub fn write<I>(&mut self, cells: I) -> bool
    where
        I: IntoIterator<Item = (Point, Cell)>,
        I::IntoIter: Clone,
    {
        let cells = cells.into_iter();
        if !cells.clone().all(|(p, _)| self.in_bounds(p)) {
            return false;
        }
        for (p, cell) in cells {
            if let Some(i) = self.index(p) {
                self.cells[i] = cell;
            }
        }
        true
    }

    /// Reset several cells to `Empty`, all-or-nothing like [`Grid::write`]
    pub fn clear<I>(&mut self, points: I) -> bool
    where
        I: IntoIterator<Item = Point>,
        I::IntoIter: Clone,
    {
        self.write(points.into_iter().map(|p| (p, Cell::Empty)))
    }

    /// All cells with their coordinates, bottom row first
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(i, &cell)| {
            let p = Point::new((i % width) as i32, (i / width) as i32);
            (p, cell)
        })
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Number of non-empty cells reachable from `from` through
    /// edge-adjacent non-empty cells. Zero if `from` itself is empty.
    pub fn connected_from(&self, from: Point) -> usize {
        let Some(start) = self.index(from) else {
            return 0;
        };
        if self.cells[start].is_empty() {
            return 0;
        }

        let mut seen = vec![false; self.cells.len()];
        let mut queue = VecDeque::from([from]);
        seen[start] = true;
        let mut reached = 0;

        while let Some(p) = queue.pop_front() {
            reached += 1;
            for dir in Direction::ALL {
                let n = p.step(dir, 1);
                if let Some(i) = self.index(n)
                    && !seen[i]
                    && !self.cells[i].is_empty()
                {
                    seen[i] = true;
                    queue.push_back(n);
                }
            }
        }
        reached
    }

    /// Rows as symbol strings, top row first
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width)
            .rev()
            .map(|row| row.iter().map(|c| c.symbol()).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}

impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        #[derive(Serialize)]
        struct GridRepr {
            width: usize,
            height: usize,
            rows: Vec<String>,
        }

        GridRepr {
            width: self.width,
            height: self.height,
            rows: self.rows(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert_eq!(
            Grid::new(0, 4),
            Err(CarveError::InvalidDimensions { width: 0, height: 4 })
        );
        assert_eq!(
            Grid::new(4, 0),
            Err(CarveError::InvalidDimensions { width: 4, height: 0 })
        );
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(5, 3).unwrap();
        assert_eq!(grid.area(), 15);
        assert_eq!(grid.count(Cell::Empty), 15);
        assert!(grid.iter().all(|(_, c)| c == Cell::Empty));
    }

    #[test]
    fn test_bounds_near_edges() {
        let grid = Grid::new(4, 3).unwrap();
        let inside = [(0, 0), (3, 0), (0, 2), (3, 2)];
        let outside = [(-1, 0), (0, -1), (4, 0), (0, 3), (4, 3), (-1, -1), (i32::MIN, 0)];

        for (x, y) in inside {
            let p = Point::new(x, y);
            assert!(grid.in_bounds(p), "{p}");
            assert_eq!(grid.get(p), Some(Cell::Empty));
        }
        for (x, y) in outside {
            let p = Point::new(x, y);
            assert!(!grid.in_bounds(p), "{p}");
            assert_eq!(grid.get(p), None);
            assert!(!grid.is_empty(p));
        }
    }

    #[test]
    fn test_write_is_all_or_nothing() {
        let mut grid = Grid::new(3, 3).unwrap();
        let ok = grid.write([(Point::new(0, 0), Cell::Corridor), (Point::new(3, 0), Cell::Corridor)]);
        assert!(!ok);
        assert_eq!(grid.count(Cell::Empty), 9);

        assert!(grid.write([(Point::new(1, 1), Cell::Joint), (Point::new(1, 2), Cell::Corridor)]));
        assert_eq!(grid.get(Point::new(1, 1)), Some(Cell::Joint));
        assert_eq!(grid.get(Point::new(1, 2)), Some(Cell::Corridor));
    }

    #[test]
    fn test_clear_restores_empty() {
        let mut grid = Grid::new(3, 3).unwrap();
        let points = [Point::new(0, 1), Point::new(1, 1)];
        grid.write(points.iter().map(|&p| (p, Cell::Corridor)));
        assert!(grid.clear(points));
        assert_eq!(grid.count(Cell::Empty), 9);
        assert!(!grid.clear([Point::new(-1, 0)]));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.write([(Point::new(2, 2), Cell::Joint), (Point::new(0, 3), Cell::Corridor)]);

        grid.reset();
        let once = grid.clone();
        grid.reset();

        assert_eq!(grid, once);
        assert_eq!(grid.count(Cell::Empty), 16);
    }

    #[test]
    fn test_is_border() {
        let grid = Grid::new(4, 3).unwrap();
        assert!(grid.is_border(Point::new(0, 1)));
        assert!(grid.is_border(Point::new(3, 1)));
        assert!(grid.is_border(Point::new(2, 0)));
        assert!(grid.is_border(Point::new(2, 2)));
        assert!(!grid.is_border(Point::new(1, 1)));
        assert!(!grid.is_border(Point::new(4, 1)));
    }

    #[test]
    fn test_iter_coordinates() {
        let grid = Grid::new(3, 2).unwrap();
        let points: Vec<Point> = grid.iter().map(|(p, _)| p).collect();
        assert_eq!(points[0], Point::new(0, 0));
        assert_eq!(points[2], Point::new(2, 0));
        assert_eq!(points[3], Point::new(0, 1));
        assert_eq!(points.len(), 6);
    }

    #[test]
    fn test_connected_from() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.write([
            (Point::new(0, 0), Cell::Corridor),
            (Point::new(1, 0), Cell::Corridor),
            (Point::new(2, 0), Cell::Joint),
            (Point::new(2, 1), Cell::Corridor),
            (Point::new(3, 3), Cell::Corridor),
        ]);
        assert_eq!(grid.connected_from(Point::new(0, 0)), 4);
        assert_eq!(grid.connected_from(Point::new(3, 3)), 1);
        assert_eq!(grid.connected_from(Point::new(1, 1)), 0);
        assert_eq!(grid.connected_from(Point::new(9, 9)), 0);
    }

    #[test]
    fn test_display_top_row_first() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.write([(Point::new(0, 0), Cell::Corridor), (Point::new(2, 1), Cell::Joint)]);
        assert_eq!(grid.to_string(), "..+\n#..");
    }

    #[test]
    fn test_serialize_rows() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.write([(Point::new(1, 1), Cell::Corridor)]);
        let json = serde_json::to_value(&grid).unwrap();
        assert_eq!(json["width"], 2);
        assert_eq!(json["rows"][0], ".#");
        assert_eq!(json["rows"][1], "..");
    }

    #[test]
    fn test_point_step() {
        let p = Point::new(2, 2);
        assert_eq!(p.step(Direction::Up, 1), Point::new(2, 3));
        assert_eq!(p.step(Direction::Left, 3), Point::new(-1, 2));
        assert_eq!(p.to_string(), "(2, 2)");
    }
}
