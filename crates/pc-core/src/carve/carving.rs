//! Finished carvings and the presentation seam

use serde::Serialize;

use crate::direction::Direction;
use crate::grid::{Cell, Grid, Point};

/// A successfully carved grid together with how it was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Carving {
    pub grid: Grid,
    pub start: Point,
    pub end: Point,
    pub start_direction: Direction,
    pub end_direction: Direction,
    /// Direction of every step, seed first
    pub route: Vec<Direction>,
    /// 1-based attempt that succeeded
    pub attempts: u32,
}

impl Carving {
    pub fn corridor_count(&self) -> usize {
        self.grid.count(Cell::Corridor)
    }

    pub fn joint_count(&self) -> usize {
        self.grid.count(Cell::Joint)
    }

    /// Number of direction changes along the route
    pub fn turns(&self) -> usize {
        self.route.windows(2).filter(|w| w[0] != w[1]).count()
    }
}

/// Receives a finished carving for display.
pub trait CarveSink {
    fn present(&mut self, carving: &Carving);
}

impl CarveSink for Vec<Carving> {
    fn present(&mut self, carving: &Carving) {
        self.push(carving.clone());
    }
}

impl<S: CarveSink + ?Sized> CarveSink for &mut S {
    fn present(&mut self, carving: &Carving) {
        (**self).present(carving);
    }
}
