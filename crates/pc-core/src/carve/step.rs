//! Single path steps: planning, placement and undo

use crate::direction::Direction;
use crate::grid::{Cell, Grid, Point};

/// The cells one step of the path touches.
///
/// A straight step reuses the cell it starts on as its first corridor. A
/// turn marks that cell as a joint and lays both corridors beyond it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub direction: Direction,
    pub joint: Option<Point>,
    pub first: Point,
    pub second: Point,
    /// Where the following step starts; left empty by this step
    pub next: Point,
}

impl Step {
    /// The mandatory opening step leaving `start`
    pub fn seed(start: Point, direction: Direction) -> Self {
        Self {
            direction,
            joint: None,
            first: start,
            second: start.step(direction, 1),
            next: start.step(direction, 2),
        }
    }

    /// Step from `position` in `direction` after arriving via `arrived_via`
    pub fn plan(position: Point, arrived_via: Direction, direction: Direction) -> Self {
        if direction == arrived_via {
            Self {
                direction,
                joint: None,
                first: position,
                second: position.step(direction, 1),
                next: position.step(direction, 2),
            }
        } else {
            Self {
                direction,
                joint: Some(position),
                first: position.step(direction, 1),
                second: position.step(direction, 2),
                next: position.step(direction, 3),
            }
        }
    }

    pub fn needs_joint(&self) -> bool {
        self.joint.is_some()
    }

    /// Cell writes this step commits
    fn writes(&self) -> impl Iterator<Item = (Point, Cell)> + Clone {
        self.joint
            .map(|p| (p, Cell::Joint))
            .into_iter()
            .chain([(self.first, Cell::Corridor), (self.second, Cell::Corridor)])
    }

    /// Every point this step writes
    fn points(&self) -> impl Iterator<Item = Point> + Clone {
        self.joint
            .into_iter()
            .chain([self.first, self.second])
    }
}

/// Where the path has to finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Goal {
    pub point: Point,
    /// Direction the final step must be travelling in
    pub direction: Direction,
}

/// Outcome of trying to lay one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Nothing was written
    Rejected,
    /// The step was written and its second corridor is the goal
    Finished,
    /// The step was written and the path continues from `next`
    Extended,
}

/// Validate `step` against the grid and commit it if it fits.
///
/// Without a goal the step must leave room for a successor; this is how
/// the seed step is placed.
pub fn try_place(grid: &mut Grid, step: &Step, goal: Option<Goal>) -> Placement {
    if !grid.is_empty(step.first) || !grid.is_empty(step.second) {
        return Placement::Rejected;
    }

    if let Some(joint) = step.joint
        && grid.get(joint) == Some(Cell::Joint)
    {
        return Placement::Rejected;
    }

    if let Some(goal) = goal
        && step.second == goal.point
    {
        if step.direction != goal.direction {
            return Placement::Rejected;
        }
        commit(grid, step);
        return Placement::Finished;
    }

    if !grid.is_empty(step.next) {
        return Placement::Rejected;
    }

    commit(grid, step);
    Placement::Extended
}

fn commit(grid: &mut Grid, step: &Step) {
    let written = grid.write(step.writes());
    debug_assert!(written, "committed step left the grid: {step:?}");
}

/// Restore every cell `step` wrote to `Empty`
pub fn undo(grid: &mut Grid, step: &Step) {
    let cleared = grid.clear(step.points());
    debug_assert!(cleared, "undone step left the grid: {step:?}");
}
