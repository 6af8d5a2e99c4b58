//! Depth-first path search with chronological backtracking
//!
//! The search keeps an explicit stack of choice points rather than
//! recursing, so grid size never translates into call-stack depth. Frames
//! are created exactly where a recursive search would make a call, so the
//! random stream is consumed in the same order.

use log::trace;
use pc_rng::RandomSource;

use super::step::{Goal, Placement, Step, try_place, undo};
use crate::direction::Direction;
use crate::grid::{Grid, Point};

/// One level of the search: a position, how it was reached, and which of
/// its shuffled candidate directions have been tried.
#[derive(Debug)]
struct ChoicePoint {
    position: Point,
    arrived_via: Direction,
    order: [Direction; 4],
    cursor: usize,
    /// Step committed from here whose continuation is being explored
    placed: Option<Step>,
}

impl ChoicePoint {
    fn new<R: RandomSource + ?Sized>(position: Point, arrived_via: Direction, rng: &mut R) -> Self {
        Self {
            position,
            arrived_via,
            order: Direction::shuffled(rng),
            cursor: 0,
            placed: None,
        }
    }

    fn next_candidate(&mut self) -> Option<Direction> {
        let dir = self.order.get(self.cursor).copied();
        self.cursor += 1;
        dir
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SearchOutcome {
    /// Directions of every step laid by the search, in order
    Found(Vec<Direction>),
    /// Every branch failed
    Exhausted,
    /// The step budget ran out first
    OverBudget,
}

/// Extend the path from `from` until a step lands its second corridor on
/// the goal while travelling in the goal's direction.
///
/// On `Found` the grid holds the complete path. Otherwise every cell the
/// search wrote has been restored.
pub(crate) fn search<R: RandomSource + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    from: Point,
    arrived_via: Direction,
    goal: Goal,
    budget: Option<u64>,
) -> SearchOutcome {
    // No path has more steps than the grid has cells.
    let depth_limit = grid.area();
    let mut tried: u64 = 0;
    let mut stack = vec![ChoicePoint::new(from, arrived_via, rng)];

    while let Some(frame) = stack.last_mut() {
        // A placed step still on the frame means its continuation failed.
        if let Some(step) = frame.placed.take() {
            undo(grid, &step);
        }

        let Some(direction) = frame.next_candidate() else {
            stack.pop();
            continue;
        };
        if direction.is_opposite(frame.arrived_via) {
            continue;
        }

        if let Some(limit) = budget
            && tried >= limit
        {
            unwind(grid, &mut stack);
            return SearchOutcome::OverBudget;
        }
        tried += 1;

        let step = Step::plan(frame.position, frame.arrived_via, direction);
        match try_place(grid, &step, Some(goal)) {
            Placement::Rejected => {}
            Placement::Finished => {
                let mut route: Vec<Direction> = stack
                    .iter()
                    .filter_map(|f| f.placed.map(|s| s.direction))
                    .collect();
                route.push(direction);
                trace!("reached {} after {} placements", goal.point, tried);
                return SearchOutcome::Found(route);
            }
            Placement::Extended => {
                frame.placed = Some(step);
                let depth = stack.len();
                if depth <= depth_limit {
                    stack.push(ChoicePoint::new(step.next, direction, rng));
                }
            }
        }
    }

    SearchOutcome::Exhausted
}

/// Undo every committed step, innermost first
fn unwind(grid: &mut Grid, stack: &mut Vec<ChoicePoint>) {
    while let Some(frame) = stack.pop() {
        if let Some(step) = frame.placed {
            undo(grid, &step);
        }
    }
}
