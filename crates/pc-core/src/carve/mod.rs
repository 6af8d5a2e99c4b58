//! Path carving
//!
//! Carves one corridor path between two random border points:
//! 1. Reset the grid and sample two distinct border points
//! 2. Lay the seed step leaving the start in its mandated direction
//! 3. Depth-first search with backtracking until a step arrives on the
//!    end point travelling in the end's mandated direction
//! 4. On failure start over, up to the configured attempt limit

mod carving;
mod search;
mod step;

pub use carving::{CarveSink, Carving};
pub use step::{Goal, Placement, Step, try_place, undo};

use log::{debug, info, trace, warn};
use pc_rng::RandomSource;

use crate::config::CarveConfig;
use crate::direction::{Direction, Role};
use crate::error::{CarveError, Result};
use crate::grid::{Grid, Point};
use search::{SearchOutcome, search};

/// Owns the working grid and the random source for a sequence of
/// generation calls. The grid is reset, never reallocated, between attempts.
#[derive(Debug, Clone)]
pub struct PathCarver<R> {
    config: CarveConfig,
    grid: Grid,
    rng: R,
}

impl<R: RandomSource> PathCarver<R> {
    /// Validate `config` and allocate the grid
    pub fn new(config: CarveConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height)?;
        Ok(Self { config, grid, rng })
    }

    pub fn config(&self) -> &CarveConfig {
        &self.config
    }

    /// Working grid as left by the last attempt
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn into_rng(self) -> R {
        self.rng
    }

    /// Run attempts until one carves a complete path.
    pub fn generate(&mut self) -> Result<Carving> {
        for attempt in 1..=self.config.max_attempts {
            if let Some(carving) = self.attempt(attempt) {
                info!(
                    "path carved on attempt {}: start {} ({}), end {} ({}), {} steps",
                    attempt,
                    carving.start,
                    carving.start_direction,
                    carving.end,
                    carving.end_direction,
                    carving.route.len()
                );
                return Ok(carving);
            }
        }

        warn!(
            "failed to carve a path on a {}x{} grid after {} attempts",
            self.config.width, self.config.height, self.config.max_attempts
        );
        Err(CarveError::AttemptsExhausted {
            attempts: self.config.max_attempts,
        })
    }

    /// Like [`generate`](Self::generate), handing a success to `sink` first
    pub fn generate_into<S: CarveSink + ?Sized>(&mut self, sink: &mut S) -> Result<Carving> {
        let carving = self.generate()?;
        sink.present(&carving);
        Ok(carving)
    }

    fn attempt(&mut self, attempt: u32) -> Option<Carving> {
        self.grid.reset();

        let Some((start, end)) = self.sample_endpoints() else {
            debug!(
                "attempt {}: endpoints coincided on every one of {} draws",
                attempt,
                self.config.max_resamples + 1
            );
            return None;
        };

        let width = self.config.width;
        let start_direction = Direction::mandated(start, width, Role::Start);
        let end_direction = Direction::mandated(end, width, Role::End);
        debug!(
            "attempt {}: start {} ({}), end {} ({})",
            attempt, start, start_direction, end, end_direction
        );

        let seed = Step::seed(start, start_direction);
        if try_place(&mut self.grid, &seed, None) != Placement::Extended {
            debug!("attempt {}: no room for the seed step", attempt);
            return None;
        }

        let goal = Goal {
            point: end,
            direction: end_direction,
        };
        let outcome = search(
            &mut self.grid,
            &mut self.rng,
            seed.next,
            start_direction,
            goal,
            self.config.step_budget,
        );

        match outcome {
            SearchOutcome::Found(steps) => {
                let mut route = Vec::with_capacity(steps.len() + 1);
                route.push(start_direction);
                route.extend(steps);
                Some(Carving {
                    grid: self.grid.clone(),
                    start,
                    end,
                    start_direction,
                    end_direction,
                    route,
                    attempts: attempt,
                })
            }
            SearchOutcome::Exhausted => {
                debug!("attempt {}: search exhausted", attempt);
                None
            }
            SearchOutcome::OverBudget => {
                debug!("attempt {}: step budget spent", attempt);
                None
            }
        }
    }

    /// Two distinct border points. Coinciding draws are redrawn for free, up
    /// to `max_resamples` times.
    fn sample_endpoints(&mut self) -> Option<(Point, Point)> {
        for _ in 0..=self.config.max_resamples {
            let start = self.random_border_point();
            let end = self.random_border_point();
            if start != end {
                return Some((start, end));
            }
            trace!("endpoints coincide at {}, redrawing", start);
        }
        None
    }

    fn random_border_point(&mut self) -> Point {
        let width = self.config.width as u32;
        let height = self.config.height as u32;
        let side = self.rng.below(4);
        match side {
            0 => Point::new(self.rng.below(width) as i32, 0),
            1 => Point::new(self.rng.below(width) as i32, height as i32 - 1),
            2 => Point::new(0, self.rng.below(height) as i32),
            _ => Point::new(width as i32 - 1, self.rng.below(height) as i32),
        }
    }
}
