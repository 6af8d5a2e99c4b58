//! pc-core: randomized corridor carving on a rectangular grid
//!
//! Picks two distinct border cells and carves a single corridor between
//! them by depth-first search with backtracking. Corridors are laid two
//! cells per step and every change of direction leaves a joint behind.
//!
//! This crate does no terminal I/O. Finished carvings are handed to a
//! [`CarveSink`] for display.

mod consts;

pub mod carve;
pub mod config;
pub mod direction;
pub mod error;
pub mod grid;

pub use carve::{CarveSink, Carving, PathCarver};
pub use config::CarveConfig;
pub use consts::*;
pub use direction::{Direction, Edge, Role};
pub use error::{CarveError, Result};
pub use grid::{Cell, Grid, Point};

pub use pc_rng::{CarveRng, RandomSource, SequenceRng, TracingRng};
