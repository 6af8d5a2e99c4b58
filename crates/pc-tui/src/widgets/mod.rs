//! ratatui widgets

mod grid;
mod status;

pub use grid::GridWidget;
pub use status::StatusWidget;
