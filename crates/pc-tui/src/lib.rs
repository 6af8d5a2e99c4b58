//! pc-tui: terminal front end for the path carver
//!
//! Text and JSON sinks for one-shot output, plus an interactive ratatui
//! viewer that re-carves on demand.

pub mod app;
pub mod input;
pub mod sink;
pub mod theme;
pub mod widgets;

pub use app::Viewer;
pub use sink::{AsciiSink, JsonSink};
pub use theme::Theme;
