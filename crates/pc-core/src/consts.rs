//! Generation limits and defaults

/// Narrowest grid a path can be carved on.
///
/// With one or two columns every border cell sits on the left or right
/// edge, so every start point is sent sideways off the grid by its seed step.
pub const MIN_WIDTH: usize = 3;

/// Shortest grid a path can be carved on
pub const MIN_HEIGHT: usize = 1;

pub const DEFAULT_WIDTH: usize = 10;
pub const DEFAULT_HEIGHT: usize = 10;

/// Reset-and-search cycles before giving up
pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

/// Endpoint redraws allowed within one attempt when start and end coincide
pub const DEFAULT_MAX_RESAMPLES: u32 = 32;
