//! Generation errors
//!
//! Only whole-call failures live here. A rejected placement inside the
//! search is an ordinary [`Placement`](crate::carve::Placement) value.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarveError {
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("attempt limit must be at least 1")]
    InvalidAttemptLimit,

    #[error("no path found after {attempts} attempts")]
    AttemptsExhausted { attempts: u32 },

    #[error("invalid configuration: {reason}")]
    Config { reason: String },
}

pub type Result<T> = std::result::Result<T, CarveError>;
