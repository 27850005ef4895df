//! Error types for start-up configuration.
//!
//! Out-of-range grid access is a programming error and panics instead.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} isn't an integer")]
    NotAnInteger(String),

    #[error("{0} isn't positive")]
    Negative(String),

    #[error("{0} is too large")]
    TooLarge(String),

    #[error("cell size must be positive")]
    ZeroCellSize,

    #[error("{width}x{height} surface is smaller than one {cell_size}px cell")]
    SurfaceTooSmall {
        width: u32,
        height: u32,
        cell_size: u32,
    },
}
