// error.rs - Error types for building and seeding the grid

use thiserror::Error;

/// Errors raised when building or seeding a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// Width or height is zero, or the tile count is too large to allocate.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions {
        width: usize,
        height: usize,
    },

    /// Cell size must be finite and positive.
    #[error("invalid cell size {0}")]
    InvalidCellSize(f32),

    /// Coordinates fall outside the grid.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}
