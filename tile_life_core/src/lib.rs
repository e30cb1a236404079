//! Tile-grid Game of Life core.
//!
//! A [`Grid`] owns a fixed `width × height` block of [`Cell`]s. Neighbor
//! topology is wired once with [`Grid::connect_topology`], after which each
//! call to [`Grid::advance_generation`] applies the standard Life rule
//! (B3/S23) to every cell. Edges do not wrap.
//!
//! ```
//! use tile_life_core::Grid;
//!
//! let mut grid = Grid::new(3, 3, 10.0).unwrap();
//! grid.connect_topology();
//! grid.set_alive(1, 1, true).unwrap();
//! grid.advance_generation();
//! assert_eq!(grid.live_count(), 0);
//! ```

pub mod cell;      // Single tile with cached neighbors
pub mod context;   // Driver state: run flag, rate, grid
pub mod error;
pub mod grid;      // Tile grid and generation stepping
pub mod patterns;  // Seed patterns
pub mod render;    // Rendering collaborator seam
pub mod rule;      // B3/S23 transition

pub use cell::{Cell, DEBOUNCE};
pub use context::SimulationContext;
pub use error::GridError;
pub use grid::{ClickOutcome, Grid, UpdatePolicy};
pub use patterns::{PATTERNS, Pattern};
pub use render::CellRenderer;
