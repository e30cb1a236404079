// grid.rs - Tile grid for Conway's Game of Life

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::cell::Cell;
use crate::error::GridError;
use crate::render::CellRenderer;

/// How a generation step reads neighbor state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdatePolicy {
    /// Cells are updated one by one in scan order (x outer, y inner), and a
    /// cell reads whatever its neighbors hold at that moment, so later cells
    /// see earlier results from the same pass.
    #[default]
    InPlace,
    /// Every next state is computed from the pre-step snapshot, then committed.
    DoubleBuffered,
}

/// Result of forwarding a pointer position to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Toggled { x: usize, y: usize },
    /// Cell was hit but toggled too recently.
    Debounced { x: usize, y: usize },
    OutOfBounds,
}

/// Fixed-size grid owning every [`Cell`].
///
/// Cells are stored column-major (`x * height + y`) so storage order is the
/// scan order used by [`Grid::advance_generation`].
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cell_size: f32,
    cells: Vec<Cell>,
    policy: UpdatePolicy,
    generation: u64,
    wired: bool,
}

impl Grid {
    /// Creates an all-dead grid. Call [`Grid::connect_topology`] before stepping.
    pub fn new(width: usize, height: usize, cell_size: f32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(GridError::InvalidCellSize(cell_size));
        }

        let count = width
            .checked_mul(height)
            .filter(|&n| n <= isize::MAX as usize / std::mem::size_of::<Cell>())
            .ok_or(GridError::InvalidDimensions { width, height })?;

        let mut cells = Vec::with_capacity(count);
        for x in 0..width {
            for y in 0..height {
                cells.push(Cell::new(x, y));
            }
        }

        Ok(Self {
            width,
            height,
            cell_size,
            cells,
            policy: UpdatePolicy::default(),
            generation: 0,
            wired: false,
        })
    }

    pub fn with_policy(mut self, policy: UpdatePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }
    pub fn cell_size(&self) -> f32 { self.cell_size }
    pub fn policy(&self) -> UpdatePolicy { self.policy }
    pub fn generation(&self) -> u64 { self.generation }
    pub fn is_wired(&self) -> bool { self.wired }

    pub fn set_policy(&mut self, policy: UpdatePolicy) {
        self.policy = policy;
    }

    fn index(&self, x: usize, y: usize) -> usize {
        x * self.height + y
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if x < self.width && y < self.height {
            Ok(self.index(x, y))
        } else {
            Err(GridError::OutOfBounds { x, y, width: self.width, height: self.height })
        }
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.check_bounds(x, y).ok().map(|i| &self.cells[i])
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.cell(x, y).is_some_and(Cell::is_alive)
    }

    pub fn set_alive(&mut self, x: usize, y: usize, alive: bool) -> Result<(), GridError> {
        let index = self.check_bounds(x, y)?;
        self.cells[index].set_alive(alive);
        Ok(())
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Kills every cell and resets the generation counter. Topology is kept.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(Cell::kill);
        self.generation = 0;
    }

    /// In-bounds orthogonal and diagonal neighbors of `(x, y)`.
    ///
    /// Order is dx outer, dy inner, both from -1 to 1.
    pub fn neighbor_positions(&self, x: usize, y: usize) -> Vec<(usize, usize)> {
        let mut positions = Vec::with_capacity(8);
        for dx in -1isize..=1 {
            for dy in -1isize..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let (Some(nx), Some(ny)) = (x.checked_add_signed(dx), y.checked_add_signed(dy)) else {
                    continue;
                };
                if nx < self.width && ny < self.height {
                    positions.push((nx, ny));
                }
            }
        }
        positions
    }

    /// Installs every cell's neighbor list. No rule is applied.
    pub fn connect_topology(&mut self) {
        for index in 0..self.cells.len() {
            let (x, y) = self.cells[index].position();
            let neighbors = self
                .neighbor_positions(x, y)
                .into_iter()
                .map(|(nx, ny)| self.index(nx, ny))
                .collect();
            self.cells[index].set_neighbors(neighbors);
        }
        self.wired = true;
        debug!(width = self.width, height = self.height, "connected grid topology");
    }

    fn live_neighbors_at(&self, index: usize) -> usize {
        self.cells[index]
            .neighbors()
            .iter()
            .filter(|&&n| self.cells[n].is_alive())
            .count()
    }

    /// Live neighbor count of `(x, y)` as currently wired.
    pub fn live_neighbors(&self, x: usize, y: usize) -> Option<usize> {
        self.check_bounds(x, y).ok().map(|i| self.live_neighbors_at(i))
    }

    /// Advances every cell by one generation according to the grid's [`UpdatePolicy`].
    pub fn advance_generation(&mut self) {
        if !self.wired {
            self.connect_topology();
        }

        match self.policy {
            UpdatePolicy::InPlace => {
                for index in 0..self.cells.len() {
                    let live = self.live_neighbors_at(index);
                    self.cells[index].apply_rule(live);
                }
            }
            UpdatePolicy::DoubleBuffered => {
                let counts: Vec<usize> = (0..self.cells.len())
                    .map(|index| self.live_neighbors_at(index))
                    .collect();
                for (cell, live) in self.cells.iter_mut().zip(counts) {
                    cell.apply_rule(live);
                }
            }
        }

        self.generation += 1;
        trace!(generation = self.generation, "advanced generation");
    }

    /// Hands every cell to `renderer`. Read-only.
    pub fn render<R: CellRenderer + ?Sized>(&self, renderer: &mut R) {
        let size = self.cell_size;
        for cell in &self.cells {
            renderer.draw_cell(cell.x() as f32 * size, cell.y() as f32 * size, size, cell.is_alive());
        }
    }

    /// Maps a pixel position to tile coordinates, rounding half up.
    pub fn pixel_to_tile(&self, pixel_x: f32, pixel_y: f32) -> Option<(usize, usize)> {
        let x = round_to_index(pixel_x / self.cell_size)?;
        let y = round_to_index(pixel_y / self.cell_size)?;
        (x < self.width && y < self.height).then_some((x, y))
    }

    pub fn handle_click(&mut self, pixel_x: f32, pixel_y: f32) -> ClickOutcome {
        self.handle_click_at(pixel_x, pixel_y, Instant::now())
    }

    /// Forwards a click to the addressed cell. Positions off the grid are ignored.
    pub fn handle_click_at(&mut self, pixel_x: f32, pixel_y: f32, now: Instant) -> ClickOutcome {
        let Some((x, y)) = self.pixel_to_tile(pixel_x, pixel_y) else {
            return ClickOutcome::OutOfBounds;
        };

        let index = self.index(x, y);
        if self.cells[index].handle_click(now) {
            trace!(x, y, alive = self.cells[index].is_alive(), "toggled cell");
            ClickOutcome::Toggled { x, y }
        } else {
            ClickOutcome::Debounced { x, y }
        }
    }
}

// Round half up without `value + 0.5`, which carries just-below-half values over
fn round_to_index(value: f32) -> Option<usize> {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    if rounded.is_finite() && rounded >= 0.0 {
        Some(rounded as usize)
    } else {
        None
    }
}
