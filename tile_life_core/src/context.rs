// context.rs - Driver state shared between input handlers and the tick loop

use std::time::{Duration, Instant};

use tracing::info;

use crate::grid::{ClickOutcome, Grid};
use crate::render::CellRenderer;

pub const MIN_RATE: u32 = 1;
pub const MAX_RATE: u32 = 60;

/// Everything the frame driver needs: the grid, the run toggle and the step rate.
///
/// Built once at startup. Input handlers mutate it, [`SimulationContext::tick`]
/// reads it.
#[derive(Debug, Clone)]
pub struct SimulationContext {
    grid: Grid,
    running: bool,
    run_held: bool,
    rate: u32,
    min_rate: u32,
    max_rate: u32,
    last_step: Option<Instant>,
}

impl SimulationContext {
    /// Wraps `grid`, wiring its topology if that hasn't happened yet.
    pub fn new(mut grid: Grid) -> Self {
        if !grid.is_wired() {
            grid.connect_topology();
        }
        Self {
            grid,
            running: false,
            run_held: false,
            rate: MAX_RATE,
            min_rate: MIN_RATE,
            max_rate: MAX_RATE,
            last_step: None,
        }
    }

    /// Sets the allowed rate range. Bounds are reordered if given backwards
    /// and the lower bound is at least 1.
    pub fn with_rate_range(mut self, min: u32, max: u32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.min_rate = min.max(1);
        self.max_rate = max.max(self.min_rate);
        self.rate = self.rate.clamp(self.min_rate, self.max_rate);
        self
    }

    pub fn grid(&self) -> &Grid { &self.grid }
    pub fn grid_mut(&mut self) -> &mut Grid { &mut self.grid }

    pub fn rate(&self) -> u32 { self.rate }
    pub fn rate_range(&self) -> (u32, u32) { (self.min_rate, self.max_rate) }

    /// Generations per second, clamped to the configured range.
    pub fn set_rate(&mut self, rate: u32) {
        self.rate = rate.clamp(self.min_rate, self.max_rate);
    }

    pub fn step_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.rate))
    }

    /// Run toggle (checkbox).
    pub fn set_running(&mut self, running: bool) {
        if running != self.running {
            info!(running, generation = self.grid.generation(), "simulation run state changed");
        }
        if running && !self.running {
            self.last_step = None;
        }
        self.running = running;
    }

    pub fn toggle_running(&mut self) {
        self.set_running(!self.running);
    }

    /// Momentary run (key held down).
    pub fn set_run_held(&mut self, held: bool) {
        self.run_held = held;
    }

    /// Whether the checkbox is on.
    pub fn running_flag(&self) -> bool { self.running }

    /// Whether the step pass is enabled this tick.
    pub fn is_running(&self) -> bool {
        self.running || self.run_held
    }

    pub fn handle_pointer(&mut self, pixel_x: f32, pixel_y: f32, now: Instant) -> ClickOutcome {
        self.grid.handle_click_at(pixel_x, pixel_y, now)
    }

    /// One frame: render the settled generation, then step if enabled and due.
    ///
    /// Returns `true` when a generation was advanced.
    pub fn tick<R: CellRenderer + ?Sized>(&mut self, now: Instant, renderer: &mut R) -> bool {
        self.grid.render(renderer);

        if !self.is_running() {
            return false;
        }
        let interval = self.step_interval();
        // Frames landing slightly early still count, otherwise a rate equal
        // to the repaint rate would step only every other frame
        let tolerance = interval / 4;
        if let Some(last) = self.last_step {
            if now.saturating_duration_since(last) + tolerance < interval {
                return false;
            }
        }

        self.grid.advance_generation();
        // Schedule on whole intervals; restart from `now` once more than one behind
        self.last_step = Some(match self.last_step {
            Some(last) if now.saturating_duration_since(last) < interval * 2 => last + interval,
            _ => now,
        });
        true
    }
}
