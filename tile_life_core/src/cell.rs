// cell.rs - A single tile of the grid

use std::time::{Duration, Instant};

use crate::rule;

/// Minimum time between two successful click toggles of the same cell.
pub const DEBOUNCE: Duration = Duration::from_millis(1000);

/// One grid position.
///
/// Neighbors are stored as indices into the owning [`Grid`](crate::Grid)'s
/// cell storage, so a cell never owns or borrows its siblings.
#[derive(Debug, Clone)]
pub struct Cell {
    x: usize,
    y: usize,
    alive: bool,
    neighbors: Vec<usize>,
    last_toggle: Option<Instant>,
}

impl Cell {
    pub fn new(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            alive: false,
            neighbors: Vec::new(),
            last_toggle: None,
        }
    }

    pub fn x(&self) -> usize { self.x }
    pub fn y(&self) -> usize { self.y }
    pub fn position(&self) -> (usize, usize) { (self.x, self.y) }
    pub fn is_alive(&self) -> bool { self.alive }

    /// Storage indices of the in-bounds neighbors, in wiring order.
    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }

    /// Installs the neighbor list. Pure assignment: `alive` is untouched.
    pub fn set_neighbors(&mut self, neighbors: Vec<usize>) {
        debug_assert!(neighbors.len() <= 8, "a tile has at most 8 neighbors");
        self.neighbors = neighbors;
    }

    /// Applies the Life rule for the given number of live neighbors.
    pub fn apply_rule(&mut self, live_neighbors: usize) {
        self.alive = rule::next_state(self.alive, live_neighbors);
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }

    pub fn revive(&mut self) {
        self.alive = true;
    }

    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    /// Toggles the cell unless it was toggled less than [`DEBOUNCE`] before `now`.
    ///
    /// Returns `true` when the state flipped.
    pub fn handle_click(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_toggle {
            if now.saturating_duration_since(last) < DEBOUNCE {
                return false;
            }
        }

        if self.alive { self.kill() } else { self.revive() }
        self.last_toggle = Some(now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_dead_and_unwired() {
        let cell = Cell::new(4, 7);
        assert_eq!(cell.position(), (4, 7));
        assert!(!cell.is_alive());
        assert!(cell.neighbors().is_empty());
    }

    #[test]
    fn set_neighbors_does_not_touch_state() {
        let mut cell = Cell::new(0, 0);
        cell.revive();
        cell.set_neighbors(vec![1, 2, 3]);
        assert!(cell.is_alive());
        assert_eq!(cell.neighbors(), &[1, 2, 3]);
    }

    #[test]
    fn first_click_always_toggles() {
        let mut cell = Cell::new(0, 0);
        assert!(cell.handle_click(Instant::now()));
        assert!(cell.is_alive());
    }

    #[test]
    fn click_within_debounce_is_ignored() {
        let t0 = Instant::now();
        let mut cell = Cell::new(0, 0);
        assert!(cell.handle_click(t0));
        assert!(!cell.handle_click(t0 + Duration::from_millis(999)));
        assert!(cell.is_alive());
    }

    #[test]
    fn click_after_debounce_toggles_again() {
        let t0 = Instant::now();
        let mut cell = Cell::new(0, 0);
        assert!(cell.handle_click(t0));
        assert!(cell.handle_click(t0 + DEBOUNCE));
        assert!(!cell.is_alive());
    }

    #[test]
    fn ignored_click_does_not_reset_timer() {
        let t0 = Instant::now();
        let mut cell = Cell::new(0, 0);
        cell.handle_click(t0);
        cell.handle_click(t0 + Duration::from_millis(600));
        assert!(cell.handle_click(t0 + Duration::from_millis(1000)));
    }

    #[test]
    fn rule_overrides_clicked_state() {
        let mut cell = Cell::new(0, 0);
        cell.handle_click(Instant::now());
        cell.apply_rule(1);
        assert!(!cell.is_alive());
        cell.apply_rule(3);
        assert!(cell.is_alive());
    }
}
