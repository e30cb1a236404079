// patterns.rs - Seed patterns for the tile grid

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::grid::Grid;

#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    /// Live cells as `(x, y)` offsets from the pattern's top-left corner.
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Bounding box as `(width, height)`.
    pub fn extent(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(w, h), &(x, y)| (w.max(x + 1), h.max(y + 1)))
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
            (0, 2), (5, 2), (7, 2), (12, 2),
            (0, 3), (5, 3), (7, 3), (12, 3),
            (0, 4), (5, 4), (7, 4), (12, 4),
            (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
            // Bottom half (mirrored)
            (2, 7), (3, 7), (4, 7), (8, 7), (9, 7), (10, 7),
            (0, 8), (5, 8), (7, 8), (12, 8),
            (0, 9), (5, 9), (7, 9), (12, 9),
            (0, 10), (5, 10), (7, 10), (12, 10),
            (2, 12), (3, 12), (4, 12), (8, 12), (9, 12), (10, 12),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (0, 4), (1, 4), (0, 5), (1, 5),
            (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8),
            (13, 2), (13, 8), (14, 5), (15, 3), (15, 7), (16, 4), (16, 5),
            (16, 6), (17, 5), (20, 2), (20, 3), (20, 4), (21, 2), (21, 3),
            (21, 4), (22, 1), (22, 5), (24, 0), (24, 1), (24, 5), (24, 6),
            (34, 2), (35, 2), (34, 3), (35, 3),
        ],
    },
];

/// Looks up a pattern by name, ignoring ASCII case.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Clears the grid and stamps `pattern` centered on it.
///
/// Cells that fall outside a grid smaller than the pattern are dropped.
/// Returns how many cells were set alive.
pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern) -> usize {
    grid.clear();

    let (pw, ph) = pattern.extent();
    let ox = grid.width().saturating_sub(pw) / 2;
    let oy = grid.height().saturating_sub(ph) / 2;

    let placed = pattern
        .cells
        .iter()
        .filter(|&&(x, y)| grid.set_alive(ox + x, oy + y, true).is_ok())
        .count();

    debug!(pattern = pattern.name, placed, "applied pattern");
    placed
}

/// Clears the grid and fills it randomly, each cell alive with probability `density`.
pub fn apply_random_pattern(grid: &mut Grid, seed: u64, density: f64) -> usize {
    grid.clear();

    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    let mut rng = StdRng::seed_from_u64(seed);
    let mut placed = 0;
    for x in 0..grid.width() {
        for y in 0..grid.height() {
            if rng.random_bool(density) {
                // Coordinates come from the grid's own bounds
                let _ = grid.set_alive(x, y, true);
                placed += 1;
            }
        }
    }

    debug!(seed, density, placed, "applied random pattern");
    placed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extents() {
        assert_eq!(find("blinker").unwrap().extent(), (3, 1));
        assert_eq!(find("Pulsar").unwrap().extent(), (13, 13));
        assert_eq!(find("Gosper Glider Gun").unwrap().extent(), (36, 9));
    }

    #[test]
    fn find_ignores_case() {
        let glider = find("GLIDER").unwrap();
        assert_eq!(glider.name, "Glider");
        assert!(format!("{glider:?}").contains("Glider"));
        assert!(find("spaceship").is_none());
    }

    #[test]
    fn pattern_is_centered() {
        let mut grid = Grid::new(5, 5, 1.0).unwrap();
        let placed = apply_pattern(&mut grid, find("Blinker").unwrap());
        assert_eq!(placed, 3);
        assert!(grid.is_alive(1, 2) && grid.is_alive(2, 2) && grid.is_alive(3, 2));
        assert_eq!(grid.live_count(), 3);
    }

    #[test]
    fn oversized_pattern_is_clipped() {
        let mut grid = Grid::new(10, 10, 1.0).unwrap();
        let gun = find("Gosper Glider Gun").unwrap();
        let placed = apply_pattern(&mut grid, gun);
        assert!(placed < gun.cells.len());
        assert_eq!(grid.live_count(), placed);
    }

    #[test]
    fn random_fill_is_reproducible() {
        let mut a = Grid::new(20, 20, 1.0).unwrap();
        let mut b = Grid::new(20, 20, 1.0).unwrap();
        let placed = apply_random_pattern(&mut a, 42, 0.3);
        apply_random_pattern(&mut b, 42, 0.3);
        assert_eq!(placed, a.live_count());
        let alive_a: Vec<_> = a.cells().map(|c| c.is_alive()).collect();
        let alive_b: Vec<_> = b.cells().map(|c| c.is_alive()).collect();
        assert_eq!(alive_a, alive_b);
    }

    #[test]
    fn random_fill_density_bounds() {
        let mut grid = Grid::new(8, 8, 1.0).unwrap();
        assert_eq!(apply_random_pattern(&mut grid, 1, 0.0), 0);
        assert_eq!(apply_random_pattern(&mut grid, 1, 1.0), 64);
    }
}
