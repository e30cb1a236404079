// rule.rs - Standard Life transition (B3/S23)

/// Next state of a cell given its current state and live-neighbor count.
///
/// Checks run in a fixed order: underpopulation, overcrowding, then birth.
/// Exactly three live neighbors always yields a live cell, and exactly two
/// keeps whatever state the cell already had.
pub fn next_state(alive: bool, live_neighbors: usize) -> bool {
    match live_neighbors {
        0 | 1 => false,  // Underpopulation
        3     => true,   // Birth or survival
        2     => alive,  // Survival, dead stays dead
        _     => false,  // Overcrowding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_neighbors_always_alive() {
        assert!(next_state(false, 3));
        assert!(next_state(true, 3));
    }

    #[test]
    fn two_neighbors_keep_state() {
        assert!(next_state(true, 2));
        assert!(!next_state(false, 2));
    }

    #[test]
    fn lonely_and_crowded_cells_die() {
        for alive in [false, true] {
            assert!(!next_state(alive, 0));
            assert!(!next_state(alive, 1));
            for count in 4..=8 {
                assert!(!next_state(alive, count), "count {count}");
            }
        }
    }
}
