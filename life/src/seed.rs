// seed.rs - Deterministic random fill

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::{Bounds, Grid};

/// Clears `grid` and makes roughly a third of the cells in `bounds` alive.
/// The same `seed` always yields the same grid.
pub fn random_fill(grid: &mut Grid, bounds: Bounds, seed: u64) {
    grid.clear();

    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    let mut state = hasher.finish();

    let alive = bounds.cells().filter(|_| {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 33) % 3 == 0
    });
    grid.extend(alive);

    tracing::debug!(seed, live = grid.len(), "random fill");
}
