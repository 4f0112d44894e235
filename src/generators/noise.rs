use rand::Rng;

use crate::maze::{Direction, Grid, GridCell};

/// Number of noise attempts for a maze: a uniformly random share, up to
/// `max_ratio`, of the walkable cell count.
pub fn noise_amount<R: Rng + ?Sized>(rng: &mut R, max_ratio: f64, walkable_cells: usize) -> f64 {
    rng.random::<f64>() * max_ratio * walkable_cells as f64
}

/// Randomly rewrites connectors next to walkable cells, adding loops and
/// cutting off parts of the maze.
///
/// `amount` is truncated toward zero. Each attempt picks a walkable cell and a
/// direction; an in-bounds connector is then set to floor or wall with equal odds,
/// regardless of its previous state.
///
/// Returns the number of attempts that landed inside the grid.
pub fn add_noise<R: Rng + ?Sized>(
    grid: &mut Grid,
    walkable_width: u16,
    walkable_height: u16,
    amount: f64,
    rng: &mut R,
) -> usize {
    if walkable_width == 0 || walkable_height == 0 {
        return 0;
    }

    // `as` saturates, and maps NaN and negatives to zero
    let attempts = amount as usize;
    let mut applied = 0;

    for _ in 0..attempts {
        let cell = (
            rng.random_range(0..walkable_width) as u32 * 2,
            rng.random_range(0..walkable_height) as u32 * 2,
        );
        let dir = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        let wall = dir.step(cell);

        if grid.in_bounds(wall) {
            let state = if rng.random_bool(0.5) {
                GridCell::Wall
            } else {
                GridCell::Floor
            };
            grid.set(wall, state);
            applied += 1;
        }
    }

    applied
}
