use rand::Rng;

use crate::maze::{Coord, Direction, Grid, GridCell};

/// The walkable cell carving starts from.
pub const START: Coord = (0, 0);

/// Connectors around walkable cell `loc` that could be broken to reach a new cell.
///
/// A connector qualifies when it and the walkable cell behind it are both in bounds
/// and both still walls.
fn breakable_walls(grid: &Grid, loc: Coord) -> impl Iterator<Item = Coord> + '_ {
    Direction::ALL.into_iter().filter_map(move |dir| {
        let wall = dir.step(loc);
        let floor = dir.step(wall);
        (grid.get(wall) == Some(GridCell::Wall) && grid.get(floor) == Some(GridCell::Wall))
            .then_some(wall)
    })
}

/// A wall can only be broken while exactly one side of it belongs to the maze.
fn is_wall_breakable(grid: &Grid, wall: Coord) -> bool {
    grid.floor_neighbors(wall).count() == 1
}

/// The carved cell next to a frontier wall. There should only be one.
fn find_floor_for_wall(grid: &Grid, wall: Coord) -> Coord {
    grid.floor_neighbors(wall).next().unwrap_or_else(|| {
        tracing::error!(
            "[prim] no floor next to frontier wall {:?}, falling back to {:?}",
            wall,
            START
        );
        START
    })
}

/// Carves a perfect maze into an all-wall grid using randomized Prim's algorithm.
///
/// Every walkable cell ends up reachable from [`START`] along exactly one path.
/// Returns the number of connectors broken.
pub fn randomized_prim<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> usize {
    if grid.is_empty() {
        return 0;
    }

    grid.set(START, GridCell::Floor);

    // Frontier entries are not deduplicated: a wall can be pushed once per
    // neighboring cell and is re-checked when popped.
    let mut frontier = breakable_walls(grid, START).collect::<Vec<_>>();
    let mut carved = 0;

    while !frontier.is_empty() {
        // Randomly select a wall from the frontier
        let idx = rng.random_range(0..frontier.len());
        let wall = frontier.swap_remove(idx);
        let existing = find_floor_for_wall(grid, wall);

        if !is_wall_breakable(grid, wall) {
            tracing::trace!("[prim] discarding stale frontier wall {:?}", wall);
            continue;
        }

        let Some(dir) = Direction::between(existing, wall) else {
            tracing::error!(
                "[prim] frontier wall {:?} is not adjacent to floor {:?}",
                wall,
                existing
            );
            continue;
        };
        let new_floor = dir.step(wall);
        if !grid.in_bounds(new_floor) {
            tracing::error!(
                "[prim] breaking wall {:?} would lead outside the grid",
                wall
            );
            continue;
        }

        // Break down the wall
        grid.set(wall, GridCell::Floor);
        grid.set(new_floor, GridCell::Floor);
        carved += 1;

        frontier.extend(breakable_walls(grid, new_floor));
    }

    carved
}
