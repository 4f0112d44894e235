use crate::maze::{Coord, Direction, Grid, GridCell};

/// Which neighbors of a walkable cell can be reached directly.
///
/// `left`/`right` point to decreasing/increasing `x`, `up`/`down` to
/// decreasing/increasing `y`.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellConnectivity {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl CellConnectivity {
    pub fn is_open(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Number of open directions.
    pub fn open_count(&self) -> usize {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.is_open(dir))
            .count()
    }
}

fn is_passage(grid: &Grid, cell: Coord, dir: Direction) -> bool {
    grid.get(dir.step(cell)) == Some(GridCell::Floor)
}

/// Reads the connectivity of every walkable cell off the grid.
///
/// The output is ordered with `x` outer and `y` inner, so cell `(x, y)` sits at
/// index `x * walkable_height + y`. Only the current grid state is consulted.
pub fn encode_directions(
    grid: &Grid,
    walkable_width: u16,
    walkable_height: u16,
) -> Vec<CellConnectivity> {
    (0..walkable_width as u32)
        .flat_map(|x| (0..walkable_height as u32).map(move |y| (x * 2, y * 2)))
        .map(|cell| CellConnectivity {
            up: is_passage(grid, cell, Direction::Up),
            down: is_passage(grid, cell, Direction::Down),
            left: is_passage(grid, cell, Direction::Left),
            right: is_passage(grid, cell, Direction::Right),
        })
        .collect()
}
