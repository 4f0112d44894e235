pub mod cell;
pub mod grid;

pub use cell::GridCell;
pub use grid::{Coord, Grid};

/// A cardinal direction in the grid.
///
/// `Left`/`Right` move along `x`, the outer axis of the encoded output.
/// `Up`/`Down` move along `y`, the inner axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in the order neighbors are reported and searched.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit offset `(dx, dy)` of this direction.
    pub fn offset(self) -> (i8, i8) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Moves one step from `coord`.
    pub fn step(self, coord: Coord) -> Coord {
        let (x, y) = coord;
        // NOTE: Stepping below zero wraps to u32::MAX (and stepping past u32::MAX saturates),
        // which no grid can contain, so the result is filtered out by any bounds check.
        match self {
            Direction::Left => (x.wrapping_sub(1), y),
            Direction::Right => (x.saturating_add(1), y),
            Direction::Up => (x, y.wrapping_sub(1)),
            Direction::Down => (x, y.saturating_add(1)),
        }
    }

    /// The direction leading from `from` to the orthogonally adjacent `to`.
    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        Direction::ALL.into_iter().find(|dir| dir.step(from) == to)
    }
}
