use super::Direction;
use super::cell::GridCell;

/// A coordinate in the expanded grid, `(x, y)`.
pub type Coord = (u32, u32);

/// The expanded wall/floor grid.
///
/// Walkable cells live at even-even coordinates, connectors between two
/// adjacent walkable cells at coordinates with exactly one odd component, and
/// corners (both odd) carry no meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[GridCell]>,
    width: u32,
    height: u32,
}

impl Grid {
    /// Creates a grid of the given size with every cell set to [`GridCell::Wall`].
    pub fn new(width: u32, height: u32) -> Self {
        let data = vec![GridCell::Wall; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    /// Creates the grid backing a maze of `walkable_width x walkable_height` cells.
    ///
    /// n walkable cells in each dimension -> n - 1 connectors -> 2n - 1 total.
    /// Zero-sized dimensions yield an empty grid.
    pub fn for_walkable(walkable_width: u16, walkable_height: u16) -> Self {
        let expand = |n: u16| (n as u32 * 2).saturating_sub(1);
        Grid::new(expand(walkable_width), expand(walkable_height))
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Checks if the given coordinate lies inside the grid.
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    /// The four orthogonal neighbors of `coord`, in [`Direction::ALL`] order.
    ///
    /// Nothing is filtered: callers check [`Grid::in_bounds`] themselves.
    pub fn neighbors(&self, coord: Coord) -> [Coord; 4] {
        Direction::ALL.map(|dir| dir.step(coord))
    }

    /// In-bounds neighbors of `coord` that are currently [`GridCell::Floor`].
    pub fn floor_neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        self.neighbors(coord)
            .into_iter()
            .filter(move |&c| self.in_bounds(c) && self[c].is_floor())
    }

    /// Returns the cell at `coord`, or `None` when out of bounds.
    pub fn get(&self, coord: Coord) -> Option<GridCell> {
        self.in_bounds(coord)
            .then(|| self.data[self.ravel_index(coord.0, coord.1)])
    }

    /// Overwrites the cell at `coord`.
    ///
    /// # Panics
    /// If `coord` is out of bounds.
    pub fn set(&mut self, coord: Coord, cell: GridCell) {
        let idx = self.ravel_index(coord.0, coord.1);
        self.data[idx] = cell;
    }

    /// Number of cells currently in the given state.
    pub fn count(&self, cell: GridCell) -> usize {
        self.data.iter().filter(|&&c| c == cell).count()
    }

    /// Raw cell storage, laid out column-major (`x * height + y`).
    pub fn cells(&self) -> &[GridCell] {
        &self.data
    }

    fn ravel_index(&self, x: u32, y: u32) -> usize {
        assert!(
            self.in_bounds((x, y)),
            "coordinate ({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        x as usize * self.height as usize + y as usize
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = GridCell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_all_walls() {
        let grid = Grid::new(5, 3);
        assert_eq!(grid.count(GridCell::Wall), 15);
        assert_eq!(grid.count(GridCell::Floor), 0);
    }

    #[test]
    fn test_for_walkable_expands_dimensions() {
        let grid = Grid::for_walkable(4, 2);
        assert_eq!((grid.width(), grid.height()), (7, 3));

        let single = Grid::for_walkable(1, 1);
        assert_eq!((single.width(), single.height()), (1, 1));

        assert!(Grid::for_walkable(0, 3).is_empty());
    }

    #[test]
    fn test_grid_indexing() {
        let mut grid = Grid::new(5, 5);
        grid.set((2, 3), GridCell::Floor);
        assert_eq!(grid[(2, 3)], GridCell::Floor);
        assert_eq!(grid[(3, 2)], GridCell::Wall);
        // Column-major layout
        assert_eq!(grid.cells()[2 * 5 + 3], GridCell::Floor);
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = Grid::new(5, 5);
        assert!(!grid.in_bounds((5, 5)));
        assert!(!grid.in_bounds((0, 5)));
        assert!(!grid.in_bounds((5, 0)));
        assert!(!grid.in_bounds((u32::MAX, 0)));
        assert!(grid.in_bounds((4, 4)));
        assert_eq!(grid.get((5, 0)), None);
        assert_eq!(grid.get((4, 0)), Some(GridCell::Wall));
    }

    #[test]
    fn test_neighbors_are_unfiltered() {
        let grid = Grid::new(3, 3);
        assert_eq!(
            grid.neighbors((1, 1)),
            [(0, 1), (2, 1), (1, 0), (1, 2)]
        );

        let corner = grid.neighbors((0, 0));
        let in_bounds = corner.iter().filter(|&&c| grid.in_bounds(c)).count();
        assert_eq!(in_bounds, 2);
    }

    #[test]
    fn test_floor_neighbors() {
        let mut grid = Grid::new(3, 3);
        grid.set((0, 1), GridCell::Floor);
        grid.set((1, 2), GridCell::Floor);
        grid.set((2, 2), GridCell::Floor);
        let floors = grid.floor_neighbors((1, 1)).collect::<Vec<_>>();
        assert_eq!(floors, vec![(0, 1), (1, 2)]);
        assert_eq!(grid.floor_neighbors((0, 0)).count(), 1);
    }
}
