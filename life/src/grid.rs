// grid.rs - Sparse grid types for Conway's Game of Life

use std::collections::HashSet;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

// Moore neighbourhood, row by row from the top-left.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// A coordinate on the unbounded plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The 8 surrounding coordinates. Wraps at the `i32` edges.
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        NEIGHBOR_OFFSETS
            .iter()
            .map(move |&(dx, dy)| Cell::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy)))
    }

    pub fn offset(self, by: Cell) -> Cell {
        Cell::new(self.x.wrapping_add(by.x), self.y.wrapping_add(by.y))
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Cell::new(x, y)
    }
}

/// Inclusive rectangle of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min: Cell,
    pub max: Cell,
}

impl Bounds {
    /// Rectangle of `width` x `height` cells with `origin` at the top-left.
    pub fn with_size(origin: Cell, width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        let span = |n: u32| i32::try_from(n - 1).unwrap_or(i32::MAX);
        let max = Cell::new(
            origin.x.saturating_add(span(width)),
            origin.y.saturating_add(span(height)),
        );
        Some(Self { min: origin, max })
    }

    pub fn width(&self) -> u64 {
        (self.max.x as i64 - self.min.x as i64 + 1) as u64
    }

    pub fn height(&self) -> u64 {
        (self.max.y as i64 - self.min.y as i64 + 1) as u64
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (self.min.x..=self.max.x).contains(&cell.x) && (self.min.y..=self.max.y).contains(&cell.y)
    }

    /// Row-major walk over every cell in the rectangle.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (self.min.y..=self.max.y)
            .flat_map(move |y| (self.min.x..=self.max.x).map(move |x| Cell::new(x, y)))
    }
}

/// Live-cell set of an unbounded Life plane.
///
/// Only live cells are stored, so memory follows population, not area.
#[derive(Clone, Debug, Default)]
pub struct Grid {
    alive: HashSet<Cell>,
    generation: u64,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells<I>(cells: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Cell>,
    {
        Self {
            alive: cells.into_iter().map(Into::into).collect(),
            generation: 0,
        }
    }

    pub fn set_alive(&mut self, x: i32, y: i32) {
        self.alive.insert(Cell::new(x, y));
    }

    pub fn set_dead(&mut self, x: i32, y: i32) {
        self.alive.remove(&Cell::new(x, y));
    }

    /// Flips a cell and returns its new state.
    pub fn toggle(&mut self, x: i32, y: i32) -> bool {
        let cell = Cell::new(x, y);
        if self.alive.remove(&cell) {
            false
        } else {
            self.alive.insert(cell);
            true
        }
    }

    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        self.alive.contains(&Cell::new(x, y))
    }

    /// Kills every cell and resets the generation counter.
    pub fn clear(&mut self) {
        self.alive.clear();
        self.generation = 0;
    }

    pub fn len(&self) -> usize {
        self.alive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alive.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn reset_generation(&mut self) {
        self.generation = 0;
    }

    /// Live cells in no particular order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.alive.iter().copied()
    }

    pub fn live_set(&self) -> &HashSet<Cell> {
        &self.alive
    }

    pub fn live_neighbors(&self, cell: Cell) -> usize {
        cell.neighbors().filter(|n| self.alive.contains(n)).count()
    }

    /// Replaces the live set with the next generation.
    ///
    /// Survivors and newborns are both counted against the current set;
    /// nothing is written until both are known.
    pub fn advance_generation(&mut self) {
        let next: HashSet<Cell> = {
            let survivors = self
                .cells()
                .filter(|&c| (2..4).contains(&self.live_neighbors(c)));
            let newborns = self
                .cells()
                .flat_map(Cell::neighbors)
                .filter(|c| !self.alive.contains(c))
                .filter(|&c| self.live_neighbors(c) == 3);
            survivors.chain(newborns).collect()
        };

        self.alive = next;
        self.generation += 1;
        tracing::trace!(generation = self.generation, live = self.alive.len(), "advanced");
    }

    /// Smallest rectangle holding every live cell.
    pub fn bounding_box(&self) -> Option<Bounds> {
        let mut cells = self.cells();
        let first = cells.next()?;
        let (min, max) = cells.fold((first, first), |(min, max), c| {
            (
                Cell::new(min.x.min(c.x), min.y.min(c.y)),
                Cell::new(max.x.max(c.x), max.y.max(c.y)),
            )
        });
        Some(Bounds { min, max })
    }

    /// Hash of the live set that does not depend on iteration order.
    pub fn fingerprint(&self) -> u64 {
        let mut sorted: Vec<Cell> = self.cells().collect();
        sorted.sort_unstable();

        let mut hasher = DefaultHasher::new();
        sorted.hash(&mut hasher);
        hasher.finish()
    }
}

impl FromIterator<Cell> for Grid {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Grid::from_cells(iter)
    }
}

impl Extend<Cell> for Grid {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.alive.extend(iter);
    }
}

impl fmt::Display for Grid {
    /// `#` for live, `.` for dead, over the bounding box, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(bounds) = self.bounding_box() else {
            return Ok(());
        };
        for y in bounds.min.y..=bounds.max.y {
            for x in bounds.min.x..=bounds.max.x {
                let ch = if self.is_alive(x, y) { '#' } else { '.' };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isolated_cell_dies() {
        let mut grid = Grid::new();
        grid.set_alive(0, 0);
        grid.advance_generation();
        assert!(!grid.is_alive(0, 0));
        assert!(grid.is_empty());
    }

    #[test]
    fn pair_on_diagonal_dies() {
        let mut grid = Grid::new();
        grid.set_alive(0, 0);
        grid.set_alive(1, 1);
        grid.advance_generation();
        assert!(!grid.is_alive(0, 0));
        assert!(!grid.is_alive(1, 1));
    }

    #[test]
    fn crowded_cell_dies() {
        let mut grid = Grid::from_cells([(0, 0), (1, 1), (0, 1), (1, 0), (-1, -1)]);
        assert_eq!(grid.live_neighbors(Cell::new(0, 0)), 4);
        grid.advance_generation();
        assert!(!grid.is_alive(0, 0));
    }

    #[test]
    fn three_neighbors_give_birth() {
        let mut grid = Grid::from_cells([(0, 0), (1, 1), (0, 1)]);
        assert!(!grid.is_alive(1, 0));
        grid.advance_generation();
        assert!(grid.is_alive(1, 0));
    }

    #[test]
    fn set_alive_is_idempotent() {
        let mut once = Grid::new();
        once.set_alive(3, -7);

        let mut twice = Grid::new();
        twice.set_alive(3, -7);
        twice.set_alive(3, -7);

        assert_eq!(once.live_set(), twice.live_set());
        assert_eq!(twice.len(), 1);
    }

    #[test]
    fn neighbors_are_the_moore_ring() {
        let ring: HashSet<Cell> = Cell::new(0, 0).neighbors().collect();
        assert_eq!(ring.len(), 8);
        assert!(!ring.contains(&Cell::new(0, 0)));
        assert!(ring.contains(&Cell::new(-1, -1)));
        assert!(ring.contains(&Cell::new(1, 1)));
        assert!(!ring.contains(&Cell::new(2, 0)));
    }

    #[test]
    fn toggle_flips_and_reports() {
        let mut grid = Grid::new();
        assert!(grid.toggle(5, 5));
        assert!(grid.is_alive(5, 5));
        assert!(!grid.toggle(5, 5));
        assert!(grid.is_empty());
    }

    #[test]
    fn clear_resets_generation() {
        let mut grid = Grid::from_cells([(0, 0), (1, 0), (2, 0)]);
        grid.advance_generation();
        assert_eq!(grid.generation(), 1);
        grid.clear();
        assert_eq!(grid.generation(), 0);
        assert!(grid.is_empty());
    }

    #[test]
    fn bounding_box_spans_negative_coords() {
        let grid = Grid::from_cells([(-3, 2), (4, -1), (0, 0)]);
        let bounds = grid.bounding_box().expect("non-empty");
        assert_eq!(bounds.min, Cell::new(-3, -1));
        assert_eq!(bounds.max, Cell::new(4, 2));
        assert_eq!(bounds.width(), 8);
        assert_eq!(bounds.height(), 4);
        assert!(Grid::new().bounding_box().is_none());
    }

    #[test]
    fn fingerprint_ignores_insertion_order() {
        let a = Grid::from_cells([(0, 0), (1, 2), (-4, 3)]);
        let b = Grid::from_cells([(-4, 3), (0, 0), (1, 2)]);
        let c = Grid::from_cells([(0, 0), (1, 2)]);
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
    }

    #[test]
    fn display_renders_bounding_box() {
        let grid = Grid::from_cells([(0, 0), (2, 1)]);
        assert_eq!(grid.to_string(), "#..\n..#\n");
        assert_eq!(Grid::new().to_string(), "");
    }

    #[test]
    fn bounds_walk_is_row_major() {
        let bounds = Bounds::with_size(Cell::new(-1, 0), 2, 2).expect("non-zero");
        let cells: Vec<Cell> = bounds.cells().collect();
        assert_eq!(
            cells,
            vec![Cell::new(-1, 0), Cell::new(0, 0), Cell::new(-1, 1), Cell::new(0, 1)]
        );
        assert!(Bounds::with_size(Cell::new(0, 0), 0, 3).is_none());
    }
}
