use hashbrown::HashMap;
use smallvec::SmallVec;

use super::cell::Cell;
use crate::{array::Array2D, dims::Dims};

/// A cell has at most four neighbors, so the adjacency lists stay inline.
pub type Neighbors = SmallVec<[Dims; 4]>;

/// The square game board: per-cell wall state plus the passage graph.
///
/// The adjacency relation is symmetric and duplicate-free. It is kept
/// separately from the cells because generation commits edges before the
/// cells at either end are opened.
#[derive(Debug, Clone)]
pub struct Board {
    cells: Array2D<Cell>,
    adjacency: HashMap<Dims, Neighbors>,
}

impl Board {
    pub fn new(size: i32) -> Self {
        assert!(size >= 1, "board size must be positive");
        Board {
            cells: Array2D::new(Cell::new(), size as usize, size as usize),
            adjacency: HashMap::new(),
        }
    }

    pub fn size(&self) -> i32 {
        self.cells.size().0
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        0 <= pos.0 && pos.0 < self.size() && 0 <= pos.1 && pos.1 < self.size()
    }

    pub fn get_cell(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }

    /// `false` for out-of-bounds positions.
    pub fn is_open(&self, pos: Dims) -> bool {
        self.cells.get(pos).is_some_and(|cell| cell.is_open())
    }

    pub fn open(&mut self, pos: Dims) {
        self.cells[pos].open();
    }

    /// Registers `b` as a neighbor of `a` and vice versa. Connecting an
    /// already connected pair is a no-op.
    pub fn connect(&mut self, a: Dims, b: Dims) {
        debug_assert!(self.is_in_bounds(a) && self.is_in_bounds(b));

        let forward = self.adjacency.entry(a).or_default();
        if !forward.contains(&b) {
            forward.push(b);
        }
        let backward = self.adjacency.entry(b).or_default();
        if !backward.contains(&a) {
            backward.push(a);
        }
    }

    pub fn is_connected(&self, a: Dims, b: Dims) -> bool {
        self.adjacency.get(&a).is_some_and(|n| n.contains(&b))
    }

    pub fn neighbors(&self, pos: Dims) -> &[Dims] {
        self.adjacency.get(&pos).map_or(&[], |n| n.as_slice())
    }

    /// Whether any edge has been recorded for `pos`. The generator uses this
    /// to recognize cells that were already discovered.
    pub fn has_edges(&self, pos: Dims) -> bool {
        self.adjacency.get(&pos).is_some_and(|n| !n.is_empty())
    }

    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_open()).count()
    }

    /// Number of undirected edges in the passage graph.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|n| n.len()).sum::<usize>() / 2
    }
}
