//! Row-major grid container shared by splitting and tiling.

/// Zero-indexed (row, column) cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub row: u32,
    pub col: u32,
}

impl GridPos {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Position of the `index`-th cell in a grid `cols` wide.
    pub fn from_index(index: usize, cols: u32) -> Self {
        let cols = cols as usize;
        Self {
            row: (index / cols) as u32,
            col: (index % cols) as u32,
        }
    }
}

/// A `rows x cols` grid of cells stored in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    rows: u32,
    cols: u32,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid from row-major cells.
    ///
    /// # Panics
    /// Panics if `cells.len() != rows * cols`.
    pub fn from_cells(rows: u32, cols: u32, cells: Vec<T>) -> Self {
        assert_eq!(
            cells.len(),
            rows as usize * cols as usize,
            "Grid of {rows}x{cols} needs {} cells, got {}",
            rows as usize * cols as usize,
            cells.len()
        );
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: u32, col: u32) -> Option<&T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row as usize * self.cols as usize + col as usize)
    }

    /// Iterate cells with their positions in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (GridPos, &T)> {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (GridPos::from_index(i, cols), cell))
    }

    /// Consume the grid, yielding owned cells with their positions.
    pub fn into_cells(self) -> impl Iterator<Item = (GridPos, T)> {
        let cols = self.cols;
        self.cells
            .into_iter()
            .enumerate()
            .map(move |(i, cell)| (GridPos::from_index(i, cols), cell))
    }
}
