//! Fixed-size 2D grid of cells.

use crate::cell::Cell;
use crate::material::Material;

/// Row-major storage. Coordinates are signed so neighbor offsets can be
/// computed without underflow; every accessor range-checks first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Bottom row is Earth, the rest Empty.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        let mut cells = vec![Cell::empty(); width * height];
        if height > 0 {
            let floor = (height - 1) * width;
            cells[floor..].fill(Cell::new(Material::Earth));
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Grid covering a `pixel_width × pixel_height` surface with square cells.
    /// A zero cell size yields an empty grid.
    #[must_use]
    pub fn from_pixels(pixel_width: u32, pixel_height: u32, cell_size: u32) -> Self {
        match cell_size {
            0 => Self::new(0, 0),
            size => Self::new((pixel_width / size) as usize, (pixel_height / size) as usize),
        }
    }

    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn in_range(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    fn index(&self, x: i32, y: i32) -> usize {
        assert!(
            self.in_range(x, y),
            "cell ({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        y as usize * self.width + x as usize
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` is out of range. Callers check `in_range` first.
    #[must_use]
    pub fn at(&self, x: i32, y: i32) -> Cell {
        self.cells[self.index(x, y)]
    }

    /// # Panics
    ///
    /// Panics if `(x, y)` is out of range. Callers check `in_range` first.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        let i = self.index(x, y);
        self.cells[i] = cell;
    }

    /// Exchange the contents of two in-range cells.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is out of range.
    pub fn swap(&mut self, a: (i32, i32), b: (i32, i32)) {
        let ia = self.index(a.0, a.1);
        let ib = self.index(b.0, b.1);
        self.cells.swap(ia, ib);
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn clear_updated(&mut self) {
        for cell in &mut self.cells {
            cell.updated = false;
        }
    }

    /// Per-material totals, indexed by discriminant.
    #[must_use]
    pub fn counts(&self) -> [usize; Material::ALL.len()] {
        let mut counts = [0usize; Material::ALL.len()];
        for cell in &self.cells {
            counts[cell.material as usize] += 1;
        }
        counts
    }

    /// `(x, y, cell)` over every slot, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        let w = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| ((i % w) as i32, (i / w) as i32, *cell))
    }
}
