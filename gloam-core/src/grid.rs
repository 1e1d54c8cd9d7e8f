use crate::Cell;

/// Fixed-size row-major 2D storage.
///
/// Every component of the pipeline shares one pair of dimensions; checked
/// accessors return `Option` so out-of-bounds neighbours degrade to "not
/// there" rather than wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: i32,
    height: i32,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn new(width: u32, height: u32, fill: T) -> Self {
        assert!(width > 0 && height > 0, "grid must be non-empty");
        let width = width as i32;
        let height = height as i32;
        Self {
            width,
            height,
            cells: vec![fill; (width * height) as usize],
        }
    }

    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl<T> Grid<T> {
    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width && cell.y < self.height
    }

    pub fn idx(&self, cell: Cell) -> Option<usize> {
        if !self.in_bounds(cell) {
            return None;
        }
        Some((cell.y * self.width + cell.x) as usize)
    }

    pub fn get(&self, cell: Cell) -> Option<&T> {
        self.idx(cell).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, cell: Cell) -> Option<&mut T> {
        self.idx(cell).map(|i| &mut self.cells[i])
    }

    /// Panics on out-of-bounds access; misuse is a programming error, not a
    /// recoverable condition.
    pub fn set(&mut self, cell: Cell, value: T) {
        let idx = self
            .idx(cell)
            .unwrap_or_else(|| panic!("grid access out of bounds: ({}, {})", cell.x, cell.y));
        self.cells[idx] = value;
    }

    pub fn cells(&self) -> impl Iterator<Item = (Cell, &T)> + '_ {
        self.cells.iter().enumerate().map(|(i, v)| {
            let i = i as i32;
            (Cell::new(i % self.width, i / self.width), v)
        })
    }
}
