use crate::foundation::error::{UnveilError, UnveilResult};

/// An axis-aligned half-open pixel rectangle `[left, right) x [top, bottom)`
/// inside image bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Cell {
    /// Leftmost column, inclusive.
    pub left: u32,
    /// Topmost row, inclusive.
    pub top: u32,
    /// Rightmost column, exclusive.
    pub right: u32,
    /// Bottommost row, exclusive.
    pub bottom: u32,
}

impl Cell {
    /// Cell width in pixels.
    pub fn width(self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    /// Cell height in pixels.
    pub fn height(self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Return `true` when `(x, y)` lies inside the rectangle.
    pub fn contains(self, x: u32, y: u32) -> bool {
        self.left <= x && x < self.right && self.top <= y && y < self.bottom
    }
}

/// A [`Cell`] paired with a revealed flag, for strategies that must not
/// re-composite a region once it is opaque.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FlaggedCell {
    /// The covered rectangle.
    pub cell: Cell,
    /// Whether this cell has already been composited.
    pub revealed: bool,
}

impl FlaggedCell {
    /// Wrap a cell with the flag cleared.
    pub fn new(cell: Cell) -> Self {
        Self {
            cell,
            revealed: false,
        }
    }
}

/// An ordered, gap-free division of an image rectangle into cells of a
/// configured pixel extent.
///
/// Cells are laid out row-major at construction; a reorder policy may permute
/// the playback order once, after which the order is fixed. The construction
/// order stays available for point lookups.
#[derive(Clone, Debug)]
pub struct Partition {
    width: u32,
    height: u32,
    extent: u32,
    cols: u32,
    rows: u32,
    cells: Vec<Cell>,
    /// Playback permutation: `order[i]` is the construction index of the
    /// `i`-th cell to reveal.
    order: Vec<u32>,
}

impl Partition {
    /// Divide `width x height` into cells of `extent` pixels per side, in
    /// row-major order. The last row/column is clamped to the image edge and
    /// may be smaller than `extent`.
    pub fn new(width: u32, height: u32, extent: u32) -> UnveilResult<Self> {
        if extent == 0 {
            return Err(UnveilError::config("cell extent must be > 0"));
        }
        if width == 0 || height == 0 {
            return Err(UnveilError::config("partitioned image must be non-empty"));
        }
        let cols = width.div_ceil(extent);
        let rows = height.div_ceil(extent);
        let count = cols as usize * rows as usize;
        let mut cells = Vec::with_capacity(count);
        for i in 0..count as u32 {
            let col = i % cols;
            let row = i / cols;
            let left = col * extent;
            let top = row * extent;
            cells.push(Cell {
                left,
                top,
                right: (left + extent).min(width),
                bottom: (top + extent).min(height),
            });
        }
        let order = (0..count as u32).collect();
        Ok(Self {
            width,
            height,
            extent,
            cols,
            rows,
            cells,
            order,
        })
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> u32 {
        self.cells.len() as u32
    }

    /// Number of cell columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Number of cell rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Configured cell extent in pixels.
    pub fn extent(&self) -> u32 {
        self.extent
    }

    /// Partitioned image width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Partitioned image height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The `i`-th cell in playback order, or `None` past the end.
    pub fn cell(&self, i: u32) -> Option<Cell> {
        let ci = *self.order.get(i as usize)?;
        Some(self.cells[ci as usize])
    }

    /// Cells in construction (row-major) order.
    pub fn construction_cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The first cell in construction order containing `(x, y)`, or `None`
    /// when the point is out of bounds.
    pub fn cell_at(&self, x: u32, y: u32) -> Option<Cell> {
        self.cells.iter().copied().find(|c| c.contains(x, y))
    }

    /// Replace the playback order with `order`, which must be a permutation
    /// of the construction indices. Called once, at construction time.
    pub(crate) fn set_order(&mut self, order: Vec<u32>) {
        debug_assert_eq!(order.len(), self.cells.len());
        self.order = order;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/partition/grid.rs"]
mod tests;
