// grid.rs - Scrolling history of generations
//
// A square store of width x width cells, allocated once for the largest size.
// Rows fill top to bottom, then the store turns into a ring of rows where each
// new generation overwrites the oldest one.

use std::fmt;

use crate::Cell;

/// Selectable grid widths (and heights, the grid is square).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GridSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl GridSize {
    pub const LARGEST: GridSize = GridSize::Large;

    pub const fn width(self) -> usize {
        match self {
            GridSize::Small  => 60,
            GridSize::Medium => 120,
            GridSize::Large  => 240,
        }
    }

    /// Small -> Medium -> Large -> Small
    pub const fn next(self) -> Self {
        match self {
            GridSize::Small  => GridSize::Medium,
            GridSize::Medium => GridSize::Large,
            GridSize::Large  => GridSize::Small,
        }
    }

    /// Side of one cell in logical pixels on a `screen`-wide canvas.
    pub const fn cell_size_px(self, screen: usize) -> usize {
        screen / self.width()
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GridSize::Small  => "small",
            GridSize::Medium => "medium",
            GridSize::Large  => "large",
        };
        write!(f, "{name} ({0}x{0})", self.width())
    }
}

/// Fixed-capacity ring buffer of rows.
///
/// While filling, rows `0..fill_counter` are in chronological order. Once
/// `fill_counter == width` every slot is live and `start_row_idx` names the
/// oldest; a new row replaces that slot and the cursor moves on by one.
#[derive(Debug, Clone)]
pub struct ScrollGrid {
    cells: Vec<Cell>,  // capacity * capacity, row-major at the active width
    capacity: usize,
    width: usize,
    fill_counter: usize,
    start_row_idx: usize,
}

impl ScrollGrid {
    pub fn new(capacity: usize, width: usize) -> Self {
        assert!(width > 0 && width <= capacity, "width {width} outside 1..={capacity}");
        Self {
            cells: vec![0; capacity * capacity],
            capacity,
            width,
            fill_counter: 0,
            start_row_idx: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn fill_counter(&self) -> usize {
        self.fill_counter
    }

    pub fn start_row_idx(&self) -> usize {
        self.start_row_idx
    }

    /// True once every row slot holds a generation.
    pub fn is_scrolling(&self) -> bool {
        self.fill_counter == self.width
    }

    /// Forget every stored row. Cell contents stay in place but are no longer
    /// visible until overwritten.
    pub fn reset(&mut self) {
        self.fill_counter = 0;
        self.start_row_idx = 0;
    }

    /// Change the active width within the allocated capacity. Always resets,
    /// since row length and ring position both depend on the width.
    pub fn resize(&mut self, width: usize) {
        assert!(width > 0 && width <= self.capacity, "width {width} outside 1..={}", self.capacity);
        self.width = width;
        self.reset();
    }

    /// Store `row` as the newest generation, evicting the oldest once full.
    pub fn record(&mut self, row: &[Cell]) {
        debug_assert_eq!(row.len(), self.width, "row length must match grid width");

        let slot = if self.fill_counter < self.width {
            // Filling: next free line
            let slot = self.fill_counter;
            self.fill_counter += 1;
            slot
        } else {
            // Scrolling: overwrite the oldest, the one after it becomes oldest
            let slot = self.start_row_idx;
            self.start_row_idx = (self.start_row_idx + 1) % self.width;
            slot
        };
        self.row_mut(slot).copy_from_slice(row);
    }

    /// Live rows, oldest first. Storage order differs once scrolling.
    pub fn visible_rows(&self) -> VisibleRows<'_> {
        VisibleRows {
            grid: self,
            offset: 0,
            len: self.fill_counter,
        }
    }

    fn row(&self, slot: usize) -> &[Cell] {
        let start = slot * self.width;
        &self.cells[start..start + self.width]
    }

    fn row_mut(&mut self, slot: usize) -> &mut [Cell] {
        let start = slot * self.width;
        &mut self.cells[start..start + self.width]
    }
}

/// Iterator returned by [`ScrollGrid::visible_rows`].
#[derive(Debug, Clone)]
pub struct VisibleRows<'a> {
    grid: &'a ScrollGrid,
    offset: usize,
    len: usize,
}

impl<'a> Iterator for VisibleRows<'a> {
    type Item = &'a [Cell];

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset == self.len {
            return None;
        }
        let grid = self.grid;
        let slot = (grid.start_row_idx + self.offset) % grid.width;
        self.offset += 1;
        Some(grid.row(slot))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.offset;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for VisibleRows<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(grid: &ScrollGrid) -> Vec<Vec<Cell>> {
        grid.visible_rows().map(<[Cell]>::to_vec).collect()
    }

    #[test]
    fn new_grid_is_empty() {
        let grid = ScrollGrid::new(8, 4);
        assert_eq!(grid.visible_rows().len(), 0);
        assert!(!grid.is_scrolling());
    }

    #[test]
    fn filling_keeps_record_order() {
        let mut grid = ScrollGrid::new(4, 4);
        grid.record(&[1, 0, 0, 0]);
        grid.record(&[0, 1, 0, 0]);
        grid.record(&[0, 0, 1, 0]);

        assert_eq!(grid.fill_counter(), 3);
        assert_eq!(grid.start_row_idx(), 0);
        assert_eq!(rows(&grid), vec![vec![1, 0, 0, 0], vec![0, 1, 0, 0], vec![0, 0, 1, 0]]);
    }

    #[test]
    fn fifth_row_evicts_first() {
        let a = [1, 0, 0, 0];
        let b = [0, 1, 0, 0];
        let c = [0, 0, 1, 0];
        let d = [0, 0, 0, 1];
        let e = [1, 1, 1, 1];

        let mut grid = ScrollGrid::new(4, 4);
        for row in [a, b, c, d] {
            grid.record(&row);
        }
        assert!(grid.is_scrolling());
        assert_eq!(rows(&grid), vec![a, b, c, d]);

        grid.record(&e);
        assert_eq!(grid.fill_counter(), 4);
        assert_eq!(grid.start_row_idx(), 1);
        assert_eq!(rows(&grid), vec![b, c, d, e]);
    }

    #[test]
    fn start_cursor_wraps_around() {
        let mut grid = ScrollGrid::new(3, 3);
        for n in 0..3 + 3 {
            grid.record(&[n, n, n]);
        }
        assert_eq!(grid.start_row_idx(), 0);
        assert_eq!(rows(&grid), vec![[3; 3], [4; 3], [5; 3]]);

        grid.record(&[6, 6, 6]);
        assert_eq!(grid.start_row_idx(), 1);
        assert_eq!(rows(&grid), vec![[4; 3], [5; 3], [6; 3]]);
    }

    #[test]
    fn long_run_keeps_last_width_rows() {
        let mut grid = ScrollGrid::new(5, 5);
        for n in 0..23u8 {
            grid.record(&[n; 5]);
        }
        let firsts: Vec<Cell> = grid.visible_rows().map(|row| row[0]).collect();
        assert_eq!(firsts, vec![18, 19, 20, 21, 22]);
    }

    #[test]
    fn reset_hides_rows_until_refilled() {
        let mut grid = ScrollGrid::new(4, 4);
        for _ in 0..6 {
            grid.record(&[1; 4]);
        }
        grid.reset();
        assert_eq!(grid.visible_rows().len(), 0);
        assert_eq!(grid.start_row_idx(), 0);

        grid.record(&[0, 1, 1, 0]);
        assert_eq!(rows(&grid), vec![vec![0, 1, 1, 0]]);
    }

    #[test]
    fn resize_within_capacity() {
        let mut grid = ScrollGrid::new(6, 6);
        for _ in 0..8 {
            grid.record(&[1; 6]);
        }

        grid.resize(3);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.capacity(), 6);
        assert_eq!(grid.visible_rows().len(), 0);

        for n in 0..4 {
            grid.record(&[n; 3]);
        }
        assert_eq!(rows(&grid), vec![[1; 3], [2; 3], [3; 3]]);
    }

    #[test]
    #[should_panic]
    fn resize_past_capacity_panics() {
        let mut grid = ScrollGrid::new(4, 4);
        grid.resize(5);
    }

    #[test]
    fn sizes_cycle_and_fit_screen() {
        assert_eq!(GridSize::Small.next(), GridSize::Medium);
        assert_eq!(GridSize::Medium.next(), GridSize::Large);
        assert_eq!(GridSize::Large.next(), GridSize::Small);
        assert_eq!(GridSize::Small.cell_size_px(240), 4);
        assert_eq!(GridSize::Medium.cell_size_px(240), 2);
        assert_eq!(GridSize::LARGEST.cell_size_px(240), 1);
    }
}
