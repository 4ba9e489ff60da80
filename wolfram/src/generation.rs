// generation.rs - One row of the automaton and how it advances

use rand::Rng;

use crate::rule::Rule;
use crate::{Cell, seed};

/// Write the successor of `current` into `next`.
///
/// Edges wrap: index 0 sees the last cell as its left neighbour and the last
/// cell sees index 0 as its right one. `current` is never written, so every new
/// cell is computed from old values only.
pub fn evolve(current: &[Cell], next: &mut [Cell], rule: Rule) {
    let width = current.len();
    debug_assert!(width > 0, "generation must have at least one cell");
    debug_assert_eq!(width, next.len());

    for i in 0..width {
        let left   = current[(i + width - 1) % width];
        let center = current[i];
        let right  = current[(i + 1) % width];
        next[i] = rule.apply(left, center, right);
    }
}

/// Advance `cells` in place. Takes a snapshot first; the tick loop uses
/// [`Generation`] instead to avoid the allocation.
pub fn step(cells: &mut [Cell], rule: Rule) {
    let snapshot = cells.to_vec();
    evolve(&snapshot, cells, rule);
}

/// The caller's current row, pre-allocated at the largest width and used at a
/// smaller active width. Holds a second buffer so each step is a write plus a
/// swap.
#[derive(Debug, Clone)]
pub struct Generation {
    current: Vec<Cell>,
    next: Vec<Cell>,
    width: usize,
}

impl Generation {
    pub fn new(capacity: usize, width: usize) -> Self {
        assert!(width > 0 && width <= capacity, "width {width} outside 1..={capacity}");
        Self {
            current: vec![0; capacity],
            next: vec![0; capacity],
            width,
        }
    }

    pub fn capacity(&self) -> usize {
        self.current.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Switch the active width and reseed with a single middle cell.
    pub fn set_width(&mut self, width: usize) {
        debug_assert!(width > 0 && width <= self.capacity());
        self.width = width;
        self.init_middle();
    }

    pub fn cells(&self) -> &[Cell] {
        &self.current[..self.width]
    }

    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.current[..self.width]
    }

    pub fn init_middle(&mut self) {
        seed::init_middle(self.cells_mut());
    }

    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        seed::randomize(self.cells_mut(), rng);
    }

    pub fn step(&mut self, rule: Rule) {
        let width = self.width;
        evolve(&self.current[..width], &mut self.next[..width], rule);
        std::mem::swap(&mut self.current, &mut self.next);
    }
}
