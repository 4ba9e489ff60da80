// seed.rs - Starting rows for a generation

use rand::Rng;

use crate::Cell;

/// Zero everything, then set the single cell at `len / 2`.
pub fn init_middle(cells: &mut [Cell]) {
    debug_assert!(!cells.is_empty());
    cells.fill(0);
    let middle = cells.len() / 2;
    cells[middle] = 1;
}

/// Independent fair coin flip per cell.
pub fn randomize<R: Rng + ?Sized>(cells: &mut [Cell], rng: &mut R) {
    for cell in cells.iter_mut() {
        *cell = Cell::from(rng.r#gen::<bool>());
    }
}
