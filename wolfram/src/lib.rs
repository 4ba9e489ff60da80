//! Elementary (Wolfram) cellular automata scrolling down a square grid.
//!
//! [`rule`] evaluates one cell, [`generation`] advances a whole row with
//! wrap-around edges, and [`grid`] keeps the most recent rows in a ring so the
//! history scrolls upward once the grid is full. [`Scroller`] ties them to the
//! mode, size and colour state a front-end drives.

pub mod config;
pub mod error;
pub mod generation;
pub mod grid;
pub mod rule;
pub mod scroller;
pub mod seed;

/// One cell: 0 or 1.
pub type Cell = u8;

pub use error::{Error, Result};
pub use generation::{Generation, evolve, step};
pub use grid::{GridSize, ScrollGrid, VisibleRows};
pub use rule::{Rule, next_bit};
pub use scroller::{Action, Mode, Scroller};
pub use seed::{init_middle, randomize};
