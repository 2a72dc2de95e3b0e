//! Fundamental types shared by the grid and the search.

mod cell;

pub use cell::Cell;
