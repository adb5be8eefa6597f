//! # kestrel-format
//!
//! File format parsing and witness presentation for Kestrel.
//!
//! Supports:
//! - **DIMACS CNF**: standard SAT competition format, plus the Sudoku
//!   sidecar metadata carried in comment lines
//! - **Witness blocks**: the `SAT` / `UNSAT` output format
//! - **Sudoku grids**: decoding a witness back into a printable grid

pub mod dimacs;
pub mod sudoku;
pub mod witness;

pub use dimacs::DimacsCnf;
pub use sudoku::{SudokuGrid, SudokuMeta};
