//! Sudoku witness decoding.
//!
//! An instance encoding a Sudoku puzzle carries sidecar metadata in its
//! comment lines: the grid size, a mapping from solver variables to
//! (row, column, value) cells, and the pre-assigned cells that were
//! eliminated from the encoding. Decoding is pure presentation; no solver
//! behaviour depends on it.

use std::fmt;

use kestrel_base::{Model, Var};

/// One `c MAP <var> <r> <c> <v>` line: the variable asserting that cell
/// (row, col) holds `value`. Rows, columns and values are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellVar {
    pub var: Var,
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

/// One `c FIXED <r> <c> <v>` line: a cell pre-assigned by the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCell {
    pub row: usize,
    pub col: usize,
    pub value: u32,
}

/// Sudoku sidecar metadata for one instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SudokuMeta {
    /// Grid side length.
    pub size: usize,
    pub cells: Vec<CellVar>,
    pub fixed: Vec<FixedCell>,
}

impl SudokuMeta {
    /// Decodes a witness into a grid: pre-assigned cells first, then every
    /// mapped cell whose variable the witness assigns true. A variable left
    /// unassigned by the search places no digit.
    #[must_use]
    pub fn decode(&self, model: &Model) -> SudokuGrid {
        let mut grid = SudokuGrid::blank(self.size);
        for cell in &self.fixed {
            grid.set(cell.row, cell.col, cell.value);
        }
        for cell in &self.cells {
            if cell.var <= model.num_vars() && model.value(cell.var).is_true() {
                grid.set(cell.row, cell.col, cell.value);
            }
        }
        grid
    }
}

/// A decoded grid; 0 marks a cell no digit was placed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SudokuGrid {
    size: usize,
    cells: Vec<u32>,
}

impl SudokuGrid {
    fn blank(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The digit at (row, col), 1-based; 0 when blank.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[(row - 1) * self.size + (col - 1)]
    }

    fn set(&mut self, row: usize, col: usize, value: u32) {
        if (1..=self.size).contains(&row) && (1..=self.size).contains(&col) {
            self.cells[(row - 1) * self.size + (col - 1)] = value;
        }
    }

    /// Side length of one box: the smallest b with b*b >= size.
    fn box_size(&self) -> usize {
        let mut b = 1;
        while b * b < self.size {
            b += 1;
        }
        b
    }
}

impl fmt::Display for SudokuGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size;
        let boxed = self.box_size();

        for row in 0..n {
            if row % boxed == 0 && row != 0 {
                for _ in 0..(n * 2 + boxed - 1) {
                    write!(f, "-")?;
                }
                writeln!(f)?;
            }
            for col in 0..n {
                if col % boxed == 0 && col != 0 {
                    write!(f, "| ")?;
                }
                let value = self.cells[row * n + col];
                if value < 10 {
                    write!(f, "{value} ")?;
                } else {
                    write!(f, "{} ", (b'A' + (value - 10) as u8) as char)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
