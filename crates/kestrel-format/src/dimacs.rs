//! DIMACS CNF format parser.
//!
//! Standard format used in SAT competitions: a `p cnf <vars> <clauses>`
//! header followed by clauses as 0-terminated literal runs, which may span
//! lines. Comment lines are scanned for the Sudoku sidecar metadata
//! (`c SIZE`, `c MAP`, `c FIXED`); comments that merely resemble metadata
//! are ignored.

use std::io::{BufRead, BufReader, Read};
use std::str::FromStr;

use kestrel_base::{Error, Result};

use crate::sudoku::{CellVar, FixedCell, SudokuMeta};

/// A parsed DIMACS CNF formula.
#[derive(Debug, Clone)]
pub struct DimacsCnf {
    /// Number of variables declared in the header.
    pub num_vars: u32,
    /// Clauses as integer-encoded literal lists.
    pub clauses: Vec<Vec<i32>>,
    /// Sudoku sidecar metadata, when the instance carries it.
    pub sudoku: Option<SudokuMeta>,
}

impl DimacsCnf {
    /// Parses DIMACS CNF from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let reader = BufReader::new(reader);
        let mut num_vars: u32 = 0;
        let mut clauses: Vec<Vec<i32>> = Vec::new();
        let mut current: Vec<i32> = Vec::new();
        let mut header_found = false;
        let mut sidecar = SidecarBuilder::default();

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();

            if line.is_empty() {
                continue;
            }

            if let Some(comment) = line.strip_prefix('c') {
                sidecar.scan(comment);
                continue;
            }

            if let Some(header) = line.strip_prefix('p') {
                if header_found {
                    return Err(Error::Parse("duplicate 'p cnf' header".to_string()));
                }
                let parts: Vec<&str> = header.split_whitespace().collect();
                if parts.len() != 3 || parts[0] != "cnf" {
                    return Err(Error::Parse(format!("malformed header line {line:?}")));
                }
                num_vars = parts[1]
                    .parse()
                    .map_err(|e| Error::Parse(format!("invalid variable count: {e}")))?;
                let declared: usize = parts[2]
                    .parse()
                    .map_err(|e| Error::Parse(format!("invalid clause count: {e}")))?;
                // The declared count only sizes storage; actual clauses are
                // counted as they are read.
                clauses.reserve(declared);
                header_found = true;
                continue;
            }

            if !header_found {
                return Err(Error::Parse(
                    "DIMACS header 'p cnf ...' not found".to_string(),
                ));
            }

            for token in line.split_whitespace() {
                let lit: i32 = token
                    .parse()
                    .map_err(|e| Error::Parse(format!("invalid literal {token:?}: {e}")))?;
                if lit == 0 {
                    if !current.is_empty() {
                        clauses.push(std::mem::take(&mut current));
                    }
                } else {
                    if lit.unsigned_abs() > num_vars {
                        return Err(Error::VariableOutOfRange {
                            var: lit.unsigned_abs(),
                            num_vars,
                        });
                    }
                    current.push(lit);
                }
            }
        }

        // A trailing clause without its 0 terminator is accepted.
        if !current.is_empty() {
            clauses.push(current);
        }

        Ok(Self {
            num_vars,
            clauses,
            sudoku: sidecar.finish(),
        })
    }

    /// Serializes back to DIMACS (clauses only; comments are not kept).
    #[must_use]
    pub fn to_dimacs(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("p cnf {} {}\n", self.num_vars, self.clauses.len()));
        for clause in &self.clauses {
            for lit in clause {
                out.push_str(&format!("{lit} "));
            }
            out.push_str("0\n");
        }
        out
    }
}

impl FromStr for DimacsCnf {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(s.as_bytes())
    }
}

/// Collects `c SIZE` / `c MAP` / `c FIXED` comment lines.
#[derive(Debug, Default)]
struct SidecarBuilder {
    size: Option<usize>,
    cells: Vec<CellVar>,
    fixed: Vec<FixedCell>,
}

impl SidecarBuilder {
    fn scan(&mut self, comment: &str) {
        let tokens: Vec<&str> = comment.split_whitespace().collect();
        match tokens.as_slice() {
            ["SIZE", n] => {
                if let Ok(n) = n.parse() {
                    self.size = Some(n);
                }
            }
            ["MAP", var, row, col, value] => {
                if let (Ok(var), Ok(row), Ok(col), Ok(value)) =
                    (var.parse(), row.parse(), col.parse(), value.parse())
                {
                    self.cells.push(CellVar {
                        var,
                        row,
                        col,
                        value,
                    });
                }
            }
            ["FIXED", row, col, value] => {
                if let (Ok(row), Ok(col), Ok(value)) = (row.parse(), col.parse(), value.parse()) {
                    self.fixed.push(FixedCell { row, col, value });
                }
            }
            _ => {}
        }
    }

    fn finish(self) -> Option<SudokuMeta> {
        self.size.map(|size| SudokuMeta {
            size,
            cells: self.cells,
            fixed: self.fixed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimacs() {
        let input = r"
c This is a comment
p cnf 3 2
1 -2 0
2 3 0
";
        let cnf: DimacsCnf = input.parse().unwrap();
        assert_eq!(cnf.num_vars, 3);
        assert_eq!(cnf.clauses.len(), 2);
        assert_eq!(cnf.clauses[0], vec![1, -2]);
        assert_eq!(cnf.clauses[1], vec![2, 3]);
        assert!(cnf.sudoku.is_none());
    }

    #[test]
    fn clauses_may_span_lines() {
        let input = "p cnf 4 2\n1 2\n-3 0 4\n-1 0\n";
        let cnf: DimacsCnf = input.parse().unwrap();
        assert_eq!(cnf.clauses, vec![vec![1, 2, -3], vec![4, -1]]);
    }

    #[test]
    fn trailing_clause_without_terminator_is_kept() {
        let input = "p cnf 2 2\n1 0\n-1 2\n";
        let cnf: DimacsCnf = input.parse().unwrap();
        assert_eq!(cnf.clauses, vec![vec![1], vec![-1, 2]]);
    }

    #[test]
    fn missing_header_is_an_error() {
        assert!("1 2 0\n".parse::<DimacsCnf>().is_err());
    }

    #[test]
    fn bad_literal_is_an_error() {
        let input = "p cnf 2 1\n1 x 0\n";
        assert!(input.parse::<DimacsCnf>().is_err());
    }

    #[test]
    fn out_of_range_variable_is_an_error() {
        let input = "p cnf 2 1\n1 -5 0\n";
        assert!(matches!(
            input.parse::<DimacsCnf>(),
            Err(Error::VariableOutOfRange { var: 5, num_vars: 2 })
        ));
    }

    #[test]
    fn sidecar_metadata_is_collected() {
        let input = "\
c SIZE 4
c MAP 1 1 2 3
c MAP 2 4 4 1
c FIXED 1 1 2
c solver tuned for small grids
p cnf 2 1
1 2 0
";
        let cnf: DimacsCnf = input.parse().unwrap();
        let meta = cnf.sudoku.expect("sidecar metadata expected");
        assert_eq!(meta.size, 4);
        assert_eq!(meta.cells.len(), 2);
        assert_eq!(meta.cells[0].var, 1);
        assert_eq!((meta.cells[1].row, meta.cells[1].col), (4, 4));
        assert_eq!(meta.fixed.len(), 1);
    }

    #[test]
    fn metadata_like_comments_are_ignored() {
        let input = "c MAP one two three four\nc SIZE big\np cnf 1 1\n1 0\n";
        let cnf: DimacsCnf = input.parse().unwrap();
        assert!(cnf.sudoku.is_none());
    }

    #[test]
    fn to_dimacs_roundtrip() {
        let input = "p cnf 3 2\n1 -2 0\n2 3 0\n";
        let cnf: DimacsCnf = input.parse().unwrap();
        let again: DimacsCnf = cnf.to_dimacs().parse().unwrap();
        assert_eq!(again.num_vars, cnf.num_vars);
        assert_eq!(again.clauses, cnf.clauses);
    }
}
