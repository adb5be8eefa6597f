//! Info command: instance summary without solving.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use kestrel_format::DimacsCnf;

#[derive(Args)]
pub struct InfoArgs {
    /// Input DIMACS CNF file
    #[arg(required = true)]
    pub input: PathBuf,
}

pub fn run(args: InfoArgs) -> anyhow::Result<()> {
    let content = fs::read_to_string(&args.input)?;
    let cnf: DimacsCnf = content.parse()?;

    println!("c Variables: {}", cnf.num_vars);
    println!("c Clauses:   {}", cnf.clauses.len());

    let (min, max) = cnf
        .clauses
        .iter()
        .fold((usize::MAX, 0), |(min, max), clause| {
            (min.min(clause.len()), max.max(clause.len()))
        });
    if !cnf.clauses.is_empty() {
        println!("c Clause length: {min}..{max}");
    }

    match &cnf.sudoku {
        Some(meta) => println!(
            "c Sudoku: {0}x{0} grid, {1} mapped cells, {2} fixed",
            meta.size,
            meta.cells.len(),
            meta.fixed.len()
        ),
        None => println!("c Sudoku: no sidecar metadata"),
    }

    Ok(())
}
