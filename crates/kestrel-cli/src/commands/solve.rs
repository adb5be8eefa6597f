//! Solve command.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use kestrel_cdcl::Solver;
use kestrel_format::{witness, DimacsCnf};

use crate::report::SolveReport;

#[derive(Args)]
pub struct SolveArgs {
    /// Input DIMACS CNF file
    #[arg(required = true)]
    pub input: PathBuf,

    /// Also write the witness block to a file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write a JSON solve report to a file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Suppress Sudoku grid rendering even when metadata is present
    #[arg(long)]
    pub no_grid: bool,
}

pub fn run(args: SolveArgs) -> anyhow::Result<()> {
    tracing::info!("Loading instance from {:?}", args.input);

    let content = fs::read_to_string(&args.input)?;
    let cnf: DimacsCnf = content.parse()?;
    tracing::info!(
        "Loaded DIMACS: {} vars, {} clauses",
        cnf.num_vars,
        cnf.clauses.len()
    );

    let mut solver = Solver::new(cnf.num_vars);
    for clause in &cnf.clauses {
        solver.add_clause(clause.iter().copied())?;
    }

    let start = Instant::now();
    let result = solver.solve();
    let elapsed = start.elapsed();
    tracing::info!("Solved in {:?}", elapsed);
    tracing::debug!(
        "decisions={} conflicts={} propagations={} learned={}",
        solver.stats().decisions,
        solver.stats().conflicts,
        solver.stats().propagations,
        solver.stats().learned_clauses
    );

    let block = witness::render(result.model());
    print!("{block}");
    if let Some(path) = &args.output {
        fs::write(path, &block)?;
    }

    if let (Some(model), Some(meta), false) = (result.model(), &cnf.sudoku, args.no_grid) {
        println!("\nSudoku size detected: {0}x{0}\n", meta.size);
        print!("{}", meta.decode(model));
    }

    if let Some(path) = &args.report {
        let report = SolveReport::new(
            &args.input,
            cnf.sudoku.as_ref().map(|meta| meta.size),
            &solver,
            &result,
            elapsed,
        );
        fs::write(path, report.to_json()?)?;
        tracing::info!("Wrote report to {:?}", path);
    }

    Ok(())
}
