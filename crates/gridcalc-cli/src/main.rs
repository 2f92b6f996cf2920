//! gridcalc CLI - set and evaluate spreadsheet cells

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gridcalc::prelude::*;
use std::io::{self, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gridcalc")]
#[command(
    author,
    version,
    about = "In-memory integer spreadsheet with formula evaluation"
)]
struct Cli {
    /// Log every cell write and evaluation step to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Maximum length of a cell reference chain
    #[arg(long, global = true, default_value_t = StoreSettings::default().max_depth)]
    max_depth: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in demonstration and print each result
    Demo,

    /// Set cells, then print the value of each requested cell
    Eval {
        /// Cell assignment, e.g. `A1=13` or `A3==A1+A2`
        #[arg(short, long = "set", value_name = "CELL=VALUE")]
        set: Vec<String>,

        /// Cells to print
        #[arg(required = true)]
        cells: Vec<String>,
    },
}

/// Demonstration steps: cell, input, description
const DEMO_STEPS: &[(&str, &str, &str)] = &[
    ("a1", "13", "A1 = 13"),
    ("A2", "14", "A2 = 14"),
    ("a3", "=A1+ A2", "A3 = 13 + 14"),
    ("A4", "=A1+ A2 + a3", "A4 = 13 + 14 + 27"),
    ("A5", "=(A1+ A2 )* a3", "A5 = (13 + 14) * 27"),
    ("A6", "=(A18+ A2 )/ 14", "A6 = (0 + 14) / 14"),
];

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut store = CellStore::with_settings(StoreSettings {
        max_depth: cli.max_depth,
    });
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Demo => run_demo(&mut store, &mut out),
        Commands::Eval { set, cells } => run_eval(&mut store, &set, &cells, &mut out),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("gridcalc=trace,gridcalc_formula=trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_demo(store: &mut CellStore, out: &mut impl Write) -> Result<()> {
    for (cell, input, description) in DEMO_STEPS {
        apply_input(store, cell, input)?;
        let value = store
            .get_cell_value(cell)
            .with_context(|| format!("Failed to evaluate {cell}"))?;
        writeln!(out, "{description} <--> {value}")?;
    }

    Ok(())
}

fn run_eval(
    store: &mut CellStore,
    assignments: &[String],
    cells: &[String],
    out: &mut impl Write,
) -> Result<()> {
    for assignment in assignments {
        apply_assignment(store, assignment)?;
    }

    for cell in cells {
        let id: CellId = cell.parse()?;
        let value = store
            .value(&id)
            .with_context(|| format!("Failed to evaluate {id}"))?;
        writeln!(out, "{id} = {value}")?;
    }

    Ok(())
}

/// Apply a `CELL=VALUE` assignment
fn apply_assignment(store: &mut CellStore, assignment: &str) -> Result<()> {
    let (cell, input) = assignment
        .split_once('=')
        .with_context(|| format!("Expected CELL=VALUE, got '{assignment}'"))?;

    apply_input(store, cell.trim(), input.trim())
}

/// Store `input` in `cell`: formulas start with `=`, anything else must be an integer
fn apply_input(store: &mut CellStore, cell: &str, input: &str) -> Result<()> {
    debug!(cell, input, "applying input");

    let result = if input.starts_with('=') {
        store.set_cell_formula(cell, input)
    } else {
        let value: i64 = input
            .parse()
            .with_context(|| format!("'{input}' is neither an integer nor a formula"))?;
        store.set_cell_value(cell, value)
    };

    result.with_context(|| format!("Failed to set {cell}"))
}
