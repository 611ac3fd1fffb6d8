//! gen-quanta — генератор таблицы квантов MLFQ / MLFQ quanta table generator
//!
//! Запуск / Run:
//!   gen-quanta --levels 16 --start 10            # +10% на уровень / per level
//!   gen-quanta -l 16 -s 10 --target-max 200      # подобрать rate / back-solve rate
//!   gen-quanta                                   # спросит levels и start / prompts
//!
//! Таблица идёт в stdout (или --output), логи в stderr.
//! The table goes to stdout (or --output), logs go to stderr.

use std::fs;
use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use libquanta::render::{DEFAULT_ARRAY_NAME, DEFAULT_ELEM_TYPE};
use libquanta::{generate_with, render_with, RateMode, TableStyle, ENTRY_POINT_GROWTH_RATE};

mod error;
mod logger;
mod prompt;

use error::CliError;

/// Command-line arguments for `gen-quanta`
#[derive(Parser, Debug)]
#[command(
    name = "gen-quanta",
    about = "Generate the TIME_SLICE_QUANTA table for an MLFQ scheduler",
    version
)]
struct Cli {
    /// Number of MLFQ priority levels (prompted if omitted)
    #[arg(short, long)]
    levels: Option<usize>,

    /// Quantum of level 0 (prompted if omitted)
    #[arg(short, long)]
    start: Option<u64>,

    /// Multiplicative growth per level
    #[arg(short, long, default_value_t = ENTRY_POINT_GROWTH_RATE)]
    rate: f64,

    /// Desired quantum at the last level; overrides --rate
    #[arg(short, long)]
    target_max: Option<f64>,

    /// Ignore --rate and use the library default curve (1.15)
    #[arg(long)]
    default_curve: bool,

    /// Values per row
    #[arg(short = 'w', long, default_value = "8")]
    row_width: NonZeroUsize,

    /// Array identifier
    #[arg(short, long, default_value = DEFAULT_ARRAY_NAME)]
    name: String,

    /// Array element type
    #[arg(long, default_value = DEFAULT_ELEM_TYPE)]
    elem_type: String,

    /// Write the table to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn rate_mode(&self) -> RateMode {
        let rate = if self.default_curve { None } else { Some(self.rate) };
        RateMode::from_options(rate, self.target_max)
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout().lock();

    let levels: usize = prompt::value_or_ask(cli.levels, &mut input, &mut stdout, prompt::LEVELS_PROMPT)?;
    let start: u64 = prompt::value_or_ask(cli.start, &mut input, &mut stdout, prompt::START_PROMPT)?;

    let style = TableStyle::default()
        .with_name(&cli.name)?
        .with_elem_type(&cli.elem_type)
        .with_row_width(cli.row_width);

    let sequence = generate_with(levels, start as f64, cli.rate_mode())?;
    log::debug!("effective growth rate: {}", sequence.rate());

    let table = render_with(sequence.values(), &style);
    match &cli.output {
        Some(path) => {
            fs::write(path, &table)?;
            log::info!("Wrote {} levels to {}", sequence.len(), path.display());
        }
        None => {
            stdout.write_all(table.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logger::init(logger::level_for(cli.verbose, cli.quiet));

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
