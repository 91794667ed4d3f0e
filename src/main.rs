use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use smoothsort::input::{parse_floats, parse_integers, read_lines};
use smoothsort::leonardo::{Leonardo, MAX_ORDER};
use smoothsort::{SortConfig, SortReport, Smoothsort};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "smoothsort",
    about = "In-place adaptive sorting over Leonardo heaps",
    version = env!("CARGO_PKG_VERSION")
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sort one value per line from a file (or stdin) and print the result.
    Sort {
        /// Input file; reads stdin when omitted.
        input: Option<PathBuf>,
        /// Sort from largest to smallest.
        #[arg(long)]
        descending: bool,
        /// How each line is interpreted.
        #[arg(long, value_enum, default_value_t = KeyKind::Text)]
        kind: KeyKind,
        /// Log comparison count and forest shape.
        #[arg(long)]
        stats: bool,
    },
    /// Print the Leonardo numbers L(0) .. L(count - 1).
    Leonardo {
        /// Number of terms to print.
        #[arg(long, default_value_t = 16)]
        count: usize,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum KeyKind {
    /// Lexicographic byte order.
    Text,
    /// Signed 64-bit integers.
    Integer,
    /// 64-bit floats; NaN is rejected at sort time.
    Float,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // --stats reports through tracing, so it needs info-level output.
    let default_level = match cli.command {
        Commands::Sort { stats: true, .. } => "info",
        _ => "warn",
    };
    init_tracing(default_level);

    match cli.command {
        Commands::Sort {
            input,
            descending,
            kind,
            stats,
        } => run_sort(input, descending, kind, stats)?,
        Commands::Leonardo { count } => run_leonardo(count)?,
    }

    Ok(())
}

fn init_tracing(default_level: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn run_sort(input: Option<PathBuf>, descending: bool, kind: KeyKind, stats: bool) -> Result<()> {
    let lines = match &input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input file {}", path.display()))?;
            read_lines(BufReader::new(file))
                .with_context(|| format!("failed to read {}", path.display()))?
        }
        None => read_lines(io::stdin().lock()).context("failed to read stdin")?,
    };

    let sorter = Smoothsort::new(SortConfig::from_descending(descending).with_profiling(stats));
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let report = match kind {
        KeyKind::Text => {
            let mut values = lines;
            let report = sorter.sort(&mut values);
            write_values(&mut out, &values)?;
            report
        }
        KeyKind::Integer => {
            let mut values = parse_integers(&lines).context("failed to parse integers")?;
            let report = sorter.sort(&mut values);
            write_values(&mut out, &values)?;
            report
        }
        KeyKind::Float => {
            let mut values = parse_floats(&lines).context("failed to parse numbers")?;
            let report = sorter
                .sort_partial(&mut values)
                .context("cannot sort input containing NaN")?;
            write_values(&mut out, &values)?;
            report
        }
    };
    out.flush().context("failed to flush output")?;

    if stats {
        log_report(&report);
    }

    Ok(())
}

fn write_values<W: Write, T: std::fmt::Display>(out: &mut W, values: &[T]) -> Result<()> {
    for value in values {
        writeln!(out, "{}", value).context("failed to write output")?;
    }
    Ok(())
}

fn log_report(report: &SortReport) {
    if let Some(profile) = &report.profile {
        info!(
            len = report.len,
            direction = %report.direction,
            comparisons = profile.comparisons,
            per_element = profile.comparisons_per_element(report.len),
            trees = profile.trees_built,
            max_order = ?profile.max_order,
            "sort statistics"
        );
    }
}

fn run_leonardo(count: usize) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if count > MAX_ORDER + 1 {
        info!(requested = count, printed = MAX_ORDER + 1, "remaining terms overflow usize");
    }

    for (k, value) in Leonardo::new().take(count).enumerate() {
        writeln!(out, "L({})\t{}", k, value).context("failed to write output")?;
    }
    out.flush().context("failed to flush output")?;

    Ok(())
}
