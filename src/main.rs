//! CLI entry point for the grade book tool.
//!
//! Reads one student per line, grades each student's average against a tier
//! table, and writes a report sorted by average.

use anyhow::{Context, Result};
use clap::Parser;
use gradebook::{Format, config, output};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "gradebook")]
#[command(about = "Calculate students' letter grades for a semester", long_about = None)]
struct Cli {
    /// Input file, one student per line. Reads stdin if omitted
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Output file. Writes to stdout if omitted
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = Format::Console)]
    format: Format,

    /// JSON grade tier table. Uses the standard A-F table if omitted
    #[arg(short, long, value_name = "PATH", env = config::TIERS_ENV)]
    tiers: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let _file_guard = init_tracing(cli.verbose)?;

    if let Err(e) = run(&cli) {
        error!(error = %e, "Grading failed");
        return Err(e);
    }
    Ok(())
}

#[tracing::instrument(skip_all, fields(format = ?cli.format))]
fn run(cli: &Cli) -> Result<()> {
    let tiers = config::resolve_tiers(cli.tiers.as_deref()).context("loading grade tiers")?;
    let book =
        output::read_grade_book(cli.input.as_deref(), tiers).context("reading student records")?;

    let report = book.render(cli.format).context("rendering report")?;
    output::write_report(cli.output.as_deref(), &report).context("writing report")?;

    info!(
        students = book.len(),
        assignments = book.number_of_assignments(),
        "Report complete"
    );
    Ok(())
}

/// Logging setup: colored stderr, plus a JSON rolling log file when
/// `LOG_FILE_PATH` is set. The returned guard must live until exit.
fn init_tracing(verbose: bool) -> Result<Option<WorkerGuard>> {
    let level = if verbose { "debug" } else { "warn" };

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive(level.parse()?));

    let (json_layer, guard) = match std::env::var("LOG_FILE_PATH") {
        Ok(log_file_path) => {
            let log_dir = Path::new(&log_file_path)
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let log_file_name = Path::new(&log_file_path)
                .file_name()
                .unwrap_or(OsStr::new("gradebook.log"));

            let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(non_blocking_file)
                .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(guard)
}
