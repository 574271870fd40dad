use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dragnet::{KeywordPattern, ReportFormat, ScanMode, Scanner, write_report};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "dragnet", version, about = "Keyword sweep across evidence trees")]
struct Cli {
    /// Evidence directory to scan recursively
    #[arg(short = 'd', long = "dir")]
    dir: PathBuf,

    /// Newline-delimited keyword file; `*` is the only wildcard
    #[arg(short = 'f', long = "keywords")]
    keywords: PathBuf,

    /// Report format
    #[arg(short = 'o', long = "format", value_enum, default_value = "txt")]
    format: OutputFormat,

    /// Report destination
    #[arg(long = "out")]
    out: PathBuf,

    /// Skip PDFs over 10 MB and database files over 20 MB
    #[arg(long, conflicts_with = "deep")]
    fast: bool,

    /// Retry failed or unrecognized files as raw bytes
    #[arg(long)]
    deep: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Txt,
    Csv,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Txt => ReportFormat::Txt,
            OutputFormat::Csv => ReportFormat::Csv,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // clap already rejects --fast --deep; this keeps the invariant for
    // the library path and yields the same diagnostic wording everywhere.
    let mode = ScanMode::from_flags(cli.fast, cli.deep)?;
    let pattern = KeywordPattern::from_file(&cli.keywords)
        .context("keyword list could not be compiled")?;

    let search_dir = normalize_launcher_path(&cli.dir);
    let output_file = normalize_launcher_path(&cli.out);

    println!("[*] Scanning under: {}", search_dir.display());
    info!(dir = %search_dir.display(), ?mode, "scan starting");

    let scanner = Scanner::new(pattern, mode);
    let (records, stats) = scanner.scan_with(&search_dir, |record| {
        println!(
            "MATCH | {:<12} | {:<5} | {}",
            record.keyword, record.extension, record.path
        );
    });

    write_report(&output_file, cli.format.into(), &records)
        .with_context(|| format!("cannot write report to {}", output_file.display()))?;

    info!(
        files_seen = stats.files_seen,
        matches = stats.matches,
        "scan finished"
    );
    println!("[*] Results saved to: {}", output_file.display());

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Evidence-collection launchers hand over paths wrapped in literal
/// quotes, sometimes with a trailing backslash; strip both.
fn normalize_launcher_path(path: &std::path::Path) -> PathBuf {
    let text = path.to_string_lossy();
    let trimmed = text.trim_matches('"').trim_end_matches('\\');
    PathBuf::from(trimmed)
}
