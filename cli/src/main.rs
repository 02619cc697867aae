//! dupcheck: report function names defined in more than one source file.

mod scan;


use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::scan::{Report, ScanError, ScanOptions};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "dupcheck", about = "Find function names defined more than once")]
struct Cli {
    /// Directory to scan.
    #[arg(long, env = "DUPCHECK_ROOT", default_value = ".")]
    root: PathBuf,

    /// File extension to scan; repeat to scan several. Defaults to rs, ts, tsx, js, jsx.
    #[arg(long = "ext", value_name = "EXT")]
    extensions: Vec<String>,

    /// Function name to leave out of the report; repeatable.
    #[arg(long, value_name = "NAME")]
    ignore: Vec<String>,

    /// Scan test files and test directories too.
    #[arg(long)]
    include_tests: bool,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Exit 0 even when duplicates are found.
    #[arg(long)]
    allow_duplicates: bool,
}

impl Cli {
    fn options(&self) -> ScanOptions {
        let mut options = ScanOptions::new(self.root.clone());
        if !self.extensions.is_empty() {
            options.extensions = self.extensions.iter().map(|ext| ext.trim_start_matches('.').to_owned()).collect();
        }
        options.ignore.clone_from(&self.ignore);
        options.include_tests = self.include_tests;
        options
    }
}

fn main() -> ExitCode {
    let filter = log_filter(std::env::var("RUST_LOG").ok().as_deref());
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            print!("{}", output.text);
            if output.failed && !cli.allow_duplicates { ExitCode::from(1) } else { ExitCode::SUCCESS }
        }
        Err(err) => {
            tracing::error!(%err, "dupcheck failed");
            eprintln!("dupcheck: {err}");
            ExitCode::from(2)
        }
    }
}

/// Filter from `RUST_LOG` directives, or `info` when unset or unparsable.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

struct Output {
    text: String,
    failed: bool,
}

fn run(cli: &Cli) -> Result<Output, CliError> {
    let options = cli.options();
    tracing::info!(root = %options.root.display(), extensions = ?options.extensions, "scanning");
    let report = scan::scan(&options)?;
    let text = if cli.json { format!("{}\n", serde_json::to_string_pretty(&report)?) } else { render_text(&report) };
    Ok(Output { text, failed: report.has_duplicates() })
}

// ===== RENDERING =====

fn render_text(report: &Report) -> String {
    let mut out = String::new();
    for dup in &report.duplicates {
        out.push_str(&format!("duplicate function `{}` ({} definitions)\n", dup.name, dup.locations.len()));
        for loc in &dup.locations {
            out.push_str(&format!("  {}:{}\n", loc.path, loc.line));
        }
    }
    out.push_str(&format!(
        "scanned {} files, {} definitions, {} duplicate names\n",
        report.files_scanned,
        report.definitions,
        report.duplicates.len()
    ));
    out
}
