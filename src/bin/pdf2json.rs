//! CLI binary for edgequake-pdf2json.
//!
//! A thin shim over the library crate: one positional path in, one JSON line
//! out. Every failure, including a bad command line, is printed as an error
//! report on stdout; the process exits with status 0 either way.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use edgequake_pdf2json::{extract_report, ExtractionConfig, ExtractionReport, Pdf2JsonError};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"OUTPUT:
  Exactly one line of JSON on stdout:
    {"status":"ok","pages":[{"page":1,"text":"..."},...]}
    {"status":"error","error":"..."}

  Pages without extractable text are omitted; "page" is always the
  physical 1-based page number.

EXAMPLES:
  pdf2json document.pdf
  pdf2json scan.pdf | jq -r '.pages[].text'

ENVIRONMENT VARIABLES:
  PDFIUM_LIB_PATH   Path to libpdfium (file or directory)
  RUST_LOG          Diagnostic logging to stderr (e.g. RUST_LOG=debug)
"#;

/// Extract per-page text from a PDF as a single JSON line.
#[derive(Parser, Debug)]
#[command(
    name = "pdf2json",
    version,
    about = "Extract per-page text from a PDF as a single JSON line",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path to the PDF file.
    input: PathBuf,
}

fn main() -> Result<()> {
    // ── Logging setup ────────────────────────────────────────────────────
    // stdout carries the report; diagnostics go to stderr and stay silent
    // unless RUST_LOG asks for them.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")),
        )
        .with_writer(io::stderr)
        .init();

    let report = match Cli::try_parse() {
        Ok(cli) => extract_report(&cli.input, &ExtractionConfig::default()),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print().context("Failed to write help")?;
            return Ok(());
        }
        Err(e) => ExtractionReport::error(Pdf2JsonError::InvalidArguments(summarize_clap_error(
            &e,
        ))),
    };

    print_report(&report)
}

/// First line of clap's message without the `error: ` prefix.
fn summarize_clap_error(e: &clap::Error) -> String {
    let rendered = e.to_string();
    let first = rendered.lines().next().unwrap_or("").trim();
    first.strip_prefix("error:").unwrap_or(first).trim().to_string()
}

fn print_report(report: &ExtractionReport) -> Result<()> {
    let line = report
        .to_json_line()
        .context("Failed to serialise report")?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{line}").context("Failed to write to stdout")?;
    handle.flush().context("Failed to flush stdout")?;
    Ok(())
}
