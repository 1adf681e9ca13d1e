//! Extraction entry points.
//!
//! [`extract_report`] is the single call boundary used by the `pdf2json`
//! binary: it runs the whole open → iterate → extract sequence and folds any
//! failure into [`ExtractionReport::Error`]. It never returns an error and
//! never panics on bad input, so the caller always has exactly one report to
//! print.
//!
//! The `Result`-returning [`extract`] is the same work for library callers
//! who want to match on [`Pdf2JsonError`] themselves.

use crate::config::ExtractionConfig;
use crate::error::Pdf2JsonError;
use crate::output::{ExtractionReport, PageText};
use crate::pipeline::{input, text};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

/// Extract the text of every page of a PDF file.
///
/// This is the primary entry point for the library.
///
/// # Arguments
/// * `path`: Local file path to a PDF
/// * `config`: Extraction configuration
///
/// # Returns
/// Pages with non-empty text, in document order. The list is empty for a
/// zero-page document or one without any text layer.
///
/// # Errors
/// - File not found / permission denied / not a regular file
/// - pdfium library not available
/// - Not a PDF (judged only after pdfium refuses it)
/// - Corrupt or encrypted document
/// - Any page's text layer could not be read
pub fn extract(
    path: impl AsRef<Path>,
    config: &ExtractionConfig,
) -> Result<Vec<PageText>, Pdf2JsonError> {
    let total_start = Instant::now();
    let path = path.as_ref();
    info!("Starting extraction: {}", path.display());

    // ── Step 1: Validate input ───────────────────────────────────────────
    let pdf_path = input::resolve_local(path)?;

    // ── Step 2: Open, iterate, extract ───────────────────────────────────
    let pages = text::extract_pages_blocking(&pdf_path, config)?;

    info!(
        "Extraction complete: {} pages with text, {}ms",
        pages.len(),
        total_start.elapsed().as_millis()
    );
    Ok(pages)
}

/// Run [`extract`] and fold the outcome into an [`ExtractionReport`].
///
/// Partial results are never reported: if any step fails, the pages read so
/// far are dropped and the report carries only the error message.
pub fn extract_report(path: impl AsRef<Path>, config: &ExtractionConfig) -> ExtractionReport {
    let result = extract(path, config);
    if let Err(ref e) = result {
        warn!("Extraction failed: {}", e);
    }
    result.into()
}

/// Async wrapper around [`extract`].
///
/// pdfium is not async-safe, so the work runs on Tokio's blocking pool via
/// `spawn_blocking`. Must be called from within a Tokio runtime.
pub async fn extract_async(
    path: impl AsRef<Path>,
    config: &ExtractionConfig,
) -> Result<Vec<PageText>, Pdf2JsonError> {
    let path: PathBuf = path.as_ref().to_path_buf();
    let config = config.clone();

    tokio::task::spawn_blocking(move || extract(&path, &config))
        .await
        .map_err(|e| Pdf2JsonError::Internal(format!("Extraction task panicked: {}", e)))?
}

/// Extract text from PDF bytes held in memory.
///
/// The bytes are written to a managed [`tempfile`] so they go through the same
/// pdfium path as a file on disk. The temp file is removed when
/// this function returns, on success and failure alike.
///
/// # Example
/// ```rust,no_run
/// use edgequake_pdf2json::{extract_from_bytes, ExtractionConfig};
///
/// let bytes: Vec<u8> = std::fs::read("document.pdf").unwrap();
/// let pages = extract_from_bytes(&bytes, &ExtractionConfig::default()).unwrap();
/// for p in pages {
///     println!("page {}: {} chars", p.page, p.text.len());
/// }
/// ```
pub fn extract_from_bytes(
    bytes: &[u8],
    config: &ExtractionConfig,
) -> Result<Vec<PageText>, Pdf2JsonError> {
    let mut tmp = tempfile::Builder::new()
        .suffix(".pdf")
        .tempfile()
        .map_err(|e| Pdf2JsonError::Internal(format!("tempfile: {e}")))?;
    tmp.write_all(bytes)
        .map_err(|e| Pdf2JsonError::Internal(format!("tempfile write: {e}")))?;
    tmp.flush()
        .map_err(|e| Pdf2JsonError::Internal(format!("tempfile flush: {e}")))?;
    // `tmp` is dropped (and the file deleted) when `extract` returns
    extract(tmp.path(), config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonexistent_path_yields_error_report() {
        let report = extract_report("/definitely/not/a/real/file.pdf", &ExtractionConfig::default());
        match report {
            ExtractionReport::Error { error } => {
                assert!(!error.is_empty());
                assert!(error.contains("/definitely/not/a/real/file.pdf"), "got: {error}");
            }
            other => panic!("expected error report, got {other:?}"),
        }
    }

    #[test]
    fn empty_path_yields_error_report() {
        let report = extract_report("", &ExtractionConfig::default());
        assert!(!report.is_ok());
    }

    #[test]
    fn error_report_is_repeatable() {
        let config = ExtractionConfig::default();
        let a = extract_report("/no/such/dir/doc.pdf", &config);
        let b = extract_report("/no/such/dir/doc.pdf", &config);
        assert_eq!(a, b);
        assert_eq!(a.to_json_line().unwrap(), b.to_json_line().unwrap());
    }

    #[test]
    fn non_pdf_bytes_are_an_error() {
        // NotAPdf when pdfium is installed, a binding failure otherwise.
        let err = extract_from_bytes(b"GIF89a....", &ExtractionConfig::default()).unwrap_err();
        assert!(
            matches!(
                err,
                Pdf2JsonError::NotAPdf { .. } | Pdf2JsonError::PdfiumBindingFailed(_)
            ),
            "got {err:?}"
        );
    }

    #[test]
    fn leading_bytes_before_header_reach_the_engine() {
        let bytes = b"\xEF\xBB\xBF%PDF-1.4\n1 0 obj\n<< /Type /Cat";
        let err = extract_from_bytes(bytes, &ExtractionConfig::default()).unwrap_err();
        assert!(
            matches!(
                err,
                Pdf2JsonError::CorruptPdf { .. } | Pdf2JsonError::PdfiumBindingFailed(_)
            ),
            "got {err:?}"
        );
    }

    #[tokio::test]
    async fn async_wrapper_propagates_errors() {
        let err = extract_async("/definitely/not/a/real/file.pdf", &ExtractionConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Pdf2JsonError::FileNotFound { .. }));
    }
}
