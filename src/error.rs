//! Error types for the edgequake-pdf2json library.
//!
//! A single error type covers every way an extraction can fail. Unlike a
//! conversion that tolerates bad pages, text extraction is all-or-nothing:
//! one failing page aborts the run and the partially collected pages are
//! discarded. The caller sees either the full page list or one
//! [`Pdf2JsonError`], whose `Display` text becomes the `"error"` field of the
//! JSON report.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the edgequake-pdf2json library.
#[derive(Debug, Error)]
pub enum Pdf2JsonError {
    // ── Argument errors ───────────────────────────────────────────────────
    /// The command line did not contain exactly one input path.
    #[error("Invalid arguments: {0}\nUsage: pdf2json <PATH>")]
    InvalidArguments(String),

    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("PDF file not found: '{path}'")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'")]
    PermissionDenied { path: PathBuf },

    /// The path exists but names a directory or other non-regular file.
    #[error("Input is not a regular file: '{path}'")]
    NotAFile { path: PathBuf },

    /// pdfium refused the file and it has no `%PDF` header near the start.
    #[error("File is not a valid PDF: '{path}' (no %PDF header found)")]
    NotAPdf { path: PathBuf },

    /// Reading the file failed for a reason other than the ones above.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── PDF errors ────────────────────────────────────────────────────────
    /// PDF header/trailer/xref is corrupt and cannot be parsed.
    #[error("PDF '{path}' is corrupt: {detail}")]
    CorruptPdf { path: PathBuf, detail: String },

    /// PDF requires a password but none was provided.
    #[error("PDF '{path}' is encrypted and requires a password")]
    PasswordRequired { path: PathBuf },

    /// A password was provided but it is wrong.
    #[error("Wrong password for PDF '{path}'")]
    WrongPassword { path: PathBuf },

    /// Text extraction failed on a specific page (1-indexed).
    #[error("Text extraction failed for page {page}: {detail}")]
    ExtractionFailed { page: usize, detail: String },

    // ── Pdfium binding errors ─────────────────────────────────────────────
    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library: {0}\n\
Set PDFIUM_LIB_PATH=/path/to/libpdfium or install libpdfium system-wide."
    )]
    PdfiumBindingFailed(String),

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}
