//! # edgequake-pdf2json
//!
//! Extract the plain text of every page of a PDF and report it as one line of
//! JSON.
//!
//! Layout analysis, font decoding and glyph positioning are all delegated to
//! [PDFium](https://pdfium.googlesource.com/pdfium/) through `pdfium-render`.
//! This crate drives it: validate the input, open the document, walk the
//! pages in order, keep the ones that have text, and turn the outcome into
//! either a page list or a single error message.
//!
//! ## Pipeline Overview
//!
//! ```text
//! PDF path
//!  │
//!  ├─ 1. Input    existence, file type, read permission
//!  ├─ 2. Engine   bind libpdfium (explicit path, PDFIUM_LIB_PATH, ./, system)
//!  ├─ 3. Text     open document, extract each page's text layer in order
//!  ├─ 4. Cleanup  line endings and pdfium's control markers (configurable)
//!  └─ 5. Report   {"status":"ok","pages":[...]} or {"status":"error","error":"..."}
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use edgequake_pdf2json::{extract_report, ExtractionConfig};
//!
//! let report = extract_report("document.pdf", &ExtractionConfig::default());
//! println!("{}", report.to_json_line().unwrap());
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `pdf2json` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! edgequake-pdf2json = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ExtractionConfig, ExtractionConfigBuilder, TextCleanup};
pub use error::Pdf2JsonError;
pub use extract::{extract, extract_async, extract_from_bytes, extract_report};
pub use output::{ExtractionReport, PageText};
