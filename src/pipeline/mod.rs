//! Pipeline stages for PDF text extraction.
//!
//! Each submodule implements exactly one step. Keeping stages separate makes
//! each independently testable: only [`engine`] and [`text`] need a real
//! pdfium library at runtime.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ engine ──▶ text ──▶ postprocess
//! (path)    (pdfium)   (pages)  (cleanup)
//! ```
//!
//! 1. [`input`] validates the user-supplied path
//! 2. [`engine`] locates and binds libpdfium
//! 3. [`text`] opens the document and extracts each page's text layer,
//!    numbering pages and dropping blank ones
//! 4. [`postprocess`] cleans up pdfium's raw text at the configured level

pub mod engine;
pub mod input;
pub mod postprocess;
pub mod text;
