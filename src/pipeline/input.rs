//! Input validation: check the user-supplied path before pdfium sees it.
//!
//! pdfium reports every open failure as an opaque error code. Checking
//! existence, file type and read permission up front turns those faults into
//! precise messages, and keeps them working on machines where the pdfium
//! library itself is not installed. The file's content is not inspected here:
//! whether it is a PDF is for pdfium to decide. [`has_pdf_header`] is only
//! consulted afterwards, to word the error when pdfium has already refused it.

use crate::error::Pdf2JsonError;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Marker that starts every PDF header.
const PDF_MAGIC: &[u8] = b"%PDF";

/// pdfium looks for the header within this many leading bytes.
const HEADER_SEARCH_WINDOW: u64 = 1024;

/// Validate that `path` names a readable regular file.
///
/// Returns the path as a [`PathBuf`] on success.
pub fn resolve_local(path: &Path) -> Result<PathBuf, Pdf2JsonError> {
    let meta = std::fs::metadata(path).map_err(|e| map_io_error(path, e))?;
    if !meta.is_file() {
        return Err(Pdf2JsonError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    // Opening surfaces a missing read permission, which metadata does not.
    std::fs::File::open(path).map_err(|e| map_io_error(path, e))?;

    debug!("Resolved local PDF: {}", path.display());
    Ok(path.to_path_buf())
}

/// Whether `%PDF` occurs within the first 1024 bytes of the file.
///
/// Read failures count as "has a header" so the caller falls back to the
/// engine's own diagnosis.
pub fn has_pdf_header(path: &Path) -> bool {
    let mut head = Vec::new();
    let read = std::fs::File::open(path)
        .and_then(|f| f.take(HEADER_SEARCH_WINDOW).read_to_end(&mut head));
    match read {
        Ok(_) => head.windows(PDF_MAGIC.len()).any(|w| w == PDF_MAGIC),
        Err(_) => true,
    }
}

fn map_io_error(path: &Path, e: std::io::Error) -> Pdf2JsonError {
    match e.kind() {
        std::io::ErrorKind::NotFound => Pdf2JsonError::FileNotFound {
            path: path.to_path_buf(),
        },
        std::io::ErrorKind::PermissionDenied => Pdf2JsonError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => Pdf2JsonError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    }
}
