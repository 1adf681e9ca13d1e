//! Binding to the pdfium shared library.
//!
//! `pdfium-render` loads libpdfium at runtime rather than linking it, so the
//! library has to be found on every run. Candidates are tried from most to
//! least specific:
//!
//! 1. `ExtractionConfig::pdfium_lib_path` (a file, or a directory holding
//!    the platform library)
//! 2. the `PDFIUM_LIB_PATH` environment variable, same rules
//! 3. the current working directory
//! 4. the system library search path
//!
//! The returned [`Pdfium`] owns the bindings. Dropping it unloads them, so
//! callers keep it alive exactly as long as the documents it opened.

use crate::error::Pdf2JsonError;
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable naming an existing libpdfium file or directory.
pub const PDFIUM_LIB_PATH_ENV: &str = "PDFIUM_LIB_PATH";

/// Bind to pdfium, walking the candidate chain described in the module docs.
pub fn bind_pdfium(explicit: Option<&Path>) -> Result<Pdfium, Pdf2JsonError> {
    let env_path = std::env::var_os(PDFIUM_LIB_PATH_ENV).map(PathBuf::from);
    let mut failures = Vec::new();

    for candidate in library_candidates(explicit, env_path.as_deref()) {
        match Pdfium::bind_to_library(&candidate) {
            Ok(bindings) => {
                info!("Bound pdfium from {}", candidate.display());
                return Ok(Pdfium::new(bindings));
            }
            Err(e) => {
                debug!("pdfium not usable at {}: {}", candidate.display(), e);
                failures.push(format!("{}: {}", candidate.display(), e));
            }
        }
    }

    match Pdfium::bind_to_system_library() {
        Ok(bindings) => {
            info!("Bound system pdfium library");
            Ok(Pdfium::new(bindings))
        }
        Err(e) => {
            failures.push(format!("system library: {}", e));
            Err(Pdf2JsonError::PdfiumBindingFailed(failures.join("; ")))
        }
    }
}

/// Expand user-supplied locations into concrete library file paths.
///
/// Explicit and environment locations come first; the current directory is
/// always tried last before falling back to the system search path.
fn library_candidates(explicit: Option<&Path>, env_path: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = explicit
        .into_iter()
        .chain(env_path)
        .map(as_library_file)
        .collect();
    candidates.push(Pdfium::pdfium_platform_library_name_at_path("./"));
    candidates.dedup();
    candidates
}

/// A directory means "the platform library inside it"; anything else is
/// taken as the library file itself.
fn as_library_file(p: &Path) -> PathBuf {
    if p.is_dir() {
        Pdfium::pdfium_platform_library_name_at_path(p)
    } else {
        p.to_path_buf()
    }
}
