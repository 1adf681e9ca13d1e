//! Output types: the per-page text record and the JSON report.
//!
//! [`ExtractionReport`] serialises to exactly the wire shape printed by the
//! `pdf2json` binary:
//!
//! ```text
//! {"status":"ok","pages":[{"page":1,"text":"..."}]}
//! {"status":"error","error":"..."}
//! ```

use crate::error::Pdf2JsonError;
use serde::{Deserialize, Serialize};

/// Text extracted from one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    /// 1-indexed physical page number in the source document.
    pub page: usize,
    /// Extracted text. Never empty: blank pages are omitted, not recorded.
    pub text: String,
}

/// Outcome of one extraction, tagged by `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ExtractionReport {
    /// Every page was read. `pages` is in document order and may be empty.
    Ok { pages: Vec<PageText> },
    /// Something failed; no page data is reported.
    Error { error: String },
}

impl ExtractionReport {
    /// Build an error report from any displayable fault.
    pub fn error(fault: impl std::fmt::Display) -> Self {
        ExtractionReport::Error {
            error: fault.to_string(),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, ExtractionReport::Ok { .. })
    }

    /// The extracted pages, or `None` for an error report.
    pub fn pages(&self) -> Option<&[PageText]> {
        match self {
            ExtractionReport::Ok { pages } => Some(pages),
            ExtractionReport::Error { .. } => None,
        }
    }

    /// Serialise as one line of compact JSON, without the trailing newline.
    ///
    /// Newlines inside page text are escaped by the JSON encoder, so the
    /// result never spans more than one line.
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<Result<Vec<PageText>, Pdf2JsonError>> for ExtractionReport {
    fn from(result: Result<Vec<PageText>, Pdf2JsonError>) -> Self {
        match result {
            Ok(pages) => ExtractionReport::Ok { pages },
            Err(e) => ExtractionReport::error(e),
        }
    }
}
