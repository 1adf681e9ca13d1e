//! Configuration types for PDF text extraction.
//!
//! Library callers control extraction through [`ExtractionConfig`], built via
//! its [`ExtractionConfigBuilder`]. The `pdf2json` binary always runs with
//! [`ExtractionConfig::default()`]: its only input is the file path.

use crate::error::Pdf2JsonError;
use std::fmt;
use std::path::PathBuf;

/// Configuration for a single text extraction.
///
/// # Example
/// ```rust
/// use edgequake_pdf2json::ExtractionConfig;
///
/// use edgequake_pdf2json::TextCleanup;
///
/// let config = ExtractionConfig::builder()
///     .password("s3cret")
///     .text_cleanup(TextCleanup::Raw)
///     .build()
///     .unwrap();
/// assert_eq!(config.text_cleanup, TextCleanup::Raw);
/// ```
#[derive(Clone)]
pub struct ExtractionConfig {
    /// PDF user password for encrypted documents.
    pub password: Option<String>,

    /// Explicit location of the pdfium shared library.
    ///
    /// When `None`, the engine looks at `PDFIUM_LIB_PATH`, then the current
    /// directory, then the system library search path.
    pub pdfium_lib_path: Option<PathBuf>,

    /// How much of pdfium's raw page text to clean up before deciding
    /// whether the page is empty. Default: [`TextCleanup::Artefacts`].
    pub text_cleanup: TextCleanup,
}

/// Cleanup level applied to each page's text.
///
/// See [`crate::pipeline::postprocess::clean_page_text`] for the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextCleanup {
    /// pdfium's text exactly as returned.
    Raw,
    /// Undo pdfium's own artefacts only: CRLF/CR become LF and the in-band
    /// markers U+0002, U+FFFE and NUL are removed. Everything else, including
    /// joiners and whitespace-only pages, is kept.
    #[default]
    Artefacts,
    /// [`Artefacts`](Self::Artefacts), then drop zero-width spaces, BOMs and
    /// word joiners and trim trailing whitespace. A whitespace-only page ends
    /// up empty and is omitted.
    Tidy,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            password: None,
            pdfium_lib_path: None,
            text_cleanup: TextCleanup::default(),
        }
    }
}

// Hand-written so passwords never end up in logs.
impl fmt::Debug for ExtractionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractionConfig")
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("pdfium_lib_path", &self.pdfium_lib_path)
            .field("text_cleanup", &self.text_cleanup)
            .finish()
    }
}

impl ExtractionConfig {
    /// Create a new builder for `ExtractionConfig`.
    pub fn builder() -> ExtractionConfigBuilder {
        ExtractionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ExtractionConfig`].
#[derive(Debug)]
pub struct ExtractionConfigBuilder {
    config: ExtractionConfig,
}

impl ExtractionConfigBuilder {
    pub fn password(mut self, pwd: impl Into<String>) -> Self {
        self.config.password = Some(pwd.into());
        self
    }

    pub fn pdfium_lib_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.pdfium_lib_path = Some(path.into());
        self
    }

    pub fn text_cleanup(mut self, v: TextCleanup) -> Self {
        self.config.text_cleanup = v;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ExtractionConfig, Pdf2JsonError> {
        let c = &self.config;
        if let Some(ref p) = c.pdfium_lib_path {
            if p.as_os_str().is_empty() {
                return Err(Pdf2JsonError::InvalidConfig(
                    "pdfium_lib_path must not be empty".into(),
                ));
            }
        }
        if c.password.as_deref() == Some("") {
            return Err(Pdf2JsonError::InvalidConfig(
                "password must not be empty; leave it unset instead".into(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = ExtractionConfig::default();
        assert!(c.password.is_none());
        assert!(c.pdfium_lib_path.is_none());
        assert_eq!(c.text_cleanup, TextCleanup::Artefacts);
    }

    #[test]
    fn builder_sets_fields() {
        let c = ExtractionConfig::builder()
            .password("pw")
            .pdfium_lib_path("/opt/pdfium/lib")
            .text_cleanup(TextCleanup::Tidy)
            .build()
            .unwrap();
        assert_eq!(c.password.as_deref(), Some("pw"));
        assert_eq!(c.pdfium_lib_path, Some(PathBuf::from("/opt/pdfium/lib")));
        assert_eq!(c.text_cleanup, TextCleanup::Tidy);
    }

    #[test]
    fn empty_library_path_rejected() {
        let err = ExtractionConfig::builder()
            .pdfium_lib_path("")
            .build()
            .unwrap_err();
        assert!(matches!(err, Pdf2JsonError::InvalidConfig(_)));
    }

    #[test]
    fn empty_password_rejected() {
        assert!(ExtractionConfig::builder().password("").build().is_err());
    }

    #[test]
    fn debug_redacts_password() {
        let c = ExtractionConfig::builder().password("hunter2").build().unwrap();
        let dbg = format!("{c:?}");
        assert!(!dbg.contains("hunter2"));
        assert!(dbg.contains("<redacted>"));
    }
}
