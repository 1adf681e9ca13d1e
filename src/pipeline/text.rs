//! Page iteration and text extraction via pdfium.
//!
//! [`extract_pages_blocking`] is the whole document lifecycle: bind pdfium,
//! open the file, walk the pages in order, pull each page's text layer, and
//! close everything again. `Pdfium`, `PdfDocument` and each `PdfPage` are
//! owned values, so they are released by `Drop` on every exit path, including
//! an early return through `?` when a page fails.
//!
//! The numbering and omission rules live in [`collect_pages`], which knows
//! nothing about pdfium and is unit-tested against plain iterators.

use crate::config::ExtractionConfig;
use crate::error::Pdf2JsonError;
use crate::output::PageText;
use crate::pipeline::{engine, input, postprocess};
use pdfium_render::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// Extract the text of every page of `pdf_path`.
///
/// Blocking: call from a synchronous context or inside `spawn_blocking`.
///
/// # Returns
/// Pages with non-empty text, in document order, numbered by physical
/// position (1-indexed).
pub fn extract_pages_blocking(
    pdf_path: &Path,
    config: &ExtractionConfig,
) -> Result<Vec<PageText>, Pdf2JsonError> {
    let pdfium = engine::bind_pdfium(config.pdfium_lib_path.as_deref())?;
    let password = config.password.as_deref();

    let document = pdfium
        .load_pdf_from_file(pdf_path, password)
        .map_err(|e| map_load_error(pdf_path, password.is_some(), &e))?;

    let pages = document.pages();
    let page_count = pages.len();
    info!("PDF loaded: {} pages", page_count);

    let texts = (0..page_count).map(|index| -> Result<_, Pdf2JsonError> {
        let number = index as usize + 1;
        let page = pages
            .get(index)
            .map_err(|e| Pdf2JsonError::ExtractionFailed {
                page: number,
                detail: format!("{:?}", e),
            })?;
        let raw = page
            .text()
            .map_err(|e| Pdf2JsonError::ExtractionFailed {
                page: number,
                detail: format!("{:?}", e),
            })?
            .all();

        Ok(Some(postprocess::clean_page_text(&raw, config.text_cleanup)))
    });

    collect_pages(texts)
}

/// Number pages from 1 and keep only those that produced text.
///
/// `None` and `Some("")` both mean "no text on this page" and are skipped
/// without consuming an entry in the output; the page number always reflects
/// the physical position. The first `Err` aborts the walk and discards
/// whatever was collected so far.
pub fn collect_pages<I>(page_texts: I) -> Result<Vec<PageText>, Pdf2JsonError>
where
    I: IntoIterator<Item = Result<Option<String>, Pdf2JsonError>>,
{
    let mut pages = Vec::new();

    for (idx, text) in page_texts.into_iter().enumerate() {
        let page = idx + 1;
        match text? {
            Some(text) if !text.is_empty() => {
                debug!("Page {}: {} chars", page, text.chars().count());
                pages.push(PageText { page, text });
            }
            _ => debug!("Page {} has no extractable text; skipping", page),
        }
    }

    Ok(pages)
}

/// Translate a pdfium load failure into the matching error variant.
///
/// Only once pdfium has refused the file is its header consulted, to tell a
/// file that is not a PDF at all from a damaged one.
fn map_load_error(pdf_path: &Path, had_password: bool, e: &PdfiumError) -> Pdf2JsonError {
    let path = pdf_path.to_path_buf();
    match e {
        PdfiumError::PdfiumLibraryInternalError(PdfiumInternalError::PasswordError) => {
            if had_password {
                Pdf2JsonError::WrongPassword { path }
            } else {
                Pdf2JsonError::PasswordRequired { path }
            }
        }
        _ if !input::has_pdf_header(pdf_path) => Pdf2JsonError::NotAPdf { path },
        _ => Pdf2JsonError::CorruptPdf {
            path,
            detail: format!("{:?}", e),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn password_error() -> PdfiumError {
        PdfiumError::PdfiumLibraryInternalError(PdfiumInternalError::PasswordError)
    }

    fn format_error() -> PdfiumError {
        PdfiumError::PdfiumLibraryInternalError(PdfiumInternalError::FormatError)
    }

    fn temp_with(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(bytes).unwrap();
        f
    }

    fn ok(s: &str) -> Result<Option<String>, Pdf2JsonError> {
        Ok(Some(s.to_string()))
    }

    #[test]
    fn blank_page_is_omitted_but_numbering_is_physical() {
        let pages = collect_pages(vec![ok("first"), Ok(None), ok("third")]).unwrap();
        assert_eq!(
            pages,
            vec![
                PageText {
                    page: 1,
                    text: "first".into()
                },
                PageText {
                    page: 3,
                    text: "third".into()
                },
            ]
        );
    }

    #[test]
    fn empty_string_counts_as_no_text() {
        let pages = collect_pages(vec![ok(""), ok("b")]).unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].page, 2);
    }

    #[test]
    fn whitespace_only_text_is_kept() {
        let pages = collect_pages(vec![ok(" ")]).unwrap();
        assert_eq!(pages[0].text, " ");
    }

    #[test]
    fn zero_pages_yields_empty_list() {
        let pages = collect_pages(Vec::new()).unwrap();
        assert!(pages.is_empty());
    }

    #[test]
    fn all_blank_pages_yield_empty_list() {
        let pages = collect_pages(vec![Ok(None), ok(""), Ok(None)]).unwrap();
        assert!(pages.is_empty());
    }

    #[test]
    fn page_failure_discards_collected_pages() {
        let err = collect_pages(vec![
            ok("kept?"),
            Err(Pdf2JsonError::ExtractionFailed {
                page: 2,
                detail: "broken stream".into(),
            }),
            ok("never reached"),
        ])
        .unwrap_err();
        assert!(matches!(err, Pdf2JsonError::ExtractionFailed { page: 2, .. }));
    }

    #[test]
    fn walk_stops_at_first_failure() {
        let mut visited = 0;
        let iter = (1..=5).map(|i| {
            visited += 1;
            if i == 2 {
                Err(Pdf2JsonError::Internal("stop".into()))
            } else {
                Ok(Some(format!("page {i}")))
            }
        });
        assert!(collect_pages(iter).is_err());
        assert_eq!(visited, 2);
    }

    #[test]
    fn page_numbers_strictly_increase() {
        let input = vec![ok("a"), Ok(None), ok("c"), ok("d"), Ok(None), ok("f")];
        let pages = collect_pages(input).unwrap();
        let nums: Vec<usize> = pages.iter().map(|p| p.page).collect();
        assert_eq!(nums, vec![1, 3, 4, 6]);
    }

    #[test]
    fn password_error_without_password_is_password_required() {
        let f = temp_with(b"%PDF-1.7\n");
        let err = map_load_error(f.path(), false, &password_error());
        assert!(matches!(err, Pdf2JsonError::PasswordRequired { .. }), "got {err:?}");
    }

    #[test]
    fn password_error_with_password_is_wrong_password() {
        let f = temp_with(b"%PDF-1.7\n");
        let err = map_load_error(f.path(), true, &password_error());
        assert!(matches!(err, Pdf2JsonError::WrongPassword { .. }), "got {err:?}");
    }

    #[test]
    fn format_error_on_pdf_header_is_corrupt() {
        let f = temp_with(b"%PDF-1.7\n1 0 obj\n<< /Type /Cat");
        for had_password in [false, true] {
            match map_load_error(f.path(), had_password, &format_error()) {
                Pdf2JsonError::CorruptPdf { detail, .. } => {
                    assert!(detail.contains("FormatError"), "got {detail}")
                }
                other => panic!("expected CorruptPdf, got {other:?}"),
            }
        }
    }

    #[test]
    fn format_error_without_header_is_not_a_pdf() {
        let f = temp_with(b"plain text, definitely not a PDF");
        let err = map_load_error(f.path(), false, &format_error());
        assert!(matches!(err, Pdf2JsonError::NotAPdf { .. }), "got {err:?}");
    }

    #[test]
    fn header_behind_leading_bytes_is_corrupt_not_foreign() {
        let f = temp_with(b"\xEF\xBB\xBF%PDF-1.4\ngarbage");
        let err = map_load_error(f.path(), false, &format_error());
        assert!(matches!(err, Pdf2JsonError::CorruptPdf { .. }), "got {err:?}");
    }
}
