//! Post-processing: deterministic cleanup of pdfium's raw page text.
//!
//! pdfium's text layer is faithful to the content stream but carries a few
//! artefacts of its own that make no sense in plain text:
//!
//! - Windows-style `\r\n` line endings on every platform
//! - In-band markers: U+0002 for a hyphen at a line break, U+FFFE for a soft
//!   hyphen, stray NULs from broken ToUnicode maps
//!
//! Those are removed at the default [`TextCleanup::Artefacts`] level. The
//! opt-in [`TextCleanup::Tidy`] level also drops invisible characters copied
//! from the source (zero-width space, BOM, word joiner) and trailing
//! whitespace. ZWJ and ZWNJ are never touched: they shape Indic and Persian
//! script and emoji sequences.
//!
//! Each rule is a pure `&str → String` function. A page whose text is empty
//! after cleanup is treated as blank by [`crate::pipeline::text::collect_pages`].
//!
//! ## Rule Order
//!
//! Line endings are normalised first so the per-line trimming regex only has
//! to deal with `\n`.

use crate::config::TextCleanup;
use once_cell::sync::Lazy;
use regex::Regex;

/// Apply the post-processing rules for `level` to the raw page text.
///
/// Rules (applied in order):
/// 1. Normalise line endings (CRLF / CR → LF)
/// 2. Remove pdfium control markers
/// 3. *Tidy only:* remove invisible formatting characters
/// 4. *Tidy only:* trim trailing whitespace per line
/// 5. *Tidy only:* drop trailing blank lines
pub fn clean_page_text(input: &str, level: TextCleanup) -> String {
    match level {
        TextCleanup::Raw => input.to_string(),
        TextCleanup::Artefacts => remove_control_markers(&normalise_line_endings(input)),
        TextCleanup::Tidy => {
            let s = normalise_line_endings(input);
            let s = remove_control_markers(&s);
            let s = remove_invisible_chars(&s);
            let s = trim_trailing_whitespace(&s);
            trim_trailing_newlines(&s)
        }
    }
}

// ── Rule 1: Normalise line endings ───────────────────────────────────────────

fn normalise_line_endings(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

// ── Rule 2: Remove pdfium control markers ────────────────────────────────────

fn remove_control_markers(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, '\u{0000}' | '\u{0002}' | '\u{FFFE}'))
        .collect()
}

// ── Rule 3: Remove invisible formatting characters ───────────────────────────

fn remove_invisible_chars(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, '\u{200B}' | '\u{FEFF}' | '\u{2060}'))
        .collect()
}

// ── Rule 4: Trim trailing whitespace per line ────────────────────────────────

static RE_TRAILING_WS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)[ \t\u{00A0}]+$").expect("valid regex"));

fn trim_trailing_whitespace(input: &str) -> String {
    RE_TRAILING_WS.replace_all(input, "").into_owned()
}

// ── Rule 5: Drop trailing blank lines ────────────────────────────────────────

fn trim_trailing_newlines(input: &str) -> String {
    input.trim_end_matches('\n').to_string()
}

// ── Tests ────────────────────────────────────────────────────────────────────
