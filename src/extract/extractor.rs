//! Document-level extraction: the per-page loop with progress reporting.

use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};
use crate::extract::backend::DocumentBackend;
use crate::extract::layout::{reconstruct_page_text, DEFAULT_LINE_TOLERANCE};

/// Minimum characters of extracted text for the document to count as
/// text-bearing. Below this the document is likely an image-only scan.
pub const MIN_EXTRACTED_CHARS: usize = 10;

/// Progress value reported after byte validation.
pub const PROGRESS_VALIDATED: u8 = 10;
/// Progress value reported after the document container decodes.
pub const PROGRESS_DECODED: u8 = 25;
/// Progress value reported after the last page; finalization takes 95-100.
pub const PROGRESS_PAGES_DONE: u8 = 95;

/// Options for document extraction.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Vertical tolerance for merging fragments into one line.
    pub line_tolerance: f32,

    /// Minimum extracted characters before the document is rejected as
    /// [`Error::InsufficientText`].
    pub min_text_chars: usize,
}

impl ExtractOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line-merge vertical tolerance.
    pub fn with_line_tolerance(mut self, tolerance: f32) -> Self {
        self.line_tolerance = tolerance;
        self
    }

    /// Set the minimum extracted-text length.
    pub fn with_min_text_chars(mut self, chars: usize) -> Self {
        self.min_text_chars = chars;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            line_tolerance: DEFAULT_LINE_TOLERANCE,
            min_text_chars: MIN_EXTRACTED_CHARS,
        }
    }
}

/// Monotonic progress reporter.
///
/// Wraps a caller-supplied callback and guarantees the delivered sequence
/// is non-decreasing and capped at 100, regardless of interpolation
/// rounding at the call sites. Callbacks are synchronous best-effort
/// notifications; the reporter never blocks extraction.
pub struct Progress<F: FnMut(u8)> {
    callback: F,
    last: u8,
}

impl<F: FnMut(u8)> Progress<F> {
    /// Wrap a callback.
    pub fn new(callback: F) -> Self {
        Self { callback, last: 0 }
    }

    /// Report a percentage. Values at or below the previous report are
    /// dropped.
    pub fn report(&mut self, pct: u8) {
        let pct = pct.min(100);
        if pct > self.last {
            self.last = pct;
            (self.callback)(pct);
        }
    }
}

/// Flat text for a whole document, plus bookkeeping for result metadata.
#[derive(Debug, Clone)]
pub struct ExtractedText {
    /// Trimmed, NFC-normalized text.
    pub text: String,
    /// Total pages in the document.
    pub page_count: u32,
    /// Pages skipped after a page-level failure.
    pub failed_pages: u32,
    /// Whether any page used degraded stream-order assembly.
    pub degraded: bool,
}

/// Drives per-page extraction over a [`DocumentBackend`].
///
/// Pages are processed strictly in order so progress stays monotonic and a
/// failure on one page cannot interleave with another. Stateless across
/// calls; safe to reuse.
pub struct DocumentExtractor<B: DocumentBackend> {
    backend: B,
    options: ExtractOptions,
}

impl<B: DocumentBackend> DocumentExtractor<B> {
    /// Create an extractor with default options.
    pub fn new(backend: B) -> Self {
        Self::with_options(backend, ExtractOptions::default())
    }

    /// Create an extractor with custom options.
    pub fn with_options(backend: B, options: ExtractOptions) -> Self {
        Self { backend, options }
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Extract the whole document into one flat text blob.
    ///
    /// A failure on a single page is logged and skipped: partial
    /// extraction is preferred over total failure. Progress is interpolated
    /// over 25-95 proportional to pages completed. After the final trim,
    /// text shorter than the configured minimum fails with
    /// [`Error::InsufficientText`].
    pub fn extract<F: FnMut(u8)>(&self, progress: &mut Progress<F>) -> Result<ExtractedText> {
        let page_numbers = self.backend.page_numbers();
        let page_count = page_numbers.len() as u32;

        let mut text = String::new();
        let mut failed_pages = 0u32;
        let mut degraded = false;

        for (done, page_num) in page_numbers.iter().enumerate() {
            match self.backend.page_fragments(*page_num) {
                Ok(fragments) => {
                    let page = reconstruct_page_text(&fragments, self.options.line_tolerance);
                    degraded |= page.degraded;
                    if !page.text.is_empty() {
                        text.push_str(&page.text);
                        text.push('\n');
                    }
                }
                Err(e) => {
                    failed_pages += 1;
                    log::warn!("skipping page {}: {}", page_num, e);
                }
            }

            let span = f32::from(PROGRESS_PAGES_DONE - PROGRESS_DECODED);
            let pct = f32::from(PROGRESS_DECODED)
                + span * (done + 1) as f32 / page_count.max(1) as f32;
            progress.report(pct.round() as u8);
        }

        let text: String = text.trim().nfc().collect();
        progress.report(PROGRESS_PAGES_DONE);

        let char_count = text.chars().count();
        if char_count < self.options.min_text_chars {
            return Err(Error::InsufficientText(char_count));
        }

        Ok(ExtractedText {
            text,
            page_count,
            failed_pages,
            degraded,
        })
    }
}
