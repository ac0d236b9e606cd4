//! # uncv
//!
//! Resume content extraction for Rust.
//!
//! This library turns an uploaded PDF resume into a flat text blob plus a
//! heuristically structured record (name, contact, summary, experience,
//! education, skills) with an advisory confidence score.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> uncv::Result<()> {
//!     let data = std::fs::read("resume.pdf")?;
//!     let result = uncv::extract_bytes(&data)?;
//!
//!     println!("{} ({:.2})", result.resume.name, result.metadata.confidence);
//!     for skill in &result.resume.sections.skills {
//!         println!("- {}", skill);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! 1. **Validate**: byte-signature sniffing rejects empty, truncated, and
//!    non-PDF uploads before any decode attempt.
//! 2. **Extract**: every page's positioned text fragments are reassembled
//!    into reading-order lines; a failing page is logged and skipped.
//! 3. **Structure**: independent heuristic passes partition the flat text
//!    into resume fields.
//! 4. **Score**: a `[0, 1]` confidence estimate of how much was found.
//!
//! Progress can be observed through a callback taking percentages; the
//! delivered sequence is always non-decreasing and ends at 100.

pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod score;
pub mod structure;

pub use detect::{classify, validate_bytes, DetectedFileType, MIN_DOCUMENT_BYTES};
pub use error::{Error, Result};
pub use extract::{
    reconstruct_page_text, DocumentBackend, DocumentExtractor, ExtractOptions, LopdfBackend,
    PageText, Progress, TextFragment, DEFAULT_LINE_TOLERANCE,
};
pub use model::{
    ContactInfo, ExtractionMetadata, ExtractionMethod, ExtractionResult, ResumeSections,
    StructuredResume, DEFAULT_NAME,
};
pub use score::confidence;
pub use structure::ResumeStructurer;

use std::path::Path;

use extract::{ExtractedText, PROGRESS_DECODED, PROGRESS_VALIDATED};

/// Extract a structured resume from in-memory PDF bytes.
///
/// # Example
///
/// ```no_run
/// let data = std::fs::read("resume.pdf").unwrap();
/// let result = uncv::extract_bytes(&data).unwrap();
/// println!("{}", result.resume.name);
/// ```
pub fn extract_bytes(data: &[u8]) -> Result<ExtractionResult> {
    extract_bytes_with_progress(data, &ExtractOptions::default(), |_| {})
}

/// Extract with custom options.
pub fn extract_bytes_with_options(
    data: &[u8],
    options: &ExtractOptions,
) -> Result<ExtractionResult> {
    extract_bytes_with_progress(data, options, |_| {})
}

/// Extract with custom options and a progress observer.
///
/// `on_progress` receives integer percentages: validation completes the
/// 0-25 band, pages fill 25-95, finalization ends at 100. The sequence is
/// strictly increasing per delivery and always terminates at 100 on
/// success.
pub fn extract_bytes_with_progress<F: FnMut(u8)>(
    data: &[u8],
    options: &ExtractOptions,
    on_progress: F,
) -> Result<ExtractionResult> {
    let mut progress = Progress::new(on_progress);

    validate_bytes(data)?;
    progress.report(PROGRESS_VALIDATED);

    let backend = LopdfBackend::load_bytes(data)?;
    progress.report(PROGRESS_DECODED);

    let extractor = DocumentExtractor::with_options(backend, options.clone());
    let extracted = extractor.extract(&mut progress)?;

    let result = assemble_result(extracted);
    progress.report(100);
    Ok(result)
}

/// Extract a structured resume from a PDF file on disk.
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<ExtractionResult> {
    let data = std::fs::read(path)?;
    extract_bytes(&data)
}

/// Structure already-extracted flat text without touching a document.
///
/// Useful for the manual-paste fallback when a document turned out to have
/// no text layer.
pub fn structure_text(text: &str) -> StructuredResume {
    ResumeStructurer::new().structure(text)
}

fn assemble_result(extracted: ExtractedText) -> ExtractionResult {
    let resume = ResumeStructurer::new().structure(&extracted.text);
    let confidence = score::confidence(&extracted.text, &resume);

    let method = if extracted.degraded {
        ExtractionMethod::Fallback
    } else {
        ExtractionMethod::Text
    };

    ExtractionResult {
        text: extracted.text,
        resume,
        metadata: ExtractionMetadata {
            page_count: extracted.page_count,
            failed_pages: extracted.failed_pages,
            method,
            confidence,
        },
    }
}

/// Builder for configuring and running an extraction.
///
/// # Example
///
/// ```no_run
/// let result = uncv::Uncv::new()
///     .with_line_tolerance(6.0)
///     .extract_file("resume.pdf")?;
/// # Ok::<(), uncv::Error>(())
/// ```
pub struct Uncv {
    options: ExtractOptions,
}

impl Uncv {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self {
            options: ExtractOptions::default(),
        }
    }

    /// Set the vertical line-merge tolerance.
    pub fn with_line_tolerance(mut self, tolerance: f32) -> Self {
        self.options = self.options.with_line_tolerance(tolerance);
        self
    }

    /// Set the minimum extracted-text length.
    pub fn with_min_text_chars(mut self, chars: usize) -> Self {
        self.options = self.options.with_min_text_chars(chars);
        self
    }

    /// Run the pipeline over in-memory bytes.
    pub fn extract_bytes(&self, data: &[u8]) -> Result<ExtractionResult> {
        extract_bytes_with_options(data, &self.options)
    }

    /// Run the pipeline over in-memory bytes with a progress observer.
    pub fn extract_bytes_with_progress<F: FnMut(u8)>(
        &self,
        data: &[u8],
        on_progress: F,
    ) -> Result<ExtractionResult> {
        extract_bytes_with_progress(data, &self.options, on_progress)
    }

    /// Run the pipeline over a file on disk.
    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<ExtractionResult> {
        let data = std::fs::read(path)?;
        self.extract_bytes(&data)
    }
}

impl Default for Uncv {
    fn default() -> Self {
        Self::new()
    }
}
