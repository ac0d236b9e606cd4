//! Document text extraction.
//!
//! [`backend`] isolates the concrete PDF decoder, [`layout`] reconstructs
//! reading-order lines from positioned fragments, and [`extractor`] drives
//! the per-page loop with progress reporting.

mod backend;
mod extractor;
mod layout;

pub use backend::{decode_text_simple, DocumentBackend, LopdfBackend, TextFragment};
pub use extractor::{
    DocumentExtractor, ExtractOptions, ExtractedText, Progress, MIN_EXTRACTED_CHARS,
    PROGRESS_DECODED, PROGRESS_PAGES_DONE, PROGRESS_VALIDATED,
};
pub use layout::{reconstruct_page_text, PageText, DEFAULT_LINE_TOLERANCE};
