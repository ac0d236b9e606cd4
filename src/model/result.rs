//! The externally visible extraction artifact.

use serde::{Deserialize, Serialize};

use super::StructuredResume;

/// How the flat text was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMethod {
    /// Positioned-fragment extraction with reading-order line assembly.
    Text,
    /// Optical recognition. Defined for the data model; this crate never
    /// produces it; no inference is in scope.
    Ocr,
    /// At least one page fell back to stream-order concatenation.
    Fallback,
}

/// Bookkeeping attached to an [`ExtractionResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionMetadata {
    /// Total pages in the document.
    pub page_count: u32,

    /// Pages skipped after a page-level decode failure.
    pub failed_pages: u32,

    /// How the text was obtained.
    pub method: ExtractionMethod,

    /// Heuristic quality score in `[0, 1]`. Advisory only.
    pub confidence: f32,
}

/// Result of one extraction call. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Flat, trimmed, NFC-normalized text of the whole document.
    pub text: String,

    /// Heuristically structured fields.
    pub resume: StructuredResume,

    /// Extraction bookkeeping.
    pub metadata: ExtractionMetadata,
}
