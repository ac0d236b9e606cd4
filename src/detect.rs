//! File-type detection and upload validation by byte signature.
//!
//! Classification looks only at the leading bytes of the file, so the claimed
//! MIME type and extension are irrelevant: a `.pdf` that starts with a JPEG
//! marker is a JPEG.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Minimum byte length for a plausibly complete document. Anything shorter
/// is treated as truncated regardless of its signature.
pub const MIN_DOCUMENT_BYTES: usize = 100;

const PDF_MAGIC: &[u8] = b"%PDF";
const ZIP_MAGIC: &[u8] = &[0x50, 0x4B];
const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8];
const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47];

/// File type detected from a byte signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectedFileType {
    /// `%PDF`
    Pdf,
    /// `PK`, a ZIP container, which includes Office formats (docx, xlsx).
    ZipOffice,
    /// `FF D8`
    Jpeg,
    /// `89 50 4E 47`
    Png,
    /// No known signature matched.
    Unknown,
}

impl fmt::Display for DetectedFileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DetectedFileType::Pdf => "PDF document",
            DetectedFileType::ZipOffice => "ZIP/Office document",
            DetectedFileType::Jpeg => "JPEG image",
            DetectedFileType::Png => "PNG image",
            DetectedFileType::Unknown => "file of unknown format",
        };
        write!(f, "{}", name)
    }
}

/// Classify leading bytes into a [`DetectedFileType`].
///
/// Pure and infallible: unmatched or short input classifies as
/// [`DetectedFileType::Unknown`]. Signatures are checked in priority order,
/// PDF first.
pub fn classify(bytes: &[u8]) -> DetectedFileType {
    if bytes.starts_with(PDF_MAGIC) {
        DetectedFileType::Pdf
    } else if bytes.starts_with(ZIP_MAGIC) {
        DetectedFileType::ZipOffice
    } else if bytes.starts_with(JPEG_MAGIC) {
        DetectedFileType::Jpeg
    } else if bytes.starts_with(PNG_MAGIC) {
        DetectedFileType::Png
    } else {
        DetectedFileType::Unknown
    }
}

/// Validate an uploaded byte buffer for the PDF-only extraction pipeline.
///
/// Size checks run before classification: a zero-byte buffer is
/// [`Error::EmptyFile`] and anything under [`MIN_DOCUMENT_BYTES`] is
/// [`Error::TooSmall`], even when the signature itself looks valid, since both
/// indicate truncation rather than a wrong format. A non-PDF signature is
/// [`Error::InvalidFileType`] carrying the detected type for the user
/// message.
pub fn validate_bytes(bytes: &[u8]) -> Result<DetectedFileType> {
    if bytes.is_empty() {
        return Err(Error::EmptyFile);
    }
    if bytes.len() < MIN_DOCUMENT_BYTES {
        return Err(Error::TooSmall(bytes.len()));
    }
    match classify(bytes) {
        DetectedFileType::Pdf => Ok(DetectedFileType::Pdf),
        other => Err(Error::InvalidFileType(other)),
    }
}
