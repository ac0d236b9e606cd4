//! Error types for the uncv library.

use std::io;
use thiserror::Error;

use crate::detect::DetectedFileType;

/// Result type alias for uncv operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during resume extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The uploaded file has zero bytes.
    #[error("File is empty")]
    EmptyFile,

    /// The file is below the minimum viable document size.
    #[error("File is too small to be a readable document ({0} bytes)")]
    TooSmall(usize),

    /// The byte signature does not match an accepted format.
    #[error("Expected a PDF, but this looks like a {0}")]
    InvalidFileType(DetectedFileType),

    /// The document is password-protected.
    #[error("Document is password-protected")]
    Encrypted,

    /// The document container is corrupted or otherwise undecodable.
    #[error("Document could not be decoded: {0}")]
    DecodeFailed(String),

    /// Full-document extraction produced too little text to work with.
    /// Usually an image-only scan with no embedded text layer.
    #[error("Document yielded only {0} characters of text")]
    InsufficientText(usize),

    /// Page number is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),
}

impl Error {
    /// A user-facing remedy for the failure, suitable for display next to
    /// the error message. Per-page failures never reach callers, so every
    /// variant here is a document-level condition with a concrete next step.
    pub fn remedy(&self) -> &'static str {
        match self {
            Error::EmptyFile | Error::TooSmall(_) => {
                "The file looks truncated. Re-export the document and upload it again."
            }
            Error::InvalidFileType(_) => {
                "Only PDF files are accepted. Export the document as a PDF and retry."
            }
            Error::Encrypted => "Remove the password from the document and upload it again.",
            Error::DecodeFailed(_) => {
                "The file appears to be corrupted. Re-export the document and upload it again."
            }
            Error::InsufficientText(_) => {
                "The document has no embedded text layer (likely a scanned image). \
                 Paste the resume text instead."
            }
            Error::Io(_) | Error::PageOutOfRange(..) => "Retry the upload.",
        }
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            other => {
                // Some decoders report encryption only in the message text.
                let msg = other.to_string();
                let lower = msg.to_lowercase();
                if lower.contains("password") || lower.contains("encrypt") {
                    Error::Encrypted
                } else {
                    Error::DecodeFailed(msg)
                }
            }
        }
    }
}
