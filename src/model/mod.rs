//! Data model for extraction results.

mod result;
mod resume;

pub use result::{ExtractionMetadata, ExtractionMethod, ExtractionResult};
pub use resume::{ContactInfo, ResumeSections, StructuredResume, DEFAULT_NAME};
