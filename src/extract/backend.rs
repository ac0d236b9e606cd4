//! Document backend abstraction.
//!
//! Provides a trait-based interface for document access, isolating the
//! concrete PDF library (lopdf) from the line-assembly and structuring
//! logic. Tests substitute in-memory backends.

use lopdf::{Document as LopdfDocument, Object};

use crate::error::{Error, Result};

/// One positioned run of characters decoded from a page.
///
/// `x` grows rightward, `y` is the text baseline growing upward (PDF text
/// space). Lifetime is bounded to a single page's processing.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFragment {
    /// Decoded text content.
    pub text: String,
    /// Horizontal coordinate of the fragment start.
    pub x: f32,
    /// Vertical (baseline) coordinate.
    pub y: f32,
}

impl TextFragment {
    /// Create a fragment at a position.
    pub fn new(text: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
        }
    }
}

/// Abstract interface for a decoded document.
///
/// The production implementation is [`LopdfBackend`]; integration tests use
/// mock implementations to exercise page-level failure policies.
pub trait DocumentBackend {
    /// Total number of pages.
    fn page_count(&self) -> u32;

    /// Page numbers in reading order (1-indexed, ascending).
    fn page_numbers(&self) -> Vec<u32>;

    /// Positioned text fragments for one page.
    fn page_fragments(&self, page_num: u32) -> Result<Vec<TextFragment>>;
}

/// Simple text decoding fallback when no font encoding is available.
pub fn decode_text_simple(bytes: &[u8]) -> String {
    // UTF-16BE with BOM
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks(2)
            .filter_map(|c| {
                if c.len() == 2 {
                    Some(u16::from_be_bytes([c[0], c[1]]))
                } else {
                    None
                }
            })
            .collect();
        return String::from_utf16(&utf16).unwrap_or_default();
    }

    if let Ok(s) = String::from_utf8(bytes.to_vec()) {
        return s;
    }

    // Latin-1
    bytes.iter().map(|&b| b as char).collect()
}

// ---------------------------------------------------------------------------
// LopdfBackend: concrete implementation backed by lopdf
// ---------------------------------------------------------------------------

/// Concrete [`DocumentBackend`] backed by `lopdf::Document`.
pub struct LopdfBackend {
    doc: LopdfDocument,
}

impl LopdfBackend {
    /// Load from an in-memory byte slice.
    ///
    /// Decryption failures map to [`Error::Encrypted`]; any other load
    /// failure maps to [`Error::DecodeFailed`] with the decoder's message.
    /// A document that loads but is still flagged encrypted is also
    /// rejected, since its content streams would decode to garbage.
    pub fn load_bytes(data: &[u8]) -> Result<Self> {
        let doc = LopdfDocument::load_mem(data).map_err(Error::from)?;
        if doc.is_encrypted() {
            return Err(Error::Encrypted);
        }
        Ok(Self { doc })
    }

    /// Load from a file path.
    pub fn load_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let doc = LopdfDocument::load(path).map_err(Error::from)?;
        if doc.is_encrypted() {
            return Err(Error::Encrypted);
        }
        Ok(Self { doc })
    }

    /// PDF version string of the loaded document.
    pub fn version(&self) -> String {
        self.doc.version.to_string()
    }

    /// Raw (decompressed) content stream bytes for a page.
    fn page_content(&self, page_id: (u32, u16)) -> Result<Vec<u8>> {
        let page_dict = self
            .doc
            .get_dictionary(page_id)
            .map_err(|e| Error::DecodeFailed(e.to_string()))?;

        let contents = page_dict
            .get(b"Contents")
            .map_err(|e| Error::DecodeFailed(e.to_string()))?;

        match contents {
            Object::Reference(r) => {
                if let Ok(Object::Stream(s)) = self.doc.get_object(*r) {
                    return s
                        .get_plain_content()
                        .map_err(|e| Error::DecodeFailed(e.to_string()));
                }
                Err(Error::DecodeFailed("Invalid content stream".to_string()))
            }
            Object::Array(arr) => {
                let mut content = Vec::new();
                for obj in arr {
                    if let Object::Reference(r) = obj {
                        if let Ok(Object::Stream(s)) = self.doc.get_object(*r) {
                            if let Ok(data) = s.get_plain_content() {
                                content.extend_from_slice(&data);
                                content.push(b' ');
                            }
                        }
                    }
                }
                Ok(content)
            }
            _ => Err(Error::DecodeFailed("Invalid content stream".to_string())),
        }
    }

    /// Decode a text byte sequence using the named font's encoding on the
    /// given page, falling back to [`decode_text_simple`].
    fn decode_text(&self, page_id: (u32, u16), font_name: &[u8], bytes: &[u8]) -> String {
        if let Ok(fonts) = self.doc.get_page_fonts(page_id) {
            if let Some(font_dict) = fonts.get(font_name) {
                if let Ok(enc) = font_dict.get_font_encoding(&self.doc) {
                    if let Ok(text) = LopdfDocument::decode_text(&enc, bytes) {
                        return text;
                    }
                }
            }
        }
        decode_text_simple(bytes)
    }
}

impl DocumentBackend for LopdfBackend {
    fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    fn page_numbers(&self) -> Vec<u32> {
        self.doc.get_pages().keys().copied().collect()
    }

    fn page_fragments(&self, page_num: u32) -> Result<Vec<TextFragment>> {
        let pages = self.doc.get_pages();
        let page_id = *pages
            .get(&page_num)
            .ok_or(Error::PageOutOfRange(page_num, pages.len() as u32))?;

        let content = self.page_content(page_id)?;
        let content = lopdf::content::Content::decode(&content)
            .map_err(|e| Error::DecodeFailed(e.to_string()))?;

        let mut fragments = Vec::new();
        let mut current_font: Vec<u8> = Vec::new();
        let mut matrix = TextMatrix::default();
        let mut in_text_block = false;

        for op in content.operations {
            match op.operator.as_str() {
                "BT" => {
                    in_text_block = true;
                    matrix = TextMatrix::default();
                }
                "ET" => {
                    in_text_block = false;
                }
                "Tf" => {
                    if let Some(Object::Name(font_name)) = op.operands.first() {
                        current_font = font_name.clone();
                    }
                }
                "Td" | "TD" => {
                    if op.operands.len() >= 2 {
                        let tx = get_number(&op.operands[0]).unwrap_or(0.0);
                        let ty = get_number(&op.operands[1]).unwrap_or(0.0);
                        matrix.translate(tx, ty);
                    }
                }
                "Tm" => {
                    if op.operands.len() >= 6 {
                        matrix.set(
                            get_number(&op.operands[0]).unwrap_or(1.0),
                            get_number(&op.operands[1]).unwrap_or(0.0),
                            get_number(&op.operands[2]).unwrap_or(0.0),
                            get_number(&op.operands[3]).unwrap_or(1.0),
                            get_number(&op.operands[4]).unwrap_or(0.0),
                            get_number(&op.operands[5]).unwrap_or(0.0),
                        );
                    }
                }
                "T*" => {
                    matrix.next_line();
                }
                "Tj" | "TJ" => {
                    if !in_text_block {
                        continue;
                    }
                    let text = if op.operator == "TJ" {
                        self.decode_tj_array(page_id, &current_font, op.operands.first())
                    } else if let Some(Object::String(bytes, _)) = op.operands.first() {
                        self.decode_text(page_id, &current_font, bytes)
                    } else {
                        String::new()
                    };

                    if !text.trim().is_empty() {
                        let (x, y) = matrix.position();
                        fragments.push(TextFragment::new(text, x, y));
                    }
                }
                "'" | "\"" => {
                    matrix.next_line();
                    if !in_text_block {
                        continue;
                    }
                    let text_idx = if op.operator == "\"" { 2 } else { 0 };
                    if let Some(Object::String(bytes, _)) = op.operands.get(text_idx) {
                        let text = self.decode_text(page_id, &current_font, bytes);
                        if !text.trim().is_empty() {
                            let (x, y) = matrix.position();
                            fragments.push(TextFragment::new(text, x, y));
                        }
                    }
                }
                _ => {}
            }
        }

        Ok(fragments)
    }
}

impl LopdfBackend {
    /// Decode a `TJ` operand: an array of strings interleaved with kerning
    /// adjustments in 1/1000 text-space units. Large negative adjustments
    /// are word breaks.
    fn decode_tj_array(
        &self,
        page_id: (u32, u16),
        font_name: &[u8],
        operand: Option<&Object>,
    ) -> String {
        let Some(Object::Array(arr)) = operand else {
            return String::new();
        };

        // 200 units ≈ a word space for most fonts.
        const SPACE_THRESHOLD: f32 = 200.0;

        let mut combined = String::new();
        for item in arr {
            match item {
                Object::String(bytes, _) => {
                    combined.push_str(&self.decode_text(page_id, font_name, bytes));
                }
                Object::Integer(n) => {
                    let adjustment = -(*n as f32);
                    if adjustment > SPACE_THRESHOLD
                        && !combined.is_empty()
                        && !combined.ends_with(' ')
                    {
                        combined.push(' ');
                    }
                }
                Object::Real(n) => {
                    let adjustment = -n;
                    if adjustment > SPACE_THRESHOLD
                        && !combined.is_empty()
                        && !combined.ends_with(' ')
                    {
                        combined.push(' ');
                    }
                }
                _ => {}
            }
        }
        combined
    }
}

/// Text matrix for tracking position in a content stream.
#[derive(Debug, Clone)]
struct TextMatrix {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32, // X translation
    f: f32, // Y translation
}

impl Default for TextMatrix {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }
}

impl TextMatrix {
    fn set(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) {
        self.a = a;
        self.b = b;
        self.c = c;
        self.d = d;
        self.e = e;
        self.f = f;
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.e += tx * self.a + ty * self.c;
        self.f += tx * self.b + ty * self.d;
    }

    fn next_line(&mut self) {
        // Default leading; a TL operator would override this, but resumes
        // set positions with Td/Tm almost exclusively.
        self.f -= 12.0 * self.d;
    }

    fn position(&self) -> (f32, f32) {
        (self.e, self.f)
    }
}

/// Helper to extract a number from a PDF object.
fn get_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}
