//! Reading-order line reconstruction from positioned text fragments.
//!
//! Fragments whose baselines fall within a vertical tolerance band belong to
//! the same visual line; the band absorbs sub-pixel and kerning jitter
//! within one line of horizontally-set text.

use std::cmp::Ordering;

use crate::extract::backend::TextFragment;

/// Default vertical tolerance, in text-space units, for merging fragments
/// into one line. Tuned for typical single-column page layouts; dense
/// tables and multi-column layouts may need a different value, which is why
/// [`crate::ExtractOptions`] exposes it.
pub const DEFAULT_LINE_TOLERANCE: f32 = 5.0;

/// One page's reconstructed text.
#[derive(Debug, Clone, PartialEq)]
pub struct PageText {
    /// Reconstructed text, one reading-order line per `\n`-terminated line.
    pub text: String,
    /// Whether degraded stream-order assembly was used instead of
    /// positional sorting.
    pub degraded: bool,
}

impl PageText {
    fn empty() -> Self {
        Self {
            text: String::new(),
            degraded: false,
        }
    }
}

/// Reconstruct one page's reading-order text from its fragments.
///
/// Fragments are sorted by descending baseline (top of page first), then by
/// ascending horizontal position. A fragment starts a new line when its
/// baseline differs from the current line's reference baseline by more than
/// `tolerance`; otherwise it joins the line with a separating space.
/// Whitespace-only fragments are skipped.
///
/// A coordinate sort is only well-defined over finite positions. When any
/// fragment carries a NaN or infinite coordinate (malformed transform data
/// in the source document), the page degrades to stream-order
/// concatenation: partial text in the original emission order is more
/// useful downstream than no text at all.
pub fn reconstruct_page_text(fragments: &[TextFragment], tolerance: f32) -> PageText {
    let mut frags: Vec<&TextFragment> = fragments
        .iter()
        .filter(|f| !f.text.trim().is_empty())
        .collect();

    if frags.is_empty() {
        return PageText::empty();
    }

    if frags.iter().any(|f| !f.x.is_finite() || !f.y.is_finite()) {
        log::warn!(
            "page has non-finite fragment coordinates; falling back to stream-order text"
        );
        let text = frags
            .iter()
            .map(|f| f.text.trim())
            .collect::<Vec<_>>()
            .join(" ");
        return PageText {
            text,
            degraded: true,
        };
    }

    frags.sort_by(|a, b| {
        b.y.partial_cmp(&a.y)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal))
    });

    let mut out = String::new();
    let mut line: Vec<&TextFragment> = Vec::new();
    let mut reference_y = frags[0].y;

    for frag in frags {
        if (frag.y - reference_y).abs() > tolerance {
            flush_line(&mut out, &mut line);
            reference_y = frag.y;
        }
        line.push(frag);
    }
    flush_line(&mut out, &mut line);

    PageText {
        text: out,
        degraded: false,
    }
}

/// Emit one line. Jittered baselines can leave same-line fragments in
/// y-order, so members are re-sorted left to right before joining.
fn flush_line(out: &mut String, line: &mut Vec<&TextFragment>) {
    if line.is_empty() {
        return;
    }
    line.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));
    for (i, frag) in line.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(frag.text.trim());
    }
    out.push('\n');
    line.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frag(text: &str, x: f32, y: f32) -> TextFragment {
        TextFragment::new(text, x, y)
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(reconstruct_page_text(&[], 5.0), PageText::empty());
    }

    #[test]
    fn test_whitespace_fragments_skipped() {
        let frags = vec![frag("  ", 0.0, 700.0), frag("\t", 10.0, 700.0)];
        assert_eq!(reconstruct_page_text(&frags, 5.0), PageText::empty());
    }

    #[test]
    fn test_single_line_left_to_right() {
        // Out of order horizontally; same baseline.
        let frags = vec![
            frag("Smith", 120.0, 700.0),
            frag("John", 40.0, 700.0),
            frag("A.", 90.0, 700.0),
        ];
        let page = reconstruct_page_text(&frags, 5.0);
        assert_eq!(page.text, "John A. Smith\n");
        assert!(!page.degraded);
    }

    #[test]
    fn test_lines_top_to_bottom() {
        let frags = vec![
            frag("second line", 40.0, 660.0),
            frag("first line", 40.0, 700.0),
        ];
        let page = reconstruct_page_text(&frags, 5.0);
        assert_eq!(page.text, "first line\nsecond line\n");
    }

    #[test]
    fn test_tolerance_boundary_merges_at_exactly_five() {
        // Difference of exactly 5.0 stays on the line; 5.1 splits.
        let merged = reconstruct_page_text(
            &[frag("a", 0.0, 700.0), frag("b", 20.0, 695.0)],
            DEFAULT_LINE_TOLERANCE,
        );
        assert_eq!(merged.text, "a b\n");

        let split = reconstruct_page_text(
            &[frag("a", 0.0, 700.0), frag("b", 20.0, 694.9)],
            DEFAULT_LINE_TOLERANCE,
        );
        assert_eq!(split.text, "a\nb\n");
    }

    #[test]
    fn test_jittered_baseline_stays_on_one_line() {
        let frags = vec![
            frag("alpha", 0.0, 700.0),
            frag("beta", 50.0, 702.0),
            frag("gamma", 100.0, 698.5),
        ];
        let page = reconstruct_page_text(&frags, 5.0);
        assert_eq!(page.text, "alpha beta gamma\n");
    }

    #[test]
    fn test_custom_tolerance() {
        let frags = vec![frag("a", 0.0, 700.0), frag("b", 20.0, 690.0)];
        // Default tolerance splits these...
        assert_eq!(reconstruct_page_text(&frags, 5.0).text, "a\nb\n");
        // ...a wider band merges them.
        assert_eq!(reconstruct_page_text(&frags, 12.0).text, "a b\n");
    }

    #[test]
    fn test_non_finite_coordinates_degrade_to_stream_order() {
        let frags = vec![
            frag("kept", 0.0, f32::NAN),
            frag("in", 10.0, 700.0),
            frag("order", 5.0, 300.0),
        ];
        let page = reconstruct_page_text(&frags, 5.0);
        assert!(page.degraded);
        assert_eq!(page.text, "kept in order");
    }
}
