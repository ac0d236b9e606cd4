//! Candidate name and contact extraction.

use regex::Regex;

use crate::model::{ContactInfo, DEFAULT_NAME};

/// How far down the document a header-style name can plausibly sit.
const NAME_SCAN_LINES: usize = 5;

/// How far down contact details are searched for.
const CONTACT_SCAN_LINES: usize = 15;

/// Pick the candidate name from the first few lines.
///
/// Assumes a header-style resume with the name near the top in title-like
/// format: a short line of 2-4 words that is not an address, a link, a
/// document label, or a separator-delimited contact row. Falls back to
/// [`DEFAULT_NAME`] so the field is never empty.
pub(crate) fn candidate_name(lines: &[&str]) -> String {
    lines
        .iter()
        .take(NAME_SCAN_LINES)
        .find(|line| looks_like_name(line))
        .map(|line| (*line).to_string())
        .unwrap_or_else(|| DEFAULT_NAME.to_string())
}

fn looks_like_name(line: &str) -> bool {
    let len = line.chars().count();
    if len == 0 || len >= 100 {
        return false;
    }
    if line.contains('@') || line.contains('|') {
        return false;
    }
    let lower = line.to_lowercase();
    if lower.contains("http") || lower.contains("resume") || lower.contains("cv") {
        return false;
    }
    if line.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    let words = line.split_whitespace().count();
    (2..=4).contains(&words)
}

/// Scan the top of the document for contact details.
///
/// First match of each pattern wins; later occurrences are ignored.
pub(crate) fn contact_info(lines: &[&str], email: &Regex, phone: &Regex) -> ContactInfo {
    let mut contact = ContactInfo::default();

    for line in lines.iter().take(CONTACT_SCAN_LINES) {
        if contact.email.is_none() {
            if let Some(m) = email.find(line) {
                contact.email = Some(m.as_str().to_string());
            }
        }
        if contact.phone.is_none() {
            if let Some(m) = phone.find(line) {
                contact.phone = Some(m.as_str().to_string());
            }
        }
        if contact.email.is_some() && contact.phone.is_some() {
            break;
        }
    }

    contact
}
