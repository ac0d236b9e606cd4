//! Section partitioning by heading keywords.
//!
//! A section starts at the first line containing one of its heading
//! keywords (case-insensitive substring match) and collects a bounded
//! number of following lines. English keyword lists only.

use regex::Regex;

/// Heading keywords for the summary/profile section.
pub const SUMMARY_HEADINGS: &[&str] = &["summary", "profile", "about", "overview", "objective"];

/// Heading keywords for the experience section.
pub const EXPERIENCE_HEADINGS: &[&str] =
    &["experience", "work", "employment", "professional", "career"];

/// Heading keywords for the education section.
pub const EDUCATION_HEADINGS: &[&str] =
    &["education", "degree", "university", "college", "school"];

/// Heading keywords for the skills section.
pub const SKILLS_HEADINGS: &[&str] =
    &["skills", "technologies", "tools", "competencies", "technical"];

const SUMMARY_BODY_LINES: usize = 7;
const SUMMARY_MIN_LINE_CHARS: usize = 20;
const SUMMARY_MAX_CHARS: usize = 400;
const SUMMARY_MIN_CHARS: usize = 30;

const EXPERIENCE_MIN_LINE_CHARS: usize = 20;
/// Experience entries are capped to bound downstream prompt size.
pub const MAX_EXPERIENCE_ENTRIES: usize = 10;

const EDUCATION_SCAN_LINES: usize = 10;
const EDUCATION_MIN_LINE_CHARS: usize = 10;

const SKILLS_SCAN_LINES: usize = 8;
const SKILL_MIN_CHARS: usize = 2;
const SKILL_MAX_CHARS: usize = 49;
/// Skills are capped to bound downstream prompt size.
pub const MAX_SKILLS: usize = 20;

/// Index of the first line containing any of the keywords.
fn find_heading(lines: &[&str], keywords: &[&str]) -> Option<usize> {
    lines.iter().position(|line| {
        let lower = line.to_lowercase();
        keywords.iter().any(|keyword| lower.contains(keyword))
    })
}

/// Extract the summary paragraph.
///
/// Joins the substantial lines following the heading and truncates the
/// result; anything shorter than [`SUMMARY_MIN_CHARS`] is judged too short
/// to be meaningful and discarded.
pub(crate) fn summary(lines: &[&str]) -> Option<String> {
    let idx = find_heading(lines, SUMMARY_HEADINGS)?;

    let body: Vec<&str> = lines
        .iter()
        .skip(idx + 1)
        .take(SUMMARY_BODY_LINES)
        .filter(|line| line.chars().count() > SUMMARY_MIN_LINE_CHARS)
        .copied()
        .collect();

    let joined: String = body.join(" ").chars().take(SUMMARY_MAX_CHARS).collect();
    if joined.chars().count() < SUMMARY_MIN_CHARS {
        None
    } else {
        Some(joined)
    }
}

/// Collect experience entries.
///
/// Substantial lines after the heading become entries until the cap is hit
/// or an education/skills line marks the section boundary.
pub(crate) fn experience(lines: &[&str]) -> Vec<String> {
    let Some(idx) = find_heading(lines, EXPERIENCE_HEADINGS) else {
        return Vec::new();
    };

    let mut entries = Vec::new();
    for line in lines.iter().skip(idx + 1) {
        let lower = line.to_lowercase();
        if lower.contains("education") || lower.contains("skills") {
            break;
        }
        if line.chars().count() > EXPERIENCE_MIN_LINE_CHARS {
            entries.push((*line).to_string());
            if entries.len() == MAX_EXPERIENCE_ENTRIES {
                break;
            }
        }
    }
    entries
}

/// Collect education entries: lines near the heading that carry a year or a
/// degree keyword.
pub(crate) fn education(lines: &[&str], year: &Regex) -> Vec<String> {
    let Some(idx) = find_heading(lines, EDUCATION_HEADINGS) else {
        return Vec::new();
    };

    lines
        .iter()
        .skip(idx + 1)
        .take(EDUCATION_SCAN_LINES)
        .filter(|line| line.chars().count() > EDUCATION_MIN_LINE_CHARS)
        .filter(|line| {
            let lower = line.to_lowercase();
            year.is_match(line) || lower.contains("bachelor") || lower.contains("master")
        })
        .map(|line| (*line).to_string())
        .collect()
}

/// Collect skill tokens.
///
/// Lines containing a comma, bullet, or hyphen split on those delimiters;
/// other lines count as one token. Tokens outside the plausible length
/// band are dropped, and the total is capped.
pub(crate) fn skills(lines: &[&str]) -> Vec<String> {
    let Some(idx) = find_heading(lines, SKILLS_HEADINGS) else {
        return Vec::new();
    };

    let mut found = Vec::new();
    for line in lines.iter().skip(idx + 1).take(SKILLS_SCAN_LINES) {
        let tokens: Vec<&str> = if line.contains([',', '•', '-']) {
            line.split([',', '•', '-']).collect()
        } else {
            vec![*line]
        };

        for token in tokens {
            let token = token.trim();
            let len = token.chars().count();
            if (SKILL_MIN_CHARS..=SKILL_MAX_CHARS).contains(&len) {
                found.push(token.to_string());
                if found.len() == MAX_SKILLS {
                    return found;
                }
            }
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year_regex() -> Regex {
        Regex::new(r"\b(19|20)\d{2}\b").unwrap()
    }

    fn lines(text: &str) -> Vec<&str> {
        text.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect()
    }

    #[test]
    fn test_summary_joined_and_short_lines_dropped() {
        let text = "PROFESSIONAL SUMMARY\n\
            Seasoned engineer with a decade of backend work.\n\
            ok\n\
            Shipped large systems in Rust and Go for a living.";
        let result = summary(&lines(text)).unwrap();
        assert_eq!(
            result,
            "Seasoned engineer with a decade of backend work. \
             Shipped large systems in Rust and Go for a living."
        );
    }

    #[test]
    fn test_summary_too_short_is_discarded() {
        let text = "Summary\nGreat coder, ships software";
        assert_eq!(summary(&lines(text)), None);
    }

    #[test]
    fn test_summary_truncated_to_cap() {
        let long_line = "x".repeat(300);
        let text = format!("Overview\n{}\n{}", long_line, long_line);
        let result = summary(&lines(&text)).unwrap();
        assert_eq!(result.chars().count(), 400);
    }

    #[test]
    fn test_summary_missing_heading() {
        assert_eq!(summary(&lines("Jane Public\njane@example.com")), None);
    }

    #[test]
    fn test_experience_stops_at_section_boundary() {
        let text = "WORK EXPERIENCE\n\
            Staff Engineer at Initech building billing\n\
            Led the migration of the settlement pipeline\n\
            EDUCATION\n\
            BS Computer Science, State University 2014";
        let entries = experience(&lines(text));
        assert_eq!(
            entries,
            vec![
                "Staff Engineer at Initech building billing",
                "Led the migration of the settlement pipeline"
            ]
        );
    }

    #[test]
    fn test_experience_caps_entries() {
        let mut text = String::from("EXPERIENCE\n");
        for i in 0..15 {
            text.push_str(&format!("Worked on project number {} for a long time\n", i));
        }
        assert_eq!(experience(&lines(&text)).len(), MAX_EXPERIENCE_ENTRIES);
    }

    #[test]
    fn test_experience_skips_short_lines() {
        let text = "EXPERIENCE\nAcme 2020\nBuilt the flagship analytics product there";
        assert_eq!(
            experience(&lines(text)),
            vec!["Built the flagship analytics product there"]
        );
    }

    #[test]
    fn test_education_year_or_degree_keyword() {
        let text = "EDUCATION\n\
            BS Computer Science, State University 2014\n\
            Some club membership\n\
            Master of Science in Databases\n\
            short one";
        let entries = education(&lines(text), &year_regex());
        assert_eq!(
            entries,
            vec![
                "BS Computer Science, State University 2014",
                "Master of Science in Databases"
            ]
        );
    }

    #[test]
    fn test_education_scan_window_bounded() {
        let mut text = String::from("EDUCATION\n");
        for _ in 0..12 {
            text.push_str("filler line without markers\n");
        }
        text.push_str("PhD from Somewhere 1999\n");
        assert!(education(&lines(&text), &year_regex()).is_empty());
    }

    #[test]
    fn test_skills_split_on_delimiters() {
        let text = "TECHNICAL SKILLS\nPython, Go, Rust\nKubernetes • Terraform";
        assert_eq!(
            skills(&lines(text)),
            vec!["Python", "Go", "Rust", "Kubernetes", "Terraform"]
        );
    }

    #[test]
    fn test_skills_line_without_delimiters_is_one_token() {
        let text = "SKILLS\nDistributed systems";
        assert_eq!(skills(&lines(text)), vec!["Distributed systems"]);
    }

    #[test]
    fn test_skills_capped_at_twenty() {
        let mut text = String::from("SKILLS\n");
        for _ in 0..4 {
            text.push_str("aa, bb, cc, dd, ee, ff, gg, hh\n");
        }
        let found = skills(&lines(&text));
        assert_eq!(found.len(), MAX_SKILLS);
    }

    #[test]
    fn test_skills_token_length_band() {
        let long = "y".repeat(60);
        let text = format!("SKILLS\nx, {}, Rust", long);
        assert_eq!(skills(&lines(&text)), vec!["Rust"]);
    }
}
