//! Confidence scoring for structured extraction results.
//!
//! The score is advisory: the UI uses it to decide whether to ask the user
//! to verify extracted fields. It never gates the pipeline.

use crate::model::StructuredResume;

/// Floor for any result, however bare.
const BASE_SCORE: f32 = 0.3;

/// Compute a heuristic quality score in `[0, 1]`.
///
/// Additive over which fields were actually populated, with small bonuses
/// for longer source text (more text generally means the heuristics had
/// real sections to work with). Both length bonuses can apply at once.
pub fn confidence(raw_text: &str, resume: &StructuredResume) -> f32 {
    let mut score = BASE_SCORE;

    if !resume.has_placeholder_name() {
        score += 0.2;
    }
    if resume.contact.email.is_some() {
        score += 0.1;
    }
    if resume.contact.phone.is_some() {
        score += 0.1;
    }
    if !resume.sections.experience.is_empty() {
        score += 0.2;
    }
    if !resume.sections.skills.is_empty() {
        score += 0.1;
    }
    if !resume.sections.education.is_empty() {
        score += 0.1;
    }

    let len = raw_text.chars().count();
    if len > 300 {
        score += 0.1;
    }
    if len > 1000 {
        score += 0.1;
    }

    score.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContactInfo, ResumeSections};

    fn populated() -> StructuredResume {
        StructuredResume {
            name: "Jane Q. Public".to_string(),
            contact: ContactInfo {
                email: Some("jane@example.com".to_string()),
                phone: Some("555-123-4567".to_string()),
            },
            sections: ResumeSections {
                summary: Some("A decade of backend work on billing systems.".to_string()),
                experience: vec!["Staff Engineer at Initech".to_string()],
                education: vec!["BS Computer Science 2014".to_string()],
                skills: vec!["Rust".to_string()],
            },
        }
    }

    #[test]
    fn test_baseline_is_base_score() {
        let score = confidence("", &StructuredResume::default());
        assert!((score - BASE_SCORE).abs() < f32::EPSILON);
    }

    #[test]
    fn test_fully_populated_clamps_to_one() {
        let text = "x".repeat(2000);
        let score = confidence(&text, &populated());
        assert!((score - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_populated_beats_baseline() {
        let baseline = confidence("short", &StructuredResume::default());
        let full = confidence("short", &populated());
        assert!(full > baseline);
    }

    #[test]
    fn test_length_bonuses_are_additive() {
        let resume = StructuredResume::default();
        let short = confidence(&"x".repeat(100), &resume);
        let medium = confidence(&"x".repeat(500), &resume);
        let long = confidence(&"x".repeat(1500), &resume);
        assert!((medium - short - 0.1).abs() < 1e-6);
        assert!((long - short - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_score_always_in_unit_interval() {
        for text_len in [0usize, 10, 400, 5000] {
            let text = "x".repeat(text_len);
            for resume in [StructuredResume::default(), populated()] {
                let score = confidence(&text, &resume);
                assert!((0.0..=1.0).contains(&score));
            }
        }
    }
}
