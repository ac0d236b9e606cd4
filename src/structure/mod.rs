//! Heuristic structuring of flat resume text into candidate fields.
//!
//! Every sub-extraction is an independent pass over the same line array, so
//! the passes compose freely and test in isolation. All of them are total:
//! they degrade to defaults (placeholder name, empty sections) instead of
//! failing, because partial structured data beats blocking the pipeline.
//!
//! The heading keyword lists are English-only and assume experience
//! precedes education in the source document. That is a known limitation;
//! behavior for non-English or reordered resumes is undefined.

mod fields;
mod sections;

pub use sections::{
    EDUCATION_HEADINGS, EXPERIENCE_HEADINGS, SKILLS_HEADINGS, SUMMARY_HEADINGS,
};

use regex::Regex;

use crate::model::{ResumeSections, StructuredResume};

/// Structures flat text into a [`StructuredResume`].
///
/// Compiles its patterns once at construction; reusable across calls and
/// deterministic for a given input.
pub struct ResumeStructurer {
    email_regex: Regex,
    phone_regex: Regex,
    year_regex: Regex,
}

impl ResumeStructurer {
    /// Create a structurer with its patterns compiled.
    pub fn new() -> Self {
        Self {
            email_regex: Regex::new(r"[\w.-]+@[\w.-]+\.\w+").unwrap(),
            phone_regex: Regex::new(r"\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}").unwrap(),
            year_regex: Regex::new(r"\b(19|20)\d{2}\b").unwrap(),
        }
    }

    /// Partition `text` into semantic resume fields.
    ///
    /// Pure with respect to the input: the same text always yields the same
    /// record.
    pub fn structure(&self, text: &str) -> StructuredResume {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        StructuredResume {
            name: fields::candidate_name(&lines),
            contact: fields::contact_info(&lines, &self.email_regex, &self.phone_regex),
            sections: ResumeSections {
                summary: sections::summary(&lines),
                experience: sections::experience(&lines),
                education: sections::education(&lines, &self.year_regex),
                skills: sections::skills(&lines),
            },
        }
    }
}

impl Default for ResumeStructurer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DEFAULT_NAME;

    const SAMPLE: &str = "John A. Smith\n\
        john@example.com\n\
        555-123-4567\n\
        \n\
        EXPERIENCE\n\
        Software Engineer at Acme Corp 2019-2022\n\
        Built scalable systems\n\
        \n\
        SKILLS\n\
        Python, Go, Rust";

    #[test]
    fn test_sample_resume() {
        let structurer = ResumeStructurer::new();
        let resume = structurer.structure(SAMPLE);

        assert_eq!(resume.name, "John A. Smith");
        assert_eq!(resume.contact.email.as_deref(), Some("john@example.com"));
        assert_eq!(resume.contact.phone.as_deref(), Some("555-123-4567"));
        assert_eq!(
            resume.sections.experience,
            vec![
                "Software Engineer at Acme Corp 2019-2022",
                "Built scalable systems"
            ]
        );
        assert_eq!(resume.sections.skills, vec!["Python", "Go", "Rust"]);
    }

    #[test]
    fn test_structure_is_deterministic() {
        let structurer = ResumeStructurer::new();
        let first = structurer.structure(SAMPLE);
        let second = structurer.structure(SAMPLE);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_text_degrades_to_defaults() {
        let structurer = ResumeStructurer::new();
        let resume = structurer.structure("");
        assert_eq!(resume.name, DEFAULT_NAME);
        assert!(resume.is_bare());
    }

    #[test]
    fn test_unstructured_prose_never_fails() {
        let structurer = ResumeStructurer::new();
        let resume =
            structurer.structure("just one very ordinary paragraph with nothing resume-like in");
        assert!(resume.sections.experience.is_empty());
        assert!(resume.sections.skills.is_empty());
    }
}
