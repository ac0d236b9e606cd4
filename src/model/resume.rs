//! Structured resume record derived from flat extracted text.

use serde::{Deserialize, Serialize};

/// Placeholder used when no candidate name could be found near the top of
/// the document. Downstream consumers rely on `name` never being empty.
pub const DEFAULT_NAME: &str = "Professional";

/// Heuristically extracted resume fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredResume {
    /// Candidate name, or [`DEFAULT_NAME`] when none was found.
    pub name: String,

    /// Contact details found near the top of the document.
    pub contact: ContactInfo,

    /// Partitioned section content.
    pub sections: ResumeSections,
}

impl StructuredResume {
    /// Whether the name field still holds the placeholder.
    pub fn has_placeholder_name(&self) -> bool {
        self.name == DEFAULT_NAME
    }

    /// Whether any section was populated at all.
    pub fn is_bare(&self) -> bool {
        self.has_placeholder_name()
            && self.contact.email.is_none()
            && self.contact.phone.is_none()
            && self.sections.is_empty()
    }
}

impl Default for StructuredResume {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            contact: ContactInfo::default(),
            sections: ResumeSections::default(),
        }
    }
}

/// Contact information. First match of each pattern wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// First email-shaped token found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// First US-style phone number found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Section content partitioned by heading keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeSections {
    /// Joined summary/profile paragraph, when long enough to be meaningful.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Experience entries, one line each, capped to bound prompt size.
    pub experience: Vec<String>,

    /// Education entries containing a year or a degree keyword.
    pub education: Vec<String>,

    /// Individual skill tokens, capped to bound prompt size.
    pub skills: Vec<String>,
}

impl ResumeSections {
    /// Whether every section came back empty.
    pub fn is_empty(&self) -> bool {
        self.summary.is_none()
            && self.experience.is_empty()
            && self.education.is_empty()
            && self.skills.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resume_has_placeholder_name() {
        let resume = StructuredResume::default();
        assert_eq!(resume.name, "Professional");
        assert!(resume.has_placeholder_name());
        assert!(resume.is_bare());
    }

    #[test]
    fn test_bare_detection() {
        let mut resume = StructuredResume::default();
        resume.sections.skills.push("Rust".to_string());
        assert!(!resume.is_bare());
    }

    #[test]
    fn test_serde_round_trip() {
        let resume = StructuredResume {
            name: "Jane Q. Public".to_string(),
            contact: ContactInfo {
                email: Some("jane@example.com".to_string()),
                phone: None,
            },
            sections: ResumeSections {
                summary: None,
                experience: vec!["Principal Engineer at Initech".to_string()],
                education: vec![],
                skills: vec!["Rust".to_string(), "Go".to_string()],
            },
        };

        let json = serde_json::to_string(&resume).unwrap();
        let back: StructuredResume = serde_json::from_str(&json).unwrap();
        assert_eq!(back, resume);
        // Absent optionals are omitted from the wire form entirely.
        assert!(!json.contains("phone"));
    }
}
