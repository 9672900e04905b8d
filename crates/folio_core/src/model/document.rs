//! Portfolio document types.
//!
//! # Responsibility
//! - Define the canonical serde shapes for profile, projects and the
//!   optional academic sections.
//! - Provide the built-in fallback document and the placeholder entry used
//!   when a new project is added.
//!
//! # Invariants
//! - `Contact` and `ProjectLinks` carry a fixed key set; only values change.
//! - Optional sections serialize only when present, so documents that never
//!   used them round-trip without gaining keys.
//! - No field is validated beyond type coercion; free-text stays free.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a list-of-object entry (project, internship,
/// certification) during an editing session.
///
/// Minted at session entry and on insertion, never serialized: the storage
/// format keeps entries ordered by position, identity exists only in memory.
pub type EntryId = Uuid;

/// Fallback reference shown when a project has no usable image.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/300x200";

/// Root aggregate loaded, edited and saved as a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub profile: Profile,
    pub projects: Vec<Project>,
    /// Academic variant: skills with a proficiency level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<SkillDetail>>,
    /// Academic variant: internship history.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internships: Option<Vec<Internship>>,
    /// Academic variant: earned certifications.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Vec<Certification>>,
}

/// Identity block: who the portfolio belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub about: String,
    /// Set-like: display order, duplicates suppressed on append.
    pub skills: Vec<String>,
    pub contact: Contact,
    /// Academic variant: university block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Education>,
}

/// Contact channels. Fixed key set; an empty value means "not shown".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub email: String,
    pub github: String,
    pub linkedin: String,
    /// Present only in documents that ever carried a phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// One portfolio project. Entries are distinguished by content, not
/// equality: duplicates are permitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Set-like: display order, duplicates suppressed on append.
    pub technologies: Vec<String>,
    /// Local image path; empty means no image.
    pub image: String,
    pub links: ProjectLinks,
    /// Free-form display string, never parsed.
    pub date: String,
    pub featured: bool,
}

/// Outbound project links. Fixed key set; empty means "not shown".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinks {
    pub demo: String,
    pub code: String,
}

/// Skill with proficiency, rendered as a level bar in the academic variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDetail {
    pub name: String,
    /// 0-100.
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Internship {
    pub company: String,
    pub role: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub year: String,
}

/// University block shown by the academic variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub university: String,
    pub degree: String,
    pub year: String,
}

impl Project {
    /// Default-initialized project inserted by "add new project".
    ///
    /// The caller supplies the date string; the core carries no clock.
    pub fn placeholder(date: impl Into<String>) -> Self {
        Self {
            title: "New Project".to_string(),
            description: "Project description...".to_string(),
            technologies: Vec::new(),
            image: String::new(),
            links: ProjectLinks {
                demo: String::new(),
                code: String::new(),
            },
            date: date.into(),
            featured: false,
        }
    }

    /// Image reference for the render path: the stored path, or the
    /// placeholder when no image is set. Never fails.
    pub fn image_or_placeholder(&self) -> &str {
        if self.image.is_empty() {
            PLACEHOLDER_IMAGE_URL
        } else {
            self.image.as_str()
        }
    }
}

/// Built-in document substituted when storage is missing or unreadable.
///
/// # Invariants
/// - Field values match the original seed document so a first run renders
///   real content instead of an empty page.
/// - Optional academic sections start absent.
pub fn default_document() -> Document {
    Document {
        profile: Profile {
            name: "Kanhaiya Bhatt".to_string(),
            title: "Software Developer".to_string(),
            about: "Passionate coder building amazing projects...".to_string(),
            skills: vec![
                "Python".to_string(),
                "JavaScript".to_string(),
                "React".to_string(),
                "SQL".to_string(),
            ],
            contact: Contact {
                email: "kanhaiyabhatt9528@gmail.com".to_string(),
                github: "https://github.com/kanz9528".to_string(),
                linkedin: "kanhaiya-bhatt-03944a323".to_string(),
                phone: None,
            },
            education: None,
        },
        projects: vec![Project {
            title: "Housing Price Prediction".to_string(),
            description: "This is a sample project based on Machine Learning which predicts \
                          the price of Hose as per some conditions."
                .to_string(),
            technologies: vec!["Python".to_string(), "Streamlit".to_string()],
            image: String::new(),
            links: ProjectLinks {
                demo: "https://housing-predictor-eazwaukb5hzqycdpqfsmaz.streamlit.app/"
                    .to_string(),
                code: "https://github.com/kanz9528/housing-predictor".to_string(),
            },
            date: "2023-01-01".to_string(),
            featured: true,
        }],
        skills: None,
        internships: None,
        certifications: None,
    }
}
