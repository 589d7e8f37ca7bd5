// src/types/resume.rs
//! Structured resume representation produced by a parsing collaborator

use serde::{Deserialize, Deserializer, Serialize};

/// Contact fields extracted from a resume. Each field has exactly one
/// absent representation: `None`. The wire contract signals absence with
/// `null`, an empty string, or a missing key; all three normalize to `None`
/// when the value crosses the deserialization boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default, deserialize_with = "absent_as_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "absent_as_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "absent_as_none")]
    pub phone: Option<String>,
}

/// Canonical parsed resume: contact info plus an ordered skill list.
///
/// `skills` is always a sequence, never a missing field. A parser that
/// extracts nothing must produce an empty list, and a payload that omits
/// the key deserializes to one. Duplicates are preserved; this layer does
/// not dedupe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeModel {
    #[serde(default)]
    pub contact: ContactInfo,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl ResumeModel {
    pub fn new(contact: ContactInfo, skills: Vec<String>) -> Self {
        Self { contact, skills }
    }

    /// True when a skill with the same lowercase spelling is present.
    pub fn has_skill_ci(&self, skill: &str) -> bool {
        let needle = skill.to_lowercase();
        self.skills.iter().any(|s| s.to_lowercase() == needle)
    }
}

fn absent_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_null_contact_fields_normalize_to_none() {
        let parsed: ResumeModel = serde_json::from_str(
            r#"{"contact":{"name":"","email":null,"phone":"  "},"skills":["Rust"]}"#,
        )
        .expect("valid payload");

        assert_eq!(parsed.contact.name, None);
        assert_eq!(parsed.contact.email, None);
        assert_eq!(parsed.contact.phone, None);
        assert_eq!(parsed.skills, vec!["Rust".to_string()]);
    }

    #[test]
    fn test_missing_skills_deserialize_to_empty_sequence() {
        let parsed: ResumeModel =
            serde_json::from_str(r#"{"contact":{"name":"Jane Doe"}}"#).expect("valid payload");

        assert_eq!(parsed.contact.name.as_deref(), Some("Jane Doe"));
        assert!(parsed.skills.is_empty());
    }

    #[test]
    fn test_has_skill_is_case_insensitive() {
        let resume = ResumeModel::new(
            ContactInfo::default(),
            vec!["Python".to_string(), "SQL".to_string()],
        );

        assert!(resume.has_skill_ci("python"));
        assert!(resume.has_skill_ci("sql"));
        assert!(!resume.has_skill_ci("docker"));
    }
}
