// src/view.rs
//! Read-only presentation helpers
//!
//! Everything here is a pure view over the stored models: banding, scrubbed
//! candidate details, initials, and the unmatched-skill breakdown. Nothing
//! mutates a model and nothing here feeds back into scoring.

use crate::scrub::{scrub, scrub_skills};
use crate::types::{MatchResultModel, ResumeModel};

/// Shown when a resume yields no skills at all.
pub const NO_SKILLS_LABEL: &str = "No skills detected";

/// Placeholder initials for an absent name.
const INITIALS_PLACEHOLDER: &str = "NA";

/// Display classification of a match score. Derived from the score alone
/// and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Strong,
    Moderate,
    Weak,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBand::Strong
        } else if score >= 60.0 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Weak
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Strong => "strong",
            ScoreBand::Moderate => "moderate",
            ScoreBand::Weak => "weak",
        }
    }
}

/// Scrubbed candidate details ready for display. Empty strings stand for
/// absent fields; skills that scrub to nothing are already filtered out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateView {
    pub initials: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
}

impl CandidateView {
    pub fn from_resume(resume: &ResumeModel) -> Self {
        let name = scrub(resume.contact.name.as_deref());
        Self {
            initials: initials(&name),
            name,
            email: scrub(resume.contact.email.as_deref()),
            phone: scrub(resume.contact.phone.as_deref()),
            skills: scrub_skills(&resume.skills),
        }
    }

    pub fn skills_label(&self) -> &str {
        if self.skills.is_empty() {
            NO_SKILLS_LABEL
        } else {
            "Skills"
        }
    }
}

/// First character of up to the first two whitespace tokens, uppercased.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .take(2)
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        INITIALS_PLACEHOLDER.to_string()
    } else {
        letters
    }
}

/// Scrubbed resume skills the job did not ask for: deduped by lowercase
/// spelling, minus the matched set compared case-insensitively.
pub fn unmatched_skills(resume: &ResumeModel, result: &MatchResultModel) -> Vec<String> {
    let matched_lower: Vec<String> = result
        .matched_skills
        .iter()
        .map(|s| s.to_lowercase())
        .collect();

    let mut seen = Vec::new();
    let mut unmatched = Vec::new();
    for skill in scrub_skills(&resume.skills) {
        let lower = skill.to_lowercase();
        if seen.contains(&lower) {
            continue;
        }
        seen.push(lower.clone());
        if !matched_lower.contains(&lower) {
            unmatched.push(skill);
        }
    }
    unmatched
}
