// src/matching/engine.rs
//! Alias-based skill extraction and weighted job scoring
//!
//! Mentions are found with boundary-checked substring search over a cleaned
//! lowercase text. Job-side mentions are weighted by requirement cues in the
//! surrounding context, and the score is the matched share of total job
//! weight, as a percentage.

use crate::error::FlowError;
use crate::matching::catalog::{display_name, SKILL_ALIASES};
use crate::types::{JobQuery, MatchResultModel, ResumeModel};
use crate::workflow::MatchingCollaborator;

const REQUIRED_CUES: &[&str] = &[
    "must",
    "required",
    "mandatory",
    "strong",
    "proven",
    "expert",
    "need to",
    "should have",
];

const PREFERRED_CUES: &[&str] = &["preferred", "nice to have", "good to have", "plus"];

const REQUIRED_WEIGHT: f64 = 1.5;
const PREFERRED_WEIGHT: f64 = 0.8;

/// Bytes of context inspected on each side of a mention for cue words.
const CUE_WINDOW: usize = 50;

/// Local implementation of the matching collaborator. Deterministic, so
/// repeated calls with the same inputs yield the same result.
pub struct SkillMatchEngine;

#[rocket::async_trait]
impl MatchingCollaborator for SkillMatchEngine {
    async fn match_resume(
        &self,
        resume: &ResumeModel,
        query: &JobQuery,
    ) -> Result<MatchResultModel, FlowError> {
        let (match_score, matched_skills) =
            score_against(&resume.skills, query.title(), query.description());
        Ok(MatchResultModel {
            match_score,
            matched_skills,
        })
    }
}

/// Lowercase, keep `a-z0-9 + # . / -`, turn everything else into a space,
/// then collapse whitespace. The result is pure ASCII.
pub fn clean_text(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '+' | '#' | '.' | '/' | '-' => c,
            _ => ' ',
        })
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Canonical skills mentioned in `text`, in catalog order.
pub fn extract_skills(text: &str) -> Vec<String> {
    let cleaned = clean_text(text);
    let mut found = Vec::new();
    for (canon, aliases) in SKILL_ALIASES {
        if aliases
            .iter()
            .any(|alias| !word_occurrences(&cleaned, alias).is_empty())
        {
            found.push((*canon).to_string());
        }
    }
    found
}

/// Canonical skills mentioned in `text` rendered as display names, sorted
/// by canonical name. This is the shape resume parsing emits.
pub fn extract_display_skills(text: &str) -> Vec<String> {
    let mut canon = extract_skills(text);
    canon.sort();
    canon.iter().map(|c| display_name(c)).collect()
}

/// Map a free-form skill string onto its canonical name, or its cleaned
/// form when the catalog does not know it.
pub fn canonicalize_skill(skill: &str) -> String {
    let normalized = clean_text(skill);
    for (canon, aliases) in SKILL_ALIASES {
        if normalized == *canon || aliases.contains(&normalized.as_str()) {
            return (*canon).to_string();
        }
    }
    // Minor variant: "react.js" style suffixes written as a separate word.
    let variant = normalized.replace(".js", " js");
    let variant = variant.trim();
    for (canon, aliases) in SKILL_ALIASES {
        if variant == *canon || aliases.contains(&variant) {
            return (*canon).to_string();
        }
    }
    normalized
}

/// Score a resume skill list against a job title/description.
///
/// Returns the percentage of job-skill weight covered by the resume and the
/// matched skills, reported as the resume's own skill strings so that every
/// matched entry corresponds case-insensitively to a resume skill.
pub fn score_against(resume_skills: &[String], title: &str, description: &str) -> (f64, Vec<String>) {
    let job_text = format!("{title}\n{description}");
    let weights = weighted_job_skills(&job_text);
    if weights.is_empty() {
        return (0.0, Vec::new());
    }

    let resume_canon: Vec<(String, &String)> = resume_skills
        .iter()
        .map(|s| (canonicalize_skill(s), s))
        .collect();

    let mut matched = Vec::new();
    let mut matched_weight = 0.0;
    for (canon, weight) in &weights {
        if let Some((_, original)) = resume_canon.iter().find(|(c, _)| c == canon) {
            matched_weight += weight;
            matched.push((*original).clone());
        }
    }

    let total_weight: f64 = weights.iter().map(|(_, w)| w).sum();
    let score = ((matched_weight / total_weight) * 100.0).round().clamp(0.0, 100.0);
    (score, matched)
}

/// Canonical skills mentioned in the job text with their cue-derived weight,
/// in catalog order.
fn weighted_job_skills(text: &str) -> Vec<(String, f64)> {
    let cleaned = clean_text(text);
    let mut weights = Vec::new();

    for (canon, aliases) in SKILL_ALIASES {
        let mut best = 0.0_f64;
        for alias in *aliases {
            for (start, end) in word_occurrences(&cleaned, alias) {
                let lo = start.saturating_sub(CUE_WINDOW);
                let hi = (end + CUE_WINDOW).min(cleaned.len());
                let window = &cleaned[lo..hi];

                let mut weight = 1.0_f64;
                if has_cue(window, REQUIRED_CUES) {
                    weight = weight.max(REQUIRED_WEIGHT);
                }
                if has_cue(window, PREFERRED_CUES) {
                    weight = weight.min(PREFERRED_WEIGHT);
                }
                best = best.max(weight);
            }
        }
        if best > 0.0 {
            weights.push(((*canon).to_string(), best));
        }
    }
    weights
}

fn has_cue(window: &str, cues: &[&str]) -> bool {
    cues.iter()
        .any(|cue| !word_occurrences(window, cue).is_empty())
}

/// Byte ranges where `needle` occurs in `haystack` without an adjacent
/// alphanumeric on either side. Both inputs must already be cleaned ASCII.
fn word_occurrences(haystack: &str, needle: &str) -> Vec<(usize, usize)> {
    let mut found = Vec::new();
    if needle.is_empty() || needle.len() > haystack.len() {
        return found;
    }

    let bytes = haystack.as_bytes();
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(needle) {
        let start = from + pos;
        let end = start + needle.len();
        let clear_before = start == 0 || !bytes[start - 1].is_ascii_alphanumeric();
        let clear_after = end == haystack.len() || !bytes[end].is_ascii_alphanumeric();
        if clear_before && clear_after {
            found.push((start, end));
        }
        from = start + 1;
        if from >= haystack.len() {
            break;
        }
    }
    found
}
