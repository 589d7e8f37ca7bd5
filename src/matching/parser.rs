// src/matching/parser.rs
//! Plain-text resume field extraction
//!
//! Heuristic extraction of contact fields plus catalog-driven skill
//! detection. Operates on already-extracted text; binary formats never
//! reach this module.

use crate::matching::engine::extract_display_skills;
use crate::types::{ContactInfo, ResumeModel};

/// Parse resume text into the structured model. Fields that cannot be
/// extracted stay absent; the skill list is always present, possibly empty.
pub fn parse_resume(text: &str) -> ResumeModel {
    let contact = ContactInfo {
        name: extract_name(text),
        email: extract_email(text),
        phone: extract_phone(text),
    };
    ResumeModel::new(contact, extract_display_skills(text))
}

/// First token that looks like an address: one `@`, dotted domain, and an
/// alphabetic top-level part of at least two characters.
fn extract_email(text: &str) -> Option<String> {
    for token in text.split_whitespace() {
        let token = token.trim_matches(|c: char| !c.is_alphanumeric() && c != '@' && c != '.');
        let token = token.trim_matches('.');
        let mut parts = token.split('@');
        let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
            continue;
        };
        if local.is_empty() || !domain.contains('.') {
            continue;
        }
        let tld = domain.rsplit('.').next().unwrap_or("");
        if tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()) {
            return Some(token.to_string());
        }
    }
    None
}

/// First token carrying a plausible phone number: 7 to 15 digits once
/// everything except digits and a leading `+` is stripped.
fn extract_phone(text: &str) -> Option<String> {
    for token in text.split_whitespace() {
        let cleaned: String = token
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        let digits = cleaned.chars().filter(|c| c.is_ascii_digit()).count();
        if (7..=15).contains(&digits) {
            return Some(cleaned);
        }
    }
    None
}

/// Heuristic: the first of the top three lines holding two or more words
/// whose alphabetic words are capitalized.
fn extract_name(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(3)
        .find(|line| {
            let words: Vec<&str> = line.split_whitespace().collect();
            words.len() >= 2
                && words
                    .iter()
                    .filter(|w| w.chars().all(char::is_alphabetic))
                    .all(|w| w.chars().next().is_some_and(char::is_uppercase))
        })
        .map(str::to_string)
}
