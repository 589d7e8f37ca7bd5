// src/scrub.rs
//! Display-time string normalization for candidate-identifying text
//!
//! Removes one disallowed short token (whole word, case-insensitive) from a
//! string, collapses runs of whitespace, and trims. This is a view-layer
//! filter only: stored models are never mutated and scoring always sees the
//! unscrubbed skill list.

/// Token removed from displayed contact fields and skills.
const DISALLOWED_TOKEN: &str = "sc";

/// Scrub a possibly-absent string for display. `None` yields the empty
/// string. Idempotent: scrubbing a scrubbed value changes nothing.
pub fn scrub(value: Option<&str>) -> String {
    let Some(raw) = value else {
        return String::new();
    };
    let stripped = strip_word(raw, DISALLOWED_TOKEN);
    collapse_whitespace(&stripped)
}

/// Scrub every skill independently and drop entries that scrub to nothing,
/// so the display list never shows blanks.
pub fn scrub_skills(skills: &[String]) -> Vec<String> {
    skills
        .iter()
        .map(|s| scrub(Some(s)))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Remove every whole-word occurrence of `word`, ignoring case. A word
/// boundary is any position not flanked by an alphanumeric or underscore.
fn strip_word(input: &str, word: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let word: Vec<char> = word.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while i < chars.len() {
        if word_at(&chars, i, &word) {
            i += word.len();
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

fn word_at(chars: &[char], at: usize, word: &[char]) -> bool {
    if at + word.len() > chars.len() {
        return false;
    }
    let same = word
        .iter()
        .zip(&chars[at..at + word.len()])
        .all(|(w, c)| w.eq_ignore_ascii_case(c));
    if !same {
        return false;
    }
    if at > 0 && is_word_char(chars[at - 1]) {
        return false;
    }
    if at + word.len() < chars.len() && is_word_char(chars[at + word.len()]) {
        return false;
    }
    true
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}
