//! Question templates
//!
//! Each template inspects one sentence and, when its surface pattern
//! matches, produces a question whose answer is that sentence. Patterns
//! are deliberately conservative: a missed sentence costs nothing (the
//! keyword fallback still covers it) while a garbled question is visible
//! to the user.

use regex_lite::Regex;
use std::sync::OnceLock;

/// Longest accepted subject, in words
const MAX_SUBJECT_WORDS: usize = 6;

/// Subjects that produce useless questions ("What is it?")
const PRONOUN_SUBJECTS: &[&str] = &[
    "it", "this", "that", "there", "these", "those", "he", "she", "they",
    "we", "you", "i", "which", "what", "who", "here",
];

fn definition_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^([^,;:]+?)\s+(is|are)\s+(\S.+)$").expect("valid pattern")
    })
}

fn causal_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)^([^,;:]+?)\s+(causes?|leads?\s+to|results?\s+in)\s+(\S.+)$",
        )
        .expect("valid pattern")
    })
}

fn enumeration_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)^([^,;:]+?)\s+(?:includes?|including|consists?\s+of|comprises?|such\s+as)\s+\S",
        )
        .expect("valid pattern")
    })
}

/// "X is/are Y" → "What is x?"
pub fn definition_question(text: &str) -> Option<String> {
    let caps = definition_re().captures(text.trim())?;
    let subject = usable_subject(caps.get(1)?.as_str())?;
    let verb = if caps.get(2)?.as_str().eq_ignore_ascii_case("are") {
        "are"
    } else {
        "is"
    };
    // A bare complement ("Dogs are loyal") makes a trivial question; ask
    // only when the predicate says something substantial
    if caps.get(3)?.as_str().split_whitespace().count() < 3 {
        return None;
    }
    Some(format!("What {verb} {subject}?"))
}

/// "X causes/leads to/results in Y" → "What does X cause?"
pub fn causal_question(text: &str) -> Option<String> {
    let caps = causal_re().captures(text.trim())?;
    let subject = usable_subject(caps.get(1)?.as_str())?;
    let connective = caps.get(2)?.as_str().to_lowercase();
    let tail = if connective.starts_with("cause") {
        "cause"
    } else if connective.starts_with("lead") {
        "lead to"
    } else {
        "result in"
    };
    Some(format!("What does {subject} {tail}?"))
}

/// List-marker sentences → "What are the types of X?"
pub fn enumeration_question(text: &str) -> Option<String> {
    let caps = enumeration_re().captures(text.trim())?;
    let subject = usable_subject(caps.get(1)?.as_str())?;
    Some(format!("What are the types of {subject}?"))
}

/// Keyword fallback question
pub fn keyword_question(keyword: &str) -> String {
    format!("What is {}?", normalize_subject(keyword))
}

/// Validate and normalize a captured subject span
fn usable_subject(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let words: Vec<&str> = trimmed.split_whitespace().collect();
    if words.is_empty() || words.len() > MAX_SUBJECT_WORDS {
        return None;
    }
    if !trimmed.chars().next().is_some_and(|c| c.is_alphanumeric()) {
        return None;
    }
    let first = words[0].to_lowercase();
    if PRONOUN_SUBJECTS.contains(&first.as_str()) {
        return None;
    }
    Some(normalize_subject(trimmed))
}

/// Lowercase the subject except for acronym-like words (e.g. "DNA", "HTTP")
fn normalize_subject(subject: &str) -> String {
    subject
        .split_whitespace()
        .map(|word| {
            if looks_like_acronym(word) {
                word.to_string()
            } else {
                word.to_lowercase()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Two or more characters, all uppercase or digits
fn looks_like_acronym(word: &str) -> bool {
    let letters: Vec<char> = word.chars().filter(|c| c.is_alphanumeric()).collect();
    letters.len() >= 2 && letters.iter().all(|c| c.is_uppercase() || c.is_ascii_digit())
}
