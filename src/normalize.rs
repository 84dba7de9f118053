//! Input normalisation helpers for student numbers and names.
//!
//! Both the query and every stored record pass through the same functions
//! before comparison, so a record always matches its own stored values.

use crate::core::transliterate::{contains_hangul, Transliterator};
use std::fmt;
use std::str::FromStr;

/// How student numbers are reduced to a comparison key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentifierMode {
    /// Keep only ASCII digits (`" 105-01 "` → `"10501"`)
    #[default]
    Digits,
    /// Trim surrounding whitespace only
    Trim,
}

impl FromStr for IdentifierMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "digits" | "digit" => Ok(IdentifierMode::Digits),
            "trim" => Ok(IdentifierMode::Trim),
            other => Err(format!(
                "Unknown identifier mode '{}' (expected 'digits' or 'trim')",
                other
            )),
        }
    }
}

impl fmt::Display for IdentifierMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierMode::Digits => write!(f, "digits"),
            IdentifierMode::Trim => write!(f, "trim"),
        }
    }
}

/// Normalise a student number into its comparison key.
pub fn normalize_identifier(raw: &str, mode: IdentifierMode) -> String {
    match mode {
        IdentifierMode::Digits => raw.chars().filter(|c| c.is_ascii_digit()).collect(),
        IdentifierMode::Trim => raw.trim().to_string(),
    }
}

/// Remove all whitespace from a name, inside and around it.
pub fn strip_whitespace(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Normalise a name into its comparison key.
///
/// Whitespace is removed. If the remainder has no Hangul and a transliterator
/// is available, the keyboard-layout conversion is tried and kept only when it
/// produced Hangul. Never fails; the stripped input is the fallback.
pub fn normalize_name(raw: &str, transliterator: Option<&dyn Transliterator>) -> String {
    let stripped = strip_whitespace(raw);
    if stripped.is_empty() || contains_hangul(&stripped) {
        return stripped;
    }

    match transliterator.and_then(|t| t.transliterate(&stripped)) {
        Some(converted) if contains_hangul(&converted) => converted,
        _ => stripped,
    }
}
