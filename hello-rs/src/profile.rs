//! The values the tour talks about.
//!
//! A [`Profile`] holds the three bound values of the greeting; [`FRUITS`] is
//! the ordered list read by the indexing step.

use std::fmt;

/// Age at which [`Profile::classify`] reports an adult.
pub const ADULT_AGE: u32 = 18;

/// The ordered list read by the favorite-fruit step.
pub const FRUITS: [&str; 3] = ["apple", "banana", "orange"];

/// Who the greeting is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub age: u32,
    pub is_student: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "John".to_owned(),
            age: 25,
            is_student: true,
        }
    }
}

impl Profile {
    pub fn new(name: impl Into<String>, age: u32, is_student: bool) -> Self {
        Self { name: name.into(), age, is_student }
    }

    pub fn classify(&self) -> Classification {
        if self.age >= ADULT_AGE {
            Classification::Adult
        } else {
            Classification::Minor
        }
    }
}

/// Outcome of the age check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Adult,
    Minor,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Adult => f.write_str("You are an adult"),
            Classification::Minor => f.write_str("You are a minor"),
        }
    }
}

/// First element of a three-element list.
pub fn favorite<'a>(fruits: &[&'a str; 3]) -> &'a str {
    fruits[0]
}

/// Textual form of a boolean: capitalised, as in `True` / `False`.
pub fn bool_text(b: bool) -> &'static str {
    if b { "True" } else { "False" }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
