//! Case-insensitive names for world entities and players.
//!
//! The command protocol matches verbs, subjects, and trigger phrases
//! case-insensitively, while narration and description text preserve
//! authored case. `Name` normalizes once at the boundary so the rest of the
//! system can compare with plain equality.

use std::borrow::Borrow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A case-insensitive identifier.
///
/// Constructed by lowercasing the input; equality, ordering, and hashing
/// all operate on the normalized form.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Name(String);

impl Name {
    /// Creates a name, normalizing to lowercase.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    /// Returns the normalized form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this name matches the given raw string, ignoring case.
    #[must_use]
    pub fn matches(&self, raw: &str) -> bool {
        self.0 == raw.to_lowercase()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Name {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Name {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}
