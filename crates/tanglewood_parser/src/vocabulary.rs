//! Parser vocabulary: trigger phrases and the global subject set.

use std::collections::HashSet;

use tanglewood_foundation::Name;

/// Runtime vocabulary the parser classifies tokens against.
///
/// Trigger phrases keep catalog registration order; matched phrases are
/// reported in that order regardless of where they sat in the input.
/// Subjects are every named entity and location in the world.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    triggers: Vec<String>,
    subjects: HashSet<Name>,
}

impl Vocabulary {
    /// Creates an empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a vocabulary from catalog-ordered trigger phrases and the
    /// world's subject set.
    #[must_use]
    pub fn with_entries(triggers: Vec<String>, subjects: HashSet<Name>) -> Self {
        let triggers = triggers.into_iter().map(|t| t.to_lowercase()).collect();
        Self { triggers, subjects }
    }

    /// Registers a trigger phrase at the end of the catalog order.
    /// Re-registering a known phrase is a no-op.
    pub fn register_trigger(&mut self, phrase: &str) {
        let phrase = phrase.to_lowercase();
        if !self.triggers.contains(&phrase) {
            self.triggers.push(phrase);
        }
    }

    /// Registers a subject name.
    pub fn register_subject(&mut self, name: Name) {
        self.subjects.insert(name);
    }

    /// Trigger phrases in catalog order.
    #[must_use]
    pub fn triggers(&self) -> &[String] {
        &self.triggers
    }

    /// Whether a token names a known subject.
    #[must_use]
    pub fn is_subject(&self, token: &str) -> bool {
        self.subjects.contains(&Name::new(token))
    }
}
