//! The action catalog: trigger-keyed storage and unique-match selection.

use std::collections::HashMap;

use tanglewood_foundation::{ErrorKind, Name, Result};
use tanglewood_world::description::ActionDescription;

use crate::action::GameAction;

/// All catalog actions, keyed by trigger phrase.
///
/// Trigger phrases keep first-registration order; the parser reports
/// matched phrases in that order.
#[derive(Clone, Debug, Default)]
pub struct ActionCatalog {
    actions: Vec<GameAction>,
    by_trigger: HashMap<String, Vec<usize>>,
    trigger_order: Vec<String>,
}

impl ActionCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from ingested action records, in order.
    #[must_use]
    pub fn from_descriptions(descriptions: Vec<ActionDescription>) -> Self {
        let mut catalog = Self::new();
        for description in descriptions {
            catalog.register(GameAction::from_description(description));
        }
        catalog
    }

    /// Registers an action under each of its trigger phrases.
    pub fn register(&mut self, action: GameAction) {
        let index = self.actions.len();
        for trigger in action.triggers() {
            let bucket = self.by_trigger.entry(trigger.clone()).or_default();
            if bucket.is_empty() {
                self.trigger_order.push(trigger.clone());
            }
            bucket.push(index);
        }
        self.actions.push(action);
    }

    /// Every known trigger phrase, in catalog order.
    #[must_use]
    pub fn trigger_phrases(&self) -> &[String] {
        &self.trigger_order
    }

    /// Number of registered actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Selects the single action fitting the matched phrases and subjects.
    ///
    /// Candidates come from the bucket of the first matched phrase.
    ///
    /// # Errors
    ///
    /// `NoMatchedAction` when nothing fits, `AmbiguousAction` when more
    /// than one action fits.
    pub fn match_action(&self, phrases: &[String], subjects: &[Name]) -> Result<&GameAction> {
        let Some(first) = phrases.first() else {
            return Err(ErrorKind::NoMatchedAction.into());
        };
        let candidates = self
            .by_trigger
            .get(first)
            .map(Vec::as_slice)
            .unwrap_or_default();

        let mut fitting = candidates
            .iter()
            .filter(|&&index| self.actions[index].matches(phrases, subjects));
        let Some(&selected) = fitting.next() else {
            return Err(ErrorKind::NoMatchedAction.into());
        };
        if fitting.next().is_some() {
            return Err(ErrorKind::AmbiguousAction.into());
        }
        Ok(&self.actions[selected])
    }
}
