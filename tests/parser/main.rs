//! Integration tests for the tanglewood_parser crate.
//!
//! Tests for the command parsing pipeline:
//! - Player-name splitting and validation
//! - Trigger-phrase extraction
//! - Token classification and the ordering discipline

mod ordering_tests;

use std::collections::HashSet;

use tanglewood_foundation::Name;
use tanglewood_parser::Vocabulary;

/// A vocabulary resembling the demo world's.
fn demo_vocabulary() -> Vocabulary {
    let triggers = vec![
        "open".to_string(),
        "unlock".to_string(),
        "chop".to_string(),
        "cut".to_string(),
        "cut down".to_string(),
        "drink".to_string(),
    ];
    let subjects: HashSet<Name> = [
        "cabin", "forest", "cellar", "axe", "potion", "coin", "trapdoor", "key", "tree", "elf",
    ]
    .into_iter()
    .map(Name::new)
    .collect();
    Vocabulary::with_entries(triggers, subjects)
}
