//! Builtin verbs and the parsed command value.

use std::fmt;

use tanglewood_foundation::Name;

/// The fixed builtin verbs, as opposed to catalog-defined actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Render the current location.
    Look,
    /// Pick up an artefact.
    Get,
    /// Put down a carried artefact.
    Drop,
    /// Move along a reachable path.
    Goto,
    /// List carried artefacts.
    Inventory,
    /// Report health.
    Health,
}

impl Verb {
    /// Parses a token into a verb, folding aliases (`inv` ≡ `inventory`).
    /// Matching is case-insensitive.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "look" => Some(Self::Look),
            "get" => Some(Self::Get),
            "drop" => Some(Self::Drop),
            "goto" => Some(Self::Goto),
            "inventory" | "inv" => Some(Self::Inventory),
            "health" => Some(Self::Health),
            _ => None,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::Look => "look",
            Self::Get => "get",
            Self::Drop => "drop",
            Self::Goto => "goto",
            Self::Inventory => "inventory",
            Self::Health => "health",
        };
        f.write_str(token)
    }
}

/// The outcome of parsing one raw protocol line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Lowercased player name (the text before the first `:`).
    pub player: String,
    /// Matched trigger phrases, in catalog order.
    pub triggers: Vec<String>,
    /// Matched subjects, in input order, duplicates kept.
    pub subjects: Vec<Name>,
    /// Matched builtin verbs. The ordering discipline allows at most one.
    pub verbs: Vec<Verb>,
}

impl ParsedCommand {
    /// The builtin verb, if the line carried one.
    #[must_use]
    pub fn verb(&self) -> Option<Verb> {
        self.verbs.first().copied()
    }

    /// Whether the line matched nothing executable at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty() && self.verbs.is_empty()
    }
}
