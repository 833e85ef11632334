//! The command parsing pipeline.
//!
//! One raw protocol line (`"<player>: <free text>"`) becomes a
//! [`ParsedCommand`]: the player name, the matched trigger phrases in
//! catalog order, the matched subjects in input order, and the matched
//! builtin verbs. Everything else is filler and is discarded.

use tanglewood_foundation::{Error, ErrorKind, Name, Result};

use crate::command::{ParsedCommand, Verb};
use crate::vocabulary::Vocabulary;

/// Parses raw command lines against a vocabulary.
#[derive(Debug)]
pub struct CommandParser<'a> {
    vocabulary: &'a Vocabulary,
}

impl<'a> CommandParser<'a> {
    /// Creates a parser over the given vocabulary.
    #[must_use]
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Parses one raw line.
    ///
    /// Trigger phrases are matched whole-word and case-insensitively
    /// against the text after the player prefix, in catalog order, and
    /// every occurrence is removed before token classification. The
    /// remaining whitespace-delimited tokens are classified as builtin
    /// verbs, known subjects, or filler.
    ///
    /// Ordering discipline: at the moment a builtin verb is seen, a prior
    /// verb fails with `TooManyCommands`, a matched trigger phrase fails
    /// with `ActionAfterCommand`, and a prior subject fails with
    /// `SubjectsOutOfOrder`. Subjects after the verb become its arguments.
    ///
    /// # Errors
    ///
    /// Returns the parsing failures above, plus `MissingPlayerName` when
    /// the line has no `:` and `InvalidPlayerName` when the name carries
    /// anything but letters, whitespace, apostrophes, and hyphens.
    pub fn parse(&self, raw: &str) -> Result<ParsedCommand> {
        let Some((player, rest)) = raw.split_once(':') else {
            return Err(Error::missing_player_name());
        };
        validate_player_name(player)?;
        let player = player.to_lowercase();

        let mut text = rest.to_lowercase();
        let mut triggers = Vec::new();
        for phrase in self.vocabulary.triggers() {
            let (stripped, found) = strip_whole_phrase(&text, phrase);
            if found {
                triggers.push(phrase.clone());
            }
            text = stripped;
        }

        let mut verbs = Vec::new();
        let mut subjects = Vec::new();
        for token in text.split_whitespace() {
            if let Some(verb) = Verb::parse(token) {
                if !verbs.is_empty() {
                    return Err(ErrorKind::TooManyCommands.into());
                }
                if !triggers.is_empty() {
                    return Err(ErrorKind::ActionAfterCommand.into());
                }
                if !subjects.is_empty() {
                    return Err(ErrorKind::SubjectsOutOfOrder.into());
                }
                verbs.push(verb);
            } else if self.vocabulary.is_subject(token) {
                subjects.push(Name::new(token));
            }
        }

        Ok(ParsedCommand {
            player,
            triggers,
            subjects,
            verbs,
        })
    }
}

/// Player names may carry letters, whitespace, apostrophes, and hyphens.
/// The empty name is tolerated; it still keys a distinct player.
fn validate_player_name(name: &str) -> Result<()> {
    let valid = name
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace() || c == '\'' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(Error::invalid_player_name(name))
    }
}

/// Whether a character counts as part of a word for boundary checks.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Removes every whole-word occurrence of `phrase` from `text`.
///
/// Both inputs are expected lowercase. A match must sit on word
/// boundaries on both sides, so `axe` does not match inside `waxed`;
/// multi-word phrases match across their literal spacing.
fn strip_whole_phrase(text: &str, phrase: &str) -> (String, bool) {
    if phrase.is_empty() {
        return (text.to_string(), false);
    }

    let mut out = String::with_capacity(text.len());
    let mut found = false;
    let mut rest = text;
    let mut boundary_before = true;

    while !rest.is_empty() {
        if boundary_before && rest.starts_with(phrase) {
            let end_ok = rest[phrase.len()..]
                .chars()
                .next()
                .is_none_or(|c| !is_word_char(c));
            if end_ok {
                found = true;
                rest = &rest[phrase.len()..];
                // The phrase ended on a boundary, so the next character
                // (if any) is a non-word character.
                continue;
            }
        }
        let Some(c) = rest.chars().next() else { break };
        out.push(c);
        boundary_before = !is_word_char(c);
        rest = &rest[c.len_utf8()..];
    }

    (out, found)
}
