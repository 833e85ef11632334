//! Error types for the Tanglewood system.
//!
//! Uses `thiserror` for ergonomic error definition. Every failure is
//! recoverable at single-command granularity: the display string of an
//! [`Error`] is the exact text returned to the player as the command's
//! response.

use thiserror::Error;

use crate::name::Name;

/// Result alias used throughout Tanglewood.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Tanglewood operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a missing-player-name error.
    #[must_use]
    pub fn missing_player_name() -> Self {
        Self::new(ErrorKind::MissingPlayerName)
    }

    /// Creates an invalid-player-name error.
    #[must_use]
    pub fn invalid_player_name(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPlayerName(name.into()))
    }

    /// Creates a missing-subject error with a hint naming the missing piece.
    #[must_use]
    pub fn missing_subject(hint: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingSubject(hint.into()))
    }

    /// Creates a not-in-location error.
    #[must_use]
    pub fn not_in_location(artefact: Name, location: Name) -> Self {
        Self::new(ErrorKind::NotInLocation { artefact, location })
    }

    /// Creates a not-in-inventory error.
    #[must_use]
    pub fn not_in_inventory(artefact: Name) -> Self {
        Self::new(ErrorKind::NotInInventory(artefact))
    }

    /// Creates a no-path error.
    #[must_use]
    pub fn no_path(from: Name, to: Name) -> Self {
        Self::new(ErrorKind::NoPath { from, to })
    }

    /// Creates an unknown-location error.
    #[must_use]
    pub fn unknown_location(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownLocation(name.into()))
    }

    /// Creates an invalid-description error.
    #[must_use]
    pub fn invalid_description(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidDescription(detail.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(detail.into()))
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Categorized error kinds for pattern matching.
///
/// The `#[error]` strings are fixed protocol text; tests pin them.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The raw line carried no `player:` prefix.
    #[error("No user name is specified")]
    MissingPlayerName,

    /// The player name contains characters outside letters, whitespace,
    /// apostrophe, and hyphen.
    #[error("{0} is not a valid name")]
    InvalidPlayerName(String),

    /// A second builtin verb appeared in one command line.
    #[error("Trying to perform more than one commands")]
    TooManyCommands,

    /// A trigger phrase and a builtin verb appeared in one command line.
    #[error("Trying to perform more than one actions")]
    ActionAfterCommand,

    /// A subject preceded the builtin verb it should follow.
    #[error("Command out of order")]
    SubjectsOutOfOrder,

    /// No catalog action fits the matched triggers and subjects.
    #[error("No matched action")]
    NoMatchedAction,

    /// More than one catalog action fits the matched triggers and subjects.
    #[error("Trying to perform more than one actions")]
    AmbiguousAction,

    /// A required subject of an action is not reachable from the player.
    #[error("Some items are not available at this time")]
    InsufficientSubjects,

    /// None of an action's produced subjects can currently be obtained.
    #[error("You don't have sufficient subjects to perform this action")]
    NotProduceable,

    /// A builtin verb is missing its required argument.
    #[error("Missing subject: {0}")]
    MissingSubject(String),

    /// A builtin verb received more subjects than its arity allows.
    #[error("Provided too many subjects to this command")]
    ExtraneousSubjects,

    /// The named artefact is not present at the player's location.
    #[error("{artefact} does not exist in {location}")]
    NotInLocation {
        /// The artefact that was requested.
        artefact: Name,
        /// The location that was searched.
        location: Name,
    },

    /// The named artefact is not in the player's inventory.
    #[error("{0} does not exist in your inventory")]
    NotInInventory(Name),

    /// No reachable path with the given name leaves the current location.
    #[error("There is no path to {to} from {from}")]
    NoPath {
        /// Where the player currently is.
        from: Name,
        /// Where the player asked to go.
        to: Name,
    },

    /// A path declaration referenced a location that does not exist.
    #[error("Location {0} does not exist")]
    UnknownLocation(String),

    /// A world or action description is structurally unusable.
    #[error("Invalid game description: {0}")]
    InvalidDescription(String),

    /// Internal fault; converted to a generic message at the boundary.
    #[error("Something went wrong while handling this action")]
    Internal(String),
}
