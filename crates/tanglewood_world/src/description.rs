//! Already-parsed description structures consumed by the core.
//!
//! World topology and the action catalog are authored externally (the
//! runtime crate reads them from TOML files); the core only ever sees these
//! structures. All names and trigger phrases are normalized to lowercase
//! when the registry and catalog are built from them.

#[cfg(feature = "serde")]
use serde::Deserialize;

/// A named, described entity inside a location group.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct EntityDescription {
    /// Unique entity name.
    pub name: String,
    /// Authored description text, rendered verbatim.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

/// One location group.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct LocationDescription {
    /// Unique lowercase location name; the name `storeroom` designates the
    /// holding pen.
    pub name: String,
    /// Authored description text.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Characters starting here.
    #[cfg_attr(feature = "serde", serde(default))]
    pub characters: Vec<EntityDescription>,
    /// Artefacts starting here.
    #[cfg_attr(feature = "serde", serde(default))]
    pub artefacts: Vec<EntityDescription>,
    /// Furniture starting here.
    #[cfg_attr(feature = "serde", serde(default))]
    pub furniture: Vec<EntityDescription>,
}

/// A directed connection between two locations.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct PathDescription {
    /// Path origin.
    pub from: String,
    /// Path destination.
    pub to: String,
}

/// The whole world topology. The first location group is the entry
/// location where players spawn and respawn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct WorldDescription {
    /// Ordered location groups.
    pub locations: Vec<LocationDescription>,
    /// One-way connections.
    #[cfg_attr(feature = "serde", serde(default))]
    pub paths: Vec<PathDescription>,
}

/// One catalog action record.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct ActionDescription {
    /// Trigger-phrase synonyms; any one of them invokes the action.
    pub triggers: Vec<String>,
    /// Required subjects; every one must be reachable for the action to fire.
    pub subjects: Vec<String>,
    /// Subjects relocated to the storeroom (or the health keyword).
    #[cfg_attr(feature = "serde", serde(default))]
    pub consumed: Vec<String>,
    /// Subjects relocated into the current location (or the health keyword,
    /// or a location name becoming a new path).
    #[cfg_attr(feature = "serde", serde(default))]
    pub produced: Vec<String>,
    /// Fixed narration returned on success.
    pub narration: String,
}
