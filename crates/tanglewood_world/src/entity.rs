//! World object model.
//!
//! Every world object shares an identity (a case-insensitive [`Name`]) and a
//! free-text description. The concrete kinds are a small struct set behind
//! the [`Entity`] trait; [`Thing`] is the tagged union used to carry any
//! movable object through relocation plumbing.

use tanglewood_foundation::Name;

/// Identity and description shared by every world object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityInfo {
    name: Name,
    description: String,
}

impl EntityInfo {
    /// Creates entity info, normalizing the name.
    #[must_use]
    pub fn new(name: &str, description: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            description: description.into(),
        }
    }
}

/// Common access to a world object's identity and description.
pub trait Entity {
    /// The object's identity and description.
    fn info(&self) -> &EntityInfo;

    /// The object's normalized name.
    fn name(&self) -> &Name {
        &self.info().name
    }

    /// The object's authored description text.
    fn description(&self) -> &str {
        &self.info().description
    }
}

/// A pickable item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artefact(EntityInfo);

impl Artefact {
    /// Creates an artefact.
    #[must_use]
    pub fn new(name: &str, description: impl Into<String>) -> Self {
        Self(EntityInfo::new(name, description))
    }
}

impl Entity for Artefact {
    fn info(&self) -> &EntityInfo {
        &self.0
    }
}

/// A fixture that is never pickable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Furniture(EntityInfo);

impl Furniture {
    /// Creates a furniture piece.
    #[must_use]
    pub fn new(name: &str, description: impl Into<String>) -> Self {
        Self(EntityInfo::new(name, description))
    }
}

impl Entity for Furniture {
    fn info(&self) -> &EntityInfo {
        &self.0
    }
}

/// A non-player character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Character(EntityInfo);

impl Character {
    /// Creates a character.
    #[must_use]
    pub fn new(name: &str, description: impl Into<String>) -> Self {
        Self(EntityInfo::new(name, description))
    }
}

impl Entity for Character {
    fn info(&self) -> &EntityInfo {
        &self.0
    }
}

/// Any movable world object, carried between containers during relocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Thing {
    /// A pickable item.
    Artefact(Artefact),
    /// A fixture.
    Furniture(Furniture),
    /// A non-player character.
    Character(Character),
}

impl Entity for Thing {
    fn info(&self) -> &EntityInfo {
        match self {
            Self::Artefact(a) => a.info(),
            Self::Furniture(f) => f.info(),
            Self::Character(c) => c.info(),
        }
    }
}

impl From<Artefact> for Thing {
    fn from(artefact: Artefact) -> Self {
        Self::Artefact(artefact)
    }
}

impl From<Furniture> for Thing {
    fn from(furniture: Furniture) -> Self {
        Self::Furniture(furniture)
    }
}

impl From<Character> for Thing {
    fn from(character: Character) -> Self {
        Self::Character(character)
    }
}
