//! The world registry: central shared state owning every entity.

use std::collections::HashSet;

use im::OrdMap;
use tanglewood_foundation::{Error, Name, Result};

use crate::description::WorldDescription;
use crate::entity::{Artefact, Character, Furniture};
use crate::location::Location;
use crate::player::Player;

/// The reserved name of the holding pen.
const STOREROOM: &str = "storeroom";

/// The world registry.
///
/// Owns all locations in stable name-keyed storage, the storeroom, and the
/// lazily-created players. Iteration over locations and players is in
/// sorted name order, which fixes the otherwise-unspecified "first match
/// wins" order of the world-wide search.
#[derive(Clone, Debug)]
pub struct World {
    locations: OrdMap<Name, Location>,
    players: OrdMap<Name, Player>,
    storeroom: Location,
    entry: Name,
    subjects: HashSet<Name>,
}

impl World {
    /// Builds the registry from an ingested world description.
    ///
    /// The first location group is the entry location. A group named
    /// `storeroom` becomes the holding pen instead of a navigable location;
    /// when no such group exists a placeholder storeroom is created.
    ///
    /// # Errors
    ///
    /// Fails if the description has no locations, if the entry group is the
    /// storeroom, or if a path endpoint names an unknown location.
    pub fn from_description(description: WorldDescription) -> Result<Self> {
        let mut locations = OrdMap::new();
        let mut storeroom = None;
        let mut entry = None;
        let mut subjects = HashSet::new();

        for group in description.locations {
            let name = Name::new(&group.name);
            subjects.insert(name.clone());
            if entry.is_none() {
                entry = Some(name.clone());
            }

            let mut location = Location::new(&group.name, group.description);
            for character in group.characters {
                subjects.insert(Name::new(&character.name));
                location.add_character(Character::new(&character.name, character.description));
            }
            for artefact in group.artefacts {
                subjects.insert(Name::new(&artefact.name));
                location.add_artefact(Artefact::new(&artefact.name, artefact.description));
            }
            for furniture in group.furniture {
                subjects.insert(Name::new(&furniture.name));
                location.add_furniture(Furniture::new(&furniture.name, furniture.description));
            }

            if name.as_str() == STOREROOM {
                storeroom = Some(location);
            } else {
                locations.insert(name, location);
            }
        }

        let entry =
            entry.ok_or_else(|| Error::invalid_description("the world has no locations"))?;
        if entry.as_str() == STOREROOM {
            return Err(Error::invalid_description(
                "the entry location cannot be the storeroom",
            ));
        }
        let storeroom =
            storeroom.unwrap_or_else(|| Location::new(STOREROOM, "Placeholder Storeroom"));

        let mut world = Self {
            locations,
            players: OrdMap::new(),
            storeroom,
            entry,
            subjects,
        };

        for path in description.paths {
            let from = Name::new(&path.from);
            let to = Name::new(&path.to);
            if !world.locations.contains_key(&to) {
                return Err(Error::unknown_location(path.to));
            }
            let Some(origin) = world.locations.get_mut(&from) else {
                return Err(Error::unknown_location(path.from));
            };
            origin.add_path(to);
        }

        Ok(world)
    }

    /// The entry location name, where players spawn and respawn.
    #[must_use]
    pub fn entry(&self) -> &Name {
        &self.entry
    }

    /// Every valid subject name: locations, the storeroom group if one was
    /// declared, and every entity.
    #[must_use]
    pub fn subjects(&self) -> &HashSet<Name> {
        &self.subjects
    }

    /// Whether a navigable location with the given name exists. The
    /// storeroom is not navigable and never matches.
    #[must_use]
    pub fn has_location(&self, name: &Name) -> bool {
        self.locations.contains_key(name)
    }

    /// Looks up a navigable location.
    #[must_use]
    pub fn location(&self, name: &Name) -> Option<&Location> {
        self.locations.get(name)
    }

    /// Looks up a navigable location mutably.
    pub fn location_mut(&mut self, name: &Name) -> Option<&mut Location> {
        self.locations.get_mut(name)
    }

    /// All navigable locations, in sorted name order.
    pub fn locations(&self) -> impl Iterator<Item = (&Name, &Location)> {
        self.locations.iter()
    }

    /// The storeroom.
    #[must_use]
    pub fn storeroom(&self) -> &Location {
        &self.storeroom
    }

    /// The storeroom, mutably.
    pub fn storeroom_mut(&mut self) -> &mut Location {
        &mut self.storeroom
    }

    /// Resolves a player by name, creating it at the entry location on
    /// first contact. Resolution is idempotent: an existing player is
    /// returned untouched.
    pub fn ensure_player(&mut self, name: &str) -> &Player {
        let key = Name::new(name);
        if !self.players.contains_key(&key) {
            let player = Player::new(name, self.entry.clone());
            self.players.insert(key.clone(), player);
        }
        // The entry was just inserted if it was missing.
        self.players
            .get(&key)
            .expect("player present after ensure")
    }

    /// Looks up an existing player.
    #[must_use]
    pub fn player(&self, name: &Name) -> Option<&Player> {
        self.players.get(name)
    }

    /// Looks up an existing player mutably.
    pub fn player_mut(&mut self, name: &Name) -> Option<&mut Player> {
        self.players.get_mut(name)
    }

    /// All players, in sorted name order.
    pub fn players(&self) -> impl Iterator<Item = (&Name, &Player)> {
        self.players.iter()
    }

    /// The other players currently at a location, in sorted name order.
    #[must_use]
    pub fn players_at(&self, location: &Name, excluding: &Name) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|(name, player)| *name != excluding && player.location() == location)
            .map(|(_, player)| player)
            .collect()
    }

    /// World-wide entity search: the first location, in sorted name order,
    /// holding a like-named artefact, furniture piece, or character.
    #[must_use]
    pub fn find_thing_location(&self, item: &Name) -> Option<Name> {
        self.locations
            .iter()
            .find(|(_, location)| location.has_thing(item))
            .map(|(name, _)| name.clone())
    }

    /// Relocates the named object from a location into the storeroom.
    ///
    /// Missing locations and absent objects are no-ops; a path name is
    /// severed from the location without entering the storeroom.
    pub fn stash_thing(&mut self, from: &Name, item: &Name) {
        let removed = self
            .locations
            .get_mut(from)
            .and_then(|location| location.remove_thing(item));
        if let Some(thing) = removed {
            self.storeroom.add_thing(thing);
        }
    }

    /// Relocates the named object out of the storeroom into a location.
    /// Returns whether anything moved.
    pub fn unstash_thing(&mut self, item: &Name, to: &Name) -> bool {
        if !self.storeroom.has_thing(item) {
            return false;
        }
        let Some(thing) = self.storeroom.remove_thing(item) else {
            return false;
        };
        if let Some(destination) = self.locations.get_mut(to) {
            destination.add_thing(thing);
            true
        } else {
            // Unreachable destination: keep the object staged rather than
            // letting it fall out of the world.
            self.storeroom.add_thing(thing);
            false
        }
    }

    /// Relocates the named object between two locations. Missing endpoints
    /// and absent objects are no-ops.
    pub fn move_thing(&mut self, from: &Name, to: &Name, item: &Name) {
        let removed = self
            .locations
            .get_mut(from)
            .and_then(|location| location.remove_thing(item));
        if let Some(thing) = removed {
            if let Some(destination) = self.locations.get_mut(to) {
                destination.add_thing(thing);
            } else {
                self.storeroom.add_thing(thing);
            }
        }
    }
}
