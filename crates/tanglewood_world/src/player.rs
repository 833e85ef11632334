//! Per-player state: inventory, current location, and health.

use tanglewood_foundation::Name;

use crate::entity::{Artefact, Entity, EntityInfo};

/// Health ceiling and starting value.
pub const MAX_HEALTH: u8 = 3;

/// What happened to a player when damage was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Health dropped but stayed above zero.
    Alive(u8),
    /// Health reached zero; the caller must run the game-over reset.
    Depleted,
}

/// A connected player.
///
/// Players are created lazily at first contact and never destroyed. They do
/// not appear in location character lists; presence is derived from
/// [`Player::location`].
#[derive(Clone, Debug)]
pub struct Player {
    info: EntityInfo,
    inventory: Vec<Artefact>,
    location: Name,
    health: u8,
}

impl Player {
    /// Creates a player spawning at the given location with full health.
    #[must_use]
    pub fn new(name: &str, start: Name) -> Self {
        let name = Name::new(name);
        let description = format!("A player named: {name}");
        Self {
            info: EntityInfo::new(name.as_str(), description),
            inventory: Vec::new(),
            location: start,
            health: MAX_HEALTH,
        }
    }

    /// Current health, always in `0..=MAX_HEALTH`.
    #[must_use]
    pub fn health(&self) -> u8 {
        self.health
    }

    /// Where the player currently is.
    #[must_use]
    pub fn location(&self) -> &Name {
        &self.location
    }

    /// Moves the player to a new location.
    pub fn set_location(&mut self, location: Name) {
        self.location = location;
    }

    /// Restores one health point, capped at [`MAX_HEALTH`].
    pub fn heal(&mut self) {
        if self.health < MAX_HEALTH {
            self.health += 1;
        }
    }

    /// Removes one health point.
    ///
    /// On reaching zero the caller is expected to drop the inventory and
    /// call [`Player::reset`]; the depleted state is never observable
    /// through the command surface.
    pub fn apply_damage(&mut self) -> DamageOutcome {
        self.health = self.health.saturating_sub(1);
        if self.health == 0 {
            DamageOutcome::Depleted
        } else {
            DamageOutcome::Alive(self.health)
        }
    }

    /// Takes the whole inventory, leaving it empty.
    pub fn take_inventory(&mut self) -> Vec<Artefact> {
        std::mem::take(&mut self.inventory)
    }

    /// Returns the player to its initial state at the given entry location.
    pub fn reset(&mut self, entry: Name) {
        self.inventory.clear();
        self.location = entry;
        self.health = MAX_HEALTH;
    }

    /// Adds an artefact to the inventory.
    pub fn add_to_inventory(&mut self, artefact: Artefact) {
        self.inventory.push(artefact);
    }

    /// Removes and returns the named artefact, if carried.
    pub fn take_from_inventory(&mut self, name: &Name) -> Option<Artefact> {
        let index = self.inventory.iter().position(|a| a.name() == name)?;
        Some(self.inventory.remove(index))
    }

    /// Whether the named artefact is carried.
    #[must_use]
    pub fn has_in_inventory(&self, name: &Name) -> bool {
        self.inventory.iter().any(|a| a.name() == name)
    }

    /// The carried artefacts, in pickup order.
    #[must_use]
    pub fn inventory(&self) -> &[Artefact] {
        &self.inventory
    }
}

impl Entity for Player {
    fn info(&self) -> &EntityInfo {
        &self.info
    }
}
