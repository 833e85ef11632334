//! Catalog actions and their execution state machine.
//!
//! Execution is linear with no backtracking once consumption begins:
//! Check → Consume → Produce → Done. Only entity relocation and health
//! mutation are observable side effects, and the outcome is an explicit
//! value rather than unwinding control flow.

use tanglewood_foundation::{Error, ErrorKind, Name, Result};
use tanglewood_world::description::ActionDescription;
use tanglewood_world::{DamageOutcome, World};

/// The reserved subject denoting the player's health meter inside action
/// definitions.
pub const HEALTH_KEYWORD: &str = "health";

/// Narration returned when an action drives a player's health to zero.
pub const GAME_OVER_NARRATION: &str =
    "You died and lost all of your items, you must return to the start of the game";

/// The observable result of executing an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action ran to completion; carries its narration.
    Normal(String),
    /// Health reached zero mid-consume: the inventory was dropped where
    /// the player stood and the player was reset to the entry location.
    /// The action's own narration is discarded.
    GameOver(String),
}

impl ActionOutcome {
    /// The response text for the player.
    #[must_use]
    pub fn into_message(self) -> String {
        match self {
            Self::Normal(text) | Self::GameOver(text) => text,
        }
    }
}

/// A catalog-defined action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameAction {
    triggers: Vec<String>,
    required: Vec<Name>,
    consumed: Vec<Name>,
    produced: Vec<Name>,
    narration: String,
}

fn is_health(name: &Name) -> bool {
    name.as_str() == HEALTH_KEYWORD
}

impl GameAction {
    /// Builds an action from its ingested description, normalizing the
    /// trigger phrases and subject names.
    #[must_use]
    pub fn from_description(description: ActionDescription) -> Self {
        Self {
            triggers: description
                .triggers
                .iter()
                .map(|t| t.to_lowercase())
                .collect(),
            required: description.subjects.iter().map(|s| Name::new(s)).collect(),
            consumed: description.consumed.iter().map(|s| Name::new(s)).collect(),
            produced: description.produced.iter().map(|s| Name::new(s)).collect(),
            narration: description.narration,
        }
    }

    /// This action's trigger phrases.
    #[must_use]
    pub fn triggers(&self) -> &[String] {
        &self.triggers
    }

    /// This action's narration.
    #[must_use]
    pub fn narration(&self) -> &str {
        &self.narration
    }

    /// Whether the matched phrases and subjects select this action: both
    /// lists must be non-empty, no longer than this action's own lists,
    /// and fully contained in them.
    #[must_use]
    pub fn matches(&self, phrases: &[String], subjects: &[Name]) -> bool {
        within(phrases, &self.triggers) && within(subjects, &self.required)
    }

    /// Runs the action for the given player.
    ///
    /// # Errors
    ///
    /// `InsufficientSubjects` when a required subject is out of reach, and
    /// `NotProduceable` when the action produces things but none of them
    /// can currently be obtained. Validation happens before any mutation.
    pub fn execute(&self, world: &mut World, player: &Name) -> Result<ActionOutcome> {
        let here = world
            .player(player)
            .ok_or_else(|| Error::internal(format!("player {player} was not resolved")))?
            .location()
            .clone();

        self.check(world, player, &here)?;
        if self.consume(world, player, &here)? {
            return Ok(ActionOutcome::GameOver(GAME_OVER_NARRATION.to_string()));
        }
        self.produce(world, player, &here);
        Ok(ActionOutcome::Normal(self.narration.clone()))
    }

    /// Check state: every required subject reachable, and when the action
    /// produces anything, at least one produced subject obtainable.
    fn check(&self, world: &World, player: &Name, here: &Name) -> Result<()> {
        let state = world
            .player(player)
            .ok_or_else(|| Error::internal("player vanished during check"))?;
        let location = world
            .location(here)
            .ok_or_else(|| Error::internal(format!("location {here} missing from registry")))?;

        for item in &self.required {
            let reachable =
                is_health(item) || state.has_in_inventory(item) || location.contains(item);
            if !reachable {
                return Err(ErrorKind::InsufficientSubjects.into());
            }
        }

        if self.produced.is_empty() {
            return Ok(());
        }
        let obtainable = self.produced.iter().any(|item| {
            is_health(item)
                || world.has_location(item)
                || world.storeroom().has_thing(item)
                || world.find_thing_location(item).is_some()
        });
        if obtainable {
            Ok(())
        } else {
            Err(ErrorKind::NotProduceable.into())
        }
    }

    /// Consume state. Returns `true` when health was depleted and the
    /// game-over reset ran, which short-circuits the rest of the action.
    ///
    /// Search order per subject: inventory, then the current location,
    /// then a world-wide search. This order is a fixed behavioral
    /// contract and deliberately differs from the produce order.
    fn consume(&self, world: &mut World, player: &Name, here: &Name) -> Result<bool> {
        for item in &self.consumed {
            if is_health(item) {
                let outcome = world
                    .player_mut(player)
                    .ok_or_else(|| Error::internal("player vanished during consume"))?
                    .apply_damage();
                if outcome == DamageOutcome::Depleted {
                    game_over_reset(world, player, here)?;
                    return Ok(true);
                }
                continue;
            }

            let carried = world
                .player(player)
                .is_some_and(|state| state.has_in_inventory(item));
            if carried {
                let artefact = world
                    .player_mut(player)
                    .and_then(|state| state.take_from_inventory(item));
                if let Some(artefact) = artefact {
                    world.storeroom_mut().add_artefact(artefact);
                }
                continue;
            }

            let at_location = world
                .location(here)
                .is_some_and(|location| location.contains(item));
            if at_location {
                // Consuming a path name severs the path; consuming the
                // location's own name is a no-op.
                world.stash_thing(here, item);
                continue;
            }

            if let Some(found) = world.find_thing_location(item) {
                world.stash_thing(&found, item);
            }
        }
        Ok(false)
    }

    /// Produce state. Source order per subject: the health keyword, a
    /// known location name (attached as a new path), the storeroom, then a
    /// world-wide search. A subject found nowhere is a no-op.
    fn produce(&self, world: &mut World, player: &Name, here: &Name) {
        for item in &self.produced {
            if is_health(item) {
                if let Some(state) = world.player_mut(player) {
                    state.heal();
                }
                continue;
            }
            if world.has_location(item) {
                if let Some(location) = world.location_mut(here) {
                    location.add_path(item.clone());
                }
                continue;
            }
            if world.unstash_thing(item, here) {
                continue;
            }
            if let Some(found) = world.find_thing_location(item) {
                world.move_thing(&found, here, item);
            }
        }
    }
}

/// Drops the whole inventory where the player stood, then resets the
/// player to the entry location with full health.
fn game_over_reset(world: &mut World, player: &Name, here: &Name) -> Result<()> {
    let dropped = world
        .player_mut(player)
        .ok_or_else(|| Error::internal("player vanished during reset"))?
        .take_inventory();
    if let Some(location) = world.location_mut(here) {
        location.add_artefacts(dropped);
    }
    let entry = world.entry().clone();
    if let Some(state) = world.player_mut(player) {
        state.reset(entry);
    }
    Ok(())
}

/// Whether `given` is a non-empty selection drawn entirely from `target`.
fn within<T, U: PartialEq<T>>(given: &[U], target: &[T]) -> bool {
    if given.is_empty() || given.len() > target.len() {
        return false;
    }
    given.iter().all(|g| target.iter().any(|t| g == t))
}
