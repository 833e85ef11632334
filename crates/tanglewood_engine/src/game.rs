//! The orchestrator: one raw command line in, one response string out.

use tanglewood_foundation::{ErrorKind, Name, Result};
use tanglewood_parser::{CommandParser, Vocabulary};
use tanglewood_world::World;
use tanglewood_world::description::{ActionDescription, WorldDescription};

use crate::action::ActionOutcome;
use crate::builtin;
use crate::catalog::ActionCatalog;

/// A running game: the world registry, the action catalog, and the parser
/// vocabulary derived from both.
///
/// Commands mutate shared state, so a `Game` is the unit callers wrap in
/// their global critical section; each `handle_command` call resolves to
/// completion as one atomic step.
#[derive(Clone, Debug)]
pub struct Game {
    world: World,
    catalog: ActionCatalog,
    vocabulary: Vocabulary,
}

impl Game {
    /// Builds a game from ingested world and action descriptions.
    ///
    /// # Errors
    ///
    /// Fails when the world description is structurally unusable (no
    /// locations, storeroom as entry, path to an unknown location).
    pub fn new(world: WorldDescription, actions: Vec<ActionDescription>) -> Result<Self> {
        let world = World::from_description(world)?;
        let catalog = ActionCatalog::from_descriptions(actions);
        let vocabulary =
            Vocabulary::with_entries(catalog.trigger_phrases().to_vec(), world.subjects().clone());
        Ok(Self {
            world,
            catalog,
            vocabulary,
        })
    }

    /// Resolves one raw command line to its response text.
    ///
    /// Never fails: every failure kind maps to its fixed human-readable
    /// message, and mutation only commits after validation, so an erroring
    /// command leaves the registry untouched.
    pub fn handle_command(&mut self, raw: &str) -> String {
        match self.resolve(raw) {
            Ok(response) => response,
            Err(error) => error.to_string(),
        }
    }

    fn resolve(&mut self, raw: &str) -> Result<String> {
        let command = CommandParser::new(&self.vocabulary).parse(raw)?;
        // Nothing executable at all; the player is not even resolved.
        if command.is_empty() {
            return Err(ErrorKind::NoMatchedAction.into());
        }

        let player = Name::new(&command.player);
        self.world.ensure_player(&command.player);

        if let Some(verb) = command.verb() {
            builtin::dispatch(verb, &mut self.world, &player, &command.subjects)
        } else {
            let action = self
                .catalog
                .match_action(&command.triggers, &command.subjects)?
                .clone();
            Ok(action.execute(&mut self.world, &player)?.into_message())
        }
    }

    /// The world registry.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The world registry, mutably (test fixtures and tooling).
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The action catalog.
    #[must_use]
    pub fn catalog(&self) -> &ActionCatalog {
        &self.catalog
    }
}
