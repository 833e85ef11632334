//! TOML ingestion of world and action description files.
//!
//! The core only consumes the already-parsed description structures; this
//! module is the collaborator producing them from authored files.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tanglewood_engine::Game;
use tanglewood_foundation::{Error, Result};
use tanglewood_world::description::{ActionDescription, WorldDescription};

/// Top-level shape of the actions file.
#[derive(Debug, Deserialize)]
struct ActionsFile {
    #[serde(default)]
    actions: Vec<ActionDescription>,
}

/// Parses a world description from TOML text.
///
/// # Errors
///
/// Fails when the text is not valid TOML for a world description.
pub fn parse_world(text: &str) -> Result<WorldDescription> {
    toml::from_str(text).map_err(|e| Error::invalid_description(format!("world file: {e}")))
}

/// Parses an action list from TOML text.
///
/// # Errors
///
/// Fails when the text is not valid TOML for an actions file.
pub fn parse_actions(text: &str) -> Result<Vec<ActionDescription>> {
    let file: ActionsFile =
        toml::from_str(text).map_err(|e| Error::invalid_description(format!("actions file: {e}")))?;
    Ok(file.actions)
}

/// Loads a world description file.
///
/// # Errors
///
/// Fails when the file cannot be read or parsed.
pub fn load_world(path: &Path) -> Result<WorldDescription> {
    let text = read(path)?;
    parse_world(&text)
}

/// Loads an actions file.
///
/// # Errors
///
/// Fails when the file cannot be read or parsed.
pub fn load_actions(path: &Path) -> Result<Vec<ActionDescription>> {
    let text = read(path)?;
    parse_actions(&text)
}

/// Loads both files and builds a game.
///
/// # Errors
///
/// Fails when either file cannot be read or parsed, or when the world
/// description is structurally unusable.
pub fn load_game(world_path: &Path, actions_path: &Path) -> Result<Game> {
    let world = load_world(world_path)?;
    let actions = load_actions(actions_path)?;
    Game::new(world, actions)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::invalid_description(format!("cannot read {}: {e}", path.display())))
}
