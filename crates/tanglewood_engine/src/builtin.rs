//! Builtin command executors.
//!
//! One executor per fixed verb: arity validation, then world mutation, then
//! rendering. The [`dispatch`] table maps the parser's [`Verb`] enum onto
//! the executor functions.

use tanglewood_foundation::{Error, ErrorKind, Name, Result};
use tanglewood_parser::Verb;
use tanglewood_world::{Entity, Location, Player, World};

/// Routes a builtin verb to its executor.
///
/// # Errors
///
/// Returns the executor's arity or entity-location failure.
pub fn dispatch(verb: Verb, world: &mut World, player: &Name, args: &[Name]) -> Result<String> {
    match verb {
        Verb::Look => look(world, player, args),
        Verb::Get => get(world, player, args),
        Verb::Drop => drop_artefact(world, player, args),
        Verb::Goto => goto(world, player, args),
        Verb::Inventory => inventory(world, player, args),
        Verb::Health => health(world, player, args),
    }
}

fn no_args(args: &[Name]) -> Result<()> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(ErrorKind::ExtraneousSubjects.into())
    }
}

fn one_arg<'a>(args: &'a [Name], hint: &str) -> Result<&'a Name> {
    match args {
        [] => Err(Error::missing_subject(hint)),
        [subject] => Ok(subject),
        _ => Err(ErrorKind::ExtraneousSubjects.into()),
    }
}

/// Players are resolved lazily before dispatch; a missing entry here is an
/// internal fault, not a player-visible condition.
fn current_player<'w>(world: &'w World, player: &Name) -> Result<&'w Player> {
    world
        .player(player)
        .ok_or_else(|| Error::internal(format!("player {player} was not resolved")))
}

fn look(world: &mut World, player: &Name, args: &[Name]) -> Result<String> {
    no_args(args)?;
    let here = current_player(world, player)?.location().clone();
    let location = world
        .location(&here)
        .ok_or_else(|| Error::internal(format!("location {here} missing from registry")))?;
    Ok(render_location(world, location, player))
}

fn get(world: &mut World, player: &Name, args: &[Name]) -> Result<String> {
    let subject = one_arg(args, "The artefact you want to pick up")?;
    let here = current_player(world, player)?.location().clone();
    let artefact = world
        .location_mut(&here)
        .and_then(|location| location.take_artefact(subject));
    let Some(artefact) = artefact else {
        return Err(Error::not_in_location(subject.clone(), here));
    };
    let picked = artefact.name().clone();
    if let Some(state) = world.player_mut(player) {
        state.add_to_inventory(artefact);
    }
    Ok(format!("You picked up a(an) {picked}"))
}

fn drop_artefact(world: &mut World, player: &Name, args: &[Name]) -> Result<String> {
    let subject = one_arg(args, "The artefact you want to put down")?;
    let here = current_player(world, player)?.location().clone();
    let artefact = world
        .player_mut(player)
        .and_then(|state| state.take_from_inventory(subject));
    let Some(artefact) = artefact else {
        return Err(Error::not_in_inventory(subject.clone()));
    };
    if let Some(location) = world.location_mut(&here) {
        location.add_artefact(artefact);
    }
    Ok(String::new())
}

fn goto(world: &mut World, player: &Name, args: &[Name]) -> Result<String> {
    let to = one_arg(args, "The location you want to go")?;
    let from = current_player(world, player)?.location().clone();
    let reachable = world
        .location(&from)
        .is_some_and(|location| location.has_path(to));
    if !reachable {
        return Err(Error::no_path(from, to.clone()));
    }
    if let Some(state) = world.player_mut(player) {
        state.set_location(to.clone());
    }
    let destination = world
        .location(to)
        .ok_or_else(|| Error::internal(format!("path leads to unknown location {to}")))?;
    Ok(render_location(world, destination, player))
}

fn inventory(world: &mut World, player: &Name, args: &[Name]) -> Result<String> {
    no_args(args)?;
    let state = current_player(world, player)?;
    let names: Vec<&str> = state
        .inventory()
        .iter()
        .map(|artefact| artefact.name().as_str())
        .collect();
    Ok(names.join("\n"))
}

fn health(world: &mut World, player: &Name, args: &[Name]) -> Result<String> {
    no_args(args)?;
    Ok(current_player(world, player)?.health().to_string())
}

/// Renders a location the way `look` and a successful `goto` report it:
/// the description, everything visible (characters, other players,
/// artefacts, furniture, by their descriptions), and the leaving paths by
/// name.
fn render_location(world: &World, location: &Location, viewer: &Name) -> String {
    let mut lines = Vec::new();
    lines.push(format!("You are in {}", location.description()));
    lines.push("You can now see:".to_string());
    for character in location.characters() {
        lines.push(character.description().to_string());
    }
    for other in world.players_at(location.name(), viewer) {
        lines.push(other.description().to_string());
    }
    for artefact in location.artefacts() {
        lines.push(artefact.description().to_string());
    }
    for furniture in location.furniture() {
        lines.push(furniture.description().to_string());
    }
    lines.push("You can access from here:".to_string());
    for path in location.paths() {
        lines.push(path.to_string());
    }
    lines.join("\n")
}
