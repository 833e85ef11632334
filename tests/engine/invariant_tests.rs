//! Property tests for the ownership and health invariants.

use proptest::prelude::*;
use tanglewood_foundation::Name;
use tanglewood_world::{DamageOutcome, Entity, MAX_HEALTH, Player, World};

use crate::fixture::demo_game;

/// How many containers currently hold an artefact with this name.
fn holders_of(world: &World, name: &str) -> usize {
    let name = Name::new(name);
    let in_locations: usize = world
        .locations()
        .map(|(_, location)| {
            location
                .artefacts()
                .iter()
                .filter(|a| a.name() == &name)
                .count()
        })
        .sum();
    let in_storeroom = world
        .storeroom()
        .artefacts()
        .iter()
        .filter(|a| a.name() == &name)
        .count();
    let in_inventories: usize = world
        .players()
        .map(|(_, player)| {
            player
                .inventory()
                .iter()
                .filter(|a| a.name() == &name)
                .count()
        })
        .sum();
    in_locations + in_storeroom + in_inventories
}

fn command_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("mike: get axe"),
        Just("mike: drop axe"),
        Just("mike: get potion"),
        Just("mike: drink potion"),
        Just("mike: goto forest"),
        Just("mike: goto cabin"),
        Just("mike: chop tree"),
        Just("mike: look"),
        Just("mike: inv"),
        Just("anna: get axe"),
        Just("anna: drop axe"),
        Just("anna: goto forest"),
        Just("anna: get key"),
    ]
}

proptest! {
    #[test]
    fn every_artefact_has_exactly_one_owner(
        commands in proptest::collection::vec(command_strategy(), 0..48),
    ) {
        let mut game = demo_game();
        for command in commands {
            game.handle_command(command);
        }
        for artefact in ["axe", "potion", "coin", "key", "log", "shovel"] {
            prop_assert_eq!(holders_of(game.world(), artefact), 1, "{}", artefact);
        }
    }

    #[test]
    fn health_stays_in_bounds(heals in proptest::collection::vec(any::<bool>(), 0..64)) {
        let mut player = Player::new("mike", Name::new("cabin"));
        for heal in heals {
            if heal {
                player.heal();
            } else if player.apply_damage() == DamageOutcome::Depleted {
                player.reset(Name::new("cabin"));
            }
            prop_assert!(player.health() >= 1);
            prop_assert!(player.health() <= MAX_HEALTH);
        }
    }
}
