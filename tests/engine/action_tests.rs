//! Action matching and execution state machine tests.

use tanglewood_engine::Game;
use tanglewood_foundation::Name;

use crate::fixture::{action, demo_actions, demo_game, demo_world};

#[test]
fn matched_action_runs_and_narrates() {
    let mut game = demo_game();
    game.handle_command("Mike: get axe");
    game.handle_command("Mike: goto forest");

    let response = game.handle_command("Mike: chop the tree with the axe");
    assert_eq!(response, "You cut down the tree with the axe");
}

#[test]
fn consumed_subject_moves_to_the_storeroom() {
    let mut game = demo_game();
    game.handle_command("Mike: get axe");
    game.handle_command("Mike: goto forest");
    game.handle_command("Mike: chop tree");

    assert!(game.world().storeroom().has_furniture(&Name::new("tree")));
    assert!(
        !game
            .world()
            .location(&Name::new("forest"))
            .unwrap()
            .has_furniture(&Name::new("tree"))
    );
}

#[test]
fn produced_subject_arrives_from_the_storeroom() {
    let mut game = demo_game();
    game.handle_command("Mike: get axe");
    game.handle_command("Mike: goto forest");
    game.handle_command("Mike: chop tree");

    let forest = game.world().location(&Name::new("forest")).unwrap();
    assert!(forest.has_artefact(&Name::new("log")));
    assert!(!game.world().storeroom().has_artefact(&Name::new("log")));
}

#[test]
fn consumed_inventory_item_leaves_the_inventory() {
    let mut game = demo_game();
    game.handle_command("Mike: get potion");
    game.handle_command("Mike: drink potion");

    assert!(game.world().storeroom().has_artefact(&Name::new("potion")));
    let player = game.world().player(&Name::new("mike")).unwrap();
    assert!(!player.has_in_inventory(&Name::new("potion")));
}

#[test]
fn consume_reaches_across_the_world_when_needed() {
    let mut actions = demo_actions();
    actions.push(action(
        &["summon"],
        &["trapdoor"],
        &["key"],
        &[],
        "The key rattles away to the storeroom",
    ));
    let mut game = Game::new(demo_world(), actions).unwrap();

    // The player stands in the cabin; the key sits in the forest.
    let response = game.handle_command("Mike: summon trapdoor");
    assert_eq!(response, "The key rattles away to the storeroom");
    assert!(game.world().storeroom().has_artefact(&Name::new("key")));
}

#[test]
fn produced_location_becomes_a_path() {
    let mut game = demo_game();
    game.handle_command("Mike: goto forest");
    game.handle_command("Mike: get key");
    game.handle_command("Mike: goto cabin");

    let response = game.handle_command("Mike: open trapdoor with key");
    assert_eq!(
        response,
        "You unlock the trapdoor and see steps leading down into a cellar"
    );
    let response = game.handle_command("Mike: goto cellar");
    assert!(response.contains("You are in A dusty cellar"));
}

#[test]
fn consumed_location_severs_the_path() {
    let mut actions = demo_actions();
    actions.push(action(
        &["collapse"],
        &["trapdoor"],
        &["forest"],
        &[],
        "The way to the forest caves in",
    ));
    let mut game = Game::new(demo_world(), actions).unwrap();

    assert_eq!(
        game.handle_command("Mike: collapse trapdoor"),
        "The way to the forest caves in"
    );
    assert_eq!(
        game.handle_command("Mike: goto forest"),
        "There is no path to forest from cabin"
    );
    // The location itself still exists; only the path is gone.
    assert!(game.world().location(&Name::new("forest")).is_some());
}

#[test]
fn unmatched_trigger_subject_combination_fails() {
    let mut game = demo_game();
    // "attack" only knows the elf.
    assert_eq!(game.handle_command("Mike: attack tree"), "No matched action");
}

#[test]
fn two_fitting_actions_are_ambiguous() {
    let mut actions = demo_actions();
    actions.push(action(
        &["chop"],
        &["tree"],
        &[],
        &[],
        "You fell the tree another way",
    ));
    let mut game = Game::new(demo_world(), actions).unwrap();
    game.handle_command("Mike: get axe");
    game.handle_command("Mike: goto forest");

    assert_eq!(
        game.handle_command("Mike: chop tree"),
        "Trying to perform more than one actions"
    );
    // Nothing was consumed by the failed match.
    assert!(
        game.world()
            .location(&Name::new("forest"))
            .unwrap()
            .has_furniture(&Name::new("tree"))
    );
}

#[test]
fn unreachable_required_subject_fails_the_check() {
    let mut game = demo_game();
    // The tree is in the forest; the player is not.
    assert_eq!(
        game.handle_command("Mike: chop tree"),
        "Some items are not available at this time"
    );
}

#[test]
fn nothing_produceable_fails_the_check() {
    let mut actions = demo_actions();
    actions.push(action(
        &["conjure"],
        &["trapdoor"],
        &[],
        &["ghost"],
        "A ghost appears",
    ));
    let mut game = Game::new(demo_world(), actions).unwrap();

    assert_eq!(
        game.handle_command("Mike: conjure trapdoor"),
        "You don't have sufficient subjects to perform this action"
    );
}

#[test]
fn produced_health_is_capped() {
    let mut game = demo_game();
    game.handle_command("Mike: get potion");
    assert_eq!(
        game.handle_command("Mike: drink potion"),
        "You drink the potion and your health improves"
    );
    // Full health stays full; the potion is still consumed.
    assert_eq!(game.handle_command("Mike: health"), "3");
    assert!(game.world().storeroom().has_artefact(&Name::new("potion")));
}

#[test]
fn damage_and_recovery_round_trip() {
    let mut game = game_in_cellar();
    game.handle_command("Mike: attack elf");
    assert_eq!(game.handle_command("Mike: health"), "2");
    game.handle_command("Mike: attack elf");
    assert_eq!(game.handle_command("Mike: health"), "1");
}

#[test]
fn game_over_resets_the_player_and_drops_the_inventory() {
    let mut game = game_in_cellar();
    game.handle_command("Mike: attack elf");
    game.handle_command("Mike: attack elf");

    let response = game.handle_command("Mike: attack elf");
    assert_eq!(
        response,
        "You died and lost all of your items, you must return to the start of the game"
    );

    assert_eq!(game.handle_command("Mike: health"), "3");
    let player = game.world().player(&Name::new("mike")).unwrap();
    assert_eq!(player.location().as_str(), "cabin");
    assert!(player.inventory().is_empty());
    // The axe fell where the player died.
    assert!(
        game.world()
            .location(&Name::new("cellar"))
            .unwrap()
            .has_artefact(&Name::new("axe"))
    );
}

/// Unlocks the cellar and walks Mike down with the axe in hand.
fn game_in_cellar() -> Game {
    let mut game = demo_game();
    game.handle_command("Mike: get axe");
    game.handle_command("Mike: goto forest");
    game.handle_command("Mike: get key");
    game.handle_command("Mike: goto cabin");
    game.handle_command("Mike: unlock trapdoor");
    game.handle_command("Mike: goto cellar");
    game
}
