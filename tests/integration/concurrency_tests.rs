//! Concurrent clients over the single global critical section.

use std::sync::{Arc, Mutex, PoisonError};
use std::thread;

use tanglewood_foundation::Name;

use crate::demo_game;

#[test]
fn parallel_players_always_get_a_response() {
    let game = Arc::new(Mutex::new(demo_game()));
    let players = ["ada", "brook", "casey", "dana"];

    let handles: Vec<_> = players
        .iter()
        .map(|player| {
            let game = Arc::clone(&game);
            let player = (*player).to_string();
            thread::spawn(move || {
                let script = [
                    format!("{player}: look"),
                    format!("{player}: get axe"),
                    format!("{player}: goto forest"),
                    format!("{player}: look"),
                    format!("{player}: health"),
                    format!("{player}: inv"),
                ];
                let mut responses = Vec::new();
                for line in &script {
                    let response = {
                        let mut game = game.lock().unwrap_or_else(PoisonError::into_inner);
                        game.handle_command(line)
                    };
                    responses.push(response);
                }
                responses
            })
        })
        .collect();

    for handle in handles {
        let responses = handle.join().expect("player thread completes");
        // "inv" may legitimately answer with an empty inventory; every
        // other command produces text.
        for response in &responses[..responses.len() - 1] {
            assert!(!response.is_empty());
        }
        // Health is untouched by racing over the axe.
        assert_eq!(responses[4], "3");
    }

    let game = game.lock().unwrap_or_else(PoisonError::into_inner);
    // Exactly one of the racing players holds the axe.
    let holders = game
        .world()
        .players()
        .filter(|(_, p)| p.has_in_inventory(&Name::new("axe")))
        .count();
    assert_eq!(holders, 1);
    assert_eq!(game.world().players().count(), 4);
}
