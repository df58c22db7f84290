//! Specificity-ordered command dispatch.
//!
//! Candidates for a verb are collected in a fixed order: actions of held
//! items, vicinity actions of items in the room, the room's own
//! vocabulary, and finally the global vocabulary. Candidates run in that
//! order; an action that returns `Pass` hands the command to the next
//! one, and the fallback messages fire when nothing matches or everything
//! passes.

use log::debug;

use spelunk_world::{Action, Command, ItemId, Outcome, World};

use crate::tokenizer::tokenize;

/// What the read loop should do after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    /// Read the next line.
    Continue,
    /// The game is over.
    Quit,
}

/// Runs one input line as one turn.
///
/// Blank input does nothing, not even a turn tick. Any other input runs
/// the dispatch loop and then the turn-end hooks, unless the command quit
/// the game.
pub fn process(world: &mut World, input: &str) -> TurnResult {
    let Some(command) = tokenize(input) else {
        return TurnResult::Continue;
    };
    let result = dispatch(world, &command);
    if result == TurnResult::Continue {
        end_turn(world);
    }
    result
}

fn dispatch(world: &mut World, command: &Command) -> TurnResult {
    let candidates = applicable_actions(world, command);
    debug!(
        "dispatching {:?}: {} candidate(s)",
        command.verb,
        candidates.len()
    );
    if candidates.is_empty() {
        if world.is_known_word(&command.verb) {
            world.say(&format!("There is nothing here to {}.", command.verb));
        } else {
            world.say(&format!("I don't understand \"{}\".", command.input));
        }
        return TurnResult::Continue;
    }
    for action in candidates {
        match action.run(world, command) {
            Outcome::Handled => return TurnResult::Continue,
            Outcome::Quit => return TurnResult::Quit,
            Outcome::Pass => {}
        }
    }
    if command.subjects.is_empty() {
        world.say(&format!("What are you trying to {}?", command.verb));
    } else {
        world.say(&format!("You can't {} that.", command.verb));
    }
    TurnResult::Continue
}

/// Collects the actions answering to the command's verb, most specific
/// first: held items, then items in the room, then the room, then the
/// globals.
#[must_use]
pub fn applicable_actions(world: &World, command: &Command) -> Vec<Action> {
    let verb = command.verb.as_str();
    let mut candidates = Vec::new();
    for &id in world.player_items() {
        let item = world.item(id);
        for action in item.actions() {
            if action.matches(verb) {
                candidates.push(action.clone());
            }
        }
        if matches!(verb, "look" | "l") {
            candidates.push(held_look_action(id));
        }
    }
    let room = world.player_room();
    for &id in world.room(room).items() {
        let item = world.item(id);
        for action in item.vicinity_actions() {
            if action.matches(verb) {
                candidates.push(action.clone());
            }
        }
        if !item.is_hidden() && matches!(verb, "look" | "l" | "examine" | "x") {
            candidates.push(vicinity_look_action(id));
        }
    }
    for action in world.room(room).actions() {
        if action.matches(verb) {
            candidates.push(action.clone());
        }
    }
    for action in world.global_actions() {
        if action.matches(verb) {
            candidates.push(action.clone());
        }
    }
    candidates
}

/// The implicit "look at a held item" action: prints its inventory text.
fn held_look_action(id: ItemId) -> Action {
    Action::new(&["look", "l"], move |world, _| {
        let text = world.item(id).held_text(world);
        world.say(&text);
        Outcome::Handled
    })
    .requiring_subject(id)
}

/// The implicit "look at a nearby item" action: prints its room text.
fn vicinity_look_action(id: ItemId) -> Action {
    Action::new(&["look", "l", "examine", "x"], move |world, _| {
        let text = world.item(id).dropped_text(world);
        world.say(&text);
        Outcome::Handled
    })
    .requiring_subject(id)
}

/// Polls the turn-end hooks: the player's room first, then each item
/// listed there, each at most once.
pub fn end_turn(world: &mut World) {
    let room = world.player_room();
    if let Some(hook) = world.room(room).turn_end_hook() {
        hook(world);
    }
    let items: Vec<_> = world.room(room).items().to_vec();
    for id in items {
        if let Some(hook) = world.item(id).turn_end_hook() {
            hook(world);
        }
    }
}
