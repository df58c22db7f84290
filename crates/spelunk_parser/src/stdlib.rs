//! The standard global vocabulary.
//!
//! [`install`] adds the verbs every game starts with: looking, inventory,
//! take/drop, movement, quitting, and the two debug verbs (`summon`,
//! `teleport`) that bypass the move protocol.

use spelunk_world::{Action, Command, Direction, Outcome, OwnerId, World};

/// Installs the standard vocabulary into a built world.
pub fn install(world: &mut World) {
    world.add_global_action(Action::new(&["look", "l"], |world, command| {
        if command.subjects.is_empty() {
            let room = world.player_room();
            world.describe_room_fully(room);
        } else {
            world.say("You don't see any such thing.");
        }
        Outcome::Handled
    }));

    world.add_global_action(Action::new(&["inventory", "i", "inv"], |world, _| {
        if world.player_items().is_empty() {
            world.say("You are carrying nothing.");
        } else {
            let lines: Vec<String> = world
                .player_items()
                .iter()
                .map(|&id| world.item(id).held_text(world))
                .collect();
            world.say("You are currently holding the following:");
            for line in lines {
                world.say(&line);
            }
        }
        Outcome::Handled
    }));

    world.add_global_action(Action::new(&["take", "get", "pick"], take));
    world.add_global_action(Action::new(&["drop"], drop_item));
    world.add_global_action(Action::new(&["go", "walk"], go));

    for direction in Direction::STANDARD {
        let mut words = vec![direction.name().to_string()];
        if let Some(alias) = direction.alias() {
            words.push(alias.to_string());
        }
        let word_refs: Vec<&str> = words.iter().map(String::as_str).collect();
        let dir = direction.clone();
        world.add_global_action(Action::new(&word_refs, move |world, _| {
            walk(world, &dir);
            Outcome::Handled
        }));
    }

    world.add_global_action(Action::new(&["quit", "bye"], |_, _| Outcome::Quit));

    world.add_global_action(Action::new(&["say", "speak"], |world, command| {
        if command.subjects.is_empty() {
            return Outcome::Pass;
        }
        world.say(&format!("Okay, \"{}\".", command.subjects.join(" ")));
        Outcome::Handled
    }));

    // The magic word does nothing unless a room gives it meaning.
    world.add_global_action(Action::new(&["xyzzy"], |world, _| {
        world.say("Nothing happens.");
        Outcome::Handled
    }));

    world.add_global_action(Action::new(&["summon"], summon));
    world.add_global_action(Action::new(&["teleport"], teleport));
}

fn take(world: &mut World, command: &Command) -> Outcome {
    if command.subjects.is_empty() {
        return Outcome::Pass;
    }
    let room = world.player_room();
    if command.subjects.iter().any(|s| s == "all") {
        let here: Vec<_> = world.room(room).items().to_vec();
        let takeable: Vec<_> = here
            .into_iter()
            .filter(|&id| !world.item(id).is_hidden() && !world.player_holds(id))
            .collect();
        if takeable.is_empty() {
            world.say("There is nothing here to take.");
        } else {
            for id in takeable {
                world.move_item(id, OwnerId::Player);
            }
        }
        return Outcome::Handled;
    }
    let target = world
        .room(room)
        .items()
        .iter()
        .copied()
        .find(|&id| !world.player_holds(id) && world.item(id).is_referred_to(command));
    match target {
        Some(id) => {
            world.move_item(id, OwnerId::Player);
            Outcome::Handled
        }
        None => {
            world.say("There is no such thing here.");
            Outcome::Handled
        }
    }
}

fn drop_item(world: &mut World, command: &Command) -> Outcome {
    if command.subjects.is_empty() {
        return Outcome::Pass;
    }
    let target = world
        .player_items()
        .iter()
        .copied()
        .find(|&id| world.item(id).is_referred_to(command));
    match target {
        Some(id) => {
            let room = world.player_room();
            world.move_item(id, OwnerId::Room(room));
            Outcome::Handled
        }
        None => {
            world.say("You don't have that.");
            Outcome::Handled
        }
    }
}

fn go(world: &mut World, command: &Command) -> Outcome {
    let Some(word) = command.subjects.first() else {
        world.say("Go where?");
        return Outcome::Handled;
    };
    let room = world.player_room();
    if let Some(direction) = Direction::named(word) {
        walk(world, &direction);
    } else if world
        .room(room)
        .exit_to(&Direction::Custom(word.clone()))
        .is_some()
    {
        walk(world, &Direction::Custom(word.clone()));
    } else {
        world.say("I don't know how to go there.");
    }
    Outcome::Handled
}

fn walk(world: &mut World, direction: &Direction) {
    let room = world.player_room();
    match world.room(room).exit_to(direction) {
        // A refused move has already printed its refusal.
        Some(target) => {
            world.move_player(target);
        }
        None => world.say("You can't go that way."),
    }
}

fn summon(world: &mut World, command: &Command) -> Outcome {
    let Some(word) = command.subjects.first() else {
        return Outcome::Pass;
    };
    match world.find_item(word) {
        Some(id) => {
            let room = world.player_room();
            world.primitive_move_item(id, OwnerId::Room(room));
            let name = world.item(id).name().to_string();
            world.say(&format!("With a soft pop, the {name} appears."));
        }
        None => world.say("A gust of wind blows, but nothing happens."),
    }
    Outcome::Handled
}

fn teleport(world: &mut World, command: &Command) -> Outcome {
    let Some(word) = command.subjects.first() else {
        return Outcome::Pass;
    };
    match world.find_room(word) {
        Some(room) => world.primitive_move_player(room),
        None => world.say("A gust of wind blows, but nothing happens."),
    }
    Outcome::Handled
}
