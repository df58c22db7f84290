//! Dispatch tests: specificity order, pass fall-through, guard ordering,
//! and the fallback messages.

use proptest::prelude::*;
use spelunk_foundation::Transcript;
use spelunk_parser::{process, TurnResult};
use spelunk_world::{Action, Outcome, OwnerId, World, WorldBuilder};

/// A room with a "rub" action at every tier: on a held charm, on a nearby
/// statue, on the room, and globally. Each handler can be told to pass by
/// rubbing something that is not its subject.
fn layered_world(transcript: &Transcript) -> World {
    let mut builder = WorldBuilder::with_output(0, Box::new(transcript.clone()));
    builder.room("shrine", "Shrine.", "A quiet shrine.", |room| {
        let charm = room.item("charm")?;
        let statue = room.item("statue")?;
        room.place(charm);
        room.place(statue);
        room.action(Action::new(&["rub"], |world, command| {
            if command.subjects.iter().any(|s| s == "floor") {
                world.say("You rub the floor.");
                Outcome::Handled
            } else {
                Outcome::Pass
            }
        }));
        Ok(())
    });
    builder.item("charm", &["charm"], "Lucky charm", "A charm lies here.", |item| {
        item.action(Action::new(&["rub"], |world, _| {
            world.say("The charm glows warmly.");
            Outcome::Handled
        }));
        Ok(())
    });
    builder.fixture("statue", &["statue"], "A statue stands here.", |item| {
        item.vicinity_action(Action::new(&["rub"], |world, _| {
            world.say("The statue stays cold.");
            Outcome::Handled
        }));
        Ok(())
    });
    let mut world = builder.finish("shrine").unwrap();
    world.add_global_action(Action::new(&["rub"], |world, _| {
        world.say("You rub your hands together.");
        Outcome::Handled
    }));
    world
}

#[test]
fn held_item_actions_beat_vicinity_room_and_global() {
    let transcript = Transcript::new();
    let mut world = layered_world(&transcript);
    world.primitive_move_player(world.start());
    let charm = world.find_item("charm").unwrap();
    world.primitive_move_item(charm, OwnerId::Player);
    transcript.clear();

    process(&mut world, "rub charm");
    assert_eq!(transcript.lines(), vec!["The charm glows warmly."]);
}

#[test]
fn vicinity_actions_beat_room_and_global() {
    let transcript = Transcript::new();
    let mut world = layered_world(&transcript);
    world.primitive_move_player(world.start());
    transcript.clear();

    process(&mut world, "rub statue");
    assert_eq!(transcript.lines(), vec!["The statue stays cold."]);
}

#[test]
fn passed_commands_fall_through_to_the_room_action() {
    let transcript = Transcript::new();
    let mut world = layered_world(&transcript);
    world.primitive_move_player(world.start());
    transcript.clear();

    // Neither the charm (not held), the statue, nor any subject matches,
    // so the room action's floor branch handles it.
    process(&mut world, "rub floor");
    assert_eq!(transcript.lines(), vec!["You rub the floor."]);
}

#[test]
fn fully_passed_commands_reach_the_global_action() {
    let transcript = Transcript::new();
    let mut world = layered_world(&transcript);
    world.primitive_move_player(world.start());
    transcript.clear();

    process(&mut world, "rub lamp");
    assert_eq!(transcript.lines(), vec!["You rub your hands together."]);
}

#[test]
fn known_word_with_no_candidates_reports_nothing_here() {
    let transcript = Transcript::new();
    let mut builder = WorldBuilder::with_output(0, Box::new(transcript.clone()));
    builder.room("yard", "Yard.", "An empty yard.", |_| Ok(()));
    builder.room("shed", "Shed.", "A cluttered shed.", |room| {
        room.action(Action::new(&["tinker"], |world, _| {
            world.say("You tinker for a while.");
            Outcome::Handled
        }));
        Ok(())
    });
    let mut world = builder.finish("yard").unwrap();
    world.primitive_move_player(world.start());
    transcript.clear();

    // "tinker" is a word somewhere in the world, but not in the yard.
    process(&mut world, "tinker");
    assert_eq!(transcript.lines(), vec!["There is nothing here to tinker."]);
}

#[test]
fn unknown_word_reports_the_whole_input() {
    let transcript = Transcript::new();
    let mut builder = WorldBuilder::with_output(0, Box::new(transcript.clone()));
    builder.room("yard", "Yard.", "An empty yard.", |_| Ok(()));
    let mut world = builder.finish("yard").unwrap();
    world.primitive_move_player(world.start());
    transcript.clear();

    process(&mut world, "plugh plover");
    assert_eq!(
        transcript.lines(),
        vec!["I don't understand \"plugh plover\"."]
    );
}

#[test]
fn all_passed_messages_depend_on_subjects() {
    let transcript = Transcript::new();
    let mut builder = WorldBuilder::with_output(0, Box::new(transcript.clone()));
    builder.room("yard", "Yard.", "An empty yard.", |room| {
        room.action(Action::new(&["wave"], |_, _| Outcome::Pass));
        Ok(())
    });
    let mut world = builder.finish("yard").unwrap();
    world.primitive_move_player(world.start());
    transcript.clear();

    process(&mut world, "wave");
    assert_eq!(transcript.lines(), vec!["What are you trying to wave?"]);
    transcript.clear();

    process(&mut world, "wave wand");
    assert_eq!(transcript.lines(), vec!["You can't wave that."]);
}

#[test]
fn guards_run_latest_first_and_only_the_first_failure_speaks() {
    let transcript = Transcript::new();
    let mut builder = WorldBuilder::with_output(0, Box::new(transcript.clone()));
    builder.room("yard", "Yard.", "An empty yard.", |room| {
        room.action(
            Action::new(&["chant"], |world, _| {
                world.say("The chant echoes.");
                Outcome::Handled
            })
            .guarded_by(|_, _| false, "You don't know the words.")
            .guarded_by(|_, _| false, "Your throat is too dry."),
        );
        Ok(())
    });
    let mut world = builder.finish("yard").unwrap();
    world.primitive_move_player(world.start());
    transcript.clear();

    process(&mut world, "chant");
    assert_eq!(transcript.lines(), vec!["Your throat is too dry."]);
}

#[test]
fn a_passing_guard_defers_to_the_next_one() {
    let transcript = Transcript::new();
    let mut builder = WorldBuilder::with_output(0, Box::new(transcript.clone()));
    builder.room("yard", "Yard.", "An empty yard.", |room| {
        room.action(
            Action::new(&["chant"], |world, _| {
                world.say("The chant echoes.");
                Outcome::Handled
            })
            .guarded_by(|_, _| false, "You don't know the words.")
            .guarded_by(|_, _| true, "Your throat is too dry."),
        );
        Ok(())
    });
    let mut world = builder.finish("yard").unwrap();
    world.primitive_move_player(world.start());
    transcript.clear();

    process(&mut world, "chant");
    assert_eq!(transcript.lines(), vec!["You don't know the words."]);
}

#[test]
fn item_actions_pass_when_the_subject_names_something_else() {
    let transcript = Transcript::new();
    let mut world = layered_world(&transcript);
    world.primitive_move_player(world.start());
    let charm = world.find_item("charm").unwrap();
    world.primitive_move_item(charm, OwnerId::Player);
    transcript.clear();

    // The held charm has a rub action, but the statue is the subject.
    process(&mut world, "rub statue");
    assert_eq!(transcript.lines(), vec!["The statue stays cold."]);
}

proptest! {
    // Anything short of "quit" keeps the session going, and every
    // non-blank line produces at least one reply.
    #[test]
    fn arbitrary_input_never_panics_and_always_answers(input in "[a-z ]{1,40}") {
        let transcript = Transcript::new();
        let mut world = layered_world(&transcript);
        world.primitive_move_player(world.start());
        transcript.clear();

        let result = process(&mut world, &input);
        prop_assert_eq!(result, TurnResult::Continue);
        if !input.trim().is_empty() {
            prop_assert!(!transcript.lines().is_empty());
        }
    }
}
