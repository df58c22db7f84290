//! Fixtures and scenery details, played through the dispatcher.

use spelunk_foundation::Transcript;
use spelunk_parser::{process, stdlib};
use spelunk_world::{World, WorldBuilder};

fn chapel(transcript: &Transcript) -> World {
    let mut builder = WorldBuilder::with_output(0, Box::new(transcript.clone()));
    builder.room(
        "chapel",
        "The chapel.",
        "A small chapel with a stone altar.",
        |room| {
            let altar = room.item("altar")?;
            room.place(altar);
            let candle = room.item("candle")?;
            room.place(candle);
            room.detail(
                &["fresco", "painting"],
                &["admire"],
                "A faded fresco of a river crossing covers the ceiling.",
            );
            Ok(())
        },
    );
    builder.fixture("altar", &["altar"], "A stone altar stands here.", |_| Ok(()));
    builder.item(
        "candle",
        &["candle"],
        "Tallow candle",
        "A tallow candle rests on the altar.",
        |_| Ok(()),
    );
    let mut world = builder.finish("chapel").unwrap();
    stdlib::install(&mut world);
    world.primitive_move_player(world.start());
    world
}

#[test]
fn a_fixture_refuses_to_be_taken() {
    let transcript = Transcript::new();
    let mut world = chapel(&transcript);
    transcript.clear();

    process(&mut world, "take altar");
    assert!(transcript.contains("The altar is fixed in place."));
    assert!(world.player_items().is_empty());
}

#[test]
fn an_ordinary_item_still_comes_along() {
    let transcript = Transcript::new();
    let mut world = chapel(&transcript);
    transcript.clear();

    process(&mut world, "take candle");
    assert!(transcript.contains("You are now carrying the candle."));
}

#[test]
fn details_answer_look_and_their_extra_verbs() {
    let transcript = Transcript::new();
    let mut world = chapel(&transcript);
    transcript.clear();

    process(&mut world, "look fresco");
    assert!(transcript.contains("A faded fresco of a river crossing"));

    transcript.clear();
    process(&mut world, "admire painting");
    assert!(transcript.contains("A faded fresco of a river crossing"));
}

#[test]
fn details_stay_out_of_the_room_listing() {
    let transcript = Transcript::new();
    let mut world = chapel(&transcript);
    transcript.clear();

    process(&mut world, "look");
    assert!(transcript.contains("A stone altar stands here."));
    assert!(!transcript.contains("fresco"));
}

#[test]
fn taking_a_detail_is_gently_mocked() {
    let transcript = Transcript::new();
    let mut world = chapel(&transcript);
    transcript.clear();

    process(&mut world, "take fresco");
    assert!(transcript.contains("You can't be serious."));
}
