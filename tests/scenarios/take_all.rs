//! The take-all scenario: visible items come along, hidden items stay,
//! fixtures refuse out loud.

use spelunk_foundation::Transcript;
use spelunk_parser::{process, stdlib};
use spelunk_world::{OwnerId, World, WorldBuilder};

fn cluttered_room(transcript: &Transcript) -> World {
    let mut builder = WorldBuilder::with_output(0, Box::new(transcript.clone()));
    builder.room("attic", "The attic.", "A cluttered attic.", |room| {
        for ident in ["coin", "feather", "ghost", "beam"] {
            let item = room.item(ident)?;
            room.place(item);
        }
        Ok(())
    });
    builder.item("coin", &["coin"], "Old coin", "A coin glints here.", |_| Ok(()));
    builder.item("feather", &["feather"], "Gray feather", "A feather drifts here.", |_| Ok(()));
    builder.item("ghost", &["ghost"], "Pale ghost", "", |item| {
        item.hidden();
        Ok(())
    });
    builder.fixture("beam", &["beam"], "A roof beam crosses overhead.", |_| Ok(()));
    let mut world = builder.finish("attic").unwrap();
    stdlib::install(&mut world);
    world.primitive_move_player(world.start());
    world
}

#[test]
fn take_all_takes_visible_items_and_skips_hidden_ones() {
    let transcript = Transcript::new();
    let mut world = cluttered_room(&transcript);
    let attic = world.find_room("attic").unwrap();
    let coin = world.find_item("coin").unwrap();
    let feather = world.find_item("feather").unwrap();
    let ghost = world.find_item("ghost").unwrap();
    transcript.clear();

    process(&mut world, "take all");
    assert!(world.player_holds(coin));
    assert!(world.player_holds(feather));
    assert_eq!(world.item(ghost).owner(), OwnerId::Room(attic));
    assert!(transcript.contains("You are now carrying the coin."));
    assert!(transcript.contains("You are now carrying the feather."));
}

#[test]
fn take_all_lets_fixtures_refuse_audibly() {
    let transcript = Transcript::new();
    let mut world = cluttered_room(&transcript);
    let attic = world.find_room("attic").unwrap();
    let beam = world.find_item("beam").unwrap();
    transcript.clear();

    process(&mut world, "take all");
    assert_eq!(world.item(beam).owner(), OwnerId::Room(attic));
    assert!(transcript.contains("The beam is fixed in place."));
}

#[test]
fn take_all_in_an_empty_room_says_so() {
    let transcript = Transcript::new();
    let mut builder = WorldBuilder::with_output(0, Box::new(transcript.clone()));
    builder.room("void", "The void.", "Nothing here.", |_| Ok(()));
    let mut world = builder.finish("void").unwrap();
    stdlib::install(&mut world);
    world.primitive_move_player(world.start());
    transcript.clear();

    process(&mut world, "take all");
    assert!(transcript.contains("There is nothing here to take."));
}

#[test]
fn hidden_items_are_not_listed_in_room_descriptions() {
    let transcript = Transcript::new();
    let mut world = cluttered_room(&transcript);
    transcript.clear();

    process(&mut world, "look");
    assert!(transcript.contains("A coin glints here."));
    assert!(!transcript.contains("ghost"));
}
