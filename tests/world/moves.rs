//! Move protocol tests: approval order, atomicity, notifications.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spelunk_foundation::Transcript;
use spelunk_world::{OwnerId, World, WorldBuilder};

/// One room, one loose item, nothing else.
fn simple_world(transcript: &Transcript) -> World {
    let mut builder = WorldBuilder::with_output(0, Box::new(transcript.clone()));
    builder.room("cell", "Cell.", "A bare cell.", |room| {
        let coin = room.item("coin")?;
        room.place(coin);
        Ok(())
    });
    builder.item("coin", &["coin"], "Gold coin", "A coin lies here.", |_| {
        Ok(())
    });
    builder.finish("cell").unwrap()
}

#[test]
fn moved_item_has_exactly_one_owner() {
    let transcript = Transcript::new();
    let mut world = simple_world(&transcript);
    let cell = world.find_room("cell").unwrap();
    let coin = world.find_item("coin").unwrap();

    assert_eq!(world.item(coin).owner(), OwnerId::Room(cell));
    assert!(world.move_item(coin, OwnerId::Player));

    assert_eq!(world.item(coin).owner(), OwnerId::Player);
    assert!(world.player_holds(coin));
    assert!(!world.room_lists(cell, coin));
    assert!(!world.limbo_items().contains(&coin));
}

#[test]
fn player_gets_carry_and_drop_notices() {
    let transcript = Transcript::new();
    let mut world = simple_world(&transcript);
    let cell = world.find_room("cell").unwrap();
    let coin = world.find_item("coin").unwrap();

    world.move_item(coin, OwnerId::Player);
    assert!(transcript.contains("You are now carrying the coin."));

    world.move_item(coin, OwnerId::Room(cell));
    assert!(transcript.contains("You dropped the coin."));
}

#[test]
fn refused_move_changes_nothing_and_sends_no_notifications() {
    let transcript = Transcript::new();
    let mut builder = WorldBuilder::with_output(0, Box::new(transcript.clone()));
    let moved = Rc::new(Cell::new(false));
    let moved_probe = Rc::clone(&moved);
    builder.room("cell", "Cell.", "A bare cell.", |room| {
        let anchor = room.item("anchor")?;
        room.place(anchor);
        Ok(())
    });
    builder.item(
        "anchor",
        &["anchor"],
        "Anchor",
        "An anchor sits here.",
        move |item| {
            item.allow_move(|world, _| {
                world.say("It won't budge.");
                false
            });
            let probe = Rc::clone(&moved_probe);
            item.on_move(move |_, _| probe.set(true));
            Ok(())
        },
    );
    let mut world = builder.finish("cell").unwrap();
    let cell = world.find_room("cell").unwrap();
    let anchor = world.find_item("anchor").unwrap();

    assert!(!world.move_item(anchor, OwnerId::Player));
    assert_eq!(world.item(anchor).owner(), OwnerId::Room(cell));
    assert!(!world.player_holds(anchor));
    assert!(transcript.contains("It won't budge."));
    assert!(!moved.get(), "no notification may fire for a refused move");
}

#[test]
fn entity_veto_short_circuits_source_and_destination() {
    let transcript = Transcript::new();
    let mut builder = WorldBuilder::with_output(0, Box::new(transcript.clone()));
    let asked = Rc::new(RefCell::new(Vec::new()));

    let log = Rc::clone(&asked);
    builder.room("source", "Source.", "The source room.", move |room| {
        let stone = room.item("stone")?;
        room.place(stone);
        let log = Rc::clone(&log);
        room.allow_item_out(move |_, _| {
            log.borrow_mut().push("source");
            true
        });
        Ok(())
    });
    let log = Rc::clone(&asked);
    builder.room("sink", "Sink.", "The sink room.", move |room| {
        let log = Rc::clone(&log);
        room.allow_item_in(move |_, _| {
            log.borrow_mut().push("sink");
            true
        });
        Ok(())
    });
    let log = Rc::clone(&asked);
    builder.item("stone", &["stone"], "Stone", "A stone.", move |item| {
        let log = Rc::clone(&log);
        item.allow_move(move |_, _| {
            log.borrow_mut().push("entity");
            false
        });
        Ok(())
    });
    let mut world = builder.finish("source").unwrap();
    let sink = world.find_room("sink").unwrap();
    let stone = world.find_item("stone").unwrap();

    assert!(!world.move_item(stone, OwnerId::Room(sink)));
    assert_eq!(*asked.borrow(), vec!["entity"]);
}

#[test]
fn approvals_run_entity_then_source_then_destination() {
    let transcript = Transcript::new();
    let mut builder = WorldBuilder::with_output(0, Box::new(transcript.clone()));
    let order = Rc::new(RefCell::new(Vec::new()));

    let log = Rc::clone(&order);
    builder.room("source", "Source.", "The source room.", move |room| {
        let stone = room.item("stone")?;
        room.place(stone);
        let log = Rc::clone(&log);
        room.allow_item_out(move |_, _| {
            log.borrow_mut().push("source");
            true
        });
        Ok(())
    });
    let log = Rc::clone(&order);
    builder.room("sink", "Sink.", "The sink room.", move |room| {
        let log = Rc::clone(&log);
        room.allow_item_in(move |_, _| {
            log.borrow_mut().push("sink");
            true
        });
        Ok(())
    });
    let log = Rc::clone(&order);
    builder.item("stone", &["stone"], "Stone", "A stone.", move |item| {
        let log = Rc::clone(&log);
        item.allow_move(move |_, _| {
            log.borrow_mut().push("entity");
            true
        });
        Ok(())
    });
    let mut world = builder.finish("source").unwrap();
    let sink = world.find_room("sink").unwrap();
    let stone = world.find_item("stone").unwrap();

    assert!(world.move_item(stone, OwnerId::Room(sink)));
    assert_eq!(*order.borrow(), vec!["entity", "source", "sink"]);
}

#[test]
fn notifications_run_entity_then_source_then_destination() {
    let transcript = Transcript::new();
    let mut builder = WorldBuilder::with_output(0, Box::new(transcript.clone()));
    let order = Rc::new(RefCell::new(Vec::new()));

    let log = Rc::clone(&order);
    builder.room("source", "Source.", "The source room.", move |room| {
        let stone = room.item("stone")?;
        room.place(stone);
        let log = Rc::clone(&log);
        room.on_item_out(move |_, _| log.borrow_mut().push("source"));
        Ok(())
    });
    let log = Rc::clone(&order);
    builder.room("sink", "Sink.", "The sink room.", move |room| {
        let log = Rc::clone(&log);
        room.on_item_in(move |_, _| log.borrow_mut().push("sink"));
        Ok(())
    });
    let log = Rc::clone(&order);
    builder.item("stone", &["stone"], "Stone", "A stone.", move |item| {
        let log = Rc::clone(&log);
        item.on_move(move |_, _| log.borrow_mut().push("entity"));
        Ok(())
    });
    let mut world = builder.finish("source").unwrap();
    let sink = world.find_room("sink").unwrap();
    let stone = world.find_item("stone").unwrap();

    assert!(world.move_item(stone, OwnerId::Room(sink)));
    assert_eq!(*order.borrow(), vec!["entity", "source", "sink"]);
}

#[test]
fn primitive_move_skips_approvals_and_notifications() {
    let transcript = Transcript::new();
    let mut builder = WorldBuilder::with_output(0, Box::new(transcript.clone()));
    builder.room("cell", "Cell.", "A bare cell.", |room| {
        let anchor = room.item("anchor")?;
        room.place(anchor);
        Ok(())
    });
    builder.item(
        "anchor",
        &["anchor"],
        "Anchor",
        "An anchor sits here.",
        |item| {
            item.allow_move(|world, _| {
                world.say("It won't budge.");
                false
            });
            Ok(())
        },
    );
    let mut world = builder.finish("cell").unwrap();
    let anchor = world.find_item("anchor").unwrap();

    world.primitive_move_item(anchor, OwnerId::Player);
    assert_eq!(world.item(anchor).owner(), OwnerId::Player);
    assert!(!transcript.contains("It won't budge."));
    assert!(!transcript.contains("You are now carrying"));
}

#[test]
fn fixtures_refuse_moves_between_in_play_owners() {
    let transcript = Transcript::new();
    let mut builder = WorldBuilder::with_output(0, Box::new(transcript.clone()));
    builder.room("shrine", "Shrine.", "A quiet shrine.", |room| {
        let altar = room.item("altar")?;
        room.place(altar);
        Ok(())
    });
    builder.fixture("altar", &["altar"], "A stone altar stands here.", |_| {
        Ok(())
    });
    let mut world = builder.finish("shrine").unwrap();
    let shrine = world.find_room("shrine").unwrap();
    let altar = world.find_item("altar").unwrap();

    assert!(!world.move_item(altar, OwnerId::Player));
    assert_eq!(world.item(altar).owner(), OwnerId::Room(shrine));
    assert!(transcript.contains("The altar is fixed in place."));

    // Moving out to limbo, and back in from limbo, is allowed.
    assert!(world.move_item(altar, OwnerId::Limbo));
    assert!(world.move_item(altar, OwnerId::Room(shrine)));
}
