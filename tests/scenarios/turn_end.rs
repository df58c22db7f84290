//! Turn-end hooks, played through the dispatcher.

use std::cell::RefCell;
use std::rc::Rc;

use spelunk_foundation::Transcript;
use spelunk_parser::{process, stdlib, TurnResult};
use spelunk_world::{World, WorldBuilder};

fn study(transcript: &Transcript, log: &Rc<RefCell<Vec<&'static str>>>) -> World {
    let mut builder = WorldBuilder::with_output(0, Box::new(transcript.clone()));
    let room_log = Rc::clone(log);
    builder.room("study", "The study.", "A book-lined study.", move |room| {
        let clock = room.item("clock")?;
        room.place(clock);
        let mouse = room.item("mouse")?;
        room.place(mouse);
        room.on_turn_end(move |_| room_log.borrow_mut().push("room"));
        Ok(())
    });
    let clock_log = Rc::clone(log);
    builder.item(
        "clock",
        &["clock"],
        "Carriage clock",
        "A carriage clock ticks on the mantel.",
        move |item| {
            item.on_turn_end(move |_| clock_log.borrow_mut().push("clock"));
            Ok(())
        },
    );
    let mouse_log = Rc::clone(log);
    builder.item(
        "mouse",
        &["mouse"],
        "Grey mouse",
        "A grey mouse watches you from the skirting.",
        move |item| {
            item.on_turn_end(move |_| mouse_log.borrow_mut().push("mouse"));
            Ok(())
        },
    );
    let mut world = builder.finish("study").unwrap();
    stdlib::install(&mut world);
    world.primitive_move_player(world.start());
    world
}

#[test]
fn hooks_fire_once_per_turn_room_first_then_items() {
    let transcript = Transcript::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut world = study(&transcript, &log);
    log.borrow_mut().clear();

    process(&mut world, "look");
    assert_eq!(*log.borrow(), vec!["room", "clock", "mouse"]);
}

#[test]
fn even_a_misunderstood_command_spends_a_turn() {
    let transcript = Transcript::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut world = study(&transcript, &log);
    log.borrow_mut().clear();

    process(&mut world, "florp");
    assert_eq!(*log.borrow(), vec!["room", "clock", "mouse"]);
}

#[test]
fn blank_input_does_not_spend_a_turn() {
    let transcript = Transcript::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut world = study(&transcript, &log);
    log.borrow_mut().clear();

    process(&mut world, "");
    process(&mut world, "   ");
    assert!(log.borrow().is_empty());
}

#[test]
fn quitting_does_not_spend_a_turn() {
    let transcript = Transcript::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut world = study(&transcript, &log);
    log.borrow_mut().clear();

    assert_eq!(process(&mut world, "quit"), TurnResult::Quit);
    assert!(log.borrow().is_empty());
}

#[test]
fn a_pocketed_item_stops_being_polled() {
    let transcript = Transcript::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut world = study(&transcript, &log);

    process(&mut world, "take clock");
    log.borrow_mut().clear();

    process(&mut world, "look");
    assert_eq!(*log.borrow(), vec!["room", "mouse"]);
}
