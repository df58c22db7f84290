//! A compact cave demonstration world.
//!
//! Small enough to read in one sitting, but it exercises the whole
//! engine: outdoors fallbacks, two-way and named exits, conditional
//! exits, dark rooms lit by a toggled lantern, fixtures and scenery
//! details, guarded actions, item self-vetoes, arrival reactions, and a
//! probabilistic turn-end hazard.

use spelunk_foundation::{Output, Result};
use spelunk_parser::stdlib;
use spelunk_world::{Action, Direction, Outcome, OwnerId, World, WorldBuilder};

/// Builds the demonstration world. The game starts outside the well
/// house.
///
/// # Errors
///
/// Returns an error only if the world definition itself is inconsistent,
/// which would be a bug in this module.
pub fn build_demo(seed: u64, output: Box<dyn Output>) -> Result<World> {
    let mut b = WorldBuilder::with_output(seed, output);

    let lamp_flame = b.toggle(
        "lamp-flame",
        "Your lamp is now on.",
        "Your lamp is now off.",
        "Your lamp is already on.",
        "Your lamp is already off.",
        false,
    );
    let grate_lock = b.toggle(
        "grate-lock",
        "The grate is now open.",
        "The grate is now closed.",
        "It's already open.",
        "It's already closed.",
        false,
    );

    b.outdoors(
        "outside-building",
        "You're in front of building.",
        "You are standing at the end of a road before a small brick building.
         Around you is a forest. A small stream flows out of the building and
         down a gully.",
        "forest",
        |room| {
            let inside = room.room("inside-building")?;
            let valley = room.room("valley")?;
            room.two_way(Direction::In, inside)?;
            room.two_way(Direction::East, inside)?;
            room.two_way(Direction::South, valley)?;
            room.named_exit("downstream", valley)?;
            room.detail(
                &["sign", "building", "well", "house"],
                &["read"],
                "A sign on the building reads, \"Welcome to the Colossal Cave.\"",
            );
            Ok(())
        },
    );

    b.room(
        "inside-building",
        "You're inside building.",
        "You are inside a building, a well house for a large spring.",
        |room| {
            for ident in ["keys", "lantern", "food", "bottle"] {
                let item = room.item(ident)?;
                room.place(item);
            }
            let debris = room.room("debris")?;
            room.action(Action::new(&["xyzzy"], move |world, _| {
                world.primitive_move_player(debris);
                Outcome::Handled
            }));
            Ok(())
        },
    );

    b.outdoors(
        "forest",
        "You're in forest.",
        "You are in open forest, with a deep valley to one side.",
        "forest",
        |room| {
            let outside = room.room("outside-building")?;
            let valley = room.room("valley")?;
            room.exit(Direction::East, outside)?;
            room.exit(Direction::Down, valley)?;
            room.detail(
                &["trees", "forest", "oak", "maple"],
                &[],
                "The trees of the forest are large hardwood oak and maple, with an
                 occasional grove of pine or spruce.",
            );
            // Anything dropped out here would never be seen again.
            room.allow_item_in(|world, mv| {
                if mv.from == OwnerId::Player {
                    world.say("It would be lost in the undergrowth.");
                    false
                } else {
                    true
                }
            });
            Ok(())
        },
    );

    b.outdoors(
        "valley",
        "You're in valley.",
        "You are in a valley in the forest beside a stream tumbling along a
         rocky bed.",
        "forest",
        |room| {
            let grate_room = room.room("outside-grate")?;
            room.two_way(Direction::South, grate_room)?;
            room.named_exit("downstream", grate_room)?;
            Ok(())
        },
    );

    b.outdoors(
        "outside-grate",
        "You're outside grate.",
        "You are in a 20-foot depression floored with bare dirt. Set into the
         dirt is a strong steel grate mounted in concrete. A dry streambed
         leads into the depression.",
        "forest",
        move |room| {
            let below = room.room("below-grate")?;
            let grate = room.item("grate")?;
            room.place(grate);
            room.exit_unless(
                &[Direction::Down, Direction::In],
                below,
                "You can't go through a locked steel grate!",
                move |world| !world.toggle_is_on(grate_lock),
            )?;
            Ok(())
        },
    );

    b.room(
        "below-grate",
        "You're below the grate.",
        "You are in a small chamber beneath a 3x3 steel grate to the surface.
         A low crawl over cobbles leads inward to the west.",
        move |room| {
            let above = room.room("outside-grate")?;
            let cobble = room.room("cobble")?;
            let grate = room.item("grate")?;
            room.place(grate);
            room.exit_unless(
                &[Direction::Up, Direction::Out],
                above,
                "You can't go through a locked steel grate!",
                move |world| !world.toggle_is_on(grate_lock),
            )?;
            room.two_way(Direction::West, cobble)?;
            Ok(())
        },
    );

    b.room(
        "cobble",
        "You're in cobble crawl.",
        "You are crawling over cobbles in a low passage. There is a dim light
         at the east end of the passage.",
        |room| {
            let cage = room.item("cage")?;
            room.place(cage);
            let debris = room.room("debris")?;
            room.two_way(Direction::West, debris)?;
            Ok(())
        },
    );

    b.dark_room(
        "debris",
        "You're in debris room.",
        "You are in a debris room filled with stuff washed in from the
         surface. A low wide passage with cobbles becomes plugged with mud and
         debris here, but an awkward canyon leads upward and west. A note on
         the wall says, \"Magic word XYZZY.\"",
        |room| {
            let rod = room.item("rod")?;
            room.place(rod);
            let inside = room.room("inside-building")?;
            room.action(Action::new(&["xyzzy"], move |world, _| {
                world.primitive_move_player(inside);
                Outcome::Handled
            }));
            let chamber = room.room("bird-chamber")?;
            room.two_way(Direction::West, chamber)?;
            room.exit(Direction::Up, chamber)?;
            Ok(())
        },
    );

    b.dark_room(
        "bird-chamber",
        "You're in bird chamber.",
        "You are in a splendid chamber thirty feet high. The walls are frozen
         rivers of orange stone. A cheerful little bird is sitting here
         singing.",
        |room| {
            let bird = room.item("bird")?;
            room.place(bird);
            let hall = room.room("snake-hall")?;
            room.two_way(Direction::West, hall)?;
            Ok(())
        },
    );

    b.dark_room(
        "snake-hall",
        "You're in Hall of the Mountain King.",
        "You are in the Hall of the Mountain King, with passages off in all
         directions.",
        |room| {
            let snake = room.item("snake")?;
            let dwarf = room.item("dwarf")?;
            let bird = room.item("bird")?;
            let nugget_room = room.room("nugget-room")?;
            let hall = room.room("snake-hall")?;
            room.place(snake);
            room.place(dwarf);
            room.exit_unless(
                &[Direction::West],
                nugget_room,
                "You can't get by the snake.",
                move |world| world.item(snake).owner() == OwnerId::Room(hall),
            )?;
            room.on_item_arrival(bird, move |world| {
                if world.item(snake).owner() == OwnerId::Room(hall) {
                    world.primitive_move_item(snake, OwnerId::Limbo);
                    world.say(
                        "The little bird attacks the green snake, and in an
                         astounding flurry drives the snake away.",
                    );
                }
            });
            Ok(())
        },
    );

    b.dark_room(
        "nugget-room",
        "You're in nugget-of-gold room.",
        "This is a low room with a crude note on the wall. The note says,
         \"You won't get it up the steps\".",
        |room| {
            let nugget = room.item("nugget")?;
            let hall = room.room("snake-hall")?;
            room.place(nugget);
            room.exit(Direction::East, hall)?;
            Ok(())
        },
    );

    b.item(
        "keys",
        &["keys", "key"],
        "Set of keys",
        "There are some keys on the ground here.",
        |item| {
            item.plural();
            Ok(())
        },
    );

    b.item(
        "lantern",
        &["lantern", "lamp"],
        "Brass lantern",
        "There is a shiny brass lamp nearby.",
        move |item| {
            item.light_source(lamp_flame);
            item.held_description(move |world| {
                if world.toggle_is_on(lamp_flame) {
                    "Brass lantern, burning brightly".to_string()
                } else {
                    "Brass lantern".to_string()
                }
            });
            item.dropped_description(move |world| {
                if world.toggle_is_on(lamp_flame) {
                    "There is a lamp shining nearby.".to_string()
                } else {
                    "There is a shiny brass lamp nearby.".to_string()
                }
            });
            let on = Action::new(&["on", "light"], move |world, _| {
                world.turn_on(lamp_flame);
                Outcome::Handled
            });
            let off = Action::new(&["off", "extinguish"], move |world, _| {
                world.turn_off(lamp_flame);
                Outcome::Handled
            });
            let turn = Action::new(&["turn", "switch"], move |world, command| {
                if command.subjects.iter().any(|s| s == "on") {
                    world.turn_on(lamp_flame);
                    Outcome::Handled
                } else if command.subjects.iter().any(|s| s == "off") {
                    world.turn_off(lamp_flame);
                    Outcome::Handled
                } else {
                    Outcome::Pass
                }
            });
            item.action(on.clone());
            item.action(off.clone());
            item.action(turn.clone());
            item.vicinity_action(on);
            item.vicinity_action(off);
            item.vicinity_action(turn);
            Ok(())
        },
    );

    b.item(
        "food",
        &["food"],
        "Tasty food",
        "There is food here.",
        |item| {
            let food = item.id();
            let eat = Action::new(&["eat"], move |world, _| {
                world.primitive_move_item(food, OwnerId::Limbo);
                world.say("Thank you, it was delicious!");
                Outcome::Handled
            });
            item.action(eat.clone());
            item.vicinity_action(eat);
            Ok(())
        },
    );

    b.item(
        "bottle",
        &["bottle", "water"],
        "Small bottle of water",
        "There is a bottle of water here.",
        |item| {
            let drink = Action::new(&["drink"], |world, _| {
                world.say("The cool refreshing water helps a little.");
                Outcome::Handled
            });
            item.action(drink.clone());
            item.vicinity_action(drink);
            Ok(())
        },
    );

    b.fixture(
        "grate",
        &["grate"],
        "The grate is locked.",
        move |item| {
            let keys = item.item("keys")?;
            item.cant_take_message("The grate is firmly fastened into the concrete.");
            item.dropped_description(move |world| {
                if world.toggle_is_on(grate_lock) {
                    "The grate stands open.".to_string()
                } else {
                    "The grate is locked.".to_string()
                }
            });
            let open = Action::new(&["open", "unlock"], move |world, _| {
                world.turn_on(grate_lock);
                Outcome::Handled
            })
            .guarded_by(move |world, _| world.player_holds(keys), "You have no keys!");
            let close = Action::new(&["close", "lock"], move |world, _| {
                world.turn_off(grate_lock);
                Outcome::Handled
            });
            item.vicinity_action(open);
            item.vicinity_action(close);
            Ok(())
        },
    );

    b.item(
        "rod",
        &["rod"],
        "Black rod",
        "A three foot black rod with a rusty star on an end lies nearby.",
        |item| {
            let bird = item.item("bird")?;
            let chamber = item.room("bird-chamber")?;
            item.action(Action::new(&["wave"], move |world, _| {
                if world.player_room() == chamber
                    && world.item(bird).owner() == OwnerId::Room(chamber)
                {
                    world.say("The bird flies agitatedly about the chamber as you wave the rod.");
                } else {
                    world.say("Nothing happens.");
                }
                Outcome::Handled
            }));
            Ok(())
        },
    );

    b.item(
        "cage",
        &["cage"],
        "Wicker cage",
        "There is a small wicker cage discarded nearby.",
        |_| Ok(()),
    );

    b.item(
        "bird",
        &["bird"],
        "Little bird",
        "A cheerful little bird is sitting here singing.",
        |item| {
            let bird = item.id();
            let rod = item.item("rod")?;
            let cage = item.item("cage")?;
            let caged = item.item("caged-bird")?;
            item.allow_move(move |world, mv| {
                if mv.to != OwnerId::Player {
                    return true;
                }
                if world.player_holds(rod) {
                    world.say(
                        "The bird was unafraid when you entered, but as you approach
                         it becomes disturbed and you cannot catch it.",
                    );
                    false
                } else if !world.player_holds(cage) {
                    world.say("You can catch the bird, but you cannot carry it.");
                    false
                } else {
                    true
                }
            });
            item.on_move(move |world, mv| {
                // Caught bare-handed never happens; with the cage in hand
                // the bird and cage merge into the caged bird.
                if mv.to == OwnerId::Player {
                    world.primitive_move_item(bird, OwnerId::Limbo);
                    world.primitive_move_item(cage, OwnerId::Limbo);
                    world.primitive_move_item(caged, OwnerId::Player);
                }
            });
            Ok(())
        },
    );

    b.item(
        "caged-bird",
        &["bird"],
        "Little bird in cage",
        "There is a little bird in the cage.",
        |item| {
            let caged = item.id();
            let bird = item.item("bird")?;
            let cage = item.item("cage")?;
            let release = Action::new(&["release", "open", "free"], move |world, _| {
                world.primitive_move_item(caged, OwnerId::Limbo);
                world.primitive_move_item(cage, OwnerId::Player);
                let here = world.player_room();
                world.say("The bird flies from the cage.");
                world.move_item(bird, OwnerId::Room(here));
                Outcome::Handled
            });
            item.action(release);
            Ok(())
        },
    );

    b.fixture(
        "snake",
        &["snake"],
        "A huge green fierce snake bars the way!",
        |item| {
            item.cant_take_message("You can't take the snake. It doesn't seem very friendly.");
            Ok(())
        },
    );

    b.fixture("dwarf", &["dwarf"], "", |item| {
        let axe = item.item("axe")?;
        item.hidden();
        item.cant_take_message("The dwarf dodges out of reach, cursing.");
        item.on_turn_end(move |world| {
            if world.item(axe).owner() == OwnerId::Limbo && world.chance(0.3) {
                let here = world.player_room();
                world.primitive_move_item(axe, OwnerId::Room(here));
                world.say(
                    "A little dwarf just walked around a corner, saw you, threw a
                     little axe at you which missed, cursed, and ran away.",
                );
            }
        });
        Ok(())
    });

    b.item(
        "axe",
        &["axe"],
        "Little axe",
        "There is a little axe here.",
        |_| Ok(()),
    );

    b.item(
        "nugget",
        &["nugget", "gold"],
        "Large gold nugget",
        "There is a large sparkling nugget of gold here!",
        |_| Ok(()),
    );

    let mut world = b.finish("outside-building")?;
    stdlib::install(&mut world);
    Ok(world)
}
