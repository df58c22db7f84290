//! Two-pass world construction.
//!
//! Declaration and configuration are separate passes so mutually
//! referencing rooms and items can be wired without ordering headaches:
//! declaration methods allocate an identity and queue a configuration
//! closure, and [`WorldBuilder::finish`] runs every queued closure exactly
//! once against a setup context that resolves identifiers declared
//! anywhere in the world.
//!
//! Misconfiguration is a construction failure, never a silent overwrite:
//! duplicate identifiers, doubly wired exits, and unresolvable references
//! all surface as `Err` from `finish`.

use std::rc::Rc;

use log::debug;

use spelunk_foundation::{Error, Output, Result, StdoutOutput};

use crate::action::{Action, Outcome};
use crate::direction::Direction;
use crate::handle::{ItemId, OwnerId, RoomId, ToggleId};
use crate::item::{Description, Item, ItemMove};
use crate::room::{PlayerMove, Room, RoomKind};
use crate::toggle::Toggle;
use crate::world::World;

type RoomConfig = Box<dyn FnOnce(&mut RoomSetup<'_>) -> Result<()>>;
type ItemConfig = Box<dyn FnOnce(&mut ItemSetup<'_>) -> Result<()>>;

/// Builds a [`World`] in two passes.
pub struct WorldBuilder {
    world: World,
    room_configs: Vec<(RoomId, RoomConfig)>,
    item_configs: Vec<(ItemId, ItemConfig)>,
    pending_fallbacks: Vec<(RoomId, String)>,
    errors: Vec<Error>,
}

impl WorldBuilder {
    /// Creates a builder printing to stdout.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_output(seed, Box::new(StdoutOutput))
    }

    /// Creates a builder with a custom output sink.
    #[must_use]
    pub fn with_output(seed: u64, output: Box<dyn Output>) -> Self {
        Self {
            world: World::new(seed, output),
            room_configs: Vec::new(),
            item_configs: Vec::new(),
            pending_fallbacks: Vec::new(),
            errors: Vec::new(),
        }
    }

    // --- declarations ---

    /// Declares an ordinary lit room.
    pub fn room(
        &mut self,
        ident: &str,
        short: &str,
        long: &str,
        config: impl FnOnce(&mut RoomSetup<'_>) -> Result<()> + 'static,
    ) -> RoomId {
        self.declare_room(ident, short, long, RoomKind::Lit, config)
    }

    /// Declares a dark room: its description is gated on a lit light
    /// source.
    pub fn dark_room(
        &mut self,
        ident: &str,
        short: &str,
        long: &str,
        config: impl FnOnce(&mut RoomSetup<'_>) -> Result<()> + 'static,
    ) -> RoomId {
        self.declare_room(ident, short, long, RoomKind::Dark, config)
    }

    /// Declares an outdoors room whose unwired compass directions lead to
    /// the room identified by `fallback` (which may be declared later).
    pub fn outdoors(
        &mut self,
        ident: &str,
        short: &str,
        long: &str,
        fallback: &str,
        config: impl FnOnce(&mut RoomSetup<'_>) -> Result<()> + 'static,
    ) -> RoomId {
        let id = self.declare_room(
            ident,
            short,
            long,
            RoomKind::Outdoors {
                fallback: RoomId::NOWHERE,
            },
            config,
        );
        self.pending_fallbacks.push((id, fallback.to_lowercase()));
        id
    }

    fn declare_room(
        &mut self,
        ident: &str,
        short: &str,
        long: &str,
        kind: RoomKind,
        config: impl FnOnce(&mut RoomSetup<'_>) -> Result<()> + 'static,
    ) -> RoomId {
        let id = RoomId::new(self.world.rooms.len());
        self.world.rooms.push(Room::new(ident, short, long, kind));
        let key = ident.to_lowercase();
        if self.world.rooms_by_ident.insert(key, id).is_some() {
            self.errors.push(Error::duplicate_ident(ident.to_lowercase()));
        }
        self.room_configs.push((id, Box::new(config)));
        id
    }

    /// Declares a portable item. It starts in limbo until placed.
    pub fn item(
        &mut self,
        ident: &str,
        names: &[&str],
        held: &str,
        dropped: &str,
        config: impl FnOnce(&mut ItemSetup<'_>) -> Result<()> + 'static,
    ) -> ItemId {
        self.declare_item(Item::new(ident, names, held, dropped), config)
    }

    /// Declares a fixture: an item that refuses to move while in play.
    pub fn fixture(
        &mut self,
        ident: &str,
        names: &[&str],
        dropped: &str,
        config: impl FnOnce(&mut ItemSetup<'_>) -> Result<()> + 'static,
    ) -> ItemId {
        let mut item = Item::new(ident, names, dropped, dropped);
        item.cant_take = Some(format!("The {} is fixed in place.", item.name()));
        self.declare_item(item, config)
    }

    fn declare_item(
        &mut self,
        item: Item,
        config: impl FnOnce(&mut ItemSetup<'_>) -> Result<()> + 'static,
    ) -> ItemId {
        let id = ItemId::new(self.world.items.len());
        let key = item.ident.clone();
        self.world.items.push(item);
        self.world.limbo.push(id);
        if self.world.items_by_ident.insert(key.clone(), id).is_some() {
            self.errors.push(Error::duplicate_ident(key));
        }
        self.item_configs.push((id, Box::new(config)));
        id
    }

    /// Declares a toggle with its four transition messages.
    pub fn toggle(
        &mut self,
        ident: &str,
        turned_on: &str,
        turned_off: &str,
        already_on: &str,
        already_off: &str,
        initially_on: bool,
    ) -> ToggleId {
        let id = ToggleId::new(self.world.toggles.len());
        self.world.toggles.push(Toggle::new(
            ident,
            turned_on,
            turned_off,
            already_on,
            already_off,
            initially_on,
        ));
        let key = ident.to_lowercase();
        if self.world.toggles_by_ident.insert(key.clone(), id).is_some() {
            self.errors.push(Error::duplicate_ident(key));
        }
        id
    }

    /// Installs a global action.
    pub fn global_action(&mut self, action: Action) {
        self.world.add_global_action(action);
    }

    // --- finish ---

    /// Runs the configuration pass and returns the finished world.
    ///
    /// Every queued configuration closure runs exactly once. The first
    /// misconfiguration aborts the build.
    ///
    /// # Errors
    ///
    /// Returns the first declaration or configuration error: duplicate
    /// identifiers, duplicate exits, two-way wiring over an inverse-less
    /// direction, or unresolved identifiers (including `start`).
    pub fn finish(mut self, start: &str) -> Result<World> {
        if let Some(error) = self.errors.into_iter().next() {
            return Err(error);
        }
        for (room, fallback) in self.pending_fallbacks {
            let target = self
                .world
                .find_room(&fallback)
                .ok_or_else(|| Error::unknown_room(fallback))?;
            if let RoomKind::Outdoors { fallback } = &mut self.world.rooms[room.index()].kind {
                *fallback = target;
            }
        }
        debug!(
            "configuring world: {} rooms, {} items, {} toggles",
            self.room_configs.len(),
            self.item_configs.len(),
            self.world.toggles.len()
        );
        for (room, config) in self.room_configs {
            let mut setup = RoomSetup {
                world: &mut self.world,
                room,
            };
            config(&mut setup)?;
        }
        for (item, config) in self.item_configs {
            let mut setup = ItemSetup {
                world: &mut self.world,
                item,
            };
            config(&mut setup)?;
        }
        let start = self
            .world
            .find_room(start)
            .ok_or_else(|| Error::unknown_room(start.to_lowercase()))?;
        self.world.start = start;
        Ok(self.world)
    }
}

/// Configuration context for one room.
///
/// Resolves identifiers declared anywhere in the world, so rooms can wire
/// exits to rooms declared after them.
pub struct RoomSetup<'a> {
    world: &'a mut World,
    room: RoomId,
}

impl RoomSetup<'_> {
    /// Resolves a declared room.
    ///
    /// # Errors
    ///
    /// Returns an error if no room has this identifier.
    pub fn room(&self, ident: &str) -> Result<RoomId> {
        self.world
            .find_room(ident)
            .ok_or_else(|| Error::unknown_room(ident.to_lowercase()))
    }

    /// Resolves a declared item.
    ///
    /// # Errors
    ///
    /// Returns an error if no item has this identifier.
    pub fn item(&self, ident: &str) -> Result<ItemId> {
        self.world
            .find_item(ident)
            .ok_or_else(|| Error::unknown_item(ident.to_lowercase()))
    }

    /// Resolves a declared toggle.
    ///
    /// # Errors
    ///
    /// Returns an error if no toggle has this identifier.
    pub fn toggle(&self, ident: &str) -> Result<ToggleId> {
        self.world
            .find_toggle(ident)
            .ok_or_else(|| Error::unknown_toggle(ident.to_lowercase()))
    }

    /// Wires a one-way exit.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction is already wired on this room.
    pub fn exit(&mut self, direction: Direction, target: RoomId) -> Result<()> {
        let room = &mut self.world.rooms[self.room.index()];
        if room.exits.contains_key(&direction) {
            return Err(Error::duplicate_exit(
                room.ident.clone(),
                direction.name().to_string(),
            ));
        }
        room.exits.insert(direction, target);
        Ok(())
    }

    /// Wires several directions to the same target.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the directions is already wired.
    pub fn exits(&mut self, directions: &[Direction], target: RoomId) -> Result<()> {
        for direction in directions {
            self.exit(direction.clone(), target)?;
        }
        Ok(())
    }

    /// Wires an exit and its inverse on the target room.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction has no inverse or either slot is
    /// already wired; nothing is wired in that case.
    pub fn two_way(&mut self, direction: Direction, target: RoomId) -> Result<()> {
        let inverse = direction
            .opposite()
            .ok_or_else(|| Error::no_inverse(direction.name().to_string()))?;
        let here = &self.world.rooms[self.room.index()];
        if here.exits.contains_key(&direction) {
            return Err(Error::duplicate_exit(
                here.ident.clone(),
                direction.name().to_string(),
            ));
        }
        let there = &self.world.rooms[target.index()];
        if there.exits.contains_key(&inverse) {
            return Err(Error::duplicate_exit(
                there.ident.clone(),
                inverse.name().to_string(),
            ));
        }
        self.world.rooms[self.room.index()]
            .exits
            .insert(direction, target);
        self.world.rooms[target.index()]
            .exits
            .insert(inverse, self.room);
        Ok(())
    }

    /// Wires directions to an anonymous unenterable room, so trying them
    /// prints `message`.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the directions is already wired.
    pub fn no_entry(&mut self, directions: &[Direction], message: &str) -> Result<()> {
        let id = RoomId::new(self.world.rooms.len());
        self.world.rooms.push(Room::new(
            "",
            "",
            "",
            RoomKind::Unenterable {
                message: message.to_string(),
            },
        ));
        self.exits(directions, id)
    }

    /// Wires a custom exit word, e.g. "downstream": usable bare or after
    /// `go`.
    ///
    /// # Errors
    ///
    /// Returns an error if the word is already wired as an exit here.
    pub fn named_exit(&mut self, name: &str, target: RoomId) -> Result<()> {
        let word = name.to_lowercase();
        self.exit(Direction::Custom(word.clone()), target)?;
        self.action(Action::new(&[&word], move |world, _| {
            world.move_player(target);
            Outcome::Handled
        }));
        Ok(())
    }

    /// Wires directions to `target` behind a condition: while `blocked`
    /// holds, going that way prints `message` instead.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the directions is already wired.
    pub fn exit_unless(
        &mut self,
        directions: &[Direction],
        target: RoomId,
        message: &str,
        blocked: impl Fn(&World) -> bool + 'static,
    ) -> Result<()> {
        self.exits(directions, target)?;
        let message = message.to_string();
        self.world.rooms[self.room.index()]
            .exit_approvers
            .push(Rc::new(move |world, mv: &PlayerMove| {
                if mv.to == target && blocked(world) {
                    world.say(&message);
                    false
                } else {
                    true
                }
            }));
        Ok(())
    }

    /// Places an item in this room.
    ///
    /// An item still in limbo becomes owned by the room. An item already
    /// owned elsewhere is merely listed here as well (a fixture visible
    /// from two rooms).
    pub fn place(&mut self, item: ItemId) {
        if self.world.item(item).owner == OwnerId::Limbo {
            self.world.primitive_move_item(item, OwnerId::Room(self.room));
        } else if !self.world.room_lists(self.room, item) {
            self.world.rooms[self.room.index()].items.push(item);
        }
    }

    /// Attaches a room-scoped action. A room answers each word with at
    /// most one action, so rebinding a word replaces the earlier binding.
    pub fn action(&mut self, action: Action) {
        self.world.note_words(&action.words().to_vec());
        let vocabulary = &mut self.world.rooms[self.room.index()].vocabulary;
        vocabulary.retain(|earlier| !action.words().iter().any(|word| earlier.matches(word)));
        vocabulary.push(action);
    }

    /// Creates a scenery detail: a hidden fixture in this room that
    /// answers `look`, `examine`, and `extra_verbs` with `description`.
    pub fn detail(&mut self, names: &[&str], extra_verbs: &[&str], description: &str) -> ItemId {
        let id = ItemId::new(self.world.items.len());
        let primary = names.first().copied().unwrap_or("detail");
        let mut item = Item::new(
            &format!("detail-{}-{primary}", self.world.room(self.room).ident),
            names,
            description,
            description,
        );
        item.hidden = true;
        item.cant_take = Some("You can't be serious.".to_string());
        item.owner = OwnerId::Room(self.room);
        let mut words: Vec<&str> = vec!["look", "l", "examine", "x"];
        words.extend_from_slice(extra_verbs);
        let text = description.to_string();
        item.vicinity.push(
            Action::new(&words, move |world, _| {
                world.say(&text);
                Outcome::Handled
            })
            .requiring_subject(id),
        );
        self.world.items.push(item);
        self.world.rooms[self.room.index()].items.push(id);
        id
    }

    /// Adds a player-entry approver.
    pub fn allow_player_entry(&mut self, approve: impl Fn(&World, &PlayerMove) -> bool + 'static) {
        self.world.rooms[self.room.index()]
            .entry_approvers
            .push(Rc::new(approve));
    }

    /// Adds a player-exit approver.
    pub fn allow_player_exit(&mut self, approve: impl Fn(&World, &PlayerMove) -> bool + 'static) {
        self.world.rooms[self.room.index()]
            .exit_approvers
            .push(Rc::new(approve));
    }

    /// Adds a player-entry reactor, run after the move commits and before
    /// the room description prints.
    pub fn on_player_entry(&mut self, react: impl Fn(&mut World, &PlayerMove) + 'static) {
        self.world.rooms[self.room.index()]
            .entry_reactors
            .push(Rc::new(react));
    }

    /// Adds a player-exit reactor.
    pub fn on_player_exit(&mut self, react: impl Fn(&mut World, &PlayerMove) + 'static) {
        self.world.rooms[self.room.index()]
            .exit_reactors
            .push(Rc::new(react));
    }

    /// Adds an item-arrival approver.
    pub fn allow_item_in(&mut self, approve: impl Fn(&World, &ItemMove) -> bool + 'static) {
        self.world.rooms[self.room.index()]
            .item_in_approvers
            .push(Rc::new(approve));
    }

    /// Adds an item-departure approver.
    pub fn allow_item_out(&mut self, approve: impl Fn(&World, &ItemMove) -> bool + 'static) {
        self.world.rooms[self.room.index()]
            .item_out_approvers
            .push(Rc::new(approve));
    }

    /// Adds an item-arrival reactor.
    pub fn on_item_in(&mut self, react: impl Fn(&mut World, &ItemMove) + 'static) {
        self.world.rooms[self.room.index()]
            .item_in_reactors
            .push(Rc::new(react));
    }

    /// Adds an item-departure reactor.
    pub fn on_item_out(&mut self, react: impl Fn(&mut World, &ItemMove) + 'static) {
        self.world.rooms[self.room.index()]
            .item_out_reactors
            .push(Rc::new(react));
    }

    /// Reacts to one specific item arriving in this room.
    pub fn on_item_arrival(&mut self, item: ItemId, react: impl Fn(&mut World) + 'static) {
        self.on_item_in(move |world, mv| {
            if mv.item == item {
                react(world);
            }
        });
    }

    /// Sets the room's turn-end hook.
    pub fn on_turn_end(&mut self, hook: impl Fn(&mut World) + 'static) {
        self.world.rooms[self.room.index()].turn_end = Some(Rc::new(hook));
    }
}

/// Configuration context for one item.
pub struct ItemSetup<'a> {
    world: &'a mut World,
    item: ItemId,
}

impl ItemSetup<'_> {
    /// The item being configured.
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.item
    }

    /// Resolves a declared room.
    ///
    /// # Errors
    ///
    /// Returns an error if no room has this identifier.
    pub fn room(&self, ident: &str) -> Result<RoomId> {
        self.world
            .find_room(ident)
            .ok_or_else(|| Error::unknown_room(ident.to_lowercase()))
    }

    /// Resolves a declared item.
    ///
    /// # Errors
    ///
    /// Returns an error if no item has this identifier.
    pub fn item(&self, ident: &str) -> Result<ItemId> {
        self.world
            .find_item(ident)
            .ok_or_else(|| Error::unknown_item(ident.to_lowercase()))
    }

    /// Resolves a declared toggle.
    ///
    /// # Errors
    ///
    /// Returns an error if no toggle has this identifier.
    pub fn toggle(&self, ident: &str) -> Result<ToggleId> {
        self.world
            .find_toggle(ident)
            .ok_or_else(|| Error::unknown_toggle(ident.to_lowercase()))
    }

    /// Attaches a held-scope action. The subject check is applied here,
    /// outermost, so the action passes untouched commands before any
    /// guard speaks.
    pub fn action(&mut self, action: Action) {
        self.world.note_words(&action.words().to_vec());
        let wrapped = action.requiring_subject(self.item);
        self.world.items[self.item.index()].vocabulary.push(wrapped);
    }

    /// Attaches a vicinity-scope action, subject-checked like
    /// [`ItemSetup::action`].
    pub fn vicinity_action(&mut self, action: Action) {
        self.world.note_words(&action.words().to_vec());
        let wrapped = action.requiring_subject(self.item);
        self.world.items[self.item.index()].vicinity.push(wrapped);
    }

    /// Excludes the item from room listings and `take all`.
    pub fn hidden(&mut self) {
        self.world.items[self.item.index()].hidden = true;
    }

    /// Marks the name as plural for article generation.
    pub fn plural(&mut self) {
        self.world.items[self.item.index()].plural = true;
    }

    /// Overrides the fixture refusal message (and makes the item a
    /// fixture if it was not one).
    pub fn cant_take_message(&mut self, message: &str) {
        self.world.items[self.item.index()].cant_take = Some(message.to_string());
    }

    /// Binds the item to a toggle: it is a lit light source while the
    /// toggle is on.
    pub fn light_source(&mut self, toggle: ToggleId) {
        self.world.items[self.item.index()].light = Some(toggle);
    }

    /// Replaces the inventory-listing text with a computed one.
    pub fn held_description(&mut self, describe: impl Fn(&World) -> String + 'static) {
        self.world.items[self.item.index()].held = Description::Dynamic(Rc::new(describe));
    }

    /// Replaces the room-listing text with a computed one.
    pub fn dropped_description(&mut self, describe: impl Fn(&World) -> String + 'static) {
        self.world.items[self.item.index()].dropped = Description::Dynamic(Rc::new(describe));
    }

    /// Adds a self-approval hook for moves of this item.
    pub fn allow_move(&mut self, approve: impl Fn(&World, &ItemMove) -> bool + 'static) {
        self.world.items[self.item.index()]
            .approvers
            .push(Rc::new(approve));
    }

    /// Adds a notification hook for committed moves of this item.
    pub fn on_move(&mut self, react: impl Fn(&mut World, &ItemMove) + 'static) {
        self.world.items[self.item.index()]
            .on_move
            .push(Rc::new(react));
    }

    /// Sets the item's turn-end hook, polled while it is listed in the
    /// player's room.
    pub fn on_turn_end(&mut self, hook: impl Fn(&mut World) + 'static) {
        self.world.items[self.item.index()].turn_end = Some(Rc::new(hook));
    }
}
