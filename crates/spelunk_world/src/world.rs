//! The world aggregate and the two-phase move protocol.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fmt;

use log::debug;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use spelunk_foundation::{margin, Output};

use crate::action::Action;
use crate::handle::{ItemId, OwnerId, RoomId, ToggleId};
use crate::item::{Item, ItemMove};
use crate::player::Player;
use crate::room::{PlayerMove, Room, RoomKind};
use crate::toggle::Toggle;

/// Printed instead of a dark room's description when no lit light source
/// is at hand.
pub const DARKNESS: &str =
    "It is now pitch dark. If you proceed you will likely fall into a pit.";

/// The game world: arenas of rooms, items, and toggles, the player, and
/// the global vocabulary.
///
/// The output sink and RNG sit behind `RefCell` so that approval code,
/// which only gets `&World`, can still print refusal messages and draw
/// random numbers. Everything else requires `&mut World`, which is how
/// the approve phase of the move protocol is kept read-only.
pub struct World {
    pub(crate) rooms: Vec<Room>,
    pub(crate) items: Vec<Item>,
    pub(crate) toggles: Vec<Toggle>,
    pub(crate) player: Player,
    pub(crate) limbo: Vec<ItemId>,
    pub(crate) start: RoomId,
    pub(crate) globals: Vec<Action>,
    pub(crate) known_words: HashSet<String>,
    pub(crate) rooms_by_ident: HashMap<String, RoomId>,
    pub(crate) items_by_ident: HashMap<String, ItemId>,
    pub(crate) toggles_by_ident: HashMap<String, ToggleId>,
    output: RefCell<Box<dyn Output>>,
    rng: RefCell<ChaCha8Rng>,
}

impl World {
    pub(crate) fn new(seed: u64, output: Box<dyn Output>) -> Self {
        let mut world = Self {
            rooms: Vec::new(),
            items: Vec::new(),
            toggles: Vec::new(),
            player: Player::new(),
            limbo: Vec::new(),
            start: RoomId::NOWHERE,
            globals: Vec::new(),
            known_words: HashSet::new(),
            rooms_by_ident: HashMap::new(),
            items_by_ident: HashMap::new(),
            toggles_by_ident: HashMap::new(),
            output: RefCell::new(output),
            rng: RefCell::new(ChaCha8Rng::seed_from_u64(seed)),
        };
        // Index 0 is the nowhere sentinel the player starts in.
        world
            .rooms
            .push(Room::new("nowhere", "Nowhere.", "Nowhere.", RoomKind::Lit));
        world
    }

    // --- accessors ---

    /// The room the game starts in.
    #[must_use]
    pub fn start(&self) -> RoomId {
        self.start
    }

    /// Looks up a room by handle.
    #[must_use]
    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.index()]
    }

    /// Looks up an item by handle.
    #[must_use]
    pub fn item(&self, id: ItemId) -> &Item {
        &self.items[id.index()]
    }

    /// The room the player is in.
    #[must_use]
    pub fn player_room(&self) -> RoomId {
        self.player.room
    }

    /// The player's inventory.
    #[must_use]
    pub fn player_items(&self) -> &[ItemId] {
        &self.player.items
    }

    /// True if the player holds the item.
    #[must_use]
    pub fn player_holds(&self, item: ItemId) -> bool {
        self.player.holds(item)
    }

    /// Items currently out of play.
    #[must_use]
    pub fn limbo_items(&self) -> &[ItemId] {
        &self.limbo
    }

    /// True if the item is listed in the given room.
    #[must_use]
    pub fn room_lists(&self, room: RoomId, item: ItemId) -> bool {
        self.room(room).items.contains(&item)
    }

    /// Global actions, the least specific dispatch tier.
    #[must_use]
    pub fn global_actions(&self) -> &[Action] {
        &self.globals
    }

    /// Resolves a declared room by identifier, case-insensitively.
    #[must_use]
    pub fn find_room(&self, ident: &str) -> Option<RoomId> {
        self.rooms_by_ident.get(&ident.to_lowercase()).copied()
    }

    /// Resolves a declared item by identifier, case-insensitively.
    #[must_use]
    pub fn find_item(&self, ident: &str) -> Option<ItemId> {
        self.items_by_ident.get(&ident.to_lowercase()).copied()
    }

    /// Resolves a declared toggle by identifier, case-insensitively.
    #[must_use]
    pub fn find_toggle(&self, ident: &str) -> Option<ToggleId> {
        self.toggles_by_ident.get(&ident.to_lowercase()).copied()
    }

    // --- vocabulary ---

    /// Registers words so unknown-verb messages can tell "not here" from
    /// "not a word".
    pub fn note_words(&mut self, words: &[String]) {
        for word in words {
            self.known_words.insert(word.to_lowercase());
        }
    }

    /// True if the word is an action word somewhere in the world.
    #[must_use]
    pub fn is_known_word(&self, word: &str) -> bool {
        self.known_words.contains(word)
    }

    /// All known action words, for completion.
    #[must_use]
    pub fn known_words(&self) -> Vec<String> {
        let mut words: Vec<String> = self.known_words.iter().cloned().collect();
        words.sort();
        words
    }

    /// Installs a global action.
    pub fn add_global_action(&mut self, action: Action) {
        self.note_words(&action.words().to_vec());
        self.globals.push(action);
    }

    // --- output ---

    /// Prints a message, left-trimming each line.
    pub fn say(&self, text: &str) {
        let message = margin(text);
        self.output.borrow_mut().line(&message);
    }

    // --- randomness ---

    /// True with probability `p`, drawn from the world's seeded RNG.
    #[must_use]
    pub fn chance(&self, p: f64) -> bool {
        self.rng.borrow_mut().gen_bool(p)
    }

    /// Picks a uniformly random element.
    #[must_use]
    pub fn pick<'a, T>(&self, choices: &'a [T]) -> Option<&'a T> {
        choices.choose(&mut *self.rng.borrow_mut())
    }

    // --- toggles ---

    /// Current state of a toggle.
    #[must_use]
    pub fn toggle_is_on(&self, id: ToggleId) -> bool {
        self.toggles[id.index()].on
    }

    /// Turns a toggle on, printing the transition or already-on message.
    pub fn turn_on(&mut self, id: ToggleId) {
        let toggle = &mut self.toggles[id.index()];
        let message = if toggle.on {
            toggle.already_on.clone()
        } else {
            toggle.on = true;
            toggle.turned_on.clone()
        };
        self.say(&message);
    }

    /// Turns a toggle off, printing the transition or already-off message.
    pub fn turn_off(&mut self, id: ToggleId) {
        let toggle = &mut self.toggles[id.index()];
        let message = if toggle.on {
            toggle.on = false;
            toggle.turned_off.clone()
        } else {
            toggle.already_off.clone()
        };
        self.say(&message);
    }

    // --- item movement ---

    /// Moves an item through the full two-phase protocol.
    ///
    /// Approval runs against a shared world in fixed order: the item
    /// itself (fixture rule first, then its approvers), the source, the
    /// destination; the first refusal abandons the move with no state
    /// change and no notifications. On approval the transfer is committed
    /// and the item, source, and destination are notified in that order.
    ///
    /// Returns `true` if the move was committed.
    pub fn move_item(&mut self, item: ItemId, to: OwnerId) -> bool {
        let from = self.item(item).owner;
        let mv = ItemMove { item, from, to };
        if !self.approve_item_move(&mv) {
            debug!("item move refused: {mv:?}");
            return false;
        }
        debug!("item move committed: {mv:?}");
        self.commit_item_move(&mv);
        self.notify_item_move(&mv);
        true
    }

    /// Moves an item with no approvals and no notifications.
    ///
    /// This is the setup and debug path; gameplay goes through
    /// [`World::move_item`].
    pub fn primitive_move_item(&mut self, item: ItemId, to: OwnerId) {
        let from = self.item(item).owner;
        let mv = ItemMove { item, from, to };
        self.commit_item_move(&mv);
    }

    fn approve_item_move(&self, mv: &ItemMove) -> bool {
        let item = self.item(mv.item);
        if let Some(message) = &item.cant_take {
            // Fixtures only move into or out of limbo.
            if mv.from != OwnerId::Limbo && mv.to != OwnerId::Limbo {
                self.say(message);
                return false;
            }
        }
        for approver in &item.approvers {
            if !approver(self, mv) {
                return false;
            }
        }
        if let OwnerId::Room(room) = mv.from {
            for approver in &self.room(room).item_out_approvers {
                if !approver(self, mv) {
                    return false;
                }
            }
        }
        if let OwnerId::Room(room) = mv.to {
            for approver in &self.room(room).item_in_approvers {
                if !approver(self, mv) {
                    return false;
                }
            }
        }
        true
    }

    fn commit_item_move(&mut self, mv: &ItemMove) {
        self.limbo.retain(|&i| i != mv.item);
        self.player.items.retain(|&i| i != mv.item);
        for room in &mut self.rooms {
            room.items.retain(|&i| i != mv.item);
        }
        match mv.to {
            OwnerId::Limbo => self.limbo.push(mv.item),
            OwnerId::Player => self.player.items.push(mv.item),
            OwnerId::Room(room) => self.rooms[room.index()].items.push(mv.item),
        }
        self.items[mv.item.index()].owner = mv.to;
    }

    fn notify_item_move(&mut self, mv: &ItemMove) {
        let hooks = self.item(mv.item).on_move.clone();
        for hook in hooks {
            hook(self, mv);
        }
        match mv.from {
            OwnerId::Room(room) => {
                let reactors = self.room(room).item_out_reactors.clone();
                for reactor in reactors {
                    reactor(self, mv);
                }
            }
            OwnerId::Player => {
                let name = self.item(mv.item).name().to_string();
                self.say(&format!("You dropped the {name}."));
            }
            OwnerId::Limbo => {}
        }
        match mv.to {
            OwnerId::Room(room) => {
                let reactors = self.room(room).item_in_reactors.clone();
                for reactor in reactors {
                    reactor(self, mv);
                }
            }
            OwnerId::Player => {
                let name = self.item(mv.item).name().to_string();
                self.say(&format!("You are now carrying the {name}."));
            }
            OwnerId::Limbo => {}
        }
    }

    // --- player movement ---

    /// Moves the player through the two-phase protocol.
    ///
    /// The source room's exit approvers run first, then the destination's
    /// entry check (unenterable rooms refuse with their message, then
    /// entry approvers). On approval the move commits, the source's exit
    /// reactors fire, then the destination's entry reactors, and the room
    /// is described.
    ///
    /// Returns `true` if the move was committed.
    pub fn move_player(&mut self, to: RoomId) -> bool {
        let from = self.player.room;
        let mv = PlayerMove { from, to };
        for approver in &self.room(from).exit_approvers {
            if !approver(self, &mv) {
                debug!("player exit refused: {mv:?}");
                return false;
            }
        }
        if let RoomKind::Unenterable { message } = &self.room(to).kind {
            self.say(message);
            return false;
        }
        for approver in &self.room(to).entry_approvers {
            if !approver(self, &mv) {
                debug!("player entry refused: {mv:?}");
                return false;
            }
        }
        debug!("player move committed: {mv:?}");
        self.player.room = to;
        let exit_reactors = self.room(from).exit_reactors.clone();
        for reactor in exit_reactors {
            reactor(self, &mv);
        }
        self.enter_room(&mv);
        true
    }

    /// Teleports the player: no approvals, no notifications on either
    /// side, just the commit and the destination description.
    pub fn primitive_move_player(&mut self, to: RoomId) {
        self.player.room = to;
        self.describe_room(to);
    }

    fn enter_room(&mut self, mv: &PlayerMove) {
        let entry_reactors = self.room(mv.to).entry_reactors.clone();
        for reactor in entry_reactors {
            reactor(self, mv);
        }
        self.describe_room(mv.to);
    }

    // --- descriptions ---

    /// Describes a room: the long description on first sight, the short
    /// one after, plus the dropped text of every visible item. Dark rooms
    /// without a lit light source print the darkness warning instead.
    pub fn describe_room(&mut self, room: RoomId) {
        let full = !self.room(room).visited;
        self.print_room(room, full);
        // A room seen only as darkness has not really been visited.
        if self.is_lit(room) {
            self.rooms[room.index()].visited = true;
        }
    }

    /// Describes a room with its long description regardless of visits.
    pub fn describe_room_fully(&mut self, room: RoomId) {
        self.print_room(room, true);
        if self.is_lit(room) {
            self.rooms[room.index()].visited = true;
        }
    }

    fn print_room(&self, room: RoomId, full: bool) {
        if !self.is_lit(room) {
            self.say(DARKNESS);
            return;
        }
        let r = self.room(room);
        if full {
            self.say(&r.long);
        } else {
            self.say(&r.short);
        }
        for &id in &r.items {
            let item = self.item(id);
            if !item.hidden {
                let text = item.dropped_text(self);
                self.say(&text);
            }
        }
    }

    /// True unless the room is dark with no lit light source held by the
    /// player or present in the room.
    #[must_use]
    pub fn is_lit(&self, room: RoomId) -> bool {
        if !matches!(self.room(room).kind, RoomKind::Dark) {
            return true;
        }
        let lit = |id: &ItemId| {
            self.item(*id)
                .light
                .is_some_and(|toggle| self.toggle_is_on(toggle))
        };
        self.player.items.iter().any(lit) || self.room(room).items.iter().any(lit)
    }
}

// The output sink and closures are not printable; summarize the arenas.
impl fmt::Debug for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("World")
            .field("rooms", &self.rooms.len())
            .field("items", &self.items.len())
            .field("toggles", &self.toggles.len())
            .field("player_room", &self.player.room)
            .finish_non_exhaustive()
    }
}
