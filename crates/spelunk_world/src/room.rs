//! Rooms and room specializations.

use std::collections::HashMap;
use std::rc::Rc;

use crate::action::Action;
use crate::direction::Direction;
use crate::handle::{ItemId, RoomId};
use crate::item::{ItemApprover, ItemReactor, TurnHook};
use crate::world::World;

/// Approval hook for player movement. Sees a shared world; may print a
/// refusal but cannot mutate.
pub type PlayerApprover = Rc<dyn Fn(&World, &PlayerMove) -> bool>;

/// Notification that a player move has been committed.
pub type PlayerReactor = Rc<dyn Fn(&mut World, &PlayerMove)>;

/// A proposed or committed player move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerMove {
    /// The room being left.
    pub from: RoomId,
    /// The room being entered.
    pub to: RoomId,
}

/// Room specializations.
pub enum RoomKind {
    /// An ordinary lit room.
    Lit,
    /// Description gated on a lit light source held by the player or
    /// present in the room.
    Dark,
    /// Outdoors: unwired compass directions lead to the catch-all room.
    Outdoors {
        /// Where wandering off in an unwired compass direction lands.
        fallback: RoomId,
    },
    /// Refuses entry, printing its message. Used for "you can't go that
    /// way, and here is why" exits.
    Unenterable {
        /// Printed when entry is refused.
        message: String,
    },
}

/// A location in the world.
pub struct Room {
    pub(crate) ident: String,
    pub(crate) short: String,
    pub(crate) long: String,
    pub(crate) visited: bool,
    pub(crate) kind: RoomKind,
    pub(crate) exits: HashMap<Direction, RoomId>,
    pub(crate) items: Vec<ItemId>,
    pub(crate) vocabulary: Vec<Action>,
    pub(crate) entry_approvers: Vec<PlayerApprover>,
    pub(crate) exit_approvers: Vec<PlayerApprover>,
    pub(crate) entry_reactors: Vec<PlayerReactor>,
    pub(crate) exit_reactors: Vec<PlayerReactor>,
    pub(crate) item_in_approvers: Vec<ItemApprover>,
    pub(crate) item_out_approvers: Vec<ItemApprover>,
    pub(crate) item_in_reactors: Vec<ItemReactor>,
    pub(crate) item_out_reactors: Vec<ItemReactor>,
    pub(crate) turn_end: Option<TurnHook>,
}

impl Room {
    pub(crate) fn new(ident: &str, short: &str, long: &str, kind: RoomKind) -> Self {
        Self {
            ident: ident.to_lowercase(),
            short: short.to_string(),
            long: long.to_string(),
            visited: false,
            kind,
            exits: HashMap::new(),
            items: Vec::new(),
            vocabulary: Vec::new(),
            entry_approvers: Vec::new(),
            exit_approvers: Vec::new(),
            entry_reactors: Vec::new(),
            exit_reactors: Vec::new(),
            item_in_approvers: Vec::new(),
            item_out_approvers: Vec::new(),
            item_in_reactors: Vec::new(),
            item_out_reactors: Vec::new(),
            turn_end: None,
        }
    }

    /// The room's identifier.
    #[must_use]
    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// True once the room's description has been shown.
    #[must_use]
    pub fn visited(&self) -> bool {
        self.visited
    }

    /// Items listed in this room, in placement order.
    #[must_use]
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    /// Room-scoped actions; the first match wins.
    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.vocabulary
    }

    /// The room's turn-end hook, if any.
    #[must_use]
    pub fn turn_end_hook(&self) -> Option<TurnHook> {
        self.turn_end.clone()
    }

    /// Where the given direction leads, if anywhere.
    ///
    /// Outdoors rooms fall back to their catch-all for unwired compass
    /// directions, so you can always wander off into the woods.
    #[must_use]
    pub fn exit_to(&self, direction: &Direction) -> Option<RoomId> {
        if let Some(&target) = self.exits.get(direction) {
            return Some(target);
        }
        match &self.kind {
            RoomKind::Outdoors { fallback } if direction.is_compass() => Some(*fallback),
            _ => None,
        }
    }

    /// Directions wired explicitly on this room.
    #[must_use]
    pub fn wired_exits(&self) -> impl Iterator<Item = (&Direction, &RoomId)> {
        self.exits.iter()
    }
}
