//! The player: the distinguished item owner.

use crate::handle::{ItemId, RoomId};

/// The player's inventory and location.
///
/// Starts in the nowhere sentinel room; the first move places it at the
/// world's start room and prints the opening description.
pub struct Player {
    pub(crate) room: RoomId,
    pub(crate) items: Vec<ItemId>,
}

impl Player {
    pub(crate) fn new() -> Self {
        Self {
            room: RoomId::NOWHERE,
            items: Vec::new(),
        }
    }

    /// The room the player is in.
    #[must_use]
    pub fn room(&self) -> RoomId {
        self.room
    }

    /// Held items, in acquisition order.
    #[must_use]
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    /// True if the player holds the item.
    #[must_use]
    pub fn holds(&self, item: ItemId) -> bool {
        self.items.contains(&item)
    }
}
