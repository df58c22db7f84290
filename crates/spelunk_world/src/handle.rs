//! Handles into the world arenas.
//!
//! Rooms, items, and toggles are never deleted once declared, so a plain
//! index is a stable identity for the lifetime of a world.

/// Handle to a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(u32);

/// Handle to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(u32);

/// Handle to a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToggleId(u32);

impl RoomId {
    /// The sentinel room the player occupies before the game starts.
    pub const NOWHERE: RoomId = RoomId(0);

    pub(crate) fn new(index: usize) -> Self {
        Self(u32::try_from(index).unwrap_or(u32::MAX))
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl ItemId {
    pub(crate) fn new(index: usize) -> Self {
        Self(u32::try_from(index).unwrap_or(u32::MAX))
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl ToggleId {
    pub(crate) fn new(index: usize) -> Self {
        Self(u32::try_from(index).unwrap_or(u32::MAX))
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Who currently owns an item.
///
/// There is no "nowhere" for items: an item that is out of play belongs to
/// `Limbo`, so ownership is always a total function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OwnerId {
    /// Out of play.
    Limbo,
    /// In the player's inventory.
    Player,
    /// On the floor of a room.
    Room(RoomId),
}
