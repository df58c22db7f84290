//! World model for the Spelunk engine.
//!
//! Rooms, items, and toggles live in arenas owned by [`World`] and are
//! addressed by `Copy` handles. Behavior is attached as stored closures:
//! action effects, move approvers, and move reactors. Item transfer and
//! player movement both go through a two-phase protocol (approve, then
//! commit and notify) so any of the moving entity, the source, and the
//! destination can veto a move before anything changes.
//!
//! Worlds are built through [`WorldBuilder`], which separates declaration
//! from configuration so mutually-referencing rooms and items can be wired
//! without forward-declaration gymnastics.

pub mod action;
pub mod builder;
pub mod direction;
pub mod handle;
pub mod item;
pub mod player;
pub mod room;
pub mod toggle;
pub mod world;

pub use action::{Action, Command, Effect, Outcome};
pub use builder::{ItemSetup, RoomSetup, WorldBuilder};
pub use direction::Direction;
pub use handle::{ItemId, OwnerId, RoomId, ToggleId};
pub use item::{Description, Item, ItemApprover, ItemMove, ItemReactor, TurnHook};
pub use player::Player;
pub use room::{PlayerApprover, PlayerMove, PlayerReactor, Room, RoomKind};
pub use toggle::Toggle;
pub use world::World;
