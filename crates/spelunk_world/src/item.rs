//! Items: portable objects, fixtures, and details.

use std::rc::Rc;

use crate::action::{Action, Command};
use crate::handle::{ItemId, OwnerId, ToggleId};
use crate::world::World;

/// Item self-approval for a proposed move. Approvers see a shared world
/// and may print a refusal, but cannot mutate.
pub type ItemApprover = Rc<dyn Fn(&World, &ItemMove) -> bool>;

/// Notification that a move has been committed.
pub type ItemReactor = Rc<dyn Fn(&mut World, &ItemMove)>;

/// Hook polled once per turn for the room the player is in and each item
/// listed there.
pub type TurnHook = Rc<dyn Fn(&mut World)>;

/// A proposed or committed item transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemMove {
    /// The item being moved.
    pub item: ItemId,
    /// The owner it is leaving.
    pub from: OwnerId,
    /// The owner it is joining.
    pub to: OwnerId,
}

/// A piece of game text, fixed or computed from world state.
#[derive(Clone)]
pub enum Description {
    /// A literal string.
    Fixed(String),
    /// Text recomputed on every render.
    Dynamic(Rc<dyn Fn(&World) -> String>),
}

impl Description {
    /// Renders the description against the current world.
    #[must_use]
    pub fn render(&self, world: &World) -> String {
        match self {
            Self::Fixed(text) => text.clone(),
            Self::Dynamic(f) => f(world),
        }
    }
}

impl From<&str> for Description {
    fn from(text: &str) -> Self {
        Self::Fixed(text.to_string())
    }
}

/// A thing in the world.
///
/// A fixture is an item with a `cant_take` message: it refuses any move
/// whose source and destination are both in play. A detail is a hidden
/// fixture whose only behavior is a vicinity description.
pub struct Item {
    pub(crate) ident: String,
    pub(crate) names: Vec<String>,
    pub(crate) owner: OwnerId,
    pub(crate) held: Description,
    pub(crate) dropped: Description,
    pub(crate) hidden: bool,
    pub(crate) plural: bool,
    pub(crate) cant_take: Option<String>,
    pub(crate) light: Option<ToggleId>,
    pub(crate) vocabulary: Vec<Action>,
    pub(crate) vicinity: Vec<Action>,
    pub(crate) approvers: Vec<ItemApprover>,
    pub(crate) on_move: Vec<ItemReactor>,
    pub(crate) turn_end: Option<TurnHook>,
}

impl Item {
    pub(crate) fn new(ident: &str, names: &[&str], held: &str, dropped: &str) -> Self {
        Self {
            ident: ident.to_lowercase(),
            names: names.iter().map(|n| n.to_lowercase()).collect(),
            owner: OwnerId::Limbo,
            held: held.into(),
            dropped: dropped.into(),
            hidden: false,
            plural: false,
            cant_take: None,
            light: None,
            vocabulary: Vec::new(),
            vicinity: Vec::new(),
            approvers: Vec::new(),
            on_move: Vec::new(),
            turn_end: None,
        }
    }

    /// The item's identifier.
    #[must_use]
    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// The primary name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.names[0]
    }

    /// All names the item answers to.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Current owner.
    #[must_use]
    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    /// Hidden items are skipped by room listings and `take all`.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// True for fixtures (and details).
    #[must_use]
    pub fn is_fixture(&self) -> bool {
        self.cant_take.is_some()
    }

    /// Inventory-listing text.
    #[must_use]
    pub fn held_text(&self, world: &World) -> String {
        self.held.render(world)
    }

    /// Room-listing text.
    #[must_use]
    pub fn dropped_text(&self, world: &World) -> String {
        self.dropped.render(world)
    }

    /// Held-scope actions, consulted first during dispatch.
    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.vocabulary
    }

    /// Vicinity-scope actions, consulted when the item is in the player's
    /// room.
    #[must_use]
    pub fn vicinity_actions(&self) -> &[Action] {
        &self.vicinity
    }

    /// The item's turn-end hook, if any.
    #[must_use]
    pub fn turn_end_hook(&self) -> Option<TurnHook> {
        self.turn_end.clone()
    }

    /// True if any subject word of the command names this item.
    #[must_use]
    pub fn is_referred_to(&self, command: &Command) -> bool {
        command.mentions(&self.names)
    }

    /// The indefinite article for this item: none for plurals, "an"
    /// before a vowel, "a" otherwise.
    #[must_use]
    pub fn article(&self) -> &str {
        if self.plural {
            ""
        } else if self
            .name()
            .chars()
            .next()
            .is_some_and(|c| "aeiou".contains(c))
        {
            "an"
        } else {
            "a"
        }
    }

    /// The primary name with its indefinite article, e.g. "a lamp",
    /// "an axe", "keys".
    #[must_use]
    pub fn with_article(&self) -> String {
        let article = self.article();
        if article.is_empty() {
            self.name().to_string()
        } else {
            format!("{article} {}", self.name())
        }
    }
}
