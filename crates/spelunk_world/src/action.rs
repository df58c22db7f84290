//! Commands, actions, and dispatch outcomes.

use std::rc::Rc;

use crate::handle::ItemId;
use crate::world::World;

/// A parsed input line: the first word as the verb, the remaining words
/// (minus stop words) as subjects, and the raw line for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// The first word of the input, lowercased.
    pub verb: String,
    /// The remaining words, lowercased, stop words removed.
    pub subjects: Vec<String>,
    /// The raw input line, trimmed.
    pub input: String,
}

impl Command {
    /// True if any subject word matches any of `names`.
    #[must_use]
    pub fn mentions(&self, names: &[String]) -> bool {
        self.subjects
            .iter()
            .any(|s| names.iter().any(|n| n.eq_ignore_ascii_case(s)))
    }
}

/// The result of running an action effect.
///
/// `Pass` is the explicit reject-and-fall-through signal: the action
/// declines the command and dispatch tries the next, less specific
/// candidate. `Quit` unwinds to the read loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command was consumed; dispatch stops.
    Handled,
    /// The action declined; try the next candidate.
    Pass,
    /// End the game.
    Quit,
}

/// The stored behavior of an action.
pub type Effect = Rc<dyn Fn(&mut World, &Command) -> Outcome>;

/// A verb (or set of verb synonyms) bound to an effect.
///
/// Guards wrap the effect from the outside in, so the most recently
/// attached guard is evaluated first and the first failing guard is the
/// only one that speaks.
#[derive(Clone)]
pub struct Action {
    words: Vec<String>,
    effect: Effect,
}

impl Action {
    /// Creates an action answering to `words`.
    pub fn new(
        words: &[&str],
        effect: impl Fn(&mut World, &Command) -> Outcome + 'static,
    ) -> Self {
        Self {
            words: words.iter().map(|w| w.to_lowercase()).collect(),
            effect: Rc::new(effect),
        }
    }

    /// The verb words this action answers to.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// True if this action answers to `verb`.
    #[must_use]
    pub fn matches(&self, verb: &str) -> bool {
        self.words.iter().any(|w| w == verb)
    }

    /// Wraps the effect in a guard.
    ///
    /// When the predicate fails the guard prints its message and the
    /// command counts as handled; a refusal never falls through.
    #[must_use]
    pub fn guarded_by(
        self,
        predicate: impl Fn(&World, &Command) -> bool + 'static,
        message: &str,
    ) -> Self {
        let inner = self.effect;
        let message = message.to_string();
        Self {
            words: self.words,
            effect: Rc::new(move |world, command| {
                if predicate(world, command) {
                    inner(world, command)
                } else {
                    world.say(&message);
                    Outcome::Handled
                }
            }),
        }
    }

    /// Wraps the effect in a subject check for an item-scoped action.
    ///
    /// If no subject word names the item the action passes before any
    /// guard runs, so guard messages only print for commands that
    /// actually refer to the item.
    #[must_use]
    pub fn requiring_subject(self, item: ItemId) -> Self {
        let inner = self.effect;
        Self {
            words: self.words,
            effect: Rc::new(move |world, command| {
                if !world.item(item).is_referred_to(command) {
                    return Outcome::Pass;
                }
                inner(world, command)
            }),
        }
    }

    /// Runs the effect.
    pub fn run(&self, world: &mut World, command: &Command) -> Outcome {
        (self.effect)(world, command)
    }
}
