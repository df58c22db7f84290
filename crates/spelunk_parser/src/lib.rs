//! Input handling for the Spelunk engine.
//!
//! One line in, one turn out: [`tokenize`] splits the line into a
//! [`Command`](spelunk_world::Command), [`process`] runs it against the
//! world through the specificity-ordered dispatch loop, and
//! [`stdlib::install`] provides the standard verbs every game starts
//! with.

pub mod dispatch;
pub mod stdlib;
pub mod tokenizer;

pub use dispatch::{end_turn, process, TurnResult};
pub use tokenizer::tokenize;
