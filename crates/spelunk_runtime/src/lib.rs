//! Runtime layer for the Spelunk engine: the line editor abstraction, the
//! blocking game loop, and the demonstration world.

pub mod demo;
pub mod editor;
pub mod game;

pub use demo::build_demo;
pub use editor::{LineEditor, MockEditor, ReadResult, RustylineEditor};
pub use game::Game;
