//! Line-oriented output seam.
//!
//! Every message the engine prints goes through an [`Output`] implementation,
//! so games run against stdout while tests capture a transcript.

use std::cell::RefCell;
use std::rc::Rc;

/// Sink for game text, one call per message.
pub trait Output {
    /// Writes one message, which may span multiple lines.
    fn line(&mut self, text: &str);
}

/// Output that prints to standard out.
#[derive(Debug, Default)]
pub struct StdoutOutput;

impl Output for StdoutOutput {
    fn line(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Capturing output for tests.
///
/// Cheaply cloneable; all clones share the same buffer, so a test can hand
/// one clone to the world and keep another to inspect afterwards.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Rc<RefCell<Vec<String>>>,
}

impl Transcript {
    /// Creates an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all captured messages.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Returns the whole transcript as one newline-joined string.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.borrow().join("\n")
    }

    /// True if any captured message contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.borrow().iter().any(|l| l.contains(needle))
    }

    /// Discards everything captured so far.
    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl Output for Transcript {
    fn line(&mut self, text: &str) {
        self.lines.borrow_mut().push(text.to_string());
    }
}

/// Strips leading whitespace from every line of `text`.
///
/// Game text is written as indented multi-line literals inside world
/// definitions; this removes the source indentation before printing.
#[must_use]
pub fn margin(text: &str) -> String {
    text.lines()
        .map(str::trim_start)
        .collect::<Vec<_>>()
        .join("\n")
}
