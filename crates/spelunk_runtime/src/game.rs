//! The blocking game loop.

use log::debug;

use spelunk_foundation::Result;
use spelunk_parser::{process, TurnResult};
use spelunk_world::World;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};

/// One interactive session: a world plus a line editor.
///
/// The editor is a type parameter so tests can drive the loop with a
/// scripted [`MockEditor`](crate::MockEditor).
pub struct Game<E: LineEditor = RustylineEditor> {
    editor: E,
    world: World,
}

impl Game<RustylineEditor> {
    /// Creates a game on the real terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if the line editor cannot be initialized.
    pub fn new(world: World) -> Result<Self> {
        Ok(Self::with_editor(world, RustylineEditor::new()?))
    }
}

impl<E: LineEditor> Game<E> {
    /// Creates a game with a custom editor.
    pub fn with_editor(world: World, editor: E) -> Self {
        Self { editor, world }
    }

    /// The world being played.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Runs the session: places the player at the start room, then reads
    /// and dispatches one line per turn until the game quits or input
    /// ends. Prints "Leaving." on the way out.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    pub fn play(&mut self) -> Result<()> {
        self.editor.set_keywords(self.world.known_words());
        let start = self.world.start();
        debug!("starting session at {:?}", self.world.room(start).ident());
        self.world.primitive_move_player(start);
        loop {
            match self.editor.read_line("> ")? {
                ReadResult::Line(line) => {
                    let line = line.trim().to_string();
                    if !line.is_empty() {
                        self.editor.add_history(&line);
                    }
                    if process(&mut self.world, &line) == TurnResult::Quit {
                        break;
                    }
                }
                ReadResult::Interrupted => {}
                ReadResult::Eof => break,
            }
        }
        self.world.say("Leaving.");
        Ok(())
    }
}
