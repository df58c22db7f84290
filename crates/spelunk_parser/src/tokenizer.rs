//! Line tokenization.

use spelunk_world::Command;

/// Words removed from the subject list. The first token is exempt, so
/// "in" still works as a movement command.
const STOP_WORDS: [&str; 5] = ["a", "the", "at", "to", "in"];

/// Splits an input line into a command.
///
/// Tokens are split on whitespace and lowercased; the first becomes the
/// verb and the rest, minus stop words, the subjects. Returns `None` for
/// blank input.
#[must_use]
pub fn tokenize(input: &str) -> Option<Command> {
    let input = input.trim();
    let mut tokens = input.split_whitespace().map(str::to_lowercase);
    let verb = tokens.next()?;
    let subjects = tokens
        .filter(|t| !STOP_WORDS.contains(&t.as_str()))
        .collect();
    Some(Command {
        verb,
        subjects,
        input: input.to_string(),
    })
}
