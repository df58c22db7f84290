//! Integration tests for the parser layer: dispatch order, fallbacks,
//! and the standard vocabulary.

mod dispatch;
