//! Integration tests for the world layer: the move protocol, rooms and
//! exits, toggles, and the two-pass builder.

mod moves;
