//! Spelunk - Rule-driven interactive fiction engine
//!
//! This crate re-exports all layers of the Spelunk system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: spelunk_runtime    — Line editor, game loop, CLI, demo world
//! Layer 2: spelunk_parser     — Tokenizer, dispatch, standard vocabulary
//! Layer 1: spelunk_world      — Rooms, items, move protocol, builder
//! Layer 0: spelunk_foundation — Errors, output seam
//! ```

pub use spelunk_foundation as foundation;
pub use spelunk_parser as parser;
pub use spelunk_runtime as runtime;
pub use spelunk_world as world;
