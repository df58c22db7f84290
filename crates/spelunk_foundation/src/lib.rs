//! Foundation layer for the Spelunk engine.
//!
//! Core error types and the line-oriented output seam shared by every
//! other layer.

pub mod error;
pub mod output;

pub use error::{Error, ErrorKind, Result};
pub use output::{margin, Output, StdoutOutput, Transcript};
