// src/sink/mod.rs

//! Output sink abstraction.
//!
//! The relay talks to an `OutputSink` instead of writing to stdout
//! directly. This makes it easy to swap in a recording sink in tests while
//! keeping the production console sink in [`console`].

pub mod console;

pub use console::ConsoleSink;

use crate::errors::Result;

/// An append-only display surface for relayed output.
///
/// Production code uses [`ConsoleSink`]; tests can provide their own
/// implementation that records what was appended.
pub trait OutputSink: Send {
    /// Prepare the surface for a new run (show it, clear previous content).
    fn begin_run(&mut self) -> Result<()>;

    /// Append a chunk of text. `scroll_to_end` asks the surface to keep the
    /// newest content visible; surfaces without a scroll concept ignore it.
    fn append(&mut self, chunk: &str, scroll_to_end: bool) -> Result<()>;
}
