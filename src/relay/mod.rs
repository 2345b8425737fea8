// src/relay/mod.rs

//! Execution relay.
//!
//! This module runs a materialized script as a subprocess and pumps its
//! output to an [`OutputSink`](crate::sink::OutputSink) as it appears:
//!
//! - [`spawn`] builds the interpreter command, including the Windows
//!   no-console flag.
//! - [`runner`] owns the streaming loop and the final timing line.

pub mod runner;
pub mod spawn;

pub use runner::{format_finished, run, strip_carriage_returns};
pub use spawn::SpawnOptions;
