// src/sink/console.rs

use std::io::{self, Write};

use crate::errors::Result;
use crate::sink::OutputSink;

/// Sink that relays output to a writer, flushing after every chunk so the
/// display keeps up with the child process.
pub struct ConsoleSink<W: Write + Send> {
    writer: W,
}

impl ConsoleSink<io::Stdout> {
    /// Console sink over the process's stdout.
    pub fn stdout() -> Self {
        Self {
            writer: io::stdout(),
        }
    }
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send> OutputSink for ConsoleSink<W> {
    fn begin_run(&mut self) -> Result<()> {
        // A terminal has no surface to recreate; nothing to do.
        Ok(())
    }

    fn append(&mut self, chunk: &str, _scroll_to_end: bool) -> Result<()> {
        self.writer.write_all(chunk.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}
