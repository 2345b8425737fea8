use std::io;
use std::sync::{Arc, Mutex};

use runrelay::errors::{Result, RunrelayError};
use runrelay::sink::OutputSink;

/// One `append` call as seen by a [`RecordingSink`].
#[derive(Debug, Clone)]
pub struct AppendedChunk {
    pub text: String,
    pub scroll_to_end: bool,
}

#[derive(Debug, Default)]
struct SinkState {
    runs_started: usize,
    chunks: Vec<AppendedChunk>,
}

/// A sink that records everything appended to it.
///
/// Cloning shares the underlying state, so a clone kept by the test can
/// inspect what the relay wrote through the original.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    state: Arc<Mutex<SinkState>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `begin_run` calls observed.
    pub fn runs_started(&self) -> usize {
        self.state.lock().unwrap().runs_started
    }

    /// All appended chunks, in order.
    pub fn chunks(&self) -> Vec<AppendedChunk> {
        self.state.lock().unwrap().chunks.clone()
    }

    /// All appended text concatenated, as a display surface would show it.
    pub fn contents(&self) -> String {
        self.state
            .lock()
            .unwrap()
            .chunks
            .iter()
            .map(|c| c.text.as_str())
            .collect()
    }
}

impl OutputSink for RecordingSink {
    fn begin_run(&mut self) -> Result<()> {
        self.state.lock().unwrap().runs_started += 1;
        Ok(())
    }

    fn append(&mut self, chunk: &str, scroll_to_end: bool) -> Result<()> {
        self.state.lock().unwrap().chunks.push(AppendedChunk {
            text: chunk.to_string(),
            scroll_to_end,
        });
        Ok(())
    }
}

/// A sink that becomes unavailable after a fixed number of appends.
///
/// Used to check that a mid-stream display failure propagates out of the
/// relay while scoped cleanup still runs.
#[derive(Debug)]
pub struct FailingSink {
    appends_before_failure: usize,
    appends_seen: usize,
}

impl FailingSink {
    pub fn after(appends_before_failure: usize) -> Self {
        Self {
            appends_before_failure,
            appends_seen: 0,
        }
    }
}

impl OutputSink for FailingSink {
    fn begin_run(&mut self) -> Result<()> {
        Ok(())
    }

    fn append(&mut self, _chunk: &str, _scroll_to_end: bool) -> Result<()> {
        if self.appends_seen >= self.appends_before_failure {
            return Err(RunrelayError::IoError(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "display surface went away",
            )));
        }
        self.appends_seen += 1;
        Ok(())
    }
}
