// src/relay/runner.rs

//! The run-and-relay loop.

use std::borrow::Cow;
use std::path::Path;
use std::time::{Duration, Instant};

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tracing::{debug, info};

use crate::errors::{Result, RunrelayError};
use crate::relay::spawn::{build_command, SpawnOptions};
use crate::sink::OutputSink;

/// Run the script at `path` and relay its output to `sink`.
///
/// The sink is prepared for a new run, the child is spawned, and both of
/// its output pipes are relayed line by line (carriage returns stripped)
/// until the pipes drain. The call then blocks until the child has fully
/// exited and appends a `[Finished in %.2fs]` line. There is no way to
/// cancel a run once started, and a hung child blocks indefinitely.
///
/// The child's exit status does not affect the result: errors raised by
/// the script itself arrive as ordinary text on the relayed stream.
pub async fn run(path: &Path, sink: &mut dyn OutputSink, options: &SpawnOptions) -> Result<()> {
    sink.begin_run()?;
    let started = Instant::now();

    info!(path = ?path, program = %options.program, "starting script process");

    let mut child = build_command(path, options)
        .spawn()
        .map_err(|source| RunrelayError::Spawn {
            program: options.program.clone(),
            source,
        })?;

    let mut stdout = child.stdout.take().map(LineStream::new);
    let mut stderr = child.stderr.take().map(LineStream::new);

    // Relay both pipes into the single sink stream, in arrival order,
    // until both have drained.
    while stdout.is_some() || stderr.is_some() {
        tokio::select! {
            chunk = next_chunk(&mut stdout), if stdout.is_some() => match chunk? {
                Some(text) => forward(sink, &text)?,
                None => stdout = None,
            },
            chunk = next_chunk(&mut stderr), if stderr.is_some() => match chunk? {
                Some(text) => forward(sink, &text)?,
                None => stderr = None,
            },
        }
    }

    // Block until the child has fully terminated. The status is logged but
    // never surfaced to the sink.
    let status = child.wait().await?;
    debug!(
        exit_code = status.code().unwrap_or(-1),
        success = status.success(),
        "script process exited"
    );

    sink.append(&format_finished(started.elapsed()), true)?;
    Ok(())
}

fn forward(sink: &mut dyn OutputSink, chunk: &str) -> Result<()> {
    debug!("child output: {}", chunk.trim_end());
    sink.append(chunk, true)
}

/// Remove all carriage-return characters from a chunk of output.
///
/// Normalizes both CRLF line endings and bare `\r` progress updates before
/// the text reaches the display.
pub fn strip_carriage_returns(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace('\r', ""))
    } else {
        Cow::Borrowed(text)
    }
}

/// Format the terminal timing line, e.g. `[Finished in 0.42s]`.
pub fn format_finished(elapsed: Duration) -> String {
    format!("[Finished in {:.2}s]", elapsed.as_secs_f64())
}

/// Incremental line reader over one child pipe.
struct LineStream<R> {
    reader: BufReader<R>,
    buf: Vec<u8>,
}

impl<R: AsyncRead + Unpin> LineStream<R> {
    fn new(inner: R) -> Self {
        Self {
            reader: BufReader::new(inner),
            buf: Vec::new(),
        }
    }

    /// Next output chunk: a full line including its newline, or the final
    /// partial line at EOF. Returns `None` once the pipe is exhausted.
    ///
    /// The buffer persists across calls, so a read cancelled by `select!`
    /// resumes mid-line without losing bytes.
    async fn next_chunk(&mut self) -> std::io::Result<Option<String>> {
        let n = self.reader.read_until(b'\n', &mut self.buf).await?;
        if n == 0 && self.buf.is_empty() {
            return Ok(None);
        }

        let text = strip_carriage_returns(&String::from_utf8_lossy(&self.buf)).into_owned();
        self.buf.clear();
        Ok(Some(text))
    }
}

/// `select!`-friendly wrapper: a drained pipe's branch never resolves.
async fn next_chunk<R: AsyncRead + Unpin>(
    stream: &mut Option<LineStream<R>>,
) -> std::io::Result<Option<String>> {
    match stream.as_mut() {
        Some(stream) => stream.next_chunk().await,
        None => std::future::pending().await,
    }
}
