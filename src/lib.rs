// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod relay;
pub mod sink;
pub mod source;

use std::io::Read;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::loader::load_or_default;
use crate::errors::Result;
use crate::relay::SpawnOptions;
use crate::sink::ConsoleSink;
use crate::source::ScriptSource;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - source resolution (file / `--code` / stdin)
/// - the console sink
/// - the execution relay
pub async fn run(args: CliArgs) -> Result<()> {
    let config_path = PathBuf::from(&args.config);
    let cfg = load_or_default(&config_path)?;

    let source = resolve_source(&args)?;
    let script = source::resolve(source, &cfg.runtime.suffix)?;

    let mut options = SpawnOptions::from(&cfg.runtime);
    if let Some(program) = args.runtime {
        options.program = program;
    }

    info!(path = ?script.path(), program = %options.program, "running script");

    let mut sink = ConsoleSink::stdout();
    relay::run(script.path(), &mut sink, &options).await?;

    debug!("run complete");
    Ok(())
}

/// Turn the CLI arguments into an explicit `ScriptSource`.
///
/// Precedence:
/// - `FILE` positional → run that file from disk
/// - `--code TEXT` → run the given text from memory
/// - neither → read script text from stdin and run it from memory
fn resolve_source(args: &CliArgs) -> Result<ScriptSource> {
    if let Some(ref file) = args.file {
        return Ok(ScriptSource::OnDisk(file.clone()));
    }

    if let Some(ref code) = args.code {
        return Ok(ScriptSource::InMemory(code.clone()));
    }

    debug!("no FILE or --code given; reading script text from stdin");
    let mut text = String::new();
    std::io::stdin().lock().read_to_string(&mut text)?;
    Ok(ScriptSource::InMemory(text))
}
