// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `runrelay`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "runrelay",
    version,
    about = "Run a script and relay its output, line by line, as it appears.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the script file to run.
    ///
    /// When omitted (and `--code` is not given), script text is read from
    /// stdin and executed from a temporary file.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Script text to run directly, without a backing file.
    #[arg(short = 'c', long, value_name = "TEXT", conflicts_with = "file")]
    pub code: Option<String>,

    /// Path to the config file (TOML).
    ///
    /// Default: `Runrelay.toml` in the current working directory. Built-in
    /// defaults are used when the file does not exist.
    #[arg(long, value_name = "PATH", default_value = "Runrelay.toml")]
    pub config: String,

    /// Override the runtime program from the config (e.g. `python3`).
    #[arg(long, value_name = "PROGRAM")]
    pub runtime: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `RUNRELAY_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
