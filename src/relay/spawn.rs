// src/relay/spawn.rs

//! Interpreter command construction.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

use crate::config::RuntimeSection;

/// How to launch the interpreter for a script.
#[derive(Debug, Clone)]
pub struct SpawnOptions {
    /// Interpreter program, e.g. `python`.
    pub program: String,

    /// Arguments placed before the script path, e.g. `["-u"]` for
    /// unbuffered output.
    pub args: Vec<String>,

    /// Suppress the child's console window on Windows. No effect elsewhere.
    pub hide_console: bool,
}

impl Default for SpawnOptions {
    fn default() -> Self {
        Self {
            program: "python".to_string(),
            args: vec!["-u".to_string()],
            hide_console: true,
        }
    }
}

impl From<&RuntimeSection> for SpawnOptions {
    fn from(runtime: &RuntimeSection) -> Self {
        Self {
            program: runtime.program.clone(),
            args: runtime.args.clone(),
            hide_console: runtime.hide_console,
        }
    }
}

/// Windows `CREATE_NO_WINDOW` process creation flag.
#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Build the interpreter command for `path`.
///
/// Both output pipes are captured; `kill_on_drop` ensures an abandoned run
/// does not leave the child behind.
pub(crate) fn build_command(path: &Path, options: &SpawnOptions) -> Command {
    let mut cmd = Command::new(&options.program);
    cmd.args(&options.args)
        .arg(path)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    apply_window_flags(&mut cmd, options);
    cmd
}

#[cfg(windows)]
fn apply_window_flags(cmd: &mut Command, options: &SpawnOptions) {
    if options.hide_console {
        cmd.creation_flags(CREATE_NO_WINDOW);
    }
}

#[cfg(not(windows))]
fn apply_window_flags(_cmd: &mut Command, _options: &SpawnOptions) {}
