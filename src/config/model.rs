// src/config/model.rs

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [runtime]
/// program = "python3"
/// args = ["-u"]
/// suffix = ".py"
/// hide_console = true
/// ```
///
/// All sections are optional and have defaults matching a stock Python
/// setup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Interpreter settings from `[runtime]`.
    #[serde(default)]
    pub runtime: RuntimeSection,
}

/// `[runtime]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeSection {
    /// The interpreter program to invoke.
    #[serde(default = "default_program")]
    pub program: String,

    /// Arguments placed before the script path.
    ///
    /// The default `-u` asks the interpreter for unbuffered output, so the
    /// relay sees lines as they are produced rather than on exit.
    #[serde(default = "default_args")]
    pub args: Vec<String>,

    /// File name suffix for temporary scripts (in-memory sources).
    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// Suppress the child's console window on Windows. No effect elsewhere.
    #[serde(default = "default_hide_console")]
    pub hide_console: bool,
}

fn default_program() -> String {
    "python".to_string()
}

fn default_args() -> Vec<String> {
    vec!["-u".to_string()]
}

fn default_suffix() -> String {
    ".py".to_string()
}

fn default_hide_console() -> bool {
    true
}

impl Default for RuntimeSection {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
            suffix: default_suffix(),
            hide_console: default_hide_console(),
        }
    }
}
