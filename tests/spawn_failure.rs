// tests/spawn_failure.rs

#![cfg(unix)]

use std::error::Error;

use runrelay::errors::RunrelayError;
use runrelay::relay::{self, SpawnOptions};
use runrelay::source::{self, ScriptSource};
use runrelay_test_utils::{init_tracing, with_timeout, FailingSink, RecordingSink};

type TestResult = Result<(), Box<dyn Error>>;

fn sh_options() -> SpawnOptions {
    SpawnOptions {
        program: "sh".to_string(),
        args: Vec::new(),
        hide_console: false,
    }
}

#[tokio::test]
async fn missing_runtime_fails_before_any_output_and_cleans_up() -> TestResult {
    init_tracing();

    let script = source::resolve(ScriptSource::InMemory("echo hi".to_string()), ".sh")?;
    let path = script.path().to_path_buf();

    let options = SpawnOptions {
        program: "runrelay-no-such-interpreter".to_string(),
        args: Vec::new(),
        hide_console: false,
    };

    let mut sink = RecordingSink::new();
    let err = with_timeout(relay::run(script.path(), &mut sink, &options))
        .await
        .unwrap_err();

    assert!(matches!(err, RunrelayError::Spawn { .. }));

    // The surface was prepared, but no output and no timing line appeared.
    assert_eq!(sink.runs_started(), 1);
    assert!(sink.chunks().is_empty());

    // Scoped cleanup still runs.
    drop(script);
    assert!(!path.exists());

    Ok(())
}

#[tokio::test]
async fn sink_failure_mid_stream_propagates_and_cleans_up() -> TestResult {
    init_tracing();

    let script = source::resolve(
        ScriptSource::InMemory("echo one\necho two".to_string()),
        ".sh",
    )?;
    let path = script.path().to_path_buf();

    // First append succeeds, second finds the surface gone.
    let mut sink = FailingSink::after(1);
    let err = with_timeout(relay::run(script.path(), &mut sink, &sh_options()))
        .await
        .unwrap_err();

    assert!(matches!(err, RunrelayError::IoError(_)));

    drop(script);
    assert!(!path.exists());

    Ok(())
}
