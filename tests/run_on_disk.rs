// tests/run_on_disk.rs

#![cfg(unix)]

use std::error::Error;
use std::fs;

use runrelay::relay::{self, SpawnOptions};
use runrelay::source::{self, ScriptSource};
use runrelay_test_utils::{init_tracing, with_timeout, RecordingSink};

type TestResult = Result<(), Box<dyn Error>>;

fn sh_options() -> SpawnOptions {
    SpawnOptions {
        program: "sh".to_string(),
        args: Vec::new(),
        hide_console: false,
    }
}

#[tokio::test]
async fn on_disk_script_runs_directly_against_the_given_path() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("hello.sh");
    fs::write(&path, "echo hi from disk")?;

    let script = source::resolve(ScriptSource::OnDisk(path.clone()), ".sh")?;
    assert!(!script.is_temporary());
    assert_eq!(script.path(), path.as_path());

    let mut sink = RecordingSink::new();
    with_timeout(relay::run(script.path(), &mut sink, &sh_options())).await?;

    assert!(sink.contents().starts_with("hi from disk\n"));

    // Resolving and dropping never touches the caller's file.
    drop(script);
    assert!(path.exists());
    assert_eq!(fs::read_to_string(&path)?, "echo hi from disk");

    Ok(())
}

#[tokio::test]
async fn on_disk_resolution_creates_no_temp_file() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("noop.sh");
    fs::write(&path, "true")?;

    let script = source::resolve(ScriptSource::OnDisk(path.clone()), ".sh")?;

    // The only file in the fixture dir is the script itself.
    let entries: Vec<_> = fs::read_dir(dir.path())?.collect();
    assert_eq!(entries.len(), 1);

    let mut sink = RecordingSink::new();
    with_timeout(relay::run(script.path(), &mut sink, &sh_options())).await?;

    Ok(())
}
