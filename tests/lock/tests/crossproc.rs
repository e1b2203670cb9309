//! Cross-process determinism.
//!
//! Spawns the `traversal_fixture` binary under several environment
//! variants and asserts that every run prints exactly the lines the
//! in-process fixture computes. Traversal output must not depend on the
//! working directory, locale, or logging configuration.

use std::path::Path;
use std::process::Command;

use lock_tests::fixtures::fixture_lines;

/// Run the fixture binary with the given cwd and environment overrides.
/// Returns stdout as a string.
fn run_variant(work_dir: &Path, env_overrides: &[(&str, &str)]) -> String {
    let bin = env!("CARGO_BIN_EXE_traversal_fixture");

    let mut command = Command::new(bin);
    command
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!(
            "failed to spawn {bin} (work_dir={}, overrides={env_overrides:?}): {e}",
            work_dir.display()
        )
    });

    assert!(
        output.status.success(),
        "traversal_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

fn workspace_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
}

#[test]
fn crossproc_output_matches_inproc_fixture() {
    let baseline = run_variant(workspace_root(), &[]);
    let expected: String = fixture_lines()
        .iter()
        .map(|line| format!("{line}\n"))
        .collect();
    assert_eq!(baseline, expected);
}

#[test]
fn crossproc_determinism_env_variants() {
    let baseline = run_variant(workspace_root(), &[]);
    assert_eq!(baseline.lines().count(), 9);

    let scratch = tempfile::tempdir().expect("create temp dir");
    let variant_cwd = run_variant(scratch.path(), &[]);
    assert_eq!(
        baseline,
        variant_cwd,
        "output differs when cwd is {}",
        scratch.path().display()
    );

    let variant_locale = run_variant(workspace_root(), &[("LC_ALL", "C"), ("LANG", "C")]);
    assert_eq!(baseline, variant_locale, "output differs when LC_ALL=C LANG=C");

    let variant_utf8 = run_variant(
        workspace_root(),
        &[("LC_ALL", "en_US.UTF-8"), ("LANG", "en_US.UTF-8")],
    );
    assert_eq!(baseline, variant_utf8, "output differs under a UTF-8 locale");

    let variant_noise = run_variant(
        scratch.path(),
        &[
            ("RUST_LOG", "trace"),
            ("RUST_BACKTRACE", "1"),
            ("LAZYTREE_NOISE", "ignored"),
        ],
    );
    assert_eq!(baseline, variant_noise, "output differs with noisy env vars");
}

#[test]
fn crossproc_repeated_runs_agree() {
    let first = run_variant(workspace_root(), &[]);
    for i in 1..=3 {
        assert_eq!(
            run_variant(workspace_root(), &[]),
            first,
            "process run {i} diverged"
        );
    }
}
