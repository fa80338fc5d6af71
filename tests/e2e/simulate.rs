use serial_test::serial;

use crate::harness::{stderr, stdout, TestHarness};

#[test]
#[serial]
fn test_simulate_reports_full_progress() {
    let h = TestHarness::new("simulate");

    let output = h.run_cli(&["simulate", "--shaders", "5", "--delay-ms", "0"]);
    assert!(
        output.status.success(),
        "simulate failed: {}",
        stderr(&output)
    );

    let out = stdout(&output);
    assert!(out.contains("Building shaders"), "output:\n{}", out);
    assert!(out.contains("5/5 (100%)"), "output:\n{}", out);
    assert!(out.contains("Loaded 5 shaders"), "output:\n{}", out);
}

#[test]
#[serial]
fn test_simulate_uses_configured_label() {
    let h = TestHarness::new("simulate_label");
    h.write_config(
        "[relay]\nbuild_label = \"Compiling pipelines\"\n\n[simulate]\nshaders = 3\ndelay_ms = 0\n",
    );

    let output = h.run_cli(&["simulate"]);
    assert!(
        output.status.success(),
        "simulate failed: {}",
        stderr(&output)
    );

    let out = stdout(&output);
    assert!(out.contains("Compiling pipelines"), "output:\n{}", out);
    assert!(out.contains("3/3"), "output:\n{}", out);
}

#[test]
#[serial]
fn test_simulate_json_summary() {
    let h = TestHarness::new("simulate_json");

    let output = h.run_cli(&[
        "simulate",
        "--shaders",
        "4",
        "--delay-ms",
        "0",
        "--json",
    ]);
    assert!(
        output.status.success(),
        "simulate failed: {}",
        stderr(&output)
    );

    let summary: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(summary["session_active"], true);
    assert_eq!(summary["progress"]["current"], 4);
    assert_eq!(summary["progress"]["max"], 4);
    assert_eq!(summary["progress"]["updates"], 4);
    assert_eq!(summary["progress"]["label"], "Building shaders");
}

#[test]
#[serial]
fn test_simulate_without_session_drops_progress() {
    let h = TestHarness::new("simulate_no_session");

    let output = h.run_cli(&[
        "simulate",
        "--shaders",
        "3",
        "--delay-ms",
        "0",
        "--no-session",
    ]);
    assert!(
        output.status.success(),
        "dropped progress must not fail the run: {}",
        stderr(&output)
    );
    assert!(stdout(&output).contains("No shader progress delivered"));
    assert!(
        stderr(&output).contains("No active emulation session"),
        "expected logged drop.\nstderr: {}",
        stderr(&output)
    );
    assert!(
        stderr(&output).contains("Dropping shader build progress 3/3"),
        "expected every dropped build report to be logged.\nstderr: {}",
        stderr(&output)
    );
}
