use serial_test::serial;

use crate::harness::{stderr, stdout, TestHarness};

#[test]
#[serial]
fn test_cli_config_defaults() {
    let h = TestHarness::new("config_defaults");

    let output = h.run_cli(&["config"]);
    assert!(output.status.success(), "config failed: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("[relay]"), "output:\n{}", out);
    assert!(out.contains("Building shaders"), "output:\n{}", out);
    assert!(out.contains("shaders = 64"), "output:\n{}", out);
}

#[test]
#[serial]
fn test_cli_config_path_and_init() {
    let h = TestHarness::new("config_init");

    let output = h.run_cli(&["config", "--path"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), h.config_path().display().to_string());

    let output = h.run_cli(&["config", "--init"]);
    assert!(output.status.success(), "init failed: {}", stderr(&output));
    assert!(h.config_path().exists());

    let output = h.run_cli(&["config", "--init"]);
    assert!(
        !output.status.success(),
        "second init should refuse to overwrite"
    );
    assert!(stderr(&output).contains("already exists"));
}

#[test]
#[serial]
fn test_cli_completion() {
    let h = TestHarness::new("completion");

    let output = h.run_cli(&["completion", "bash"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("shader-relay"));
}
