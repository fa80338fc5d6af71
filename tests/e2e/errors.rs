use serial_test::serial;

use crate::harness::{stderr, TestHarness};

#[test]
#[serial]
fn test_cli_invalid_stage_index_is_fatal() {
    let h = TestHarness::new("bad_stage");

    let output = h.run_cli(&[
        "simulate",
        "--shaders",
        "2",
        "--delay-ms",
        "0",
        "--stage-index",
        "7",
    ]);
    assert!(
        !output.status.success(),
        "out-of-range stage index must not pass silently"
    );

    let err = stderr(&output);
    assert!(
        err.contains("Invalid load callback stage index: 7"),
        "expected contract violation message.\nstderr: {}",
        err
    );
}

#[test]
#[serial]
fn test_cli_malformed_config() {
    let h = TestHarness::new("bad_config");
    h.write_config("[relay\nbuild_label = ");

    let output = h.run_cli(&["simulate", "--shaders", "1"]);
    assert!(!output.status.success());
    assert!(
        stderr(&output).contains("Invalid config"),
        "stderr: {}",
        stderr(&output)
    );
}
