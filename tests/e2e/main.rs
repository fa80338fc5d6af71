//! End-to-end tests for shader-relay.
//!
//! These tests exercise the full `shader-relay` binary via subprocess. They
//! catch startup failures, config resolution errors and full-flow
//! regressions that unit and integration tests miss.
//!
//! # Running
//!
//! ```sh
//! cargo test --test e2e              # run all e2e tests
//! cargo test --test e2e -- --nocapture
//! ```

mod harness;

mod cli;
mod errors;
mod simulate;
