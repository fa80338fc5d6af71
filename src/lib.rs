//! Disk shader cache progress relay for emulator front-ends.
//!
//! The native core reports load progress through
//! [`relay::ShaderCacheProgressRelay::report`]; a [`ui::UiContext`] drains
//! those reports and applies them to the active session's progress sink.

pub mod cli;
pub mod config;
pub mod loader;
pub mod logging;
pub mod relay;
pub mod session;
pub mod tasks;
pub mod ui;
