//! Progress sinks owned by an emulation session

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Serialize;

/// UI-facing destination for shader build progress.
///
/// Only the UI context calls `update`, but sinks live inside a session that
/// is shared across threads, hence `Send + Sync`.
pub trait ProgressSink: Send + Sync {
    fn update(&self, label: &str, current: u32, max: u32);
}

/// Observable state of a [`ProgressState`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProgressSnapshot {
    pub label: String,
    pub current: u32,
    pub max: u32,
    pub updates: u64,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProgressSnapshot {
    /// Completed fraction in `[0, 1]`; zero while `max` is zero.
    pub fn fraction(&self) -> f64 {
        if self.max == 0 {
            return 0.0;
        }
        (f64::from(self.current) / f64::from(self.max)).min(1.0)
    }

    pub fn percent(&self) -> u32 {
        (self.fraction() * 100.0).round() as u32
    }
}

/// Default sink: keeps the latest progress for the UI to render.
#[derive(Debug, Default)]
pub struct ProgressState {
    inner: Mutex<ProgressSnapshot>,
}

impl ProgressState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        self.inner.lock().clone()
    }

    pub fn fraction(&self) -> f64 {
        self.inner.lock().fraction()
    }
}

impl ProgressSink for ProgressState {
    fn update(&self, label: &str, current: u32, max: u32) {
        let mut state = self.inner.lock();
        if state.label != label {
            state.label = label.to_string();
        }
        state.current = current;
        state.max = max;
        state.updates += 1;
        state.updated_at = Some(Utc::now());
    }
}
