//! Emulation sessions and the active-session slot

mod progress;

pub use progress::{ProgressSink, ProgressSnapshot, ProgressState};

use std::sync::{Arc, Weak};

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use uuid::Uuid;

/// One run of an emulated title. Owns exactly one progress sink.
pub struct EmulationSession {
    pub id: String,
    pub title: String,
    pub started_at: DateTime<Utc>,
    sink: Arc<dyn ProgressSink>,
}

impl EmulationSession {
    pub fn new(title: &str, sink: Arc<dyn ProgressSink>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            started_at: Utc::now(),
            sink,
        }
    }

    /// Session backed by a fresh [`ProgressState`], returned alongside it.
    pub fn with_progress_state(title: &str) -> (Self, Arc<ProgressState>) {
        let state = Arc::new(ProgressState::new());
        let session = Self::new(title, state.clone());
        (session, state)
    }

    pub fn progress_sink(&self) -> &Arc<dyn ProgressSink> {
        &self.sink
    }

    pub fn short_id(&self) -> &str {
        if self.id.len() > 8 {
            &self.id[..8]
        } else {
            &self.id
        }
    }
}

impl std::fmt::Debug for EmulationSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmulationSession")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}

/// Weak back-reference to whichever session is currently running.
///
/// Used only for lookup; the session's owner decides its lifetime.
#[derive(Clone, Default)]
pub struct ActiveSession {
    slot: Arc<RwLock<Weak<EmulationSession>>>,
}

impl ActiveSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn activate(&self, session: &Arc<EmulationSession>) {
        tracing::debug!(
            "Activating session {} ({})",
            session.short_id(),
            session.title
        );
        *self.slot.write() = Arc::downgrade(session);
    }

    pub fn clear(&self) {
        *self.slot.write() = Weak::new();
    }

    /// Resolve the slot. `None` when nothing was activated or the session has
    /// since been dropped.
    pub fn current(&self) -> Option<Arc<EmulationSession>> {
        self.slot.read().upgrade()
    }
}
