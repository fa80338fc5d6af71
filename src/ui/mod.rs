//! UI-side consumer of shader cache progress
//!
//! [`UiContext`] owns the single-consumer end of the relay queue and the
//! relay's binding to a session sink. Whatever thread drains it is the
//! thread that touches the sink.

mod render;

pub use render::{format_progress_line, ProgressView};

use std::sync::{Arc, Weak};

use tokio::sync::mpsc;

use crate::relay::error::Result;
use crate::relay::{ProgressReport, ProgressStage, RelayError, ShaderCacheProgressRelay};
use crate::session::{ActiveSession, EmulationSession};

pub const DEFAULT_BUILD_LABEL: &str = "Building shaders";

/// Whether the relay currently has a sink to forward `Build` reports to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayState {
    Unbound,
    Bound { session_id: String },
}

enum Binding {
    Unbound,
    Bound {
        session_id: String,
        session: Weak<EmulationSession>,
    },
}

/// Create a connected relay handle and UI context.
pub fn channel(
    active: ActiveSession,
    build_label: impl Into<String>,
) -> (ShaderCacheProgressRelay, UiContext) {
    let (tx, rx) = mpsc::unbounded_channel();
    let ui = UiContext {
        receiver: rx,
        active,
        build_label: build_label.into(),
        binding: Binding::Unbound,
    };
    (ShaderCacheProgressRelay::new(tx), ui)
}

pub struct UiContext {
    receiver: mpsc::UnboundedReceiver<ProgressReport>,
    active: ActiveSession,
    build_label: String,
    binding: Binding,
}

impl UiContext {
    pub fn state(&self) -> RelayState {
        match &self.binding {
            Binding::Unbound => RelayState::Unbound,
            Binding::Bound { session_id, .. } => RelayState::Bound {
                session_id: session_id.clone(),
            },
        }
    }

    pub fn build_label(&self) -> &str {
        &self.build_label
    }

    /// Apply every queued report without waiting. Returns how many were handled.
    pub fn drain(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(report) = self.receiver.try_recv() {
            self.dispatch(report);
            handled += 1;
        }
        handled
    }

    /// Apply reports until every relay handle has been dropped.
    pub async fn run(&mut self) -> usize {
        let mut handled = 0;
        while let Some(report) = self.receiver.recv().await {
            self.dispatch(report);
            handled += 1;
        }
        handled
    }

    /// Wait for the next report and apply it. `None` once all relay handles
    /// are gone.
    pub async fn next(&mut self) -> Option<ProgressStage> {
        let report = self.receiver.recv().await?;
        self.dispatch(report);
        Some(report.stage)
    }

    fn dispatch(&mut self, report: ProgressReport) {
        match report.stage {
            ProgressStage::Prepare => {
                if let Err(e) = self.prepare() {
                    tracing::warn!("Shader cache prepare ignored: {}", e);
                }
            }
            ProgressStage::Build => {
                if let Err(e) = self.build(report.current, report.max) {
                    tracing::warn!(
                        "Dropping shader build progress {}/{}: {}",
                        report.current,
                        report.max,
                        e
                    );
                }
            }
            ProgressStage::Complete => self.complete(),
        }
    }

    fn prepare(&mut self) -> Result<()> {
        let session = self.active.current().ok_or(RelayError::NoActiveSession)?;
        tracing::debug!("Shader progress bound to session {}", session.short_id());
        self.binding = Binding::Bound {
            session_id: session.id.clone(),
            session: Arc::downgrade(&session),
        };
        Ok(())
    }

    fn build(&mut self, current: u32, max: u32) -> Result<()> {
        let Binding::Bound { session, .. } = &self.binding else {
            return Err(RelayError::NoBoundSink);
        };
        let Some(session) = session.upgrade() else {
            self.binding = Binding::Unbound;
            return Err(RelayError::SessionReleased);
        };
        session
            .progress_sink()
            .update(&self.build_label, current, max);
        Ok(())
    }

    fn complete(&mut self) {
        if let Binding::Bound { session_id, .. } = &self.binding {
            tracing::debug!("Shader cache load complete for session {}", session_id);
        }
        self.binding = Binding::Unbound;
    }
}
