//! Disk shader cache progress relay
//!
//! The native loader calls [`ShaderCacheProgressRelay::report`] from its own
//! thread. Reports are validated there and queued for the UI context, which
//! applies them to the active session's progress sink (see [`crate::ui`]).

pub mod error;
mod stage;

pub use error::RelayError;
pub use stage::{ProgressReport, ProgressStage};

use tokio::sync::mpsc;

use error::Result;

/// Notification-side handle of the relay. Cheap to clone; every clone feeds
/// the same UI context.
#[derive(Clone)]
pub struct ShaderCacheProgressRelay {
    sender: mpsc::UnboundedSender<ProgressReport>,
}

impl ShaderCacheProgressRelay {
    pub(crate) fn new(sender: mpsc::UnboundedSender<ProgressReport>) -> Self {
        Self { sender }
    }

    /// Native callback entry point.
    ///
    /// Never blocks and never returns an error to the caller. An out-of-range
    /// `stage_index` is a broken integration and panics.
    pub fn report(&self, stage_index: i32, current: i32, max: i32) {
        let report = match ProgressReport::from_raw(stage_index, current, max) {
            Ok(report) => report,
            Err(e) => {
                tracing::error!("Shader cache progress contract violated: {}", e);
                panic!("{}", e);
            }
        };
        self.enqueue(report);
    }

    /// Like [`report`](Self::report), but an invalid stage index comes back as
    /// [`RelayError::InvalidStageIndex`] instead of panicking.
    pub fn try_report(&self, stage_index: i32, current: i32, max: i32) -> Result<()> {
        let report = ProgressReport::from_raw(stage_index, current, max)?;
        self.enqueue(report);
        Ok(())
    }

    /// Typed entry point for Rust-side loaders.
    pub fn report_stage(&self, stage: ProgressStage, current: u32, max: u32) {
        self.enqueue(ProgressReport {
            stage,
            current,
            max,
        });
    }

    /// Whether the UI context is still draining reports.
    pub fn is_connected(&self) -> bool {
        !self.sender.is_closed()
    }

    fn enqueue(&self, report: ProgressReport) {
        if self.sender.send(report).is_err() {
            tracing::debug!(
                "{}; dropping {} report ({}/{})",
                RelayError::UiContextClosed,
                report.stage,
                report.current,
                report.max
            );
        }
    }
}
