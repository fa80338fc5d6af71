//! Simulated native disk shader cache loader
//!
//! Stands in for the emulator core: walks a number of cache entries on a
//! worker thread and reports `Prepare`, one `Build` per entry, then
//! `Complete`, exactly as the native callback would.

use std::thread;
use std::time::Duration;

use crate::relay::{ProgressStage, ShaderCacheProgressRelay};
use crate::tasks::DetachedTasks;

#[derive(Debug, Clone)]
pub struct ShaderCacheLoader {
    entries: u32,
    delay: Duration,
    raw_stage: Option<i32>,
}

impl ShaderCacheLoader {
    pub fn new(entries: u32) -> Self {
        Self {
            entries,
            delay: Duration::ZERO,
            raw_stage: None,
        }
    }

    /// Time spent "compiling" each entry.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Emit an extra report with this raw stage index right after `Prepare`,
    /// as a misbehaving native layer would.
    pub fn with_raw_stage(mut self, stage_index: i32) -> Self {
        self.raw_stage = Some(stage_index);
        self
    }

    pub fn entries(&self) -> u32 {
        self.entries
    }

    /// Run the load on the calling thread.
    pub fn load(&self, relay: &ShaderCacheProgressRelay) {
        tracing::debug!("Loading {} shader cache entries", self.entries);
        relay.report_stage(ProgressStage::Prepare, 0, 0);

        if let Some(index) = self.raw_stage {
            relay.report(index, 0, 0);
        }

        for i in 0..self.entries {
            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
            relay.report_stage(ProgressStage::Build, i + 1, self.entries);
        }

        relay.report_stage(ProgressStage::Complete, 0, 0);
    }

    /// Run the load on a detached worker thread registered with `tasks`.
    pub fn spawn(
        self,
        relay: ShaderCacheProgressRelay,
        tasks: &DetachedTasks,
    ) -> std::io::Result<()> {
        tasks.add_task("shader-cache-loader", move || self.load(&relay))
    }
}
