//! Load callback stages reported by the native shader cache loader

use std::fmt;

use serde::Serialize;

use super::error::RelayError;

/// Stage of a disk shader cache load, in native ordinal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProgressStage {
    Prepare,
    Build,
    Complete,
}

impl ProgressStage {
    pub const ALL: [ProgressStage; 3] = [Self::Prepare, Self::Build, Self::Complete];

    pub fn index(self) -> i32 {
        match self {
            Self::Prepare => 0,
            Self::Build => 1,
            Self::Complete => 2,
        }
    }
}

impl TryFrom<i32> for ProgressStage {
    type Error = RelayError;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(RelayError::InvalidStageIndex(index))
    }
}

impl fmt::Display for ProgressStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Prepare => "prepare",
            Self::Build => "build",
            Self::Complete => "complete",
        };
        f.write_str(name)
    }
}

/// One validated notification from the native side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressReport {
    pub stage: ProgressStage,
    pub current: u32,
    pub max: u32,
}

impl ProgressReport {
    /// Build a report from raw native arguments. Negative counters clamp to zero.
    pub fn from_raw(stage_index: i32, current: i32, max: i32) -> Result<Self, RelayError> {
        let stage = ProgressStage::try_from(stage_index)?;
        Ok(Self {
            stage,
            current: clamp_counter(current),
            max: clamp_counter(max),
        })
    }
}

fn clamp_counter(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}
