//! Error types for the progress relay

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("Invalid load callback stage index: {0}")]
    InvalidStageIndex(i32),

    #[error("No active emulation session")]
    NoActiveSession,

    #[error("No progress sink bound; was Prepare skipped?")]
    NoBoundSink,

    #[error("Bound emulation session was released")]
    SessionReleased,

    #[error("UI context is no longer receiving progress")]
    UiContextClosed,
}

pub type Result<T> = std::result::Result<T, RelayError>;
