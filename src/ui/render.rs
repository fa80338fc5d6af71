//! Terminal rendering of shader build progress

use indicatif::style::TemplateError;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::session::ProgressSnapshot;

const TEMPLATE: &str = "{msg:>16!.cyan.bold} [{wide_bar:.white.dim}] {pos}/{len} {percent:>3}%";

/// Progress bar fed from [`ProgressSnapshot`]s on the UI thread.
#[derive(Debug)]
pub struct ProgressView {
    bar: ProgressBar,
}

impl ProgressView {
    /// Draws to stderr when `visible`, otherwise tracks state without drawing.
    pub fn new(visible: bool) -> Result<Self, TemplateError> {
        let style = ProgressStyle::with_template(TEMPLATE)?.progress_chars("=> ");
        let target = if visible {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        };
        let bar = ProgressBar::with_draw_target(Some(0), target).with_style(style);
        Ok(Self { bar })
    }

    pub fn render(&self, snapshot: &ProgressSnapshot) {
        let max = u64::from(snapshot.max);
        if self.bar.length() != Some(max) {
            self.bar.set_length(max);
        }
        self.bar.set_position(u64::from(snapshot.current));
        if self.bar.message() != snapshot.label {
            self.bar.set_message(snapshot.label.clone());
        }
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    pub fn message(&self) -> String {
        self.bar.message()
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

/// Plain summary line, e.g. `Building shaders 5/10 (50%)`.
pub fn format_progress_line(snapshot: &ProgressSnapshot) -> String {
    format!(
        "{} {}/{} ({}%)",
        snapshot.label,
        snapshot.current,
        snapshot.max,
        snapshot.percent()
    )
}
