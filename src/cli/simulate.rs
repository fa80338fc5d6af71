//! `shader-relay simulate` command implementation

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::Serialize;

use crate::config::Config;
use crate::loader::ShaderCacheLoader;
use crate::relay::ProgressStage;
use crate::session::{ActiveSession, EmulationSession, ProgressSnapshot};
use crate::tasks::DetachedTasks;
use crate::ui::{self, format_progress_line, ProgressView};

#[derive(Args)]
pub struct SimulateArgs {
    /// Number of shader cache entries to load (defaults to config)
    #[arg(short, long)]
    shaders: Option<u32>,

    /// Milliseconds spent per entry (defaults to config)
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Title of the emulated session
    #[arg(short, long, default_value = "Simulated Title")]
    title: String,

    /// Run without an active session; progress is dropped
    #[arg(long)]
    no_session: bool,

    /// Emit an extra raw stage index after Prepare (out-of-range is fatal)
    #[arg(long, allow_hyphen_values = true)]
    stage_index: Option<i32>,

    /// Print the final progress as JSON instead of progress lines
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct SimulateSummary<'a> {
    session_id: &'a str,
    title: &'a str,
    session_active: bool,
    progress: ProgressSnapshot,
}

pub async fn run(config: &Config, args: SimulateArgs) -> Result<()> {
    let shaders = args.shaders.unwrap_or(config.simulate.shaders);
    let delay = Duration::from_millis(args.delay_ms.unwrap_or(config.simulate.delay_ms));

    let active = ActiveSession::new();
    let (session, state) = EmulationSession::with_progress_state(&args.title);
    let session = Arc::new(session);
    if !args.no_session {
        active.activate(&session);
    }

    let (relay, mut ui) = ui::channel(active.clone(), config.relay.build_label.clone());
    let tasks = DetachedTasks::new();

    let mut loader = ShaderCacheLoader::new(shaders).with_delay(delay);
    if let Some(index) = args.stage_index {
        loader = loader.with_raw_stage(index);
    }
    loader
        .spawn(relay, &tasks)
        .context("Failed to start shader cache loader")?;

    let view = ProgressView::new(!args.json).context("Invalid progress bar template")?;
    while let Some(stage) = ui.next().await {
        if stage == ProgressStage::Build {
            view.render(&state.snapshot());
        }
    }
    view.finish();

    let waiter = tasks.clone();
    tokio::task::spawn_blocking(move || waiter.wait_for_all())
        .await
        .context("Failed waiting for loader thread")?;

    if tasks.panicked() > 0 {
        bail!("Shader cache loader aborted: native layer violated the progress contract");
    }

    active.clear();
    let progress = state.snapshot();

    if args.json {
        let summary = SimulateSummary {
            session_id: &session.id,
            title: &session.title,
            session_active: !args.no_session,
            progress,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else if progress.updates == 0 {
        println!("No shader progress delivered (no active session)");
    } else {
        println!("{}", format_progress_line(&progress));
        println!(
            "✓ Loaded {} shaders for '{}' (session {})",
            progress.max,
            session.title,
            session.short_id()
        );
    }

    Ok(())
}
