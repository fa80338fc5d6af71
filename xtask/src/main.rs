//! Developer tasks: `cargo xtask gen-docs`

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser)]
struct Xtask {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Regenerate docs/cli.md from the CLI definition
    GenDocs,
}

fn main() -> Result<()> {
    match Xtask::parse().command {
        Task::GenDocs => gen_docs(),
    }
}

fn gen_docs() -> Result<()> {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .context("xtask has no parent directory")?
        .to_path_buf();
    let out = root.join("docs").join("cli.md");

    let markdown = clap_markdown::help_markdown::<shader_relay::cli::Cli>();
    fs::create_dir_all(out.parent().context("invalid docs path")?)?;
    fs::write(&out, markdown).with_context(|| format!("Failed to write {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}
