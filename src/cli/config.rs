//! `shader-relay config` command implementation

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;

use crate::config::{self, Config};

#[derive(Args)]
pub struct ConfigArgs {
    /// Print the config file path only
    #[arg(long)]
    path: bool,

    /// Write a default config file if none exists
    #[arg(long, conflicts_with = "path")]
    init: bool,
}

pub fn run(config_path: Option<&Path>, args: ConfigArgs) -> Result<()> {
    let path: PathBuf = match config_path {
        Some(p) => p.to_path_buf(),
        None => config::default_path()?,
    };

    if args.path {
        println!("{}", path.display());
        return Ok(());
    }

    if args.init {
        if path.exists() {
            bail!("Config already exists: {}", path.display());
        }
        Config::default()
            .save(&path)
            .with_context(|| format!("Failed to initialise {}", path.display()))?;
        println!("✓ Wrote default config: {}", path.display());
        return Ok(());
    }

    let config = Config::load_from(&path)?;
    print!("{}", config.to_toml()?);
    Ok(())
}
