//! Command-line interface

pub mod completion;
pub mod config;
pub mod simulate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "shader-relay")]
#[command(about = "Relay disk shader cache load progress to a UI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to config.toml (defaults to the user config directory)
    #[arg(long, global = true, env = "SHADER_RELAY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a simulated shader cache load through the relay
    Simulate(simulate::SimulateArgs),

    /// Show or initialise the configuration file
    Config(config::ConfigArgs),

    /// Generate shell completions
    Completion(completion::CompletionArgs),
}
