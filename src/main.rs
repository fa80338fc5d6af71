use anyhow::Result;
use clap::Parser;

use shader_relay::cli::{completion, config as config_cmd, simulate, Cli, Commands};
use shader_relay::config::Config;
use shader_relay::logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    logging::init(&logging::filter_directive(&config.log.level, cli.verbose));

    match cli.command {
        Commands::Simulate(args) => simulate::run(&config, args).await,
        Commands::Config(args) => config_cmd::run(cli.config.as_deref(), args),
        Commands::Completion(args) => completion::run(args),
    }
}
