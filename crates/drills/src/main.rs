mod cli;
mod commands;
mod config;

use clap::Parser;
use cli::{Cli, Commands};
use config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // RUST_LOG wins over the configured default
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_directive)),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compress {
            file,
            strategy,
            auto,
        } => commands::compress::run(&file, strategy, auto, &config),
        Commands::Expenses { add, remove, json } => commands::expenses::run(&add, &remove, json),
        Commands::Strategies => commands::strategies::run(),
        Commands::Version => commands::version::run(),
    }
}
