use bookshelf_cli::args::{Cli, Command};
use bookshelf_cli::{commands, config, logging};
use clap::Parser;
use eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => config::default_config_path()?,
    };
    let config = config::load_config(&config_path)?;

    logging::init(&config.log_level, cli.json_logs);
    tracing::debug!(path = %config_path.display(), "config loaded");

    let output = match &cli.command {
        Command::Analyze(args) => commands::analyze(&config, args)?,
        Command::Terms { corpus } => commands::terms(&config, corpus)?,
        Command::History { query } => commands::history(&config, query)?,
        Command::Config { action } => commands::config(&config, &config_path, action)?,
    };
    print!("{output}");

    Ok(())
}
