//! Quizbank CLI - Build and inspect the JSON question bank.

use clap::Parser;
use quizbank_cli::commands;
use quizbank_cli::logging::init_logging;
use quizbank_cli::{Cli, Command, Config, Formatter};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> quizbank_cli::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    init_logging(&config.settings.log_level, cli.verbose);

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Extract(args) => {
            commands::execute_extract(args, &config, &formatter)?;
        }
        Command::Stats(args) => {
            commands::execute_stats(args, &config, &formatter)?;
        }
        Command::Sample(args) => {
            commands::execute_sample(args, &config, &formatter)?;
        }
    }

    Ok(())
}
