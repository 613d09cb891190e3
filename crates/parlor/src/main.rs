//! Parlor - interactive console board games.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use parlor::{Console, ConnectFourConsole, ConsoleConfig, DropInput, TicTacToeConsole, run};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = ConsoleConfig::load(cli.config.as_deref()).context("Loading console config")?;
    init_tracing(config.log_filter());
    info!(
        path = ?cli.config,
        drop_input = ?config.drop_input(),
        show_available_moves = *config.show_available_moves(),
        "Console config loaded"
    );

    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());

    let summary = match cli.command {
        Command::TicTacToe => run(&TicTacToeConsole, &mut console)?,
        Command::ConnectFour { column_only } => {
            let config = if column_only {
                config.with_drop_input(DropInput::ColumnOnly)
            } else {
                config
            };
            run(&ConnectFourConsole::new(&config), &mut console)?
        }
    };

    info!(?summary, "Exiting");
    Ok(())
}

/// Logs go to stderr so stdout stays the game surface.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}
