//! Command-line interface for parlor.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parlor - two-player console board games
#[derive(Parser, Debug)]
#[command(name = "parlor")]
#[command(about = "Two-player console board games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML console configuration
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Game to play
    #[command(subcommand)]
    pub command: Command,
}

/// Available games
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play tic-tac-toe on a 3x3 board
    TicTacToe,

    /// Play connect four on a 6x7 board
    ConnectFour {
        /// Enter only a column letter; the landing row is computed
        #[arg(long)]
        column_only: bool,
    },
}
