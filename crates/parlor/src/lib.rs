//! Parlor console: interactive tic-tac-toe and connect four.
//!
//! # Architecture
//!
//! - **Input**: tokenizes raw lines into coordinates ([`input`])
//! - **Render**: text boards ([`render`])
//! - **Variants**: per-game prompts and messages ([`variants`])
//! - **Console**: the phase-driven play loop ([`console`])
//! - **Config**: TOML console settings ([`config`])
//!
//! # Example
//!
//! ```no_run
//! use parlor::console::{Console, run};
//! use parlor::variants::TicTacToeConsole;
//!
//! # fn example() -> anyhow::Result<()> {
//! let stdin = std::io::stdin();
//! let mut console = Console::new(stdin.lock(), std::io::stdout());
//! run(&TicTacToeConsole, &mut console)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod console;
pub mod input;
pub mod render;
pub mod variants;

pub use config::{ConfigError, ConsoleConfig, DropInput};
pub use console::{Console, ConsoleError, SessionSummary, run};
pub use input::InputError;
pub use variants::{ConnectFourConsole, ConsoleVariant, TicTacToeConsole};
