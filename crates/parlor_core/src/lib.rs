//! Shared engine pieces for two-player grid games.
//!
//! # Architecture
//!
//! - **Board**: fixed-size grid of [`Cell`]s, reset in place between games
//! - **Rules**: per-variant validator and line detector ([`Rules`])
//! - **Session**: the turn controller that owns the board ([`Session`])
//! - **Invariants**: properties re-checked after every placement in debug builds

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
pub mod invariants;
mod outcome;
mod player;
mod rules;
mod session;

pub use board::{Board, Coord};
pub use error::{MoveError, PhaseError};
pub use outcome::Outcome;
pub use player::{Cell, Player};
pub use rules::Rules;
pub use session::{Phase, Placement, Session};
