//! Game rules for tic-tac-toe.
//!
//! Pure functions over a borrowed board. Rules are separated from board
//! storage so the session can compose them.

pub mod validate;
pub mod win;

pub use validate::validate;
pub use win::check_win;
