//! Game rules for connect four.

pub mod validate;
pub mod win;

pub use validate::{validate_column, validate_drop};
pub use win::check_win;
