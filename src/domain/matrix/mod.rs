//! Reference data - the static estimate table and vendor credit programs.

mod credits;
mod lakehouse;
mod row;

pub use credits::{startup_credits_for, StartupCredits, STARTUP_CREDITS};
pub use lakehouse::LAKEHOUSE_MATRIX;
pub use row::MatrixRow;
