//! Selection module - the user's technology choices and the store that owns them.

mod choices;
mod store;

pub use choices::Selection;
pub use store::{SelectionSnapshot, SelectionStore};
