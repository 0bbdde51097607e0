//! The [`Cursor`] type, its concrete per-state variants and the vocabulary used to describe what
//! each of them can do.

mod capability;
mod cursor;
mod state;
mod tests;
mod variants;

pub use capability::*;
pub use cursor::*;
pub use state::*;
pub use variants::*;
