//! Persistent linked-list cursors. Primarily revolves around [`create`] and the [`Cursor`] it
//! returns.

pub(crate) mod contents;
pub mod cursor;
mod factory;

pub use factory::*;
#[doc(inline)]
pub use cursor::{Cursor, Datum};
