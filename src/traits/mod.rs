//! Traits describing what a cursor can do.

pub mod cursor;

#[doc(inline)]
pub use cursor::{Backward, Edit, Forward, Jump, Query, Seed};
