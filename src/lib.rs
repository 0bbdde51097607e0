//! Persistent cursors over linked lists.
//!
//! A [`Cursor`] is a position within a snapshot of a list. Nothing about a cursor ever changes:
//! moving it or editing the list returns a new cursor and leaves the old one as it was, so any
//! cursor can be kept around, shared or compared with its descendants.
//!
//! # Kinds
//! What a cursor can do depends on its list and position, described by [`Kind`]:
//! - an empty list can be navigated (to no effect), seeded and cleared, but has no element to
//!   remove, shift or insert relative to;
//! - a singly linked list only moves forwards, so it has no `previous`, `start` or `end`;
//! - a finite list doesn't wrap around, so its first element has no `previous` and its last
//!   element has no `next`;
//! - anything else can do everything.
//!
//! Each kind has a concrete type ([`FullCursor`], [`SingleLinkCursor`], ...) implementing only the
//! capability traits in [`traits`] it supports. [`Cursor`] is the enum over all of them, which
//! dispatches at runtime and reports missing capabilities through [`Unsupported`].
//!
//! # Error Handling
//! Creating a cursor from typed values can't fail. Creating one from text can: a malformed
//! sequence is an [`InvalidData`] and an unknown link type is an [`InvalidType`], both gathered in
//! [`CreateError`]. Moves and edits never fail on the concrete cursor types; a boundary that can't
//! be crossed is either a missing method or, for edits like `remove_before` on the first element,
//! a cursor equal to the original.
//!
//! # Dependencies
//! I've kept the dependencies to things that would otherwise be boilerplate. `derive_more` writes
//! the `Display`, `Error` and conversion impls for the error types and for [`Cursor`], `tracing`
//! carries the few debug and trace events the crate emits (it does nothing until a subscriber is
//! installed), and `bitflags` backs [`Capabilities`]. Everything else, the list storage included,
//! is plain `std`.
//!
//! # Features
//! - `parse` (default): the textual front end, [`parse`] and [`create_parsed`].

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod linked;
#[cfg(feature = "parse")]
pub mod parse;
pub mod traits;

pub(crate) mod util;

#[doc(inline)]
pub use config::{Config, LinkType};
#[doc(inline)]
pub use linked::create;
#[cfg(feature = "parse")]
#[doc(inline)]
pub use linked::{create_parsed, try_create_parsed};
#[doc(inline)]
pub use linked::cursor::{
    BoundedEndCursor, BoundedStartCursor, Capabilities, Cursor, Datum, EmptyCursor, FullCursor,
    Kind, Operation, SingleLinkCursor,
};
pub use util::error::{CreateError, InvalidData, InvalidType, Unsupported};

/// The capability traits, for glob importing.
pub mod prelude {
    pub use crate::traits::{Backward, Edit, Forward, Jump, Query, Seed};
}
