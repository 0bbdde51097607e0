use std::fmt::{self, Debug, Formatter};

use super::Kind;
use crate::linked::contents::RawCursor;
use crate::traits::cursor::sealed::Sealed;
use crate::traits::cursor::{Backward, Edit, Forward, Jump};

macro_rules! cursor_variant {
    ($(#[$meta:meta])* $name:ident => $kind:expr) => {
        $(#[$meta])*
        pub struct $name<T> {
            raw: RawCursor<T>,
        }

        impl<T> $name<T> {
            pub(crate) const fn wrap(raw: RawCursor<T>) -> $name<T> {
                $name { raw }
            }
        }

        impl<T> Sealed<T> for $name<T> {
            fn raw(&self) -> &RawCursor<T> {
                &self.raw
            }

            fn fixed_kind(&self) -> Kind {
                $kind
            }
        }

        impl<T> Clone for $name<T> {
            fn clone(&self) -> Self {
                $name {
                    raw: self.raw.clone(),
                }
            }
        }

        impl<T: PartialEq> PartialEq for $name<T> {
            fn eq(&self, other: &Self) -> bool {
                self.raw == other.raw
            }
        }

        impl<T: Eq> Eq for $name<T> {}

        impl<T: Debug> Debug for $name<T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("items", &self.raw.items())
                    .field("index", &self.raw.index())
                    .field("config", &self.raw.config)
                    .finish()
            }
        }
    };
}

cursor_variant! {
    /// A cursor over an empty list. It can be navigated (to no effect), seeded or cleared, but
    /// has nothing to remove, shift or insert relative to.
    EmptyCursor => Kind::Empty
}

cursor_variant! {
    /// A cursor over a non-empty singly linked list: it can only move forwards.
    SingleLinkCursor => Kind::SingleLink
}

cursor_variant! {
    /// A cursor on the first element of a non-empty finite list, which has no `previous`.
    BoundedStartCursor => Kind::BoundedStart
}

cursor_variant! {
    /// A cursor on the last element of a non-empty finite list, which has no `next`.
    BoundedEndCursor => Kind::BoundedEnd
}

cursor_variant! {
    /// A cursor with every capability: a doubly linked list that is either circular, or finite
    /// with the cursor away from both ends.
    FullCursor => Kind::Full
}

impl<T> Forward<T> for EmptyCursor<T> {}
impl<T> Backward<T> for EmptyCursor<T> {}
impl<T> Jump<T> for EmptyCursor<T> {}

impl<T> Forward<T> for SingleLinkCursor<T> {}
impl<T: Clone> Edit<T> for SingleLinkCursor<T> {}

impl<T> Forward<T> for BoundedStartCursor<T> {}
impl<T> Jump<T> for BoundedStartCursor<T> {}
impl<T: Clone> Edit<T> for BoundedStartCursor<T> {}

impl<T> Backward<T> for BoundedEndCursor<T> {}
impl<T> Jump<T> for BoundedEndCursor<T> {}
impl<T: Clone> Edit<T> for BoundedEndCursor<T> {}

impl<T> Forward<T> for FullCursor<T> {}
impl<T> Backward<T> for FullCursor<T> {}
impl<T> Jump<T> for FullCursor<T> {}
impl<T: Clone> Edit<T> for FullCursor<T> {}
