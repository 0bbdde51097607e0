//! One trait per capability. Each concrete cursor implements exactly the capabilities its state
//! allows, so calling an unavailable operation on one is a compile error rather than a panic.

use std::slice::Iter;

use crate::config::Config;
use crate::linked::cursor::{Capabilities, Cursor, Datum, Kind};

use sealed::Sealed;

pub(crate) mod sealed {
    use crate::linked::contents::RawCursor;
    use crate::linked::cursor::Kind;

    pub trait Sealed<T> {
        fn raw(&self) -> &RawCursor<T>;

        /// The kind decided when the cursor was built.
        fn fixed_kind(&self) -> Kind;
    }
}

/// Read-only access to a cursor, available in every state.
pub trait Query<T>: Sealed<T> {
    /// The element under the cursor, or [`Datum::Empty`] for an empty list.
    fn data(&self) -> Datum<'_, T> {
        self.raw().data()
    }

    /// The number of elements in the list. The empty marker doesn't count.
    fn size(&self) -> usize {
        self.raw().size()
    }

    /// The position of the cursor, if the list has any elements.
    fn index(&self) -> Option<usize> {
        self.raw().index()
    }

    fn is_start(&self) -> bool {
        self.raw().is_start()
    }

    fn is_end(&self) -> bool {
        self.raw().is_end()
    }

    fn is_empty(&self) -> bool {
        self.raw().is_empty()
    }

    fn config(&self) -> Config {
        self.raw().config
    }

    fn kind(&self) -> Kind {
        self.fixed_kind()
    }

    fn capabilities(&self) -> Capabilities {
        self.kind().capabilities()
    }

    /// Iterates over the whole list from its first element, regardless of the cursor's position.
    fn iter(&self) -> Iter<'_, T> {
        self.raw().items().iter()
    }

    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.raw().items().to_vec()
    }
}

impl<T, C: Sealed<T>> Query<T> for C {}

/// Edits that don't need an element to anchor against, available in every state.
pub trait Seed<T: Clone>: Sealed<T> {
    /// Prepends `values`. The cursor stays on the same element; an empty list is seeded with
    /// `values` and the cursor placed on the first of them.
    fn insert_start<I: IntoIterator<Item = T>>(&self, values: I) -> Cursor<T> {
        Cursor::from_raw(self.raw().insert_start(values))
    }

    /// Appends `values`. The cursor stays on the same element; an empty list is seeded with
    /// `values` and the cursor placed on the first of them.
    fn insert_end<I: IntoIterator<Item = T>>(&self, values: I) -> Cursor<T> {
        Cursor::from_raw(self.raw().insert_end(values))
    }

    /// Discards every element, keeping only the configuration.
    fn clear(&self) -> Cursor<T> {
        Cursor::from_raw(self.raw().clear())
    }
}

impl<T: Clone, C: Sealed<T>> Seed<T> for C {}

pub trait Forward<T>: Sealed<T> {
    /// Moves to the following element, wrapping to the first one at the end of a circular list.
    fn next(&self) -> Cursor<T> {
        Cursor::from_raw(self.raw().next())
    }
}

pub trait Backward<T>: Sealed<T> {
    /// Moves to the preceding element, wrapping to the last one at the start of a circular list.
    fn previous(&self) -> Cursor<T> {
        Cursor::from_raw(self.raw().previous())
    }
}

pub trait Jump<T>: Sealed<T> {
    fn start(&self) -> Cursor<T> {
        Cursor::from_raw(self.raw().start())
    }

    fn end(&self) -> Cursor<T> {
        Cursor::from_raw(self.raw().end())
    }
}

/// Edits relative to the element under the cursor, available whenever the list isn't empty.
///
/// Operations that would reach past either end of the list (`remove_before` on the first element,
/// `shift_right` on the last, ...) return an unchanged cursor.
pub trait Edit<T: Clone>: Sealed<T> {
    /// Inserts `values` in front of the current element. The cursor stays on that element.
    fn insert_before<I: IntoIterator<Item = T>>(&self, values: I) -> Cursor<T> {
        Cursor::from_raw(self.raw().insert_before(values))
    }

    /// Inserts `values` behind the current element. The cursor stays on that element.
    fn insert_after<I: IntoIterator<Item = T>>(&self, values: I) -> Cursor<T> {
        Cursor::from_raw(self.raw().insert_after(values))
    }

    /// Removes the current element, moving onto the one that followed it, or onto the new last
    /// element if it was the last.
    fn remove_current(&self) -> Cursor<T> {
        Cursor::from_raw(self.raw().remove_current())
    }

    fn remove_before(&self) -> Cursor<T> {
        Cursor::from_raw(self.raw().remove_before())
    }

    fn remove_after(&self) -> Cursor<T> {
        Cursor::from_raw(self.raw().remove_after())
    }

    /// Swaps the current element with the one before it. The cursor follows the element.
    fn shift_left(&self) -> Cursor<T> {
        Cursor::from_raw(self.raw().shift_left())
    }

    /// Swaps the current element with the one after it. The cursor follows the element.
    fn shift_right(&self) -> Cursor<T> {
        Cursor::from_raw(self.raw().shift_right())
    }
}
