use derive_more::{From, TryInto};

use super::{
    BoundedEndCursor, BoundedStartCursor, EmptyCursor, FullCursor, Kind, Operation,
    SingleLinkCursor,
};
use crate::config::Config;
use crate::linked::contents::RawCursor;
use crate::traits::cursor::Query;
use crate::traits::cursor::sealed::Sealed;
use crate::util::error::Unsupported;
use crate::util::result::ResultExtension;

/// A persistent cursor over a list. Every move or edit leaves `self` untouched and returns a new
/// cursor, which may be of a different kind.
///
/// The variants carry the operations their state allows as traits, so matching on (or
/// [`TryInto`]-converting) a `Cursor` gives compile-time guarantees. The methods here dispatch at
/// runtime instead: each gated operation has a `try_` form returning [`Unsupported`] and a
/// panicking form. Queries and the always-available edits come from [`Query`] and
/// [`Seed`](crate::traits::Seed).
#[derive(Debug, PartialEq, Eq, From, TryInto)]
pub enum Cursor<T> {
    Empty(EmptyCursor<T>),
    SingleLink(SingleLinkCursor<T>),
    BoundedStart(BoundedStartCursor<T>),
    BoundedEnd(BoundedEndCursor<T>),
    Full(FullCursor<T>),
}

impl<T> Cursor<T> {
    pub(crate) fn from_raw(raw: RawCursor<T>) -> Cursor<T> {
        let kind = Kind::classify(&raw);
        tracing::trace!(%kind, index = ?raw.index(), size = raw.size(), "classified cursor");

        match kind {
            Kind::Empty => Cursor::Empty(EmptyCursor::wrap(raw)),
            Kind::SingleLink => Cursor::SingleLink(SingleLinkCursor::wrap(raw)),
            Kind::BoundedStart => Cursor::BoundedStart(BoundedStartCursor::wrap(raw)),
            Kind::BoundedEnd => Cursor::BoundedEnd(BoundedEndCursor::wrap(raw)),
            Kind::Full => Cursor::Full(FullCursor::wrap(raw)),
        }
    }

    pub fn supports(&self, operation: Operation) -> bool {
        self.capabilities().contains(operation.requires())
    }

    fn gate<F>(&self, operation: Operation, step: F) -> Result<Cursor<T>, Unsupported>
    where
        F: FnOnce(&RawCursor<T>) -> RawCursor<T>,
    {
        if self.supports(operation) {
            Ok(Cursor::from_raw(step(self.raw())))
        } else {
            Err(Unsupported {
                operation,
                kind: self.kind(),
            })
        }
    }

    pub fn try_next(&self) -> Result<Cursor<T>, Unsupported> {
        self.gate(Operation::Next, RawCursor::next)
    }

    /// # Panics
    /// Panics if the cursor can't move forwards: it's on the last element of a finite list.
    #[track_caller]
    pub fn next(&self) -> Cursor<T> {
        self.try_next().throw()
    }

    pub fn try_previous(&self) -> Result<Cursor<T>, Unsupported> {
        self.gate(Operation::Previous, RawCursor::previous)
    }

    /// # Panics
    /// Panics if the cursor can't move backwards: the list is singly linked, or the cursor is on
    /// the first element of a finite list.
    #[track_caller]
    pub fn previous(&self) -> Cursor<T> {
        self.try_previous().throw()
    }

    pub fn try_start(&self) -> Result<Cursor<T>, Unsupported> {
        self.gate(Operation::Start, RawCursor::start)
    }

    /// # Panics
    /// Panics if the list is singly linked and not empty.
    #[track_caller]
    pub fn start(&self) -> Cursor<T> {
        self.try_start().throw()
    }

    pub fn try_end(&self) -> Result<Cursor<T>, Unsupported> {
        self.gate(Operation::End, RawCursor::end)
    }

    /// # Panics
    /// Panics if the list is singly linked and not empty.
    #[track_caller]
    pub fn end(&self) -> Cursor<T> {
        self.try_end().throw()
    }
}

impl<T: Clone> Cursor<T> {
    pub fn try_insert_before<I>(&self, values: I) -> Result<Cursor<T>, Unsupported>
    where
        I: IntoIterator<Item = T>,
    {
        self.gate(Operation::InsertBefore, |raw| raw.insert_before(values))
    }

    /// # Panics
    /// Panics if the list is empty.
    #[track_caller]
    pub fn insert_before<I: IntoIterator<Item = T>>(&self, values: I) -> Cursor<T> {
        self.try_insert_before(values).throw()
    }

    pub fn try_insert_after<I>(&self, values: I) -> Result<Cursor<T>, Unsupported>
    where
        I: IntoIterator<Item = T>,
    {
        self.gate(Operation::InsertAfter, |raw| raw.insert_after(values))
    }

    /// # Panics
    /// Panics if the list is empty.
    #[track_caller]
    pub fn insert_after<I: IntoIterator<Item = T>>(&self, values: I) -> Cursor<T> {
        self.try_insert_after(values).throw()
    }

    pub fn try_remove_current(&self) -> Result<Cursor<T>, Unsupported> {
        self.gate(Operation::RemoveCurrent, RawCursor::remove_current)
    }

    /// # Panics
    /// Panics if the list is empty.
    #[track_caller]
    pub fn remove_current(&self) -> Cursor<T> {
        self.try_remove_current().throw()
    }

    pub fn try_remove_before(&self) -> Result<Cursor<T>, Unsupported> {
        self.gate(Operation::RemoveBefore, RawCursor::remove_before)
    }

    /// # Panics
    /// Panics if the list is empty.
    #[track_caller]
    pub fn remove_before(&self) -> Cursor<T> {
        self.try_remove_before().throw()
    }

    pub fn try_remove_after(&self) -> Result<Cursor<T>, Unsupported> {
        self.gate(Operation::RemoveAfter, RawCursor::remove_after)
    }

    /// # Panics
    /// Panics if the list is empty.
    #[track_caller]
    pub fn remove_after(&self) -> Cursor<T> {
        self.try_remove_after().throw()
    }

    pub fn try_shift_left(&self) -> Result<Cursor<T>, Unsupported> {
        self.gate(Operation::ShiftLeft, RawCursor::shift_left)
    }

    /// # Panics
    /// Panics if the list is empty.
    #[track_caller]
    pub fn shift_left(&self) -> Cursor<T> {
        self.try_shift_left().throw()
    }

    pub fn try_shift_right(&self) -> Result<Cursor<T>, Unsupported> {
        self.gate(Operation::ShiftRight, RawCursor::shift_right)
    }

    /// # Panics
    /// Panics if the list is empty.
    #[track_caller]
    pub fn shift_right(&self) -> Cursor<T> {
        self.try_shift_right().throw()
    }
}

impl<T> Sealed<T> for Cursor<T> {
    fn raw(&self) -> &RawCursor<T> {
        match self {
            Cursor::Empty(cursor) => cursor.raw(),
            Cursor::SingleLink(cursor) => cursor.raw(),
            Cursor::BoundedStart(cursor) => cursor.raw(),
            Cursor::BoundedEnd(cursor) => cursor.raw(),
            Cursor::Full(cursor) => cursor.raw(),
        }
    }

    fn fixed_kind(&self) -> Kind {
        match self {
            Cursor::Empty(_) => Kind::Empty,
            Cursor::SingleLink(_) => Kind::SingleLink,
            Cursor::BoundedStart(_) => Kind::BoundedStart,
            Cursor::BoundedEnd(_) => Kind::BoundedEnd,
            Cursor::Full(_) => Kind::Full,
        }
    }
}

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        Cursor::from_raw(self.raw().clone())
    }
}

impl<T> Default for Cursor<T> {
    fn default() -> Self {
        Cursor::Empty(EmptyCursor::wrap(RawCursor::empty(Config::default())))
    }
}

impl<T> FromIterator<T> for Cursor<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        crate::linked::create(iter, Config::default())
    }
}
