//! The value behind every cursor: a shared snapshot of the list, a position within it and the
//! configuration it was created with. Navigation reuses the snapshot, edits build a new one.

use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use derive_more::IsVariant;

use crate::config::Config;
use crate::linked::cursor::Datum;


pub struct RawCursor<T> {
    pub state: CursorState<T>,
    pub config: Config,
}

#[derive(IsVariant)]
pub enum CursorState<T> {
    Empty,
    Full(CursorContents<T>),
}

/// A non-empty snapshot. `items` is never empty and `pos` is always a valid index into it.
pub struct CursorContents<T> {
    pub items: Arc<[T]>,
    pub pos: usize,
}

use CursorState::*;

impl<T> CursorContents<T> {
    pub fn last_index(&self) -> usize {
        self.items.len() - 1
    }

    pub const fn is_start(&self) -> bool {
        self.pos == 0
    }

    pub fn is_end(&self) -> bool {
        self.pos == self.last_index()
    }

    pub fn datum(&self) -> &T {
        &self.items[self.pos]
    }

    pub fn before(&self) -> &[T] {
        &self.items[..self.pos]
    }

    pub fn after(&self) -> &[T] {
        &self.items[self.pos + 1..]
    }

    fn at(&self, pos: usize) -> CursorContents<T> {
        CursorContents {
            items: Arc::clone(&self.items),
            pos,
        }
    }
}

impl<T> RawCursor<T> {
    pub const fn empty(config: Config) -> RawCursor<T> {
        RawCursor {
            state: Empty,
            config,
        }
    }

    /// Wraps `items` as a new snapshot. An empty `items` produces the empty state, otherwise `pos`
    /// is clamped to the last element.
    pub fn from_vec(items: Vec<T>, pos: usize, config: Config) -> RawCursor<T> {
        if items.is_empty() {
            return RawCursor::empty(config);
        }

        let pos = pos.min(items.len() - 1);
        RawCursor {
            state: Full(CursorContents {
                items: items.into(),
                pos,
            }),
            config,
        }
    }

    fn moved(&self, contents: &CursorContents<T>, pos: usize) -> RawCursor<T> {
        RawCursor {
            state: Full(contents.at(pos)),
            config: self.config,
        }
    }

    pub fn data(&self) -> Datum<'_, T> {
        match &self.state {
            Empty => Datum::Empty,
            Full(contents) => Datum::Value(contents.datum()),
        }
    }

    pub fn size(&self) -> usize {
        match &self.state {
            Empty => 0,
            Full(contents) => contents.items.len(),
        }
    }

    pub const fn index(&self) -> Option<usize> {
        match &self.state {
            Empty => None,
            Full(contents) => Some(contents.pos),
        }
    }

    pub fn items(&self) -> &[T] {
        match &self.state {
            Empty => &[],
            Full(contents) => &contents.items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    // The empty state sits on its own marker, which is both the first and the last element.
    pub const fn is_start(&self) -> bool {
        match &self.state {
            Empty => true,
            Full(contents) => contents.is_start(),
        }
    }

    pub fn is_end(&self) -> bool {
        match &self.state {
            Empty => true,
            Full(contents) => contents.is_end(),
        }
    }

    pub fn next(&self) -> RawCursor<T> {
        match &self.state {
            Empty => self.clone(),
            Full(contents) if !contents.is_end() => self.moved(contents, contents.pos + 1),
            Full(_) if self.config.finite => self.clone(),
            Full(contents) => self.moved(contents, 0),
        }
    }

    pub fn previous(&self) -> RawCursor<T> {
        match &self.state {
            Empty => self.clone(),
            Full(contents) if !contents.is_start() => self.moved(contents, contents.pos - 1),
            Full(_) if self.config.finite => self.clone(),
            Full(contents) => self.moved(contents, contents.last_index()),
        }
    }

    pub fn start(&self) -> RawCursor<T> {
        match &self.state {
            Empty => self.clone(),
            Full(contents) => self.moved(contents, 0),
        }
    }

    pub fn end(&self) -> RawCursor<T> {
        match &self.state {
            Empty => self.clone(),
            Full(contents) => self.moved(contents, contents.last_index()),
        }
    }

    pub const fn clear(&self) -> RawCursor<T> {
        RawCursor::empty(self.config)
    }
}

impl<T: Clone> RawCursor<T> {
    fn rebuilt(&self, items: Vec<T>, pos: usize) -> RawCursor<T> {
        RawCursor::from_vec(items, pos, self.config)
    }

    pub fn insert_start<I: IntoIterator<Item = T>>(&self, values: I) -> RawCursor<T> {
        let mut values: Vec<T> = values.into_iter().collect();
        if values.is_empty() {
            return self.clone();
        }

        match &self.state {
            Empty => self.rebuilt(values, 0),
            Full(contents) => {
                let added = values.len();
                values.extend_from_slice(&contents.items);
                self.rebuilt(values, contents.pos + added)
            },
        }
    }

    pub fn insert_end<I: IntoIterator<Item = T>>(&self, values: I) -> RawCursor<T> {
        let values: Vec<T> = values.into_iter().collect();
        if values.is_empty() {
            return self.clone();
        }

        match &self.state {
            Empty => self.rebuilt(values, 0),
            Full(contents) => {
                let mut items = Vec::with_capacity(contents.items.len() + values.len());
                items.extend_from_slice(&contents.items);
                items.extend(values);
                self.rebuilt(items, contents.pos)
            },
        }
    }

    pub fn insert_before<I: IntoIterator<Item = T>>(&self, values: I) -> RawCursor<T> {
        match &self.state {
            Empty => self.clone(),
            Full(contents) => {
                let values: Vec<T> = values.into_iter().collect();
                let added = values.len();

                let mut items = Vec::with_capacity(contents.items.len() + added);
                items.extend_from_slice(contents.before());
                items.extend(values);
                items.push(contents.datum().clone());
                items.extend_from_slice(contents.after());
                self.rebuilt(items, contents.pos + added)
            },
        }
    }

    pub fn insert_after<I: IntoIterator<Item = T>>(&self, values: I) -> RawCursor<T> {
        match &self.state {
            Empty => self.clone(),
            Full(contents) => {
                let values: Vec<T> = values.into_iter().collect();

                let mut items = Vec::with_capacity(contents.items.len() + values.len());
                items.extend_from_slice(contents.before());
                items.push(contents.datum().clone());
                items.extend(values);
                items.extend_from_slice(contents.after());
                self.rebuilt(items, contents.pos)
            },
        }
    }

    /// Drops the current element. The cursor lands on the element that followed it, or on the
    /// new last element if there was none.
    pub fn remove_current(&self) -> RawCursor<T> {
        match &self.state {
            Empty => self.clone(),
            Full(contents) => {
                let mut items = Vec::with_capacity(contents.last_index());
                items.extend_from_slice(contents.before());
                items.extend_from_slice(contents.after());
                self.rebuilt(items, contents.pos)
            },
        }
    }

    pub fn remove_before(&self) -> RawCursor<T> {
        match &self.state {
            Full(contents) if !contents.is_start() => {
                let mut items = contents.items.to_vec();
                items.remove(contents.pos - 1);
                self.rebuilt(items, contents.pos - 1)
            },
            _ => self.clone(),
        }
    }

    pub fn remove_after(&self) -> RawCursor<T> {
        match &self.state {
            Full(contents) if !contents.is_end() => {
                let mut items = contents.items.to_vec();
                items.remove(contents.pos + 1);
                self.rebuilt(items, contents.pos)
            },
            _ => self.clone(),
        }
    }

    /// Swaps the current element with its predecessor. The cursor follows the moved element.
    pub fn shift_left(&self) -> RawCursor<T> {
        match &self.state {
            Full(contents) if !contents.is_start() => {
                let mut items = contents.items.to_vec();
                items.swap(contents.pos - 1, contents.pos);
                self.rebuilt(items, contents.pos - 1)
            },
            _ => self.clone(),
        }
    }

    /// Swaps the current element with its successor. The cursor follows the moved element.
    pub fn shift_right(&self) -> RawCursor<T> {
        match &self.state {
            Full(contents) if !contents.is_end() => {
                let mut items = contents.items.to_vec();
                items.swap(contents.pos, contents.pos + 1);
                self.rebuilt(items, contents.pos + 1)
            },
            _ => self.clone(),
        }
    }
}

impl<T> Clone for RawCursor<T> {
    fn clone(&self) -> Self {
        let state = match &self.state {
            Empty => Empty,
            Full(contents) => Full(contents.at(contents.pos)),
        };
        RawCursor {
            state,
            config: self.config,
        }
    }
}

impl<T: PartialEq> PartialEq for RawCursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
            && self.index() == other.index()
            && self.items() == other.items()
    }
}

impl<T: Eq> Eq for RawCursor<T> {}

impl<T: Debug> Debug for RawCursor<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawCursor")
            .field("items", &self.items())
            .field("index", &self.index())
            .field("config", &self.config)
            .finish()
    }
}
