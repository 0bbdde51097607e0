use bitflags::bitflags;
use derive_more::{Display, IsVariant};

use crate::linked::contents::{CursorState, RawCursor};

/// The state a cursor is in, which decides the operations it exposes.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Kind {
    /// The list holds no elements. Navigation is allowed but there is nothing to edit relative to.
    #[display("empty")]
    Empty,
    /// A singly linked list, which can only move forwards.
    #[display("singly linked")]
    SingleLink,
    /// A finite list positioned on its first element.
    #[display("bounded start")]
    BoundedStart,
    /// A finite list positioned on its last element.
    #[display("bounded end")]
    BoundedEnd,
    /// Everything is available.
    #[display("full")]
    Full,
}

impl Kind {
    /// Classifies a cursor. The rules are checked in order and the first that matches wins, so an
    /// empty singly linked list is [`Kind::Empty`], and a finite list with a single element is
    /// [`Kind::BoundedStart`].
    pub(crate) fn classify<T>(raw: &RawCursor<T>) -> Kind {
        match &raw.state {
            CursorState::Empty => Kind::Empty,
            CursorState::Full(_) if raw.config.link_type.is_single() => Kind::SingleLink,
            CursorState::Full(contents) if raw.config.finite && contents.is_start() => {
                Kind::BoundedStart
            },
            CursorState::Full(contents) if raw.config.finite && contents.is_end() => {
                Kind::BoundedEnd
            },
            CursorState::Full(_) => Kind::Full,
        }
    }

    pub const fn capabilities(self) -> Capabilities {
        match self {
            Kind::Empty => Capabilities::NAVIGATION,
            Kind::SingleLink => Capabilities::ALL
                .difference(Capabilities::PREVIOUS)
                .difference(Capabilities::JUMP),
            Kind::BoundedStart => Capabilities::ALL.difference(Capabilities::PREVIOUS),
            Kind::BoundedEnd => Capabilities::ALL.difference(Capabilities::NEXT),
            Kind::Full => Capabilities::ALL,
        }
    }
}

bitflags! {
    /// A set of gated operations. Queries, `clear`, `insert_start` and `insert_end` are always
    /// available and so aren't represented here.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        const PREVIOUS = 1 << 0;
        const NEXT = 1 << 1;
        /// Both `start` and `end`.
        const JUMP = 1 << 2;
        /// `remove_current`, `remove_before` and `remove_after`.
        const REMOVE = 1 << 3;
        /// `insert_before` and `insert_after`.
        const RELATIVE_INSERT = 1 << 4;
        /// `shift_left` and `shift_right`.
        const SHIFT = 1 << 5;

        const NAVIGATION = Self::PREVIOUS.bits() | Self::NEXT.bits() | Self::JUMP.bits();
        const ALL = Self::NAVIGATION.bits()
            | Self::REMOVE.bits()
            | Self::RELATIVE_INSERT.bits()
            | Self::SHIFT.bits();
    }
}

/// An operation that only some kinds of cursor expose.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    #[display("next")]
    Next,
    #[display("previous")]
    Previous,
    #[display("start")]
    Start,
    #[display("end")]
    End,
    #[display("insert_before")]
    InsertBefore,
    #[display("insert_after")]
    InsertAfter,
    #[display("remove_current")]
    RemoveCurrent,
    #[display("remove_before")]
    RemoveBefore,
    #[display("remove_after")]
    RemoveAfter,
    #[display("shift_left")]
    ShiftLeft,
    #[display("shift_right")]
    ShiftRight,
}

impl Operation {
    pub const fn requires(self) -> Capabilities {
        match self {
            Operation::Next => Capabilities::NEXT,
            Operation::Previous => Capabilities::PREVIOUS,
            Operation::Start | Operation::End => Capabilities::JUMP,
            Operation::InsertBefore | Operation::InsertAfter => Capabilities::RELATIVE_INSERT,
            Operation::RemoveCurrent | Operation::RemoveBefore | Operation::RemoveAfter => {
                Capabilities::REMOVE
            },
            Operation::ShiftLeft | Operation::ShiftRight => Capabilities::SHIFT,
        }
    }
}

