use derive_more::{Display, Error, From, IsVariant, TryInto};

use crate::linked::cursor::{Kind, Operation};

/// The items handed to the factory could not be read as a sequence.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq, IsVariant)]
pub enum InvalidData {
    /// The input isn't a bracketed sequence at all.
    #[display("Items should be a sequence, found `{found}`!")]
    NotASequence {
        /// The whole input.
        found: String,
    },
    /// The input is a sequence, but one of its elements couldn't be parsed.
    #[display("Element {index} of the sequence (`{found}`) couldn't be parsed!")]
    Element {
        /// The position of the element within the sequence.
        index: usize,
        /// The element's text, trimmed.
        found: String,
    },
}

/// The requested link type is neither single nor double.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("Link type should be `single` or `double`, found `{found}`!")]
pub struct InvalidType {
    /// The text that was given as a link type.
    pub found: String,
}

/// Every way the factory can refuse its input.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, PartialEq, Eq)]
pub enum CreateError {
    /// See [`InvalidData`].
    InvalidData(InvalidData),
    /// See [`InvalidType`].
    InvalidType(InvalidType),
}

/// A gated operation was requested from a [`Cursor`](crate::Cursor) whose kind doesn't expose it.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("`{operation}` isn't available on this cursor ({kind})!")]
pub struct Unsupported {
    /// The operation that was requested.
    pub operation: Operation,
    /// The kind of the cursor it was requested from.
    pub kind: Kind,
}
