use derive_more::IsVariant;

/// The element under a [`Cursor`](super::Cursor).
#[derive(Debug, PartialEq, Eq, Hash, IsVariant)]
pub enum Datum<'a, T> {
    /// The cursor holds an empty list and therefore sits on the empty marker.
    Empty,
    /// The cursor is pointing to an element of the list, containing the borrowed value.
    Value(&'a T),
}

impl<'a, T> Datum<'a, T> {
    pub fn value(self) -> Option<&'a T> {
        match self {
            Datum::Empty => None,
            Datum::Value(value) => Some(value),
        }
    }
}

impl<T> Clone for Datum<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Datum<'_, T> {}

impl<'a, T> From<Datum<'a, T>> for Option<&'a T> {
    fn from(datum: Datum<'a, T>) -> Self {
        datum.value()
    }
}
