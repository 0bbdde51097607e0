#[cfg(feature = "parse")]
use std::str::FromStr;

use crate::config::Config;
use crate::linked::contents::RawCursor;
use crate::linked::cursor::Cursor;
#[cfg(feature = "parse")]
use crate::util::error::CreateError;
#[cfg(feature = "parse")]
use crate::util::result::ResultExtension;


/// Creates a cursor on the first element of `items`. Without any items, the cursor sits on the
/// empty marker instead.
///
/// ```
/// use hylian::prelude::*;
/// use hylian::{Config, Datum, create};
///
/// let cursor = create([1, 2, 3, 4, 5], Config::default());
/// assert_eq!(cursor.data(), Datum::Value(&1));
/// assert_eq!(cursor.end().next().data(), Datum::Value(&1));
///
/// let finite = create([1, 2, 3, 4, 5], Config::new().finite(true)).end();
/// assert!(finite.try_next().is_err());
/// ```
pub fn create<T, I: IntoIterator<Item = T>>(items: I, config: Config) -> Cursor<T> {
    let items: Vec<T> = items.into_iter().collect();
    if items.is_empty() {
        tracing::debug!(?config, "no items given, creating an empty cursor");
    }

    Cursor::from_raw(RawCursor::from_vec(items, 0, config))
}

/// Creates a cursor from textual input, such as `"[1, 2, 3]"` and `"single"`. See
/// [`parse_items`](crate::parse::parse_items) for the accepted item syntax.
#[cfg(feature = "parse")]
pub fn try_create_parsed<T: FromStr>(
    items: &str,
    link_type: &str,
    finite: bool,
) -> Result<Cursor<T>, CreateError> {
    let items: Vec<T> = crate::parse::parse_items(items).traced()?;
    let config = Config::parse(link_type, finite).traced()?;
    Ok(create(items, config))
}

/// Like [`try_create_parsed`], for input which is known to be well-formed.
///
/// # Panics
/// Panics if `items` isn't a valid sequence or `link_type` isn't a known link type.
#[cfg(feature = "parse")]
#[track_caller]
pub fn create_parsed<T: FromStr>(items: &str, link_type: &str, finite: bool) -> Cursor<T> {
    try_create_parsed(items, link_type, finite).throw()
}
