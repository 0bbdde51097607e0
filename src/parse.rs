//! Reading list contents from text.

use std::str::FromStr;

use crate::util::error::InvalidData;

/// Parses a bracketed, comma-separated sequence such as `[1, 2, 3]`. Surrounding whitespace is
/// ignored, `[]` is the empty sequence. Elements are split on every comma, so they can't contain
/// commas themselves.
pub fn parse_items<T: FromStr>(src: &str) -> Result<Vec<T>, InvalidData> {
    let inner = src
        .trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| InvalidData::NotASequence {
            found: src.to_owned(),
        })?;

    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(',')
        .map(str::trim)
        .enumerate()
        .map(|(index, element)| {
            element.parse().map_err(|_| InvalidData::Element {
                index,
                found: element.to_owned(),
            })
        })
        .collect()
}
