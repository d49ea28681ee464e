//! Key extraction for resource entries.

use crate::document::{DocumentError, Entry};

/// Return the entry's key: the value of its single `name` attribute.
///
/// Attributes are matched by local name, so `name` and `x:name` both count.
/// Zero matches is `MissingKey`; more than one is `AmbiguousKey` rather than
/// an arbitrary pick.
pub fn extract_key(entry: &Entry) -> Result<&str, DocumentError> {
    let pos = entry.position();
    match entry.key_candidates() {
        [key] => Ok(key.as_str()),
        [] => Err(DocumentError::MissingKey {
            line: pos.line,
            column: pos.column,
        }),
        many => Err(DocumentError::AmbiguousKey {
            line: pos.line,
            column: pos.column,
            count: many.len(),
        }),
    }
}
