//! Sortedness check over a parsed document.

use crate::document::{Document, DocumentError};
use crate::key::extract_key;
use crate::order::KeyComparer;
use std::cmp::Ordering;

/// Whether entry keys are non-decreasing under `cmp`, in document order.
///
/// Stops at the first out-of-order pair. A key extraction failure on any
/// scanned entry is returned as an error since ordering is then undecidable.
pub fn is_sorted(doc: &Document, cmp: KeyComparer) -> Result<bool, DocumentError> {
    let mut previous: Option<&str> = None;
    for entry in doc.entries() {
        let key = extract_key(entry)?;
        if previous.is_some_and(|prev| cmp(prev, key) == Ordering::Greater) {
            return Ok(false);
        }
        previous = Some(key);
    }
    Ok(true)
}
