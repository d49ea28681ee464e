//! Reorder entries by key.
//!
//! Entries are stably sorted and re-appended as one contiguous block after
//! all other root content, just before the whitespace that precedes the root
//! end tag. Non-entry content keeps its relative order; each entry keeps its
//! own markup and indentation.

use crate::document::{Document, DocumentError};
use crate::key::extract_key;
use crate::order::KeyComparer;

/// Sort `doc`'s entries ascending under `cmp`, equal keys keeping their
/// original relative order.
///
/// All keys are extracted before the document is touched, so a failure
/// leaves nothing half-moved.
pub fn reorder(mut doc: Document, cmp: KeyComparer) -> Result<Document, DocumentError> {
    let keys = doc
        .entries()
        .map(|e| extract_key(e).map(str::to_owned))
        .collect::<Result<Vec<_>, _>>()?;
    let mut keyed: Vec<_> = keys.into_iter().zip(doc.take_entries()).collect();
    keyed.sort_by(|(a, _), (b, _)| cmp(a, b));
    doc.append_entries(keyed.into_iter().map(|(_, entry)| entry));
    Ok(doc)
}
