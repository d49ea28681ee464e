//! Key comparison shared by the sortedness check and the reorder pass.
//!
//! Both passes must agree on ordering, so callers pick one `KeyComparer` and
//! hand the same value to `check::is_sorted` and `reorder::reorder`.

use std::cmp::Ordering;

/// Total order over entry keys.
pub type KeyComparer = fn(&str, &str) -> Ordering;

/// Ordinal comparison: byte-wise, case-sensitive, locale-independent.
pub fn ordinal(a: &str, b: &str) -> Ordering {
    a.as_bytes().cmp(b.as_bytes())
}
