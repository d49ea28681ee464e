//! resxsort core library.
//!
//! This crate exposes programmatic APIs for sorting the `data` entries of
//! `.resx` resource documents by key, rewriting files only when needed.
//!
//! High-level modules:
//! - `document`: Byte-preserving document model (parse/serialize).
//! - `key`: Key extraction from entries.
//! - `order`: Shared key comparison.
//! - `check`: Sortedness scan.
//! - `reorder`: Stable reordering of entries.
//! - `policy`: Write-or-skip decision.
//! - `io`: Source reads and target writes.
//! - `sort`: The end-to-end runner.
//! - `cli`, `config`, `output`, `logging`, `utils`: Binary plumbing.
pub mod check;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod io;
pub mod key;
pub mod logging;
pub mod order;
pub mod output;
pub mod policy;
pub mod reorder;
pub mod sort;
pub mod utils;

pub use crate::{
    document::{Document, DocumentError, Entry},
    error::SortError,
    policy::{Decision, Target, WriteReason},
    sort::{run_sort, run_sort_with, SortOutcome, SortRequest},
};
