//! Sort runner: read, check, decide, and write when required.
//!
//! Flow for one invocation:
//! 1. Read the input fully and parse it.
//! 2. Check whether entries are already in key order.
//! 3. Ask the write policy whether (and where) to write.
//! 4. When writing, reorder, serialize, and write to the resolved target.
//!
//! The same `KeyComparer` drives both the check and the reorder.

use crate::check::is_sorted;
use crate::document::Document;
use crate::error::SortError;
use crate::io::{read_source, write_target};
use crate::order::{ordinal, KeyComparer};
use crate::policy::{decide, Decision, Target};
use crate::reorder::reorder;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Inputs for a single run.
#[derive(Debug, Clone)]
pub struct SortRequest {
    pub input_file: PathBuf,
    /// Distinct output path; `None` overwrites the input.
    pub output_file: Option<PathBuf>,
    pub force: bool,
    /// Compute the decision but never write.
    pub check: bool,
}

impl SortRequest {
    pub fn new(input_file: impl Into<PathBuf>) -> Self {
        SortRequest {
            input_file: input_file.into(),
            output_file: None,
            force: false,
            check: false,
        }
    }

    fn resolve(&self, target: Target) -> &Path {
        match (target, self.output_file.as_deref()) {
            (Target::Output, Some(out)) => out,
            _ => self.input_file.as_path(),
        }
    }
}

/// What a run found and did, for the caller to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutcome {
    pub input: PathBuf,
    pub entries: usize,
    pub already_sorted: bool,
    pub decision: Decision,
    /// Resolved path of the write target, when the policy chose to write.
    pub target: Option<PathBuf>,
    pub wrote: bool,
}

impl SortOutcome {
    pub fn would_write(&self) -> bool {
        self.decision.is_write()
    }
}

/// Run with ordinal key comparison.
pub fn run_sort(req: &SortRequest) -> Result<SortOutcome, SortError> {
    run_sort_with(req, ordinal)
}

/// Run with an explicit comparer shared by the check and the reorder.
pub fn run_sort_with(req: &SortRequest, cmp: KeyComparer) -> Result<SortOutcome, SortError> {
    let input = req.input_file.as_path();
    debug!(input = %input.display(), "reading input");
    let bytes = read_source(input)?;
    let doc = Document::parse(&bytes).map_err(|e| SortError::document(input, e))?;
    let entries = doc.entry_count();
    debug!(entries, "parsed document");

    let already_sorted = is_sorted(&doc, cmp).map_err(|e| SortError::document(input, e))?;
    if already_sorted {
        info!(input = %input.display(), entries, "entries already sorted");
    } else {
        info!(input = %input.display(), entries, "entries out of order");
    }

    let output_exists = req.output_file.as_deref().is_some_and(Path::exists);
    let decision = decide(
        already_sorted,
        req.force,
        req.output_file.is_some(),
        output_exists,
    );

    let target = match decision {
        Decision::Skip => {
            info!("skipping write");
            None
        }
        Decision::WriteTo { target, reason } => {
            let path = req.resolve(target).to_path_buf();
            info!(output = %path.display(), %reason, "write required");
            Some(path)
        }
    };

    let mut wrote = false;
    if let Some(path) = target.as_deref() {
        let sorted = reorder(doc, cmp).map_err(|e| SortError::document(input, e))?;
        let out = sorted.serialize();
        if req.check {
            debug!(bytes = out.len(), "check mode, not writing");
        } else {
            write_target(path, &out)?;
            wrote = true;
            debug!(output = %path.display(), bytes = out.len(), "wrote output");
        }
    }

    Ok(SortOutcome {
        input: req.input_file.clone(),
        entries,
        already_sorted,
        decision,
        target,
        wrote,
    })
}
