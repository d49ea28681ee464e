//! Write policy: whether a run writes at all, and where.
//!
//! A source that is already sorted is never rewritten unless forced, even if
//! a parse/serialize round trip would change nothing.

use std::fmt;

/// Where output goes when a write happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Overwrite the input file.
    Source,
    /// Write to the distinct `--output-file` path.
    Output,
}

/// Why a write was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteReason {
    Forced,
    Unsorted,
    OutputMissing,
}

impl WriteReason {
    pub fn as_str(self) -> &'static str {
        match self {
            WriteReason::Forced => "forced",
            WriteReason::Unsorted => "unsorted",
            WriteReason::OutputMissing => "output_missing",
        }
    }
}

impl fmt::Display for WriteReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Skip,
    WriteTo { target: Target, reason: WriteReason },
}

impl Decision {
    pub fn is_write(&self) -> bool {
        matches!(self, Decision::WriteTo { .. })
    }
}

/// Decide whether to write. Rules are evaluated in order:
/// 1. `force` always writes.
/// 2. An unsorted document is written.
/// 3. A sorted document is still copied to a distinct output that does not
///    exist yet.
/// 4. Otherwise nothing is written.
pub fn decide(is_sorted: bool, force: bool, output_specified: bool, output_exists: bool) -> Decision {
    let target = if output_specified {
        Target::Output
    } else {
        Target::Source
    };
    let reason = if force {
        WriteReason::Forced
    } else if !is_sorted {
        WriteReason::Unsorted
    } else if output_specified && !output_exists {
        WriteReason::OutputMissing
    } else {
        return Decision::Skip;
    };
    Decision::WriteTo { target, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_source_without_output_is_skipped() {
        assert_eq!(decide(true, false, false, false), Decision::Skip);
    }

    #[test]
    fn test_sorted_with_existing_output_is_skipped() {
        assert_eq!(decide(true, false, true, true), Decision::Skip);
    }

    #[test]
    fn test_unsorted_writes_to_source_or_output() {
        assert_eq!(
            decide(false, false, false, false),
            Decision::WriteTo {
                target: Target::Source,
                reason: WriteReason::Unsorted
            }
        );
        assert_eq!(
            decide(false, false, true, true),
            Decision::WriteTo {
                target: Target::Output,
                reason: WriteReason::Unsorted
            }
        );
    }

    #[test]
    fn test_force_always_writes() {
        for (sorted, out, exists) in [(true, false, false), (true, true, true), (false, true, false)] {
            let d = decide(sorted, true, out, exists);
            assert!(matches!(
                d,
                Decision::WriteTo {
                    reason: WriteReason::Forced,
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_sorted_with_missing_output_copies() {
        assert_eq!(
            decide(true, false, true, false),
            Decision::WriteTo {
                target: Target::Output,
                reason: WriteReason::OutputMissing
            }
        );
    }
}
