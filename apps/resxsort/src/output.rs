//! Output rendering for sort outcomes and failures.
//!
//! Supports `human` (default) and `json` reports. The JSON form carries the
//! decision fields so callers can script around them.

use crate::error::SortError;
use crate::policy::Decision;
use crate::sort::SortOutcome;
use crate::utils::{error_prefix, info_prefix, use_colors};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

/// Print a run outcome in the requested report mode.
pub fn print_outcome(outcome: &SortOutcome, report: &str) {
    match report {
        "json" => println!("{:#}", compose_outcome_json(outcome)),
        _ => {
            let color = use_colors(report);
            let input = outcome.input.display().to_string();
            let target = outcome
                .target
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            if outcome.wrote {
                if color {
                    println!("{} {} -> {}", "sorted:".green().bold(), input.bold(), target);
                } else {
                    println!("sorted: {} -> {}", input, target);
                }
            } else if outcome.would_write() {
                println!("{} would sort: {} -> {}", info_prefix(), input, target);
            } else if color {
                println!("{} {}", "no changes:".bright_black(), input);
            } else {
                println!("no changes: {}", input);
            }
        }
    }
}

/// Print a failure to stderr (human) or stdout (json).
pub fn print_error(err: &SortError, report: &str) {
    match report {
        "json" => println!("{:#}", compose_error_json(err)),
        _ => eprintln!("{} {}", error_prefix(), err),
    }
}

/// Compose outcome JSON object (pure) for testing purposes.
pub fn compose_outcome_json(outcome: &SortOutcome) -> JsonVal {
    let (decision, reason) = match outcome.decision {
        Decision::Skip => ("skip", None),
        Decision::WriteTo { reason, .. } => ("write", Some(reason.as_str())),
    };
    json!({
        "input": outcome.input.display().to_string(),
        "entries": outcome.entries,
        "alreadySorted": outcome.already_sorted,
        "decision": decision,
        "reason": reason,
        "target": outcome.target.as_ref().map(|p| p.display().to_string()),
        "wrote": outcome.wrote,
    })
}

/// Compose error JSON object (pure) for testing purposes.
pub fn compose_error_json(err: &SortError) -> JsonVal {
    json!({
        "error": {
            "kind": err.kind(),
            "message": err.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{Target, WriteReason};
    use std::path::PathBuf;

    #[test]
    fn test_compose_outcome_json_write_and_skip() {
        let written = SortOutcome {
            input: PathBuf::from("a.resx"),
            entries: 3,
            already_sorted: false,
            decision: Decision::WriteTo {
                target: Target::Source,
                reason: WriteReason::Unsorted,
            },
            target: Some(PathBuf::from("a.resx")),
            wrote: true,
        };
        let out = compose_outcome_json(&written);
        assert_eq!(out["decision"], "write");
        assert_eq!(out["reason"], "unsorted");
        assert_eq!(out["target"], "a.resx");
        assert_eq!(out["wrote"], true);

        let skipped = SortOutcome {
            decision: Decision::Skip,
            target: None,
            wrote: false,
            already_sorted: true,
            ..written
        };
        let out = compose_outcome_json(&skipped);
        assert_eq!(out["decision"], "skip");
        assert!(out["reason"].is_null());
        assert!(out["target"].is_null());
        assert_eq!(out["alreadySorted"], true);
    }

    #[test]
    fn test_compose_error_json_shape() {
        let err = SortError::MissingKeyAttribute {
            path: PathBuf::from("s.resx"),
            line: 2,
            column: 3,
        };
        let out = compose_error_json(&err);
        assert_eq!(out["error"]["kind"], "missing_key_attribute");
        assert_eq!(
            out["error"]["message"],
            "s.resx:2:3: data entry has no `name` attribute"
        );
    }
}
