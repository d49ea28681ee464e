//! Configuration discovery and effective settings resolution.
//!
//! resxsort reads `resxsort.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config.
//! Discovery starts from the absolute form of `--repo-root` (default: the
//! current directory), so relative starts still walk up to ancestors.
//! Defaults:
//! - `report`: `human` (one of `human|json`)
//! - `sort.force|verbose|check`: false
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_TOML: &str = "resxsort.toml";
const CONFIG_YAML: [&str; 2] = ["resxsort.yaml", "resxsort.yml"];
/// Accepted values for `report`.
pub const REPORT_MODES: [&str; 2] = ["human", "json"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid {}: {message}", path.display())]
    Invalid { path: PathBuf, message: String },
    #[error("invalid report mode `{0}` (expected human|json)")]
    Report(String),
}

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
/// Sorting-related configuration section under `[sort]`.
pub struct SortCfg {
    pub force: Option<bool>,
    pub verbose: Option<bool>,
    pub check: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
/// Root configuration loaded from `resxsort.toml|yaml`.
pub struct ResxSortConfig {
    pub report: Option<String>,
    pub sort: Option<SortCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by the binary after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub report: String,
    pub force: bool,
    pub verbose: bool,
    pub check: bool,
    /// Whether a `resxsort.toml|yaml|yml` was found at `repo_root`.
    pub config_found: bool,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `resxsort.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    // `"."` has no parent to walk to; anchor relative starts at the cwd
    let start = std::path::absolute(start).unwrap_or_else(|_| start.to_path_buf());
    let mut cur = start.as_path();
    loop {
        if cur.join(CONFIG_TOML).exists() || CONFIG_YAML.iter().any(|y| cur.join(y).exists()) {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start,
        }
    }
}

/// Load `ResxSortConfig` from `resxsort.toml` or `resxsort.yaml|yml` if present.
pub fn load_config(root: &Path) -> Result<Option<ResxSortConfig>, ConfigError> {
    let toml_path = root.join(CONFIG_TOML);
    if toml_path.exists() {
        let s = read(&toml_path)?;
        let cfg = toml::from_str(&s).map_err(|e| ConfigError::Invalid {
            path: toml_path.clone(),
            message: e.message().to_string(),
        })?;
        return Ok(Some(cfg));
    }
    for yml in CONFIG_YAML {
        let p = root.join(yml);
        if p.exists() {
            let s = read(&p)?;
            let cfg = serde_yaml::from_str(&s).map_err(|e| ConfigError::Invalid {
                path: p.clone(),
                message: e.to_string(),
            })?;
            return Ok(Some(cfg));
        }
    }
    Ok(None)
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_report: Option<&str>,
    cli_force: Option<bool>,
    cli_verbose: Option<bool>,
    cli_check: Option<bool>,
) -> Result<Effective, ConfigError> {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let loaded = load_config(&repo_root)?;
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();
    let sort = cfg.sort.unwrap_or_default();

    let report = cli_report
        .map(|s| s.to_string())
        .or(cfg.report)
        .unwrap_or_else(|| "human".to_string());
    if !REPORT_MODES.contains(&report.as_str()) {
        return Err(ConfigError::Report(report));
    }

    Ok(Effective {
        repo_root,
        report,
        force: cli_force.or(sort.force).unwrap_or(false),
        verbose: cli_verbose.or(sort.verbose).unwrap_or(false),
        check: cli_check.or(sort.check).unwrap_or(false),
        config_found,
    })
}
