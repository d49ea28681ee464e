//! CLI argument parsing via `clap`.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "resxsort",
    version,
    about = "Sorts data elements in a resx file",
    long_about = "resxsort — reorder <data> entries of a .resx resource file by their name attribute (ordinal, case-sensitive).\n\nAlready-sorted files are left untouched unless --force is given.\nConfiguration precedence: CLI > resxsort.toml > defaults.",
    after_help = "Examples:\n  resxsort -i Resources.resx\n  resxsort -i Resources.resx -o obj/Resources.sorted.resx\n  resxsort -i Resources.resx --check --report json",
    arg_required_else_help = true
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(short = 'i', long, value_parser = existing_file, help = "The input resx file")]
    pub input_file: PathBuf,
    #[arg(short = 'o', long, help = "The output file (default: overwrite the input)")]
    pub output_file: Option<PathBuf>,
    #[arg(short = 'f', long, action = clap::ArgAction::SetTrue, help = "Always write, even when already sorted")]
    pub force: bool,
    #[arg(short = 'v', long, action = clap::ArgAction::SetTrue, help = "Log sort decisions to stderr")]
    pub verbose: bool,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Exit non-zero if a write would occur (never writes)")]
    pub check: bool,
    #[arg(long, value_parser = ["human", "json"], help = "Report mode: human|json (default: human)")]
    pub report: Option<String>,
    #[arg(long, help = "Repository root for resxsort.toml discovery (default: current dir)")]
    pub repo_root: Option<String>,
}

fn existing_file(s: &str) -> Result<PathBuf, String> {
    let p = PathBuf::from(s);
    if p.is_file() {
        Ok(p)
    } else {
        Err(format!("File does not exist: '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parses_short_flags() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("Resources.resx");
        std::fs::write(&input, "<root/>").unwrap();
        let cli = Cli::try_parse_from([
            "resxsort",
            "-i",
            input.to_str().unwrap(),
            "-o",
            "out.resx",
            "-f",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.input_file, input);
        assert_eq!(cli.output_file, Some(PathBuf::from("out.resx")));
        assert!(cli.force && cli.verbose && !cli.check);
    }

    #[test]
    fn test_rejects_missing_input() {
        let err = Cli::try_parse_from(["resxsort", "-i", "/definitely/not/here.resx"]).unwrap_err();
        assert!(err.to_string().contains("File does not exist"));
    }

    #[test]
    fn test_rejects_unknown_report_mode() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("Resources.resx");
        std::fs::write(&input, "<root/>").unwrap();
        let path = input.to_str().unwrap();
        assert!(Cli::try_parse_from(["resxsort", "-i", path, "--report", "jsno"]).is_err());
        let cli = Cli::try_parse_from(["resxsort", "-i", path, "--report", "json"]).unwrap();
        assert_eq!(cli.report.as_deref(), Some("json"));
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["resxsort", "--force"]).is_err());
    }
}
