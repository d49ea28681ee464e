//! resxsort CLI binary entry point.
//! Resolves configuration, runs the sorter, and prints the outcome.

use clap::Parser;
use resxsort::cli::Cli;
use resxsort::{config, logging, output, utils};
use resxsort::{run_sort, SortRequest};

fn main() {
    let cli = Cli::parse();
    let eff = match config::resolve_effective(
        cli.repo_root.as_deref(),
        cli.report.as_deref(),
        if cli.force { Some(true) } else { None },
        if cli.verbose { Some(true) } else { None },
        if cli.check { Some(true) } else { None },
    ) {
        Ok(eff) => eff,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            std::process::exit(2);
        }
    };
    logging::init(eff.verbose);
    if eff.verbose && !eff.config_found {
        eprintln!(
            "{} {}",
            utils::note_prefix(),
            "No resxsort.toml found; using defaults."
        );
    }

    let req = SortRequest {
        input_file: cli.input_file,
        output_file: cli.output_file,
        force: eff.force,
        check: eff.check,
    };
    match run_sort(&req) {
        Ok(outcome) => {
            output::print_outcome(&outcome, &eff.report);
            // In check mode, exit non-zero when a write would have happened
            if eff.check && outcome.would_write() {
                std::process::exit(1);
            }
        }
        Err(err) => {
            output::print_error(&err, &eff.report);
            std::process::exit(2);
        }
    }
}
