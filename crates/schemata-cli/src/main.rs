use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info, warn};

use schemata_cli::{Args, catalog, render_report};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    let args = Args::parse();

    if args.list {
        for name in catalog::names(args.category) {
            println!("{name}");
        }
        return;
    }

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting Schemata");
    debug!(args:?; "Parsed arguments");

    let report = match schemata_cli::run(&args) {
        Ok(report) => report,
        Err(err) => {
            error!(err:err; "Failed");
            eprintln!("{}", render_report(&err));
            process::exit(1);
        }
    };

    // Printed regardless of the log filter
    for failure in report.failed() {
        eprintln!("{}", failure.report());
    }

    if report.is_success() {
        info!(count = report.succeeded().len(); "All diagrams generated successfully");
        println!("{}", report.summary());
    } else {
        warn!(
            succeeded = report.succeeded().len(),
            failed = report.failed().len();
            "Some diagrams could not be generated"
        );
        eprintln!("{}", report.summary());
    }
}
