mod cli;
mod commands;
mod output;

use check_graylog_core::ServiceState;
use clap::{CommandFactory, Parser};
use cli::{Cli, DEBUG_ENV};
use log::LevelFilter;

fn main() {
    let cli = match Cli::try_parse_from(cli::normalize_args(std::env::args_os())) {
        Ok(cli) => cli,
        Err(e) => {
            // Usage problems are UNKNOWN to the monitoring system, help included
            let _ = e.print();
            std::process::exit(ServiceState::Unknown.exit_code());
        }
    };

    init_logging();

    let result = if cli.version {
        commands::version::run().map(|()| ServiceState::Unknown)
    } else {
        match cli.credentials() {
            Some((user, pass)) => commands::check::run(&cli, user, pass),
            None => Cli::command()
                .print_help()
                .map(|()| ServiceState::Unknown)
                .map_err(Into::into),
        }
    };

    match result {
        Ok(state) => std::process::exit(state.exit_code()),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(ServiceState::Unknown.exit_code());
        }
    }
}

/// Debug output goes to stderr, only when `NCG2` is set and non-empty
///
/// `RUST_LOG` is ignored. Only this workspace's own crates log; HTTP and TLS
/// library output stays off.
fn init_logging() {
    let debug = std::env::var_os(DEBUG_ENV).is_some_and(|v| !v.is_empty());
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Off
    };

    env_logger::Builder::new()
        .filter_level(LevelFilter::Off)
        .filter_module("check_graylog", level)
        .filter_module("check_graylog_core", level)
        .init();
}
