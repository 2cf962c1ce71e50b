//! Check command - poll the Graylog2 API and report the result

use crate::cli::Cli;
use crate::output;
use anyhow::{Context, Result};
use check_graylog_core::{
    BaseUrl, CheckConfig, CheckReport, ClientConfig, Credentials, Evaluator, GraylogClient,
    ServiceState, Thresholds,
};
use log::debug;

/// Run the check and print its single result line
///
/// # Returns
///
/// The reported state; the caller exits with its code
///
/// # Errors
///
/// Returns an error only if the result cannot be written to stdout.
/// Check failures are reported in the output, not as errors.
pub fn run(cli: &Cli, user: &str, pass: &str) -> Result<ServiceState> {
    let report = evaluate(cli, user, pass);
    output::print_report(&report).context("failed to write check result")?;
    Ok(report.state)
}

fn evaluate(cli: &Cli, user: &str, pass: &str) -> CheckReport {
    let client = match connect(cli, user, pass) {
        Ok(client) => client,
        Err(err) => return CheckReport::from_error(&err),
    };

    let config = check_config(cli);
    debug!("checking {} with {config:?}", client.base());
    Evaluator::new(config).run(&client)
}

fn connect(cli: &Cli, user: &str, pass: &str) -> check_graylog_core::Result<GraylogClient> {
    let base = BaseUrl::parse(&cli.link)?;
    let client = GraylogClient::new(ClientConfig {
        base,
        credentials: Credentials::new(user, pass),
        insecure: cli.insecure,
    })?;
    Ok(client)
}

fn check_config(cli: &Cli) -> CheckConfig {
    CheckConfig {
        thresholds: Thresholds {
            warning: cli.warning_threshold,
            critical: cli.critical_threshold,
        },
        expected_collectors: cli.expected_collectors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use check_graylog_core::PerfData;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(crate::cli::normalize_args(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_check_config_from_flags() {
        let cli = cli(&["check_graylog", "-wt", "3", "-ct", "6", "-ex", "10"]);
        assert_eq!(
            check_config(&cli),
            CheckConfig {
                thresholds: Thresholds {
                    warning: 3,
                    critical: 6,
                },
                expected_collectors: 10,
            }
        );
    }

    #[test]
    fn test_invalid_url_reports_unknown_without_network() {
        let cli = cli(&["check_graylog", "-l", "ftp://graylog:21"]);
        let report = evaluate(&cli, "admin", "secret");

        assert_eq!(report.state, ServiceState::Unknown);
        assert_eq!(report.message, "Only HTTP/S protocols are supported.");
        assert_eq!(report.perf, PerfData::default());
    }
}
