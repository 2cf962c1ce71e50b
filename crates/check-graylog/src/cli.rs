//! CLI argument structure using clap

use clap::Parser;
use std::ffi::OsString;

/// Default Graylog2 REST API address
pub const DEFAULT_URL: &str = "http://localhost:12900";

/// Environment variable enabling debug output (any non-empty value)
pub const DEBUG_ENV: &str = "NCG2";

/// Long flags that existing Nagios command definitions pass with one dash
const SINGLE_DASH_LONG_FLAGS: &[&str] = &["ex", "wt", "ct", "insecure", "version", "help"];

/// Short flags whose next argument is a value, never a flag
const VALUE_FLAGS: &[&str] = &["-l", "-u", "-p"];

#[derive(Parser, Debug)]
#[command(name = "check_graylog")]
#[command(about = "Nagios plugin checking the health of a Graylog2 cluster", long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Graylog2 API URL
    #[arg(short = 'l', value_name = "URL", default_value = DEFAULT_URL)]
    pub link: String,

    /// API username - REQUIRED
    #[arg(short = 'u', value_name = "USER", allow_hyphen_values = true)]
    pub user: Option<String>,

    /// API password - REQUIRED
    #[arg(short = 'p', value_name = "PASSWORD", allow_hyphen_values = true)]
    pub pass: Option<String>,

    /// Accept insecure SSL/TLS certificates
    #[arg(long)]
    pub insecure: bool,

    /// Display version and license information
    #[arg(long)]
    pub version: bool,

    /// Expected number of collectors (0 disables the check)
    #[arg(long = "ex", value_name = "COUNT", default_value_t = 0)]
    pub expected_collectors: u64,

    /// Collector warning threshold
    #[arg(long = "wt", value_name = "COUNT", default_value_t = 1)]
    pub warning_threshold: u64,

    /// Collector critical threshold
    #[arg(long = "ct", value_name = "COUNT", default_value_t = 2)]
    pub critical_threshold: u64,
}

impl Cli {
    /// Username and password, if both were given and non-empty
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let user = self.user.as_deref().filter(|s| !s.is_empty())?;
        let pass = self.pass.as_deref().filter(|s| !s.is_empty())?;
        Some((user, pass))
    }
}

/// Rewrites `-ex 3` style flags to `--ex 3` so clap accepts them
///
/// The value following `-l`, `-u` or `-p` is passed through untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut takes_value = false;

    for arg in args.into_iter().map(Into::into) {
        if takes_value {
            takes_value = false;
            normalized.push(arg);
            continue;
        }

        let rewritten = match arg.to_str() {
            Some(s) if VALUE_FLAGS.contains(&s) => {
                takes_value = true;
                None
            }
            Some(s) if is_single_dash_long(s) => Some(OsString::from(format!("-{s}"))),
            _ => None,
        };
        normalized.push(rewritten.unwrap_or(arg));
    }

    normalized
}

fn is_single_dash_long(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    SINGLE_DASH_LONG_FLAGS.contains(&name)
}
