//! Version command - identification and license text

use crate::output;
use anyhow::Result;

const AUTHOR: &str = "Robin Bourne, forked from Antonino Catinello work";
const LICENSE: &str = "BSD";
const YEAR: &str = "2016";
const COPYRIGHT: &str = "\u{00A9}";

pub fn version_text() -> String {
    format!(
        "Version: {} License: {} {} {} {}",
        env!("CARGO_PKG_VERSION"),
        LICENSE,
        COPYRIGHT,
        YEAR,
        AUTHOR
    )
}

/// Print version and license information
pub fn run() -> Result<()> {
    output::print_text(&version_text())?;
    Ok(())
}
