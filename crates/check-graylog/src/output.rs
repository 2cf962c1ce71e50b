use check_graylog_core::CheckReport;
use std::io::{self, Write};

/// Writes the single plugin result line to stdout
pub fn print_report(report: &CheckReport) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{report}")
}

pub fn print_text(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{s}")
}
