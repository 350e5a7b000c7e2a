//! Diagnostic reporting for battery verdicts.
//!
//! Operator-visible output (warning lines, verdict text or JSON) goes to a
//! caller-provided writer. Structured events go to `tracing`.

use std::io::{self, Write};

use bms_common::config::OutputFormat;
use tracing::{debug, error, warn};

use crate::battery::Verdict;

/// Write one line per warning, in discovery order.
pub fn write_warnings<W: Write>(verdict: &Verdict, out: &mut W) -> io::Result<()> {
    for warning in &verdict.warnings {
        writeln!(out, "{}", warning.message)?;
    }
    Ok(())
}

/// Write the verdict itself.
///
/// Text output is the verdict message on one line. JSON output is the full
/// verdict, warnings included, on one line.
pub fn write_verdict<W: Write>(
    verdict: &Verdict,
    format: OutputFormat,
    out: &mut W,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", verdict.message),
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, verdict)?;
            writeln!(out)
        }
    }
}

/// Emit structured log events for a verdict.
pub fn trace_verdict(verdict: &Verdict) {
    for warning in &verdict.warnings {
        warn!(
            parameter = %warning.parameter,
            edge = ?warning.edge,
            "{}",
            warning.message
        );
    }

    match verdict.failed {
        Some(parameter) => error!(parameter = %parameter, "{}", verdict.message),
        None => debug!(warnings = verdict.warnings.len(), "{}", verdict.message),
    }
}
