//! Pure formatting functions for UI output.
//!
//! Everything here returns a `String`; printing lives in the parent module.
//! Styling goes through `console`, which drops colors when the stream is not
//! a terminal.

use console::style;

use crate::cli::orchestration::{BumpOutcome, StatusReport};
use crate::domain::Version;

/// Format an error message with a red prefix.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().bold(), message)
}

/// Format the result of a bump.
///
/// `Root version: 1.0.0 -> 1.0.1`, with a dry-run marker when nothing was written.
pub fn format_bump_outcome(outcome: &BumpOutcome) -> String {
    let line = format!(
        "{} version: {} -> {}",
        outcome.target,
        style(&outcome.previous).red(),
        style(&outcome.current).green()
    );
    if outcome.written {
        line
    } else {
        format!("{} {}", line, style("(dry run, not written)").dim())
    }
}

/// Format the root version followed by every component.
pub fn format_status_report(report: &StatusReport) -> String {
    let mut out = format!("Root version: {}", style(&report.root).bold());
    if !report.components.is_empty() {
        out.push_str("\n\nSkills:");
        for (name, version) in &report.components {
            out.push_str(&format!("\n  {}: {}", name, version));
        }
    }
    out
}

/// Format the component listing.
pub fn format_component_list(components: &[(String, Version)]) -> String {
    if components.is_empty() {
        return "No skills found.".to_string();
    }
    let mut out = String::from("Available skills:");
    for (name, version) in components {
        out.push_str(&format!("\n  {} ({})", name, version));
    }
    out
}
