//! User interface module - printing and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Writing formatted output to stdout/stderr

pub mod formatter;

use crate::cli::orchestration::{BumpOutcome, StatusReport};
use crate::domain::Version;

pub use formatter::{
    format_bump_outcome, format_component_list, format_error, format_status_report,
};

/// Print an error message to stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Print the outcome of a bump.
pub fn display_bump_outcome(outcome: &BumpOutcome) {
    println!("{}", format_bump_outcome(outcome));
}

/// Print the root and component versions.
pub fn display_status_report(report: &StatusReport) {
    println!("{}", format_status_report(report));
}

/// Print the available components.
pub fn display_component_list(components: &[(String, Version)]) {
    println!("{}", format_component_list(components));
}
