pub mod human;
pub mod json;

use std::io;

use clap::ValueEnum;
use console::Term;
use reachr_common::report::Reporter;

use crate::terminal::spinner::ProbeSpinner;
use human::HumanReporter;
use json::JsonReporter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable on macOS, JSON lines everywhere else
    Auto,
    /// Column-aligned PASS/FAIL lines
    Human,
    /// One JSON record per line
    Json,
}

impl ReportFormat {
    pub fn is_human(self) -> bool {
        match self {
            ReportFormat::Auto => cfg!(target_os = "macos"),
            ReportFormat::Human => true,
            ReportFormat::Json => false,
        }
    }
}

/// Builds the stdout reporter for `format`.
///
/// The spinner is only attached when both stdout and stderr are terminals, so
/// piped output never contains progress frames.
pub fn stdout_reporter(format: ReportFormat, color: bool) -> Box<dyn Reporter> {
    if !format.is_human() {
        return Box::new(JsonReporter::new(io::stdout()));
    }

    let reporter = HumanReporter::new(io::stdout(), color);
    if Term::stdout().is_term() && Term::stderr().is_term() {
        Box::new(reporter.with_spinner(ProbeSpinner::new()))
    } else {
        Box::new(reporter)
    }
}
