//! Column-aligned terminal rendering.
//!
//! ```text
//! === HTTP/HTTPS Tests ===
//! https://api.github.com       ✓ PASS (200, 0.15s)
//! http://httpbin.org/get       ✗ FAIL (Request timeout)
//! ```

use std::io::{self, Write};

use colored::*;
use console::{Alignment, pad_str};
use reachr_common::network::target::Target;
use reachr_common::probe::outcome::{Detail, ProbeOutcome};
use reachr_common::report::{ReportResult, Reporter, Section};

use crate::terminal::{colors, spinner::ProbeSpinner};

pub const TARGET_WIDTH: usize = 28;

pub struct HumanReporter<W: Write> {
    out: W,
    color: bool,
    spinner: Option<ProbeSpinner>,
}

impl<W: Write> HumanReporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            spinner: None,
        }
    }

    pub fn with_spinner(mut self, spinner: ProbeSpinner) -> Self {
        self.spinner = Some(spinner);
        self
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let out = &mut self.out;
        match &self.spinner {
            Some(spinner) => spinner.suspend(|| writeln!(out, "{line}")),
            None => writeln!(out, "{line}"),
        }
    }
}

impl<W: Write> Reporter for HumanReporter<W> {
    fn section_start(&mut self, section: Section) -> ReportResult {
        let line: String = render_section(section, self.color);
        self.write_line(&line)?;
        Ok(())
    }

    fn probe_started(&mut self, target: &Target) -> ReportResult {
        if let Some(spinner) = &self.spinner {
            spinner.probing(target);
        }
        Ok(())
    }

    fn report(&mut self, target: &Target, outcome: &ProbeOutcome) -> ReportResult {
        let line: String = render_outcome(target, outcome, self.color);
        self.write_line(&line)?;
        Ok(())
    }

    fn finish(&mut self) -> ReportResult {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish();
        }
        self.out.flush()?;
        Ok(())
    }
}

pub fn render_section(section: Section, color: bool) -> String {
    if !color {
        return format!("\n=== {} ===", section.name());
    }
    format!(
        "\n{} {} {}",
        "===".color(colors::SEPARATOR),
        section.name().color(colors::SECTION).bold(),
        "===".color(colors::SEPARATOR)
    )
}

pub fn render_outcome(target: &Target, outcome: &ProbeOutcome, color: bool) -> String {
    let target: String = target.to_string();
    let padded = pad_str(&target, TARGET_WIDTH, Alignment::Left, None);
    let status: String = status_label(outcome.succeeded(), color);

    match detail_text(outcome) {
        Some(detail) if color => format!("{padded} {status} ({})", detail.color(colors::DETAIL)),
        Some(detail) => format!("{padded} {status} ({detail})"),
        None => format!("{padded} {status}"),
    }
}

fn status_label(passed: bool, color: bool) -> String {
    let label: &str = if passed { "✓ PASS" } else { "✗ FAIL" };
    match (color, passed) {
        (false, _) => label.to_string(),
        (true, true) => label.color(colors::PASS).bold().to_string(),
        (true, false) => label.color(colors::FAIL).bold().to_string(),
    }
}

/// The parenthesised suffix: status and timing or address on a pass, the error on a fail.
fn detail_text(outcome: &ProbeOutcome) -> Option<String> {
    if matches!(outcome.detail(), Detail::Tcp) {
        return None;
    }

    if !outcome.succeeded() {
        let error: String = outcome
            .error()
            .map(ToString::to_string)
            .unwrap_or_else(|| String::from("Unknown error"));
        return Some(error);
    }

    match outcome.detail() {
        Detail::Http(http) => http.response.as_ref().map(|response| {
            format!(
                "{}, {:.2}s",
                response.status_code,
                response.response_time.as_secs_f64()
            )
        }),
        Detail::Dns(dns) => dns.resolved_address.map(|address| address.to_string()),
        Detail::Tcp => None,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
