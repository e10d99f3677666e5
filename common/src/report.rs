//! # Reporting Port
//!
//! The probe engine never prints. It hands every section boundary and every
//! [`ProbeOutcome`] to a [`Reporter`], and the front end decides how those are
//! rendered (aligned terminal lines, JSON lines, or a test recorder).

use std::fmt;

use thiserror::Error;

use crate::network::target::Target;
use crate::probe::outcome::ProbeOutcome;

/// A reporting boundary grouping the probes of one kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    TcpConnectivity,
    HttpRequests,
    DnsResolution,
}

impl Section {
    pub fn name(&self) -> &'static str {
        match self {
            Section::TcpConnectivity => "TCP Connectivity Tests",
            Section::HttpRequests => "HTTP/HTTPS Tests",
            Section::DnsResolution => "DNS Resolution Tests",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ReportResult = Result<(), ReportError>;

/// Sink for probe results.
///
/// Calls arrive in run order: `section_start`, then for each target an
/// optional `probe_started` followed by `report`, and a single `finish` at the end.
pub trait Reporter {
    fn section_start(&mut self, section: Section) -> ReportResult;

    /// Called right before a probe begins. Useful for progress indicators.
    fn probe_started(&mut self, _target: &Target) -> ReportResult {
        Ok(())
    }

    fn report(&mut self, target: &Target, outcome: &ProbeOutcome) -> ReportResult;

    fn finish(&mut self) -> ReportResult {
        Ok(())
    }
}
