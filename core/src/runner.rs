//! # Connectivity Run
//!
//! Implements the single use case of the tool: probe every configured target
//! once, in order, and hand each result to a [`Reporter`].
//!
//! Sections always run TCP, then HTTP, then DNS, and targets inside a section
//! keep their configured order. A failing probe never stops the run.

use reachr_common::config::Config;
use reachr_common::network::target::Target;
use reachr_common::probe::outcome::ProbeOutcome;
use reachr_common::report::{ReportResult, Reporter, Section};
use tracing::{Instrument, debug, info_span, warn};

use crate::prober::Prober;

/// Pass/fail tally of a finished run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }
}

/// Application service driving the probes.
///
/// Holds the target lists and the probe implementation, so the same run logic
/// works against the real network or a scripted [`Prober`].
pub struct Runner {
    prober: Box<dyn Prober>,
    config: Config,
}

impl Runner {
    pub fn new(prober: Box<dyn Prober>, config: Config) -> Self {
        Self { prober, config }
    }

    pub async fn run(&self, reporter: &mut dyn Reporter) -> RunSummary {
        let mut summary: RunSummary = RunSummary::default();
        debug!("probing {} targets", self.config.targets.len());

        self.run_tcp(reporter, &mut summary)
            .instrument(info_span!("section", name = Section::TcpConnectivity.name()))
            .await;
        self.run_http(reporter, &mut summary)
            .instrument(info_span!("section", name = Section::HttpRequests.name()))
            .await;
        self.run_dns(reporter, &mut summary)
            .instrument(info_span!("section", name = Section::DnsResolution.name()))
            .await;

        log_report_error(reporter.finish());
        debug!(
            "run complete: {} passed, {} failed",
            summary.passed, summary.failed
        );
        summary
    }

    async fn run_tcp(&self, reporter: &mut dyn Reporter, summary: &mut RunSummary) {
        log_report_error(reporter.section_start(Section::TcpConnectivity));
        for tcp_target in &self.config.targets.tcp {
            let target: Target = tcp_target.clone().into();
            log_report_error(reporter.probe_started(&target));

            let reachable: bool = self.prober.tcp(tcp_target, self.config.timeout).await;
            deliver(reporter, summary, &target, ProbeOutcome::tcp(reachable));
        }
    }

    async fn run_http(&self, reporter: &mut dyn Reporter, summary: &mut RunSummary) {
        log_report_error(reporter.section_start(Section::HttpRequests));
        for http_target in &self.config.targets.http {
            let target: Target = http_target.clone().into();
            log_report_error(reporter.probe_started(&target));

            let outcome: ProbeOutcome = self.prober.http(http_target, self.config.timeout).await;
            deliver(reporter, summary, &target, outcome);
        }
    }

    async fn run_dns(&self, reporter: &mut dyn Reporter, summary: &mut RunSummary) {
        log_report_error(reporter.section_start(Section::DnsResolution));
        for dns_target in &self.config.targets.dns {
            let target: Target = dns_target.clone().into();
            log_report_error(reporter.probe_started(&target));

            let outcome: ProbeOutcome = self.prober.dns(dns_target).await;
            deliver(reporter, summary, &target, outcome);
        }
    }
}

fn deliver(
    reporter: &mut dyn Reporter,
    summary: &mut RunSummary,
    target: &Target,
    outcome: ProbeOutcome,
) {
    if outcome.succeeded() {
        summary.passed += 1;
    } else {
        summary.failed += 1;
    }
    log_report_error(reporter.report(target, &outcome));
}

// A broken output sink must not cut the run short.
fn log_report_error(result: ReportResult) {
    if let Err(e) = result {
        warn!("{e}");
    }
}
