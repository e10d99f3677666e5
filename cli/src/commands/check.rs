use anyhow::Context;
use tracing::info;

use reachr_common::config::Config;
use reachr_core::network::http::HttpProbe;
use reachr_core::prober::NetworkProber;
use reachr_core::runner::{RunSummary, Runner};

use crate::report::{self, ReportFormat};

/// Probes every configured target once and reports to stdout.
///
/// Probe failures are part of the report, not errors, so any finished run exits 0.
/// The one error returned here is an HTTP client that cannot be built (for
/// example, no usable TLS backend); nothing has been probed at that point and
/// the process exits non-zero.
pub async fn check(cfg: Config, format: ReportFormat, color: bool) -> anyhow::Result<()> {
    let http = if cfg.direct {
        HttpProbe::direct()
    } else {
        HttpProbe::new()
    }
    .context("initializing http probe")?;

    let runner = Runner::new(Box::new(NetworkProber::new(http)), cfg);
    let mut reporter = report::stdout_reporter(format, color);

    let summary: RunSummary = runner.run(reporter.as_mut()).await;
    info!("{} of {} probes passed", summary.passed, summary.total());

    Ok(())
}
