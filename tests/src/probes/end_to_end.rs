use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use reachr_common::config::{Config, TargetSet};
use reachr_common::network::target::{DnsTarget, HttpTarget, TcpTarget};
use reachr_common::probe::failure::ProbeFailure;
use reachr_core::network::http::HttpProbe;
use reachr_core::prober::NetworkProber;
use reachr_core::runner::{RunSummary, Runner};
use tokio::net::TcpListener;

use crate::util::{RecordingReporter, closed_addr, response, spawn_http_server};

fn canned(path: &str) -> String {
    match path {
        "/health" => response(200, "OK", &[]),
        _ => response(502, "Bad Gateway", &[]),
    }
}

/// Full run over loopback targets only, so it works without internet access.
#[tokio::test]
async fn network_prober_run_against_loopback() {
    let open = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let open_port: u16 = open.local_addr().unwrap().port();
    let closed_port: u16 = closed_addr().await.port();
    let http_addr = spawn_http_server(canned).await;

    let cfg = Config {
        timeout: Duration::from_secs(2),
        direct: true,
        targets: TargetSet {
            tcp: vec![
                TcpTarget::new("127.0.0.1", open_port),
                TcpTarget::new("127.0.0.1", closed_port),
            ],
            http: vec![
                HttpTarget::new(format!("http://{http_addr}/health")),
                HttpTarget::new(format!("http://{http_addr}/upstream")),
            ],
            dns: vec![
                DnsTarget::new("127.0.0.1"),
                DnsTarget::new("nonexistent.invalid"),
            ],
        },
    };
    let prober = NetworkProber::new(HttpProbe::direct().unwrap());
    let runner = Runner::new(Box::new(prober), cfg);
    let mut reporter = RecordingReporter::default();

    let summary = runner.run(&mut reporter).await;

    assert_eq!(summary, RunSummary { passed: 3, failed: 3 });

    let outcomes: Vec<bool> = reporter
        .reports()
        .iter()
        .map(|(_, outcome)| outcome.succeeded())
        .collect();
    assert_eq!(outcomes, vec![true, false, true, false, true, false]);

    let reports = reporter.reports();
    assert_eq!(reports[3].1.error(), Some(&ProbeFailure::ServerError(502)));
    assert_eq!(
        reports[4].1.resolved_address(),
        Some(IpAddr::V4(Ipv4Addr::LOCALHOST))
    );
    assert!(reports[5].1.error().is_some());
}
