//! HTTP(S) reachability probe.
//!
//! A probe is a single `GET` with a per-request timeout. Redirects follow the
//! client's default policy. Whatever happens is folded into a [`ProbeOutcome`];
//! nothing is returned as an error.

use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::io;
use std::time::{Duration, Instant};

use reachr_common::probe::{failure::ProbeFailure, outcome::ProbeOutcome};
use reqwest::header::HeaderMap;
use thiserror::Error;
use tracing::debug;

const USER_AGENT: &str = concat!("reachr/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum ProbeSetupError {
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}

pub struct HttpProbe {
    client: reqwest::Client,
}

impl HttpProbe {
    /// Probe honouring `HTTP_PROXY`/`HTTPS_PROXY`/`NO_PROXY` from the environment.
    pub fn new() -> Result<Self, ProbeSetupError> {
        Self::from_builder(reqwest::Client::builder())
    }

    /// Probe that ignores environment proxies and always connects directly.
    pub fn direct() -> Result<Self, ProbeSetupError> {
        Self::from_builder(reqwest::Client::builder().no_proxy())
    }

    fn from_builder(builder: reqwest::ClientBuilder) -> Result<Self, ProbeSetupError> {
        // Some APIs (api.github.com among them) reject requests without a user agent.
        let client = builder.user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    pub async fn probe(&self, url: &str, probe_timeout: Duration) -> ProbeOutcome {
        let start: Instant = Instant::now();

        match self.client.get(url).timeout(probe_timeout).send().await {
            Ok(response) => {
                let elapsed: Duration = start.elapsed();
                let status: u16 = response.status().as_u16();
                let headers = collect_headers(response.headers());
                debug!("GET {url} answered {status} in {:.3}s", elapsed.as_secs_f64());
                ProbeOutcome::http_response(status, elapsed, headers)
            }
            Err(e) => {
                let failure: ProbeFailure = classify_error(&e);
                debug!("GET {url} failed ({failure}): {}", error_chain(&e));
                ProbeOutcome::http_failure(failure)
            }
        }
    }
}

/// Flattens response headers, joining repeated names with `", "`.
fn collect_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut collected: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let value: String = String::from_utf8_lossy(value.as_bytes()).into_owned();
        collected
            .entry(name.as_str().to_string())
            .and_modify(|existing: &mut String| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }
    collected
}

/// Maps a request that never produced a response onto the failure taxonomy.
///
/// Connect-phase failures are checked first: `is_timeout()` also matches an OS
/// connect timeout, which must stay a connection timeout. The client's own
/// request deadline is not a connect error and lands on `RequestTimeout`.
fn classify_error(err: &reqwest::Error) -> ProbeFailure {
    if err.is_connect() {
        return classify_connect_error(err);
    }

    if err.is_timeout() {
        return ProbeFailure::RequestTimeout;
    }

    if err.is_builder()
        || err.is_request()
        || err.is_redirect()
        || err.is_body()
        || err.is_decode()
        || err.is_status()
    {
        return ProbeFailure::RequestFailed;
    }

    ProbeFailure::Unexpected(failure_kind_name(err))
}

fn classify_connect_error(err: &reqwest::Error) -> ProbeFailure {
    if let Some(io_err) = find_io_error(err) {
        match io_err.kind() {
            io::ErrorKind::TimedOut => return ProbeFailure::ConnectionTimeout,
            io::ErrorKind::ConnectionRefused => return ProbeFailure::ConnectionRefused,
            _ => {}
        }
    }

    // Not every connector surfaces a typed io::Error, so fall back to the text.
    let chain: String = error_chain(err).to_lowercase();
    if err.is_timeout() || chain.contains("timeout") || chain.contains("timed out") {
        ProbeFailure::ConnectionTimeout
    } else if chain.contains("refused") {
        ProbeFailure::ConnectionRefused
    } else {
        ProbeFailure::ConnectionError
    }
}

fn find_io_error(err: &reqwest::Error) -> Option<&io::Error> {
    let mut source: Option<&(dyn StdError + 'static)> = err.source();
    while let Some(current) = source {
        if let Some(io_err) = current.downcast_ref::<io::Error>() {
            return Some(io_err);
        }
        source = current.source();
    }
    None
}

fn failure_kind_name(err: &reqwest::Error) -> String {
    match find_io_error(err) {
        Some(io_err) => format!("{:?}", io_err.kind()),
        None => String::from("reqwest::Error"),
    }
}

/// Joins an error and all of its sources into one line.
fn error_chain(err: &reqwest::Error) -> String {
    let mut parts: Vec<String> = vec![err.to_string()];
    let mut source: Option<&(dyn StdError + 'static)> = err.source();
    while let Some(current) = source {
        parts.push(current.to_string());
        source = current.source();
    }
    parts.join(": ")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
