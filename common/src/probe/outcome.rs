//! # Probe Outcomes
//!
//! A [`ProbeOutcome`] is the structured result of one probe. It is built by a
//! probe, handed to a reporter and then dropped; nothing aggregates them.
//!
//! Outcomes can only be created through the constructors on [`ProbeOutcome`],
//! which keep two rules true:
//! * a failed HTTP or DNS outcome always carries a [`ProbeFailure`];
//! * a passing HTTP outcome always has a status in `200..400`.

use std::collections::BTreeMap;
use std::net::IpAddr;
use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::network::target::ProbeKind;
use crate::probe::failure::ProbeFailure;

#[derive(Clone, Debug, PartialEq)]
pub struct ProbeOutcome {
    succeeded: bool,
    detail: Detail,
}

/// Kind-specific supporting data.
#[derive(Clone, Debug, PartialEq)]
pub enum Detail {
    /// TCP reports reachability only.
    Tcp,
    Http(HttpDetail),
    Dns(DnsDetail),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HttpDetail {
    #[serde(flatten)]
    pub response: Option<HttpResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ProbeFailure>,
}

/// What was observed when a response actually arrived.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HttpResponse {
    pub status_code: u16,
    #[serde(rename = "response_time_seconds", serialize_with = "as_secs_f64")]
    pub response_time: Duration,
    pub headers: BTreeMap<String, String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DnsDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_address: Option<IpAddr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ProbeFailure>,
}

fn as_secs_f64<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

impl ProbeOutcome {
    pub fn tcp(reachable: bool) -> Self {
        Self {
            succeeded: reachable,
            detail: Detail::Tcp,
        }
    }

    /// Builds the outcome for a received response; the status decides pass or fail.
    pub fn http_response(
        status_code: u16,
        response_time: Duration,
        headers: BTreeMap<String, String>,
    ) -> Self {
        let error: Option<ProbeFailure> = ProbeFailure::from_status(status_code);
        Self {
            succeeded: error.is_none(),
            detail: Detail::Http(HttpDetail {
                response: Some(HttpResponse {
                    status_code,
                    response_time,
                    headers,
                }),
                error,
            }),
        }
    }

    /// The request failed before any response arrived.
    pub fn http_failure(failure: ProbeFailure) -> Self {
        Self {
            succeeded: false,
            detail: Detail::Http(HttpDetail {
                response: None,
                error: Some(failure),
            }),
        }
    }

    pub fn dns_resolved(address: IpAddr) -> Self {
        Self {
            succeeded: true,
            detail: Detail::Dns(DnsDetail {
                resolved_address: Some(address),
                error: None,
            }),
        }
    }

    pub fn dns_failure(failure: ProbeFailure) -> Self {
        Self {
            succeeded: false,
            detail: Detail::Dns(DnsDetail {
                resolved_address: None,
                error: Some(failure),
            }),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    pub fn kind(&self) -> ProbeKind {
        match self.detail {
            Detail::Tcp => ProbeKind::Tcp,
            Detail::Http(_) => ProbeKind::Http,
            Detail::Dns(_) => ProbeKind::Dns,
        }
    }

    pub fn detail(&self) -> &Detail {
        &self.detail
    }

    pub fn error(&self) -> Option<&ProbeFailure> {
        match &self.detail {
            Detail::Tcp => None,
            Detail::Http(http) => http.error.as_ref(),
            Detail::Dns(dns) => dns.error.as_ref(),
        }
    }

    pub fn response(&self) -> Option<&HttpResponse> {
        match &self.detail {
            Detail::Http(http) => http.response.as_ref(),
            _ => None,
        }
    }

    pub fn resolved_address(&self) -> Option<IpAddr> {
        match &self.detail {
            Detail::Dns(dns) => dns.resolved_address,
            _ => None,
        }
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
