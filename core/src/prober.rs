//! The **abstraction** over the three probe primitives.
//!
//! The [`crate::runner::Runner`] only talks to a [`Prober`], never to sockets
//! directly. [`NetworkProber`] is the real implementation; tests swap in a
//! scripted one to exercise ordering and reporting without touching the network.

use std::time::Duration;

use async_trait::async_trait;
use reachr_common::network::target::{DnsTarget, HttpTarget, TcpTarget};
use reachr_common::probe::outcome::ProbeOutcome;

use crate::network::http::HttpProbe;
use crate::network::{dns, tcp};

#[async_trait]
pub trait Prober: Send + Sync {
    /// `true` when a TCP handshake with the target completes within `timeout`.
    async fn tcp(&self, target: &TcpTarget, timeout: Duration) -> bool;

    async fn http(&self, target: &HttpTarget, timeout: Duration) -> ProbeOutcome;

    async fn dns(&self, target: &DnsTarget) -> ProbeOutcome;
}

pub struct NetworkProber {
    http: HttpProbe,
}

impl NetworkProber {
    pub fn new(http: HttpProbe) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Prober for NetworkProber {
    async fn tcp(&self, target: &TcpTarget, timeout: Duration) -> bool {
        tcp::probe(&target.host, target.port, timeout).await
    }

    async fn http(&self, target: &HttpTarget, timeout: Duration) -> ProbeOutcome {
        self.http.probe(&target.url, timeout).await
    }

    async fn dns(&self, target: &DnsTarget) -> ProbeOutcome {
        dns::probe(&target.hostname).await
    }
}
