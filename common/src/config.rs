use std::time::Duration;

use crate::network::target::{DnsTarget, HttpTarget, TcpTarget};

/// Timeout applied to each TCP connect and each HTTP request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

pub struct Config {
    /// Upper bound for a single TCP or HTTP probe.
    ///
    /// DNS lookups go through the system resolver and use its own timeout.
    pub timeout: Duration,
    /// Ignore `HTTP_PROXY`-style environment settings and connect HTTP probes directly.
    pub direct: bool,
    pub targets: TargetSet,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            direct: false,
            targets: TargetSet::default(),
        }
    }
}

/// The ordered target lists of a run. Order is preserved in the output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetSet {
    pub tcp: Vec<TcpTarget>,
    pub http: Vec<HttpTarget>,
    pub dns: Vec<DnsTarget>,
}

impl TargetSet {
    pub fn len(&self) -> usize {
        self.tcp.len() + self.http.len() + self.dns.len()
    }
}

impl Default for TargetSet {
    fn default() -> Self {
        Self {
            tcp: vec![
                TcpTarget::new("google.com", 80),
                TcpTarget::new("google.com", 443),
                TcpTarget::new("8.8.8.8", 53),
                TcpTarget::new("cloudflare.com", 443),
                TcpTarget::new("github.com", 443),
            ],
            http: vec![
                HttpTarget::new("http://httpbin.org/get"),
                HttpTarget::new("https://httpbin.org/get"),
                HttpTarget::new("https://www.google.com"),
                HttpTarget::new("https://api.github.com"),
            ],
            dns: vec![
                DnsTarget::new("google.com"),
                DnsTarget::new("github.com"),
                DnsTarget::new("stackoverflow.com"),
            ],
        }
    }
}
