//! # Probe Target Model
//!
//! Defines what a probe is pointed at.
//!
//! Each probe kind has its own target type:
//! * [`TcpTarget`]: a `host:port` pair for a raw connect.
//! * [`HttpTarget`]: a URL fetched with `GET`.
//! * [`DnsTarget`]: a hostname handed to the system resolver.
//!
//! [`Target`] wraps all three so reporters can treat them uniformly.

use std::fmt;

/// The three probe families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProbeKind {
    Tcp,
    Http,
    Dns,
}

impl ProbeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeKind::Tcp => "tcp",
            ProbeKind::Http => "http",
            ProbeKind::Dns => "dns",
        }
    }
}

impl fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TcpTarget {
    pub host: String,
    pub port: u16,
}

impl TcpTarget {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for TcpTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpTarget {
    pub url: String,
}

impl HttpTarget {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl fmt::Display for HttpTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DnsTarget {
    pub hostname: String,
}

impl DnsTarget {
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
        }
    }
}

impl fmt::Display for DnsTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hostname)
    }
}

/// Any probe target, as seen by a reporter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    Tcp(TcpTarget),
    Http(HttpTarget),
    Dns(DnsTarget),
}

impl Target {
    pub fn kind(&self) -> ProbeKind {
        match self {
            Target::Tcp(_) => ProbeKind::Tcp,
            Target::Http(_) => ProbeKind::Http,
            Target::Dns(_) => ProbeKind::Dns,
        }
    }
}

impl fmt::Display for Target {
    /// TCP targets render as `host:port`, the others as the raw string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Tcp(target) => target.fmt(f),
            Target::Http(target) => target.fmt(f),
            Target::Dns(target) => target.fmt(f),
        }
    }
}

impl From<TcpTarget> for Target {
    fn from(target: TcpTarget) -> Self {
        Target::Tcp(target)
    }
}

impl From<HttpTarget> for Target {
    fn from(target: HttpTarget) -> Self {
        Target::Http(target)
    }
}

impl From<DnsTarget> for Target {
    fn from(target: DnsTarget) -> Self {
        Target::Dns(target)
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
