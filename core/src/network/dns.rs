use std::net::{IpAddr, SocketAddr};

use reachr_common::probe::{failure::ProbeFailure, outcome::ProbeOutcome};
use tokio::net::lookup_host;
use tracing::debug;

/// Resolves `hostname` through the system resolver.
///
/// The first IPv4 answer wins; if there is none, the first answer of any family
/// is used. Resolver errors are reported with the resolver's own message.
pub async fn probe(hostname: &str) -> ProbeOutcome {
    let answers: Vec<SocketAddr> = match lookup_host((hostname, 0)).await {
        Ok(addrs) => addrs.collect(),
        Err(e) => {
            debug!("lookup of {hostname} failed: {e}");
            return ProbeOutcome::dns_failure(ProbeFailure::resolution(e.to_string()));
        }
    };

    match pick_address(&answers) {
        Some(address) => ProbeOutcome::dns_resolved(address),
        None => ProbeOutcome::dns_failure(ProbeFailure::resolution(format!(
            "No addresses found for {hostname}"
        ))),
    }
}

fn pick_address(answers: &[SocketAddr]) -> Option<IpAddr> {
    answers
        .iter()
        .map(SocketAddr::ip)
        .find(IpAddr::is_ipv4)
        .or_else(|| answers.first().map(SocketAddr::ip))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
