use serde::{Serialize, Serializer};
use thiserror::Error;

/// Why a probe did not pass.
///
/// The `Display` text of each variant is the stable `error` string that
/// reporters emit, so changing a message is a change to the output format.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ProbeFailure {
    #[error("Request timeout")]
    RequestTimeout,
    #[error("Connection timeout")]
    ConnectionTimeout,
    #[error("Connection refused")]
    ConnectionRefused,
    #[error("Connection error")]
    ConnectionError,
    #[error("Request failed")]
    RequestFailed,
    #[error("Unexpected error: {0}")]
    Unexpected(String),

    #[error("Rate limited")]
    RateLimited,
    #[error("Server error ({0})")]
    ServerError(u16),
    #[error("Client error ({0})")]
    ClientError(u16),
    #[error("Unexpected status ({0})")]
    UnexpectedStatus(u16),

    #[error("{0}")]
    Resolution(String),
}

impl ProbeFailure {
    /// Classifies an HTTP status code. `None` means the status counts as a pass.
    ///
    /// Checked in order: 429, then 5xx, then 4xx, then anything else outside
    /// `200..400` (1xx and codes past 599 land there).
    pub fn from_status(status: u16) -> Option<Self> {
        if (200..400).contains(&status) {
            return None;
        }

        let failure = match status {
            429 => ProbeFailure::RateLimited,
            500.. => ProbeFailure::ServerError(status),
            400.. => ProbeFailure::ClientError(status),
            _ => ProbeFailure::UnexpectedStatus(status),
        };
        Some(failure)
    }

    /// Wraps a resolver message, substituting a generic one if it came back blank.
    pub fn resolution(message: impl Into<String>) -> Self {
        let message: String = message.into();
        if message.trim().is_empty() {
            return ProbeFailure::Resolution(String::from("Name resolution failed"));
        }
        ProbeFailure::Resolution(message)
    }
}

impl Serialize for ProbeFailure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
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
