// Classified failures for reload/status control calls
//
// Every failure mode is a distinct variant so callers can branch on kind
// without string matching. The client never recovers locally; whether to
// retry, alert, or abort is the caller's decision.

use thiserror::Error;

use crate::api::DaemonError;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Config could not be serialized. A caller bug; no request was sent.
    #[error("Failed to encode config: {0}")]
    Encode(#[source] serde_json::Error),

    /// The HTTP client or request could not be constructed (e.g. malformed
    /// host). A caller configuration bug.
    #[error("Failed to build request: {0}")]
    Request(#[source] reqwest::Error),

    /// Network-level failure (connection refused, timeout, DNS). Possibly
    /// transient; no retry is attempted here.
    #[error("Transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// The daemon answered 500 with no structured body, signaling an
    /// unhandled daemon-side fault. The daemon's state afterwards is
    /// unknown, so this is not retried.
    #[error("Daemon fault: {status}")]
    Server {
        /// Status line, e.g. "500 Internal Server Error".
        status: String,
    },

    /// A body that was expected to be valid JSON failed to parse, or a
    /// decoded Status was not self-consistent. Indicates a schema mismatch
    /// between client and daemon.
    #[error("Failed to decode {context} response: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// An application-level rejection decoded from the daemon (e.g. an
    /// invalid config).
    #[error(transparent)]
    Daemon(#[from] DaemonError),
}
