// Shared data model for the daemon control protocol

use std::fmt;

use serde::{Deserialize, Serialize};

/// Daemon configuration pushed via `POST /reload`.
///
/// Immutable once sent; the client serializes it and never mutates it. The
/// daemon applies it fully or rejects it, there is no partial application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Per-interface settings, in the order the daemon should apply them.
    pub interfaces: Vec<InterfaceConfig>,
}

/// Tuning parameters for a single advertised interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceConfig {
    /// Interface name (e.g. "eth0"). Must be non-empty and unique within a
    /// Config; duplicates are a caller error the daemon rejects.
    pub name: String,

    /// Interval between unsolicited router advertisements, in milliseconds.
    /// Must be positive. The client does not pre-validate this; validation
    /// is the daemon's responsibility.
    pub ra_interval_ms: i64,
}

/// Point-in-time snapshot produced by the daemon.
///
/// Interfaces appear in the same order as the most recently *accepted*
/// Config, never a rejected one. Snapshots are allocated fresh per call;
/// there is no consistency guarantee across separate calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub interfaces: Vec<InterfaceStatus>,
}

/// Lifecycle state of one configured interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceStatus {
    pub name: String,
    pub state: InterfaceState,
}

/// Lifecycle state enumeration, owned by the daemon.
///
/// There is deliberately no catch-all variant: a state string outside this
/// set fails deserialization, so daemon-side protocol drift surfaces as a
/// decode error instead of being masked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterfaceState {
    /// Configured but not yet sending advertisements.
    Init,
    /// Actively sending periodic advertisements.
    Running,
    /// The daemon could not bind the interface or keep it up.
    Failing,
    /// Removed from the last accepted config or shut down.
    Stopped,
}

impl fmt::Display for InterfaceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InterfaceState::Init => "Init",
            InterfaceState::Running => "Running",
            InterfaceState::Failing => "Failing",
            InterfaceState::Stopped => "Stopped",
        };
        f.write_str(s)
    }
}

/// Structured application-level rejection returned by the daemon on
/// non-200, non-500 responses (e.g. an invalid config).
///
/// Implements `std::error::Error` so callers can treat it uniformly with
/// transport failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct DaemonError {
    pub message: String,
}
