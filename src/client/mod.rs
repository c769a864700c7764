// HTTP client for the daemon control endpoint
//
// Provides ControlClient for pushing configuration into a running daemon
// and querying its per-interface state.

mod control_client;

pub use control_client::{ControlClient, ControlConfig};
