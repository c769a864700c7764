// Wire schema for the reload/status control protocol
//
// These shapes are the contract between the client and the daemon; the
// daemon produces Status and error payloads, the client only decodes them.

mod types;

pub use types::{Config, DaemonError, InterfaceConfig, InterfaceState, InterfaceStatus, Status};
