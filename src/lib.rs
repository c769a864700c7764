// radvctl - control-plane client for a router advertisement daemon
// Library exports

pub mod api; // Wire schema shared with the daemon
pub mod client; // Reload/status control client
pub mod error; // Classified client failures
