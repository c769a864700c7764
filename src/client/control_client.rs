// Control client implementation
//
// Translates the two control-plane intents (reload configuration, fetch
// status) into HTTP requests against a configured daemon host and
// classifies each response deterministically.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::Error as _;
use tracing::debug;

use crate::api::{Config, DaemonError, Status};
use crate::error::ClientError;

/// Connection settings for the daemon control endpoint.
#[derive(Debug, Clone)]
pub struct ControlConfig {
    /// Daemon control address as bare host:port (e.g. "127.0.0.1:8080").
    /// URLs are always built as `http://{host}/...`; no TLS, no path
    /// prefix, no authentication.
    pub host: String,
    /// Deadline for a single round trip. Fixed at construction; a caller
    /// wanting per-call cancellation drops the future.
    pub timeout: Duration,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1:8080".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl ControlConfig {
    /// Config for the given host with the default timeout.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }
}

/// HTTP client for the daemon's reload/status control protocol.
///
/// Stateless across calls: each call is one request and one response, with
/// no retry, no caching, and no session. Safe to share across tasks; the
/// underlying reqwest client pools connections internally.
pub struct ControlClient {
    base_url: String,
    client: Client,
}

impl ControlClient {
    /// Create a client for the daemon at `config.host`.
    ///
    /// No connection is made here; each call builds its own request.
    pub fn new(config: ControlConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            base_url: format!("http://{}", config.host),
            client,
        })
    }

    /// Push a new configuration into the running daemon.
    ///
    /// The config is not pre-validated; duplicate names and non-positive
    /// intervals are the daemon's to reject. The daemon applies the config
    /// fully or not at all, so the outcome is a plain accept/reject.
    pub async fn reload(&self, config: &Config) -> Result<(), ClientError> {
        let body = serde_json::to_vec(config).map_err(ClientError::Encode)?;

        let url = format!("{}/reload", self.base_url);
        debug!(url = %url, interfaces = config.interfaces.len(), "Sending reload request");

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(classify_send_error)?;

        let code = response.status();
        match code {
            StatusCode::OK => {
                debug!("Reload accepted");
                Ok(())
            }
            StatusCode::INTERNAL_SERVER_ERROR => Err(server_error(code)),
            _ => Err(daemon_rejection(response).await),
        }
    }

    /// Fetch a point-in-time snapshot of per-interface daemon state.
    ///
    /// On success the snapshot is fully decoded and self-consistent: every
    /// entry has a non-empty name and a recognized state. A partially
    /// decoded snapshot is never returned.
    pub async fn status(&self) -> Result<Status, ClientError> {
        let url = format!("{}/status", self.base_url);
        debug!(url = %url, "Sending status request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(classify_send_error)?;

        let code = response.status();
        match code {
            StatusCode::OK => {
                let body = response.bytes().await.map_err(ClientError::Transport)?;
                let snapshot: Status =
                    serde_json::from_slice(&body).map_err(|e| ClientError::Decode {
                        context: "status",
                        source: e,
                    })?;

                if snapshot.interfaces.iter().any(|i| i.name.is_empty()) {
                    return Err(ClientError::Decode {
                        context: "status",
                        source: serde_json::Error::custom("interface entry with empty name"),
                    });
                }

                debug!(interfaces = snapshot.interfaces.len(), "Received status snapshot");
                Ok(snapshot)
            }
            StatusCode::INTERNAL_SERVER_ERROR => Err(server_error(code)),
            _ => Err(daemon_rejection(response).await),
        }
    }

    /// Base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Split reqwest send failures into request-construction and transport
/// errors. Builder errors (malformed host) are caller bugs; everything else
/// (refused, timeout, DNS) is a network-level failure.
fn classify_send_error(e: reqwest::Error) -> ClientError {
    if e.is_builder() {
        ClientError::Request(e)
    } else {
        ClientError::Transport(e)
    }
}

/// 5xx crash path: the daemon attaches no structured body, so the status
/// line is all the context there is.
fn server_error(code: StatusCode) -> ClientError {
    ClientError::Server {
        status: format!(
            "{} {}",
            code.as_u16(),
            code.canonical_reason().unwrap_or("Unknown")
        ),
    }
}

/// Decode the structured error body the daemon attaches to non-200,
/// non-500 responses. A body that fails to decode is itself an error,
/// never silently dropped.
async fn daemon_rejection(response: reqwest::Response) -> ClientError {
    let body = match response.bytes().await {
        Ok(body) => body,
        Err(e) => return ClientError::Transport(e),
    };

    match serde_json::from_slice::<DaemonError>(&body) {
        Ok(e) => ClientError::Daemon(e),
        Err(e) => ClientError::Decode {
            context: "error",
            source: e,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_config_default() {
        let config = ControlConfig::default();
        assert_eq!(config.host, "127.0.0.1:8080");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_client_builds_base_url_from_host() {
        let client = ControlClient::new(ControlConfig::new("192.0.2.1:8080")).unwrap();
        assert_eq!(client.base_url(), "http://192.0.2.1:8080");
    }

    #[test]
    fn test_server_error_includes_status_line() {
        let e = server_error(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.to_string(), "Daemon fault: 500 Internal Server Error");
    }
}
