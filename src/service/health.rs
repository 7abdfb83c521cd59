use reqwest::header::ACCEPT;

use crate::types::ConnectionState;

use super::{client, endpoint};

/// Probes the service health endpoint and reports the connection state.
///
/// Any 2xx response yields [`ConnectionState::Connected`]. A reachable
/// service answering non-2xx and an unreachable service both yield
/// [`ConnectionState::Disconnected`], with distinct reasons: the latter hints
/// at availability rather than naming an HTTP status.
pub async fn probe(api_url: &str) -> ConnectionState {
    let client = match client() {
        Ok(client) => client,
        Err(e) => return ConnectionState::Disconnected(e.to_string()),
    };

    let response = client
        .get(endpoint(api_url, "health"))
        .header(ACCEPT, "application/json")
        .send()
        .await;

    match response {
        Ok(resp) if resp.status().is_success() => ConnectionState::Connected,
        Ok(resp) => {
            ConnectionState::Disconnected(format!("the service responded with HTTP {}", resp.status()))
        }
        Err(err) if err.is_connect() || err.is_timeout() => ConnectionState::Disconnected(format!(
            "cannot reach the service at {}; check that it is running and accepts requests from this host",
            api_url
        )),
        Err(err) => ConnectionState::Disconnected(format!("health check failed: {}", err)),
    }
}
