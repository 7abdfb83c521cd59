//! # Coin-Change Service Client
//!
//! HTTP client for the remote coin-change calculation service. This module is
//! the only place the service's wire contract is spoken; higher layers deal
//! in the crate's own types.
//!
//! ## Endpoints
//!
//! All paths hang off `<base>/api/v1/coin-change`:
//!
//! - [`probe`] - `GET /health`; any 2xx means connected, everything else
//!   (including transport failure) means disconnected with a reason.
//! - [`calculate`] - `POST /calculate` with a JSON body; a 2xx body is a
//!   [`ChangeResult`](crate::types::ChangeResult), a non-2xx body is a
//!   structured [`ServiceError`](crate::types::ServiceError).
//! - [`valid_denominations`] - `GET /valid-denominations`; the server's own
//!   advertised denomination catalog.
//!
//! [`submit`] wraps [`calculate`] with the local preconditions: a non-empty
//! selection and a passing health probe. Exactly one request is in flight at
//! a time; every call runs to completion (or to the configured timeout) with
//! no automatic retry.
//!
//! ## Headers
//!
//! Every request declares `Accept: application/json`; the calculate POST
//! additionally carries `Content-Type: application/json`.

mod calculate;
mod denominations;
mod health;

pub use calculate::calculate;
pub use calculate::submit;
pub use denominations::valid_denominations;
pub use health::probe;

use reqwest::Client;

use crate::{config, error::ChangeError};

pub(crate) fn client() -> Result<Client, ChangeError> {
    let mut builder = Client::builder();
    if let Some(timeout) = config::request_timeout() {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(|e| ChangeError::Transport {
        reason: e.to_string(),
    })
}

pub(crate) fn endpoint(api_url: &str, path: &str) -> String {
    format!(
        "{base}/api/v1/coin-change/{path}",
        base = api_url.trim_end_matches('/'),
        path = path
    )
}
