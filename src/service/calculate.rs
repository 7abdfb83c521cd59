use reqwest::header::ACCEPT;

use crate::{
    error::ChangeError,
    types::{ChangeRequest, ChangeResult, ConnectionState, ServiceError},
    utils::{self, Denomination},
};

use super::{client, endpoint, health};

/// Runs one guarded change calculation: local validation, then the health
/// gate, then the calculate exchange.
///
/// An empty selection is a validation error and never reaches the network.
/// A failed health probe blocks submission pre-emptively, before any
/// calculate request is sent. The amount is taken in cents, already range-
/// checked by [`utils::parse_amount`](crate::utils::parse_amount).
pub async fn submit(
    api_url: &str,
    amount_cents: u64,
    selected: &[Denomination],
) -> Result<ChangeResult, ChangeError> {
    if selected.is_empty() {
        return Err(ChangeError::validation(
            "no denominations selected; select at least one before calculating",
        ));
    }

    if let ConnectionState::Disconnected(reason) = health::probe(api_url).await {
        return Err(ChangeError::Disconnected { reason });
    }

    let request = ChangeRequest {
        amount: utils::cents_to_major(amount_cents),
        denominations: selected.iter().map(|d| d.major_units()).collect(),
    };

    calculate(api_url, &request).await
}

/// Issues the calculate exchange against the service.
///
/// A 2xx response parses as [`ChangeResult`]. A non-2xx response parses as
/// [`ServiceError`] and surfaces its `message` verbatim, falling back to a
/// generic message naming the status when the body is absent or malformed.
pub async fn calculate(
    api_url: &str,
    request: &ChangeRequest,
) -> Result<ChangeResult, ChangeError> {
    let client = client()?;

    let response = client
        .post(endpoint(api_url, "calculate"))
        .header(ACCEPT, "application/json")
        .json(request)
        .send()
        .await
        .map_err(|e| ChangeError::transport(&e))?;

    let status = response.status();
    if status.is_success() {
        response
            .json::<ChangeResult>()
            .await
            .map_err(|e| ChangeError::Decode {
                reason: e.to_string(),
            })
    } else {
        let (code, message) = match response.json::<ServiceError>().await {
            Ok(body) => (Some(body.error), body.message),
            Err(_) => (
                None,
                format!("the service rejected the request (HTTP {})", status),
            ),
        };
        Err(ChangeError::Api {
            status: status.as_u16(),
            code,
            message,
        })
    }
}
