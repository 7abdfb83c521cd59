use reqwest::header::ACCEPT;

use crate::{
    error::ChangeError,
    types::{ServiceError, ValidDenominationsResponse},
};

use super::{client, endpoint};

/// Fetches the denomination catalog the service itself advertises.
pub async fn valid_denominations(
    api_url: &str,
) -> Result<ValidDenominationsResponse, ChangeError> {
    let client = client()?;

    let response = client
        .get(endpoint(api_url, "valid-denominations"))
        .header(ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| ChangeError::transport(&e))?;

    let status = response.status();
    if status.is_success() {
        response
            .json::<ValidDenominationsResponse>()
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
