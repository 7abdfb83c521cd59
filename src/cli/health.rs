use crate::{config, error, service, success, types::ConnectionState, utils};

/// Probes the service and reports whether it is reachable and healthy.
pub async fn health(api_url: Option<String>) {
    let api_url = config::resolve_api_url(api_url);

    let pb = utils::spinner(&format!(
        "Service at {} is {}...",
        api_url,
        ConnectionState::Checking
    ));
    let state = service::probe(&api_url).await;
    pb.finish_and_clear();

    match state {
        ConnectionState::Connected => success!("Service at {} is connected.", api_url),
        other => error!("Service at {} is {}.", api_url, other),
    }
}
