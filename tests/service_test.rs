use httpmock::prelude::*;

use changecli::error::ChangeError;
use changecli::service;
use changecli::types::{ChangeRequest, ConnectionState};
use changecli::utils::Denomination;

fn denominations(values: &[&str]) -> Vec<Denomination> {
    values.iter().map(|v| v.parse().unwrap()).collect()
}

#[tokio::test]
async fn test_probe_reports_connected_on_2xx() {
    let server = MockServer::start();
    let health_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/coin-change/health");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"status": "ok"}));
    });

    let state = service::probe(&server.base_url()).await;

    assert_eq!(state, ConnectionState::Connected);
    health_mock.assert();
}

#[tokio::test]
async fn test_probe_reports_disconnected_on_non_2xx() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/v1/coin-change/health");
        then.status(503);
    });

    let state = service::probe(&server.base_url()).await;

    match state {
        ConnectionState::Disconnected(reason) => assert!(reason.contains("503")),
        other => panic!("expected disconnected, got {:?}", other),
    }
}

#[tokio::test]
async fn test_probe_distinguishes_unreachable_service() {
    // Nothing listens here; the probe must fail at the transport level
    let state = service::probe("http://127.0.0.1:1").await;

    match state {
        ConnectionState::Disconnected(reason) => {
            assert!(reason.contains("cannot reach the service"));
        }
        other => panic!("expected disconnected, got {:?}", other),
    }
}

#[tokio::test]
async fn test_calculate_renders_the_breakdown_from_a_success_response() {
    let server = MockServer::start();
    let calculate_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/coin-change/calculate")
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "amount": 0.41,
                "denominations": [0.01, 0.05, 0.10, 0.20, 0.50, 1.00]
            }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "coins": [
                    {"denomination": 0.20, "count": 2},
                    {"denomination": 0.01, "count": 1}
                ],
                "totalCoins": 3
            }));
    });

    let request = ChangeRequest {
        amount: 0.41,
        denominations: vec![0.01, 0.05, 0.10, 0.20, 0.50, 1.00],
    };
    let result = service::calculate(&server.base_url(), &request)
        .await
        .unwrap();

    assert_eq!(result.total_coins, 3);
    assert_eq!(result.coins.len(), 2);
    assert_eq!(result.coins[0].count, 2);
    assert!((result.coins[0].denomination - 0.20).abs() < f64::EPSILON);
    assert_eq!(result.coins[1].count, 1);
    assert!((result.coins[1].denomination - 0.01).abs() < f64::EPSILON);
    calculate_mock.assert();
}

#[tokio::test]
async fn test_calculate_surfaces_the_service_error_message_verbatim() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/coin-change/calculate");
        then.status(400)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "error": "invalid_amount",
                "message": "Amount must be positive"
            }));
    });

    let request = ChangeRequest {
        amount: 0.41,
        denominations: vec![0.01],
    };
    let err = service::calculate(&server.base_url(), &request)
        .await
        .unwrap_err();

    // The message is the sole error text shown to the user
    assert_eq!(err.to_string(), "Amount must be positive");
    match err {
        ChangeError::Api { status, code, .. } => {
            assert_eq!(status, 400);
            assert_eq!(code.as_deref(), Some("invalid_amount"));
        }
        other => panic!("expected api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_calculate_falls_back_to_a_generic_message_without_a_structured_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/coin-change/calculate");
        then.status(500).body("oops");
    });

    let request = ChangeRequest {
        amount: 1.0,
        denominations: vec![0.01],
    };
    let err = service::calculate(&server.base_url(), &request)
        .await
        .unwrap_err();

    match err {
        ChangeError::Api { status, code, message } => {
            assert_eq!(status, 500);
            assert_eq!(code, None);
            assert!(message.contains("500"));
        }
        other => panic!("expected api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_calculate_reports_an_unreadable_success_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/coin-change/calculate");
        then.status(200).body("not json");
    });

    let request = ChangeRequest {
        amount: 1.0,
        denominations: vec![0.01],
    };
    let err = service::calculate(&server.base_url(), &request)
        .await
        .unwrap_err();

    assert!(matches!(err, ChangeError::Decode { .. }));
}

#[tokio::test]
async fn test_calculate_reports_transport_failure() {
    let request = ChangeRequest {
        amount: 1.0,
        denominations: vec![0.01],
    };
    let err = service::calculate("http://127.0.0.1:1", &request)
        .await
        .unwrap_err();

    assert!(matches!(err, ChangeError::Transport { .. }));
    assert!(err.to_string().contains("Check that the service is running"));
}

#[tokio::test]
async fn test_submit_with_empty_selection_issues_no_network_call() {
    let server = MockServer::start();
    let health_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/coin-change/health");
        then.status(200);
    });
    let calculate_mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/coin-change/calculate");
        then.status(200);
    });

    let err = service::submit(&server.base_url(), 41, &[]).await.unwrap_err();

    assert!(matches!(err, ChangeError::Validation { .. }));
    health_mock.assert_hits(0);
    calculate_mock.assert_hits(0);
}

#[tokio::test]
async fn test_submit_is_blocked_while_the_service_is_disconnected() {
    let server = MockServer::start();
    let health_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/coin-change/health");
        then.status(500);
    });
    let calculate_mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/coin-change/calculate");
        then.status(200);
    });

    let err = service::submit(&server.base_url(), 41, &denominations(&["0.01"]))
        .await
        .unwrap_err();

    // The failed probe gates submission; the calculate endpoint is never hit
    assert!(matches!(err, ChangeError::Disconnected { .. }));
    health_mock.assert();
    calculate_mock.assert_hits(0);
}

#[tokio::test]
async fn test_submit_probes_health_before_calculating() {
    let server = MockServer::start();
    let health_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/coin-change/health");
        then.status(200);
    });
    let calculate_mock = server.mock(|when, then| {
        when.method(POST).path("/api/v1/coin-change/calculate");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "coins": [{"denomination": 0.20, "count": 2}, {"denomination": 0.01, "count": 1}],
                "totalCoins": 3
            }));
    });

    let selected = denominations(&["0.01", "0.05", "0.10", "0.20", "0.50", "1.00"]);
    let result = service::submit(&server.base_url(), 41, &selected)
        .await
        .unwrap();

    assert_eq!(result.total_coins, 3);
    health_mock.assert();
    calculate_mock.assert();
}

#[tokio::test]
async fn test_switching_the_base_url_probes_each_base_exactly_once() {
    let first = MockServer::start();
    let second = MockServer::start();

    for server in [&first, &second] {
        server.mock(|when, then| {
            when.method(POST).path("/api/v1/coin-change/calculate");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"coins": [], "totalCoins": 0}));
        });
    }
    let first_health = first.mock(|when, then| {
        when.method(GET).path("/api/v1/coin-change/health");
        then.status(200);
    });
    let second_health = second.mock(|when, then| {
        when.method(GET).path("/api/v1/coin-change/health");
        then.status(200);
    });

    let selected = denominations(&["0.01"]);
    service::submit(&first.base_url(), 0, &selected).await.unwrap();
    service::submit(&second.base_url(), 0, &selected).await.unwrap();

    // Each base gets one fresh probe; no status is carried between them
    first_health.assert_hits(1);
    second_health.assert_hits(1);
}

#[tokio::test]
async fn test_valid_denominations_returns_the_advertised_catalog() {
    let server = MockServer::start();
    let remote_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/coin-change/valid-denominations");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "denominations": [0.01, 0.05, 0.10, 1.00]
            }));
    });

    let response = service::valid_denominations(&server.base_url())
        .await
        .unwrap();

    assert_eq!(response.denominations.len(), 4);
    assert!((response.denominations[3] - 1.0).abs() < f64::EPSILON);
    remote_mock.assert();
}
