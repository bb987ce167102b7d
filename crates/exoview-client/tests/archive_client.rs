//! Archive client tests against a mock TAP endpoint.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use exoview_client::{ArchiveClient, ArchiveConfig, Error, load_session};
use exoview_core::{LoadStatus, SessionState};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BODY: &str = r#"[
    {"pl_name": "Kepler-10 b", "discoverymethod": "Transit", "disc_year": 2011,
     "pl_bmasse": 3.26, "pl_rade": 1.47, "pl_orbper": 0.837495,
     "hostname": "Kepler-10", "sy_pnum": 2, "pl_eqt": null,
     "disc_locale": "Space", "disc_facility": "Kepler"},
    {"pl_name": "51 Peg b", "discoverymethod": "Radial Velocity", "disc_year": 1995,
     "pl_bmasse": null, "pl_rade": null, "pl_orbper": 4.230785,
     "hostname": "51 Peg", "sy_pnum": 1, "pl_eqt": null,
     "disc_locale": "Ground", "disc_facility": "Haute-Provence Observatory"}
]"#;

fn client_for(server: &MockServer) -> ArchiveClient {
    let config = ArchiveConfig::default().with_endpoint(format!("{}/TAP/sync", server.uri()));
    ArchiveClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_fetch_records_success_preserves_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/TAP/sync"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(BODY))
        .expect(1)
        .mount(&server)
        .await;

    let records = client_for(&server).fetch_records().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name.as_deref(), Some("Kepler-10 b"));
    assert_eq!(records[1].name.as_deref(), Some("51 Peg b"));
    assert_eq!(records[1].mass_earth, None);
}

#[tokio::test]
async fn test_fetch_sends_default_flag_query() {
    let server = MockServer::start().await;
    let config = ArchiveConfig {
        columns: vec!["pl_name".to_string(), "discoverymethod".to_string()],
        ..ArchiveConfig::default()
    }
    .with_endpoint(format!("{}/TAP/sync", server.uri()));

    Mock::given(method("GET"))
        .and(query_param(
            "query",
            "select pl_name,discoverymethod from ps where default_flag = 1",
        ))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let records = ArchiveClient::new(&config)
        .unwrap()
        .fetch_records()
        .await
        .unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_fetch_http_500_is_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_records().await.unwrap_err();
    assert!(matches!(err, Error::Status { .. }));
    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_fetch_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).fetch_records().await.unwrap_err();
    assert!(matches!(err, Error::Core(exoview_core::Error::Decode(_))));
}

#[tokio::test]
async fn test_fetch_connection_refused_is_http_error() {
    let config = ArchiveConfig::default().with_endpoint("http://127.0.0.1:9/TAP/sync");
    let err = ArchiveClient::new(&config)
        .unwrap()
        .fetch_records()
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Http(_)));
}

#[tokio::test]
async fn test_load_session_populates_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(BODY))
        .mount(&server)
        .await;

    let mut session = SessionState::new();
    let count = load_session(&client_for(&server), &mut session)
        .await
        .unwrap();
    assert_eq!(count, 2);
    assert_eq!(session.status(), &LoadStatus::Loaded(2));
}

#[tokio::test]
async fn test_load_session_failure_leaves_session_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let mut session = SessionState::new();
    let result = load_session(&client_for(&server), &mut session).await;
    assert!(result.is_err());
    assert!(session.records().is_empty());
    let LoadStatus::Failed(reason) = session.status() else {
        unreachable!("Expected Failed status");
    };
    assert!(reason.contains("503"));
}

#[test]
fn test_client_exposes_endpoint_and_query() {
    let config = ArchiveConfig {
        columns: vec!["pl_name".to_string()],
        default_only: false,
        ..ArchiveConfig::default()
    }
    .with_endpoint("http://localhost:8080/TAP/sync");
    let client = ArchiveClient::new(&config).unwrap();
    assert_eq!(client.endpoint(), "http://localhost:8080/TAP/sync");
    assert_eq!(client.query().adql(), "select pl_name from ps");
}

#[test]
fn test_invalid_table_rejected_at_construction() {
    let config = ArchiveConfig {
        table: "ps where 1=1".to_string(),
        ..ArchiveConfig::default()
    };
    assert!(matches!(
        ArchiveClient::new(&config),
        Err(Error::InvalidQuery(_))
    ));
}
