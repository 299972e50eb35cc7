//! End-to-end submission tests against the mock calculation service.

use raddim_common::config::ServiceConfig;
use raddim_common::GeoPoint;
use raddim_session::{
    CalculationClient, CalculationError, DimensioningSession, ParameterError, RawFormInput,
    SessionError,
};

use crate::mock_service::{MockCalculationService, MockResponse};

const DAKAR: GeoPoint = GeoPoint::new(14.7167, -17.4677);

fn session_for(mock: &MockCalculationService) -> DimensioningSession {
    let config = ServiceConfig {
        base_url: mock.base_url(),
        timeout_secs: 5,
    };
    let client = CalculationClient::new(&config).unwrap();
    DimensioningSession::new(client, DAKAR)
}

#[tokio::test]
async fn test_successful_submission_records_history() {
    let mock = MockCalculationService::start(MockResponse::Success {
        radius_km: 1.2,
        num_sites: 8,
    })
    .await
    .unwrap();
    let mut session = session_for(&mock);

    let record = session.submit_form(&RawFormInput::default()).await.unwrap();
    assert_eq!(record.result.radius_km, 1.2);
    assert_eq!(record.result.num_sites, 8);

    let kpis = record.kpis();
    assert!((kpis.coverage_km2 - 4.5238934).abs() < 1e-6);
    assert_eq!(kpis.throughput_mbps, 1250.0);

    assert_eq!(session.history_len(), 1);
    assert!(!session.in_progress());
    assert!(session.last_error().is_none());
    assert_eq!(session.last_result().unwrap().radius_km, 1.2);

    let rows = session.comparison();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].label, "Simulation 1");
}

#[tokio::test]
async fn test_request_carries_wire_field_names() {
    let mock = MockCalculationService::start(MockResponse::Success {
        radius_km: 1.0,
        num_sites: 4,
    })
    .await
    .unwrap();
    let mut session = session_for(&mock);

    session.submit_form(&RawFormInput::default()).await.unwrap();

    let requests = mock.requests().await;
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_str(&requests[0]).unwrap();
    assert_eq!(body["propagation_model"], "OKUMURA_HATA");
    assert_eq!(body["environment"], "URBAN");
    assert_eq!(body["tx_power"], 43.0);
    assert_eq!(body["rx_sensitivity"], -100.0);
    assert_eq!(body["frequency"], 2600.0);
    assert_eq!(body["h_bs"], 30.0);
    assert_eq!(body["h_ue"], 1.5);
    assert_eq!(body["user_density"], 1000.0);
    assert_eq!(body["area_km2"], 10.0);
    assert_eq!(body["bandwidth"], 10.0);
}

#[tokio::test]
async fn test_http_error_leaves_history_untouched() {
    let mock = MockCalculationService::start(MockResponse::Status {
        code: 500,
        body: "calculation engine failure".to_string(),
    })
    .await
    .unwrap();
    let mut session = session_for(&mock);

    let err = session
        .submit_form(&RawFormInput::default())
        .await
        .unwrap_err();
    match err {
        SessionError::Calculation(CalculationError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "calculation engine failure");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    assert_eq!(session.history_len(), 0);
    assert!(!session.in_progress());
    assert!(session.last_result().is_none());
    assert!(session.last_error().is_some());
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let mock = MockCalculationService::start(MockResponse::Json("not json".to_string()))
        .await
        .unwrap();
    let mut session = session_for(&mock);

    let err = session
        .submit_form(&RawFormInput::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SessionError::Calculation(CalculationError::MalformedBody { .. })
    ));
    assert_eq!(session.history_len(), 0);
}

#[tokio::test]
async fn test_out_of_domain_radius_is_rejected() {
    let mock = MockCalculationService::start(MockResponse::Success {
        radius_km: 0.0,
        num_sites: 8,
    })
    .await
    .unwrap();
    let mut session = session_for(&mock);

    let err = session
        .submit_form(&RawFormInput::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SessionError::Calculation(CalculationError::InvalidRadius { .. })
    ));
    assert_eq!(session.history_len(), 0);
}

#[tokio::test]
async fn test_negative_site_count_is_rejected() {
    let mock = MockCalculationService::start(MockResponse::Success {
        radius_km: 1.2,
        num_sites: -3,
    })
    .await
    .unwrap();
    let mut session = session_for(&mock);

    let err = session
        .submit_form(&RawFormInput::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SessionError::Calculation(CalculationError::InvalidSiteCount { .. })
    ));
}

#[tokio::test]
async fn test_invalid_number_fails_before_network() {
    let mock = MockCalculationService::start(MockResponse::Success {
        radius_km: 1.2,
        num_sites: 8,
    })
    .await
    .unwrap();
    let mut session = session_for(&mock);

    let mut input = RawFormInput::default();
    input.tx_power = "abc".to_string();

    let err = session.submit_form(&input).await.unwrap_err();
    match err {
        SessionError::Parameter(ParameterError::InvalidNumber { field, value }) => {
            assert_eq!(field, "tx_power");
            assert_eq!(value, "abc");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // Rejected input never reaches the service
    assert!(mock.requests().await.is_empty());
    assert_eq!(session.history_len(), 0);
}

#[tokio::test]
async fn test_sequential_submissions_accumulate() {
    let mock = MockCalculationService::start(MockResponse::Success {
        radius_km: 1.2,
        num_sites: 8,
    })
    .await
    .unwrap();
    let mut session = session_for(&mock);

    session.submit_form(&RawFormInput::default()).await.unwrap();

    let mut input = session.form_input();
    input.bandwidth = "20".to_string();
    session.submit_form(&input).await.unwrap();

    assert_eq!(session.history_len(), 2);
    let rows = session.comparison();
    assert_eq!(rows[0].label, "Simulation 1");
    assert_eq!(rows[1].label, "Simulation 2");
    // Second run used the edited bandwidth
    assert_eq!(rows[1].throughput_mbps, 2500.0);

    // History ids stay strictly increasing
    let records = session.history();
    assert!(records[0].id < records[1].id);

    let overlay = session.map_overlay();
    assert_eq!(overlay.center, DAKAR);
    assert_eq!(overlay.radius_m, 1200.0);
    assert_eq!(overlay.popup_text, "Coverage radius: 1.2 km");
}

#[tokio::test]
async fn test_baseline_tracks_last_submission() {
    let mock = MockCalculationService::start(MockResponse::Status {
        code: 500,
        body: "boom".to_string(),
    })
    .await
    .unwrap();
    let mut session = session_for(&mock);

    let mut input = RawFormInput::default();
    input.tx_power = "46".to_string();
    let _ = session.submit_form(&input).await;

    // Even a failed calculation keeps the submitted values as the
    // editable baseline
    assert_eq!(session.form_input().tx_power, "46");
}
