#![cfg(feature = "http-server")]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{Duration, NaiveDate};
use std::sync::Arc;
use tower::ServiceExt;

use ali_rust::api::HistoricalRecord;
use ali_rust::config::AnalyticsSettings;
use ali_rust::data::FeatureStore;
use ali_rust::forecast::BaselinePredictor;
use ali_rust::http::{create_router, AppState};

fn test_state() -> AppState {
    let base = NaiveDate::from_ymd_opt(2025, 3, 3)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let records: Vec<HistoricalRecord> = (0..50)
        .map(|i| HistoricalRecord {
            timestamp: base + Duration::hours(i as i64),
            hour: (i % 24) as u8,
            day_of_week: ((i / 24) % 7) as u8,
            is_weekend: false,
            flights: 5,
            avg_passengers: 150.0,
            crowd: 60.0 + (i % 5) as f64,
        })
        .collect();
    let store = FeatureStore::from_records(records).unwrap();

    AppState::new(
        Arc::new(store),
        Arc::new(BaselinePredictor::default()),
        AnalyticsSettings::default(),
    )
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = create_router(test_state());
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["history_records"], 50);
}

#[tokio::test]
async fn test_forecast_returns_complete_response() {
    let app = create_router(test_state());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/forecast?flights_per_hour=6&avg_capacity=180&access_rate_pct=15")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["base_forecast"].as_array().unwrap().len(), 6);
    assert_eq!(json["adjusted_forecast"].as_array().unwrap().len(), 6);
    assert_eq!(json["schedule"]["flights_per_hour"], 6);

    let report = &json["report"];
    assert!(report["peak_crowd"].as_i64().unwrap() > 0);
    assert!(report["staffing"]["total"].is_number());
    assert_eq!(report["catering"].as_array().unwrap().len(), 6);
    assert!(report["sustainability"]["score"].as_f64().unwrap() <= 100.0);
    assert!(report["surge"].is_string());
}

#[tokio::test]
async fn test_forecast_defaults_when_no_query() {
    let app = create_router(test_state());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/forecast")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["schedule"]["flights_per_hour"], 6);
    assert_eq!(json["schedule"]["avg_capacity"], 180);
}

#[tokio::test]
async fn test_forecast_rejects_out_of_range_params() {
    let app = create_router(test_state());
    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/forecast?access_rate_pct=90")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_forecast_on_empty_store_reports_data_unavailable() {
    let store = FeatureStore::from_records(vec![]).unwrap();
    let state = AppState::new(
        Arc::new(store),
        Arc::new(BaselinePredictor::default()),
        AnalyticsSettings::default(),
    );

    let app = create_router(state);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/v1/forecast")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["code"], "DATA_UNAVAILABLE");
}
