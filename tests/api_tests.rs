//! API integration tests (in-process, seed data)

use std::time::Duration;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use medtrack_server::{api, config::AppConfig, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    api::create_router(AppState::new(AppConfig::default()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    send_raw(app, method, uri, body.map(|json| json.to_string())).await
}

async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<String>,
) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(text) => request
            .header("content-type", "application/json")
            .body(Body::from(text)),
        None => request.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app.clone().oneshot(request).await.expect("Failed to send request");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

fn ids(body: &Value) -> Vec<&str> {
    body.as_array()
        .expect("expected an array")
        .iter()
        .map(|v| v["id"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let (status, body) = get(&app, "/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body.get("data_source").is_none());

    let (status, body) = get(&app, "/api/v1/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["data_source"], "seed");
    assert_eq!(body["verification_delay_ms"], 1500);
}

#[tokio::test]
async fn test_ready_reports_configured_delay() {
    let mut config = AppConfig::default();
    config.verification.delay_ms = 250;
    let app = api::create_router(AppState::new(config));

    let (status, body) = get(&app, "/api/v1/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["verification_delay_ms"], 250);
}

#[tokio::test]
async fn test_list_equipment_unfiltered() {
    let (status, body) = get(&app(), "/api/v1/equipment").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 10);
    assert_eq!(body[1]["id"], "VEN-102");
    assert_eq!(body[1]["type"], "치료");
    assert_eq!(body[1]["status"], "사용중");
    assert_eq!(body[1]["lastUpdate"], "1분 전");
}

#[tokio::test]
async fn test_search_equipment_by_name() {
    // 인공호흡기, percent-encoded
    let uri = "/api/v1/equipment?q=%EC%9D%B8%EA%B3%B5%ED%98%B8%ED%9D%A1%EA%B8%B0";
    let (status, body) = get(&app(), uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["VEN-102"]);
}

#[tokio::test]
async fn test_search_equipment_by_type_and_department() {
    // type=치료&department=내과
    let uri = "/api/v1/equipment?type=%EC%B9%98%EB%A3%8C&department=%EB%82%B4%EA%B3%BC";
    let (status, body) = get(&app(), uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["VEN-102", "INF-304"]);
}

#[tokio::test]
async fn test_whitespace_selector_is_not_all() {
    let (status, body) = get(&app(), "/api/v1/equipment?type=%20%20").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());

    let (_, body) = get(&app(), "/api/v1/equipment?type=").await;
    assert_eq!(body.as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_equipment_filters_and_summary() {
    let app = app();
    let (status, body) = get(&app, "/api/v1/equipment/filters").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["types"][0], "ALL");
    assert_eq!(body["types"].as_array().unwrap().len(), 7);
    assert_eq!(
        body["departments"],
        json!(["ALL", "진단검사실", "내과", "영상의학과", "진료과", "응급실"])
    );

    let (status, body) = get(&app, "/api/v1/equipment/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "total": 10, "inUse": 6, "idle": 4, "lowBattery": 0 }));
}

#[tokio::test]
async fn test_floor_plan() {
    let (status, body) = get(&app(), "/api/v1/equipment/floor-plan?q=ECG").await;
    assert_eq!(status, StatusCode::OK);
    let wards = body.as_array().unwrap();
    assert_eq!(wards.len(), 5);
    assert_eq!(wards[0]["department"], "진단검사실");
    assert_eq!(ids(&wards[0]["equipment"]), vec!["ECG-001"]);
}

#[tokio::test]
async fn test_get_equipment_not_found() {
    let app = app();
    let (status, body) = get(&app, "/api/v1/equipment/XRA-708").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["battery"], 95);

    let (status, body) = get(&app, "/api/v1/equipment/NOPE-000").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchRecord");
}

#[tokio::test]
async fn test_usage_failed_filter_and_stats() {
    let app = app();
    let (status, body) = get(&app, "/api/v1/usage?status=FAILED").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["USG-006"]);
    assert_eq!(body[0]["blockchainHash"], "MODIFIED_HASH_12345678910");

    let (status, body) = get(&app, "/api/v1/usage/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "total": 6, "verifiedCount": 5, "failedCount": 1, "verificationRate": 83.3 })
    );
}

#[tokio::test]
async fn test_usage_unknown_status_is_empty() {
    let (status, body) = get(&app(), "/api/v1/usage?status=PENDING").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_usage_departments() {
    let (status, body) = get(&app(), "/api/v1/usage/departments").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["ALL", "내과", "영상의학과", "진단검사실", "진료과"]));
}

#[tokio::test]
async fn test_get_usage_record() {
    let (status, body) = get(&app(), "/api/v1/usage/USG-004").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["returnedAt"], Value::Null);
    assert_eq!(body["user"]["role"], "의사");
    assert_eq!(body["txIndex"], 13);
}

#[tokio::test(start_paused = true)]
async fn test_verification_lifecycle() {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/api/v1/usage/USG-003/verify", None).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["state"], "verifying");
    assert_eq!(body["recordId"], "USG-003");

    let (_, body) = get(&app, "/api/v1/verifications").await;
    assert_eq!(body, json!(["USG-003"]));

    tokio::time::sleep(Duration::from_millis(2000)).await;

    let (status, body) = get(&app, "/api/v1/usage/USG-003/verify").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["state"], "completed");
    assert_eq!(body["verified"], true);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_and_retain() {
    let app = app();
    send(&app, Method::POST, "/api/v1/usage/USG-005/verify", None).await;
    send(&app, Method::POST, "/api/v1/usage/USG-006/verify", None).await;
    send(&app, Method::POST, "/api/v1/usage/USG-007/verify", None).await;

    let (status, _) = send(&app, Method::DELETE, "/api/v1/usage/USG-005/verify", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/verifications/retain",
        Some(json!({ "visibleIds": ["USG-006"] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cancelled"], 1);

    tokio::time::sleep(Duration::from_millis(2000)).await;

    let (_, body) = get(&app, "/api/v1/usage/USG-005/verify").await;
    assert_eq!(body["state"], "idle");
    let (_, body) = get(&app, "/api/v1/usage/USG-006/verify").await;
    assert_eq!(body["state"], "completed");
    assert_eq!(body["verified"], false);
    let (_, body) = get(&app, "/api/v1/usage/USG-007/verify").await;
    assert_eq!(body["state"], "idle");
}

#[tokio::test]
async fn test_retain_rejects_malformed_body() {
    let app = app();
    let (status, body) = send_raw(
        &app,
        Method::POST,
        "/api/v1/verifications/retain",
        Some("{\"visibleIds\": [".to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
    assert_eq!(body["code"], 4);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/verifications/retain",
        Some(json!({ "visible": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_verify_unknown_record() {
    let (status, body) = send(&app(), Method::POST, "/api/v1/usage/USG-999/verify", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 1);
}

#[tokio::test]
async fn test_reader_registry() {
    let app = app();
    let (status, body) = get(&app, "/api/v1/readers/M501").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["location_name"], "M501호");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/readers",
        Some(json!({ "reader_id": "E100", "location_name": "응급실" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["is_active"], true);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/readers",
        Some(json!({ "reader_id": "M502", "location_name": "M502호" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Duplicate");

    let (_, body) = get(&app, "/api/v1/readers").await;
    let readers: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["reader_id"].as_str().unwrap())
        .collect();
    assert_eq!(readers, vec!["E100", "M501", "M502"]);

    let (status, _) = get(&app, "/api/v1/readers/Z999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_tag_registry() {
    let app = app();
    for (tag_id, name, serial) in [
        ("TAG-INF", "Infusion Pump", "SN-100"),
        ("TAG-VEN", "인공호흡기", "SN-200"),
    ] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/v1/tags",
            Some(json!({
                "tag_id": tag_id,
                "equipment_name": name,
                "equipment_type": "치료",
                "serial_number": serial
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/tags",
        Some(json!({
            "tag_id": "TAG-NEW",
            "equipment_name": "수액펌프",
            "equipment_type": "치료",
            "serial_number": "SN-100"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 3);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/tags",
        Some(json!({ "tag_id": "TAG-X", "equipment_name": "체온계" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");

    let (_, body) = get(&app, "/api/v1/tags").await;
    let tags: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["tag_id"].as_str().unwrap())
        .collect();
    assert_eq!(tags, vec!["TAG-VEN", "TAG-INF"]);

    let (_, body) = get(&app, "/api/v1/tags?q=PUMP").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["tag_id"], "TAG-INF");
}

#[tokio::test]
async fn test_openapi_document() {
    let (status, body) = get(&app(), "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "MedTrack API");
}
