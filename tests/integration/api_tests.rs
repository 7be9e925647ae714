//! API integration tests
//!
//! Drives the router in-process against the seeded in-memory registry with
//! the calendar pinned to 2024-12-03.

use std::{io::Cursor, sync::Arc};

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use calamine::{open_workbook_from_rs, Reader, Xlsx};
use chrono::NaiveDate;
use serde_json::{json, Value};
use tower::ServiceExt;

use firesafe_server::{
    api,
    clock::FixedClock,
    config::AppConfig,
    repository::{seed, Repository},
    AppState,
};

async fn app() -> Router {
    let repository = Repository::in_memory();
    seed::load(&repository).await.expect("Failed to load fixtures");
    let today = NaiveDate::from_ymd_opt(2024, 12, 3).unwrap();
    let state = AppState::new(AppConfig::default(), repository, Arc::new(FixedClock(today)));
    api::create_router(state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("Failed to send request");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, body)
}

fn extinguisher_submission() -> Value {
    json!({
        "checklist": {
            "accessibility": true,
            "visual_condition": true,
            "pressure_gauge": true,
            "safety_seal": true,
            "location_sign": false
        },
        "overall_condition": "good",
        "inspector_name": "John Smith",
        "notes": "Sign faded"
    })
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = send(app().await, get("/api/v1/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(app().await, get("/api/v1/ready")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_list_equipment_with_search() {
    let (status, body) = send(app().await, get("/api/v1/equipment?search=lobby")).await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["barcode"], "FE001234567890");

    let (_, body) = send(
        app().await,
        get("/api/v1/equipment?status=all&equipment_type=hydrant"),
    )
    .await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_equipment_by_barcode() {
    let (status, body) = send(app().await, get("/api/v1/equipment/barcode/FS007890123456")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["equipment"]["id"], "eq-007");
    assert_eq!(body["equipment"]["status"], "out_of_service");

    let (status, body) = send(app().await, get("/api/v1/equipment/barcode/NOPE")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 2);
    assert_eq!(body["error"], "NoSuchEquipment");
}

#[tokio::test]
async fn test_not_found_codes() {
    let (status, body) = send(app().await, get("/api/v1/inspections/insp-404")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3);

    let (status, body) = send(app().await, get("/api/v1/reports/bogus/export")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4);
}

#[tokio::test]
async fn test_register_equipment_past_calendar_end() {
    let (status, body) = send(
        app().await,
        post_json(
            "/api/v1/equipment",
            json!({
                "barcode": "FE-FARFUTURE",
                "equipment_type": "fire-extinguisher",
                "location": "Lobby",
                "installation_date": "+262142-12-20"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["missing"], json!(["installation_date"]));

    let (status, _) = send(app().await, get("/api/v1/equipment/barcode/FE-FARFUTURE")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_scan_resolution() {
    let (status, body) = send(
        app().await,
        post_json("/api/v1/scan", json!({"code": "FE001234567890", "purpose": "inspection"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["route"], "/inspection/checklist/eq-001");

    let (status, body) = send(
        app().await,
        post_json("/api/v1/scan", json!({"code": "UNKNOWN123"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["message"],
        "Equipment with barcode \"UNKNOWN123\" not found in database."
    );
}

#[tokio::test]
async fn test_checklist_for_type() {
    let (status, body) = send(
        app().await,
        get("/api/v1/equipment-types/fire-extinguisher/checklist"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"].as_array().unwrap().len(), 6);

    let (status, _) = send(app().await, get("/api/v1/equipment-types/sprinkler/checklist")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_complete_inspection() {
    let app = app().await;

    let (status, body) = send(
        app.clone(),
        post_json("/api/v1/equipment/eq-001/inspections", extinguisher_submission()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["equipment"]["status"], "operational");
    assert_eq!(body["equipment"]["last_inspection_date"], "2024-12-03");
    assert_eq!(body["equipment"]["next_inspection_date"], "2025-01-02");
    assert_eq!(body["inspection"]["result"], "passed");
    assert_eq!(body["inspection"]["score"], 80);

    let (_, history) = send(app, get("/api/v1/equipment/eq-001/inspections")).await;
    assert_eq!(history.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_incomplete_inspection_is_rejected() {
    let app = app().await;
    let submission = json!({
        "checklist": {"accessibility": true},
        "overall_condition": "good",
        "inspector_name": "John Smith"
    });

    let (status, body) = send(
        app.clone(),
        post_json("/api/v1/equipment/eq-001/inspections/validate", submission.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valid"], false);

    let (status, body) = send(
        app.clone(),
        post_json("/api/v1/equipment/eq-001/inspections", submission),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let missing = body["missing"].as_array().unwrap();
    assert!(missing.contains(&json!("safety_seal")));

    let (_, history) = send(app, get("/api/v1/equipment/eq-001/inspections")).await;
    assert_eq!(history.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_schedule_filters_on_due_state() {
    let (status, body) = send(app().await, get("/api/v1/schedule?status=overdue")).await;
    assert_eq!(status, StatusCode::OK);
    let entries = body.as_array().unwrap();
    assert!(entries.iter().all(|e| e["due_state"] == "overdue"));
    assert!(entries.iter().any(|e| e["equipment"]["id"] == "eq-006"));
}

#[tokio::test]
async fn test_stats() {
    let (status, body) = send(app().await, get("/api/v1/stats")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["equipment"]["total"], 7);
    assert_eq!(body["trends"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_export_inspections_as_csv() {
    let response = app()
        .await
        .oneshot(get("/api/v1/inspections/export?format=csv"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert!(headers[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/csv"));
    assert_eq!(
        headers[header::CONTENT_DISPOSITION],
        "attachment; filename=\"fire-safety-inspections-2024-12-03.csv\""
    );
    assert_eq!(headers["x-sheet-name"], "Inspections");

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.starts_with("Equipment ID,Type,Location,Inspector,Date,Result,Score\n"));
}

#[tokio::test]
async fn test_export_inspections_defaults_to_workbook() {
    let response = app()
        .await
        .oneshot(get("/api/v1/inspections/export"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"fire-safety-inspections-2024-12-03.xlsx\""
    );

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes.to_vec())).unwrap();
    assert_eq!(workbook.sheet_names(), vec!["Inspections".to_string()]);
    let range = workbook.worksheet_range("Inspections").unwrap();
    assert_eq!(range.height(), 5);
    assert_eq!(
        range.get_value((0, 0)).map(|c| c.to_string()),
        Some("Equipment ID".to_string())
    );

    let response = app()
        .await
        .oneshot(get("/api/v1/inspections/export?format=pdf"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_reports() {
    let (status, body) = send(app().await, get("/api/v1/reports?kind=inventory")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let response = app()
        .await
        .oneshot(get("/api/v1/reports/inventory/export"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"equipment-inventory-report-2024-12-03.xlsx\""
    );

    let response = app()
        .await
        .oneshot(get("/api/v1/reports/critical/export?format=csv"))
        .await
        .unwrap();
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"critical-issues-report-2024-12-03.csv\""
    );

    let (status, _) = send(app().await, get("/api/v1/reports/bogus/export")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_inspection_report_document() {
    let app = app().await;
    let (_, inspections) = send(app.clone(), get("/api/v1/inspections?search=FE001")).await;
    let id = inspections[0]["inspection"]["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(get(&format!("/api/v1/inspections/{}/report", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"inspection-report-FE001234567890-2024-11-01.json\""
    );
}
