use axum::http::StatusCode;
use axum_test::{TestResponse, TestServer};
use scheduling_service::api::{create_router, AppState};
use serde_json::json;

fn setup_test_server() -> TestServer {
    let app = create_router(AppState::default());
    TestServer::new(app).unwrap()
}

fn doctor(id: &str, team_id: Option<&str>) -> serde_json::Value {
    match team_id {
        Some(team) => json!({
            "id": id,
            "name": id,
            "affiliation": { "kind": "in_team", "team_id": team },
        }),
        None => json!({
            "id": id,
            "name": id,
            "affiliation": { "kind": "floating" },
        }),
    }
}

fn floating_roster(count: usize) -> Vec<serde_json::Value> {
    (0..count)
        .map(|i| doctor(&format!("d{i}"), None))
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let test_server = setup_test_server();

    let response: TestResponse = test_server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_generate_schedule_assigns_shifts_for_a_floating_roster() {
    let test_server = setup_test_server();

    let request_body = json!({
        "month": 0,
        "year": 2026,
        "doctors": floating_roster(20),
        "teams": [],
        "shifts_per_day": 2,
        "shifts_per_night": 1,
        "leave_days": [],
        "national_holidays": [],
    });

    let response: TestResponse = test_server
        .post("/api/v1/engine/generate")
        .json(&request_body)
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let shifts = body["shifts"].as_array().unwrap();
    assert!(!shifts.is_empty());
    assert!(shifts.len() <= 31 * 3);
}

#[tokio::test]
async fn test_generate_schedule_rejects_a_doctor_referencing_an_unknown_team() {
    let test_server = setup_test_server();

    let request_body = json!({
        "month": 0,
        "year": 2026,
        "doctors": [doctor("d0", Some("ghost-team"))],
        "teams": [],
        "shifts_per_day": 1,
        "shifts_per_night": 1,
        "leave_days": [],
        "national_holidays": [],
    });

    let response: TestResponse = test_server
        .post("/api/v1/engine/generate")
        .json(&request_body)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_validate_leave_reports_feasible_plan() {
    let test_server = setup_test_server();

    let request_body = json!({
        "leave_days": [],
        "doctors": floating_roster(14),
        "month": 0,
        "year": 2026,
        "shifts_per_day": 4,
        "shifts_per_night": 2,
        "national_holidays": [],
    });

    let response: TestResponse = test_server
        .post("/api/v1/engine/validate-leave")
        .json(&request_body)
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["is_valid"], true);
}

#[tokio::test]
async fn test_possible_leave_days_returns_a_count() {
    let test_server = setup_test_server();

    let request_body = json!({
        "month": 0,
        "year": 2026,
        "doctor_count": 15,
        "shifts_per_day": 2,
        "shifts_per_night": 1,
        "national_holidays": [],
    });

    let response: TestResponse = test_server
        .post("/api/v1/engine/possible-leave-days")
        .json(&request_body)
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body["possible_leave_days"].is_number());
}

#[tokio::test]
async fn test_bridge_days_for_a_doctor_with_no_leave_is_empty() {
    let test_server = setup_test_server();

    let request_body = json!({
        "doctor_id": "d0",
        "leave_days": [],
        "month": 0,
        "year": 2026,
        "national_holidays": [],
    });

    let response: TestResponse = test_server
        .post("/api/v1/engine/bridge-days")
        .json(&request_body)
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body["bridge_days"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_working_days_counts_weekdays_for_january_2026() {
    let test_server = setup_test_server();

    let request_body = json!({
        "month": 0,
        "year": 2026,
        "national_holidays": [],
    });

    let response: TestResponse = test_server
        .post("/api/v1/engine/working-days")
        .json(&request_body)
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body["working_days"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn test_detect_conflicts_flags_an_understaffed_day() {
    let test_server = setup_test_server();

    let request_body = json!({
        "shifts": [
            { "doctor_id": "d0", "shift_date": "2026-01-05", "shift_type": "day" },
        ],
        "doctors": [doctor("d0", None)],
        "shifts_per_day": 2,
        "shifts_per_night": 1,
    });

    let response: TestResponse = test_server
        .post("/api/v1/engine/detect-conflicts")
        .json(&request_body)
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let conflicts = body["conflicts"].as_array().unwrap();
    assert!(conflicts.iter().any(|c| c["kind"] == "understaffed"));
}

#[tokio::test]
async fn test_detect_conflicts_rejects_a_malformed_date() {
    let test_server = setup_test_server();

    let request_body = json!({
        "shifts": [
            { "doctor_id": "d0", "shift_date": "not-a-date", "shift_type": "day" },
        ],
        "doctors": [doctor("d0", None)],
        "shifts_per_day": 1,
        "shifts_per_night": 1,
    });

    let response: TestResponse = test_server
        .post("/api/v1/engine/detect-conflicts")
        .json(&request_body)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
