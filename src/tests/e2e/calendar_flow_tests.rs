use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shell::http::router;
use crate::shell::state::AppState;

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(match body {
            Some(body) => Body::from(body.to_string()),
            None => Body::empty(),
        })
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

#[tokio::test]
async fn course_lifecycle_drives_the_calendar() {
    let app = router(AppState::in_memory());

    let (status, course) = send(
        &app,
        "POST",
        "/api/courses",
        Some(json!({
            "name": "Judo Juniors",
            "teacher": "Dana Levi",
            "start_date": "2025-07-01",
            "time": "17:30",
            "sessions_count": 8,
            "weekdays": "0,2"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(course["end_date"], "2025-07-29");
    let course_id = course["id"].as_str().unwrap().to_string();

    for (first_name, phone) in [("Noam", "050-1"), ("Maya", "050-2"), ("Ido", "050-3")] {
        let (status, student) = send(
            &app,
            "POST",
            "/api/students",
            Some(json!({
                "first_name": first_name,
                "fathers_name": "Levi",
                "phone": phone,
                "date_of_birth": "2015-05-14"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let (status, _) = send(
            &app,
            "POST",
            "/api/enrollments",
            Some(json!({ "course_id": course_id, "student_id": student["id"] })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, events) = send(
        &app,
        "GET",
        "/api/calendar/monthly?start_date=2025-07-01",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let remaining: Vec<_> = events
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["classes_remaining"].as_u64().unwrap())
        .collect();
    assert_eq!(remaining, vec![8, 7, 6, 5, 4, 3, 2, 1, 0]);
    assert!(
        events
            .as_array()
            .unwrap()
            .iter()
            .all(|e| e["enrolled_count"] == 3)
    );

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/courses/{course_id}"),
        Some(json!({ "weekdays": "2" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (_, week) = send(
        &app,
        "GET",
        "/api/calendar/weekly?start_date=2025-07-06",
        None,
    )
    .await;
    let dates: Vec<_> = week
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["date"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(dates, vec!["2025-07-08"]);

    let (status, _) = send(&app, "DELETE", &format!("/api/courses/{course_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, day) = send(&app, "GET", "/api/calendar/daily?date=2025-07-08", None).await;
    assert_eq!(day, json!([]));
    let (_, enrollments) = send(&app, "GET", "/api/enrollments", None).await;
    assert_eq!(enrollments, json!([]));
}
