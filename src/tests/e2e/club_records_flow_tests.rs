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

async fn register_student(app: &Router, first_name: &str, phone: &str) -> String {
    let (status, student) = send(
        app,
        "POST",
        "/api/students",
        Some(json!({
            "first_name": first_name,
            "fathers_name": "Cohen",
            "phone": phone,
            "date_of_birth": "2014-03-02"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    student["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn students_meetings_and_payments_follow_the_roster() {
    let app = router(AppState::in_memory());

    let (status, coach) = send(
        &app,
        "POST",
        "/api/coaches",
        Some(json!({ "first_name": "Dana", "last_name": "Levi", "phone": "052-1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, course) = send(
        &app,
        "POST",
        "/api/courses",
        Some(json!({
            "name": "Judo Juniors",
            "teacher": coach["full_name"],
            "start_date": "2025-07-01",
            "time": "17:30",
            "sessions_count": 8,
            "weekdays": "0,2"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let course_id = course["id"].as_str().unwrap().to_string();
    let coach_id = coach["id"].as_str().unwrap();
    let (_, taught) = send(&app, "GET", &format!("/api/coaches/{coach_id}/courses"), None).await;
    assert_eq!(taught[0]["id"], course_id.as_str());

    let noam = register_student(&app, "Noam", "050-1").await;
    let maya = register_student(&app, "Maya", "050-2").await;
    for student_id in [&noam, &maya] {
        let (status, _) = send(
            &app,
            "POST",
            "/api/enrollments",
            Some(json!({ "course_id": course_id, "student_id": student_id })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }
    let roster_uri = format!("/api/courses/{course_id}/students");
    let (_, roster) = send(&app, "GET", &roster_uri, None).await;
    assert_eq!(roster.as_array().unwrap().len(), 2);

    let (status, meeting) = send(
        &app,
        "POST",
        &format!("/api/courses/{course_id}/meetings"),
        Some(json!({ "date": "2025-07-01", "notes": "falls", "attendance": [noam] })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let meeting_id = meeting["id"].as_str().unwrap().to_string();
    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/meetings/{meeting_id}/attendance"),
        Some(json!({ "attendance": [{ "student_id": maya, "present": true }] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let meetings_uri = format!("/api/courses/{course_id}/meetings");
    let (_, meetings) = send(&app, "GET", &meetings_uri, None).await;
    let sheet = meetings[0]["attendance"].as_array().unwrap();
    assert_eq!(sheet.len(), 2);
    assert!(sheet.iter().all(|entry| entry["present"] == true));
    assert!(sheet.iter().any(|entry| entry["student_name"] == "Maya Cohen"));

    let (status, payment) = send(
        &app,
        "POST",
        "/api/payments",
        Some(json!({
            "student_id": noam,
            "course_id": course_id,
            "month": "2025-07",
            "amount": 250,
            "payment_date": "2025-07-02",
            "payment_method": "cheque"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(payment["payment_method"], "cash");
    let (_, paid) = send(&app, "GET", &format!("/api/students/{noam}/payments"), None).await;
    assert_eq!(paid.as_array().unwrap().len(), 1);
    let courses_uri = format!("/api/students/{noam}/courses");
    let (_, enrolled_in) = send(&app, "GET", &courses_uri, None).await;
    assert_eq!(enrolled_in[0]["name"], "Judo Juniors");

    let (status, _) = send(&app, "DELETE", &format!("/api/students/{noam}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, roster) = send(&app, "GET", &roster_uri, None).await;
    assert_eq!(roster.as_array().unwrap().len(), 1);
    assert_eq!(roster[0]["id"], maya.as_str());
    let (_, meetings) = send(&app, "GET", &meetings_uri, None).await;
    assert_eq!(meetings[0]["attendance"].as_array().unwrap().len(), 1);
    let (_, payments) = send(&app, "GET", "/api/payments", None).await;
    assert_eq!(payments, json!([]));

    let (status, _) = send(&app, "DELETE", &format!("/api/meetings/{meeting_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, meetings) = send(&app, "GET", &meetings_uri, None).await;
    assert_eq!(meetings, json!([]));
}
