use axum::{
    Extension, Router,
    routing::{delete, get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::coaches::use_cases::register_coach::inbound::http as register_coach_http;
use crate::modules::coaches::use_cases::remove_coach::inbound::http as remove_coach_http;
use crate::modules::coaches::use_cases::update_coach::inbound::http as update_coach_http;
use crate::modules::coaches::use_cases::view_coaches::inbound::http as view_coaches_http;
use crate::modules::courses::use_cases::cancel_meeting::inbound::http as cancel_meeting_http;
use crate::modules::courses::use_cases::course_roster::inbound::http as roster_http;
use crate::modules::courses::use_cases::create_course::inbound::http as create_course_http;
use crate::modules::courses::use_cases::delete_course::inbound::http as delete_course_http;
use crate::modules::courses::use_cases::enroll_student::inbound::http as enrollment_http;
use crate::modules::courses::use_cases::list_courses::inbound::http as list_courses_http;
use crate::modules::courses::use_cases::list_meetings::inbound::http as list_meetings_http;
use crate::modules::courses::use_cases::record_meeting::inbound::http as record_meeting_http;
use crate::modules::courses::use_cases::take_attendance::inbound::http as attendance_http;
use crate::modules::courses::use_cases::update_course::inbound::http as update_course_http;
use crate::modules::courses::use_cases::view_calendar::inbound::http as calendar_http;
use crate::modules::payments::use_cases::analyse_income::inbound::http as income_http;
use crate::modules::payments::use_cases::record_payment::inbound::http as payment_http;
use crate::modules::students::use_cases::delete_student::inbound::http as delete_student_http;
use crate::modules::students::use_cases::register_student::inbound::http as register_student_http;
use crate::modules::students::use_cases::update_student::inbound::http as update_student_http;
use crate::modules::students::use_cases::view_student::inbound::http as view_student_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route(
            "/api/courses",
            get(list_courses_http::handle_list).post(create_course_http::handle),
        )
        .route(
            "/api/courses/{id}",
            get(list_courses_http::handle_get)
                .put(update_course_http::handle)
                .delete(delete_course_http::handle),
        )
        .route("/api/courses/{id}/students", get(roster_http::handle))
        .route(
            "/api/courses/{id}/meetings",
            get(list_meetings_http::handle).post(record_meeting_http::handle),
        )
        .route("/api/meetings/{id}", delete(cancel_meeting_http::handle))
        .route(
            "/api/meetings/{id}/attendance",
            post(attendance_http::handle),
        )
        .route(
            "/api/students",
            get(view_student_http::handle_list).post(register_student_http::handle),
        )
        .route(
            "/api/students/{id}",
            get(view_student_http::handle_get)
                .put(update_student_http::handle)
                .delete(delete_student_http::handle),
        )
        .route(
            "/api/students/{id}/payments",
            get(view_student_http::handle_payments),
        )
        .route(
            "/api/students/{id}/courses",
            get(view_student_http::handle_courses),
        )
        .route(
            "/api/coaches",
            get(view_coaches_http::handle_list).post(register_coach_http::handle),
        )
        .route(
            "/api/coaches/{id}",
            get(view_coaches_http::handle_get)
                .put(update_coach_http::handle)
                .delete(remove_coach_http::handle),
        )
        .route(
            "/api/coaches/{id}/courses",
            get(view_coaches_http::handle_courses),
        )
        .route(
            "/api/enrollments",
            get(enrollment_http::handle_list).post(enrollment_http::handle),
        )
        .route("/api/enrollments/{id}", delete(enrollment_http::handle_delete))
        .route("/api/calendar/daily", get(calendar_http::handle_daily))
        .route("/api/calendar/weekly", get(calendar_http::handle_weekly))
        .route("/api/calendar/monthly", get(calendar_http::handle_monthly))
        .route(
            "/api/payments",
            get(payment_http::handle_list).post(payment_http::handle),
        )
        .route("/api/payments/{id}", delete(payment_http::handle_delete))
        .route(
            "/api/analysis/coach-income",
            get(income_http::handle_coach_income),
        )
        .route(
            "/api/analysis/course-income",
            get(income_http::handle_course_income),
        )
        .route("/api/analysis/summary", get(income_http::handle_summary))
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
