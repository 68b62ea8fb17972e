//! JSON endpoints. List-shaped payloads come back as `{"data": [...]}`;
//! errors map to status codes here and nowhere else.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use super::AppState;
use crate::matcher;
use crate::models::{JoinRequest, NewSection, ScheduleUpdate, SectionView, Student};
use crate::overlap::Policy;
use crate::schedule::Schedule;
use crate::store::StoreError;

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

fn store_error(err: StoreError) -> Response {
    let status = match err {
        StoreError::UnknownSection(_) | StoreError::UnknownStudent(_) => StatusCode::NOT_FOUND,
        StoreError::SectionFull { .. } => StatusCode::CONFLICT,
        StoreError::InvalidSlot(_) => StatusCode::UNPROCESSABLE_ENTITY,
    };
    error_response(status, err.to_string())
}

fn unknown_section(passcode: &str) -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        format!("unknown section passcode '{passcode}'"),
    )
}

pub(crate) async fn create_section(
    State(state): State<AppState>,
    Json(new): Json<NewSection>,
) -> Response {
    let name = new.section_name.clone();
    let passcode = state.store.create(new);
    info!("Created section '{}' with passcode {}", name, passcode);
    (StatusCode::CREATED, Json(json!({ "passcode": passcode }))).into_response()
}

pub(crate) async fn view_section(
    State(state): State<AppState>,
    Path(passcode): Path<String>,
) -> Response {
    match state.store.snapshot(&passcode) {
        Some(section) => Json(SectionView::from(&section)).into_response(),
        None => unknown_section(&passcode),
    }
}

pub(crate) async fn verify_passcode(
    State(state): State<AppState>,
    Path(passcode): Path<String>,
) -> Response {
    Json(json!({ "result": state.store.verify(&passcode) })).into_response()
}

pub(crate) async fn join_section(
    State(state): State<AppState>,
    Path(passcode): Path<String>,
    Json(req): Json<JoinRequest>,
) -> Response {
    let schedule = match Schedule::from_tokens(&req.schedule) {
        Ok(s) => s,
        Err(e) => return error_response(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
    };
    let student = Student {
        display_name: req.display_name,
        contact_details: req.contact_details,
        schedule,
    };
    match state.store.join(&passcode, student) {
        Ok(student_id) => {
            info!("Student {} joined section {}", student_id, passcode);
            (StatusCode::CREATED, Json(json!({ "student_id": student_id }))).into_response()
        }
        Err(e) => store_error(e),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct StudentListQuery {
    /// Only list members with a position below this one.
    before: Option<usize>,
}

pub(crate) async fn student_list(
    State(state): State<AppState>,
    Path(passcode): Path<String>,
    Query(query): Query<StudentListQuery>,
) -> Response {
    let Some(section) = state.store.snapshot(&passcode) else {
        return unknown_section(&passcode);
    };
    let end = query
        .before
        .unwrap_or(section.students.len())
        .min(section.students.len());
    let names: Vec<&str> = section.students[..end]
        .iter()
        .map(|s| s.display_name.as_str())
        .collect();
    Json(json!({ "data": names })).into_response()
}

pub(crate) async fn view_schedule(
    State(state): State<AppState>,
    Path((passcode, student_id)): Path<(String, usize)>,
) -> Response {
    let Some(section) = state.store.snapshot(&passcode) else {
        return unknown_section(&passcode);
    };
    match section.students.get(student_id) {
        Some(student) => {
            Json(json!({ "schedule": student.schedule.to_tokens() })).into_response()
        }
        None => error_response(
            StatusCode::NOT_FOUND,
            format!("no student at position {student_id}"),
        ),
    }
}

pub(crate) async fn update_schedule(
    State(state): State<AppState>,
    Path((passcode, student_id)): Path<(String, usize)>,
    Json(update): Json<ScheduleUpdate>,
) -> Response {
    match state
        .store
        .replace_schedule(&passcode, student_id, &update.schedule)
    {
        Ok(()) => Json(json!({ "result": "success" })).into_response(),
        Err(e) => store_error(e),
    }
}

pub(crate) async fn group_cumulative(
    State(state): State<AppState>,
    Path((passcode, student_id)): Path<(String, usize)>,
) -> Response {
    ranked(&state, &passcode, student_id, Policy::Cumulative)
}

pub(crate) async fn group_consecutive(
    State(state): State<AppState>,
    Path((passcode, student_id)): Path<(String, usize)>,
) -> Response {
    ranked(&state, &passcode, student_id, Policy::Consecutive)
}

fn ranked(state: &AppState, passcode: &str, student_id: usize, policy: Policy) -> Response {
    let Some(section) = state.store.snapshot(passcode) else {
        return unknown_section(passcode);
    };
    match matcher::rank_by_overlap(&section, student_id, policy) {
        Ok(matches) => Json(json!({ "data": matches })).into_response(),
        Err(e) => error_response(StatusCode::NOT_FOUND, e.to_string()),
    }
}
