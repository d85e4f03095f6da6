// Copyright 2025 The quizsmith authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::Json;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::response::IntoResponse;
use axum::response::Response;
use quizsmith_core::Quiz;
use quizsmith_core::generate_html;
use serde::Deserialize;
use serde::Serialize;

use crate::cmd::serve::server::ServerState;
use crate::db::QuizRecord;

#[derive(Deserialize)]
pub struct QuizPayload {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// JSON-encoded quiz content; validated against the model before any
    /// write.
    pub content: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuizSummary {
    id: i64,
    title: String,
    description: String,
    updated_at: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuizResponse {
    id: i64,
    title: String,
    description: String,
    content: String,
    created_at: String,
    updated_at: String,
}

impl From<QuizRecord> for QuizResponse {
    fn from(record: QuizRecord) -> Self {
        QuizResponse {
            id: record.id,
            title: record.title,
            description: record.description,
            content: record.content,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

fn internal_error(e: impl std::fmt::Display) -> Response {
    log::error!("{e}");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
}

/// Parse and validate quiz content. Returns a human-readable message on
/// failure, surfaced as a 400.
fn validate_content(content: &str) -> Result<Quiz, String> {
    let quiz: Quiz =
        serde_json::from_str(content).map_err(|e| format!("invalid quiz content: {e}"))?;
    if !quiz.orders_are_contiguous() {
        return Err("question order values must form a contiguous sequence 1..N".to_string());
    }
    Ok(quiz)
}

pub async fn list_quizzes_handler(State(state): State<ServerState>) -> Response {
    let db = state.db.lock().unwrap();
    match db.list_quizzes() {
        Ok(records) => {
            let summaries: Vec<QuizSummary> = records
                .into_iter()
                .map(|r| QuizSummary {
                    id: r.id,
                    title: r.title,
                    description: r.description,
                    updated_at: r.updated_at,
                })
                .collect();
            Json(summaries).into_response()
        }
        Err(e) => internal_error(e),
    }
}

pub async fn create_quiz_handler(
    State(state): State<ServerState>,
    Json(payload): Json<QuizPayload>,
) -> Response {
    if let Err(message) = validate_content(&payload.content) {
        return error_response(StatusCode::BAD_REQUEST, message);
    }
    let db = state.db.lock().unwrap();
    let id = match db.create_quiz(&payload.title, &payload.description, &payload.content) {
        Ok(id) => id,
        Err(e) => return internal_error(e),
    };
    match db.get_quiz(id) {
        Ok(Some(record)) => {
            (StatusCode::CREATED, Json(QuizResponse::from(record))).into_response()
        }
        Ok(None) => internal_error("created quiz not found"),
        Err(e) => internal_error(e),
    }
}

pub async fn get_quiz_handler(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Response {
    let db = state.db.lock().unwrap();
    match db.get_quiz(id) {
        Ok(Some(record)) => Json(QuizResponse::from(record)).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, format!("no quiz with id {id}")),
        Err(e) => internal_error(e),
    }
}

pub async fn update_quiz_handler(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<QuizPayload>,
) -> Response {
    if let Err(message) = validate_content(&payload.content) {
        return error_response(StatusCode::BAD_REQUEST, message);
    }
    let db = state.db.lock().unwrap();
    match db.update_quiz(id, &payload.title, &payload.description, &payload.content) {
        Ok(true) => match db.get_quiz(id) {
            Ok(Some(record)) => Json(QuizResponse::from(record)).into_response(),
            Ok(None) => internal_error("updated quiz not found"),
            Err(e) => internal_error(e),
        },
        Ok(false) => error_response(StatusCode::NOT_FOUND, format!("no quiz with id {id}")),
        Err(e) => internal_error(e),
    }
}

pub async fn delete_quiz_handler(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Response {
    let db = state.db.lock().unwrap();
    match db.delete_quiz(id) {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => error_response(StatusCode::NOT_FOUND, format!("no quiz with id {id}")),
        Err(e) => internal_error(e),
    }
}

/// Serve the standalone HTML export for a stored quiz.
pub async fn export_quiz_handler(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> Response {
    let db = state.db.lock().unwrap();
    let record = match db.get_quiz(id) {
        Ok(Some(record)) => record,
        Ok(None) => return error_response(StatusCode::NOT_FOUND, format!("no quiz with id {id}")),
        Err(e) => return internal_error(e),
    };
    // Stored content passed validation on write, but guard anyway.
    match serde_json::from_str::<Quiz>(&record.content) {
        Ok(quiz) => Html(generate_html(&quiz)).into_response(),
        Err(e) => internal_error(format!("stored content for quiz {id} is invalid: {e}")),
    }
}

pub async fn not_found_handler() -> Response {
    (StatusCode::NOT_FOUND, Html("Not Found".to_string())).into_response()
}
