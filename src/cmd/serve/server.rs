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

use std::sync::Arc;
use std::sync::Mutex;

use axum::Router;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use tokio::net::TcpListener;
use tokio::signal;

use crate::cmd::serve::api::create_quiz_handler;
use crate::cmd::serve::api::delete_quiz_handler;
use crate::cmd::serve::api::export_quiz_handler;
use crate::cmd::serve::api::get_quiz_handler;
use crate::cmd::serve::api::list_quizzes_handler;
use crate::cmd::serve::api::not_found_handler;
use crate::cmd::serve::api::update_quiz_handler;
use crate::db::Database;
use crate::error::Fallible;

pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Path to the SQLite database. None means an in-memory database, used
    /// by the tests.
    pub database: Option<String>,
}

#[derive(Clone)]
pub struct ServerState {
    pub db: Arc<Mutex<Database>>,
}

pub async fn start_server(config: ServerConfig) -> Fallible<()> {
    let db = match &config.database {
        Some(path) => Database::open(path)?,
        None => Database::open_in_memory()?,
    };
    let state = ServerState {
        db: Arc::new(Mutex::new(db)),
    };
    let app = Router::new();
    let app = app.route("/api/quizzes", get(list_quizzes_handler));
    let app = app.route("/api/quizzes", post(create_quiz_handler));
    let app = app.route("/api/quizzes/{id}", get(get_quiz_handler));
    let app = app.route("/api/quizzes/{id}", put(update_quiz_handler));
    let app = app.route("/api/quizzes/{id}", delete(delete_quiz_handler));
    let app = app.route("/quizzes/{id}/export", get(export_quiz_handler));
    let app = app.fallback(not_found_handler);
    let app = app.with_state(state);
    let bind = format!("{}:{}", config.host, config.port);

    log::debug!("Starting server on {bind}");
    let listener = TcpListener::bind(bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    log::debug!("Received Ctrl+C, shutting down gracefully");
}
