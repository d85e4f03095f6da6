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

mod api;
pub mod server;

#[cfg(test)]
mod tests {
    use portpicker::pick_unused_port;
    use reqwest::StatusCode;
    use serde_json::json;
    use tempfile::tempdir;
    use tokio::spawn;

    use crate::cmd::serve::server::ServerConfig;
    use crate::cmd::serve::server::start_server;
    use crate::error::Fallible;
    use crate::utils::wait_for_server;

    const TEST_HOST: &str = "127.0.0.1";

    async fn start_test_server(database: Option<String>) -> Fallible<u16> {
        let port = pick_unused_port().unwrap();
        let config = ServerConfig {
            host: TEST_HOST.to_string(),
            port,
            database,
        };
        spawn(async move { start_server(config).await });
        wait_for_server(TEST_HOST, port).await?;
        Ok(port)
    }

    fn quiz_content(title: &str) -> String {
        json!({
            "title": title,
            "questions": [
                {
                    "id": 1,
                    "title": "Pick one",
                    "order": 1,
                    "type": "single-choice",
                    "options": [
                        {"text": "yes", "isCorrect": true},
                        {"text": "no", "isCorrect": false}
                    ]
                }
            ]
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_crud_roundtrip() -> Fallible<()> {
        let port = start_test_server(None).await?;
        let base = format!("http://{TEST_HOST}:{port}");
        let client = reqwest::Client::new();

        // Initially empty.
        let response = reqwest::get(format!("{base}/api/quizzes")).await?;
        assert!(response.status().is_success());
        let list: serde_json::Value = response.json().await?;
        assert_eq!(list.as_array().unwrap().len(), 0);

        // Create.
        let response = client
            .post(format!("{base}/api/quizzes"))
            .json(&json!({
                "title": "Loops",
                "description": "Intro to loops",
                "content": quiz_content("Loops"),
            }))
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created: serde_json::Value = response.json().await?;
        let id = created["id"].as_i64().unwrap();
        assert_eq!(created["title"], "Loops");

        // List has one entry.
        let response = reqwest::get(format!("{base}/api/quizzes")).await?;
        let list: serde_json::Value = response.json().await?;
        assert_eq!(list.as_array().unwrap().len(), 1);
        assert_eq!(list[0]["title"], "Loops");

        // Get by id.
        let response = reqwest::get(format!("{base}/api/quizzes/{id}")).await?;
        assert!(response.status().is_success());
        let fetched: serde_json::Value = response.json().await?;
        assert_eq!(fetched["description"], "Intro to loops");

        // Update.
        let response = client
            .put(format!("{base}/api/quizzes/{id}"))
            .json(&json!({
                "title": "Loops, revised",
                "description": "",
                "content": quiz_content("Loops, revised"),
            }))
            .send()
            .await?;
        assert!(response.status().is_success());
        let updated: serde_json::Value = response.json().await?;
        assert_eq!(updated["title"], "Loops, revised");

        // Delete.
        let response = client
            .delete(format!("{base}/api/quizzes/{id}"))
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        let response = reqwest::get(format!("{base}/api/quizzes/{id}")).await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_with_malformed_content_is_rejected() -> Fallible<()> {
        let port = start_test_server(None).await?;
        let client = reqwest::Client::new();
        let response = client
            .post(format!("http://{TEST_HOST}:{port}/api/quizzes"))
            .json(&json!({
                "title": "Broken",
                "content": "this is not json",
            }))
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json().await?;
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .contains("invalid quiz content")
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_create_with_gapped_order_is_rejected() -> Fallible<()> {
        let port = start_test_server(None).await?;
        let client = reqwest::Client::new();
        let content = json!({
            "title": "Gapped",
            "questions": [
                {"id": 1, "title": "a", "order": 1, "type": "text"},
                {"id": 2, "title": "b", "order": 3, "type": "text"}
            ]
        })
        .to_string();
        let response = client
            .post(format!("http://{TEST_HOST}:{port}/api/quizzes"))
            .json(&json!({"title": "Gapped", "content": content}))
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        Ok(())
    }

    #[tokio::test]
    async fn test_not_found_routes() -> Fallible<()> {
        let port = start_test_server(None).await?;
        let base = format!("http://{TEST_HOST}:{port}");
        let response = reqwest::get(format!("{base}/api/quizzes/999")).await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let response = reqwest::get(format!("{base}/herp-derp")).await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let response = reqwest::Client::new()
            .delete(format!("{base}/api/quizzes/999"))
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        Ok(())
    }

    #[tokio::test]
    async fn test_export_endpoint_escapes_author_text() -> Fallible<()> {
        let port = start_test_server(None).await?;
        let base = format!("http://{TEST_HOST}:{port}");
        let client = reqwest::Client::new();
        let response = client
            .post(format!("{base}/api/quizzes"))
            .json(&json!({
                "title": "XSS check",
                "content": quiz_content("<b>Loops</b>"),
            }))
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created: serde_json::Value = response.json().await?;
        let id = created["id"].as_i64().unwrap();

        let response = reqwest::get(format!("{base}/quizzes/{id}/export")).await?;
        assert!(response.status().is_success());
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/html; charset=utf-8"
        );
        let html = response.text().await?;
        assert!(html.contains("&lt;b&gt;Loops&lt;/b&gt;"));
        assert!(!html.contains("<b>Loops</b>"));
        assert!(html.contains("data-correct=\"true\""));
        Ok(())
    }

    #[tokio::test]
    async fn test_database_file_persists_across_requests() -> Fallible<()> {
        let dir = tempdir()?;
        let db_path = dir.path().join("quizzes.db").display().to_string();
        let port = start_test_server(Some(db_path)).await?;
        let base = format!("http://{TEST_HOST}:{port}");
        let client = reqwest::Client::new();
        let response = client
            .post(format!("{base}/api/quizzes"))
            .json(&json!({"title": "Persisted", "content": quiz_content("Persisted")}))
            .send()
            .await?;
        assert_eq!(response.status(), StatusCode::CREATED);
        let response = reqwest::get(format!("{base}/api/quizzes")).await?;
        let list: serde_json::Value = response.json().await?;
        assert_eq!(list.as_array().unwrap().len(), 1);
        Ok(())
    }
}
