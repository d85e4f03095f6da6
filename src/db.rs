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

use rusqlite::Connection;
use rusqlite::OptionalExtension;
use rusqlite::params;

use crate::error::Fallible;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS quizzes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    content TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
";

/// A stored quiz record. `content` is the JSON-encoded quiz; it is validated
/// against the model at the API boundary, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizRecord {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(path: &str) -> Fallible<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(Database { conn })
    }

    pub fn open_in_memory() -> Fallible<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Database { conn })
    }

    pub fn create_quiz(&self, title: &str, description: &str, content: &str) -> Fallible<i64> {
        let now = now();
        self.conn.execute(
            "INSERT INTO quizzes (title, description, content, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?4)",
            params![title, description, content, now],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_quiz(&self, id: i64) -> Fallible<Option<QuizRecord>> {
        let record = self
            .conn
            .query_row(
                "SELECT id, title, description, content, created_at, updated_at
                 FROM quizzes WHERE id = ?1",
                params![id],
                |row| {
                    Ok(QuizRecord {
                        id: row.get(0)?,
                        title: row.get(1)?,
                        description: row.get(2)?,
                        content: row.get(3)?,
                        created_at: row.get(4)?,
                        updated_at: row.get(5)?,
                    })
                },
            )
            .optional()?;
        Ok(record)
    }

    pub fn list_quizzes(&self) -> Fallible<Vec<QuizRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, description, content, created_at, updated_at
             FROM quizzes ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(QuizRecord {
                id: row.get(0)?,
                title: row.get(1)?,
                description: row.get(2)?,
                content: row.get(3)?,
                created_at: row.get(4)?,
                updated_at: row.get(5)?,
            })
        })?;
        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    /// Returns false if no quiz has that id.
    pub fn update_quiz(
        &self,
        id: i64,
        title: &str,
        description: &str,
        content: &str,
    ) -> Fallible<bool> {
        let changed = self.conn.execute(
            "UPDATE quizzes SET title = ?2, description = ?3, content = ?4, updated_at = ?5
             WHERE id = ?1",
            params![id, title, description, content, now()],
        )?;
        Ok(changed > 0)
    }

    /// Returns false if no quiz has that id.
    pub fn delete_quiz(&self, id: i64) -> Fallible<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM quizzes WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }
}

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}
