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

use serde::Deserialize;
use serde::Serialize;

use crate::types::question::Question;
use crate::types::question::QuestionType;
use crate::types::theme::Theme;

/// A quiz and its ordered questions.
///
/// Invariant: `questions[i].order == i + 1` for all i. Every mutation below
/// preserves this; deserialized quizzes are renormalized on load by callers
/// that care (the exporter tolerates any ordering).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Quiz {
    pub id: u64,
    pub title: String,
    /// Markdown, rendered above the questions in the export.
    pub description: String,
    pub questions: Vec<Question>,
    /// Quiz-level countdown in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<u32>,
    pub hide_footer: bool,
    /// Visual theme; absent means the default theme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Theme>,
    /// Default highlighting language for code payloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Show one question at a time with next/previous navigation.
    pub step_by_step: bool,
    /// In step-by-step mode, require a correct answer before advancing.
    pub require_correct_answer: bool,
}

impl Quiz {
    pub fn new(title: impl Into<String>) -> Self {
        Quiz {
            title: title.into(),
            ..Quiz::default()
        }
    }

    /// Append a question of the given type, seeded with sample payload.
    /// Returns the id of the new question.
    pub fn add_question(&mut self, qtype: QuestionType) -> u64 {
        let id = self
            .questions
            .iter()
            .map(|q| q.id)
            .max()
            .map(|max| max + 1)
            .unwrap_or(1);
        let order = self.questions.len() as u32 + 1;
        self.questions.push(Question::with_defaults(qtype, id, order));
        id
    }

    /// Update a question in place. Returns false if no question has that id.
    pub fn update_question(&mut self, id: u64, f: impl FnOnce(&mut Question)) -> bool {
        match self.questions.iter_mut().find(|q| q.id == id) {
            Some(question) => {
                f(question);
                true
            }
            None => false,
        }
    }

    /// Delete a question by id and renumber the rest. Returns false if no
    /// question has that id.
    pub fn delete_question(&mut self, id: u64) -> bool {
        let before = self.questions.len();
        self.questions.retain(|q| q.id != id);
        if self.questions.len() == before {
            return false;
        }
        self.renumber();
        true
    }

    /// Swap a question with its predecessor. No-op at the top.
    pub fn move_question_up(&mut self, id: u64) -> bool {
        match self.questions.iter().position(|q| q.id == id) {
            Some(0) | None => false,
            Some(idx) => {
                self.questions.swap(idx - 1, idx);
                self.renumber();
                true
            }
        }
    }

    /// Swap a question with its successor. No-op at the bottom.
    pub fn move_question_down(&mut self, id: u64) -> bool {
        match self.questions.iter().position(|q| q.id == id) {
            Some(idx) if idx + 1 < self.questions.len() => {
                self.questions.swap(idx, idx + 1);
                self.renumber();
                true
            }
            _ => false,
        }
    }

    /// Rewrite `order` values to the contiguous sequence 1..N.
    pub fn renumber(&mut self) {
        for (idx, question) in self.questions.iter_mut().enumerate() {
            question.order = idx as u32 + 1;
        }
    }

    /// Check the order-contiguity invariant.
    pub fn orders_are_contiguous(&self) -> bool {
        self.questions
            .iter()
            .enumerate()
            .all(|(idx, q)| q.order == idx as u32 + 1)
    }
}
