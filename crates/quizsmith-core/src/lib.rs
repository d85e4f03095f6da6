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

//! quizsmith-core: quiz model and standalone HTML exporter.
//!
//! This library provides:
//! - The quiz/question data model (tagged question variants, ordered lists)
//! - Mutation operations that keep question ordering contiguous
//! - The exporter: quiz → intermediate representation → standalone HTML

pub mod error;
pub mod export;
pub mod markdown;
pub mod types;

// Re-exports for convenience
pub use error::{ErrorReport, Fallible, fail};
pub use export::generate_html;
pub use types::question::{Question, QuestionBody, QuestionType};
pub use types::quiz::Quiz;
pub use types::theme::{ButtonStyle, Theme};
