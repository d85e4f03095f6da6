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

pub mod escape;
pub mod ir;
mod markup;
mod script;
mod style;

use crate::types::quiz::Quiz;

/// Export a quiz as a standalone interactive HTML document.
///
/// Total over any well-formed [`Quiz`]: missing optional fields are
/// defaulted, empty payloads render empty interactive regions, and unknown
/// question types render a placeholder. The result has no server dependency
/// beyond the CDN-hosted highlighting and Python runtime scripts.
pub fn generate_html(quiz: &Quiz) -> String {
    let doc = ir::lower(quiz);
    markup::render(&doc).into_string()
}
