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

use serde::Serialize;

use crate::export::ir::QuizDoc;

/// The per-quiz values the static client script reads. Everything else it
/// needs (answers, positions, flags) rides on data attributes in the markup.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScriptConfig {
    time_limit: Option<u32>,
    step_by_step: bool,
    require_correct_answer: bool,
}

/// Build the consolidated inline script: a config constant followed by the
/// static runtime.
pub fn quiz_script(doc: &QuizDoc) -> String {
    let config = ScriptConfig {
        time_limit: doc.time_limit,
        step_by_step: doc.step_by_step,
        require_correct_answer: doc.require_correct_answer,
    };
    let json = serde_json::to_string(&config).unwrap_or_else(|_| "{}".to_string());
    let json = escape_script_json(&json);
    format!(
        "const QUIZ_CONFIG = {json};\n\n{}",
        include_str!("quiz.js")
    )
}

/// JSON is not script-safe as-is: a string containing `</script>` would
/// terminate the element early. Escaping `<` closes that hole.
fn escape_script_json(s: &str) -> String {
    s.replace('<', "\\u003c")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ir::lower;
    use crate::types::quiz::Quiz;

    #[test]
    fn test_config_precedes_runtime() {
        let mut quiz = Quiz::new("t");
        quiz.time_limit = Some(65);
        let script = quiz_script(&lower(&quiz));
        assert!(script.starts_with("const QUIZ_CONFIG = {\"timeLimit\":65"));
        assert!(script.contains("function checkQuestion"));
    }

    #[test]
    fn test_runtime_ignores_all_whitespace_in_fill_whole() {
        // "return   a + b;" and "return a+b;" grade the same, so the
        // comparison must drop whitespace rather than collapse it to spaces.
        let script = quiz_script(&lower(&Quiz::new("t")));
        assert!(script.contains("replace(/\\s+/g, '')"));
        assert!(!script.contains("replace(/\\s+/g, ' ')"));
    }

    #[test]
    fn test_runtime_guards_step_navigation_without_questions() {
        let script = quiz_script(&lower(&Quiz::new("t")));
        assert!(script.contains("questions.length === 0"));
    }

    #[test]
    fn test_escape_script_json() {
        assert_eq!(
            escape_script_json(r#"{"a":"</script>"}"#),
            "{\"a\":\"\\u003c/script>\"}"
        );
    }
}
