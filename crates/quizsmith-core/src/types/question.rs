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

/// A single quiz question. The variant-specific payload lives in `body`,
/// flattened into the JSON object alongside the common fields, discriminated
/// by the `type` key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub title: String,
    /// Optional Markdown hint shown behind a toggle in the export.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    /// 1-based position within the quiz. Kept contiguous by all mutations.
    #[serde(default)]
    pub order: u32,
    /// Per-question countdown in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<u32>,
    #[serde(default)]
    pub hide_solution: bool,
    /// Highlighting language for code payloads. Falls back to the quiz
    /// language, then to javascript.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(flatten)]
    pub body: QuestionBody,
}

/// The set of question variants an author can create.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    CodeOrder,
    Jigsaw,
    FillGaps,
    FillWhole,
    MultipleChoice,
    SingleChoice,
    FindCodeErrors,
    Text,
}

/// Variant-specific payload, tagged by the `type` key in JSON. Unrecognized
/// tags deserialize to `Unknown` so stored quizzes from newer versions still
/// load (and export a placeholder) instead of failing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum QuestionBody {
    CodeOrder {
        #[serde(default)]
        code_blocks: Vec<CodeBlock>,
    },
    Jigsaw {
        #[serde(default)]
        jigsaw_pieces: Vec<JigsawPiece>,
        #[serde(default)]
        grid_size: GridSize,
    },
    FillGaps {
        /// Code template; each `___` marker is replaced by a gap span.
        #[serde(default)]
        code: String,
        #[serde(default)]
        gaps: Vec<Gap>,
        /// Snippets offered to the student, including distractors.
        #[serde(default)]
        available_snippets: Vec<String>,
    },
    FillWhole {
        /// Starter code shown in the editor area.
        #[serde(default)]
        code: String,
        #[serde(default)]
        solution: String,
    },
    MultipleChoice {
        #[serde(default)]
        options: Vec<ChoiceOption>,
    },
    SingleChoice {
        #[serde(default)]
        options: Vec<ChoiceOption>,
    },
    FindCodeErrors {
        #[serde(default)]
        code: String,
        #[serde(default)]
        errors: Vec<CodeError>,
    },
    Text {
        #[serde(default)]
        expected_answer: String,
    },
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeBlock {
    #[serde(default)]
    pub content: String,
    /// 1-indexed position this block belongs at.
    #[serde(default)]
    pub correct_position: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JigsawPiece {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub correct_row: u32,
    #[serde(default)]
    pub correct_column: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSize {
    pub rows: u32,
    pub columns: u32,
}

impl Default for GridSize {
    fn default() -> Self {
        GridSize {
            rows: 2,
            columns: 2,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gap {
    #[serde(default)]
    pub correct_answer: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceOption {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeError {
    #[serde(default)]
    pub description: String,
}

impl Question {
    /// Create a question of the given type seeded with sample payload, the
    /// way the editor offers a working starting point for each variant.
    pub fn with_defaults(qtype: QuestionType, id: u64, order: u32) -> Self {
        Question {
            id,
            title: default_title(qtype).to_string(),
            explanation: None,
            order,
            time_limit: None,
            hide_solution: false,
            language: None,
            body: sample_body(qtype),
        }
    }

    /// Human-readable variant name, used in logs and placeholders.
    pub fn type_name(&self) -> &'static str {
        match self.body {
            QuestionBody::CodeOrder { .. } => "code-order",
            QuestionBody::Jigsaw { .. } => "jigsaw",
            QuestionBody::FillGaps { .. } => "fill-gaps",
            QuestionBody::FillWhole { .. } => "fill-whole",
            QuestionBody::MultipleChoice { .. } => "multiple-choice",
            QuestionBody::SingleChoice { .. } => "single-choice",
            QuestionBody::FindCodeErrors { .. } => "find-code-errors",
            QuestionBody::Text { .. } => "text",
            QuestionBody::Unknown => "unknown",
        }
    }
}

fn default_title(qtype: QuestionType) -> &'static str {
    match qtype {
        QuestionType::CodeOrder => "Put the code in the right order",
        QuestionType::Jigsaw => "Assemble the code jigsaw",
        QuestionType::FillGaps => "Fill in the gaps",
        QuestionType::FillWhole => "Write the missing code",
        QuestionType::MultipleChoice => "Select all correct answers",
        QuestionType::SingleChoice => "Select the correct answer",
        QuestionType::FindCodeErrors => "Find the errors",
        QuestionType::Text => "Answer in your own words",
    }
}

fn sample_body(qtype: QuestionType) -> QuestionBody {
    match qtype {
        QuestionType::CodeOrder => QuestionBody::CodeOrder {
            code_blocks: vec![
                CodeBlock {
                    content: "function greet(name) {".to_string(),
                    correct_position: 1,
                },
                CodeBlock {
                    content: "  return `Hello, ${name}!`;".to_string(),
                    correct_position: 2,
                },
                CodeBlock {
                    content: "}".to_string(),
                    correct_position: 3,
                },
            ],
        },
        QuestionType::Jigsaw => QuestionBody::Jigsaw {
            jigsaw_pieces: vec![
                JigsawPiece {
                    content: "let x = 1;".to_string(),
                    correct_row: 1,
                    correct_column: 1,
                },
                JigsawPiece {
                    content: "let y = 2;".to_string(),
                    correct_row: 1,
                    correct_column: 2,
                },
            ],
            grid_size: GridSize::default(),
        },
        QuestionType::FillGaps => QuestionBody::FillGaps {
            code: "for (let i = 0; i ___ 10; i___) {\n  console.log(i);\n}".to_string(),
            gaps: vec![
                Gap {
                    correct_answer: "<".to_string(),
                },
                Gap {
                    correct_answer: "++".to_string(),
                },
            ],
            available_snippets: vec!["<".to_string(), "++".to_string(), "--".to_string()],
        },
        QuestionType::FillWhole => QuestionBody::FillWhole {
            code: "function add(a, b) {\n  // your code here\n}".to_string(),
            solution: "function add(a, b) {\n  return a + b;\n}".to_string(),
        },
        QuestionType::MultipleChoice => QuestionBody::MultipleChoice {
            options: vec![
                ChoiceOption {
                    text: "A correct answer".to_string(),
                    is_correct: true,
                },
                ChoiceOption {
                    text: "A wrong answer".to_string(),
                    is_correct: false,
                },
            ],
        },
        QuestionType::SingleChoice => QuestionBody::SingleChoice {
            options: vec![
                ChoiceOption {
                    text: "The correct answer".to_string(),
                    is_correct: true,
                },
                ChoiceOption {
                    text: "A wrong answer".to_string(),
                    is_correct: false,
                },
            ],
        },
        QuestionType::FindCodeErrors => QuestionBody::FindCodeErrors {
            code: "const x = 1;\nx = 2;".to_string(),
            errors: vec![CodeError {
                description: "Reassignment of a const binding".to_string(),
            }],
        },
        QuestionType::Text => QuestionBody::Text {
            expected_answer: "A closure captures its environment.".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_tagged_roundtrip() -> Fallible<()> {
        let question = Question::with_defaults(QuestionType::MultipleChoice, 7, 1);
        let json = serde_json::to_string(&question)?;
        assert!(json.contains("\"type\":\"multiple-choice\""));
        let back: Question = serde_json::from_str(&json)?;
        assert_eq!(back, question);
        Ok(())
    }

    #[test]
    fn test_unknown_type_deserializes_to_placeholder() -> Fallible<()> {
        let json = r#"{"id": 1, "title": "?", "order": 1, "type": "hologram"}"#;
        let question: Question = serde_json::from_str(json)?;
        assert_eq!(question.body, QuestionBody::Unknown);
        Ok(())
    }

    #[test]
    fn test_missing_payload_fields_default_empty() -> Fallible<()> {
        let json = r#"{"id": 1, "title": "t", "order": 1, "type": "code-order"}"#;
        let question: Question = serde_json::from_str(json)?;
        assert_eq!(
            question.body,
            QuestionBody::CodeOrder {
                code_blocks: Vec::new()
            }
        );
        Ok(())
    }

    #[test]
    fn test_camel_case_payload_fields() -> Fallible<()> {
        let json = r#"{
            "id": 1, "title": "t", "order": 1, "type": "code-order",
            "codeBlocks": [{"content": "x", "correctPosition": 2}]
        }"#;
        let question: Question = serde_json::from_str(json)?;
        match question.body {
            QuestionBody::CodeOrder { code_blocks } => {
                assert_eq!(code_blocks.len(), 1);
                assert_eq!(code_blocks[0].correct_position, 2);
            }
            _ => panic!("wrong variant"),
        }
        Ok(())
    }

    #[test]
    fn test_every_factory_variant_is_well_formed() {
        let types = [
            QuestionType::CodeOrder,
            QuestionType::Jigsaw,
            QuestionType::FillGaps,
            QuestionType::FillWhole,
            QuestionType::MultipleChoice,
            QuestionType::SingleChoice,
            QuestionType::FindCodeErrors,
            QuestionType::Text,
        ];
        for (i, qtype) in types.iter().enumerate() {
            let question = Question::with_defaults(*qtype, i as u64, i as u32 + 1);
            assert!(!question.title.is_empty());
            assert_ne!(question.body, QuestionBody::Unknown);
        }
    }
}
