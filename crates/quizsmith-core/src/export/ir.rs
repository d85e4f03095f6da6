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

//! Intermediate representation for the exporter.
//!
//! Lowering a [`Quiz`] into a [`QuizDoc`] applies every default (theme,
//! languages, empty payloads) and resolves the per-variant surface, so the
//! markup pass is a plain traversal with no policy in it. The IR is
//! serializable, which keeps the per-type branching testable without
//! string-matching generated HTML.

use serde::Serialize;

use crate::markdown::markdown_to_html;
use crate::types::question::Question;
use crate::types::question::QuestionBody;
use crate::types::quiz::Quiz;
use crate::types::theme::Theme;

/// Fallback highlighting language when neither the question nor the quiz
/// specifies one.
pub const DEFAULT_LANGUAGE: &str = "javascript";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QuizDoc {
    pub title: String,
    /// Description rendered from Markdown. Empty string when absent.
    pub description_html: String,
    pub theme: Theme,
    pub time_limit: Option<u32>,
    pub hide_footer: bool,
    pub step_by_step: bool,
    pub require_correct_answer: bool,
    pub questions: Vec<QuestionDoc>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QuestionDoc {
    /// 1-based display number; also the DOM id suffix, so it is unique even
    /// when question ids collide.
    pub number: usize,
    pub dom_id: String,
    pub title: String,
    pub explanation_html: Option<String>,
    pub time_limit: Option<u32>,
    pub hide_solution: bool,
    pub language: String,
    pub surface: Surface,
}

/// The interactive region of a question, with all defaults applied.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Surface {
    OrderBlocks {
        blocks: Vec<OrderBlock>,
    },
    Choice {
        multiple: bool,
        options: Vec<ChoiceDoc>,
    },
    Gaps {
        segments: Vec<GapSegment>,
        snippets: Vec<String>,
    },
    Jigsaw {
        rows: u32,
        columns: u32,
        pieces: Vec<PieceDoc>,
    },
    Errors {
        code: String,
        items: Vec<String>,
    },
    FreeText {
        expected: String,
    },
    WholeCode {
        starter: String,
        solution: String,
    },
    /// Unknown question type; renders a notice instead of failing.
    Placeholder,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OrderBlock {
    pub content: String,
    pub correct_position: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChoiceDoc {
    pub text: String,
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PieceDoc {
    pub content: String,
    pub correct_row: u32,
    pub correct_column: u32,
}

/// A fill-gaps template split at its `___` markers.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum GapSegment {
    Literal(String),
    Gap { answer: String },
}

/// Marker for a gap in a fill-gaps code template.
pub const GAP_MARKER: &str = "___";

pub fn lower(quiz: &Quiz) -> QuizDoc {
    let quiz_language = quiz.language.as_deref();
    QuizDoc {
        title: quiz.title.clone(),
        description_html: if quiz.description.is_empty() {
            String::new()
        } else {
            markdown_to_html(&quiz.description)
        },
        theme: quiz.style.clone().unwrap_or_default(),
        time_limit: quiz.time_limit,
        hide_footer: quiz.hide_footer,
        step_by_step: quiz.step_by_step,
        require_correct_answer: quiz.require_correct_answer,
        questions: quiz
            .questions
            .iter()
            .enumerate()
            .map(|(idx, q)| lower_question(q, idx + 1, quiz_language))
            .collect(),
    }
}

fn lower_question(question: &Question, number: usize, quiz_language: Option<&str>) -> QuestionDoc {
    let language = question
        .language
        .as_deref()
        .or(quiz_language)
        .unwrap_or(DEFAULT_LANGUAGE)
        .to_string();
    QuestionDoc {
        number,
        dom_id: format!("q{number}"),
        title: question.title.clone(),
        explanation_html: question
            .explanation
            .as_deref()
            .filter(|e| !e.is_empty())
            .map(markdown_to_html),
        time_limit: question.time_limit,
        hide_solution: question.hide_solution,
        language,
        surface: lower_surface(&question.body),
    }
}

fn lower_surface(body: &QuestionBody) -> Surface {
    match body {
        QuestionBody::CodeOrder { code_blocks } => Surface::OrderBlocks {
            blocks: code_blocks
                .iter()
                .map(|b| OrderBlock {
                    content: b.content.clone(),
                    correct_position: b.correct_position,
                })
                .collect(),
        },
        QuestionBody::MultipleChoice { options } => Surface::Choice {
            multiple: true,
            options: lower_options(options),
        },
        QuestionBody::SingleChoice { options } => Surface::Choice {
            multiple: false,
            options: lower_options(options),
        },
        QuestionBody::FillGaps {
            code,
            gaps,
            available_snippets,
        } => Surface::Gaps {
            segments: split_gap_template(code, gaps.iter().map(|g| g.correct_answer.as_str())),
            snippets: available_snippets.clone(),
        },
        QuestionBody::Jigsaw {
            jigsaw_pieces,
            grid_size,
        } => Surface::Jigsaw {
            rows: grid_size.rows.max(1),
            columns: grid_size.columns.max(1),
            pieces: jigsaw_pieces
                .iter()
                .map(|p| PieceDoc {
                    content: p.content.clone(),
                    correct_row: p.correct_row,
                    correct_column: p.correct_column,
                })
                .collect(),
        },
        QuestionBody::FindCodeErrors { code, errors } => Surface::Errors {
            code: code.clone(),
            items: errors.iter().map(|e| e.description.clone()).collect(),
        },
        QuestionBody::Text { expected_answer } => Surface::FreeText {
            expected: expected_answer.clone(),
        },
        QuestionBody::FillWhole { code, solution } => Surface::WholeCode {
            starter: code.clone(),
            solution: solution.clone(),
        },
        QuestionBody::Unknown => Surface::Placeholder,
    }
}

fn lower_options(options: &[crate::types::question::ChoiceOption]) -> Vec<ChoiceDoc> {
    options
        .iter()
        .map(|o| ChoiceDoc {
            text: o.text.clone(),
            is_correct: o.is_correct,
        })
        .collect()
}

/// Split a gap template into literal and gap segments. Markers are paired
/// with stored answers in order; surplus markers become gaps with an empty
/// answer, surplus answers are dropped.
fn split_gap_template<'a>(
    template: &str,
    mut answers: impl Iterator<Item = &'a str>,
) -> Vec<GapSegment> {
    let mut segments = Vec::new();
    let mut parts = template.split(GAP_MARKER).peekable();
    while let Some(part) = parts.next() {
        if !part.is_empty() {
            segments.push(GapSegment::Literal(part.to_string()));
        }
        if parts.peek().is_some() {
            let answer = answers.next().unwrap_or_default().to_string();
            segments.push(GapSegment::Gap { answer });
        }
    }
    segments
}

/// Format seconds as `MM:SS`, the form the exported timers display.
pub fn format_mm_ss(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::question::Gap;
    use crate::types::question::QuestionType;
    use crate::types::theme::ButtonStyle;

    #[test]
    fn test_format_mm_ss() {
        assert_eq!(format_mm_ss(65), "01:05");
        assert_eq!(format_mm_ss(59), "00:59");
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(600), "10:00");
    }

    #[test]
    fn test_lower_defaults_language_to_javascript() {
        let mut quiz = Quiz::new("t");
        quiz.add_question(QuestionType::CodeOrder);
        let doc = lower(&quiz);
        assert_eq!(doc.questions[0].language, "javascript");
    }

    #[test]
    fn test_question_language_beats_quiz_language() {
        let mut quiz = Quiz::new("t");
        quiz.language = Some("python".to_string());
        let first = quiz.add_question(QuestionType::FillWhole);
        quiz.add_question(QuestionType::FillWhole);
        quiz.update_question(first, |q| q.language = Some("rust".to_string()));
        let doc = lower(&quiz);
        assert_eq!(doc.questions[0].language, "rust");
        assert_eq!(doc.questions[1].language, "python");
    }

    #[test]
    fn test_lower_applies_default_theme() {
        let quiz = Quiz::new("t");
        let doc = lower(&quiz);
        assert_eq!(doc.theme.button_style, ButtonStyle::Rounded);
    }

    #[test]
    fn test_split_gap_template() {
        let gaps = [
            Gap {
                correct_answer: "<".to_string(),
            },
            Gap {
                correct_answer: "++".to_string(),
            },
        ];
        let segments = split_gap_template(
            "i ___ 10; i___",
            gaps.iter().map(|g| g.correct_answer.as_str()),
        );
        assert_eq!(
            segments,
            vec![
                GapSegment::Literal("i ".to_string()),
                GapSegment::Gap {
                    answer: "<".to_string()
                },
                GapSegment::Literal(" 10; i".to_string()),
                GapSegment::Gap {
                    answer: "++".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_split_gap_template_surplus_markers() {
        let segments = split_gap_template("a ___ b ___ c", std::iter::once("x"));
        let gap_answers: Vec<_> = segments
            .iter()
            .filter_map(|s| match s {
                GapSegment::Gap { answer } => Some(answer.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(gap_answers, vec!["x", ""]);
    }

    #[test]
    fn test_jigsaw_grid_never_zero() {
        let mut quiz = Quiz::new("t");
        let id = quiz.add_question(QuestionType::Jigsaw);
        quiz.update_question(id, |q| {
            if let QuestionBody::Jigsaw { grid_size, .. } = &mut q.body {
                grid_size.rows = 0;
                grid_size.columns = 0;
            }
        });
        let doc = lower(&quiz);
        match &doc.questions[0].surface {
            Surface::Jigsaw { rows, columns, .. } => {
                assert_eq!((*rows, *columns), (1, 1));
            }
            _ => panic!("wrong surface"),
        }
    }

    #[test]
    fn test_unknown_body_lowers_to_placeholder() {
        let mut quiz = Quiz::new("t");
        quiz.add_question(QuestionType::Text);
        quiz.questions[0].body = QuestionBody::Unknown;
        let doc = lower(&quiz);
        assert_eq!(doc.questions[0].surface, Surface::Placeholder);
    }
}
