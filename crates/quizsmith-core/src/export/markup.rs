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

//! Render a [`QuizDoc`] to the standalone HTML document.
//!
//! All author-supplied text goes through [`esc`], which escapes `&`, `<`,
//! `>`, `"` and `'`. Only strings this module produces itself (rendered
//! Markdown, the stylesheet, the script) are inserted pre-escaped.

use maud::DOCTYPE;
use maud::Markup;
use maud::PreEscaped;
use maud::html;

use crate::export::escape::esc;
use crate::export::ir::GapSegment;
use crate::export::ir::QuestionDoc;
use crate::export::ir::QuizDoc;
use crate::export::ir::Surface;
use crate::export::ir::format_mm_ss;
use crate::export::script::quiz_script;
use crate::export::style::theme_css;

const HIGHLIGHT_JS_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/highlight.min.js";
const HIGHLIGHT_CSS_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/styles/github.min.css";
const PYODIDE_JS_URL: &str = "https://cdn.jsdelivr.net/pyodide/v0.26.2/full/pyodide.js";

pub fn render(doc: &QuizDoc) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (esc(&doc.title)) }
                link rel="stylesheet" href=(HIGHLIGHT_CSS_URL);
                script defer src=(HIGHLIGHT_JS_URL) {};
                script defer src=(PYODIDE_JS_URL) {};
                style { (PreEscaped(theme_css(&doc.theme))) }
            }
            body {
                header .quiz-header {
                    h1 { (esc(&doc.title)) }
                    @if let Some(limit) = doc.time_limit {
                        span .quiz-timer { (format_mm_ss(limit)) }
                    }
                    @if !doc.description_html.is_empty() {
                        div .quiz-description { (PreEscaped(&doc.description_html)) }
                    }
                }
                main {
                    @for question in &doc.questions {
                        (render_question(question))
                    }
                }
                div .quiz-controls {
                    button #check-answers { "Check answers" }
                    " "
                    button #reset .secondary { "Reset" }
                    @if doc.step_by_step {
                        " "
                        button #step-prev .secondary { "Previous" }
                        " "
                        button #step-next { "Next" }
                    }
                    div #score {}
                }
                @if !doc.hide_footer {
                    footer .powered-by { "Made with quizsmith" }
                }
                script { (PreEscaped(quiz_script(doc))) }
            }
        }
    }
}

fn render_question(question: &QuestionDoc) -> Markup {
    let kind = surface_kind(&question.surface);
    html! {
        section .question id=(question.dom_id) data-kind=(kind) {
            h2 {
                (question.number) ". " (esc(&question.title))
                @if let Some(limit) = question.time_limit {
                    " "
                    span .question-timer data-limit=(limit) { (format_mm_ss(limit)) }
                }
                span .result {}
            }
            (render_surface(question))
            div .controls {
                @if question.explanation_html.is_some() {
                    button .secondary data-action="toggle-hint" { "Show hint" }
                    " "
                }
                @if !question.hide_solution && has_solution(&question.surface) {
                    button .secondary data-action="toggle-solution" { "Show solution" }
                }
            }
            @if let Some(explanation) = &question.explanation_html {
                div .hint hidden { (PreEscaped(explanation)) }
            }
            @if !question.hide_solution {
                @if let Some(solution) = render_solution(question) {
                    div .solution hidden { (solution) }
                }
            }
        }
    }
}

fn surface_kind(surface: &Surface) -> &'static str {
    match surface {
        Surface::OrderBlocks { .. } => "code-order",
        Surface::Choice { multiple: true, .. } => "multiple-choice",
        Surface::Choice {
            multiple: false, ..
        } => "single-choice",
        Surface::Gaps { .. } => "fill-gaps",
        Surface::Jigsaw { .. } => "jigsaw",
        Surface::Errors { .. } => "find-code-errors",
        Surface::FreeText { .. } => "text",
        Surface::WholeCode { .. } => "fill-whole",
        Surface::Placeholder => "unknown",
    }
}

fn render_surface(question: &QuestionDoc) -> Markup {
    let language = &question.language;
    match &question.surface {
        Surface::OrderBlocks { blocks } => html! {
            div .code-order data-role="code-order" {
                @for block in blocks {
                    div .code-block draggable="true"
                        data-correct-position=(block.correct_position) {
                        pre { code class=(format!("language-{language}")) { (esc(&block.content)) } }
                    }
                }
            }
        },
        Surface::Choice { multiple, options } => {
            let input_type = if *multiple { "checkbox" } else { "radio" };
            html! {
                div .choices {
                    @for option in options {
                        label .choice {
                            input type=(input_type) name=(question.dom_id)
                                data-correct=(option.is_correct);
                            " " (esc(&option.text))
                        }
                    }
                }
            }
        }
        Surface::Gaps { segments, snippets } => html! {
            pre .gap-code {
                code class=(format!("language-{language}")) {
                    @for segment in segments {
                        @match segment {
                            GapSegment::Literal(text) => { (esc(text)) },
                            GapSegment::Gap { answer } => {
                                span .gap data-answer=(esc(answer)) tabindex="0" {}
                            },
                        }
                    }
                }
            }
            div .snippets {
                @for snippet in snippets {
                    button .snippet type="button" { (esc(snippet)) }
                    " "
                }
            }
        },
        Surface::Jigsaw {
            rows,
            columns,
            pieces,
        } => html! {
            div .jigsaw-grid
                style=(format!("grid-template-columns: repeat({columns}, 1fr);")) {
                @for row in 1..=*rows {
                    @for column in 1..=*columns {
                        div .jigsaw-cell data-row=(row) data-column=(column) {}
                    }
                }
            }
            div .jigsaw-tray {
                @for piece in pieces {
                    div .jigsaw-piece draggable="true"
                        data-correct-row=(piece.correct_row)
                        data-correct-column=(piece.correct_column) {
                        (esc(&piece.content))
                    }
                }
            }
        },
        Surface::Errors { code, items } => html! {
            pre { code class=(format!("language-{language}")) { (esc(code)) } }
            ul .error-list {
                @for item in items {
                    li {
                        label {
                            input type="checkbox";
                            " " (esc(item))
                        }
                    }
                }
            }
        },
        Surface::FreeText { expected } => html! {
            textarea .text-answer rows="3" data-expected=(esc(expected))
                placeholder="Type your answer" {}
        },
        Surface::WholeCode { starter, solution } => html! {
            textarea .code-editor rows="8" data-solution=(esc(solution)) { (esc(starter)) }
            @if language == "python" {
                div .controls {
                    button data-action="run-python" { "Run" }
                }
                pre .run-output {}
            }
        },
        Surface::Placeholder => html! {
            div .placeholder { "This question type is not supported by the exporter." }
        },
    }
}

/// Whether a variant has anything to show behind the solution toggle.
fn has_solution(surface: &Surface) -> bool {
    !matches!(surface, Surface::Errors { .. } | Surface::Placeholder)
}

fn render_solution(question: &QuestionDoc) -> Option<Markup> {
    let language = &question.language;
    let code_solution = |text: &str| {
        html! {
            pre { code class=(format!("language-{language}")) { (esc(text)) } }
        }
    };
    match &question.surface {
        Surface::OrderBlocks { blocks } => {
            let mut sorted: Vec<_> = blocks.iter().collect();
            sorted.sort_by_key(|b| b.correct_position);
            let text = sorted
                .iter()
                .map(|b| b.content.as_str())
                .collect::<Vec<_>>()
                .join("\n");
            Some(code_solution(&text))
        }
        Surface::Choice { options, .. } => Some(html! {
            ul {
                @for option in options.iter().filter(|o| o.is_correct) {
                    li { (esc(&option.text)) }
                }
            }
        }),
        Surface::Gaps { segments, .. } => {
            let text = segments
                .iter()
                .map(|segment| match segment {
                    GapSegment::Literal(text) => text.as_str(),
                    GapSegment::Gap { answer } => answer.as_str(),
                })
                .collect::<String>();
            Some(code_solution(&text))
        }
        Surface::Jigsaw { pieces, .. } => Some(html! {
            ul {
                @for piece in pieces {
                    li {
                        (esc(&piece.content))
                        " (row " (piece.correct_row)
                        ", column " (piece.correct_column) ")"
                    }
                }
            }
        }),
        Surface::FreeText { expected } => Some(html! { p { (esc(expected)) } }),
        Surface::WholeCode { solution, .. } => Some(code_solution(solution)),
        Surface::Errors { .. } | Surface::Placeholder => None,
    }
}
