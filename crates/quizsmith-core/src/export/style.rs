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

use crate::types::theme::Theme;

// Feedback colors are semantic, not part of the author-facing theme.
const CORRECT_COLOR: &str = "#16a34a";
const INCORRECT_COLOR: &str = "#dc2626";

/// Render the consolidated `<style>` block for an export. Every
/// theme-dependent value is interpolated; nothing color- or font-related is
/// hard-coded outside the semantic feedback colors above.
pub fn theme_css(theme: &Theme) -> String {
    let primary = &theme.primary_color;
    let secondary = &theme.secondary_color;
    let background = &theme.background_color;
    let text = &theme.text_color;
    let font = &theme.font_family;
    let radius = theme.border_radius;
    let button_radius = theme.button_style.button_radius(theme.border_radius);
    format!(
        r#"
body {{
  font-family: {font};
  background: {background};
  color: {text};
  max-width: 52rem;
  margin: 0 auto;
  padding: 1.5rem;
}}
a {{ color: {primary}; }}
.quiz-header h1 {{ color: {primary}; }}
.quiz-timer, .question-timer {{
  display: inline-block;
  font-variant-numeric: tabular-nums;
  border: 1px solid {secondary};
  border-radius: {radius}px;
  padding: 0.1rem 0.5rem;
  color: {text};
}}
.timer-warning {{ color: {INCORRECT_COLOR}; border-color: {INCORRECT_COLOR}; }}
.question {{
  border: 1px solid {secondary};
  border-radius: {radius}px;
  padding: 1rem;
  margin: 1rem 0;
}}
.question h2 {{ margin-top: 0; font-size: 1.1rem; }}
.question.correct {{ border-color: {CORRECT_COLOR}; }}
.question.incorrect {{ border-color: {INCORRECT_COLOR}; }}
.result {{ font-weight: bold; margin-left: 0.5rem; }}
.question.correct .result {{ color: {CORRECT_COLOR}; }}
.question.incorrect .result {{ color: {INCORRECT_COLOR}; }}
button {{
  background: {primary};
  color: {background};
  font-family: {font};
  border: none;
  border-radius: {button_radius};
  padding: 0.4rem 1rem;
  cursor: pointer;
}}
button.secondary, button.snippet {{ background: {secondary}; }}
button:disabled {{ opacity: 0.5; cursor: not-allowed; }}
.code-block {{
  border: 1px solid {secondary};
  border-radius: {radius}px;
  margin: 0.25rem 0;
  padding: 0.25rem 0.5rem;
  cursor: grab;
  background: {background};
}}
.code-block.dragging {{ opacity: 0.5; }}
.code-block pre {{ margin: 0; }}
.gap {{
  display: inline-block;
  min-width: 3ch;
  border-bottom: 2px solid {primary};
  cursor: pointer;
}}
.gap.filled {{ border-bottom-style: double; }}
.snippets {{ margin: 0.5rem 0; }}
.snippet.selected {{ outline: 2px solid {primary}; }}
.choice {{ display: block; margin: 0.25rem 0; }}
.jigsaw-grid {{
  display: grid;
  gap: 0.25rem;
  margin: 0.5rem 0;
}}
.jigsaw-cell {{
  border: 1px dashed {secondary};
  border-radius: {radius}px;
  min-height: 2.2rem;
  padding: 0.1rem;
}}
.jigsaw-piece {{
  border: 1px solid {primary};
  border-radius: {radius}px;
  padding: 0.2rem 0.4rem;
  cursor: grab;
  background: {background};
}}
.jigsaw-tray {{ display: flex; flex-wrap: wrap; gap: 0.25rem; margin: 0.5rem 0; }}
.error-list {{ list-style: none; padding-left: 0; }}
textarea {{
  width: 100%;
  font-family: monospace;
  border: 1px solid {secondary};
  border-radius: {radius}px;
  padding: 0.5rem;
  background: {background};
  color: {text};
}}
.hint, .solution {{
  border-left: 3px solid {secondary};
  padding: 0.25rem 0.75rem;
  margin: 0.5rem 0;
}}
.run-output {{
  border: 1px solid {secondary};
  border-radius: {radius}px;
  padding: 0.5rem;
  min-height: 1.2rem;
}}
.placeholder {{ color: {secondary}; font-style: italic; }}
.quiz-controls {{ margin: 1rem 0; }}
#score {{ font-weight: bold; }}
footer.powered-by {{
  margin-top: 2rem;
  color: {secondary};
  font-size: 0.8rem;
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::theme::ButtonStyle;

    #[test]
    fn test_theme_values_appear_in_css() {
        let theme = Theme {
            primary_color: "#101010".to_string(),
            secondary_color: "#202020".to_string(),
            background_color: "#303030".to_string(),
            text_color: "#404040".to_string(),
            font_family: "Comic Sans MS".to_string(),
            border_radius: 3,
            button_style: ButtonStyle::Rounded,
        };
        let css = theme_css(&theme);
        for value in ["#101010", "#202020", "#303030", "#404040", "Comic Sans MS"] {
            assert!(css.contains(value), "missing {value}");
        }
        assert!(css.contains("border-radius: 3px"));
    }

    #[test]
    fn test_pill_buttons() {
        let theme = Theme {
            button_style: ButtonStyle::Pill,
            ..Theme::default()
        };
        let css = theme_css(&theme);
        assert!(css.contains("border-radius: 9999px"));
    }

    #[test]
    fn test_square_buttons() {
        let theme = Theme {
            button_style: ButtonStyle::Square,
            ..Theme::default()
        };
        let css = theme_css(&theme);
        assert!(css.contains("border-radius: 0px"));
    }
}
