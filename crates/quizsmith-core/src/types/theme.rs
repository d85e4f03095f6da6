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

/// Visual theme for an exported quiz. Every color-dependent rule in the
/// generated stylesheet derives from these values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    pub primary_color: String,
    pub secondary_color: String,
    pub background_color: String,
    pub text_color: String,
    pub font_family: String,
    /// Corner radius in pixels, used when `button_style` is `Rounded`.
    pub border_radius: u32,
    pub button_style: ButtonStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            primary_color: "#2563eb".to_string(),
            secondary_color: "#64748b".to_string(),
            background_color: "#ffffff".to_string(),
            text_color: "#1e293b".to_string(),
            font_family: "system-ui, sans-serif".to_string(),
            border_radius: 8,
            button_style: ButtonStyle::Rounded,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Rounded,
    Pill,
    Square,
}

impl ButtonStyle {
    /// Resolve the CSS `border-radius` value for buttons under this style.
    pub fn button_radius(self, border_radius: u32) -> String {
        match self {
            ButtonStyle::Rounded => format!("{border_radius}px"),
            ButtonStyle::Pill => "9999px".to_string(),
            ButtonStyle::Square => "0px".to_string(),
        }
    }
}
