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

use std::fs;
use std::path::Path;

use quizsmith_core::Quiz;
use quizsmith_core::generate_html;
use walkdir::WalkDir;

use crate::error::Fallible;
use crate::error::fail;

/// Export a quiz JSON file, or every `*.json` under a directory, to
/// standalone HTML.
pub fn export_quizzes(input: &str, output: Option<&str>) -> Fallible<()> {
    let path = Path::new(input);
    if !path.exists() {
        return fail(format!("no such file or directory: {input}"));
    }
    if path.is_dir() {
        if output.is_some() {
            return fail("--output only applies to single-file input");
        }
        export_directory(path)
    } else {
        let html = export_file(path)?;
        match output {
            Some(output) => {
                fs::write(output, html)?;
                log::info!("Wrote {output}");
                Ok(())
            }
            None => {
                print!("{html}");
                Ok(())
            }
        }
    }
}

fn export_directory(directory: &Path) -> Fallible<()> {
    for entry in WalkDir::new(directory) {
        let entry = entry.map_err(|e| crate::error::ErrorReport::new(e.to_string()))?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let html = export_file(path)?;
        let target = path.with_extension("html");
        fs::write(&target, html)?;
        log::info!("Wrote {}", target.display());
    }
    Ok(())
}

fn export_file(path: &Path) -> Fallible<String> {
    let text = fs::read_to_string(path)?;
    let quiz: Quiz = serde_json::from_str(&text)
        .map_err(|e| crate::error::ErrorReport::new(format!("{}: {e}", path.display())))?;
    Ok(generate_html(&quiz))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_export_single_file() -> Fallible<()> {
        let dir = tempdir()?;
        let input = dir.path().join("quiz.json");
        fs::write(&input, r#"{"title": "Loops"}"#)?;
        let output = dir.path().join("quiz.html");
        export_quizzes(
            input.to_str().unwrap(),
            Some(output.to_str().unwrap()),
        )?;
        let html = fs::read_to_string(&output)?;
        assert!(html.contains("Loops"));
        Ok(())
    }

    #[test]
    fn test_export_directory_writes_siblings() -> Fallible<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("a.json"), r#"{"title": "A"}"#)?;
        fs::write(dir.path().join("b.json"), r#"{"title": "B"}"#)?;
        fs::write(dir.path().join("notes.txt"), "ignored")?;
        export_quizzes(dir.path().to_str().unwrap(), None)?;
        assert!(dir.path().join("a.html").exists());
        assert!(dir.path().join("b.html").exists());
        assert!(!dir.path().join("notes.html").exists());
        Ok(())
    }

    #[test]
    fn test_export_directory_rejects_output_flag() -> Fallible<()> {
        let dir = tempdir()?;
        let result = export_quizzes(dir.path().to_str().unwrap(), Some("out.html"));
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn test_export_malformed_json_fails_with_path() -> Fallible<()> {
        let dir = tempdir()?;
        let input = dir.path().join("bad.json");
        fs::write(&input, "not json")?;
        let result = export_quizzes(input.to_str().unwrap(), None);
        assert!(result.is_err());
        assert!(result.err().unwrap().to_string().contains("bad.json"));
        Ok(())
    }

    #[test]
    fn test_export_missing_input_fails() {
        assert!(export_quizzes("./derpherp.json", None).is_err());
    }
}
