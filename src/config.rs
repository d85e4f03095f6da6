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

use std::path::Path;

use serde::Deserialize;

use crate::error::Fallible;

pub const DEFAULT_CONFIG_FILE: &str = "quizsmith.toml";

/// Optional config file values. CLI flags take precedence over these.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<String>,
}

impl Config {
    /// Load from an explicit path, or from `quizsmith.toml` in the working
    /// directory if it exists. Absent files mean an empty config; a present
    /// but malformed file is an error.
    pub fn load(path: Option<&str>) -> Fallible<Config> {
        let path = match path {
            Some(p) => p.to_string(),
            None => {
                if !Path::new(DEFAULT_CONFIG_FILE).exists() {
                    return Ok(Config::default());
                }
                DEFAULT_CONFIG_FILE.to_string()
            }
        };
        log::debug!("Loading config from {path}");
        let text = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&text)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_load_full_config() -> Fallible<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "host = \"0.0.0.0\"\nport = 9000\ndatabase = \"quizzes.db\"")?;
        let config = Config::load(file.path().to_str())?;
        assert_eq!(config.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(config.port, Some(9000));
        assert_eq!(config.database.as_deref(), Some("quizzes.db"));
        Ok(())
    }

    #[test]
    fn test_load_rejects_unknown_keys() -> Fallible<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "host = \"x\"\nherp = \"derp\"")?;
        assert!(Config::load(file.path().to_str()).is_err());
        Ok(())
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        assert!(Config::load(Some("./does-not-exist.toml")).is_err());
    }
}
