/*
 * ==========================================================================
 * WHILEBOOL - Boolean While-Language Recognizer
 * ==========================================================================
 *
 * File:      config.rs
 * Purpose:   Settings for the command-line shell, loaded from an optional
 *            JSON file and overridden by command-line flags.
 *
 * Author:    Sam Wilcox
 * Email:     sam@pawx-lang.com
 *
 * License:
 * This file is part of the WHILEBOOL project.
 *
 * WHILEBOOL is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use crate::error::{Error, Result};
use crate::lexer::KeywordMode;
use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// Shell configuration.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
/// ```json
/// { "strict_keywords": true, "log": { "level": "debug" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Use `KeywordMode::WholeWord` instead of the default prefix matching.
    pub strict_keywords: bool,

    /// Report format written to stdout.
    pub format: OutputFormat,

    /// Include the token sequence in the report.
    pub show_tokens: bool,

    pub log: LogConfig,
}

impl Config {
    /// Reads a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    pub fn keyword_mode(&self) -> KeywordMode {
        if self.strict_keywords {
            KeywordMode::WholeWord
        } else {
            KeywordMode::Prefix
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    pub level: LogLevel,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };
        f.write_str(text)
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Multi-line, human oriented
    Pretty,
    /// One line per event
    #[default]
    Compact,
    /// One JSON object per event
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.keyword_mode(), KeywordMode::Prefix);
        assert_eq!(config.log.level, LogLevel::Warn);
    }

    #[test]
    fn partial_file_overrides_only_its_keys() {
        let config = Config::from_json(
            r#"{ "strict_keywords": true, "format": "json", "log": { "level": "debug" } }"#,
        )
        .unwrap();
        assert_eq!(config.keyword_mode(), KeywordMode::WholeWord);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log.level, LogLevel::Debug);
        assert_eq!(config.log.format, LogFormat::Compact);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::from_json(r#"{ "colour": true }"#).is_err());
    }

    #[test]
    fn malformed_file_is_a_config_error_naming_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("whilebool.json");
        fs::write(&path, "{ \"strict_keywords\": ").unwrap();

        let error = Config::load(&path).unwrap_err();
        assert!(matches!(error, Error::Config { .. }));
        assert!(error.to_string().starts_with("invalid config file '"));
        assert!(error.to_string().contains("whilebool.json"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let error = Config::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(error, Error::Io { .. }));
    }
}
