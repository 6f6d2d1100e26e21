/*
 * ==========================================================================
 * WHILEBOOL - Boolean While-Language Recognizer
 * ==========================================================================
 *
 * File:      report.rs
 * Purpose:   The verdict, statistics and optional token listing printed by
 *            the command-line shell.
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

use crate::error::SyntaxError;
use crate::lexer::{tokenize_with, KeywordMode, Token};
use crate::parser::recognize;
use crate::stats::Statistics;
use serde::Serialize;
use std::fmt::Write;

pub const VALID_MESSAGE: &str = "The file matches the expected statement(s)!";
pub const INVALID_MESSAGE: &str = "The expression to parse is incorrect.";

/// Outcome of checking one source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub valid: bool,

    /// Present only for valid input.
    pub statistics: Option<Statistics>,

    /// Present only for invalid input.
    pub error: Option<SyntaxError>,

    /// Present only when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<Token>>,
}

impl Report {
    /// Tokenizes and recognizes `source`, gathering statistics on success.
    pub fn build(source: &str, mode: KeywordMode, include_tokens: bool) -> Self {
        let tokens = tokenize_with(source, mode);

        let (statistics, error) = match recognize(&tokens) {
            Ok(()) => (Some(Statistics::collect(&tokens)), None),
            Err(error) => (None, Some(error)),
        };

        Self {
            valid: error.is_none(),
            statistics,
            error,
            tokens: include_tokens.then_some(tokens),
        }
    }

    /// Text written to stdout. The diagnostic for an invalid input goes to
    /// stderr separately.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        if let Some(tokens) = &self.tokens {
            let _ = writeln!(out, "===== TOKENS =====");
            for token in tokens {
                let at = token.span.to_string();
                let _ = writeln!(out, "{:>6}  {:?} \"{}\"", at, token.kind, token.lexeme);
            }
            let _ = writeln!(out, "==================");
        }

        if !self.valid {
            let _ = writeln!(out, "{}", INVALID_MESSAGE);
            return out;
        }

        let _ = writeln!(out, "{}", VALID_MESSAGE);

        if let Some(stats) = &self.statistics {
            let _ = writeln!(out, "===== STATISTICS =====");
            let _ = writeln!(out, "Distinct variables (single letter): {}", stats.distinct_variables());
            let _ = writeln!(out, "Single-digit constants: {}", stats.single_digit_constants);
            let _ = writeln!(out, "Comparison operators: {}", stats.comparison_operators);
            let _ = writeln!(out, "'while' statements: {}", stats.while_statements);
            let _ = writeln!(out, "======================");
        }

        out
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_report_lists_statistics() {
        let report = Report::build("while(a==1){b}", KeywordMode::Prefix, false);
        assert!(report.valid);
        assert!(report.error.is_none());

        let text = report.render_text();
        assert!(text.starts_with(VALID_MESSAGE));
        assert!(text.contains("Distinct variables (single letter): 2\n"));
        assert!(text.contains("Single-digit constants: 1\n"));
        assert!(text.contains("Comparison operators: 1\n"));
        assert!(text.contains("'while' statements: 1\n"));
    }

    #[test]
    fn invalid_report_has_no_statistics() {
        let report = Report::build("a +", KeywordMode::Prefix, false);
        assert!(!report.valid);
        assert!(report.statistics.is_none());
        assert_eq!(report.render_text(), format!("{}\n", INVALID_MESSAGE));
    }

    #[test]
    fn keyword_mode_changes_the_verdict() {
        assert!(!Report::build("whiletrue", KeywordMode::Prefix, false).valid);
        assert!(Report::build("whiletrue", KeywordMode::WholeWord, false).valid);
    }

    #[test]
    fn json_report_shape() {
        let report = Report::build("while (x < 5) { y", KeywordMode::Prefix, true);
        let value: serde_json::Value = serde_json::from_str(&report.render_json().unwrap()).unwrap();

        assert_eq!(value["valid"], false);
        assert!(value["statistics"].is_null());
        assert_eq!(value["error"]["expected"], "r_brace_after_block");
        assert_eq!(value["error"]["found"]["type"], "end_of_input");
        assert_eq!(value["tokens"].as_array().map(Vec::len), Some(8));
    }

    #[test]
    fn tokens_are_omitted_unless_requested() {
        let report = Report::build("x", KeywordMode::Prefix, false);
        let value: serde_json::Value = serde_json::from_str(&report.render_json().unwrap()).unwrap();
        assert!(value.get("tokens").is_none());
        assert_eq!(value["statistics"]["variables"][0], "x");
    }
}
