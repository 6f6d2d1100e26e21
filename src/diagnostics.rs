/*
 * ==========================================================================
 * WHILEBOOL - Boolean While-Language Recognizer
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
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
use crate::span::Span;
use std::fmt::Write;

/// Renders compiler-style diagnostics for syntax errors.
///
/// This printer:
/// - Formats errors with file/line/column information
/// - Displays the offending source line
/// - Highlights the exact error position using a caret (`^`)
/// - Optionally shows a helpful follow-up hint
///
/// The output is inspired by `rustc` diagnostics and stays readable
/// without color.
pub struct DiagnosticPrinter {
    /// Full source text, kept so the offending line can be shown.
    source: String,

    /// Name shown in the `-->` line (a path, or `<stdin>`).
    file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Builds the diagnostic text.
    ///
    /// # Output Example
    /// ```text
    /// error[E0001]: expected '}' to close the block, found end of input
    ///   --> loop.txt:1:19
    ///    |
    ///  1 | while (x < 5) { y
    ///    |                   ^
    /// ```
    pub fn render(&self, error: &SyntaxError) -> String {
        let Span { line, column } = error.span;

        // Lines are 1-indexed in diagnostics, vectors are 0-indexed.
        let src_line = self
            .source
            .lines()
            .nth(line.saturating_sub(1))
            .unwrap_or("");

        let mut out = String::new();

        let _ = writeln!(
            out,
            "error[{}]: {}\n  --> {}:{}",
            error.code, error, self.file_name, error.span
        );
        let _ = writeln!(out, "   |");
        let _ = writeln!(out, "{:>3} | {}", line, src_line);
        let _ = writeln!(out, "   | {}^", " ".repeat(column));

        if let Some(help) = &error.help {
            let _ = writeln!(out, "\nhelp: {}", help);
        }

        out
    }

    /// Prints the rendered diagnostic to stderr.
    pub fn print(&self, error: &SyntaxError) {
        eprint!("{}", self.render(error));
    }
}
