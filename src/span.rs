/*
 * ==========================================================================
 * WHILEBOOL - Boolean While-Language Recognizer
 * ==========================================================================
 *
 * File:      span.rs
 * Purpose:   Source positions attached to tokens for diagnostics.
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

use serde::Serialize;
use std::fmt;

/// Location of the first character of a token.
///
/// - `line` is 1-based
/// - `column` is a 0-based character offset within that line
///
/// Spans exist purely for error reporting. The recognizer never looks
/// at them when deciding whether input is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Returns the span `width` characters further along the same line.
    pub fn advanced_by(self, width: usize) -> Self {
        Self {
            line: self.line,
            column: self.column + width,
        }
    }
}

impl fmt::Display for Span {
    /// Prints as `line:column` with a 1-based column, the way editors
    /// and compilers report positions.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column + 1)
    }
}
