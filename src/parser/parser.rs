/*
 * ==========================================================================
 * WHILEBOOL - Boolean While-Language Recognizer
 * ==========================================================================
 *
 * Core Recursive-Descent Recognizer Entry Point
 *
 * This file defines the `Parser` structure and the public `recognize()`
 * driver used to decide whether a token sequence is a valid program.
 *
 * The grammar itself is split across multiple modules:
 * - `statements.rs`   → Program, statement, `while` and block rules
 * - `expressions.rs`  → Expression grammar & operator precedence
 * - `helpers.rs`      → Token matching, consumption, and error helpers
 *
 * --------------------------------------------------------------------------
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
use crate::lexer::token::Token;
use tracing::debug;

/// The grammar recognizer.
///
/// This structure holds:
/// - A borrowed view of the token sequence produced by the lexer
/// - The cursor into that sequence
///
/// A `Parser` lives for exactly one call to [`recognize`]. The cursor only
/// moves forward and is never shared, so recognizing several inputs at
/// once (even on different threads) needs no coordination.
pub struct Parser<'a> {
    /// Complete list of tokens to be recognized.
    pub(crate) tokens: &'a [Token],

    /// Current cursor position. Equal to `tokens.len()` at end of input.
    pub(crate) current: usize,
}

/// Public entry point for recognition.
///
/// # Returns
/// - `Ok(())` if `tokens` is zero or more valid statements with nothing
///   left over
/// - `Err(SyntaxError)` describing the **first** violation
///
/// # Pipeline
/// ```text
/// Source → Lexer → Tokens → recognize → Ok(()) / SyntaxError
/// ```
pub fn recognize(tokens: &[Token]) -> Result<(), SyntaxError> {
    let mut parser = Parser::new(tokens);
    let result = parser.program();

    match &result {
        Ok(statements) => {
            debug!(target: "whilebool::parser", statements, tokens = tokens.len(), "Input recognized")
        }
        Err(error) => {
            debug!(target: "whilebool::parser", %error, span = %error.span, consumed = parser.current, "Input rejected")
        }
    }

    result.map(|_| ())
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, current: 0 }
    }

    /// Number of tokens consumed so far.
    pub fn position(&self) -> usize {
        self.current
    }
}
