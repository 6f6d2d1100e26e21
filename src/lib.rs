/*
 * ==========================================================================
 * WHILEBOOL - Boolean While-Language Recognizer
 * ==========================================================================
 *
 * File:      lib.rs
 * Purpose:   Crate root. Wires the lexer, recognizer, statistics and the
 *            pieces used by the command-line shell.
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

//! Recognizer for a small boolean language with `while` loops.
//!
//! ```text
//! Source Text → lexer::tokenize → Vec<Token> → parser::recognize → Ok(()) / SyntaxError
//!                                     └──────→ Statistics::collect
//! ```
//!
//! Nothing here builds a syntax tree or evaluates anything. The crate
//! answers one question per input: is it a valid sequence of statements?

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod logging;
pub mod parser;
pub mod report;
pub mod span;
pub mod stats;

pub use error::{Expected, Found, SyntaxError};
pub use lexer::{tokenize, tokenize_with, KeywordMode, Token, TokenKind};
pub use parser::recognize;
pub use span::Span;
pub use stats::Statistics;

/// Tokenizes and recognizes `source` with the default keyword mode.
///
/// On success the tokens are handed back so callers can gather
/// statistics without tokenizing again.
pub fn check(source: &str) -> Result<Vec<Token>, SyntaxError> {
    check_with(source, KeywordMode::default())
}

/// Same as [`check`] with an explicit keyword mode.
pub fn check_with(source: &str, mode: KeywordMode) -> Result<Vec<Token>, SyntaxError> {
    let tokens = tokenize_with(source, mode);
    recognize(&tokens)?;
    Ok(tokens)
}
