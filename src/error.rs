/*
 * ==========================================================================
 * WHILEBOOL - Boolean While-Language Recognizer
 * ==========================================================================
 *
 * File:      error.rs
 * Purpose:   The syntax error reported by the recognizer, and the error
 *            type used by the command-line shell.
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

use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;
use serde::Serialize;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Stable code for every syntax error.
pub const SYNTAX_ERROR_CODE: &str = "E0001";

/// The grammatical construct the recognizer was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Expected {
    /// `while` must be followed by `(`.
    LParenAfterWhile,
    /// The loop condition must be closed with `)`.
    RParenAfterCondition,
    /// A loop body must start with `{`.
    LBraceBeforeBlock,
    /// A loop body must end with `}`.
    RBraceAfterBlock,
    /// A parenthesized expression must be closed with `)`.
    RParenAfterGroup,
    /// A primary expression: `true`, `false`, identifier, number or `(`.
    Expression,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Expected::LParenAfterWhile => "'(' after 'while'",
            Expected::RParenAfterCondition => "')' after the while condition",
            Expected::LBraceBeforeBlock => "'{' to open the block",
            Expected::RBraceAfterBlock => "'}' to close the block",
            Expected::RParenAfterGroup => "')' to close the parenthesized expression",
            Expected::Expression => "an expression",
        };
        f.write_str(text)
    }
}

/// What the recognizer saw instead of the expected construct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Found {
    Token { kind: TokenKind, lexeme: String },
    EndOfInput,
}

impl Found {
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Found::EndOfInput)
    }
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Token { lexeme, .. } => write!(f, "'{}'", lexeme),
            Found::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// The first grammar violation in a token sequence.
///
/// Recognition stops at the first error. There is no separate lexical
/// error: characters the lexer did not recognize show up here as
/// `Found::Token` with kind `TokenKind::Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("expected {expected}, found {found}")]
pub struct SyntaxError {
    /// Stable error code (`E0001`)
    pub code: &'static str,

    pub expected: Expected,

    pub found: Found,

    /// Start of the offending token, or the position just past the last
    /// token when input ended early.
    pub span: Span,

    /// Optional note / help text
    pub help: Option<String>,
}

impl SyntaxError {
    pub fn new(expected: Expected, found: Found, span: Span) -> Self {
        Self {
            code: SYNTAX_ERROR_CODE,
            expected,
            found,
            span,
            help: None,
        }
    }

    /// Error for an offending token.
    ///
    /// Unknown characters get a help note since they can never be valid
    /// anywhere in the grammar.
    pub fn unexpected(expected: Expected, token: &Token) -> Self {
        let error = Self::new(
            expected,
            Found::Token {
                kind: token.kind,
                lexeme: token.lexeme.clone(),
            },
            token.span,
        );

        match token.kind {
            TokenKind::Unknown => error.with_help(
                "only '!', '&&', '||', comparisons, parentheses and braces are supported",
            ),
            TokenKind::If => error.with_help("'if' is reserved but not supported as a statement"),
            _ => error,
        }
    }

    /// Error for input that ended while `expected` was still required.
    pub fn end_of_input(expected: Expected, span: Span) -> Self {
        Self::new(expected, Found::EndOfInput, span)
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Errors surfaced by the command-line shell.
///
/// An invalid program is not one of these: it is a verdict, carried by the
/// report, and exits with a different status.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file '{}': {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot encode report: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
