/*
 * ==========================================================================
 * WHILEBOOL - Boolean While-Language Recognizer
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the closed set of lexical token kinds and the token
 *            value produced by the lexer and read by the recognizer.
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

use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// Represents the **category of a lexical token**.
///
/// The set is closed: every non-whitespace character of the input ends up
/// in exactly one token of one of these kinds. Characters the language does
/// not know about become [`TokenKind::Unknown`] instead of being dropped, so
/// malformed input is reported by the recognizer rather than the lexer.
///
/// # Compiler Pipeline Role
/// ```text
/// Source Text → Lexer → TokenKind → Recognizer → valid / SyntaxError
///                          └──────→ Statistics
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Relational operators
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,

    // Logical operators
    /// `&&`
    And,
    /// `||`
    Or,
    /// `!`
    Not,

    // Delimiters
    LParen,
    RParen,
    LBrace,
    RBrace,

    // Keywords
    True,
    False,
    /// Reserved by the lexer. No grammar rule accepts it.
    If,
    While,

    /// An ASCII letter followed by letters, digits or `_`.
    Identifier,

    /// One or more ASCII decimal digits.
    Number,

    /// A single character no other rule matched.
    Unknown,
}

impl TokenKind {
    /// Returns the literal spelling for kinds whose text never varies.
    ///
    /// `Identifier`, `Number` and `Unknown` return `None` since their text
    /// comes from the source.
    pub fn fixed_text(self) -> Option<&'static str> {
        use TokenKind::*;

        let text = match self {
            Eq => "==",
            Ne => "!=",
            Lt => "<",
            Le => "<=",
            Gt => ">",
            Ge => ">=",
            And => "&&",
            Or => "||",
            Not => "!",
            LParen => "(",
            RParen => ")",
            LBrace => "{",
            RBrace => "}",
            True => "true",
            False => "false",
            If => "if",
            While => "while",
            Identifier | Number | Unknown => return None,
        };

        Some(text)
    }

    /// `true` for the six relational operators.
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            TokenKind::Eq
                | TokenKind::Ne
                | TokenKind::Lt
                | TokenKind::Le
                | TokenKind::Gt
                | TokenKind::Ge
        )
    }
}

/// Represents a **single lexical token** produced by the lexer.
///
/// # Example Tokens (from `while (x < 5)`)
/// Spans are shown as `Span { line, column }`, with the column 0-based.
/// Printed with `Display` they read `1:1`, `1:8` and `1:12`.
/// ```text
/// while  →  { kind: While,      lexeme: "while", span: (1, 0) }
/// x      →  { kind: Identifier, lexeme: "x",     span: (1, 7) }
/// 5      →  { kind: Number,     lexeme: "5",     span: (1, 11) }
/// ```
///
/// Tokens are created once by the lexer and never mutated. The recognizer
/// only reads them by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    pub lexeme: String,

    /// Where the token starts in the source.
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// Number of characters the token covers.
    pub fn width(&self) -> usize {
        self.lexeme.chars().count()
    }
}

impl fmt::Display for Token {
    /// Formats a token for **user-facing output**: only the lexeme.
    ///
    /// In error output users care about *what they wrote*:
    /// ```text
    /// expected an expression, found '+'
    /// ```
    /// not `Token { kind: Unknown, lexeme: "+", span: ... }`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
