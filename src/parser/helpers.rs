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

use crate::error::{Expected, SyntaxError};
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;
use crate::span::Span;

impl<'a> Parser<'a> {
    /// Returns the current token without consuming it, or `None` at end
    /// of input.
    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.current)
    }

    /// Checks if the current token has the given kind.
    ///
    /// Always `false` at end of input.
    pub fn check(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|token| token.kind == kind)
    }

    /// Consumes the current token if it has the given kind.
    pub fn match_kind(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the current token if its kind satisfies `predicate`.
    pub fn match_where(&mut self, predicate: impl Fn(TokenKind) -> bool) -> bool {
        match self.peek() {
            Some(token) if predicate(token.kind) => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    /// Consumes a required token or fails with `expected`.
    pub fn consume(&mut self, kind: TokenKind, expected: Expected) -> Result<(), SyntaxError> {
        if self.match_kind(kind) {
            Ok(())
        } else {
            Err(self.error_here(expected))
        }
    }

    /// Advances one token forward. Does nothing at end of input.
    pub fn advance(&mut self) {
        if !self.is_at_end() {
            self.current += 1;
        }
    }

    /// Returns true once every token has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// Builds the error for the current position: the offending token if
    /// there is one, otherwise end of input.
    pub fn error_here(&self, expected: Expected) -> SyntaxError {
        match self.peek() {
            Some(token) => SyntaxError::unexpected(expected, token),
            None => SyntaxError::end_of_input(expected, self.end_span()),
        }
    }

    /// Position just past the last token.
    ///
    /// Tokens never span lines, so this is the last token's start moved
    /// right by its width.
    fn end_span(&self) -> Span {
        self.tokens
            .last()
            .map(|token| token.span.advanced_by(token.width()))
            .unwrap_or_else(|| Span::new(1, 0))
    }
}
