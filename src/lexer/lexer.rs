/*
 * ==========================================================================
 * WHILEBOOL - Boolean While-Language Recognizer
 * ==========================================================================
 *
 * File:      lexer.rs
 * Purpose:   Converts raw source text into an ordered token sequence.
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

use crate::lexer::keywords::{continues_word, match_keyword, KeywordMode};
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;
use tracing::{debug, trace};

pub struct Lexer {
    chars: Vec<char>,
    current: usize,
    line: usize,
    column: usize,
    mode: KeywordMode,
    pub tokens: Vec<Token>,
}

impl Lexer {
    /// Creates a new lexer over `source`.
    ///
    /// # Returns
    /// A lexer with:
    /// - Cursor at position `0`
    /// - Line counter set to `1`, column counter set to `0`
    /// - Empty token output buffer
    pub fn new(source: &str, mode: KeywordMode) -> Self {
        Self {
            chars: source.chars().collect(),
            current: 0,
            line: 1,
            column: 0,
            mode,
            tokens: Vec::new(),
        }
    }

    /// Performs complete lexical analysis over the entire source input.
    ///
    /// # Behavior
    /// - Drops whitespace
    /// - Never fails: unrecognized characters become `TokenKind::Unknown`
    /// - Does **not** append an end-of-file token; the end of the vector
    ///   is the end of input
    ///
    /// # Output
    /// Results are written into `self.tokens`.
    pub fn scan_tokens(&mut self) {
        while !self.is_at_end() {
            self.scan_token();
        }

        debug!(target: "whilebool::lexer", count = self.tokens.len(), "Tokenization complete");
    }

    /// Scans at most one token starting at the current position.
    ///
    /// Matching order at each position:
    /// 1. Two-character operators (`==`, `!=`, `<=`, `>=`, `&&`, `||`)
    ///    before their one-character prefixes (`<`, `>`, `!`)
    /// 2. Delimiters
    /// 3. Keywords, before the identifier rule
    /// 4. Identifiers, then numbers
    /// 5. Whitespace (skipped)
    /// 6. Anything else as a single `Unknown` character
    ///
    /// Every call consumes at least one character.
    fn scan_token(&mut self) {
        let start = self.span();
        let ch = self.advance();

        match ch {
            '=' => {
                if self.match_char('=') {
                    self.push(TokenKind::Eq, start);
                } else {
                    self.push_text(TokenKind::Unknown, "=", start);
                }
            }

            '!' => {
                let kind = if self.match_char('=') {
                    TokenKind::Ne
                } else {
                    TokenKind::Not
                };
                self.push(kind, start);
            }

            '<' => {
                let kind = if self.match_char('=') {
                    TokenKind::Le
                } else {
                    TokenKind::Lt
                };
                self.push(kind, start);
            }

            '>' => {
                let kind = if self.match_char('=') {
                    TokenKind::Ge
                } else {
                    TokenKind::Gt
                };
                self.push(kind, start);
            }

            '&' => {
                if self.match_char('&') {
                    self.push(TokenKind::And, start);
                } else {
                    self.push_text(TokenKind::Unknown, "&", start);
                }
            }

            '|' => {
                if self.match_char('|') {
                    self.push(TokenKind::Or, start);
                } else {
                    self.push_text(TokenKind::Unknown, "|", start);
                }
            }

            '(' => self.push(TokenKind::LParen, start),
            ')' => self.push(TokenKind::RParen, start),
            '{' => self.push(TokenKind::LBrace, start),
            '}' => self.push(TokenKind::RBrace, start),

            c if c.is_ascii_alphabetic() => self.word(start),

            c if c.is_ascii_digit() => self.number(start),

            c if is_blank(c) => {}

            other => {
                trace!(target: "whilebool::lexer", character = ?other, %start, "Unrecognized character");
                self.push_text(TokenKind::Unknown, other.to_string(), start);
            }
        }
    }

    /// Lexes a keyword or an identifier whose first character has already
    /// been consumed.
    ///
    /// Keywords are tried first, against the text starting at the
    /// consumed character. In `KeywordMode::Prefix` this means a keyword
    /// can be split off the front of a longer word; the rest of that word
    /// is lexed as a fresh token on the next call.
    fn word(&mut self, start: Span) {
        let begin = self.current - 1;

        if let Some((kind, len)) = match_keyword(&self.chars[begin..], self.mode) {
            for _ in 1..len {
                self.advance();
            }
            self.push(kind, start);
            return;
        }

        while continues_word(self.peek()) {
            self.advance();
        }

        let text: String = self.chars[begin..self.current].iter().collect();
        self.push_text(TokenKind::Identifier, text, start);
    }

    /// Lexes a run of ASCII digits. No sign, fraction or exponent.
    fn number(&mut self, start: Span) {
        let begin = self.current - 1;

        while self.peek().is_ascii_digit() {
            self.advance();
        }

        let text: String = self.chars[begin..self.current].iter().collect();
        self.push_text(TokenKind::Number, text, start);
    }

    /// Pushes a token whose text is fixed by its kind.
    fn push(&mut self, kind: TokenKind, span: Span) {
        let text = kind.fixed_text().unwrap_or_default();
        self.push_text(kind, text, span);
    }

    fn push_text(&mut self, kind: TokenKind, text: impl Into<String>, span: Span) {
        let token = Token::new(kind, text, span);
        trace!(target: "whilebool::lexer", kind = ?token.kind, lexeme = %token.lexeme, %span, "Produced token");
        self.tokens.push(token);
    }

    /// Conditionally consumes the next character.
    ///
    /// # Returns
    /// - `true` if the next character was `expected` and was consumed
    /// - `false` otherwise
    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.chars[self.current] != expected {
            return false;
        }
        self.advance();
        true
    }

    /// Consumes one character, keeping line and column up to date.
    ///
    /// Caller must ensure the end of input has not been reached.
    fn advance(&mut self) -> char {
        let ch = self.chars[self.current];
        self.current += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }

        ch
    }

    /// Returns the current character, or `'\0'` at end of input.
    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    fn span(&self) -> Span {
        Span::new(self.line, self.column)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}

/// The whitespace the lexer drops: space, tab, line feed, vertical tab,
/// form feed and carriage return.
///
/// Other Unicode spaces such as U+00A0 are not skipped and lex as
/// `Unknown`.
pub fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}
