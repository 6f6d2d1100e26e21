/*
 * ==========================================================================
 * WHILEBOOL - Boolean While-Language Recognizer
 * ==========================================================================
 *
 * File:     lexer/mod.rs
 * Purpose:  Root module for lexical analysis.
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

/// Token kinds and the token value.
pub mod token;

/// Reserved words and keyword matching modes.
pub mod keywords;

/// The character scanner.
pub mod lexer;

pub use keywords::KeywordMode;
pub use lexer::is_blank;
pub use token::{Token, TokenKind};

use lexer::Lexer;

/// Tokenizes `source` with the default keyword mode (`KeywordMode::Prefix`).
///
/// Never fails. Whitespace is dropped and every other character ends up in
/// exactly one token, in input order.
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with(source, KeywordMode::default())
}

/// Tokenizes `source` with an explicit keyword mode.
pub fn tokenize_with(source: &str, mode: KeywordMode) -> Vec<Token> {
    let mut lexer = Lexer::new(source, mode);
    lexer.scan_tokens();
    lexer.tokens
}
