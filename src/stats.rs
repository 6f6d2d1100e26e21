/*
 * ==========================================================================
 * WHILEBOOL - Boolean While-Language Recognizer
 * ==========================================================================
 *
 * File:      stats.rs
 * Purpose:   Lexical statistics gathered from a token sequence.
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
use serde::Serialize;
use std::collections::BTreeSet;

/// Counts gathered in one pass over a token sequence.
///
/// This works on tokens only; it does not care whether the tokens form a
/// valid program. The command-line shell only reports it for valid input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    /// Distinct identifiers that are exactly one letter long, sorted.
    pub variables: BTreeSet<String>,

    /// Every number token that is a single digit. Repeats count again.
    pub single_digit_constants: usize,

    /// `==`, `!=`, `<`, `<=`, `>` and `>=` tokens.
    pub comparison_operators: usize,

    /// `while` keyword tokens.
    pub while_statements: usize,
}

impl Statistics {
    pub fn collect(tokens: &[Token]) -> Self {
        let mut stats = Self::default();

        for token in tokens {
            match token.kind {
                TokenKind::Identifier if is_single_char(&token.lexeme) => {
                    stats.variables.insert(token.lexeme.clone());
                }
                TokenKind::Number if is_single_char(&token.lexeme) => {
                    stats.single_digit_constants += 1;
                }
                kind if kind.is_comparison() => stats.comparison_operators += 1,
                TokenKind::While => stats.while_statements += 1,
                _ => {}
            }
        }

        stats
    }

    pub fn distinct_variables(&self) -> usize {
        self.variables.len()
    }
}

fn is_single_char(text: &str) -> bool {
    text.chars().count() == 1
}
