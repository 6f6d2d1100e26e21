/*
 * ==========================================================================
 * WHILEBOOL - Boolean While-Language Recognizer
 * ==========================================================================
 *
 * File:     statements.rs
 * Purpose:  Statement-level grammar.
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 *
 * --------------------------------------------------------------------------
 *  LICENSE
 * --------------------------------------------------------------------------
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
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 *
 *   Program    → Statement*
 *   Statement  → WhileStmt | Expression
 *   WhileStmt  → "while" "(" Expression ")" Block
 *   Block      → "{" Statement* "}"
 *
 * Statements need no separator: the next statement starts right after
 * the last token the previous one consumed.
 *
 * Open blocks are counted rather than recursed into, the same way
 * expressions count open groups.
 *
 * ==========================================================================
 */

use crate::error::{Expected, SyntaxError};
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;
use tracing::trace;

impl<'a> Parser<'a> {
    /// program → statement*
    ///
    /// Runs until every token is consumed. Empty input is a valid
    /// program with zero statements.
    ///
    /// One token of lookahead picks the statement: `while` starts a loop,
    /// anything else must start an expression. Inside a block, `}` or end
    /// of input ends the statement list; end of input is then reported as
    /// a missing `}`.
    ///
    /// # Returns
    /// The number of top-level statements recognized.
    pub fn program(&mut self) -> Result<usize, SyntaxError> {
        let mut count = 0;
        let mut open_blocks = 0usize;

        loop {
            if open_blocks > 0 {
                if self.is_at_end() || self.check(TokenKind::RBrace) {
                    self.consume(TokenKind::RBrace, Expected::RBraceAfterBlock)?;
                    open_blocks -= 1;
                    if open_blocks == 0 {
                        count += 1;
                    }
                    continue;
                }
            } else if self.is_at_end() {
                return Ok(count);
            }

            if self.match_kind(TokenKind::While) {
                self.while_header()?;
                open_blocks += 1;
            } else {
                self.expression()?;
                if open_blocks == 0 {
                    count += 1;
                }
            }
        }
    }

    /// whileStmt → "while" "(" expression ")" "{" ...
    ///
    /// Called with `while` already consumed; stops after the `{`. The body
    /// must be a braced block, so a bare statement is rejected.
    fn while_header(&mut self) -> Result<(), SyntaxError> {
        trace!(target: "whilebool::parser", position = self.current, "while statement");

        self.consume(TokenKind::LParen, Expected::LParenAfterWhile)?;
        self.expression()?;
        self.consume(TokenKind::RParen, Expected::RParenAfterCondition)?;
        self.consume(TokenKind::LBrace, Expected::LBraceBeforeBlock)
    }
}
