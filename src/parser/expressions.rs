/*
 * ==========================================================================
 * WHILEBOOL - Boolean While-Language Recognizer
 * ==========================================================================
 *
 * File:     expressions.rs
 * Purpose:  Implements the boolean expression grammar with one token of
 *           lookahead and an explicit count of open groups.
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
 * Precedence, loosest first:
 *
 *   or → and → relational → not → primary
 *
 * No tree is built, so precedence never changes which tokens are consumed:
 * every binary level loops over the same shape, an operand followed by
 * operator/operand pairs. The rules therefore flatten to
 *
 *   expression → operand ( binaryOp operand )*
 *   operand    → "!"* ( atom | "(" expression ")" )
 *
 * Groups are tracked with a counter instead of recursion, so nesting depth
 * is limited only by the input length.
 *
 * ==========================================================================
 */

use crate::error::{Expected, SyntaxError};
use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;

impl<'a> Parser<'a> {
    /// expression → operand ( ( "||" | "&&" | comparison ) operand )*
    ///
    /// `a < b < c` is accepted: the loop keeps taking operator/operand
    /// pairs without asking whether the chain means anything.
    pub fn expression(&mut self) -> Result<(), SyntaxError> {
        let mut open_groups = 0usize;

        loop {
            self.operand_prefix(&mut open_groups)?;

            // After an operand: either an operator asks for another one,
            // or the innermost open group has to close.
            loop {
                if self.match_where(is_binary_operator) {
                    break;
                }

                if open_groups == 0 {
                    return Ok(());
                }

                self.consume(TokenKind::RParen, Expected::RParenAfterGroup)?;
                open_groups -= 1;
            }
        }
    }

    /// Consumes the start of an operand: any number of `!` and `(`, then
    /// a literal, identifier or number.
    ///
    /// Each `(` consumed bumps `open_groups`; the matching `)` is taken by
    /// [`Parser::expression`] once the group's contents are done.
    fn operand_prefix(&mut self, open_groups: &mut usize) -> Result<(), SyntaxError> {
        loop {
            if self.match_kind(TokenKind::Not) {
                continue;
            }

            if self.match_kind(TokenKind::LParen) {
                *open_groups += 1;
                continue;
            }

            if self.match_where(is_atom) {
                return Ok(());
            }

            return Err(self.error_here(Expected::Expression));
        }
    }
}

/// `true`, `false`, identifiers and numbers.
fn is_atom(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::True | TokenKind::False | TokenKind::Identifier | TokenKind::Number
    )
}

/// `||`, `&&` and the six comparisons.
fn is_binary_operator(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Or | TokenKind::And) || kind.is_comparison()
}

#[cfg(test)]
mod tests {
    use crate::error::Expected;
    use crate::lexer::tokenize;
    use crate::parser::parser::Parser;

    /// Runs one expression rule and reports how many tokens it consumed.
    fn consumed(source: &str) -> usize {
        let tokens = tokenize(source);
        let mut parser = Parser::new(&tokens);
        parser.expression().expect("expression should parse");
        parser.position()
    }

    #[test]
    fn expression_stops_before_a_token_it_cannot_extend() {
        // `b` starts the next statement, it does not belong to `a`.
        assert_eq!(consumed("a b"), 1);
        assert_eq!(consumed("a && b c"), 3);
    }

    #[test]
    fn expression_consumes_the_full_chain() {
        assert_eq!(consumed("a < b < c"), 5);
        assert_eq!(consumed("!!!x"), 4);
        assert_eq!(consumed("(a || b) && c == 1"), 9);
        assert_eq!(consumed("!(!(a) < (b)) || c"), 13);
    }

    #[test]
    fn group_closes_before_the_next_statement() {
        // `(a) b`: the group ends at `)` and `b` is left for the caller.
        assert_eq!(consumed("(a) b"), 3);
        assert_eq!(consumed("((a)) && b c"), 7);
    }

    #[test]
    fn errors_inside_groups() {
        let tokens = tokenize("((a &&) b");
        let error = Parser::new(&tokens).expression().unwrap_err();
        assert_eq!(error.expected, Expected::Expression);
        assert_eq!(error.span.column, 6);

        let tokens = tokenize("((a) b");
        let error = Parser::new(&tokens).expression().unwrap_err();
        assert_eq!(error.expected, Expected::RParenAfterGroup);
        assert_eq!(error.span.column, 5);
    }
}
