/*
 * ==========================================================================
 * WHILEBOOL - Boolean While-Language Recognizer
 * ==========================================================================
 *
 * File:      keywords.rs
 * Purpose:   Defines the reserved keywords and how the lexer matches them.
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

use crate::lexer::token::TokenKind;

/// Reserved words in the order the lexer tries them.
pub const KEYWORDS: [(&str, TokenKind); 4] = [
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("if", TokenKind::If),
    ("while", TokenKind::While),
];

/// Controls whether a keyword must stand alone as a whole word.
///
/// # Modes
/// - `Prefix`: a keyword matches wherever its spelling starts, even in the
///   middle of a longer word. `whiletrue` lexes as `while` `true`, and
///   `iffy` lexes as `if` followed by the identifier `fy`.
/// - `WholeWord`: a keyword only matches when the next character cannot
///   continue an identifier. `whiletrue` lexes as one identifier.
///
/// `Prefix` is the default because it decides which inputs are accepted;
/// switching modes changes the verdict for inputs like `iffy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeywordMode {
    #[default]
    Prefix,
    WholeWord,
}

/// Tries every keyword against the characters starting at `input[0]`.
///
/// # Returns
/// - `Some((kind, len))` for the first keyword that matches under `mode`
/// - `None` if the identifier rule should handle this position
pub fn match_keyword(input: &[char], mode: KeywordMode) -> Option<(TokenKind, usize)> {
    KEYWORDS.iter().find_map(|(word, kind)| {
        let len = word.chars().count();
        if input.len() < len || !input.iter().zip(word.chars()).all(|(a, b)| *a == b) {
            return None;
        }

        if mode == KeywordMode::WholeWord && input.get(len).is_some_and(|c| continues_word(*c)) {
            return None;
        }

        Some((*kind, len))
    })
}

/// Characters allowed after the first character of an identifier.
pub fn continues_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn prefix_mode_ignores_word_boundaries() {
        assert_eq!(
            match_keyword(&chars("whiletrue"), KeywordMode::Prefix),
            Some((TokenKind::While, 5))
        );
        assert_eq!(
            match_keyword(&chars("iffy"), KeywordMode::Prefix),
            Some((TokenKind::If, 2))
        );
    }

    #[test]
    fn whole_word_mode_requires_a_boundary() {
        assert_eq!(match_keyword(&chars("whiletrue"), KeywordMode::WholeWord), None);
        assert_eq!(
            match_keyword(&chars("while("), KeywordMode::WholeWord),
            Some((TokenKind::While, 5))
        );
        assert_eq!(
            match_keyword(&chars("false"), KeywordMode::WholeWord),
            Some((TokenKind::False, 5))
        );
    }

    #[test]
    fn short_input_never_matches() {
        assert_eq!(match_keyword(&chars("tru"), KeywordMode::Prefix), None);
        assert_eq!(match_keyword(&chars("whil"), KeywordMode::Prefix), None);
    }
}
