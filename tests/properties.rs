//! Property-based tests for the lexer and recognizer.
//!
//! 1. **Lexer never panics** on arbitrary input
//! 2. **Lexer is deterministic**
//! 3. **No character is lost**: token lexemes plus dropped whitespace
//!    rebuild the input
//! 4. **Recognizer is total**: any token sequence gives `Ok` or a
//!    structured error
//! 5. **Generated programs are accepted**

use proptest::prelude::*;
use whilebool::lexer::is_blank;
use whilebool::{check, recognize, tokenize, TokenKind};

// ============================================================================
// Generators
// ============================================================================

/// Characters from the language's alphabet plus a few it does not know.
fn alphabet_string() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            'a', 'b', 'x', 'w', 'h', 'i', 'l', 'e', 't', 'r', 'u', 'f', 's', '0', '1', '9', '_',
            '(', ')', '{', '}', '!', '=', '<', '>', '&', '|', ' ', '\n', '\t', '\x0B', '+', 'é',
            '\u{00A0}', '\u{3000}',
        ]),
        0..64,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn primary() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("true".to_string()),
        Just("false".to_string()),
        // Single lowercase letters, or names starting uppercase so no
        // keyword can be split off the front.
        "[a-z]",
        "[A-Z][a-zA-Z0-9_]{0,4}",
        "[0-9]{1,3}",
    ]
}

fn binary_operator() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["||", "&&", "==", "!=", "<", "<=", ">", ">="])
}

fn expression() -> impl Strategy<Value = String> {
    primary().prop_recursive(4, 32, 3, |inner| {
        prop_oneof![
            (inner.clone(), binary_operator(), inner.clone())
                .prop_map(|(l, op, r)| format!("{l} {op} {r}")),
            inner.clone().prop_map(|e| format!("!{e}")),
            inner.prop_map(|e| format!("({e})")),
        ]
    })
}

fn statement() -> impl Strategy<Value = String> {
    let leaf = expression();
    leaf.prop_recursive(3, 16, 3, |inner| {
        (expression(), prop::collection::vec(inner, 0..3))
            .prop_map(|(cond, body)| format!("while ({cond}) {{ {} }}", body.join(" ")))
    })
}

fn program() -> impl Strategy<Value = String> {
    prop::collection::vec(statement(), 0..4).prop_map(|stmts| stmts.join("\n"))
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn lexer_never_panics(source in any::<String>()) {
        let _ = tokenize(&source);
    }

    #[test]
    fn lexer_is_deterministic(source in alphabet_string()) {
        prop_assert_eq!(tokenize(&source), tokenize(&source));
    }

    #[test]
    fn lexemes_rebuild_the_input_without_whitespace(source in alphabet_string()) {
        let rebuilt: String = tokenize(&source).into_iter().map(|t| t.lexeme).collect();
        let expected: String = source.chars().filter(|c| !is_blank(*c)).collect();
        prop_assert_eq!(rebuilt, expected);
    }

    #[test]
    fn unknown_tokens_are_single_characters(source in alphabet_string()) {
        for token in tokenize(&source) {
            if token.kind == TokenKind::Unknown {
                prop_assert_eq!(token.lexeme.chars().count(), 1);
            }
        }
    }

    #[test]
    fn recognizer_is_total(source in alphabet_string()) {
        let tokens = tokenize(&source);
        match recognize(&tokens) {
            Ok(()) => {}
            Err(error) => prop_assert!(!error.to_string().is_empty()),
        }
    }

    #[test]
    fn generated_programs_are_accepted(source in program()) {
        prop_assert!(check(&source).is_ok(), "rejected: {:?}", source);
    }

    #[test]
    fn trailing_operator_is_rejected(source in expression()) {
        let source = format!("{source} &&");
        prop_assert!(check(&source).is_err());
    }
}
