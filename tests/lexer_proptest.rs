//! Property-based tests for the XProtocol tokenizer and text utilities

use proptest::prelude::*;
use siemens_xprotocol::xprotocol::lexer::{tokenize, tokenize_with_spans, Token};
use siemens_xprotocol::{split_ascconv, unescape_quotes};

/// Helper: strip spans from strict tokenizer output
fn strip_spans(source: &str) -> Vec<Token> {
    tokenize_with_spans(source)
        .expect("source should tokenize")
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

proptest! {
    #[test]
    fn tokenizer_never_panics(source in "\\PC*") {
        for spanned in tokenize(&source).flatten() {
            prop_assert!(spanned.span.end <= source.len());
            prop_assert!(spanned.position.line >= 1);
            prop_assert!(spanned.position.column >= 1);
        }
    }

    #[test]
    fn integers_round_trip(value in any::<i64>()) {
        prop_assert_eq!(strip_spans(&value.to_string()), vec![Token::Integer(value)]);
    }

    #[test]
    fn quote_free_strings_round_trip(text in "[A-Za-z0-9 _.:%/<>{}\\n-]*") {
        prop_assume!(text != "true" && text != "false");
        let source = format!("\"{}\"", text);
        prop_assert_eq!(strip_spans(&source), vec![Token::String(text)]);
    }

    #[test]
    fn doubled_quotes_stay_in_string_text(left in "[a-z]{0,8}", right in "[a-z]{0,8}") {
        let source = format!("\"{}\"\"{}\"", left, right);
        let expected = format!("{}\"\"{}", left, right);
        prop_assert_eq!(strip_spans(&source), vec![Token::String(expected.clone())]);
        prop_assert_eq!(unescape_quotes(&expected), format!("{}\"{}", left, right));
    }

    #[test]
    fn unescape_never_lengthens(text in "[a-z\" ]*") {
        prop_assert!(unescape_quotes(&text).len() <= text.len());
    }

    #[test]
    fn unescape_is_identity_without_quotes(text in "[^\"]*") {
        prop_assert_eq!(unescape_quotes(&text), text);
    }

    #[test]
    fn brace_nesting_tokenizes_to_braces(depth in 1usize..40) {
        let source = format!("{}{}", "{".repeat(depth), "}".repeat(depth));
        let tokens = strip_spans(&source);
        prop_assert_eq!(tokens.len(), depth * 2);
        prop_assert!(tokens.iter().all(Token::is_brace));
    }

    #[test]
    fn ascconv_split_keeps_both_parts(prefix in "[A-Za-z <>{}\n]*", body in "[a-z =0-9\n]*") {
        let block = format!("### ASCCONV BEGIN ###\n{}\n### ASCCONV END ###", body);
        let text = format!("{}\n{}", prefix, block);
        let (before, ascconv) = split_ascconv(&text).unwrap();
        prop_assert_eq!(before, format!("{}\n", prefix));
        prop_assert_eq!(ascconv, block);
    }
}
