//! Implementation of the XProtocol tokenizer
//!
//! Logos does the matching; this module adds positions and error reporting
//! on top. [`Tokenizer`] is a lazy, single-pass iterator. It reports a bad
//! character as an error item and keeps going from the next character, so a
//! caller can collect every problem in one pass. [`tokenize_with_spans`] is
//! the strict form the parser uses: it stops at the first error.

use std::ops::Range;

use logos::Logos;
use serde::Serialize;

use crate::xprotocol::ast::position::{Position, SourceLocation};
use crate::xprotocol::error::LexError;
use crate::xprotocol::lexer::tokens::{LexErrorKind, Token};

/// A token together with where it was found
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Range<usize>,
    pub position: Position,
}

/// Lazy token stream over one source text
pub struct Tokenizer<'a> {
    source: &'a str,
    lexer: logos::Lexer<'a, Token>,
    /// Byte offset of the current lexer's input within `source`
    base: usize,
    location: SourceLocation<'a>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            lexer: Token::lexer(source),
            base: 0,
            location: SourceLocation::new(source),
        }
    }

    /// Drop the current lexer and start again at byte `offset` of the source
    fn restart_at(&mut self, offset: usize) {
        self.base = offset;
        self.lexer = Token::lexer(&self.source[offset..]);
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<SpannedToken, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.lexer.next()?;
        let local = self.lexer.span();
        let span = (local.start + self.base)..(local.end + self.base);
        let position = self.location.byte_to_position(span.start);

        Some(match result {
            Ok(token) => Ok(SpannedToken {
                token,
                span,
                position,
            }),
            // No rule matched: logos may hand back a long slice (an unclosed
            // string runs to the end), so only the first character is bad
            Err(LexErrorKind::UnexpectedCharacter) => {
                let width = self.lexer.slice().chars().next().map_or(span.len(), char::len_utf8);
                let end = span.start + width;
                self.restart_at(end);
                Err(LexError {
                    kind: LexErrorKind::UnexpectedCharacter,
                    text: self.source[span.start..end].to_string(),
                    span: span.start..end,
                    position,
                })
            }
            Err(kind) => Err(LexError {
                kind,
                text: self.lexer.slice().to_string(),
                span,
                position,
            }),
        })
    }
}

/// Start tokenizing a source text
pub fn tokenize(source: &str) -> Tokenizer<'_> {
    Tokenizer::new(source)
}

/// Tokenize a whole source text into `(token, byte range)` pairs, failing on
/// the first lexing error
pub fn tokenize_with_spans(source: &str) -> Result<Vec<(Token, Range<usize>)>, LexError> {
    tokenize(source)
        .map(|result| result.map(|spanned| (spanned.token, spanned.span)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xprotocol::lexer::tokens::{FloatLit, Tag, TypedTag, TypedTagKind};

    fn tokens(source: &str) -> Vec<Token> {
        tokenize(source)
            .map(|result| result.expect("lexes").token)
            .collect()
    }

    #[test]
    fn test_simple_tokenization() {
        assert_eq!(
            tokens(r#"<ParamLong."Count"> { 1 }"#),
            vec![
                Token::TypedTag(TypedTag {
                    kind: TypedTagKind::ParamLong,
                    name: "Count".to_string(),
                }),
                Token::LBrace,
                Token::Integer(1),
                Token::RBrace,
            ]
        );
    }

    #[test]
    fn test_literal_kinds() {
        assert_eq!(
            tokens(r#""true" "false" 22.3 -12"#),
            vec![
                Token::Bool(true),
                Token::Bool(false),
                Token::Float(FloatLit(22.3)),
                Token::Integer(-12),
            ]
        );
    }

    #[test]
    fn test_triple_quote_closes_string() {
        // One escaped quote, then the real closing delimiter
        assert_eq!(
            tokens(r#""abc""" <Name>"#),
            vec![
                Token::String(r#"abc"""#.to_string()),
                Token::Tag(Tag::Name),
            ]
        );
    }

    #[test]
    fn test_positions_track_lines() {
        let spanned: Vec<_> = tokenize("<XProtocol>\n{\n  <Name> \"x\"\n}")
            .map(|result| result.expect("lexes"))
            .collect();
        assert_eq!(spanned[0].position, Position::new(1, 1));
        assert_eq!(spanned[1].position, Position::new(2, 1));
        assert_eq!(spanned[2].position, Position::new(3, 3));
        assert_eq!(spanned[3].position, Position::new(3, 10));
        assert_eq!(spanned[4].position, Position::new(4, 1));
    }

    #[test]
    fn test_positions_after_multiline_string() {
        let spanned: Vec<_> = tokenize("\"a\nb\" 7")
            .map(|result| result.expect("lexes"))
            .collect();
        assert_eq!(spanned[1].token, Token::Integer(7));
        assert_eq!(spanned[1].position, Position::new(2, 4));
    }

    #[test]
    fn test_illegal_character_is_reported_and_skipped() {
        let results: Vec<_> = tokenize("{ # }").collect();
        assert_eq!(results.len(), 3);
        let error = results[1].clone().expect_err("illegal character");
        assert_eq!(error.kind, LexErrorKind::UnexpectedCharacter);
        assert_eq!(error.text, "#");
        assert_eq!(error.position, Position::new(1, 3));
        assert_eq!(results[2].clone().expect("lexes").token, Token::RBrace);
    }

    #[test]
    fn test_unclosed_string_skips_one_character() {
        let results: Vec<_> = tokenize("\"abc { 1 }").collect();
        let error = results[0].clone().expect_err("unclosed string");
        assert_eq!(error.kind, LexErrorKind::UnexpectedCharacter);
        assert_eq!(error.text, "\"");
        assert_eq!(error.span, 0..1);

        let recovered: Vec<_> = results.into_iter().filter_map(Result::ok).collect();
        let tokens: Vec<_> = recovered.iter().map(|spanned| spanned.token.clone()).collect();
        assert_eq!(tokens, vec![Token::LBrace, Token::Integer(1), Token::RBrace]);
        assert_eq!(recovered[0].span, 5..6);
        assert_eq!(recovered[1].position, Position::new(1, 8));
    }

    #[test]
    fn test_unclosed_tag_skips_one_character() {
        let results: Vec<_> = tokenize("<Name { 1 }").collect();
        let error = results[0].clone().expect_err("unclosed tag");
        assert_eq!(error.text, "<");
        assert_eq!(error.position, Position::new(1, 1));
        assert_eq!(
            results.last().cloned().map(|r| r.map(|t| t.token)),
            Some(Ok(Token::RBrace))
        );
    }

    #[test]
    fn test_multibyte_illegal_character_is_one_error() {
        let results: Vec<_> = tokenize("{ \u{e9} }").collect();
        assert_eq!(results.len(), 3);
        let error = results[1].clone().expect_err("illegal character");
        assert_eq!(error.text, "\u{e9}");
        assert_eq!(error.span, 2..4);
        assert_eq!(results[2].clone().expect("lexes").span, 5..6);
    }

    #[test]
    fn test_strict_tokenize_stops_at_first_error() {
        let error = tokenize_with_spans("{ 1 ; 2 }").expect_err("illegal character");
        assert_eq!(error.text, ";");
        assert_eq!(error.span, 4..5);
    }

    #[test]
    fn test_tokenizer_is_lazy() {
        let mut tokenizer = tokenize("{ } {");
        assert_eq!(tokenizer.next().map(|r| r.map(|t| t.token)), Some(Ok(Token::LBrace)));
        assert_eq!(tokenizer.next().map(|r| r.map(|t| t.token)), Some(Ok(Token::RBrace)));
        assert_eq!(tokenizer.next().map(|r| r.map(|t| t.token)), Some(Ok(Token::LBrace)));
        assert!(tokenizer.next().is_none());
        assert!(tokenizer.next().is_none());
    }
}
