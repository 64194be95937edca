//! Parser combinator functions shared by the XProtocol productions.
//!
//! The parser input is the `(token, byte range)` stream produced by
//! [`crate::xprotocol::lexer::tokenize_with_spans`]. Every helper here matches
//! a single token kind or a small fixed token sequence; the recursive
//! productions live in [`super::document`].

use chumsky::prelude::*;
use std::ops::Range;

use crate::xprotocol::ast::{AttrList, AttrValue, Attribute, ParamBlock, Scalar, ScalarList};
use crate::xprotocol::lexer::{Tag, Token, TypedTagKind};

/// Type alias for token with span
pub(crate) type TokenSpan = (Token, Range<usize>);

/// Type alias for parser error
pub(crate) type ParserError = Simple<TokenSpan>;

/// Helper: match a specific token type, ignoring its span
pub(crate) fn token(t: Token) -> impl Parser<TokenSpan, (), Error = ParserError> + Clone {
    filter(move |(tok, _): &TokenSpan| tok == &t).ignored()
}

pub(crate) fn lbrace() -> impl Parser<TokenSpan, (), Error = ParserError> + Clone {
    token(Token::LBrace)
}

pub(crate) fn rbrace() -> impl Parser<TokenSpan, (), Error = ParserError> + Clone {
    token(Token::RBrace)
}

/// Helper: match one vocabulary tag
pub(crate) fn tag(tag: Tag) -> impl Parser<TokenSpan, (), Error = ParserError> + Clone {
    token(Token::Tag(tag))
}

/// Helper: match any token `extract` accepts, reporting the token otherwise
fn select<O>(
    extract: fn(Token) -> Result<O, Token>,
) -> impl Parser<TokenSpan, O, Error = ParserError> + Clone {
    filter_map(move |span, (tok, range): TokenSpan| {
        extract(tok).map_err(|tok| Simple::expected_input_found(span, None, Some((tok, range))))
    })
}

/// A typed tag of the given kind, yielding its instance name
pub(crate) fn typed_tag(
    kind: TypedTagKind,
) -> impl Parser<TokenSpan, String, Error = ParserError> + Clone {
    filter_map(move |span, (tok, range): TokenSpan| match tok {
        Token::TypedTag(typed) if typed.kind == kind => Ok(typed.name),
        other => Err(Simple::expected_input_found(
            span,
            None,
            Some((other, range)),
        )),
    })
    .labelled(kind.as_str())
}

/// A bare tag outside the vocabulary, yielding its identifier; used for
/// attribute keys. Vocabulary tags such as `<Name>` or `<Line>` never start
/// an attribute.
pub(crate) fn attribute_key() -> impl Parser<TokenSpan, String, Error = ParserError> + Clone {
    select(|tok| match tok {
        Token::Tag(Tag::Other(ident)) => Ok(ident),
        other => Err(other),
    })
}

pub(crate) fn string() -> impl Parser<TokenSpan, String, Error = ParserError> + Clone {
    select(|tok| match tok {
        Token::String(text) => Ok(text),
        other => Err(other),
    })
}

pub(crate) fn integer() -> impl Parser<TokenSpan, i64, Error = ParserError> + Clone {
    select(|tok| match tok {
        Token::Integer(value) => Ok(value),
        other => Err(other),
    })
}

pub(crate) fn float() -> impl Parser<TokenSpan, f64, Error = ParserError> + Clone {
    select(|tok| match tok {
        Token::Float(value) => Ok(value.value()),
        other => Err(other),
    })
}

pub(crate) fn boolean() -> impl Parser<TokenSpan, bool, Error = ParserError> + Clone {
    select(|tok| match tok {
        Token::Bool(value) => Ok(value),
        other => Err(other),
    })
}

pub(crate) fn scalar() -> impl Parser<TokenSpan, Scalar, Error = ParserError> + Clone {
    choice((
        float().map(Scalar::Double),
        integer().map(Scalar::Long),
        boolean().map(Scalar::Bool),
        string().map(Scalar::String),
    ))
}

/// One or more elements of a single kind
pub(crate) fn homogeneous<T, P>(element: P) -> impl Parser<TokenSpan, Vec<T>, Error = ParserError> + Clone
where
    P: Parser<TokenSpan, T, Error = ParserError> + Clone,
{
    element.repeated().at_least(1)
}

/// `{ v v ... }` with every element of the same kind
pub(crate) fn curly_list() -> impl Parser<TokenSpan, ScalarList, Error = ParserError> + Clone {
    choice((
        homogeneous(boolean()).map(ScalarList::Bool),
        homogeneous(integer()).map(ScalarList::Long),
        homogeneous(float()).map(ScalarList::Double),
        homogeneous(string()).map(ScalarList::String),
    ))
    .delimited_by(lbrace(), rbrace())
    .labelled("value list")
}

/// `<Key> value`, where the value is a list, a scalar or a whole nested block
pub(crate) fn key_value<P>(block: P) -> impl Parser<TokenSpan, Attribute, Error = ParserError> + Clone
where
    P: Parser<TokenSpan, ParamBlock, Error = ParserError> + Clone,
{
    attribute_key()
        .then(choice((
            curly_list().map(AttrValue::List),
            scalar().map(AttrValue::Scalar),
            block.map(|nested| AttrValue::Block(Box::new(nested))),
        )))
        .map(|(name, value)| Attribute { name, value })
}

/// Zero or more attributes, in source order
pub(crate) fn attr_list<P>(block: P) -> impl Parser<TokenSpan, AttrList, Error = ParserError> + Clone
where
    P: Parser<TokenSpan, ParamBlock, Error = ParserError> + Clone,
{
    key_value(block).repeated().map(AttrList::new)
}
