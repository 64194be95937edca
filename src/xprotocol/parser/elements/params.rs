//! Value-carrying parameter blocks and maps
//!
//! All single-valued kinds share one shape: `<ParamX."name"> { attrs value? }`.
//! An empty value position yields `None`.

use chumsky::prelude::*;

use crate::xprotocol::ast::{AttrList, Param, ParamArray, ParamBlock, ParamChoice, ParamMap, ScalarList};
use crate::xprotocol::lexer::TypedTagKind;
use crate::xprotocol::parser::combinators::{
    attr_list, curly_list, lbrace, rbrace, string, typed_tag, ParserError, TokenSpan,
};

/// `<kind."name"> { attrs value? }`
pub(crate) fn param<T, P, V>(
    kind: TypedTagKind,
    block: P,
    value: V,
) -> impl Parser<TokenSpan, Param<T>, Error = ParserError> + Clone
where
    P: Parser<TokenSpan, ParamBlock, Error = ParserError> + Clone,
    V: Parser<TokenSpan, T, Error = ParserError> + Clone,
{
    typed_tag(kind)
        .then(
            attr_list(block)
                .then(value.or_not())
                .delimited_by(lbrace(), rbrace()),
        )
        .map(|(name, (attrs, value))| Param { name, attrs, value })
}

/// One array section: `{ }` or a value list
fn array_section() -> impl Parser<TokenSpan, Option<ScalarList>, Error = ParserError> + Clone {
    choice((
        lbrace().then(rbrace()).to(None),
        curly_list().map(Some),
    ))
}

pub(crate) fn param_array<P>(block: P) -> impl Parser<TokenSpan, ParamArray, Error = ParserError> + Clone
where
    P: Parser<TokenSpan, ParamBlock, Error = ParserError> + Clone,
{
    typed_tag(TypedTagKind::ParamArray)
        .then(
            attr_list(block)
                .then(array_section().repeated().at_least(1))
                .delimited_by(lbrace(), rbrace()),
        )
        .map(|(name, (attrs, sections))| ParamArray {
            name,
            attrs,
            sections,
        })
}

pub(crate) fn param_choice<P>(block: P) -> impl Parser<TokenSpan, ParamChoice, Error = ParserError> + Clone
where
    P: Parser<TokenSpan, ParamBlock, Error = ParserError> + Clone,
{
    typed_tag(TypedTagKind::ParamChoice)
        .then(
            attr_list(block)
                .then(string().or_not())
                .delimited_by(lbrace(), rbrace()),
        )
        .map(|(name, (attrs, value))| ParamChoice { name, attrs, value })
}

pub(crate) fn param_map<P>(block: P) -> impl Parser<TokenSpan, ParamMap, Error = ParserError> + Clone
where
    P: Parser<TokenSpan, ParamBlock, Error = ParserError> + Clone,
{
    typed_tag(TypedTagKind::ParamMap)
        .then(block.repeated().at_least(1).delimited_by(lbrace(), rbrace()))
        .map(|(name, blocks)| ParamMap {
            name,
            attrs: AttrList::default(),
            blocks,
        })
}
