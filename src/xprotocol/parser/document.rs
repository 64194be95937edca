//! Document-level parser: the recursive block production and the protocol root.
//!
//! Maps, functors, pipe services and block-valued attributes all contain
//! further blocks, so every block kind is built around one `recursive` handle.

use chumsky::prelude::*;

use crate::xprotocol::ast::{ParamBlock, Protocol};
use crate::xprotocol::lexer::{Tag, TypedTagKind};
use crate::xprotocol::parser::combinators::{
    boolean, float, integer, lbrace, rbrace, string, tag, typed_tag, ParserError, TokenSpan,
};
use crate::xprotocol::parser::elements::{
    card_layout, dependency, functor, header, param, param_array, param_choice, param_map,
    pipe_service,
};

/// Every block kind except card layouts, with `block` as the nested-block parser
fn block_body<P>(block: P) -> BoxedParser<'static, TokenSpan, ParamBlock, ParserError>
where
    P: Parser<TokenSpan, ParamBlock, Error = ParserError> + Clone + 'static,
{
    choice((
        param(TypedTagKind::ParamBool, block.clone(), boolean()).map(ParamBlock::Bool),
        param(TypedTagKind::ParamLong, block.clone(), integer()).map(ParamBlock::Long),
        param(TypedTagKind::ParamDouble, block.clone(), float()).map(ParamBlock::Double),
        param(TypedTagKind::ParamString, block.clone(), string()).map(ParamBlock::String),
        param_array(block.clone()).map(ParamBlock::Array),
        param_map(block.clone()).map(ParamBlock::Map),
        param_choice(block.clone()).map(ParamBlock::Choice),
        functor(block.clone()).map(ParamBlock::Functor),
        pipe_service(block).map(ParamBlock::PipeService),
    ))
    .labelled("parameter block")
    .boxed()
}

/// Any parameter block, including card layouts nested inside containers
pub(crate) fn block() -> impl Parser<TokenSpan, ParamBlock, Error = ParserError> + Clone {
    recursive(|block| {
        choice((
            block_body(block),
            card_layout().map(ParamBlock::CardLayout),
        ))
    })
}

/// `<XProtocol> { header blocks cards dependencies }`
///
/// Card layouts after the last block belong to the protocol's card list, so
/// the top-level block list does not accept them.
pub(crate) fn xprotocol() -> impl Parser<TokenSpan, Protocol, Error = ParserError> + Clone {
    let opening = choice((
        tag(Tag::XProtocol).to(None),
        typed_tag(TypedTagKind::XProtocol).map(Some),
    ));

    opening
        .then(
            header()
                .then(block_body(block()).repeated().at_least(1))
                .then(card_layout().repeated())
                .then(dependency().repeated())
                .delimited_by(lbrace(), rbrace()),
        )
        .map(|(typed_name, (((mut header, blocks), cards), dependencies))| {
            if header.name.is_none() {
                header.name = typed_name;
            }
            Protocol {
                header,
                blocks,
                cards,
                dependencies,
            }
        })
        .labelled("XProtocol")
}
