//! Functors and pipe services
//!
//! A functor body ends with its event, method and connection blocks. They may
//! come in any order; the parser collects them all, then checks that each kind
//! occurs exactly once. A wrong set is reported as a structural error rather
//! than a syntax error.

use chumsky::prelude::*;

use crate::xprotocol::ast::{AttrList, Functor, ParamBlock, PipeService, Wiring, WiringKind};
use crate::xprotocol::lexer::{Tag, Token, TypedTagKind};
use crate::xprotocol::parser::combinators::{
    lbrace, rbrace, string, tag, typed_tag, ParserError, TokenSpan,
};

/// `<Class> "..."`
pub(crate) fn class() -> impl Parser<TokenSpan, String, Error = ParserError> + Clone {
    tag(Tag::Class).ignore_then(string())
}

fn wiring_tag() -> impl Parser<TokenSpan, (WiringKind, String), Error = ParserError> + Clone {
    filter_map(|span, (tok, range): TokenSpan| match tok {
        Token::TypedTag(typed) => {
            let kind = match typed.kind {
                TypedTagKind::Event => WiringKind::Event,
                TypedTagKind::Method => WiringKind::Method,
                TypedTagKind::Connection => WiringKind::Connection,
                _ => {
                    return Err(Simple::expected_input_found(
                        span,
                        None,
                        Some((Token::TypedTag(typed), range)),
                    ))
                }
            };
            Ok((kind, typed.name))
        }
        other => Err(Simple::expected_input_found(span, None, Some((other, range)))),
    })
}

/// `<Event."name"> { "..." ... }` and its Method/Connection siblings
pub(crate) fn wiring() -> impl Parser<TokenSpan, (WiringKind, Wiring), Error = ParserError> + Clone {
    wiring_tag()
        .then(
            string()
                .repeated()
                .at_least(1)
                .delimited_by(lbrace(), rbrace()),
        )
        .map(|((kind, name), args)| (kind, Wiring { name, args }))
}

pub(crate) fn functor<P>(block: P) -> impl Parser<TokenSpan, Functor, Error = ParserError> + Clone
where
    P: Parser<TokenSpan, ParamBlock, Error = ParserError> + Clone,
{
    typed_tag(TypedTagKind::ParamFunctor)
        .then(
            class()
                .then(block.repeated().at_least(1))
                .then(wiring().repeated())
                .delimited_by(lbrace(), rbrace()),
        )
        .validate(|(name, ((class, blocks), wirings)), span, emit| {
            let mut event = None;
            let mut method = None;
            let mut connection = None;

            for (kind, wiring) in wirings {
                let slot = match kind {
                    WiringKind::Event => &mut event,
                    WiringKind::Method => &mut method,
                    WiringKind::Connection => &mut connection,
                };
                if slot.is_some() {
                    emit(Simple::custom(
                        span.clone(),
                        format!("functor '{}' has more than one {} block", name, kind.as_str()),
                    ));
                } else {
                    *slot = Some(wiring);
                }
            }

            for (kind, present) in [
                (WiringKind::Event, event.is_some()),
                (WiringKind::Method, method.is_some()),
                (WiringKind::Connection, connection.is_some()),
            ] {
                if !present {
                    emit(Simple::custom(
                        span.clone(),
                        format!("functor '{}' has no {} block", name, kind.as_str()),
                    ));
                }
            }

            Functor {
                name,
                attrs: AttrList::default(),
                class,
                blocks,
                event: event.unwrap_or_default(),
                method: method.unwrap_or_default(),
                connection: connection.unwrap_or_default(),
            }
        })
}

pub(crate) fn pipe_service<P>(block: P) -> impl Parser<TokenSpan, PipeService, Error = ParserError> + Clone
where
    P: Parser<TokenSpan, ParamBlock, Error = ParserError> + Clone,
{
    typed_tag(TypedTagKind::PipeService)
        .then(
            class()
                .then(block.repeated().at_least(1))
                .delimited_by(lbrace(), rbrace()),
        )
        .map(|(name, (class, blocks))| PipeService {
            name,
            attrs: AttrList::default(),
            class,
            blocks,
        })
}
