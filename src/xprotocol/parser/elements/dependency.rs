//! `<Dependency."name"> { "target" ... (<Dll> "...")? (<Context> "...")? }`

use chumsky::prelude::*;

use crate::xprotocol::ast::Dependency;
use crate::xprotocol::lexer::{Tag, TypedTagKind};
use crate::xprotocol::parser::combinators::{
    lbrace, rbrace, string, tag, typed_tag, ParserError, TokenSpan,
};

pub(crate) fn dependency() -> impl Parser<TokenSpan, Dependency, Error = ParserError> + Clone {
    typed_tag(TypedTagKind::Dependency)
        .then(
            string()
                .repeated()
                .at_least(1)
                .then(tag(Tag::Dll).ignore_then(string()).or_not())
                .then(tag(Tag::Context).ignore_then(string()).or_not())
                .delimited_by(lbrace(), rbrace()),
        )
        .map(|(name, ((targets, dll), context))| Dependency {
            name,
            targets,
            dll,
            context,
        })
}
