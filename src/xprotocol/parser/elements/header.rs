//! Protocol header: `<Name>`, `<ID>`, `<Userversion>` and `<EVAStringTable>`
//!
//! Header entries may repeat; a later entry replaces an earlier one.

use chumsky::prelude::*;

use crate::xprotocol::ast::{EvaString, EvaStringTable, Header};
use crate::xprotocol::lexer::Tag;
use crate::xprotocol::parser::combinators::{
    float, integer, lbrace, rbrace, string, tag, ParserError, TokenSpan,
};

#[derive(Debug, Clone)]
enum HeaderEntry {
    Name(String),
    Id(i64),
    UserVersion(f64),
    EvaStringTable(EvaStringTable),
}

/// `<EVAStringTable> { count code "label" code "label" ... }`
pub(crate) fn eva_string_table() -> impl Parser<TokenSpan, EvaStringTable, Error = ParserError> + Clone {
    tag(Tag::EvaStringTable)
        .ignore_then(
            integer()
                .then(
                    integer()
                        .then(string())
                        .map(|(code, label)| EvaString { code, label })
                        .repeated()
                        .at_least(1),
                )
                .delimited_by(lbrace(), rbrace()),
        )
        .map(|(count, entries)| EvaStringTable { count, entries })
}

fn header_entry() -> impl Parser<TokenSpan, HeaderEntry, Error = ParserError> + Clone {
    choice((
        tag(Tag::Name).ignore_then(string()).map(HeaderEntry::Name),
        tag(Tag::Id).ignore_then(integer()).map(HeaderEntry::Id),
        tag(Tag::Userversion)
            .ignore_then(float())
            .map(HeaderEntry::UserVersion),
        eva_string_table().map(HeaderEntry::EvaStringTable),
    ))
}

pub(crate) fn header() -> impl Parser<TokenSpan, Header, Error = ParserError> + Clone {
    header_entry()
        .repeated()
        .at_least(1)
        .map(|entries| {
            entries
                .into_iter()
                .fold(Header::default(), |mut header, entry| {
                    match entry {
                        HeaderEntry::Name(name) => header.name = Some(name),
                        HeaderEntry::Id(id) => header.id = Some(id),
                        HeaderEntry::UserVersion(version) => header.user_version = Some(version),
                        HeaderEntry::EvaStringTable(table) => header.eva_string_table = Some(table),
                    }
                    header
                })
        })
        .labelled("protocol header")
}
