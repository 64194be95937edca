//! Public API for the parser.
//!
//! The grammar is a graph of `Rc`-based chumsky parsers, so it cannot be a
//! process-wide static. It is built lazily once per thread and then only read.

use chumsky::error::SimpleReason;
use chumsky::prelude::*;

use crate::xprotocol::ast::{Protocol, SourceLocation};
use crate::xprotocol::error::{Result, XProtocolError};
use crate::xprotocol::parser::combinators::{ParserError, TokenSpan};
use crate::xprotocol::parser::document::xprotocol;

thread_local! {
    static PROTOCOL_GRAMMAR: BoxedParser<'static, TokenSpan, Protocol, ParserError> =
        xprotocol().then_ignore(end()).boxed();
}

/// Parse the tokens of exactly one `<XProtocol>` document.
///
/// `location` must describe the source the token ranges point into.
pub fn parse_protocol(tokens: Vec<TokenSpan>, location: &SourceLocation) -> Result<Protocol> {
    let offsets: Vec<usize> = tokens.iter().map(|(_, range)| range.start).collect();
    let end = tokens.last().map(|(_, range)| range.end).unwrap_or(0);

    PROTOCOL_GRAMMAR
        .with(|grammar| grammar.parse(tokens))
        .map_err(|errors| convert_errors(&errors, &offsets, end, location))
}

/// Turn chumsky errors into one `XProtocolError`.
///
/// Custom errors come from semantic checks and win over plain mismatches.
pub(crate) fn convert_errors(
    errors: &[ParserError],
    offsets: &[usize],
    end: usize,
    location: &SourceLocation,
) -> XProtocolError {
    let chosen = errors
        .iter()
        .find(|error| matches!(error.reason(), SimpleReason::Custom(_)))
        .or_else(|| errors.first());

    let Some(error) = chosen else {
        return XProtocolError::Syntax {
            message: "no protocol found".to_string(),
            position: location.byte_to_position(end),
        };
    };

    // Error spans index into the token list; past-the-end means end of input
    let offset = offsets.get(error.span().start).copied().unwrap_or(end);
    let position = location.byte_to_position(offset);

    match error.reason() {
        SimpleReason::Custom(message) => XProtocolError::Structural {
            message: message.clone(),
            position,
        },
        _ => XProtocolError::Syntax {
            message: describe(error),
            position,
        },
    }
}

fn describe(error: &ParserError) -> String {
    let found = match error.found() {
        Some((tok, _)) => format!("unexpected {}", tok),
        None => "unexpected end of input".to_string(),
    };
    match error.label() {
        Some(label) => format!("{} while parsing {}", found, label),
        None => found,
    }
}
