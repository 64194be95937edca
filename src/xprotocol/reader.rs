//! Whole-text entry points
//!
//! A buffer may hold several `<XProtocol>` documents back to back. The reader
//! lexes the buffer once, cuts the token stream wherever the top-level braces
//! balance, and parses each document on its own. The first failing document
//! fails the whole call.
//!
//! Brace depth is checked while cutting, so the recursive grammar never sees
//! input nested deeper than the configured limit.

use serde::Serialize;
use tracing::debug;

use crate::xprotocol::ast::{Protocol, SourceLocation};
use crate::xprotocol::config::ParserConfig;
use crate::xprotocol::error::{Result, XProtocolError};
use crate::xprotocol::lexer::{tokenize_with_spans, Token};
use crate::xprotocol::parser::combinators::TokenSpan;
use crate::xprotocol::parser::parse_protocol;
use crate::xprotocol::text::{split_ascconv, unescape_quotes};

/// Parse every protocol in `source` with the default configuration
pub fn parse(source: &str) -> Result<Vec<Protocol>> {
    parse_with_config(source, &ParserConfig::default())
}

pub fn parse_with_config(source: &str, config: &ParserConfig) -> Result<Vec<Protocol>> {
    let tokens = tokenize_with_spans(source)?;
    debug!(bytes = source.len(), tokens = tokens.len(), "tokenized protocol text");

    let location = SourceLocation::new(source);
    let documents = split_documents(tokens, config.max_depth, &location)?;
    debug!(documents = documents.len(), "split protocol text");

    documents
        .into_iter()
        .enumerate()
        .map(|(index, document)| {
            let protocol = parse_protocol(document, &location)?;
            debug!(
                index,
                name = protocol.name().unwrap_or_default(),
                blocks = protocol.blocks.len(),
                cards = protocol.cards.len(),
                dependencies = protocol.dependencies.len(),
                "parsed protocol"
            );
            Ok(protocol)
        })
        .collect()
}

/// Cut a token stream into top-level documents, enforcing the depth limit.
///
/// Tokens after the last balanced document form one more document so the
/// parser can report what is wrong with them. An empty stream yields a single
/// empty document for the same reason.
fn split_documents(
    tokens: Vec<TokenSpan>,
    max_depth: usize,
    location: &SourceLocation,
) -> Result<Vec<Vec<TokenSpan>>> {
    let mut documents = Vec::new();
    let mut current = Vec::new();
    let mut depth = 0usize;
    let mut opened = false;

    for (tok, range) in tokens {
        let mut closed = false;
        match tok {
            Token::LBrace => {
                depth += 1;
                opened = true;
                if depth > max_depth {
                    return Err(XProtocolError::DepthLimitExceeded {
                        limit: max_depth,
                        position: location.byte_to_position(range.start),
                    });
                }
            }
            Token::RBrace if depth > 0 => {
                depth -= 1;
                closed = depth == 0;
            }
            _ => {}
        }

        current.push((tok, range));
        if opened && closed {
            documents.push(std::mem::take(&mut current));
            opened = false;
        }
    }

    if !current.is_empty() || documents.is_empty() {
        documents.push(current);
    }
    Ok(documents)
}

/// A parameter value holding a protocol followed by an ASCCONV block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbeddedDocument {
    pub protocols: Vec<Protocol>,
    /// The ASCCONV block, marker lines included, not interpreted
    pub ascconv: String,
}

/// Unescape, split off the ASCCONV block and parse the protocol part of an
/// embedded document
pub fn parse_embedded(value: &str) -> Result<EmbeddedDocument> {
    parse_embedded_with_config(value, &ParserConfig::default())
}

pub fn parse_embedded_with_config(value: &str, config: &ParserConfig) -> Result<EmbeddedDocument> {
    let text = unescape_quotes(value);
    let (protocol_text, ascconv) = split_ascconv(&text)?;
    debug!(
        protocol_bytes = protocol_text.len(),
        ascconv_bytes = ascconv.len(),
        "split embedded document"
    );
    let protocols = parse_with_config(&protocol_text, config)?;
    Ok(EmbeddedDocument { protocols, ascconv })
}
