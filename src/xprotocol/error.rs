//! Error types for tokenizing and parsing XProtocol text
//!
//! Every failure aborts the document being processed; there is no recovery
//! and no partial tree. Errors carry the position of the offending input.

use std::ops::Range;

use crate::xprotocol::ast::position::Position;
use crate::xprotocol::lexer::tokens::LexErrorKind;

pub type Result<T> = std::result::Result<T, XProtocolError>;

/// A character sequence the tokenizer could not turn into a token
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{} '{text}' at {position}", describe(.kind))]
pub struct LexError {
    pub kind: LexErrorKind,
    pub text: String,
    pub span: Range<usize>,
    pub position: Position,
}

fn describe(kind: &LexErrorKind) -> &'static str {
    match kind {
        LexErrorKind::UnexpectedCharacter => "illegal character",
        LexErrorKind::UnknownTypedTag(_) => "unknown typed tag",
        LexErrorKind::InvalidNumber(_) => "invalid number",
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum XProtocolError {
    #[error("lex error: {0}")]
    Lex(LexError),

    #[error("unknown typed tag '{tag}' at {position}")]
    UnknownTag { tag: String, position: Position },

    #[error("syntax error at {position}: {message}")]
    Syntax { message: String, position: Position },

    #[error("structural error at {position}: {message}")]
    Structural { message: String, position: Position },

    #[error("nesting depth exceeds limit of {limit} at {position}")]
    DepthLimitExceeded { limit: usize, position: Position },

    #[error("no ASCCONV block found")]
    MissingAscconv,
}

impl From<LexError> for XProtocolError {
    fn from(error: LexError) -> Self {
        match error.kind {
            LexErrorKind::UnknownTypedTag(tag) => XProtocolError::UnknownTag {
                tag,
                position: error.position,
            },
            _ => XProtocolError::Lex(error),
        }
    }
}

impl XProtocolError {
    /// Position of the offending input, when the error has one
    pub fn position(&self) -> Option<Position> {
        match self {
            XProtocolError::Lex(error) => Some(error.position),
            XProtocolError::UnknownTag { position, .. }
            | XProtocolError::Syntax { position, .. }
            | XProtocolError::Structural { position, .. }
            | XProtocolError::DepthLimitExceeded { position, .. } => Some(*position),
            XProtocolError::MissingAscconv => None,
        }
    }
}
