//! Lexer module for the XProtocol format
//!
//! Tokenization is a single logos pass. XProtocol has no significant
//! whitespace, so unlike indentation-based formats there is no transformation
//! stage between the raw token stream and the parser.
//!
//! The one context-sensitive spot is the `<` character, which opens either a
//! bare tag or a typed tag. Both are plain regex rules with different shapes,
//! and the longest match decides.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{tokenize, tokenize_with_spans, SpannedToken, Tokenizer};
pub use tokens::{FloatLit, LexErrorKind, Tag, Token, TypedTag, TypedTagKind};
