//! Parser module for the XProtocol format
//!
//! The grammar is written with chumsky combinators over the `(token, range)`
//! stream from the lexer. Productions mirror the format's constructs:
//!
//! - `combinators` - single-token matchers, scalars, lists and attributes
//! - `elements` - parameter blocks, functors, card layouts, dependencies, header
//! - `document` - the recursive block production and the protocol root
//! - `api` - running the grammar and converting its errors
//!
//! Parsing stops at the first error. There is no recovery and no partial tree.

pub mod api;
pub mod combinators;
pub mod document;
pub mod elements;

pub use api::parse_protocol;
