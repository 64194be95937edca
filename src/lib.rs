//! # siemens-xprotocol
//!
//! A parser for the Siemens XProtocol format, the brace-delimited text format
//! MRI scanners use to store measurement protocols.
//!
//! ```text
//! let protocols = siemens_xprotocol::parse(&text)?;
//! let count = protocols[0].find_block("Count");
//! ```
//!
//! ## Testing
//!
//! For testing guidelines, see the [testing module](xprotocol::testing).
//! Parser tests use the bundled samples and the fluent protocol assertions.

pub mod xprotocol;

pub use xprotocol::ast::{ParamBlock, Position, Protocol};
pub use xprotocol::config::ParserConfig;
pub use xprotocol::error::{LexError, XProtocolError};
pub use xprotocol::lexer::tokenize;
pub use xprotocol::reader::{
    parse, parse_embedded, parse_embedded_with_config, parse_with_config, EmbeddedDocument,
};
pub use xprotocol::text::{split_ascconv, unescape_quotes};
