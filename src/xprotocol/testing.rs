//! Testing utilities for protocol assertions
//!
//! # Parser Testing Guidelines
//!
//! Parser tests combine two tools:
//!
//! 1. **[XProtocolSources](crate::xprotocol::processor::xprotocol_sources::XProtocolSources)**
//!    for whole documents. The bundled samples under `docs/samples` are
//!    checked against real scanner exports, so prefer them over ad-hoc text
//!    when a test is about a complete protocol.
//! 2. **[assert_protocol](fn@assert_protocol)** for verifying the tree.
//!
//! Production-level tests (a single block or card layout) may still use short
//! inline snippets wrapped in a minimal `<XProtocol>` envelope.
//!
//! ## Fluent Assertions
//!
//! Matching nested enums by hand buries what a test is about:
//!
//! ```rust-example
//! match &protocol.blocks[0] {
//!     ParamBlock::Map(map) => match &map.blocks[1] {
//!         ParamBlock::Long(count) => assert_eq!(count.value, Some(1)),
//!         _ => panic!("Expected ParamLong"),
//!     },
//!     _ => panic!("Expected ParamMap"),
//! }
//! ```
//!
//! The same check with the fluent API:
//!
//! ```rust-example
//! use crate::xprotocol::testing::assert_protocol;
//!
//! assert_protocol(&protocol)
//!     .name("PhoenixMetaProtocol")
//!     .block(0, |block| {
//!         block.assert_map().block(1, |count| {
//!             count.name("Count").assert_long().value(1);
//!         });
//!     });
//! ```
//!
//! Failures report the path to the offending node, e.g. `blocks[0]:blocks[1]`.
//!
//! ## Available Assertions
//!
//! - `ProtocolAssertion` - header fields, blocks, cards, dependencies
//! - `BlockAssertion` - name, attributes, and conversion to a kind-specific assertion
//! - `ValueAssertion` - bool/long/double/string values, including absence
//! - `ArrayAssertion` / `ChoiceAssertion` - array sections and choice selection
//! - `ContainerAssertion` - maps
//! - `FunctorAssertion` / `PipeServiceAssertion` - classes, nested blocks, wiring
//! - `CardAssertion` / `DependencyAssertion`

mod testing_assertions;
mod testing_matchers;

pub use testing_assertions::{
    assert_protocol, ArrayAssertion, BlockAssertion, CardAssertion, ChoiceAssertion,
    ContainerAssertion, DependencyAssertion, FunctorAssertion, PipeServiceAssertion,
    ProtocolAssertion, ValueAssertion,
};
pub use testing_matchers::TextMatch;
