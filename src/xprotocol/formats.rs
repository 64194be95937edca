//! Output formats for parsed protocols
//!
//! JSON output goes straight through serde; this module holds the
//! hand-written renderers.

pub mod treeviz;

pub use treeviz::to_treeviz_str;
