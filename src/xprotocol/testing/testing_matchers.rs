//! Text matching for protocol assertions
//!
//! String values in a parsed tree keep doubled quotes verbatim, so a value
//! holding an embedded protocol reads `<Name> ""Step""`. [`TextMatch::Unescaped`]
//! compares against the resolved text instead.

use crate::xprotocol::text::unescape_quotes;

/// How an expected text is compared with the actual one
#[derive(Debug, Clone, Copy)]
pub enum TextMatch<'e> {
    Exact(&'e str),
    StartsWith(&'e str),
    Contains(&'e str),
    /// Substring of the text after `""` is resolved to `"`
    Unescaped(&'e str),
}

impl TextMatch<'_> {
    pub fn matches(&self, actual: &str) -> bool {
        match *self {
            TextMatch::Exact(expected) => actual == expected,
            TextMatch::StartsWith(prefix) => actual.starts_with(prefix),
            TextMatch::Contains(substring) => actual.contains(substring),
            TextMatch::Unescaped(substring) => unescape_quotes(actual).contains(substring),
        }
    }

    fn describe(&self) -> String {
        match *self {
            TextMatch::Exact(expected) => format!("'{}'", expected),
            TextMatch::StartsWith(prefix) => format!("text starting with '{}'", prefix),
            TextMatch::Contains(substring) => format!("text containing '{}'", substring),
            TextMatch::Unescaped(substring) => {
                format!("unescaped text containing '{}'", substring)
            }
        }
    }

    /// Panic with the assertion context and the field name unless `actual` matches
    pub fn assert(&self, actual: &str, context: &str, field: &str) {
        assert!(
            self.matches(actual),
            "{}: Expected {} {}, but got '{}'",
            context,
            field,
            self.describe(),
            actual
        );
    }
}
