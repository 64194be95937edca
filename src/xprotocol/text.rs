//! Text utilities for protocol strings
//!
//! String tokens keep doubled quotes verbatim. A parameter value that itself
//! holds an XProtocol document needs [`unescape_quotes`] before it can be
//! parsed again. Such values usually end in an ASCCONV block, which
//! [`split_ascconv`] separates from the XProtocol text.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::xprotocol::error::{Result, XProtocolError};

static QUOTE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r#""+"#).unwrap());

static ASCCONV_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?ms)\A(.*?)(^### ASCCONV BEGIN[^\n]*###$.*?^### ASCCONV END ###)").unwrap()
});

/// Replace every isolated `""` with `"`.
///
/// Runs of three or more quotes are left alone.
pub fn unescape_quotes(text: &str) -> String {
    QUOTE_RUN
        .replace_all(text, |caps: &Captures| {
            if caps[0].len() == 2 {
                "\"".to_string()
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

/// Split text into the part before the ASCCONV block and the block itself,
/// marker lines included.
pub fn split_ascconv(text: &str) -> Result<(String, String)> {
    let caps = ASCCONV_BLOCK
        .captures(text)
        .ok_or(XProtocolError::MissingAscconv)?;
    Ok((caps[1].to_string(), caps[2].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unescape_doubled_quote() {
        assert_eq!(unescape_quotes(r#"A ""string"#), r#"A "string"#);
        assert_eq!(
            unescape_quotes(r#"<Name> ""Foo"" <ID> 1"#),
            r#"<Name> "Foo" <ID> 1"#
        );
    }

    #[test]
    fn test_unescape_leaves_longer_runs() {
        assert_eq!(unescape_quotes(r#"a"""b"#), r#"a"""b"#);
        assert_eq!(unescape_quotes(r#"a""""b"#), r#"a""""b"#);
        assert_eq!(unescape_quotes(r#"a"b"#), r#"a"b"#);
    }

    #[test]
    fn test_split_ascconv() {
        let text = "<header>\n### ASCCONV BEGIN ###\nbody\n### ASCCONV END ###";
        let (head, block) = split_ascconv(text).unwrap();
        assert_eq!(head, "<header>\n");
        assert_eq!(block, "### ASCCONV BEGIN ###\nbody\n### ASCCONV END ###");
    }

    #[test]
    fn test_split_ascconv_ignores_trailing_text() {
        let text = "x\n### ASCCONV BEGIN object=MrProtDataImpl@MrProtocolData version=41340006 ###\n\
                    ulVersion = 0x14b44b6\n### ASCCONV END ###\ntrailer";
        let (head, block) = split_ascconv(text).unwrap();
        assert_eq!(head, "x\n");
        assert!(block.starts_with("### ASCCONV BEGIN object="));
        assert!(block.ends_with("### ASCCONV END ###"));
        assert!(block.contains("ulVersion = 0x14b44b6"));
    }

    #[test]
    fn test_split_ascconv_requires_markers() {
        assert_eq!(
            split_ascconv("<XProtocol> { }"),
            Err(XProtocolError::MissingAscconv)
        );
        // Markers must start a line
        assert_eq!(
            split_ascconv("a ### ASCCONV BEGIN ###\nb\n### ASCCONV END ###"),
            Err(XProtocolError::MissingAscconv)
        );
    }
}
