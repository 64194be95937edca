//! Token definitions for the XProtocol format
//!
//! Tokens are produced by the logos derive macro. A `<` opens either a bare tag
//! (`<Name>`) or a typed tag (`<ParamLong."Count">`); the two forms are told
//! apart purely by the shape of the match, so the lexer needs no states.
//!
//! Literal tokens carry their parsed value. String tokens keep doubled quotes
//! exactly as they appear between the delimiters; unescaping is a separate,
//! explicit step (see [`crate::xprotocol::text::unescape_quotes`]).

use std::fmt;
use std::hash::{Hash, Hasher};

use logos::{Lexer, Logos};
use serde::Serialize;

/// Reasons a lexing step can fail
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    #[default]
    UnexpectedCharacter,
    /// Typed tag whose identifier is outside the typed vocabulary
    UnknownTypedTag(String),
    /// Numeric literal that does not fit its kind
    InvalidNumber(String),
}

/// Identifiers that may appear as bare tags
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum Tag {
    XProtocol,
    Name,
    Id,
    Userversion,
    Class,
    Dll,
    Control,
    Param,
    Pos,
    Repr,
    Line,
    Context,
    EvaStringTable,
    /// Any identifier outside the vocabulary, e.g. attribute names like `<Default>`
    Other(String),
}

impl Tag {
    pub fn from_ident(ident: &str) -> Tag {
        match ident {
            "XProtocol" => Tag::XProtocol,
            "Name" => Tag::Name,
            "ID" => Tag::Id,
            "Userversion" => Tag::Userversion,
            "Class" => Tag::Class,
            "Dll" => Tag::Dll,
            "Control" => Tag::Control,
            "Param" => Tag::Param,
            "Pos" => Tag::Pos,
            "Repr" => Tag::Repr,
            "Line" => Tag::Line,
            "Context" => Tag::Context,
            "EVAStringTable" => Tag::EvaStringTable,
            other => Tag::Other(other.to_string()),
        }
    }

    /// The identifier as written in the source
    pub fn as_str(&self) -> &str {
        match self {
            Tag::XProtocol => "XProtocol",
            Tag::Name => "Name",
            Tag::Id => "ID",
            Tag::Userversion => "Userversion",
            Tag::Class => "Class",
            Tag::Dll => "Dll",
            Tag::Control => "Control",
            Tag::Param => "Param",
            Tag::Pos => "Pos",
            Tag::Repr => "Repr",
            Tag::Line => "Line",
            Tag::Context => "Context",
            Tag::EvaStringTable => "EVAStringTable",
            Tag::Other(ident) => ident,
        }
    }
}

/// The closed vocabulary of typed tag identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TypedTagKind {
    XProtocol,
    ParamBool,
    ParamLong,
    ParamDouble,
    ParamString,
    ParamArray,
    ParamMap,
    ParamChoice,
    ParamFunctor,
    ParamCardLayout,
    EvaCardLayout,
    PipeService,
    Connection,
    Dependency,
    Event,
    Method,
}

impl TypedTagKind {
    pub const ALL: [TypedTagKind; 16] = [
        TypedTagKind::XProtocol,
        TypedTagKind::ParamBool,
        TypedTagKind::ParamLong,
        TypedTagKind::ParamDouble,
        TypedTagKind::ParamString,
        TypedTagKind::ParamArray,
        TypedTagKind::ParamMap,
        TypedTagKind::ParamChoice,
        TypedTagKind::ParamFunctor,
        TypedTagKind::ParamCardLayout,
        TypedTagKind::EvaCardLayout,
        TypedTagKind::PipeService,
        TypedTagKind::Connection,
        TypedTagKind::Dependency,
        TypedTagKind::Event,
        TypedTagKind::Method,
    ];

    pub fn from_ident(ident: &str) -> Option<TypedTagKind> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == ident)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TypedTagKind::XProtocol => "XProtocol",
            TypedTagKind::ParamBool => "ParamBool",
            TypedTagKind::ParamLong => "ParamLong",
            TypedTagKind::ParamDouble => "ParamDouble",
            TypedTagKind::ParamString => "ParamString",
            TypedTagKind::ParamArray => "ParamArray",
            TypedTagKind::ParamMap => "ParamMap",
            TypedTagKind::ParamChoice => "ParamChoice",
            TypedTagKind::ParamFunctor => "ParamFunctor",
            TypedTagKind::ParamCardLayout => "ParamCardLayout",
            TypedTagKind::EvaCardLayout => "EVACardLayout",
            TypedTagKind::PipeService => "PipeService",
            TypedTagKind::Connection => "Connection",
            TypedTagKind::Dependency => "Dependency",
            TypedTagKind::Event => "Event",
            TypedTagKind::Method => "Method",
        }
    }
}

/// A typed tag: block kind plus instance name (possibly empty)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TypedTag {
    pub kind: TypedTagKind,
    pub name: String,
}

/// Float literal compared bitwise so tokens can be hashed
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FloatLit(pub f64);

impl FloatLit {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for FloatLit {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for FloatLit {}

impl Hash for FloatLit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

/// All possible tokens in the XProtocol format
#[derive(Logos, Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(error = LexErrorKind)]
pub enum Token {
    #[regex(r"<[A-Za-z_][A-Za-z0-9_]*>", basic_tag)]
    Tag(Tag),

    #[regex(r#"<[A-Za-z_][A-Za-z0-9_]*\."[^"]*">"#, typed_tag)]
    TypedTag(TypedTag),

    // Fraction or mandatory exponent; a trailing unit letter is dropped
    #[regex(r"[+-]?([0-9]+\.[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?[A-Za-z]?", float)]
    #[regex(r"[+-]?[0-9]+[eE][+-]?[0-9]+[A-Za-z]?", float)]
    Float(FloatLit),

    #[regex(r"-?[0-9]+", integer)]
    Integer(i64),

    #[token("\"true\"", |_| true)]
    #[token("\"false\"", |_| false)]
    Bool(bool),

    #[regex(r#""([^"]|"")*""#, string)]
    String(String),

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,
}

fn basic_tag(lex: &mut Lexer<Token>) -> Tag {
    let slice = lex.slice();
    Tag::from_ident(&slice[1..slice.len() - 1])
}

fn typed_tag(lex: &mut Lexer<Token>) -> Result<TypedTag, LexErrorKind> {
    let slice = lex.slice();
    // `<` ident `."` name `">`
    let inner = &slice[1..slice.len() - 2];
    let (ident, name) = inner
        .split_once(".\"")
        .ok_or(LexErrorKind::UnexpectedCharacter)?;
    let kind = TypedTagKind::from_ident(ident)
        .ok_or_else(|| LexErrorKind::UnknownTypedTag(ident.to_string()))?;
    Ok(TypedTag {
        kind,
        name: name.to_string(),
    })
}

fn float(lex: &mut Lexer<Token>) -> Result<FloatLit, LexErrorKind> {
    let text = lex.slice();
    let number = match text.chars().last() {
        Some(unit) if unit.is_ascii_alphabetic() => &text[..text.len() - 1],
        _ => text,
    };
    number
        .parse::<f64>()
        .map(FloatLit)
        .map_err(|_| LexErrorKind::InvalidNumber(text.to_string()))
}

fn integer(lex: &mut Lexer<Token>) -> Result<i64, LexErrorKind> {
    let text = lex.slice();
    text.parse::<i64>()
        .map_err(|_| LexErrorKind::InvalidNumber(text.to_string()))
}

fn string(lex: &mut Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

impl Token {
    /// Check if this token is a brace
    pub fn is_brace(&self) -> bool {
        matches!(self, Token::LBrace | Token::RBrace)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Tag(tag) => write!(f, "<tag:{}>", tag.as_str()),
            Token::TypedTag(typed) => write!(f, "<typed:{}.\"{}\">", typed.kind.as_str(), typed.name),
            Token::Float(value) => write!(f, "<float:{}>", value.0),
            Token::Integer(value) => write!(f, "<int:{}>", value),
            Token::Bool(value) => write!(f, "<bool:{}>", value),
            Token::String(text) => write!(f, "<string:\"{}\">", text),
            Token::LBrace => write!(f, "<lbrace>"),
            Token::RBrace => write!(f, "<rbrace>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(source: &str) -> Vec<Result<Token, LexErrorKind>> {
        Token::lexer(source).collect()
    }

    #[test]
    fn test_basic_tags() {
        let mut lexer = Token::lexer("<Name> <ID> <EVAStringTable> <Default>");
        assert_eq!(lexer.next(), Some(Ok(Token::Tag(Tag::Name))));
        assert_eq!(lexer.next(), Some(Ok(Token::Tag(Tag::Id))));
        assert_eq!(lexer.next(), Some(Ok(Token::Tag(Tag::EvaStringTable))));
        assert_eq!(
            lexer.next(),
            Some(Ok(Token::Tag(Tag::Other("Default".to_string()))))
        );
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_typed_tags() {
        let mut lexer = Token::lexer(r#"<ParamLong."Count"> <ParamMap."">"#);
        assert_eq!(
            lexer.next(),
            Some(Ok(Token::TypedTag(TypedTag {
                kind: TypedTagKind::ParamLong,
                name: "Count".to_string(),
            })))
        );
        assert_eq!(
            lexer.next(),
            Some(Ok(Token::TypedTag(TypedTag {
                kind: TypedTagKind::ParamMap,
                name: String::new(),
            })))
        );
    }

    #[test]
    fn test_unknown_typed_tag_is_an_error() {
        let tokens = lex_all(r#"<ParamFoo."x">"#);
        assert_eq!(
            tokens,
            vec![Err(LexErrorKind::UnknownTypedTag("ParamFoo".to_string()))]
        );
    }

    #[test]
    fn test_eva_card_layout_identifier() {
        let tokens = lex_all(r#"<EVACardLayout."Inline">"#);
        assert_eq!(
            tokens,
            vec![Ok(Token::TypedTag(TypedTag {
                kind: TypedTagKind::EvaCardLayout,
                name: "Inline".to_string(),
            }))]
        );
    }

    #[test]
    fn test_booleans_are_not_strings() {
        let tokens = lex_all(r#""true" "false" "truest""#);
        assert_eq!(
            tokens,
            vec![
                Ok(Token::Bool(true)),
                Ok(Token::Bool(false)),
                Ok(Token::String("truest".to_string())),
            ]
        );
    }

    #[test]
    fn test_numbers() {
        let tokens = lex_all("22.3 -12 1e3 .5 -0.25 2.5s");
        assert_eq!(
            tokens,
            vec![
                Ok(Token::Float(FloatLit(22.3))),
                Ok(Token::Integer(-12)),
                Ok(Token::Float(FloatLit(1000.0))),
                Ok(Token::Float(FloatLit(0.5))),
                Ok(Token::Float(FloatLit(-0.25))),
                Ok(Token::Float(FloatLit(2.5))),
            ]
        );
    }

    #[test]
    fn test_integer_overflow() {
        let tokens = lex_all("99999999999999999999");
        assert!(matches!(tokens[0], Err(LexErrorKind::InvalidNumber(_))));
    }

    #[test]
    fn test_string_keeps_doubled_quotes() {
        let tokens = lex_all(r#""A ""string""""#);
        assert_eq!(tokens, vec![Ok(Token::String(r#"A ""string"""#.to_string()))]);
    }

    #[test]
    fn test_multiline_string() {
        let tokens = lex_all("\"line one\nline two\"");
        assert_eq!(
            tokens,
            vec![Ok(Token::String("line one\nline two".to_string()))]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::Tag(Tag::Id).to_string(), "<tag:ID>");
        assert_eq!(Token::Integer(4).to_string(), "<int:4>");
        assert_eq!(Token::LBrace.to_string(), "<lbrace>");
    }
}
