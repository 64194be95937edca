//! Card layouts
//!
//! Two syntaxes exist. The current one:
//!
//!     <ParamCardLayout."Inline Compose">
//!     {
//!       <Repr> "LAYOUT_10X2_WIDE_CONTROLS"
//!       <Control>  { <Param> "MultiStep.IsInlineCompose" <Pos> 77 18 }
//!       <Line>  { 126 48 126 140 }
//!     }
//!
//! and the legacy EVA form, where the header and each control are positional:
//!
//!     <EVACardLayout."Inline"> { "LAYOUT" 1 "Param.A" 10 20 "CHECKBOX" <Line> { 0 0 1 1 } }

use chumsky::prelude::*;

use crate::xprotocol::ast::{AttrList, CardLayout, CardStyle, Control, Line, Pos};
use crate::xprotocol::lexer::{Tag, TypedTagKind};
use crate::xprotocol::parser::combinators::{
    integer, lbrace, rbrace, string, tag, typed_tag, ParserError, TokenSpan,
};

fn pos() -> impl Parser<TokenSpan, Pos, Error = ParserError> + Clone {
    integer().then(integer()).map(|(x, y)| Pos { x, y })
}

/// `<Line> { x1 y1 x2 y2 }`
pub(crate) fn line() -> impl Parser<TokenSpan, Line, Error = ParserError> + Clone {
    tag(Tag::Line)
        .ignore_then(
            integer()
                .then(integer())
                .then(integer())
                .then(integer())
                .delimited_by(lbrace(), rbrace()),
        )
        .map(|(((x1, y1), x2), y2)| Line([x1, y1, x2, y2]))
}

/// `<Control> { <Param> "..." <Pos> x y (<Repr> "...")? }`
pub(crate) fn control() -> impl Parser<TokenSpan, Control, Error = ParserError> + Clone {
    tag(Tag::Control)
        .ignore_then(
            tag(Tag::Param)
                .ignore_then(string())
                .then(tag(Tag::Pos).ignore_then(pos()))
                .then(tag(Tag::Repr).ignore_then(string()).or_not())
                .delimited_by(lbrace(), rbrace()),
        )
        .map(|((param, pos), repr)| Control { param, pos, repr })
}

pub(crate) fn param_card_layout() -> impl Parser<TokenSpan, CardLayout, Error = ParserError> + Clone {
    typed_tag(TypedTagKind::ParamCardLayout)
        .then(
            tag(Tag::Repr)
                .ignore_then(string())
                .then(control().repeated())
                .then(line().repeated())
                .delimited_by(lbrace(), rbrace()),
        )
        .map(|(name, ((repr, controls), lines))| CardLayout {
            name,
            attrs: AttrList::default(),
            style: CardStyle::Param,
            repr,
            declared_controls: None,
            controls,
            lines,
        })
}

/// `"param" x y "repr"`
fn eva_control() -> impl Parser<TokenSpan, Control, Error = ParserError> + Clone {
    string()
        .then(pos())
        .then(string())
        .map(|((param, pos), repr)| Control {
            param,
            pos,
            repr: Some(repr),
        })
}

pub(crate) fn eva_card_layout() -> impl Parser<TokenSpan, CardLayout, Error = ParserError> + Clone {
    typed_tag(TypedTagKind::EvaCardLayout)
        .then(
            string()
                .then(integer())
                .then(eva_control().repeated().at_least(1))
                .then(line().repeated())
                .delimited_by(lbrace(), rbrace()),
        )
        .map(|(name, (((repr, count), controls), lines))| CardLayout {
            name,
            attrs: AttrList::default(),
            style: CardStyle::Eva,
            repr,
            declared_controls: Some(count),
            controls,
            lines,
        })
}

pub(crate) fn card_layout() -> impl Parser<TokenSpan, CardLayout, Error = ParserError> + Clone {
    choice((param_card_layout(), eva_card_layout()))
}
