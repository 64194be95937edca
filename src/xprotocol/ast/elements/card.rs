//! Card layouts: the editing-screen description attached to a protocol

use serde::Serialize;

use super::attribute::AttrList;

/// Which syntax a card layout was written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CardStyle {
    /// `<ParamCardLayout."...">` with `<Repr>`, `<Control>` and `<Line>` entries
    Param,
    /// Legacy `<EVACardLayout."...">` with positional control records
    Eva,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pos {
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Control {
    pub param: String,
    pub pos: Pos,
    pub repr: Option<String>,
}

/// Separator line, stored as the four rectangle coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Line(pub [i64; 4]);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardLayout {
    pub name: String,
    pub attrs: AttrList,
    pub style: CardStyle,
    pub repr: String,
    /// Control count announced by an EVA layout header
    pub declared_controls: Option<i64>,
    pub controls: Vec<Control>,
    pub lines: Vec<Line>,
}
