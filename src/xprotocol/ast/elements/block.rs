//! The parameter block variant
//!
//! Every block kind has a name (possibly empty) and an attribute list; kinds
//! whose syntax has no attribute section get an empty list.

use serde::Serialize;

use super::super::traits::{AstNode, Container};
use super::attribute::AttrList;
use super::card::CardLayout;
use super::functor::{Functor, PipeService};
use super::param::{ParamArray, ParamBool, ParamChoice, ParamDouble, ParamLong, ParamMap, ParamString};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum ParamBlock {
    Bool(ParamBool),
    Long(ParamLong),
    Double(ParamDouble),
    String(ParamString),
    Array(ParamArray),
    Map(ParamMap),
    Choice(ParamChoice),
    Functor(Functor),
    CardLayout(CardLayout),
    PipeService(PipeService),
}

impl ParamBlock {
    pub fn name(&self) -> &str {
        match self {
            ParamBlock::Bool(p) => &p.name,
            ParamBlock::Long(p) => &p.name,
            ParamBlock::Double(p) => &p.name,
            ParamBlock::String(p) => &p.name,
            ParamBlock::Array(p) => &p.name,
            ParamBlock::Map(p) => &p.name,
            ParamBlock::Choice(p) => &p.name,
            ParamBlock::Functor(p) => &p.name,
            ParamBlock::CardLayout(p) => &p.name,
            ParamBlock::PipeService(p) => &p.name,
        }
    }

    pub fn attrs(&self) -> &AttrList {
        match self {
            ParamBlock::Bool(p) => &p.attrs,
            ParamBlock::Long(p) => &p.attrs,
            ParamBlock::Double(p) => &p.attrs,
            ParamBlock::String(p) => &p.attrs,
            ParamBlock::Array(p) => &p.attrs,
            ParamBlock::Map(p) => &p.attrs,
            ParamBlock::Choice(p) => &p.attrs,
            ParamBlock::Functor(p) => &p.attrs,
            ParamBlock::CardLayout(p) => &p.attrs,
            ParamBlock::PipeService(p) => &p.attrs,
        }
    }

    /// Nested blocks of maps, functors and pipe services
    pub fn blocks(&self) -> &[ParamBlock] {
        match self {
            ParamBlock::Map(map) => &map.blocks,
            ParamBlock::Functor(functor) => &functor.blocks,
            ParamBlock::PipeService(service) => &service.blocks,
            _ => &[],
        }
    }

    /// Depth-first search of this block and everything nested below it
    pub fn find(&self, name: &str) -> Option<&ParamBlock> {
        if self.name() == name {
            return Some(self);
        }
        self.blocks().iter().find_map(|block| block.find(name))
    }
}

fn shown(name: &str) -> &str {
    if name.is_empty() {
        "\"\""
    } else {
        name
    }
}

fn value_label<T: std::fmt::Debug>(name: &str, value: &Option<T>) -> String {
    match value {
        Some(value) => format!("{} = {:?}", shown(name), value),
        None => format!("{} = <absent>", shown(name)),
    }
}

impl AstNode for ParamBlock {
    fn node_type(&self) -> &'static str {
        match self {
            ParamBlock::Bool(_) => "ParamBool",
            ParamBlock::Long(_) => "ParamLong",
            ParamBlock::Double(_) => "ParamDouble",
            ParamBlock::String(_) => "ParamString",
            ParamBlock::Array(_) => "ParamArray",
            ParamBlock::Map(_) => "ParamMap",
            ParamBlock::Choice(_) => "ParamChoice",
            ParamBlock::Functor(_) => "ParamFunctor",
            ParamBlock::CardLayout(card) => card.node_type(),
            ParamBlock::PipeService(_) => "PipeService",
        }
    }

    fn display_label(&self) -> String {
        match self {
            ParamBlock::Bool(p) => value_label(&p.name, &p.value),
            ParamBlock::Long(p) => value_label(&p.name, &p.value),
            ParamBlock::Double(p) => value_label(&p.name, &p.value),
            ParamBlock::String(p) => value_label(&p.name, &p.value),
            ParamBlock::Choice(p) => value_label(&p.name, &p.value),
            ParamBlock::Array(p) => {
                let sections: Vec<String> = p
                    .sections
                    .iter()
                    .map(|section| match section {
                        Some(list) => list.to_string(),
                        None => "{ }".to_string(),
                    })
                    .collect();
                format!("{} = {}", shown(&p.name), sections.join(" "))
            }
            ParamBlock::Map(p) => shown(&p.name).to_string(),
            ParamBlock::Functor(p) => format!("{} ({})", shown(&p.name), p.class),
            ParamBlock::PipeService(p) => format!("{} ({})", shown(&p.name), p.class),
            ParamBlock::CardLayout(card) => card.display_label(),
        }
    }
}

impl AstNode for CardLayout {
    fn node_type(&self) -> &'static str {
        match self.style {
            super::card::CardStyle::Param => "ParamCardLayout",
            super::card::CardStyle::Eva => "EVACardLayout",
        }
    }

    fn display_label(&self) -> String {
        format!("{} ({} controls)", shown(&self.name), self.controls.len())
    }
}

impl Container for ParamMap {
    fn label(&self) -> &str {
        &self.name
    }

    fn blocks(&self) -> &[ParamBlock] {
        &self.blocks
    }
}

impl Container for Functor {
    fn label(&self) -> &str {
        &self.name
    }

    fn blocks(&self) -> &[ParamBlock] {
        &self.blocks
    }
}

impl Container for PipeService {
    fn label(&self) -> &str {
        &self.name
    }

    fn blocks(&self) -> &[ParamBlock] {
        &self.blocks
    }
}
