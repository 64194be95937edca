//! The root of a parsed XProtocol document

use serde::Serialize;

use super::super::traits::{AstNode, Container};
use super::block::ParamBlock;
use super::card::CardLayout;
use super::dependency::Dependency;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaString {
    pub code: i64,
    pub label: String,
}

/// `<EVAStringTable>`: a leading count followed by numbered labels
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaStringTable {
    pub count: i64,
    pub entries: Vec<EvaString>,
}

impl EvaStringTable {
    pub fn label(&self, code: i64) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.label.as_str())
    }
}

/// Header fields. Each may be absent; a repeated field keeps its last value.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Header {
    pub name: Option<String>,
    pub id: Option<i64>,
    pub user_version: Option<f64>,
    pub eva_string_table: Option<EvaStringTable>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Protocol {
    pub header: Header,
    pub blocks: Vec<ParamBlock>,
    pub cards: Vec<CardLayout>,
    pub dependencies: Vec<Dependency>,
}

impl Protocol {
    pub fn name(&self) -> Option<&str> {
        self.header.name.as_deref()
    }

    /// Depth-first lookup of a block by name
    pub fn find_block(&self, name: &str) -> Option<&ParamBlock> {
        self.blocks.iter().find_map(|block| block.find(name))
    }
}

impl AstNode for Protocol {
    fn node_type(&self) -> &'static str {
        "XProtocol"
    }

    fn display_label(&self) -> String {
        match (&self.header.name, self.header.id) {
            (Some(name), Some(id)) => format!("{} #{}", name, id),
            (Some(name), None) => name.clone(),
            (None, Some(id)) => format!("#{}", id),
            (None, None) => "<unnamed>".to_string(),
        }
    }
}

impl Container for Protocol {
    fn label(&self) -> &str {
        self.name().unwrap_or_default()
    }

    fn blocks(&self) -> &[ParamBlock] {
        &self.blocks
    }
}

impl AstNode for Dependency {
    fn node_type(&self) -> &'static str {
        "Dependency"
    }

    fn display_label(&self) -> String {
        format!("{} -> {}", self.name, self.targets.join(", "))
    }
}
