//! AST traits - Common interfaces for uniform node access

use super::elements::ParamBlock;

/// Common interface for all tree nodes
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
}

/// Nodes that own an ordered list of nested parameter blocks
pub trait Container {
    fn label(&self) -> &str;
    fn blocks(&self) -> &[ParamBlock];
}
