//! Treeviz formatter for parsed protocols

use crate::xprotocol::ast::{AstNode, CardLayout, Dependency, ParamBlock, Protocol};

const MAX_LABEL_CHARS: usize = 40;

fn truncate(s: &str, max_chars: usize) -> String {
    let single_line = s.replace('\n', "\\n");
    if single_line.chars().count() > max_chars {
        let mut truncated = single_line.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        single_line
    }
}

#[derive(Clone, Copy)]
enum TreeNode<'a> {
    Protocol(&'a Protocol),
    Block(&'a ParamBlock),
    Card(&'a CardLayout),
    Dependency(&'a Dependency),
}

impl<'a> TreeNode<'a> {
    fn node(&self) -> &'a dyn AstNode {
        match *self {
            TreeNode::Protocol(protocol) => protocol,
            TreeNode::Block(block) => block,
            TreeNode::Card(card) => card,
            TreeNode::Dependency(dependency) => dependency,
        }
    }

    fn children(&self) -> Vec<TreeNode<'a>> {
        match *self {
            TreeNode::Protocol(protocol) => protocol
                .blocks
                .iter()
                .map(TreeNode::Block)
                .chain(protocol.cards.iter().map(TreeNode::Card))
                .chain(protocol.dependencies.iter().map(TreeNode::Dependency))
                .collect(),
            TreeNode::Block(block) => block.blocks().iter().map(TreeNode::Block).collect(),
            TreeNode::Card(_) | TreeNode::Dependency(_) => Vec::new(),
        }
    }
}

pub fn to_treeviz_str(protocols: &[Protocol]) -> String {
    let mut result = String::new();
    let roots: Vec<TreeNode> = protocols.iter().map(TreeNode::Protocol).collect();
    append_children(&mut result, &roots, "");
    result
}

fn append_node(result: &mut String, node: TreeNode, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    let ast = node.node();
    let display_label = truncate(&ast.display_label(), MAX_LABEL_CHARS);

    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        ast.node_type(),
        display_label
    ));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(result, &node.children(), &new_prefix);
}

fn append_children(result: &mut String, children: &[TreeNode], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_node(result, *child, prefix, is_last);
    }
}
