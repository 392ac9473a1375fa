//! 全展开树的文本 / JSON 渲染（CLI 宿主使用）

use crate::explorer::TreeModelBuilder;
use crate::models::{NodeKind, TreeNode};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;

/// Directories deeper than this are shown but not listed.
pub const MAX_EXPAND_DEPTH: usize = 32;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExpandedNode {
    pub label: String,
    pub path: PathBuf,
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ExpandedNode>,
}

/// Walks the builder from the root call down, listing every directory.
pub fn expand_tree(builder: &TreeModelBuilder<'_>) -> Vec<ExpandedNode> {
    expand_level(builder, &builder.list_children(None), 0)
}

fn expand_level(
    builder: &TreeModelBuilder<'_>,
    nodes: &[TreeNode],
    depth: usize,
) -> Vec<ExpandedNode> {
    nodes
        .iter()
        .map(|node| {
            let children = if node.is_collapsible() && depth < MAX_EXPAND_DEPTH {
                expand_level(builder, &builder.list_children(Some(node)), depth + 1)
            } else {
                Vec::new()
            };
            ExpandedNode {
                label: node.label.clone(),
                path: node.full_path.clone(),
                kind: node.kind,
                children,
            }
        })
        .collect()
}

pub fn render_text(nodes: &[ExpandedNode]) -> String {
    let mut out = String::new();
    render_rows(&mut out, nodes, 0);
    out
}

fn render_rows(out: &mut String, nodes: &[ExpandedNode], depth: usize) {
    for node in nodes {
        let indent = "  ".repeat(depth);
        let icon = match node.kind {
            NodeKind::Directory => "▼ ",
            NodeKind::File if !node.children.is_empty() => "▾ ",
            NodeKind::File => "  ",
        };
        let _ = writeln!(out, "{}{}{}", indent, icon, node.label);
        render_rows(out, &node.children, depth + 1);
    }
}
