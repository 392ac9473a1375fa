//! 树节点 → 宿主展示属性（纯映射，无 IO）

use crate::actions::ExplorerCommand;
use crate::models::{NodeKind, TreeNode};
use std::path::PathBuf;

/// Context value hosts key their per-item menus on.
pub const ITEM_CONTEXT_VALUE: &str = "cppFile";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Collapsible {
    None,
    Collapsed,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Icon {
    Folder,
    File,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemCommand {
    pub id: &'static str,
    pub argument: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeItemView {
    pub label: String,
    pub tooltip: String,
    pub description: Option<String>,
    pub collapsible: Collapsible,
    pub icon: Icon,
    pub resource: PathBuf,
    /// Clicking a file opens it; directories only expand.
    pub command: Option<ItemCommand>,
    pub context_value: &'static str,
}

impl TreeItemView {
    pub fn from_node(node: &TreeNode) -> Self {
        let collapsible = if node.is_collapsible() {
            Collapsible::Collapsed
        } else {
            Collapsible::None
        };

        let (icon, command) = match node.kind {
            NodeKind::Directory => (Icon::Folder, None),
            NodeKind::File => (
                Icon::File,
                Some(ItemCommand {
                    id: ExplorerCommand::OpenFile.id(),
                    argument: node.full_path.clone(),
                }),
            ),
        };

        let description = match node.children().len() {
            0 => None,
            1 => Some("1 header".to_string()),
            n => Some(format!("{} headers", n)),
        };

        Self {
            label: node.label.clone(),
            tooltip: node.full_path.display().to_string(),
            description,
            collapsible,
            icon,
            resource: node.full_path.clone(),
            command,
            context_value: ITEM_CONTEXT_VALUE,
        }
    }
}

impl From<&TreeNode> for TreeItemView {
    fn from(node: &TreeNode) -> Self {
        Self::from_node(node)
    }
}
