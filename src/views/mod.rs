//! 视图层模块
//!
//! - tree_item: TreeNode → 宿主树项展示属性
//! - tree_text: 全展开树的文本/JSON 渲染

pub mod tree_item;
pub mod tree_text;

pub use tree_item::{Collapsible, Icon, ItemCommand, TreeItemView, ITEM_CONTEXT_VALUE};
pub use tree_text::{expand_tree, render_text, ExpandedNode};
