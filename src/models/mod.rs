//! 数据模型层

pub mod tree_node;

pub use tree_node::{file_stem, FileClass, NodeKind, SortTier, TreeNode};
