//! 面板树节点数据模型
//!
//! 纯数据记录，不携带任何宿主（UI 工具包）相关行为；渲染由 `views::tree_item` 负责。

use crate::services::ports::ExplorerConfig;
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    File,
    Directory,
}

/// One row of the panel.
///
/// Directories never carry `children`: they are re-listed every time the
/// host expands them. A source file carries the headers paired with it,
/// fixed when the node is built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub label: String,
    pub full_path: PathBuf,
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
}

impl TreeNode {
    pub fn directory(label: impl Into<String>, full_path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            full_path: full_path.into(),
            kind: NodeKind::Directory,
            children: None,
        }
    }

    pub fn file(label: impl Into<String>, full_path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            full_path: full_path.into(),
            kind: NodeKind::File,
            children: None,
        }
    }

    /// Source file owning the given headers. An empty list yields a plain leaf.
    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        debug_assert_eq!(self.kind, NodeKind::File);
        self.children = if children.is_empty() {
            None
        } else {
            Some(children)
        };
        self
    }

    pub fn is_directory(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    pub fn is_collapsible(&self) -> bool {
        match self.kind {
            NodeKind::Directory => true,
            NodeKind::File => self.children.as_ref().is_some_and(|c| !c.is_empty()),
        }
    }

    pub fn children(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Directory a new entry should be created in when this node is the target.
    pub fn container_dir(&self) -> &Path {
        match self.kind {
            NodeKind::Directory => self.full_path.as_path(),
            NodeKind::File => self.full_path.parent().unwrap_or(self.full_path.as_path()),
        }
    }

    pub fn sort_tier(&self, config: &ExplorerConfig) -> SortTier {
        if self.is_directory() {
            return SortTier::Directory;
        }
        SortTier::for_file_name(&self.label, config)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FileClass {
    Source,
    Header,
    Other,
}

impl FileClass {
    /// Exact (case sensitive) extension match, so `a.C` is not a source file.
    pub fn classify(file_name: &str, config: &ExplorerConfig) -> Self {
        let Some(ext) = extension(file_name) else {
            return FileClass::Other;
        };
        if config.source_extensions.iter().any(|e| e == ext) {
            FileClass::Source
        } else if config.header_extensions.iter().any(|e| e == ext) {
            FileClass::Header
        } else {
            FileClass::Other
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortTier {
    Directory = 0,
    Source = 1,
    Header = 2,
    Other = 3,
}

impl SortTier {
    /// Tiering ignores case, unlike pairing.
    pub fn for_file_name(file_name: &str, config: &ExplorerConfig) -> Self {
        let Some(ext) = extension(file_name) else {
            return SortTier::Other;
        };
        let ext = ext.to_lowercase();
        if config
            .source_extensions
            .iter()
            .any(|e| e.to_lowercase() == ext)
        {
            SortTier::Source
        } else if config
            .header_extensions
            .iter()
            .any(|e| e.to_lowercase() == ext)
        {
            SortTier::Header
        } else {
            SortTier::Other
        }
    }
}

/// Extension without the dot; dot-files such as `.clang-format` have none.
fn extension(file_name: &str) -> Option<&str> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }
    Some(ext)
}

/// File name with its directory part and last extension removed.
pub fn file_stem(name: &str) -> &str {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    match base.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => base,
    }
}
