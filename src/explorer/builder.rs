use super::pairing;
use super::sort::{label_cmp, sort_nodes};
use crate::models::{file_stem, FileClass, NodeKind, TreeNode};
use crate::services::ports::{
    ExplorerConfig, FileError, FileProvider, WorkspaceFolder,
};
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};

/// Builds panel rows straight from the file system. Nothing is cached: every
/// call re-lists, so a refresh is simply "ask again".
pub struct TreeModelBuilder<'a> {
    files: &'a dyn FileProvider,
    config: &'a ExplorerConfig,
    roots: Vec<WorkspaceFolder>,
}

impl<'a> TreeModelBuilder<'a> {
    pub fn new(
        files: &'a dyn FileProvider,
        config: &'a ExplorerConfig,
        roots: Vec<WorkspaceFolder>,
    ) -> Self {
        Self {
            files,
            config,
            roots,
        }
    }

    pub fn roots(&self) -> &[WorkspaceFolder] {
        &self.roots
    }

    pub fn list_children(&self, node: Option<&TreeNode>) -> Vec<TreeNode> {
        match node {
            None => self.list_roots(),
            Some(node) if node.is_directory() => self.list_directory(&node.full_path),
            Some(node) => node.children().to_vec(),
        }
    }

    fn list_roots(&self) -> Vec<TreeNode> {
        match self.roots.as_slice() {
            [] => Vec::new(),
            [only] => self.list_directory(&only.path),
            many => many
                .iter()
                .map(|folder| TreeNode::directory(folder.name.clone(), folder.path.clone()))
                .collect(),
        }
    }

    /// Lists `dir`, nests paired headers under their sources and sorts the
    /// result. Failures only ever drop the affected entry.
    pub fn list_directory(&self, dir: &Path) -> Vec<TreeNode> {
        let entries = match self.files.read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::error!(dir = %dir.display(), error = %e, "failed to read directory");
                return Vec::new();
            }
        };

        let mut items: Vec<TreeNode> = Vec::with_capacity(entries.len());
        // source key -> index of the owning source node in `items`
        let mut owners: FxHashMap<String, usize> = FxHashMap::default();
        // header file name -> path, held aside until pairing is done
        let mut held_headers: FxHashMap<String, PathBuf> = FxHashMap::default();

        for entry in entries {
            if self.config.is_ignored(&entry.name) {
                continue;
            }

            let meta = match self.files.metadata(&entry.path) {
                Ok(meta) => meta,
                Err(e) => {
                    tracing::warn!(path = %entry.path.display(), error = %e, "failed to stat entry");
                    continue;
                }
            };

            if meta.is_dir {
                items.push(TreeNode::directory(entry.name, entry.path));
                continue;
            }

            match FileClass::classify(&entry.name, self.config) {
                FileClass::Source => {
                    let key = file_stem(&entry.name).to_string();
                    let idx = items.len();
                    items.push(TreeNode::file(entry.name, entry.path));
                    // `foo.c` next to `foo.cpp`: the label sorting first owns the headers.
                    match owners.get(&key) {
                        Some(&current)
                            if label_cmp(&items[current].label, &items[idx].label).is_le() => {}
                        _ => {
                            owners.insert(key, idx);
                        }
                    }
                }
                FileClass::Header => {
                    held_headers.insert(entry.name, entry.path);
                }
                FileClass::Other => items.push(TreeNode::file(entry.name, entry.path)),
            }
        }

        let mut owners: Vec<(String, usize)> = owners.into_iter().collect();
        owners.sort_by(|a, b| a.0.cmp(&b.0));

        for (key, idx) in owners {
            let mut children = self.take_sibling_headers(&key, &mut held_headers);
            if children.is_empty() {
                children = self.headers_from_includes(&items[idx].full_path, &key);
            }
            if !children.is_empty() {
                tracing::debug!(
                    source = %items[idx].full_path.display(),
                    headers = children.len(),
                    "paired headers"
                );
                items[idx].children = Some(children);
            }
        }

        items.extend(
            held_headers
                .into_iter()
                .map(|(name, path)| TreeNode::file(name, path)),
        );

        sort_nodes(&mut items, self.config);
        items
    }

    /// `<key>.h` then `<key>.hpp` from the same directory; taken headers
    /// leave the pool so they are not listed twice.
    fn take_sibling_headers(
        &self,
        key: &str,
        held_headers: &mut FxHashMap<String, PathBuf>,
    ) -> Vec<TreeNode> {
        self.config
            .header_extensions
            .iter()
            .filter_map(|ext| {
                let name = format!("{}.{}", key, ext);
                held_headers
                    .remove(&name)
                    .map(|path| TreeNode::file(name, path))
            })
            .collect()
    }

    fn headers_from_includes(&self, source: &Path, key: &str) -> Vec<TreeNode> {
        let mut children: Vec<TreeNode> = Vec::new();
        for include in pairing::scan_includes(self.files, source, key, self.config) {
            let Some(found) =
                pairing::find_header_in_workspace(self.files, &self.roots, &include, self.config)
            else {
                tracing::debug!(source = %source.display(), include = %include, "included header not found");
                continue;
            };
            if children.iter().any(|c| c.full_path == found) {
                continue;
            }
            let label = found
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| include.clone());
            children.push(TreeNode::file(label, found));
        }
        children
    }

    /// Node for an arbitrary path, e.g. a command target named on the
    /// command line. Files come back without paired children.
    pub fn node_for_path(&self, path: &Path) -> Result<TreeNode, FileError> {
        let meta = self.files.metadata(path)?;
        let label = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        let kind = if meta.is_dir {
            NodeKind::Directory
        } else {
            NodeKind::File
        };
        Ok(TreeNode {
            label,
            full_path: path.to_path_buf(),
            kind,
            children: None,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/explorer/builder.rs"]
mod tests;
