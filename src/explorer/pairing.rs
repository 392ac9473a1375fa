//! Header pairing by include inspection.
//!
//! Used only when a source file has no same-named header next to it: the
//! first lines of the source are scanned for `#include` directives naming a
//! header with the source's stem, and each such header is looked up across
//! the workspace folders. This is a shallow heuristic, not a preprocessor.

use crate::models::file_stem;
use crate::services::ports::{ExplorerConfig, FileProvider, WorkspaceFolder};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Guards the workspace search against symlink cycles.
const MAX_SEARCH_DEPTH: usize = 64;

fn include_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^\s*#\s*include\s*[<"]([^<>"]+)[>"]"#)
            .map_err(|e| tracing::error!(error = %e, "include pattern failed to compile"))
            .ok()
    })
    .as_ref()
}

/// Target of an `#include "x"` / `#include <x>` line.
pub fn parse_include(line: &str) -> Option<&str> {
    include_regex()?
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|name| !name.is_empty())
}

fn header_extension_matches(name: &str, config: &ExplorerConfig) -> bool {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    match base.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => {
            config.header_extensions.iter().any(|e| e == ext)
        }
        _ => false,
    }
}

/// Includes among `lines` whose stem equals `source_key` and whose
/// extension is a header extension. Duplicates are dropped, order kept.
pub fn matching_includes(lines: &[String], source_key: &str, config: &ExplorerConfig) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for line in lines.iter().take(config.include_scan_lines) {
        let Some(name) = parse_include(line) else {
            continue;
        };
        if file_stem(name) != source_key || !header_extension_matches(name, config) {
            continue;
        }
        if !out.iter().any(|existing| existing == name) {
            out.push(name.to_string());
        }
    }
    out
}

/// Reads the head of `source` and returns its matching includes. A read
/// failure is logged and yields nothing.
pub fn scan_includes(
    files: &dyn FileProvider,
    source: &Path,
    source_key: &str,
    config: &ExplorerConfig,
) -> Vec<String> {
    match files.read_head_lines(source, config.include_scan_lines) {
        Ok(lines) => matching_includes(&lines, source_key, config),
        Err(e) => {
            tracing::warn!(path = %source.display(), error = %e, "failed to read source for includes");
            Vec::new()
        }
    }
}

/// Depth-first search of every workspace folder, in host order, for a file
/// named like the include's last component. First hit wins.
pub fn find_header_in_workspace(
    files: &dyn FileProvider,
    roots: &[WorkspaceFolder],
    include: &str,
    config: &ExplorerConfig,
) -> Option<PathBuf> {
    let wanted = include.rsplit(['/', '\\']).next().unwrap_or(include);
    if wanted.is_empty() {
        return None;
    }
    roots
        .iter()
        .find_map(|root| find_in_folder(files, &root.path, wanted, config, 0))
}

fn find_in_folder(
    files: &dyn FileProvider,
    folder: &Path,
    wanted: &str,
    config: &ExplorerConfig,
    depth: usize,
) -> Option<PathBuf> {
    if depth > MAX_SEARCH_DEPTH {
        tracing::warn!(dir = %folder.display(), "header search too deep, giving up on branch");
        return None;
    }
    if folder
        .file_name()
        .is_some_and(|n| config.is_ignored(&n.to_string_lossy()))
    {
        return None;
    }

    let entries = match files.read_dir(folder) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(dir = %folder.display(), error = %e, "failed to read directory");
            return None;
        }
    };

    for entry in entries {
        if config.is_ignored(&entry.name) {
            continue;
        }
        let meta = match files.metadata(&entry.path) {
            Ok(meta) => meta,
            Err(e) => {
                tracing::warn!(path = %entry.path.display(), error = %e, "failed to stat entry");
                continue;
            }
        };
        if meta.is_dir {
            if let Some(found) = find_in_folder(files, &entry.path, wanted, config, depth + 1) {
                return Some(found);
            }
        } else if entry.name == wanted {
            return Some(entry.path);
        }
    }
    None
}

#[cfg(test)]
#[path = "../../tests/unit/explorer/pairing.rs"]
mod tests;
