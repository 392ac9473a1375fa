use crate::services::ports::vcs::{ChangeKind, FileChange, VcsError, VcsProvider};
use std::path::{Path, PathBuf};
use std::process::Command;

/// `VcsProvider` backed by the `git` executable on PATH.
pub struct GitCli {
    program: PathBuf,
}

impl GitCli {
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("git"),
        }
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, cwd: &Path, args: &[&std::ffi::OsStr]) -> Result<std::process::Output, VcsError> {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-C").arg(cwd).args(args);
        cmd.output().map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                VcsError::Unavailable(format!("{} not found", self.program.display()))
            }
            _ => VcsError::Io(e),
        })
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl VcsProvider for GitCli {
    fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .output()
            .map(|out| out.status.success())
            .unwrap_or(false)
    }

    fn repository_root(&self, path: &Path) -> Result<Option<PathBuf>, VcsError> {
        let dir = if path.is_dir() {
            path
        } else {
            match path.parent() {
                Some(parent) => parent,
                None => return Ok(None),
            }
        };

        let out = self.run(dir, &["rev-parse".as_ref(), "--show-toplevel".as_ref()])?;
        if !out.status.success() {
            let stderr = String::from_utf8_lossy(&out.stderr);
            tracing::debug!(dir = %dir.display(), stderr = %stderr.trim(), "not inside a git work tree");
            return Ok(None);
        }

        let root = String::from_utf8_lossy(&out.stdout).trim().to_string();
        if root.is_empty() {
            return Ok(None);
        }
        Ok(Some(PathBuf::from(root)))
    }

    fn working_change(
        &self,
        repo_root: &Path,
        path: &Path,
    ) -> Result<Option<FileChange>, VcsError> {
        let out = self.run(
            repo_root,
            &[
                "status".as_ref(),
                "--porcelain=v1".as_ref(),
                "-z".as_ref(),
                "--".as_ref(),
                path.as_os_str(),
            ],
        )?;
        if !out.status.success() {
            return Err(VcsError::CommandFailed {
                command: "git status".to_string(),
                stderr: String::from_utf8_lossy(&out.stderr).to_string(),
            });
        }

        let statuses = parse_status_porcelain_z(&out.stdout, repo_root);
        let Some(kind) = pick_status(&statuses, repo_root, path) else {
            return Ok(None);
        };

        let patch = if kind == ChangeKind::Untracked {
            String::new()
        } else {
            let diff = self.run(
                repo_root,
                &[
                    "diff".as_ref(),
                    "--no-color".as_ref(),
                    "HEAD".as_ref(),
                    "--".as_ref(),
                    path.as_os_str(),
                ],
            )?;
            if diff.status.success() {
                String::from_utf8_lossy(&diff.stdout).to_string()
            } else {
                // No HEAD yet (fresh repository): the status alone is still useful.
                tracing::debug!(
                    stderr = %String::from_utf8_lossy(&diff.stderr).trim(),
                    "git diff HEAD failed"
                );
                String::new()
            }
        };

        Ok(Some(FileChange {
            path: path.to_path_buf(),
            kind,
            patch,
        }))
    }
}

fn pick_status(
    statuses: &[(PathBuf, ChangeKind)],
    repo_root: &Path,
    path: &Path,
) -> Option<ChangeKind> {
    let relative = path.strip_prefix(repo_root).ok();
    statuses
        .iter()
        .find(|(p, _)| p == path || relative.is_some_and(|rel| p == &repo_root.join(rel)))
        .or_else(|| statuses.first())
        .map(|(_, kind)| *kind)
}

pub fn parse_status_porcelain_z(data: &[u8], repo_root: &Path) -> Vec<(PathBuf, ChangeKind)> {
    let mut out = Vec::new();
    let mut tokens = data.split(|b| *b == 0).filter(|t| !t.is_empty());
    while let Some(token) = tokens.next() {
        if token.len() < 4 {
            continue;
        }

        let x = token[0] as char;
        let y = token[1] as char;
        if x == '!' && y == '!' {
            continue;
        }
        if x == ' ' && y == ' ' {
            continue;
        }
        if token[2] != b' ' {
            continue;
        }

        let mut path = PathBuf::from(String::from_utf8_lossy(&token[3..]).to_string());

        // Renames and copies carry the original path as a second token.
        if x == 'R' || x == 'C' {
            if let Some(next) = tokens.next() {
                tracing::trace!(from = %String::from_utf8_lossy(next), "rename source");
            }
        }
        if path.is_relative() {
            path = repo_root.join(path);
        }

        out.push((path, kind_from_xy(x, y)));
    }
    out
}

fn kind_from_xy(x: char, y: char) -> ChangeKind {
    if x == 'U' || y == 'U' || (x == 'A' && y == 'A') || (x == 'D' && y == 'D') {
        return ChangeKind::Conflict;
    }
    if x == '?' && y == '?' {
        return ChangeKind::Untracked;
    }
    // Worktree column wins over the index column.
    match (x, y) {
        (_, 'D') | ('D', ' ') => ChangeKind::Deleted,
        ('A', _) => ChangeKind::Added,
        _ => ChangeKind::Modified,
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/services/adapters/git.rs"]
mod tests;
