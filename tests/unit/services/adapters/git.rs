use super::*;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn parse_status_maps_xy_codes() {
    let root = Path::new("/repo");
    let data = b" M src/a.cpp\0A  src/b.h\0?? notes.txt\0UU merge.c\0 D gone.c\0";
    let parsed = parse_status_porcelain_z(data, root);
    assert_eq!(
        parsed,
        vec![
            (PathBuf::from("/repo/src/a.cpp"), ChangeKind::Modified),
            (PathBuf::from("/repo/src/b.h"), ChangeKind::Added),
            (PathBuf::from("/repo/notes.txt"), ChangeKind::Untracked),
            (PathBuf::from("/repo/merge.c"), ChangeKind::Conflict),
            (PathBuf::from("/repo/gone.c"), ChangeKind::Deleted),
        ]
    );
}

#[test]
fn parse_status_rename_keeps_destination_and_skips_source_token() {
    let root = Path::new("/repo");
    let data = b"R  new.cpp\0old.cpp\0 M other.c\0";
    let parsed = parse_status_porcelain_z(data, root);
    assert_eq!(
        parsed,
        vec![
            (PathBuf::from("/repo/new.cpp"), ChangeKind::Modified),
            (PathBuf::from("/repo/other.c"), ChangeKind::Modified),
        ]
    );
}

#[test]
fn parse_status_ignores_ignored_and_malformed_entries() {
    let root = Path::new("/repo");
    let data = b"!! build/\0xx\0 M ok.c\0";
    let parsed = parse_status_porcelain_z(data, root);
    assert_eq!(parsed, vec![(PathBuf::from("/repo/ok.c"), ChangeKind::Modified)]);
}

#[test]
fn pick_status_prefers_exact_path() {
    let root = Path::new("/repo");
    let statuses = vec![
        (PathBuf::from("/repo/a.c"), ChangeKind::Added),
        (PathBuf::from("/repo/b.c"), ChangeKind::Modified),
    ];
    assert_eq!(
        pick_status(&statuses, root, Path::new("/repo/b.c")),
        Some(ChangeKind::Modified)
    );
    assert_eq!(pick_status(&[], root, Path::new("/repo/b.c")), None);
}

fn git(dir: &Path, args: &[&str]) -> bool {
    Command::new("git")
        .arg("-C")
        .arg(dir)
        .args([
            "-c",
            "user.email=dev@example.com",
            "-c",
            "user.name=dev",
            "-c",
            "commit.gpgsign=false",
        ])
        .args(args)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

#[test]
fn working_change_against_real_repository() {
    let cli = GitCli::new();
    if !cli.is_available() {
        return;
    }

    let dir = tempdir().unwrap();
    let root = dir.path().canonicalize().unwrap();
    assert!(git(&root, &["init", "-q"]));
    let file = root.join("main.cpp");
    std::fs::write(&file, "int main() { return 0; }\n").unwrap();
    assert!(git(&root, &["add", "main.cpp"]));
    assert!(git(&root, &["commit", "-q", "-m", "init"]));

    let found = cli.repository_root(&file).unwrap().unwrap();
    assert_eq!(found.canonicalize().unwrap(), root);

    assert_eq!(cli.working_change(&root, &file).unwrap(), None);

    std::fs::write(&file, "int main() { return 1; }\n").unwrap();
    let change = cli.working_change(&root, &file).unwrap().unwrap();
    assert_eq!(change.kind, ChangeKind::Modified);
    assert!(change.patch.contains("+int main() { return 1; }"));

    let fresh = root.join("extra.h");
    std::fs::write(&fresh, "#pragma once\n").unwrap();
    let change = cli.working_change(&root, &fresh).unwrap().unwrap();
    assert_eq!(change.kind, ChangeKind::Untracked);
    assert!(change.patch.is_empty());
}

#[test]
fn repository_root_outside_repo_is_none() {
    let cli = GitCli::new();
    if !cli.is_available() {
        return;
    }
    let dir = tempdir().unwrap();
    let file = dir.path().join("loose.c");
    std::fs::write(&file, "").unwrap();
    // A temp dir may itself live under a checkout; only assert when it does not.
    if let Ok(Some(root)) = cli.repository_root(&file) {
        assert!(dir.path().starts_with(&root) || file.starts_with(&root));
    }
}

#[test]
fn missing_git_binary_is_unavailable() {
    let cli = GitCli::with_program("/nonexistent/git-binary");
    assert!(!cli.is_available());
    let dir = tempdir().unwrap();
    let err = cli.repository_root(dir.path()).unwrap_err();
    assert!(matches!(err, VcsError::Unavailable(_)));
}
