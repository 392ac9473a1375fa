use super::*;
use std::fs::File;
use tempfile::tempdir;

#[test]
fn test_read_dir_returns_every_entry_unsorted() {
    let dir = tempdir().unwrap();

    fs::create_dir(dir.path().join("subdir")).unwrap();
    File::create(dir.path().join("file1.txt")).unwrap();
    File::create(dir.path().join("file2.txt")).unwrap();

    let provider = LocalFileProvider::new();
    let mut names: Vec<String> = provider
        .read_dir(dir.path())
        .unwrap()
        .into_iter()
        .map(|e| e.name)
        .collect();
    names.sort();

    assert_eq!(names, vec!["file1.txt", "file2.txt", "subdir"]);
}

#[test]
fn test_read_dir_missing_is_error() {
    let dir = tempdir().unwrap();
    let provider = LocalFileProvider::new();
    assert!(provider.read_dir(&dir.path().join("nope")).is_err());
}

#[test]
fn test_metadata() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("test.txt");
    fs::write(&file_path, "Hello").unwrap();

    let provider = LocalFileProvider::new();
    let meta = provider.metadata(&file_path).unwrap();
    assert!(meta.is_file);
    assert!(!meta.is_dir);
    assert_eq!(meta.size, 5);

    let meta = provider.metadata(dir.path()).unwrap();
    assert!(meta.is_dir);
}

#[test]
fn test_metadata_not_found() {
    let provider = LocalFileProvider::new();
    let result = provider.metadata(Path::new("/nonexistent/file.txt"));
    assert!(matches!(result, Err(FileError::NotFound(_))));
}

#[test]
fn test_read_head_lines_stops_at_limit() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("a.cpp");
    let body: String = (0..80).map(|i| format!("line {}\r\n", i)).collect();
    fs::write(&file_path, body).unwrap();

    let provider = LocalFileProvider::new();
    let lines = provider.read_head_lines(&file_path, 50).unwrap();
    assert_eq!(lines.len(), 50);
    assert_eq!(lines[0], "line 0");
    assert_eq!(lines[49], "line 49");
}

#[test]
fn test_read_head_lines_tolerates_invalid_utf8() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("latin1.c");
    fs::write(&file_path, b"#include \"latin1.h\"\n/* \xe9t\xe9 */\n").unwrap();

    let provider = LocalFileProvider::new();
    let lines = provider.read_head_lines(&file_path, 50).unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "#include \"latin1.h\"");
}

#[test]
fn test_create_file_never_truncates() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("keep.txt");
    fs::write(&file_path, "content").unwrap();

    let provider = LocalFileProvider::new();
    let result = provider.create_file(&file_path);
    assert!(matches!(result, Err(FileError::AlreadyExists(_))));
    assert_eq!(fs::read_to_string(&file_path).unwrap(), "content");

    let fresh = dir.path().join("fresh.txt");
    provider.create_file(&fresh).unwrap();
    assert_eq!(fs::read(&fresh).unwrap().len(), 0);
}

#[test]
fn test_create_and_remove_dir_all() {
    let dir = tempdir().unwrap();
    let subdir = dir.path().join("newdir");

    let provider = LocalFileProvider::new();
    provider.create_dir(&subdir).unwrap();
    assert!(matches!(
        provider.create_dir(&subdir),
        Err(FileError::AlreadyExists(_))
    ));

    fs::write(subdir.join("inner.txt"), "x").unwrap();
    provider.remove_dir_all(&subdir).unwrap();
    assert!(!provider.exists(&subdir));
}

#[test]
fn test_remove_file() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("gone.txt");
    fs::write(&file_path, "x").unwrap();

    let provider = LocalFileProvider::new();
    provider.remove_file(&file_path).unwrap();
    assert!(!provider.exists(&file_path));
    assert!(matches!(
        provider.remove_file(&file_path),
        Err(FileError::NotFound(_))
    ));
}
