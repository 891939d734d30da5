use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::tempdir;

fn run(dir: &Path, answer: &str) -> Output {
    run_with_log(dir, answer, "warn")
}

fn run_with_log(dir: &Path, answer: &str, level: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_leveldup"))
        .arg("--dir")
        .arg(dir)
        .env("RUST_LOG", level)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // the process may exit before reading stdin
    let _ = child.stdin.take().unwrap().write_all(answer.as_bytes());
    child.wait_with_output().unwrap()
}

fn scenario_tree(root: &Path) {
    let a = root.join("A");
    let b = a.join("B");
    fs::create_dir_all(&b).unwrap();
    fs::write(a.join("a.txt"), b"same content").unwrap();
    fs::write(a.join("a_copy.txt"), b"same content").unwrap();
    fs::write(b.join("a.txt"), b"same content").unwrap();
}

#[test]
fn missing_directory_exits_with_one() {
    let root = tempdir().unwrap();

    let output = run(&root.path().join("does-not-exist"), "");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn invalid_root_is_explained_with_logging_off() {
    let root = tempdir().unwrap();
    let missing = root.path().join("missing");

    let output = run_with_log(&missing, "", "off");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist or is not a directory"));
}

#[test]
fn deletions_are_listed_with_logging_off() {
    let root = tempdir().unwrap();
    scenario_tree(root.path());

    let output = run_with_log(root.path(), "y\n", "off");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[deleted] "));
    assert!(stdout.contains("a_copy.txt"));
}

#[test]
fn file_as_root_exits_with_one() {
    let root = tempdir().unwrap();
    let file = root.path().join("file.txt");
    fs::write(&file, b"x").unwrap();

    let output = run(&file, "");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn no_duplicates_exits_cleanly() {
    let root = tempdir().unwrap();
    fs::write(root.path().join("one"), b"111").unwrap();
    fs::write(root.path().join("two"), b"222").unwrap();
    fs::write(root.path().join("three"), b"333").unwrap();

    let output = run(root.path(), "");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No duplicate files found"));
}

#[test]
fn declining_keeps_every_file() {
    let root = tempdir().unwrap();
    scenario_tree(root.path());

    let output = run(root.path(), "no\n");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[1] "));
    assert!(stdout.contains("a_copy.txt"));
    assert!(!stdout.contains("[2] "));
    assert!(root.path().join("A/a.txt").exists());
    assert!(root.path().join("A/a_copy.txt").exists());
    assert!(root.path().join("A/B/a.txt").exists());
}

#[test]
fn empty_answer_declines() {
    let root = tempdir().unwrap();
    scenario_tree(root.path());

    let output = run(root.path(), "\n");

    assert_eq!(output.status.code(), Some(0));
    assert!(root.path().join("A/a_copy.txt").exists());
}

#[test]
fn confirming_removes_same_level_copies_only() {
    let root = tempdir().unwrap();
    scenario_tree(root.path());

    let output = run(root.path(), " Y \n");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Deleted 1 files, 0 failed"));
    assert!(root.path().join("A/a.txt").exists());
    assert!(!root.path().join("A/a_copy.txt").exists());
    assert!(root.path().join("A/B/a.txt").exists());
}
