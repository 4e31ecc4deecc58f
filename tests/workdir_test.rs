use ghstats::lines::WorkingCopy;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

/// Build a small local repository to clone from, laid out as
/// `<base>/<owner>/<repo>` so it doubles as a clone base URL.
fn init_source_repo(base: &Path, owner: &str, repo: &str) {
    let dir = base.join(owner).join(repo);
    fs::create_dir_all(&dir).unwrap();
    for args in [
        vec!["init"],
        vec!["config", "user.email", "you@example.com"],
        vec!["config", "user.name", "Your Name"],
    ] {
        assert!(Command::new("git")
            .args(&args)
            .current_dir(&dir)
            .status()
            .unwrap()
            .success());
    }
    fs::write(dir.join("file.txt"), "hello\n").unwrap();
    assert!(Command::new("git")
        .args(["add", "."])
        .current_dir(&dir)
        .status()
        .unwrap()
        .success());
    assert!(Command::new("git")
        .args(["commit", "-m", "initial"])
        .current_dir(&dir)
        .status()
        .unwrap()
        .success());
}

#[test]
fn clone_materializes_and_drop_removes() {
    if !has_git() {
        return;
    }
    let source = tempdir().unwrap();
    let scratch = tempdir().unwrap();
    init_source_repo(source.path(), "acme", "widget");

    let clone_base = source.path().to_string_lossy().to_string();
    let cloned_path;
    {
        let copy = WorkingCopy::clone_fresh(&clone_base, "acme", "widget", scratch.path()).unwrap();
        cloned_path = copy.path().to_path_buf();
        assert!(cloned_path.join("file.txt").exists());
    }
    assert!(!cloned_path.exists());
}

#[test]
fn stale_directory_is_replaced_before_cloning() {
    if !has_git() {
        return;
    }
    let source = tempdir().unwrap();
    let scratch = tempdir().unwrap();
    init_source_repo(source.path(), "acme", "widget");

    // Simulate a leftover from an aborted earlier run
    let stale = scratch.path().join("widget");
    fs::create_dir_all(&stale).unwrap();
    fs::write(stale.join("junk.txt"), "stale\n").unwrap();

    let clone_base = source.path().to_string_lossy().to_string();
    let copy = WorkingCopy::clone_fresh(&clone_base, "acme", "widget", scratch.path()).unwrap();
    assert!(!copy.path().join("junk.txt").exists());
    assert!(copy.path().join("file.txt").exists());
}

#[test]
fn unreachable_remote_is_a_clone_failure() {
    if !has_git() {
        return;
    }
    let scratch = tempdir().unwrap();
    let missing = scratch.path().join("nowhere").to_string_lossy().to_string();
    let result = WorkingCopy::clone_fresh(&missing, "acme", "ghost", scratch.path());
    assert!(result.is_err());
}
