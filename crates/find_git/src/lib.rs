// crates/find_git/src/lib.rs

use anyhow::{Context, Result};
use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use find_git_repos::{find_git_repos, relative_display};

pub mod config;
pub mod logging;

/// Resolves the scan root from the current working directory.
pub fn resolve_root() -> Result<PathBuf> {
    let cwd = env::current_dir().context("Error getting current working directory")?;
    std::path::absolute(&cwd).with_context(|| format!("Error resolving path {}", cwd.display()))
}

/// Scans `root` and writes each repository, relative to `root`, on its own line.
/// Returns the number of repositories written.
pub fn run<W: Write>(root: &Path, out: &mut W) -> Result<usize> {
    let repos = find_git_repos(root).context("Error traversing directories")?;
    log::debug!("found {} repositories under {}", repos.len(), root.display());

    for repo in &repos {
        write_path_line(out, &relative_display(root, repo)).context("Failed to write output")?;
    }
    out.flush().context("Failed to write output")?;
    Ok(repos.len())
}

// Path bytes are written unchanged so non-UTF-8 names still name the directory.
#[cfg(unix)]
fn write_path_line<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    use std::os::unix::ffi::OsStrExt;

    out.write_all(path.as_os_str().as_bytes())?;
    out.write_all(b"\n")
}

#[cfg(not(unix))]
fn write_path_line<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    writeln!(out, "{}", path.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn run_to_string(root: &Path) -> String {
        let mut out: Vec<u8> = Vec::new();
        run(root, &mut out).expect("run failed");
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_run_prints_relative_paths() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("apps").join("web").join(".git")).unwrap();
        fs::create_dir_all(root.join("libs").join("core").join(".git")).unwrap();

        let output = run_to_string(root);
        assert_eq!(output, "apps/web\nlibs/core\n");
    }

    #[test]
    fn test_run_root_repository_prints_dot() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join(".git")).unwrap();

        assert_eq!(run_to_string(temp_dir.path()), ".\n");
    }

    #[test]
    fn test_run_returns_count() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("one").join(".git")).unwrap();
        fs::create_dir_all(root.join("two").join(".git")).unwrap();

        let mut out: Vec<u8> = Vec::new();
        assert_eq!(run(root, &mut out).unwrap(), 2);
    }

    #[test]
    fn test_run_empty_tree() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(run_to_string(temp_dir.path()), "");
    }

    #[test]
    fn test_run_missing_root_has_context() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("gone");
        let mut out: Vec<u8> = Vec::new();

        let err = run(&missing, &mut out).unwrap_err();
        assert!(format!("{:#}", err).starts_with("Error traversing directories"));
        assert!(out.is_empty());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_run_keeps_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = TempDir::new().unwrap();
        let repo = temp_dir.path().join(OsStr::from_bytes(b"caf\xe9"));
        fs::create_dir_all(repo.join(".git")).unwrap();

        let mut out: Vec<u8> = Vec::new();
        run(temp_dir.path(), &mut out).unwrap();
        assert_eq!(out, b"caf\xe9\n".to_vec());
    }

    #[test]
    fn test_resolve_root_is_absolute() {
        let root = resolve_root().unwrap();
        assert!(root.is_absolute());
    }
}
