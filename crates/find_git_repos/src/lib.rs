// crates/find_git_repos/src/lib.rs

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Name of the entry that marks a directory as the top level of a Git repository.
pub const GIT_MARKER: &str = ".git";

/// Walks a directory tree looking for repository roots.
///
/// A directory is a repository root when it directly contains the marker entry
/// (a `.git` directory, or the `.git` file used by submodules and worktrees).
/// Once a root is found its subtree is not searched any further.
pub struct RepoScanner<'a> {
    root: &'a Path,
    marker: &'a str,
}

impl<'a> RepoScanner<'a> {
    pub fn new(root: &'a Path) -> Self {
        RepoScanner {
            root,
            marker: GIT_MARKER,
        }
    }

    /// Overrides the marker name (defaults to `.git`).
    pub fn marker(mut self, marker: &'a str) -> Self {
        self.marker = marker;
        self
    }

    /// Returns every repository root under `root` (root inclusive), in pre-order
    /// with siblings sorted by file name.
    ///
    /// Entries that cannot be read are skipped. The only error returned is for a
    /// root that does not exist or is not a directory.
    pub fn scan(&self) -> io::Result<Vec<PathBuf>> {
        let metadata = fs::metadata(self.root)?;
        if !metadata.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("'{}' is not a directory", self.root.display()),
            ));
        }

        let mut repos = Vec::new();
        let mut walker = WalkDir::new(self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        while let Some(entry) = walker.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::debug!("skipping {}", describe_walk_error(&err));
                    continue;
                }
            };
            if !entry.file_type().is_dir() {
                continue;
            }
            if self.has_marker(entry.path()) {
                log::debug!("repository: {}", entry.path().display());
                repos.push(entry.into_path());
                walker.skip_current_dir();
            }
        }

        Ok(repos)
    }

    fn has_marker(&self, dir: &Path) -> bool {
        fs::metadata(dir.join(self.marker)).is_ok()
    }
}

/// Finds every Git repository root under `root`. See [`RepoScanner::scan`].
pub fn find_git_repos(root: &Path) -> io::Result<Vec<PathBuf>> {
    RepoScanner::new(root).scan()
}

/// Returns `path` relative to `root` for display.
///
/// The root itself becomes `.`; a path outside `root` is returned unchanged.
pub fn relative_display(root: &Path, path: &Path) -> PathBuf {
    match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => PathBuf::from("."),
        Ok(rel) => rel.to_path_buf(),
        Err(_) => path.to_path_buf(),
    }
}

fn describe_walk_error(err: &walkdir::Error) -> String {
    match err.path() {
        Some(path) => format!("{}: {}", path.display(), err),
        None => err.to_string(),
    }
}
