//! Candidate file discovery.
//!
//! Sources, in priority order:
//! 1. explicit paths from the command line;
//! 2. files staged in git (`--staged`), when no paths were given;
//! 3. a recursive walk of the default root when the above yield nothing.
//!
//! Whatever the source, only paths ending in `.js` that exist as regular
//! files are kept. The walk follows directory symlinks and has no cycle
//! guard.

use crate::error::{Result, SemilintError};
use std::path::{Path, PathBuf};
use std::process::Command;

pub const SOURCE_SUFFIX: &str = ".js";

/// Walked when no root is configured, relative to the executable's directory.
const DEFAULT_WALK_DIR: &str = "../scripts";

/// A file to lint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    /// Name used in reports.
    pub display: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoverySource {
    Explicit,
    Staged,
    Walk,
}

/// Collect the files to lint.
///
/// Missing explicit files are reported as errors and skipped; files without
/// the `.js` suffix are dropped silently.
pub fn discover(
    files: &[String],
    staged: bool,
    walk_root: Option<&Path>,
) -> (Vec<Candidate>, Vec<SemilintError>) {
    let (source, raw) = gather(files, staged, walk_root);
    tracing::debug!(?source, count = raw.len(), "gathered candidate paths");
    filter_candidates(raw)
}

fn gather(
    files: &[String],
    staged: bool,
    walk_root: Option<&Path>,
) -> (DiscoverySource, Vec<Candidate>) {
    if !files.is_empty() {
        return (
            DiscoverySource::Explicit,
            files.iter().map(|f| candidate_as_given(Path::new(f))).collect(),
        );
    }
    if staged {
        match staged_files() {
            Ok(paths) if !paths.is_empty() => {
                return (
                    DiscoverySource::Staged,
                    paths.iter().map(|p| candidate_as_given(p)).collect(),
                );
            }
            Ok(_) => tracing::debug!("no staged sources; falling back to walk"),
            Err(e) => tracing::debug!(error = %e, "staged listing failed; falling back to walk"),
        }
    }
    let root = walk_root.map_or_else(default_walk_root, Path::to_path_buf);
    let cwd = std::env::current_dir().ok();
    let walked = walk_sources(&root)
        .into_iter()
        .map(|path| {
            let display = cwd
                .as_deref()
                .and_then(|base| pathdiff::diff_paths(&path, base))
                .unwrap_or_else(|| path.clone())
                .to_string_lossy()
                .into_owned();
            Candidate { path, display }
        })
        .collect();
    (DiscoverySource::Walk, walked)
}

fn candidate_as_given(path: &Path) -> Candidate {
    Candidate {
        path: path.to_path_buf(),
        display: path.to_string_lossy().into_owned(),
    }
}

/// Keep `.js` paths that exist as regular files.
pub fn filter_candidates(raw: Vec<Candidate>) -> (Vec<Candidate>, Vec<SemilintError>) {
    let mut kept = Vec::with_capacity(raw.len());
    let mut errors = Vec::new();
    for c in raw {
        if !has_source_suffix(&c.path) {
            continue;
        }
        if !c.path.is_file() {
            errors.push(SemilintError::MissingFile { path: c.path });
            continue;
        }
        kept.push(c);
    }
    (kept, errors)
}

pub fn has_source_suffix(path: &Path) -> bool {
    path.to_string_lossy().ends_with(SOURCE_SUFFIX)
}

/// `<dir of the executable>/../scripts`, resolved against the working
/// directory instead when the executable cannot be located.
pub fn default_walk_root() -> PathBuf {
    let base = std::env::current_exe()
        .and_then(|p| p.canonicalize())
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));
    base.join(DEFAULT_WALK_DIR)
}

/// All `.js` regular files under `root`, in sorted order.
pub fn walk_sources(root: &Path) -> Vec<PathBuf> {
    let pattern = format!(
        "{}/**/*{}",
        glob::Pattern::escape(&root.to_string_lossy()),
        SOURCE_SUFFIX
    );
    match glob::glob(&pattern) {
        Ok(paths) => {
            let mut found: Vec<PathBuf> = paths
                .filter_map(|entry| entry.ok())
                .filter(|p| p.is_file())
                .collect();
            found.sort();
            found
        }
        Err(e) => {
            tracing::debug!(%pattern, error = %e, "invalid walk pattern");
            Vec::new()
        }
    }
}

/// Run a git command and return stdout.
fn git_command(args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .output()
        .map_err(|e| SemilintError::Git {
            message: format!("Failed to execute git: {}", e),
        })?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(SemilintError::Git {
            message: format!("git {} failed: {}", args.join(" "), stderr.trim()),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Added, copied, modified or renamed `.js` files in the index.
///
/// Paths are as git prints them, relative to the work tree top.
pub fn staged_files() -> Result<Vec<PathBuf>> {
    git_command(&["rev-parse", "--is-inside-work-tree"])?;
    let out = git_command(&["diff", "--cached", "--name-only", "--diff-filter=ACMR"])?;
    Ok(out
        .lines()
        .map(|l| l.trim_end_matches('\r'))
        .filter(|l| !l.is_empty())
        .map(PathBuf::from)
        .filter(|p| has_source_suffix(p) && p.is_file())
        .collect())
}
