//! Configuration discovery and effective settings resolution.
//!
//! semilint reads `semilint.toml|yaml|yml` from the repository root (or
//! closest ancestor) and merges it with CLI flags to produce an `Effective`
//! config.
//! Defaults:
//! - `requireReturnSemicolon`: true
//! - `output`: `human`
//! - `root`: unset (the default walk directory next to the executable)
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::{Result, SemilintError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings the scan engine reads. Fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LintConfig {
    /// When false, `return x` lines are exempt like other keywords.
    pub require_return_semicolon: bool,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            require_return_semicolon: true,
        }
    }
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `semilint.toml|yaml`.
pub struct SemilintConfig {
    #[serde(rename = "requireReturnSemicolon")]
    pub require_return_semicolon: Option<bool>,
    pub output: Option<String>,
    /// Default walk directory, relative to the repository root.
    pub root: Option<String>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub config_found: bool,
    pub output: String,
    pub walk_root: Option<PathBuf>,
    pub lint: LintConfig,
}

const CONFIG_NAMES: [&str; 3] = ["semilint.toml", "semilint.yaml", "semilint.yml"];

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `semilint.toml|yaml|yml` or a `.git` directory is found.
/// `start` is made absolute first so the walk can climb past the working
/// directory.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let start = absolute(start);
    let mut cur = start.as_path();
    loop {
        if CONFIG_NAMES.iter().any(|n| cur.join(n).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start,
        }
    }
}

fn absolute(path: &Path) -> PathBuf {
    if let Ok(p) = path.canonicalize() {
        return p;
    }
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Load `SemilintConfig` from `semilint.toml` or `semilint.yaml|yml` if present.
pub fn load_config(root: &Path) -> Result<Option<SemilintConfig>> {
    let toml_path = root.join("semilint.toml");
    if toml_path.exists() {
        let s = read_config(&toml_path)?;
        let cfg = toml::from_str(&s).map_err(|e| SemilintError::Config {
            path: toml_path.clone(),
            message: e.to_string(),
        })?;
        return Ok(Some(cfg));
    }
    for yml in ["semilint.yaml", "semilint.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = read_config(&p)?;
            let cfg = serde_yaml::from_str(&s).map_err(|e| SemilintError::Config {
                path: p.clone(),
                message: e.to_string(),
            })?;
            return Ok(Some(cfg));
        }
    }
    Ok(None)
}

fn read_config(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| SemilintError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
///
/// A config file that cannot be read or parsed is returned as an error next
/// to settings built from CLI flags and defaults alone.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_output: Option<&str>,
    cli_root: Option<&str>,
    cli_require_return: Option<bool>,
) -> (Effective, Option<SemilintError>) {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let (cfg, config_found, err) = match load_config(&repo_root) {
        Ok(Some(cfg)) => (cfg, true, None),
        Ok(None) => (SemilintConfig::default(), false, None),
        Err(e) => (SemilintConfig::default(), true, Some(e)),
    };

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    // CLI root is taken as given (relative to cwd); config root is relative to the repo
    let walk_root = cli_root
        .map(PathBuf::from)
        .or_else(|| cfg.root.map(|r| repo_root.join(r)));

    let require_return_semicolon = cli_require_return
        .or(cfg.require_return_semicolon)
        .unwrap_or(true);

    (
        Effective {
            repo_root,
            config_found,
            output,
            walk_root,
            lint: LintConfig {
                require_return_semicolon,
            },
        },
        err,
    )
}
