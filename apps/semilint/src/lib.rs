//! semilint core library.
//!
//! A heuristic, line-based checker for missing statement terminators in
//! JavaScript sources, with an optional in-place fix mode.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `discover`: Candidate files from arguments, git staging, or a walk.
//! - `scan`: The per-line classification engine.
//! - `lint`: Runs the engine over files and applies fixes.
//! - `fix`: Atomic in-place rewriting.
//! - `models`: Violation and summary structs.
//! - `output`: Human/JSON printers.
//! - `error`: Recoverable per-file errors.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod discover;
pub mod error;
pub mod fix;
pub mod lint;
pub mod models;
pub mod output;
pub mod scan;
pub mod utils;
