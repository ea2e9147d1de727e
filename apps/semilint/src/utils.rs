//! Colored prefixes for diagnostics printed to stderr.
//!
//! Colors are disabled when `NO_COLOR` is set.

use owo_colors::OwoColorize;

pub fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

pub fn warn_prefix() -> String {
    if colors_enabled() {
        "warn:".yellow().bold().to_string()
    } else {
        "warn:".to_string()
    }
}

pub fn note_prefix() -> String {
    if colors_enabled() {
        "note:".cyan().bold().to_string()
    } else {
        "note:".to_string()
    }
}

pub fn info_prefix() -> String {
    if colors_enabled() {
        "info:".blue().bold().to_string()
    } else {
        "info:".to_string()
    }
}
