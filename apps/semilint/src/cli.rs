//! CLI argument parsing via `clap`.

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "semilint",
    version,
    about = "Heuristic missing-semicolon linter for JavaScript",
    long_about = "semilint — a line-based checker that reports (and optionally inserts) missing statement terminators in .js files.\n\nConfiguration precedence: CLI > semilint.toml > defaults.",
    after_help = "Examples:\n  semilint\n  semilint check src/app.js src/util.js\n  semilint fix --staged\n  semilint --root scripts --output json",
    args_conflicts_with_subcommands = true
)]
/// Top-level CLI options and subcommands. Without a subcommand, runs `check`.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,
    #[command(flatten)]
    pub args: ScanArgs,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current semilint version.")]
    Version,
    /// Report missing semicolons
    #[command(
        about = "Report missing semicolons",
        long_about = "Scan files and report lines that look like they need a terminating semicolon. Exits 1 when any are found.",
        after_help = "Examples:\n  semilint check\n  semilint check --staged\n  semilint check -- a.js b.js"
    )]
    Check {
        #[command(flatten)]
        args: ScanArgs,
    },
    /// Insert missing semicolons in place
    #[command(
        about = "Insert missing semicolons",
        long_about = "Scan files, report missing semicolons, and rewrite each affected file with the semicolons inserted. Always exits 0 once files were scanned.",
        after_help = "Examples:\n  semilint fix\n  semilint fix --allow-return-no-semi src/app.js"
    )]
    Fix {
        #[command(flatten)]
        args: ScanArgs,
    },
}

#[derive(Args, Debug, Clone, Default)]
/// Options shared by `check` and `fix`.
pub struct ScanArgs {
    #[arg(long, visible_alias = "cached", action = clap::ArgAction::SetTrue, help = "Lint files staged in git when no FILES are given")]
    pub staged: bool,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Do not require a semicolon after `return <expr>`")]
    pub allow_return_no_semi: bool,
    #[arg(long, help = "Directory for the default recursive walk (default: <exe dir>/../scripts)")]
    pub root: Option<String>,
    #[arg(long, value_parser = ["human", "json"], help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
    #[arg(long, help = "Repository root for config discovery (default: current dir)")]
    pub repo_root: Option<String>,
    #[arg(short, long, action = clap::ArgAction::SetTrue, help = "Enable debug logging on stderr")]
    pub verbose: bool,
    /// Files to lint; only paths ending in .js are considered
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Check,
    Fix,
}

impl Mode {
    pub fn is_fix(self) -> bool {
        self == Mode::Fix
    }
}

/// What the binary should do after parsing.
pub enum Invocation {
    Version,
    Scan(Mode, ScanArgs),
}

impl Cli {
    pub fn invocation(self) -> Invocation {
        match self.cmd {
            Some(Commands::Version) => Invocation::Version,
            Some(Commands::Check { args }) => Invocation::Scan(Mode::Check, args),
            Some(Commands::Fix { args }) => Invocation::Scan(Mode::Fix, args),
            None => Invocation::Scan(Mode::Check, self.args),
        }
    }
}

impl ScanArgs {
    /// `--allow-return-no-semi` as an override; unset defers to config.
    pub fn require_return_override(&self) -> Option<bool> {
        if self.allow_return_no_semi {
            Some(false)
        } else {
            None
        }
    }
}
