//! semilint CLI binary entry point.
//! Resolves settings, discovers files, runs the scan and prints results.

use clap::Parser;
use semilint::cli::{Cli, Invocation, Mode, ScanArgs};
use semilint::utils::{info_prefix, note_prefix, warn_prefix};
use semilint::{config, discover, lint, output};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "SEMILINT_LOG";

fn main() {
    let cli = Cli::parse();
    match cli.invocation() {
        Invocation::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Invocation::Scan(mode, args) => {
            init_tracing(args.verbose);
            std::process::exit(run_scan(mode, &args));
        }
    }
}

/// Filter from `SEMILINT_LOG`, default `warn`; `--verbose` forces `debug`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_scan(mode: Mode, args: &ScanArgs) -> i32 {
    let (eff, cfg_err) = config::resolve_effective(
        args.repo_root.as_deref(),
        args.output.as_deref(),
        args.root.as_deref(),
        args.require_return_override(),
    );
    if let Some(e) = cfg_err {
        eprintln!("{} {}", warn_prefix(), e);
    }
    if !eff.config_found {
        tracing::debug!(repo_root = %eff.repo_root.display(), "no semilint config found; using defaults");
    }
    let is_json = eff.output == "json";

    let (files, discover_errors) =
        discover::discover(&args.files, args.staged, eff.walk_root.as_deref());
    if files.is_empty() {
        if is_json {
            output::print_lint(&Default::default(), &eff.output, mode.is_fix(), &discover_errors);
        } else {
            output::print_errors(&discover_errors);
        }
        eprintln!("{} No JavaScript files to lint.", info_prefix());
        return 0;
    }

    let (result, lint_errors) = lint::run_lint(&files, eff.lint, mode.is_fix());
    let mut errors = discover_errors;
    errors.extend(lint_errors);
    output::print_lint(&result, &eff.output, mode.is_fix(), &errors);

    if mode.is_fix() && result.summary.fixed > 0 && !is_json {
        eprintln!(
            "{} {} file(s) rewritten in place.",
            note_prefix(),
            result.summary.fixed
        );
    }
    if result.is_failure(mode.is_fix()) {
        1
    } else {
        0
    }
}
