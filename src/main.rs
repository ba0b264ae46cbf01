//! An `ls` wrapper that dims hidden entries and re-packs the listing into
//! columns that fill the terminal.
//!
//! Every argument is forwarded to `ls` unchanged.

mod config;
mod core;
mod error;
mod shell;
mod ui;

use std::ffi::{OsStr, OsString};
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::AppConfig;
use crate::core::{entry::Entry, layout, recolor::Recolorer};
use crate::error::ListingError;
use crate::shell::listing::{listing_base, Listing};
use crate::ui::{grid, terminal};

// ───────────────────────────────────────── CLI ───────────────

/// Nothing is interpreted here; the whole command line belongs to `ls`.
#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    about = "ls with dimmed dotfiles and terminal-width columns",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Arguments passed through to the listing command.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<OsString>,
}

impl Cli {
    /// Parse a full argv.  clap swallows a *leading* `--` as its own
    /// separator, so it is put back to keep the pass-through exact.
    fn from_argv<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
        let leading_escape = argv.get(1).is_some_and(|a| a == OsStr::new("--"));
        let mut cli = Self::try_parse_from(&argv)?;
        if leading_escape {
            cli.args.insert(0, OsString::from("--"));
        }
        Ok(cli)
    }
}

// ───────────────────────────────────────── pipeline ─────────

/// List, recolour, and lay out.  `width` overrides the terminal query.
fn run(
    args: &[OsString],
    config: &AppConfig,
    cwd: &Path,
    width: Option<usize>,
    out: &mut impl Write,
) -> Result<()> {
    let listing = Listing::new(&config.command, args.iter().cloned());
    let lines = listing.run()?;

    let recolorer = Recolorer::new(config.theme(), listing_base(args, cwd)).with_fallback(cwd);
    tracing::debug!(base = %recolorer.base().display(), "resolving hidden entries");
    let entries = recolorer.recolor(lines.into_iter().map(Entry::new).collect());

    if entries.is_empty() {
        return Ok(());
    }

    let width = width.unwrap_or_else(|| terminal::width_or(config.fallback_width));
    let grid_layout = layout::fit(&entries, width, config.padding);
    grid::write_grid(out, &entries, &grid_layout).context("failed to write listing")?;
    Ok(())
}

/// Report `err` on stderr (unless the listing source already did) and
/// return the process status for it.
fn failure_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<ListingError>() {
        // The listing source already explained itself on stderr.
        Some(e @ ListingError::Exit { .. }) => {
            tracing::debug!(error = %e, "listing source failed");
            e.exit_code()
        }
        Some(e) => {
            eprintln!("{}: {e}", env!("CARGO_PKG_NAME"));
            e.exit_code()
        }
        None => {
            eprintln!("{}: {err:#}", env!("CARGO_PKG_NAME"));
            1
        }
    }
}

// ───────────────────────────────────────── main ─────────────

fn main() -> ExitCode {
    // Initialise tracing (silent unless RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::from_argv(std::env::args_os()).unwrap_or_else(|e| e.exit());
    let config = AppConfig::load();
    let stdout = io::stdout();

    let result = std::env::current_dir()
        .context("cannot determine current directory")
        .and_then(|cwd| run(&cli.args, &config, &cwd, None, &mut stdout.lock()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(failure_status(&err)),
    }
}
