//! Terminal width discovery.

use std::io;

use crossterm::tty::IsTty;

/// Used when stdout is not a terminal or the size query fails.
pub const FALLBACK_WIDTH: usize = 80;

/// Width of the terminal attached to stdout.
///
/// Fails when stdout is redirected, so piping the output gets a predictable
/// width instead of whatever the controlling tty happens to be.
pub fn stdout_width() -> io::Result<usize> {
    if !io::stdout().is_tty() {
        return Err(io::Error::new(io::ErrorKind::Unsupported, "stdout is not a terminal"));
    }
    let (cols, _rows) = crossterm::terminal::size()?;
    if cols == 0 {
        return Err(io::Error::new(io::ErrorKind::InvalidData, "terminal reported zero columns"));
    }
    Ok(usize::from(cols))
}

/// [`stdout_width`], or `fallback` when it can't be determined.
pub fn width_or(fallback: usize) -> usize {
    match stdout_width() {
        Ok(w) => w,
        Err(e) => {
            tracing::debug!(error = %e, fallback, "terminal width unknown");
            fallback
        }
    }
}
