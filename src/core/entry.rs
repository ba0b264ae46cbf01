//! A single line of listing output.
//!
//! The listing source hands us display strings that may already carry SGR
//! colour sequences.  [`Entry`] keeps that string intact and derives the
//! plain *visible* name once, so width measurement and hidden-name checks
//! never have to look at escape codes again.

use console::{measure_text_width, strip_ansi_codes};

/// Marker that makes an entry "hidden" (a dotfile / dotdir).
pub const HIDDEN_MARKER: char = '.';

/// One directory entry as it will be printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    display: String,
    visible: String,
    width: usize,
}

impl Entry {
    /// Wrap a raw line from the listing source.
    pub fn new(raw: impl Into<String>) -> Self {
        let display = raw.into();
        let visible = strip_ansi_codes(&display).into_owned();
        let width = measure_text_width(&visible);
        Self {
            display,
            visible,
            width,
        }
    }

    /// The string to print, escape codes included.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The name with all control codes removed.
    pub fn visible(&self) -> &str {
        &self.visible
    }

    /// Terminal columns occupied by the visible name.
    ///
    /// This is display width, not a character count: wide CJK glyphs take
    /// two columns and combining marks none.  For ASCII names the two agree.
    pub fn visible_width(&self) -> usize {
        self.width
    }

    pub fn is_hidden(&self) -> bool {
        self.visible.starts_with(HIDDEN_MARKER)
    }

    /// Replace whatever colouring the entry had with `color`.
    ///
    /// Consumes the entry: recolouring happens at most once.
    pub fn painted(self, color: &str, reset: &str) -> Self {
        Self {
            display: format!("{color}{}{reset}", self.visible),
            visible: self.visible,
            width: self.width,
        }
    }
}
