//! Colour palette used for hidden entries.
//!
//! Central table — add a colour here and it becomes usable by name from the
//! config file.

/// SGR reset sequence appended after every colour we emit.
pub const RESET: &str = "\x1b[0m";

/// Named colours and their escape sequences.
pub const PALETTE: &[(&str, &str)] = &[
    ("gray", "\x1b[90m"),
    ("blue", "\x1b[34m"),
    ("green", "\x1b[32m"),
    ("cyan", "\x1b[36m"),
    ("magenta", "\x1b[35m"),
    ("fadedblue", "\x1b[38;2;70;70;150m"),
    ("fadedgreen", "\x1b[38;2;70;150;70m"),
    ("fadedcyan", "\x1b[38;2;70;150;150m"),
    ("fadedmagenta", "\x1b[38;2;150;70;150m"),
    ("fadedyellow", "\x1b[38;2;150;150;70m"),
    ("fadedred", "\x1b[38;2;150;70;70m"),
    ("fadedgray", "\x1b[38;2;100;100;100m"),
];

pub const DEFAULT_HIDDEN_DIR: &str = "fadedcyan";
pub const DEFAULT_HIDDEN_FILE: &str = "gray";

/// Escape sequence for a palette name (case-insensitive).
pub fn color(name: &str) -> Option<&'static str> {
    let name = name.trim().to_ascii_lowercase();
    PALETTE
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, code)| code)
}

/// The pair of colours applied to hidden entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub hidden_dir: &'static str,
    pub hidden_file: &'static str,
}

impl Theme {
    /// Build a theme from palette names, keeping the default for any name
    /// the palette doesn't know.
    pub fn from_names(dir: &str, file: &str) -> Self {
        let fallback = Self::default();
        Self {
            hidden_dir: color(dir).unwrap_or(fallback.hidden_dir),
            hidden_file: color(file).unwrap_or(fallback.hidden_file),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            hidden_dir: "\x1b[38;2;70;150;150m",
            hidden_file: "\x1b[90m",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_palette_entries() {
        let t = Theme::default();
        assert_eq!(Some(t.hidden_dir), color(DEFAULT_HIDDEN_DIR));
        assert_eq!(Some(t.hidden_file), color(DEFAULT_HIDDEN_FILE));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(color("FadedRed"), Some("\x1b[38;2;150;70;70m"));
        assert_eq!(color(" blue "), Some("\x1b[34m"));
        assert_eq!(color("chartreuse"), None);
    }

    #[test]
    fn unknown_names_fall_back_per_slot() {
        let t = Theme::from_names("magenta", "nope");
        assert_eq!(t.hidden_dir, "\x1b[35m");
        assert_eq!(t.hidden_file, Theme::default().hidden_file);
    }
}
