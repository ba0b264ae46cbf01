//! Hidden-entry recolouring.
//!
//! Dot-directories always get the hidden-directory colour.  Dotfiles only get
//! the hidden-file colour when the listing source left them uncoloured, so
//! `LS_COLORS` rules for e.g. `.tar.gz` or executables still win.

use std::path::{Path, PathBuf};

use super::entry::Entry;
use crate::ui::theme::{Theme, RESET};

/// Does the raw listing line already carry a colour sequence?
///
/// This is a heuristic on the listing source's output format: any CSI
/// introducer counts as "coloured".
pub fn is_precolored(raw: &str) -> bool {
    raw.contains("\x1b[")
}

/// Rewrites hidden entries according to a [`Theme`].
#[derive(Debug, Clone)]
pub struct Recolorer {
    theme: Theme,
    /// Directory the listed names are relative to.
    base: PathBuf,
    /// Second place to look when a name isn't found under `base`.
    fallback: Option<PathBuf>,
}

impl Recolorer {
    pub fn new(theme: Theme, base: impl Into<PathBuf>) -> Self {
        Self {
            theme,
            base: base.into(),
            fallback: None,
        }
    }

    /// Also resolve names against `dir` when the lookup under the base fails.
    pub fn with_fallback(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        if dir != self.base {
            self.fallback = Some(dir);
        }
        self
    }

    /// Recolour every hidden entry; the output has the same length and order.
    pub fn recolor(&self, entries: Vec<Entry>) -> Vec<Entry> {
        entries.into_iter().map(|e| self.recolor_one(e)).collect()
    }

    fn recolor_one(&self, entry: Entry) -> Entry {
        if !entry.is_hidden() {
            return entry;
        }
        if self.is_dir(entry.visible()) {
            entry.painted(self.theme.hidden_dir, RESET)
        } else if !is_precolored(entry.display()) {
            entry.painted(self.theme.hidden_file, RESET)
        } else {
            entry
        }
    }

    /// Follows symlinks.  A vanished entry is simply not a directory.
    fn is_dir(&self, name: &str) -> bool {
        std::iter::once(&self.base)
            .chain(self.fallback.as_ref())
            .any(|dir| {
                let path = dir.join(name);
                match std::fs::metadata(&path) {
                    Ok(meta) => meta.is_dir(),
                    Err(e) => {
                        tracing::debug!(path = %path.display(), error = %e, "stat failed");
                        false
                    }
                }
            })
    }

    pub fn base(&self) -> &Path {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme() -> Theme {
        Theme {
            hidden_dir: "<D>",
            hidden_file: "<F>",
        }
    }

    #[test]
    fn precolored_predicate() {
        assert!(is_precolored("\x1b[01;32m.run\x1b[0m*"));
        assert!(!is_precolored(".profile"));
        // A bare ESC without `[` is not a colour sequence.
        assert!(!is_precolored("\x1b.odd"));
    }

    #[test]
    fn hidden_directory_is_always_painted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".cdir")).unwrap();
        let r = Recolorer::new(theme(), dir.path());

        let out = r.recolor(vec![
            Entry::new(".cdir"),
            Entry::new("\x1b[01;34m.cdir\x1b[0m"),
        ]);
        assert_eq!(out[0].display(), format!("<D>.cdir{RESET}"));
        assert_eq!(out[1].display(), format!("<D>.cdir{RESET}"));
    }

    #[test]
    fn classified_directory_name_still_resolves() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        let r = Recolorer::new(theme(), dir.path());

        let out = r.recolor(vec![Entry::new("\x1b[01;34m.git\x1b[0m/")]);
        assert_eq!(out[0].display(), format!("<D>.git/{RESET}"));
    }

    #[test]
    fn directory_named_by_itself_resolves_from_fallback() {
        // `ls -d .cdir` prints `.cdir/`, but a base of `.cdir` would look for
        // `.cdir/.cdir`.
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".cdir")).unwrap();
        let r = Recolorer::new(theme(), dir.path().join(".cdir")).with_fallback(dir.path());

        let out = r.recolor(vec![Entry::new("\x1b[01;34m.cdir\x1b[0m/")]);
        assert_eq!(out[0].display(), format!("<D>.cdir/{RESET}"));
    }

    #[test]
    fn fallback_equal_to_base_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let r = Recolorer::new(theme(), dir.path()).with_fallback(dir.path());
        assert!(r.fallback.is_none());
    }

    #[test]
    fn plain_hidden_file_gets_file_colour() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".a"), b"").unwrap();
        let r = Recolorer::new(theme(), dir.path());

        let out = r.recolor(vec![Entry::new(".a")]);
        assert_eq!(out[0].display(), format!("<F>.a{RESET}"));
    }

    #[test]
    fn precolored_hidden_file_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".run"), b"").unwrap();
        let r = Recolorer::new(theme(), dir.path());

        let raw = "\x1b[01;32m.run\x1b[0m*";
        let out = r.recolor(vec![Entry::new(raw)]);
        assert_eq!(out[0].display(), raw);
    }

    #[test]
    fn vanished_entry_is_treated_as_file() {
        let dir = tempfile::tempdir().unwrap();
        let r = Recolorer::new(theme(), dir.path());

        let out = r.recolor(vec![Entry::new(".gone"), Entry::new("\x1b[34m.gone2\x1b[0m")]);
        assert_eq!(out[0].display(), format!("<F>.gone{RESET}"));
        assert_eq!(out[1].display(), "\x1b[34m.gone2\x1b[0m");
    }

    #[test]
    fn visible_names_survive_and_order_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".cdir")).unwrap();
        let r = Recolorer::new(Theme::default(), dir.path());

        let input = vec![Entry::new(".a"), Entry::new("b"), Entry::new(".cdir")];
        let before: Vec<String> = input.iter().map(|e| e.visible().to_string()).collect();
        let out = r.recolor(input);
        let after: Vec<String> = out
            .iter()
            .map(|e| console::strip_ansi_codes(e.display()).into_owned())
            .collect();
        assert_eq!(before, after);
        assert_eq!(out[1].display(), "b");
    }
}
