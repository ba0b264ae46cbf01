//! Run the listing source and collect its lines.
//!
//! The user's arguments go through untouched; we only add the flags that
//! make `ls` print one coloured entry per line.

use std::ffi::{OsStr, OsString};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::ListingError;

/// Flags added after the user's own options (before any `--`).
pub const LISTING_FLAGS: &[&str] = &[
    "--color=always",
    "-1",
    "-A",
    "-F",
    "--group-directories-first",
];

/// A configured invocation of the listing program.
#[derive(Debug, Clone)]
pub struct Listing {
    program: OsString,
    args: Vec<OsString>,
}

impl Listing {
    pub fn new(program: impl Into<OsString>, user_args: impl IntoIterator<Item = OsString>) -> Self {
        let mut args: Vec<OsString> = user_args.into_iter().collect();
        // Past `--` every word is a file name, so the flags must land before it.
        let at = args
            .iter()
            .position(|a| a == OsStr::new("--"))
            .unwrap_or(args.len());
        let operands = args.split_off(at);
        args.extend(LISTING_FLAGS.iter().map(OsString::from));
        args.extend(operands);
        Self {
            program: program.into(),
            args,
        }
    }

    /// Human-readable command name for messages.
    pub fn command_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Run to completion and return one string per output line.
    ///
    /// stderr and the environment are inherited.  Lines that aren't valid
    /// UTF-8 are decoded lossily rather than rejected.
    pub fn run(&self) -> Result<Vec<String>, ListingError> {
        let command = self.command_name();
        tracing::debug!(%command, args = ?self.args(), "spawning listing source");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| ListingError::Spawn {
                command: command.clone(),
                source,
            })?;

        let lines = match child.stdout.take() {
            Some(stdout) => read_lines(BufReader::new(stdout)),
            None => Ok(Vec::new()),
        };
        let lines = match lines {
            Ok(lines) => lines,
            Err(source) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(ListingError::Read { command, source });
            }
        };

        let status = child.wait().map_err(|source| ListingError::Wait {
            command: command.clone(),
            source,
        })?;
        if !status.success() {
            return Err(ListingError::Exit {
                command,
                code: status.code(),
            });
        }

        tracing::debug!(entries = lines.len(), "listing finished");
        Ok(lines)
    }
}

fn read_lines<R: BufRead>(mut reader: R) -> std::io::Result<Vec<String>> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }
    Ok(lines)
}

/// Short `ls` options whose value may follow as the next word.
const SHORT_WITH_VALUE: &[u8] = b"ITw";

/// Long `ls` options that take a required value (`--opt VALUE` or `--opt=VALUE`).
const LONG_WITH_VALUE: &[&str] = &[
    "--block-size",
    "--format",
    "--hide",
    "--ignore",
    "--indicator-style",
    "--quoting-style",
    "--sort",
    "--tabsize",
    "--time",
    "--time-style",
    "--width",
];

/// Directory that listed names are relative to.
///
/// `ls dir` prints bare names from inside `dir`, so when exactly one operand
/// is given and it is a directory, hidden-entry lookups must happen there.
/// With `-d` the operand itself is printed, and anything else (no operand,
/// several, a file) also resolves against `cwd`.
pub fn listing_base(args: &[OsString], cwd: &Path) -> PathBuf {
    let mut operands = Vec::new();
    let mut list_dirs_themselves = false;
    let mut after_separator = false;
    let mut args = args.iter();

    while let Some(arg) = args.next() {
        if after_separator {
            operands.push(arg.as_os_str());
            continue;
        }
        let bytes = arg.as_encoded_bytes();
        if bytes == b"--" {
            after_separator = true;
        } else if let Some(long) = bytes.strip_prefix(b"--") {
            if long == b"directory" {
                list_dirs_themselves = true;
            } else if LONG_WITH_VALUE.iter().any(|o| o.as_bytes() == bytes) {
                args.next();
            }
        } else if let Some(cluster) = bytes.strip_prefix(b"-").filter(|c| !c.is_empty()) {
            // `-ld`, `-Ipattern`, `-w 40`: scan letters until one takes a value.
            for (i, &flag) in cluster.iter().enumerate() {
                if SHORT_WITH_VALUE.contains(&flag) {
                    if i + 1 == cluster.len() {
                        args.next();
                    }
                    break;
                }
                if flag == b'd' {
                    list_dirs_themselves = true;
                }
            }
        } else {
            operands.push(arg.as_os_str());
        }
    }

    if list_dirs_themselves {
        return cwd.to_path_buf();
    }
    if let [only] = operands.as_slice() {
        let candidate = cwd.join(only);
        if candidate.is_dir() {
            return candidate;
        }
    }
    cwd.to_path_buf()
}
