//! Failures of the listing source.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListingError {
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to read `{command}` output: {source}")]
    Read {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("failed waiting for `{command}`: {source}")]
    Wait {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The listing source ran but reported failure.  `code` is `None` when it
    /// was killed by a signal.
    #[error("`{command}` exited unsuccessfully ({})", describe(.code))]
    Exit { command: String, code: Option<i32> },
}

fn describe(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("status {c}"),
        None => "terminated by signal".to_string(),
    }
}

impl ListingError {
    /// Process exit status this error should translate to.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Exit {
                code: Some(c), ..
            } => u8::try_from(*c).ok().filter(|&c| c != 0).unwrap_or(1),
            _ => 1,
        }
    }
}
