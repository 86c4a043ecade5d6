//! Error type shared by parsing, loading, and both closest-pair algorithms.
//!
//! Every variant aborts the current computation; no partial result is ever
//! returned alongside an error.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors surfaced by the `closest` crate.
#[derive(Debug)]
pub enum PairError {
    /// A point line could not be parsed as `"x y"`.
    Format {
        /// 1-based line number when the text came from a point file.
        line: Option<usize>,
        input: String,
        reason: String,
    },
    /// A point file is empty, has a bad header, or its line count differs from the header.
    Load { reason: String },
    /// A point file could not be opened, read, or written.
    Io { path: PathBuf, source: io::Error },
    /// An algorithm was asked to search a range holding fewer than two points,
    /// or a range reaching past the end of the slice.
    InvalidRange { start: usize, end: usize, len: usize },
    /// Sortedness or length invariants of the divide-and-conquer inputs are violated.
    Precondition { reason: String },
    /// Generator parameters are out of range.
    InvalidConfig { reason: String },
}

impl PairError {
    pub(crate) fn format(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Format {
            line: None,
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn load(reason: impl Into<String>) -> Self {
        Self::Load {
            reason: reason.into(),
        }
    }

    pub(crate) fn precondition(reason: impl Into<String>) -> Self {
        Self::Precondition {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Attach a file line number to a `Format` error; other variants pass through.
    pub(crate) fn at_line(self, line_no: usize) -> Self {
        match self {
            Self::Format { input, reason, .. } => Self::Format {
                line: Some(line_no),
                input,
                reason,
            },
            other => other,
        }
    }

    /// True for the two variants that mean "the point file could not be loaded".
    pub fn is_load_error(&self) -> bool {
        matches!(self, Self::Load { .. } | Self::Io { .. })
    }
}

impl fmt::Display for PairError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairError::Format {
                line: Some(line),
                input,
                reason,
            } => write!(f, "line {line}: cannot parse point {input:?}: {reason}"),
            PairError::Format {
                line: None,
                input,
                reason,
            } => write!(f, "cannot parse point {input:?}: {reason}"),
            PairError::Load { reason } => write!(f, "cannot load point set: {reason}"),
            PairError::Io { path, source } => write!(f, "{}: {source}", path.display()),
            PairError::InvalidRange { start, end, len } => write!(
                f,
                "range [{start}, {end}] over {len} points does not hold at least two points"
            ),
            PairError::Precondition { reason } => write!(f, "precondition violated: {reason}"),
            PairError::InvalidConfig { reason } => write!(f, "invalid generator config: {reason}"),
        }
    }
}

impl std::error::Error for PairError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PairError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
