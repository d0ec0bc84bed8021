//! Render error taxonomy.
//!
//! Per §7: configuration errors are surfaced before any output is emitted;
//! I/O errors from the writer sink propagate verbatim and abort mid-render;
//! internal invariant violations should never occur for well-formed input.

use std::fmt;
use std::io;

/// A source identifier supplied by the caller, echoed back in errors.
pub type SourceId = u32;

/// Numeric error codes per §6.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    Ok,
    InvalidParameter,
    InvalidSource,
    LineLookupFailed,
    Io,
}

impl ErrorCode {
    /// The numeric value specified in §6.
    pub fn as_i32(self) -> i32 {
        match self {
            ErrorCode::Ok => 0,
            ErrorCode::InvalidParameter => -1,
            ErrorCode::InvalidSource => -2,
            ErrorCode::LineLookupFailed => -3,
            ErrorCode::Io => -4,
        }
    }
}

/// Everything that can keep a render from completing.
///
/// Configuration errors (`InvalidParameter`, `InvalidSource`,
/// `LineLookupFailed`) are raised during label ingestion, before any byte
/// reaches the sink. `Io` comes from the caller-provided writer sink and
/// means some output was already emitted; it is not rewound.
#[derive(Debug)]
pub enum RenderError {
    /// A config value was out of its documented range (e.g. `tab_width = 0`).
    InvalidParameter(&'static str),
    /// A label referenced a `source_id` not present in the cache.
    InvalidSource(SourceId),
    /// A position could not be resolved to a line in its source.
    LineLookupFailed { source_id: SourceId, position: u32 },
    /// The writer sink returned an error; rendering stopped immediately.
    Io(io::Error),
    /// An internal invariant was violated. Should never happen for
    /// well-formed input; release builds surface this instead of panicking.
    Internal(&'static str),
}

impl RenderError {
    /// The numeric code from §6 this error maps to.
    pub fn code(&self) -> ErrorCode {
        match self {
            RenderError::InvalidParameter(_) => ErrorCode::InvalidParameter,
            RenderError::InvalidSource(_) => ErrorCode::InvalidSource,
            RenderError::LineLookupFailed { .. } => ErrorCode::LineLookupFailed,
            RenderError::Io(_) => ErrorCode::Io,
            RenderError::Internal(_) => ErrorCode::InvalidParameter,
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidParameter(reason) => {
                write!(f, "invalid config parameter: {reason}")
            }
            RenderError::InvalidSource(id) => write!(f, "unknown source id {id}"),
            RenderError::LineLookupFailed { source_id, position } => write!(
                f,
                "position {position} could not be resolved to a line in source {source_id}"
            ),
            RenderError::Io(err) => write!(f, "write error: {err}"),
            RenderError::Internal(reason) => write!(f, "internal error: {reason}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for RenderError {
    fn from(err: io::Error) -> Self {
        RenderError::Io(err)
    }
}
