use core::fmt;

use thiserror::Error;

/// Which façade variant a construction attempt targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessKind {
    ReadWrite,
    ReadOnly,
    WriteOnly,
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AccessKind::ReadWrite => "read-write",
            AccessKind::ReadOnly => "read-only",
            AccessKind::WriteOnly => "write-only",
        })
    }
}

/// Construction contract violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PropertyError {
    #[error("{kind} property requires a getter, none was supplied")]
    MissingGetter { kind: AccessKind },

    #[error("{kind} property requires a setter, none was supplied")]
    MissingSetter { kind: AccessKind },
}

pub type PropertyResult<T> = Result<T, PropertyError>;
