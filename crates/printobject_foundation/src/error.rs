//! Error types for printobject.
//!
//! Uses `thiserror` for ergonomic error definition. Dumping itself never
//! fails; errors only surface from literal-form probes (which the dumper
//! swallows) and from writing pretty-printed output.

use std::io;

use thiserror::Error;

/// The main error type for printobject operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a literal-form probe failure for a value of `type_name`.
    #[must_use]
    pub fn literal_probe(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::LiteralProbe {
            type_name: type_name.into(),
            message: message.into(),
        })
    }

    /// Returns true if this error came from probing a printed form.
    #[must_use]
    pub fn is_probe_failure(&self) -> bool {
        matches!(self.kind, ErrorKind::LiteralProbe { .. })
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::new(ErrorKind::Io(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A value's printed form could not be produced.
    #[error("literal form probe failed for {type_name}: {message}")]
    LiteralProbe {
        /// Type name of the probed value.
        type_name: String,
        /// Description of the failure.
        message: String,
    },

    /// Writing rendered output failed.
    #[error("i/o error: {0}")]
    Io(#[source] io::Error),
}
