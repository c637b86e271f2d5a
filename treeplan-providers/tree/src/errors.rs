use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Errors raised while loading tree data.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TreeProviderError {
    /// The tree file could not be read.
    #[error("failed to read tree data from {path}: {source}")]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The input is not valid tree JSON.
    #[error("invalid tree JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The node table holds no usable node.
    #[error("tree data contains no nodes")]
    EmptyTree,
    /// A node id does not fit a vertex identifier.
    #[error("node id `{id}` is outside the supported range")]
    IdOutOfRange {
        /// The offending id as written in the input.
        id: String,
    },
}

/// Stable codes describing [`TreeProviderError`] variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum TreeProviderErrorCode {
    /// The tree file could not be read.
    Io,
    /// The input is not valid tree JSON.
    Json,
    /// The node table holds no usable node.
    EmptyTree,
    /// A node id does not fit a vertex identifier.
    IdOutOfRange,
}

impl TreeProviderErrorCode {
    /// Returns the stable machine-readable representation of this code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Io => "TREE_IO",
            Self::Json => "TREE_JSON",
            Self::EmptyTree => "TREE_EMPTY",
            Self::IdOutOfRange => "TREE_ID_OUT_OF_RANGE",
        }
    }
}

impl fmt::Display for TreeProviderErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TreeProviderError {
    /// Returns the stable [`TreeProviderErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> TreeProviderErrorCode {
        match self {
            Self::Io { .. } => TreeProviderErrorCode::Io,
            Self::Json(_) => TreeProviderErrorCode::Json,
            Self::EmptyTree => TreeProviderErrorCode::EmptyTree,
            Self::IdOutOfRange { .. } => TreeProviderErrorCode::IdOutOfRange,
        }
    }
}
