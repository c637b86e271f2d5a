//! Error types for the treeplan core library.
//!
//! Defines the optimizer error enum, its stable codes, and a result alias.

use std::fmt;

use thiserror::Error;

use crate::vertex::Vertex;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced when configuring or running [`crate::GraphOptimizer`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum OptimizerError {
    /// The caller supplied no required vertices.
    #[error("at least one required vertex must be supplied")]
    EmptyRequiredSet,
    /// A required vertex is not part of the graph.
    #[error("required vertex {vertex} is not present in the graph")]
    UnknownVertex {
        /// The vertex missing from the graph.
        vertex: Vertex,
    },
    /// A round budget of zero was configured.
    #[error("round budget must be at least 1 (got {got})")]
    InvalidRoundBudget {
        /// The rejected budget.
        got: usize,
    },
    /// The growth phase used up its configured round budget before the
    /// required vertices were joined.
    #[error("growth phase exceeded its budget of {rounds} rounds")]
    RoundBudgetExhausted {
        /// The configured budget.
        rounds: usize,
    },
    /// The required vertices lie in different components of the graph.
    #[error("required vertices span {components} disconnected components")]
    Disconnected {
        /// Number of components left when growth stopped.
        components: usize,
    },
    /// An internal invariant was violated, indicating a logic error.
    #[error("optimizer invariant violated: {invariant} (vertex {vertex})")]
    InvariantViolation {
        /// Name of the violated invariant.
        invariant: &'static str,
        /// Vertex being processed when the violation was detected.
        vertex: Vertex,
    },
}

define_error_codes! {
    /// Stable codes describing [`OptimizerError`] variants.
    enum OptimizerErrorCode for OptimizerError {
        /// The caller supplied no required vertices.
        EmptyRequiredSet => EmptyRequiredSet => "OPTIMIZER_EMPTY_REQUIRED_SET",
        /// A required vertex is not part of the graph.
        UnknownVertex => UnknownVertex { .. } => "OPTIMIZER_UNKNOWN_VERTEX",
        /// A round budget of zero was configured.
        InvalidRoundBudget => InvalidRoundBudget { .. } => "OPTIMIZER_INVALID_ROUND_BUDGET",
        /// The growth phase used up its round budget.
        RoundBudgetExhausted => RoundBudgetExhausted { .. } => "OPTIMIZER_ROUND_BUDGET_EXHAUSTED",
        /// The required vertices lie in different components.
        Disconnected => Disconnected { .. } => "OPTIMIZER_DISCONNECTED",
        /// An internal invariant was violated.
        InvariantViolation => InvariantViolation { .. } => "OPTIMIZER_INVARIANT_VIOLATION",
    }
}

impl OptimizerError {
    /// Returns `true` when the error reports a legitimate disconnected input
    /// rather than a caller mistake.
    #[must_use]
    pub const fn is_disconnected(&self) -> bool {
        matches!(self, Self::Disconnected { .. })
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, OptimizerError>;
