//! Error types for the graph generators.
//!
//! Defines the error enum exposed by the public API, its stable codes, the
//! coarse [`ErrorKind`] taxonomy and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::graph::GraphKind;

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

/// Broad classification of [`GeneratorError`] values.
///
/// Callers that only care whether they passed bad parameters or asked for a
/// container the family cannot be built in can match on this instead of on
/// individual variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// A structural precondition on the generator parameters was violated.
    InvalidArgument,
    /// The requested container variant (directed or multigraph) is not
    /// defined for the family.
    UnsupportedVariant,
}

/// Error produced by the graph generators and the composition operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GeneratorError {
    /// A family built around a complete subgraph was asked for fewer than two
    /// clique nodes.
    #[error("{family} requires a clique of at least 2 nodes (got {got})")]
    CliqueTooSmall {
        /// Generator that rejected the request.
        family: &'static str,
        /// Clique size supplied by the caller.
        got: usize,
    },
    /// Turán graphs need `1 <= r <= n`.
    #[error("turan_graph requires 1 <= r <= n (got n={n}, r={r})")]
    InvalidPartitionCount {
        /// Requested node count.
        n: usize,
        /// Requested number of partitions.
        r: usize,
    },
    /// Block specifications mixed integer counts with explicit node lists.
    #[error("block specifications must be all counts or all node lists")]
    MixedBlockSpecs,
    /// An integer node count was supplied for a node type that has no
    /// canonical identifier at the given index.
    #[error("node type has no canonical identifier for index {index}")]
    NoIndexIdentifiers {
        /// Position that could not be converted into an identifier.
        index: usize,
    },
    /// An explicit node list named the same identifier twice.
    #[error("node {node} appears more than once")]
    DuplicateNode {
        /// Debug rendering of the repeated identifier.
        node: String,
    },
    /// The node count implied by the parameters does not fit in `usize`.
    #[error("{family} node count overflows usize")]
    NodeCountOverflow {
        /// Generator whose node count overflowed.
        family: &'static str,
    },
    /// Two graphs with different capabilities were combined.
    #[error("cannot combine graphs of different kinds ({left} vs {right})")]
    KindMismatch {
        /// Capabilities of the left-hand graph.
        left: GraphKind,
        /// Capabilities of the right-hand graph.
        right: GraphKind,
    },
    /// The family is only defined for undirected graphs.
    #[error("{family} does not support directed graphs")]
    DirectedUnsupported {
        /// Generator that rejected the container.
        family: &'static str,
    },
    /// The family is only defined for simple graphs.
    #[error("{family} does not support multigraphs")]
    MultigraphUnsupported {
        /// Generator that rejected the container.
        family: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`GeneratorError`] variants.
    enum GeneratorErrorCode for GeneratorError {
        /// A clique-based family was asked for fewer than two clique nodes.
        CliqueTooSmall => CliqueTooSmall { .. } => "GRAPHGEN_CLIQUE_TOO_SMALL",
        /// Turán graphs need `1 <= r <= n`.
        InvalidPartitionCount => InvalidPartitionCount { .. } => "GRAPHGEN_INVALID_PARTITION_COUNT",
        /// Block specifications mixed counts with node lists.
        MixedBlockSpecs => MixedBlockSpecs => "GRAPHGEN_MIXED_BLOCK_SPECS",
        /// The node type has no canonical identifier for an index.
        NoIndexIdentifiers => NoIndexIdentifiers { .. } => "GRAPHGEN_NO_INDEX_IDENTIFIERS",
        /// An explicit node list repeated an identifier.
        DuplicateNode => DuplicateNode { .. } => "GRAPHGEN_DUPLICATE_NODE",
        /// The implied node count overflowed.
        NodeCountOverflow => NodeCountOverflow { .. } => "GRAPHGEN_NODE_COUNT_OVERFLOW",
        /// Graphs with different capabilities were combined.
        KindMismatch => KindMismatch { .. } => "GRAPHGEN_KIND_MISMATCH",
        /// The family is undirected only.
        DirectedUnsupported => DirectedUnsupported { .. } => "GRAPHGEN_DIRECTED_UNSUPPORTED",
        /// The family is simple-graph only.
        MultigraphUnsupported => MultigraphUnsupported { .. } => "GRAPHGEN_MULTIGRAPH_UNSUPPORTED",
    }
}

impl GeneratorError {
    /// Classifies the error as a bad argument or an unsupported container.
    ///
    /// # Examples
    /// ```
    /// use graphgen_core::{ErrorKind, GeneratorError};
    ///
    /// let error = GeneratorError::DirectedUnsupported { family: "star_graph" };
    /// assert_eq!(error.kind(), ErrorKind::UnsupportedVariant);
    /// ```
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::DirectedUnsupported { .. } | Self::MultigraphUnsupported { .. } => {
                ErrorKind::UnsupportedVariant
            }
            Self::CliqueTooSmall { .. }
            | Self::InvalidPartitionCount { .. }
            | Self::MixedBlockSpecs
            | Self::NoIndexIdentifiers { .. }
            | Self::DuplicateNode { .. }
            | Self::NodeCountOverflow { .. }
            | Self::KindMismatch { .. } => ErrorKind::InvalidArgument,
        }
    }
}

/// Convenient alias for results returned by the generators.
pub type Result<T> = core::result::Result<T, GeneratorError>;
