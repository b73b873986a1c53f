//! Error types for the minspan core library.
//!
//! Defines the error enum exposed by the public API, its stable
//! machine-readable codes, and a convenient result alias.

use thiserror::Error;

/// An error produced by graph, disjoint-set, or spanning-forest operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    /// Backing storage for a new structure could not be allocated.
    #[error("could not allocate storage for {requested} elements")]
    OutOfMemory {
        /// Number of elements the failed reservation asked for.
        requested: usize,
    },
    /// A vertex index was outside the graph's vertex range.
    #[error("vertex {vertex} is out of bounds for a graph of {vertex_count} vertices")]
    VertexOutOfBounds {
        /// The offending vertex index.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// An object index was outside the disjoint-set's object range.
    #[error("object {object} is out of bounds for a disjoint set of {object_count} objects")]
    ObjectOutOfBounds {
        /// The offending object index.
        object: usize,
        /// Number of objects tracked by the disjoint set.
        object_count: usize,
    },
    /// An edge weight was NaN or negative infinity.
    ///
    /// Positive infinity is reserved as the "no edge" sentinel and removes
    /// an edge instead of storing a weight.
    #[error("edge ({u}, {v}) was given a non-finite weight")]
    NonFiniteWeight {
        /// The smaller endpoint (as provided).
        u: usize,
        /// The larger endpoint (as provided).
        v: usize,
    },
}

impl Error {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::OutOfMemory { .. } => ErrorCode::OutOfMemory,
            Self::VertexOutOfBounds { .. } => ErrorCode::VertexOutOfBounds,
            Self::ObjectOutOfBounds { .. } => ErrorCode::ObjectOutOfBounds,
            Self::NonFiniteWeight { .. } => ErrorCode::NonFiniteWeight,
        }
    }
}

/// Machine-readable error codes for [`Error`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorCode {
    /// Backing storage could not be allocated.
    OutOfMemory,
    /// A vertex index was outside the graph's vertex range.
    VertexOutOfBounds,
    /// An object index was outside the disjoint-set's object range.
    ObjectOutOfBounds,
    /// An edge weight was NaN or negative infinity.
    NonFiniteWeight,
}

impl ErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OutOfMemory => "MINSPAN_OUT_OF_MEMORY",
            Self::VertexOutOfBounds => "MINSPAN_VERTEX_OUT_OF_BOUNDS",
            Self::ObjectOutOfBounds => "MINSPAN_OBJECT_OUT_OF_BOUNDS",
            Self::NonFiniteWeight => "MINSPAN_NON_FINITE_WEIGHT",
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, Error>;
