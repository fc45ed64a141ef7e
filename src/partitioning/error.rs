//! Partitioning errors.

use thiserror::Error;

/// Boxed error returned by an external partitioning oracle.
pub type OracleError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors from the coarse-dimension search and the structured/graph partitioners.
#[derive(Debug, Error)]
pub enum PartitionError {
    /// Neither coarse dimensions nor a number of coarse cells were given.
    #[error("either coarse dimensions or a number of coarse cells must be specified")]
    MissingCoarseShape,
    /// Coarse dimensions do not fit the fine grid.
    #[error("invalid coarse dimensions {coarse:?} for fine dimensions {fine:?}")]
    InvalidCoarseDims { coarse: Vec<usize>, fine: Vec<usize> },
    /// Fine extents were empty or contained a zero.
    #[error("invalid fine dimensions {0:?}: every extent must be positive")]
    InvalidFineDims(Vec<usize>),
    /// Structured partitioning requested for a grid without Cartesian extents.
    #[error("grid has no logical Cartesian dimensions")]
    MissingCartDims,
    /// The coarse-dimension search ran past its iteration bound.
    #[error("coarse-dimension search exceeded {0} iterations")]
    IterationLimit(usize),
    /// The external partitioning oracle failed.
    #[error("graph partitioner failed: {0}")]
    Oracle(#[source] OracleError),
    /// The oracle returned a label vector of the wrong length.
    #[error("graph partitioner returned {found} labels for {expected} cells")]
    MalformedOracleOutput { expected: usize, found: usize },
}
