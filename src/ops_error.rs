//! OpsError: unified error type for grid sequences and projection operators.
//!
//! Every constructor in [`crate::projections`] and [`crate::grid`] reports
//! failures through this type instead of panicking.

use thiserror::Error;

use crate::grid::GridId;

/// Errors raised while assembling projection operators.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OpsError {
    /// The grid is not part of the sequence the operator was built from.
    #[error("grid {0} is not part of this grid sequence")]
    UnknownGrid(GridId),
    /// Grid construction input is inconsistent.
    #[error("invalid grid: {0}")]
    InvalidGrid(String),
    /// The same grid appeared twice in an ordered grid sequence.
    #[error("grid {0} appears more than once in the grid sequence")]
    DuplicateGrid(GridId),
    /// Block size (number of dofs per cell/face) must be at least one.
    #[error("invalid block size {0}: must be at least 1")]
    InvalidBlockSize(usize),
    /// Interface whose primary/secondary dimensions do not bracket the mortar.
    #[error(
        "unsupported interface: primary dim {primary_dim}, secondary dim {secondary_dim}, \
         mortar dim {mortar_dim} (expected primary = mortar + 1 = secondary + 1)"
    )]
    UnsupportedInterface {
        primary_dim: usize,
        secondary_dim: usize,
        mortar_dim: usize,
    },
    /// Trace operators are only available for scalar quantities.
    #[error("trace operator for block size {0} is not implemented (scalar only)")]
    VectorTraceUnsupported(usize),
    /// A grid has no boundary values stored under the requested keyword.
    #[error("no boundary values stored for grid {grid} under keyword `{keyword}`")]
    MissingBoundaryValues { grid: GridId, keyword: String },
    /// Two sparse blocks cannot be composed or stacked.
    #[error("shape mismatch in {context}: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        context: &'static str,
        expected: (usize, usize),
        found: (usize, usize),
    },
    /// Sparse triplet data rejected by `nalgebra_sparse`.
    #[error("invalid sparse data: {0}")]
    InvalidSparseData(String),
}

impl From<nalgebra_sparse::SparseFormatError> for OpsError {
    fn from(e: nalgebra_sparse::SparseFormatError) -> Self {
        OpsError::InvalidSparseData(e.to_string())
    }
}
