//! Grid capability traits consumed by the partitioners and projection builders.
//!
//! Grids and mortar grids are owned by the caller; this crate only reads the
//! counts, the cell-face incidence and (for interfaces) the local mortar
//! projections. Reference implementations live in [`cartesian`] and
//! [`mortar`].

pub mod cartesian;
pub mod mixed;
pub mod mortar;
pub mod sequence;

use std::fmt;

use nalgebra_sparse::CsrMatrix;
use serde::{Deserialize, Serialize};

use crate::ops_error::OpsError;
use crate::sparse;

pub use cartesian::{CartGrid, PointGrid};
pub use mixed::{Interface, MixedDimGrid};
pub use mortar::WeightedMortarGrid;
pub use sequence::GridSequence;

/// Identity of a grid inside a collection.
///
/// All lookups by projection builders go through this id, never through the
/// grid's value or address.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridId(usize);

impl GridId {
    #[inline]
    pub const fn new(raw: usize) -> Self {
        GridId(raw)
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for GridId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Read-only view of a grid of a single topological dimension.
pub trait Grid {
    fn id(&self) -> GridId;

    /// Topological dimension, `0..=3`.
    fn dim(&self) -> usize;

    fn num_cells(&self) -> usize;

    fn num_faces(&self) -> usize;

    /// Signed face-cell incidence, `num_faces × num_cells`.
    fn cell_faces(&self) -> &CsrMatrix<f64>;

    /// Logical Cartesian extents, for structured grids only.
    fn cart_dims(&self) -> Option<&[usize]> {
        None
    }

    /// Scalar divergence, `num_cells × num_faces`.
    fn scalar_divergence(&self) -> CsrMatrix<f64> {
        self.cell_faces().transpose()
    }

    /// Vector divergence: the scalar divergence expanded block-contiguously
    /// by the grid dimension.
    fn vector_divergence(&self) -> Result<CsrMatrix<f64>, OpsError> {
        sparse::expand_blocks(&self.scalar_divergence(), self.dim())
    }
}

/// Read-only view of an interface grid between a primary grid (one dimension
/// higher) and a secondary grid (same dimension).
///
/// The `_int` maps are for extensive quantities (fluxes), the `_avg` maps for
/// intensive ones (pressures). Mortar-side shapes are `num_cells * nd`;
/// primary-side shapes use the primary grid's faces, secondary-side shapes the
/// secondary grid's cells.
pub trait MortarGrid {
    fn dim(&self) -> usize;

    fn num_cells(&self) -> usize;

    /// Number of sides, 1 or 2.
    fn num_sides(&self) -> usize;

    fn primary_to_mortar_int(&self, nd: usize) -> Result<CsrMatrix<f64>, OpsError>;
    fn primary_to_mortar_avg(&self, nd: usize) -> Result<CsrMatrix<f64>, OpsError>;
    fn mortar_to_primary_int(&self, nd: usize) -> Result<CsrMatrix<f64>, OpsError>;
    fn mortar_to_primary_avg(&self, nd: usize) -> Result<CsrMatrix<f64>, OpsError>;

    fn secondary_to_mortar_int(&self, nd: usize) -> Result<CsrMatrix<f64>, OpsError>;
    fn secondary_to_mortar_avg(&self, nd: usize) -> Result<CsrMatrix<f64>, OpsError>;
    fn mortar_to_secondary_int(&self, nd: usize) -> Result<CsrMatrix<f64>, OpsError>;
    fn mortar_to_secondary_avg(&self, nd: usize) -> Result<CsrMatrix<f64>, OpsError>;

    /// Diagonal `±1` matrix separating the two sides.
    fn sign_of_mortar_sides(&self, nd: usize) -> Result<CsrMatrix<f64>, OpsError>;
}
