//! Sparse operators tagged with the kind of quantity they transfer.
//!
//! Extensive quantities (fluxes) are summed when mapped, intensive ones
//! (pressures) are averaged. The tag is part of the type, so an extensive
//! projection cannot be passed where an intensive one is expected.

use std::fmt;
use std::marker::PhantomData;

use nalgebra_sparse::CsrMatrix;

pub trait QuantityKind: fmt::Debug + Copy + Send + Sync + 'static {
    const NAME: &'static str;
}

/// Conserved, flux-like quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extensive;

/// Pointwise quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intensive;

impl QuantityKind for Extensive {
    const NAME: &'static str = "extensive";
}

impl QuantityKind for Intensive {
    const NAME: &'static str = "intensive";
}

/// A global sparse projection for quantities of kind `K`.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection<K: QuantityKind> {
    matrix: CsrMatrix<f64>,
    _kind: PhantomData<K>,
}

pub type ExtensiveProjection = Projection<Extensive>;
pub type IntensiveProjection = Projection<Intensive>;

impl<K: QuantityKind> Projection<K> {
    pub(crate) fn new(matrix: CsrMatrix<f64>) -> Self {
        Self {
            matrix,
            _kind: PhantomData,
        }
    }

    #[inline]
    pub fn matrix(&self) -> &CsrMatrix<f64> {
        &self.matrix
    }

    pub fn into_matrix(self) -> CsrMatrix<f64> {
        self.matrix
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.matrix.nrows(), self.matrix.ncols())
    }

    #[inline]
    pub fn kind(&self) -> &'static str {
        K::NAME
    }
}
