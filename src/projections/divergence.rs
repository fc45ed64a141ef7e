//! Block-diagonal divergence over a grid sequence.

use std::fmt;

use nalgebra_sparse::CsrMatrix;
use serde::{Deserialize, Serialize};

use crate::grid::{Grid, GridSequence};
use crate::ops_error::OpsError;
use crate::sparse;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DivergenceKind {
    #[default]
    Scalar,
    Vector,
}

/// Divergence over all grids of a sequence.
///
/// Holds no matrix: [`Divergence::assemble`] rebuilds it from the grids on
/// every call.
#[derive(Debug)]
pub struct Divergence<'a, G: Grid + ?Sized> {
    grids: GridSequence<'a, G>,
    kind: DivergenceKind,
}

impl<G: Grid + ?Sized> Clone for Divergence<'_, G> {
    fn clone(&self) -> Self {
        Self {
            grids: self.grids.clone(),
            kind: self.kind,
        }
    }
}

impl<'a, G: Grid + ?Sized> Divergence<'a, G> {
    pub fn new(grids: GridSequence<'a, G>, kind: DivergenceKind) -> Self {
        Self { grids, kind }
    }

    pub fn kind(&self) -> DivergenceKind {
        self.kind
    }

    pub fn grids(&self) -> &GridSequence<'a, G> {
        &self.grids
    }

    /// Global cells × global faces, one diagonal block per grid.
    pub fn assemble(&self) -> Result<CsrMatrix<f64>, OpsError> {
        let blocks = self
            .grids
            .iter()
            .map(|g| match self.kind {
                DivergenceKind::Scalar => Ok(g.scalar_divergence()),
                DivergenceKind::Vector => g.vector_divergence(),
            })
            .collect::<Result<Vec<_>, _>>()?;
        sparse::block_diag(&blocks)
    }

    /// Shape of [`Divergence::assemble`]'s result, without assembling it.
    pub fn shape(&self) -> (usize, usize) {
        self.grids.iter().fold((0, 0), |(m, n), g| {
            let b = match self.kind {
                DivergenceKind::Scalar => 1,
                DivergenceKind::Vector => g.dim(),
            };
            (m + g.num_cells() * b, n + g.cell_faces().nrows() * b)
        })
    }
}

impl<G: Grid + ?Sized> fmt::Display for Divergence<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.kind {
            DivergenceKind::Scalar => "scalar",
            DivergenceKind::Vector => "vector",
        };
        writeln!(f, "Divergence for {name} quantities on {} grids", self.grids.len())
    }
}
